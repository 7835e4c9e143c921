//! Classify a synthetic face and optionally persist a calibration
//!
//! Usage: cargo run --example classify_face -- [config.json]

use cube_colors::{Color, ColorDetector, CubeColor, Region, ScanConfig};
use std::{env, path::Path, process};

fn sticker(color: Color) -> Region {
    vec![vec![color; 8]; 8]
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let config_path = args.get(1).map(Path::new);

    let mut config = match config_path {
        Some(path) if path.exists() => match ScanConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                process::exit(1);
            }
        },
        _ => ScanConfig::default(),
    };

    let mut detector = ColorDetector::new(&config);

    // A green-centered face under slightly warm light
    let mut regions = vec![sticker(Color::new(30, 200, 60)); 9];
    regions[0] = sticker(Color::new(20, 80, 220));
    regions[2] = sticker(Color::new(210, 210, 215));
    regions[8] = sticker(Color::new(10, 220, 230));

    match detector.classify_face(&regions) {
        Ok(letters) => {
            let face: String = letters.iter().map(|l| l.as_char()).collect();
            println!("Face: {}", face);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    // Calibrate orange from the top-left sticker and show the effect
    let warm_orange = Color::new(20, 80, 220);
    println!("Before calibration: {}", detector.closest(warm_orange).name());
    detector.calibrate_region(CubeColor::Orange, &regions[0]);
    println!("After calibration:  {}", detector.closest(warm_orange).name());

    if let Some(path) = config_path {
        config.store_palette(detector.reference_palette());
        if let Err(e) = config.to_json_file(path) {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
        eprintln!("Calibration saved to {}", path.display());
    }
}
