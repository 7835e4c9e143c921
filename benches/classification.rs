use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cube_colors::{Color, ColorDetector, DominantColorExtractor, Region};

fn sticker(color: Color) -> Region {
    let mut region = vec![vec![color; 32]; 32];
    region[0][0] = Color::new(255, 255, 255);
    region[31][31] = Color::new(0, 0, 0);
    region
}

fn benchmark_extraction(c: &mut Criterion) {
    let extractor = DominantColorExtractor::with_params(200, 0.1, 10, 42);
    let region = sticker(Color::new(0, 160, 250));
    c.bench_function("dominant_color_32x32", |b| {
        b.iter(|| extractor.extract(black_box(&region)))
    });
}

fn benchmark_classification(c: &mut Criterion) {
    let detector = ColorDetector::default();
    c.bench_function("closest_reference_color", |b| {
        b.iter(|| detector.closest(black_box(Color::new(30, 120, 230))))
    });

    let face = vec![sticker(Color::new(0, 250, 10)); 9];
    c.bench_function("classify_face", |b| {
        b.iter(|| detector.classify_face(black_box(&face)))
    });
}

criterion_group!(benches, benchmark_extraction, benchmark_classification);
criterion_main!(benches);
