//! # Cube Colors
//!
//! Sticker color classification for camera-based Rubik's cube scanning.
//!
//! This library turns pixel regions sampled from each visible face into one
//! of six canonical cube colors, and from there into the face notation letters
//! an external solver consumes:
//! - Reducing each sticker region to a dominant color with k-means
//! - Matching that color to a calibrated reference palette by CIEDE2000 distance
//! - Translating color names to notation letters and assembling the state string
//! - Recalibrating reference colors for local lighting and camera conditions
//!
//! ## Example
//!
//! ```rust
//! use cube_colors::{Color, ColorDetector, CubeColor, NotationLetter, ScanConfig};
//!
//! let mut detector = ColorDetector::new(&ScanConfig::default());
//! let sample = Color::new(255, 0, 0);
//! assert_eq!(detector.closest(sample).name(), CubeColor::Blue);
//! assert_eq!(detector.notation(sample), NotationLetter::Back);
//!
//! detector.calibrate(CubeColor::Red, Color::new(20, 30, 200));
//! assert_eq!(detector.closest(Color::new(20, 30, 200)).name(), CubeColor::Red);
//! ```

use std::fmt;

use palette::Srgb;
use serde::{Deserialize, Serialize};

pub mod calibration;
pub mod color;
pub mod config;
pub mod constants;
pub mod detection;
pub mod error;
pub mod notation;
pub mod scan;
pub mod solver;

pub use calibration::{DisplayPalette, ReferencePalette};
pub use color::{
    ColorConverter, CubeColor, DominantColorExtractor, Extraction, ExtractionFailure, Region,
};
pub use config::{ExtractionConfig, PaletteEntries, ScanConfig};
pub use detection::{
    ClassificationResult, ColorDetector, ExactColorLookup, Match, MatchFailure,
    PerceptualColorMatcher, SharedColorDetector, StickerReading,
};
pub use error::{Result, ScanError, SolveError};
pub use notation::{to_notation, NotationLetter};
pub use scan::CubeStateBuilder;
pub use solver::{solve_scan, CubeSolver, Solution};

/// A color sample in native capture channel order (blue, green, red)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    /// Blue channel
    pub b: u8,
    /// Green channel
    pub g: u8,
    /// Red channel
    pub r: u8,
}

impl Color {
    /// Create a color from channels in native order
    pub const fn new(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }

    /// Channels in native order
    pub const fn channels(&self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    /// Validate an integer triple from configuration or calibration input
    ///
    /// # Arguments
    ///
    /// * `name` - Color name the value belongs to, used in error messages
    /// * `values` - Channel values in native order
    ///
    /// # Errors
    ///
    /// Returns `ScanError` if:
    /// - `values` does not hold exactly three channels
    /// - Any channel lies outside [0, 255]
    pub fn from_channels(name: &str, values: &[i64]) -> Result<Self> {
        let [b, g, r] = <[i64; 3]>::try_from(values).map_err(|_| ScanError::MalformedColor {
            name: name.to_string(),
            len: values.len(),
        })?;
        let channel = |index: usize, value: i64| {
            u8::try_from(value).map_err(|_| ScanError::ChannelOutOfRange {
                name: name.to_string(),
                channel: index,
                value,
            })
        };
        Ok(Self::new(channel(0, b)?, channel(1, g)?, channel(2, r)?))
    }

    /// The same color as an sRGB value
    pub fn to_srgb(&self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([b, g, r]: [u8; 3]) -> Self {
        Self::new(b, g, r)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.channels()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.b, self.g, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_serialization() {
        let color = Color::new(0, 165, 255);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "[0,165,255]");

        let deserialized: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(color, deserialized);
    }

    #[test]
    fn test_to_srgb_reorders_channels() {
        let srgb = Color::new(1, 2, 3).to_srgb();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (3, 2, 1));
    }

    #[test]
    fn test_from_channels() {
        assert_eq!(
            Color::from_channels("red", &[0, 0, 255]).unwrap(),
            Color::new(0, 0, 255)
        );
    }

    #[test]
    fn test_from_channels_wrong_length() {
        let err = Color::from_channels("red", &[0, 255]).unwrap_err();
        assert!(matches!(err, ScanError::MalformedColor { len: 2, .. }));
    }

    #[test]
    fn test_from_channels_out_of_range() {
        let err = Color::from_channels("blue", &[256, 0, 0]).unwrap_err();
        assert!(matches!(
            err,
            ScanError::ChannelOutOfRange { channel: 0, value: 256, .. }
        ));
        assert!(Color::from_channels("blue", &[0, -1, 0]).is_err());
    }
}
