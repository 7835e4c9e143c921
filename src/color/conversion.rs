//! Color space conversion and perceptual distance
//!
//! Samples are converted from their native channel triple to sRGB, then
//! through linear light to CIE Lab (D65). Distances are CIEDE2000.
//!
//! CIEDE2000 is symmetric and zero for identical inputs but is not a metric:
//! the triangle inequality does not hold in general.
//!
//! Algorithm tag: `algo-ciede2000-distance`

use palette::color_difference::Ciede2000;
use palette::{FromColor, Lab, Srgb};

use crate::Color;

/// Perceptually uniform representation used only for distance computation
pub type PerceptualColor = Lab;

/// Converter between native color triples and Lab
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Convert a native color sample to Lab
    ///
    /// # Arguments
    ///
    /// * `color` - Color in native channel order
    ///
    /// # Returns
    ///
    /// Lab color under the D65 illuminant
    pub fn to_perceptual(&self, color: Color) -> PerceptualColor {
        let srgb: Srgb<f32> = color.to_srgb().into_format();
        Lab::from_color(srgb)
    }

    /// CIEDE2000 difference between two Lab colors
    pub fn perceptual_distance(&self, lab1: PerceptualColor, lab2: PerceptualColor) -> f32 {
        lab1.difference(lab2)
    }

    /// CIEDE2000 difference between two native color samples
    pub fn distance(&self, color1: Color, color2: Color) -> f32 {
        self.perceptual_distance(self.to_perceptual(color1), self.to_perceptual(color2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Color; 8] = [
        Color::new(0, 0, 0),
        Color::new(255, 255, 255),
        Color::new(0, 0, 255),
        Color::new(0, 165, 255),
        Color::new(255, 0, 0),
        Color::new(12, 200, 37),
        Color::new(90, 90, 91),
        Color::new(200, 10, 140),
    ];

    #[test]
    fn test_to_perceptual_black() {
        let converter = ColorConverter::new();
        let lab = converter.to_perceptual(Color::new(0, 0, 0));
        assert!(lab.l < 1.0);
    }

    #[test]
    fn test_to_perceptual_white() {
        let converter = ColorConverter::new();
        let lab = converter.to_perceptual(Color::new(255, 255, 255));
        assert!(lab.l > 99.0);
        assert!(lab.a.abs() < 1.0);
        assert!(lab.b.abs() < 1.0);
    }

    #[test]
    fn test_channel_order_is_native() {
        let converter = ColorConverter::new();
        // Blue in native order is (255, 0, 0); Lab b* should be strongly negative
        let blue = converter.to_perceptual(Color::new(255, 0, 0));
        assert!(blue.b < -50.0);

        let red = converter.to_perceptual(Color::new(0, 0, 255));
        assert!(red.a > 50.0);
    }

    #[test]
    fn test_distance_identity() {
        let converter = ColorConverter::new();
        for color in SAMPLES {
            assert!(converter.distance(color, color).abs() < 1e-4);
        }
    }

    #[test]
    fn test_distance_symmetry() {
        let converter = ColorConverter::new();
        for a in SAMPLES {
            for b in SAMPLES {
                let ab = converter.distance(a, b);
                let ba = converter.distance(b, a);
                assert!(ab >= 0.0);
                assert!((ab - ba).abs() < 1e-3, "{a} vs {b}: {ab} != {ba}");
            }
        }
    }

    #[test]
    fn test_distance_reference_pair() {
        // Sharma et al. test data, pair 1
        let converter = ColorConverter::new();
        let lab1 = Lab::new(50.0, 2.6772, -79.7751);
        let lab2 = Lab::new(50.0, 0.0, -82.7485);
        let delta = converter.perceptual_distance(lab1, lab2);
        assert!((delta - 2.0425).abs() < 1e-3);
    }

    #[test]
    fn test_distinct_colors_are_far_apart() {
        let converter = ColorConverter::new();
        let delta = converter.distance(Color::new(0, 0, 255), Color::new(0, 255, 0));
        assert!(delta > 50.0);
    }
}
