//! Color names, color space math and dominant color extraction
//!
//! This module handles conversion of native samples to a perceptual space,
//! CIEDE2000 distances, and reduction of sticker regions to one color.

pub mod analysis;
pub mod conversion;
pub mod name;

pub use analysis::{DominantColorExtractor, Extraction, ExtractionFailure, Region};
pub use conversion::{ColorConverter, PerceptualColor};
pub use name::CubeColor;
