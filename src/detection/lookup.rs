//! Exact reference lookup for re-rendering classified stickers
//!
//! Used for colors that were already classified and recorded verbatim. Unlike
//! [`PerceptualColorMatcher`](super::PerceptualColorMatcher), a near miss is
//! not a match.

use crate::calibration::{DisplayPalette, ReferencePalette};
use crate::color::CubeColor;
use crate::constants::COLOR_PLACEHOLDER;
use crate::Color;

/// Byte-for-byte lookup of a sample in the reference palette
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactColorLookup;

impl ExactColorLookup {
    /// First cube color, in classification order, whose reference equals `sample`
    pub fn find(sample: Color, palette: &ReferencePalette) -> Option<CubeColor> {
        palette
            .iter()
            .find(|&(_, reference)| reference == sample)
            .map(|(name, _)| name)
    }

    /// Display color for an exactly matching reference, or the placeholder
    pub fn exact_match(
        sample: Color,
        palette: &ReferencePalette,
        display: &DisplayPalette,
    ) -> Color {
        Self::find(sample, palette)
            .map(|name| display.get(name))
            .unwrap_or(COLOR_PLACEHOLDER)
    }
}
