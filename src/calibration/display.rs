//! Fixed colors for rendering classified stickers

use crate::color::CubeColor;
use crate::constants::defaults;
use crate::Color;

/// Render colors for the six cube colors, never changed at runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPalette {
    colors: [Color; 6],
}

impl Default for DisplayPalette {
    fn default() -> Self {
        Self {
            colors: defaults::DISPLAY_PALETTE,
        }
    }
}

impl DisplayPalette {
    /// Render color for a cube color
    pub fn get(&self, color: CubeColor) -> Color {
        self.colors[color.index()]
    }
}
