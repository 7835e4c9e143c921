//! Reference values and tuning constants for sticker classification
//!
//! All colors are in native capture channel order (blue, green, red).

use crate::Color;

/// Color used whenever a sample cannot be produced or matched
///
/// Mid grey is not a sticker color on a standard cube, but a real sample can
/// still read as exactly this value. Branch on [`crate::Extraction`] and
/// [`crate::Match`] to detect failures instead of comparing against it.
pub const COLOR_PLACEHOLDER: Color = Color::new(150, 150, 150);

/// Built-in palettes, listed in classification order
/// (red, orange, blue, green, white, yellow).
pub mod defaults {
    use crate::Color;

    /// Reference colors used when no calibrated palette is configured
    pub const REFERENCE_PALETTE: [Color; 6] = [
        Color::new(0, 0, 255),
        Color::new(0, 165, 255),
        Color::new(255, 0, 0),
        Color::new(0, 255, 0),
        Color::new(255, 255, 255),
        Color::new(0, 255, 255),
    ];

    /// Colors used to render classified stickers back to the user
    pub const DISPLAY_PALETTE: [Color; 6] = REFERENCE_PALETTE;
}

/// Dominant color clustering parameters
pub mod clustering {
    /// Number of cluster centers
    pub const CLUSTERS: usize = 1;

    /// Iteration cap for a single k-means run
    pub const MAX_ITERATIONS: usize = 200;

    /// Center movement below which a run is considered converged
    pub const CONVERGENCE: f32 = 0.1;

    /// Independent random initializations, best run kept
    pub const ATTEMPTS: usize = 10;
}

/// Cube geometry
pub mod cube {
    /// Faces on a cube
    pub const FACES: usize = 6;

    /// Stickers on one face of a 3x3x3 cube
    pub const STICKERS_PER_FACE: usize = 9;

    /// Index of the center sticker within a face, row-major
    pub const CENTER_STICKER: usize = 4;

    /// Length of a complete state string
    pub const STATE_LENGTH: usize = FACES * STICKERS_PER_FACE;
}

/// Process exit codes for solver-layer failures
pub mod exit_codes {
    /// The scanned state was not a valid cube
    pub const INCORRECTLY_SCANNED: i32 = 1;

    /// The cube was already solved
    pub const ALREADY_SOLVED: i32 = 2;
}
