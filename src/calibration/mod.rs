//! Reference and display palettes
//!
//! The reference palette holds the colors samples are classified against and
//! is the only state calibration writes to. The display palette is fixed and
//! only used to render classified stickers.

pub mod display;
pub mod reference;

pub use display::DisplayPalette;
pub use reference::ReferencePalette;
