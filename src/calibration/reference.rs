//! Calibrated reference colors
//!
//! Holds exactly one color per cube color. Entries can be replaced through
//! calibration, but the set of names is fixed.
//!
//! No separation check is made between entries. Calibrating two faces to
//! nearly identical colors is allowed and will degrade classification.

use log::{debug, warn};

use crate::color::CubeColor;
use crate::config::PaletteEntries;
use crate::constants::defaults;
use crate::{Color, Result, ScanError};

/// Reference colors, one per cube color, in classification order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePalette {
    colors: [Color; 6],
}

impl Default for ReferencePalette {
    fn default() -> Self {
        Self {
            colors: defaults::REFERENCE_PALETTE,
        }
    }
}

impl ReferencePalette {
    /// Build the palette from an optional configured mapping
    ///
    /// Uses the configured mapping when it is well formed, otherwise falls back
    /// to the built-in defaults.
    pub fn initialize(configured: Option<&PaletteEntries>) -> Self {
        match configured {
            None => Self::default(),
            Some(entries) => Self::from_entries(entries).unwrap_or_else(|e| {
                warn!("configured cube palette rejected, using defaults: {}", e);
                Self::default()
            }),
        }
    }

    /// Build the palette from a complete mapping of names to channel triples
    ///
    /// # Errors
    ///
    /// Returns `ScanError` if:
    /// - A name is not one of the six cube colors
    /// - A value is not a valid channel triple
    /// - Any of the six cube colors is missing
    pub fn from_entries(entries: &PaletteEntries) -> Result<Self> {
        let mut colors: [Option<Color>; 6] = [None; 6];
        for (name, values) in entries {
            let cube_color: CubeColor = name.parse()?;
            colors[cube_color.index()] = Some(Color::from_channels(name, values)?);
        }

        let mut palette = Self::default();
        for cube_color in CubeColor::ALL {
            palette.colors[cube_color.index()] =
                colors[cube_color.index()].ok_or_else(|| ScanError::Config {
                    message: format!("cube palette has no entry for {}", cube_color),
                    source: None,
                })?;
        }
        Ok(palette)
    }

    /// Reference color for a cube color
    pub fn get(&self, color: CubeColor) -> Color {
        self.colors[color.index()]
    }

    /// Entries in classification order
    pub fn iter(&self) -> impl Iterator<Item = (CubeColor, Color)> + '_ {
        CubeColor::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Overwrite reference colors
    ///
    /// Colors not named in `updates` are left untouched.
    pub fn calibrate<I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = (CubeColor, Color)>,
    {
        for (cube_color, color) in updates {
            debug!(
                "calibrated {}: {} -> {}",
                cube_color,
                self.colors[cube_color.index()],
                color
            );
            self.colors[cube_color.index()] = color;
        }
    }

    /// Overwrite reference colors from unvalidated name/value pairs
    ///
    /// Every entry is validated before any is written, so a rejected update
    /// leaves the palette unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ScanError` if a name is not a cube color or a value is not a
    /// valid channel triple.
    pub fn calibrate_entries(&mut self, updates: &PaletteEntries) -> Result<()> {
        let validated = updates
            .iter()
            .map(|(name, values)| -> Result<(CubeColor, Color)> {
                Ok((name.parse()?, Color::from_channels(name, values)?))
            })
            .collect::<Result<Vec<_>>>()?;
        self.calibrate(validated);
        Ok(())
    }

    /// The palette as a configuration mapping
    pub fn to_entries(&self) -> PaletteEntries {
        self.iter()
            .map(|(cube_color, color)| {
                let values = color.channels().iter().map(|&c| i64::from(c)).collect();
                (cube_color.name().to_string(), values)
            })
            .collect()
    }
}
