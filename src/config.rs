//! Configuration for palette calibration and dominant color extraction.
//!
//! Configuration is a JSON file read once at startup and written back when a
//! calibration should persist:
//!
//! ```no_run
//! use cube_colors::{ReferencePalette, ScanConfig};
//! use std::path::Path;
//!
//! let path = Path::new("cube_colors.json");
//! let mut config = ScanConfig::from_json_file(path)?;
//! let palette = ReferencePalette::initialize(config.cube_palette.as_ref());
//!
//! config.store_palette(&palette);
//! config.to_json_file(path)?;
//! # Ok::<(), cube_colors::ScanError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - `cube_palette`: optional calibrated reference colors, color name to
//!   `[b, g, r]`. A section of the wrong shape is ignored with a warning so
//!   the rest of the file still loads.
//! - [`ExtractionConfig`]: k-means parameters for dominant color extraction

use std::collections::BTreeMap;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::calibration::ReferencePalette;
use crate::constants::clustering;
use crate::{Result, ScanError};

/// Color name to channel triple, as stored in configuration
pub type PaletteEntries = BTreeMap<String, Vec<i64>>;

/// Complete configuration for sticker scanning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Calibrated reference colors, if any have been saved
    #[serde(
        deserialize_with = "lenient_palette",
        skip_serializing_if = "Option::is_none"
    )]
    pub cube_palette: Option<PaletteEntries>,

    /// Dominant color extraction parameters
    pub extraction: ExtractionConfig,
}

/// K-means parameters for dominant color extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Iteration cap for one k-means run
    pub max_iterations: usize,

    /// Center movement threshold, as a distance in channel units
    pub convergence: f32,

    /// Independent random initializations
    pub attempts: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_iterations: clustering::MAX_ITERATIONS,
            convergence: clustering::CONVERGENCE,
            attempts: clustering::ATTEMPTS,
        }
    }
}

/// Read `cube_palette`, yielding `None` for anything that is not a map of
/// names to whole-number channel lists
fn lenient_palette<'de, D>(deserializer: D) -> std::result::Result<Option<PaletteEntries>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    let entries = palette_entries(&value);
    if entries.is_none() {
        warn!("ignoring malformed cube_palette: {}", value);
    }
    Ok(entries)
}

fn palette_entries(value: &Value) -> Option<PaletteEntries> {
    value
        .as_object()?
        .iter()
        .map(|(name, channels)| {
            let channels = channels
                .as_array()?
                .iter()
                .map(channel_value)
                .collect::<Option<Vec<i64>>>()?;
            Some((name.clone(), channels))
        })
        .collect()
}

/// Integer channel, accepting floats with no fractional part such as `255.0`
fn channel_value(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|v| v.fract() == 0.0 && v.abs() <= i32::MAX as f64)
            .map(|v| v as i64)
    })
}

impl ScanConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScanError::config(format!("cannot read {}", path.display()), e)
        })?;
        serde_json::from_str(&content)
            .map_err(|e| ScanError::config(format!("cannot parse {}", path.display()), e))
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ScanError::config("cannot serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| ScanError::config(format!("cannot write {}", path.display()), e))
    }

    /// Record a calibrated palette for the next save
    pub fn store_palette(&mut self, palette: &ReferencePalette) {
        self.cube_palette = Some(palette.to_entries());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, CubeColor};

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: ScanConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ScanConfig::default());
        assert!(config.cube_palette.is_none());
        assert_eq!(config.extraction.max_iterations, 200);
        assert_eq!(config.extraction.attempts, 10);
    }

    #[test]
    fn test_parse_palette_section() {
        let json = r#"{"cube_palette": {"red": [0, 0, 200], "blue": [190, 10, 5]}}"#;
        let config: ScanConfig = serde_json::from_str(json).unwrap();
        let palette = config.cube_palette.unwrap();
        assert_eq!(palette["red"], vec![0, 0, 200]);
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_whole_float_channels_accepted() {
        let json = r#"{"cube_palette": {"red": [0.0, 0, 255.0]}}"#;
        let config: ScanConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.cube_palette.unwrap()["red"], vec![0, 0, 255]);
    }

    #[test]
    fn test_malformed_palette_keeps_other_sections() {
        for palette in [
            r#"{"red": "x"}"#,
            r#"[1, 2]"#,
            r#"{"red": [0.5, 0, 255]}"#,
            r#"{"red": [0, null, 255]}"#,
            r#""red""#,
        ] {
            let json = format!(
                r#"{{"cube_palette": {}, "extraction": {{"attempts": 4}}}}"#,
                palette
            );
            let config: ScanConfig = serde_json::from_str(&json).unwrap();
            assert!(config.cube_palette.is_none(), "accepted {}", palette);
            assert_eq!(config.extraction.attempts, 4);
        }
    }

    #[test]
    fn test_null_palette_is_absent() {
        let config: ScanConfig = serde_json::from_str(r#"{"cube_palette": null}"#).unwrap();
        assert!(config.cube_palette.is_none());
    }

    #[test]
    fn test_partial_extraction_section() {
        let config: ScanConfig =
            serde_json::from_str(r#"{"extraction": {"attempts": 3}}"#).unwrap();
        assert_eq!(config.extraction.attempts, 3);
        assert_eq!(config.extraction.max_iterations, clustering::MAX_ITERATIONS);
    }

    #[test]
    fn test_store_palette() {
        let mut palette = ReferencePalette::default();
        palette.calibrate([(CubeColor::Green, Color::new(10, 200, 20))]);

        let mut config = ScanConfig::default();
        config.store_palette(&palette);

        let stored = config.cube_palette.as_ref().unwrap();
        assert_eq!(stored.len(), 6);
        assert_eq!(stored["green"], vec![10, 200, 20]);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ScanConfig::from_json_file(Path::new("/nonexistent/cube_colors.json"))
            .unwrap_err();
        assert!(matches!(err, ScanError::Config { .. }));
    }
}
