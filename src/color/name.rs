//! Canonical cube color names

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Result, ScanError};

/// One of the six sticker colors of a standard cube
///
/// The declaration order is the classification order: when two reference
/// colors are equally close to a sample, the one listed first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeColor {
    Red,
    Orange,
    Blue,
    Green,
    White,
    Yellow,
}

impl CubeColor {
    /// All six colors in classification order
    pub const ALL: [CubeColor; 6] = [
        CubeColor::Red,
        CubeColor::Orange,
        CubeColor::Blue,
        CubeColor::Green,
        CubeColor::White,
        CubeColor::Yellow,
    ];

    /// Position in [`CubeColor::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name as used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            CubeColor::Red => "red",
            CubeColor::Orange => "orange",
            CubeColor::Blue => "blue",
            CubeColor::Green => "green",
            CubeColor::White => "white",
            CubeColor::Yellow => "yellow",
        }
    }
}

impl fmt::Display for CubeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CubeColor {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        CubeColor::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ScanError::UnknownColorName {
                name: s.to_string(),
            })
    }
}
