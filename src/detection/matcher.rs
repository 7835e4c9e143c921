//! Nearest reference color by CIEDE2000 distance
//!
//! Algorithm tag: `algo-nearest-reference-color`

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calibration::ReferencePalette;
use crate::color::{ColorConverter, CubeColor};
use crate::Color;

/// Classification of one sample against the reference palette
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Matched cube color
    pub name: CubeColor,
    /// Reference color of the match
    pub reference: Color,
    /// CIEDE2000 distance from the sample to `reference`
    pub distance: f32,
}

impl ClassificationResult {
    /// Result reported when classification fails: white at infinite distance
    pub fn fallback() -> Self {
        Self {
            name: CubeColor::White,
            reference: Color::new(255, 255, 255),
            distance: f32::INFINITY,
        }
    }
}

/// Outcome of matching a sample
#[derive(Debug, Clone, PartialEq)]
pub enum Match {
    /// Nearest reference color
    Found(ClassificationResult),
    /// Matching failed; `fallback` keeps a scan going
    Failed {
        fallback: ClassificationResult,
        reason: MatchFailure,
    },
}

/// Why a sample could not be matched
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchFailure {
    #[error("invalid distance {distance} to {name}")]
    InvalidDistance { name: CubeColor, distance: f32 },

    #[error("reference palette is empty")]
    EmptyPalette,
}

impl Match {
    /// The classification, or the fallback for a failed match
    pub fn result(&self) -> &ClassificationResult {
        match self {
            Match::Found(result) => result,
            Match::Failed { fallback, .. } => fallback,
        }
    }

    pub fn name(&self) -> CubeColor {
        self.result().name
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Match::Failed { .. })
    }
}

/// Matches samples to the closest reference color
#[derive(Debug, Clone, Copy, Default)]
pub struct PerceptualColorMatcher {
    converter: ColorConverter,
}

impl PerceptualColorMatcher {
    pub fn new() -> Self {
        Self {
            converter: ColorConverter::new(),
        }
    }

    /// Find the reference color closest to `sample`
    ///
    /// Entries are compared in classification order and only a strictly
    /// smaller distance replaces the current best, so ties go to the color
    /// listed first in [`CubeColor::ALL`].
    ///
    /// # Arguments
    ///
    /// * `sample` - Color in native channel order
    /// * `palette` - Reference palette to match against
    ///
    /// # Returns
    ///
    /// [`Match::Found`] with the nearest entry, or [`Match::Failed`] if a
    /// distance could not be computed
    pub fn closest(&self, sample: Color, palette: &ReferencePalette) -> Match {
        let lab = self.converter.to_perceptual(sample);

        let mut best: Option<ClassificationResult> = None;
        for (name, reference) in palette.iter() {
            let distance = self
                .converter
                .perceptual_distance(lab, self.converter.to_perceptual(reference));
            if !distance.is_finite() || distance < 0.0 {
                let reason = MatchFailure::InvalidDistance { name, distance };
                warn!("color detection error for {}: {}", sample, reason);
                return Match::Failed {
                    fallback: ClassificationResult::fallback(),
                    reason,
                };
            }
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(ClassificationResult {
                    name,
                    reference,
                    distance,
                });
            }
        }

        match best {
            Some(result) => {
                debug!("{} classified as {} ({:.2})", sample, result.name, result.distance);
                Match::Found(result)
            }
            None => Match::Failed {
                fallback: ClassificationResult::fallback(),
                reason: MatchFailure::EmptyPalette,
            },
        }
    }
}
