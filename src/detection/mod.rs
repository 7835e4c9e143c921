//! Sticker classification against the reference palette
//!
//! [`ColorDetector`] owns the palettes and the extractor and is the value a
//! scan loop holds on to. It is constructed once at startup and passed to
//! whatever drives scanning and calibration.

pub mod lookup;
pub mod matcher;
pub mod shared;

pub use lookup::ExactColorLookup;
pub use matcher::{ClassificationResult, Match, MatchFailure, PerceptualColorMatcher};
pub use shared::SharedColorDetector;

use log::{debug, warn};

use crate::calibration::{DisplayPalette, ReferencePalette};
use crate::color::{CubeColor, DominantColorExtractor, Extraction, Region};
use crate::config::{PaletteEntries, ScanConfig};
use crate::constants::cube;
use crate::notation::NotationLetter;
use crate::{Color, Result, ScanError};

/// What happened to one sticker region during classification
///
/// The letter is always available so a scan can go on, while
/// [`StickerReading::is_failure`] tells the caller the sticker should be
/// rescanned.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerReading {
    /// Dominant color extraction outcome
    pub extraction: Extraction,
    /// Match of the extracted color, or of the placeholder
    pub classification: Match,
}

impl StickerReading {
    pub fn letter(&self) -> NotationLetter {
        self.classification.name().into()
    }

    /// Whether extraction or matching fell back instead of succeeding
    pub fn is_failure(&self) -> bool {
        !self.extraction.is_dominant() || self.classification.is_failure()
    }
}

/// Classifies sticker regions and applies calibration
#[derive(Debug, Clone)]
pub struct ColorDetector {
    reference: ReferencePalette,
    display: DisplayPalette,
    extractor: DominantColorExtractor,
    matcher: PerceptualColorMatcher,
}

impl ColorDetector {
    /// Create a detector from configuration
    ///
    /// Falls back to the built-in reference palette when the configured one is
    /// missing or malformed.
    pub fn new(config: &ScanConfig) -> Self {
        Self::with_parts(
            ReferencePalette::initialize(config.cube_palette.as_ref()),
            DominantColorExtractor::from_config(&config.extraction),
        )
    }

    /// Create a detector from an explicit palette and extractor
    pub fn with_parts(reference: ReferencePalette, extractor: DominantColorExtractor) -> Self {
        Self {
            reference,
            display: DisplayPalette::default(),
            extractor,
            matcher: PerceptualColorMatcher::new(),
        }
    }

    pub fn reference_palette(&self) -> &ReferencePalette {
        &self.reference
    }

    pub fn display_palette(&self) -> &DisplayPalette {
        &self.display
    }

    /// Dominant color of a sticker region
    pub fn dominant_color<R: AsRef<[Color]>>(&self, region: &[R]) -> Extraction {
        self.extractor.extract(region)
    }

    /// Closest reference color to a sample
    pub fn closest(&self, sample: Color) -> Match {
        self.matcher.closest(sample, &self.reference)
    }

    /// Display color for a previously classified sample, or the placeholder
    pub fn prominent_color(&self, sample: Color) -> Color {
        ExactColorLookup::exact_match(sample, &self.reference, &self.display)
    }

    /// Notation letter for a sample
    pub fn notation(&self, sample: Color) -> NotationLetter {
        self.closest(sample).name().into()
    }

    /// Extract and match one sticker region, keeping both outcomes
    ///
    /// A region that yields no color is matched as the placeholder, so the
    /// reading still carries a letter.
    pub fn read_region<R: AsRef<[Color]>>(&self, region: &[R]) -> StickerReading {
        let extraction = self.dominant_color(region);
        if !extraction.is_dominant() {
            warn!("sticker region yielded no color: {:?}", extraction);
        }
        let classification = self.closest(extraction.color());
        StickerReading {
            extraction,
            classification,
        }
    }

    /// Notation letter for a sticker region
    pub fn classify_region<R: AsRef<[Color]>>(&self, region: &[R]) -> NotationLetter {
        self.read_region(region).letter()
    }

    /// Readings for the nine stickers of one face, row-major
    ///
    /// # Errors
    ///
    /// Returns `ScanError::InvalidFace` if `regions` does not hold exactly nine
    /// regions.
    pub fn read_face(&self, regions: &[Region]) -> Result<Vec<StickerReading>> {
        if regions.len() != cube::STICKERS_PER_FACE {
            return Err(ScanError::InvalidFace {
                reason: format!(
                    "expected {} sticker regions, got {}",
                    cube::STICKERS_PER_FACE,
                    regions.len()
                ),
            });
        }

        let readings: Vec<StickerReading> = regions
            .iter()
            .map(|region| self.read_region(region.as_slice()))
            .collect();
        debug!(
            "face classified as {} ({} failed)",
            readings.iter().map(|r| r.letter().as_char()).collect::<String>(),
            readings.iter().filter(|r| r.is_failure()).count()
        );
        Ok(readings)
    }

    /// Notation letters for the nine stickers of one face, row-major
    ///
    /// Use [`ColorDetector::read_face`] to find out which stickers fell back.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::InvalidFace` if `regions` does not hold exactly nine
    /// regions.
    pub fn classify_face(&self, regions: &[Region]) -> Result<[NotationLetter; 9]> {
        let readings = self.read_face(regions)?;
        let mut letters = [NotationLetter::Front; 9];
        for (letter, reading) in letters.iter_mut().zip(&readings) {
            *letter = reading.letter();
        }
        Ok(letters)
    }

    /// Replace the reference color of one cube color
    pub fn calibrate(&mut self, face: CubeColor, color: Color) {
        self.reference.calibrate([(face, color)]);
    }

    /// Calibrate a face from its sticker region
    ///
    /// Returns the extraction outcome. The palette is only written when a
    /// dominant color was actually extracted.
    pub fn calibrate_region<R: AsRef<[Color]>>(&mut self, face: CubeColor, region: &[R]) -> Extraction {
        let extraction = self.dominant_color(region);
        match extraction {
            Extraction::Dominant(color) => self.calibrate(face, color),
            _ => warn!("calibration of {} skipped: {:?}", face, extraction),
        }
        extraction
    }

    /// Replace reference colors from unvalidated name/value pairs
    ///
    /// # Errors
    ///
    /// Returns `ScanError` if a name or value is invalid; the palette is then
    /// left unchanged.
    pub fn calibrate_entries(&mut self, updates: &PaletteEntries) -> Result<()> {
        self.reference.calibrate_entries(updates)
    }
}

impl Default for ColorDetector {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}
