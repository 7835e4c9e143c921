//! Detector shared between a scanning thread and a calibration handler
//!
//! Classification takes a read lock and calibration a write lock, so a
//! calibration never interleaves with a face being classified.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::calibration::ReferencePalette;
use crate::color::{CubeColor, Region};
use crate::config::PaletteEntries;
use crate::detection::{ColorDetector, Match, StickerReading};
use crate::notation::NotationLetter;
use crate::{Color, Result};

/// Cloneable handle to one [`ColorDetector`]
#[derive(Debug, Clone)]
pub struct SharedColorDetector {
    inner: Arc<RwLock<ColorDetector>>,
}

impl SharedColorDetector {
    pub fn new(detector: ColorDetector) -> Self {
        Self {
            inner: Arc::new(RwLock::new(detector)),
        }
    }

    pub fn closest(&self, sample: Color) -> Match {
        self.inner.read().closest(sample)
    }

    pub fn classify_face(&self, regions: &[Region]) -> Result<[NotationLetter; 9]> {
        self.inner.read().classify_face(regions)
    }

    pub fn read_face(&self, regions: &[Region]) -> Result<Vec<StickerReading>> {
        self.inner.read().read_face(regions)
    }

    pub fn calibrate(&self, face: CubeColor, color: Color) {
        self.inner.write().calibrate(face, color);
    }

    pub fn calibrate_entries(&self, updates: &PaletteEntries) -> Result<()> {
        self.inner.write().calibrate_entries(updates)
    }

    /// Copy of the current reference palette, e.g. for persisting
    pub fn palette_snapshot(&self) -> ReferencePalette {
        self.inner.read().reference_palette().clone()
    }
}
