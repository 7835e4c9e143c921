//! Dominant color extraction from sticker regions
//!
//! Reduces a region of pixels to one representative color with k-means:
//! - Flatten the region to a list of samples
//! - Run k-means from several independent random seeds, keep the most
//!   compact run (lowest summed squared distance to its centers)
//! - Take the most populated center, rounded to integer channels
//!
//! Clustering runs on raw channel values (0-255), so the convergence
//! threshold is a center movement in channel units. `kmeans_colors` compares
//! it against the squared movement, so it is squared before the call.
//!
//! Extraction never returns an error. Empty regions and clustering failures
//! are reported through [`Extraction`] and resolve to the placeholder color.
//!
//! Algorithm tag: `algo-dominant-color-kmeans`

use kmeans_colors::{get_kmeans, Kmeans};
use log::{debug, warn};
use palette::Srgb;
use thiserror::Error;

use crate::config::ExtractionConfig;
use crate::constants::{clustering, COLOR_PLACEHOLDER};
use crate::Color;

/// A sticker region as rows of pixels
pub type Region = Vec<Vec<Color>>;

/// Outcome of extracting the dominant color of a region
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// Representative color of the region
    Dominant(Color),
    /// The region had no pixels
    EmptyRegion,
    /// Clustering did not produce a usable center
    Failed { reason: ExtractionFailure },
}

/// Why clustering produced no dominant color
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionFailure {
    #[error("no clustering attempts configured")]
    NoAttempts,

    #[error("k-means produced no centers")]
    NoCenters,

    #[error("non-finite cluster center channel: {value}")]
    NonFiniteCenter { value: f32 },
}

impl Extraction {
    /// Extracted color, or the placeholder when extraction did not succeed
    pub fn color(&self) -> Color {
        match self {
            Extraction::Dominant(color) => *color,
            Extraction::EmptyRegion | Extraction::Failed { .. } => COLOR_PLACEHOLDER,
        }
    }

    /// Whether a real color was extracted
    pub fn is_dominant(&self) -> bool {
        matches!(self, Extraction::Dominant(_))
    }
}

/// Dominant color extractor backed by k-means clustering
#[derive(Debug, Clone)]
pub struct DominantColorExtractor {
    clusters: usize,
    max_iterations: usize,
    convergence: f32,
    attempts: usize,
    seed: u64,
}

impl Default for DominantColorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DominantColorExtractor {
    /// Create an extractor with default parameters and a random seed
    pub fn new() -> Self {
        Self::with_params(
            clustering::MAX_ITERATIONS,
            clustering::CONVERGENCE,
            clustering::ATTEMPTS,
            rand::random(),
        )
    }

    /// Create an extractor with custom parameters
    ///
    /// Attempt `i` is seeded with `seed + i`.
    pub fn with_params(max_iterations: usize, convergence: f32, attempts: usize, seed: u64) -> Self {
        Self {
            clusters: clustering::CLUSTERS,
            max_iterations,
            convergence,
            attempts,
            seed,
        }
    }

    /// Create an extractor from configuration, with a random seed
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::with_params(
            config.max_iterations,
            config.convergence,
            config.attempts,
            rand::random(),
        )
    }

    /// Extract the dominant color of a region given as rows of pixels
    ///
    /// # Arguments
    ///
    /// * `region` - Rows of pixels; rows may differ in length
    ///
    /// # Returns
    ///
    /// [`Extraction::Dominant`] on success, otherwise a variant describing why
    /// no color was produced
    pub fn extract<R: AsRef<[Color]>>(&self, region: &[R]) -> Extraction {
        let pixels: Vec<Color> = region
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        self.extract_pixels(&pixels)
    }

    /// Extract the dominant color of a flat list of pixels
    pub fn extract_pixels(&self, pixels: &[Color]) -> Extraction {
        if pixels.is_empty() {
            return Extraction::EmptyRegion;
        }

        let samples: Vec<Srgb<f32>> = pixels
            .iter()
            .map(|p| {
                let [b, g, r] = p.channels();
                Srgb::new(f32::from(r), f32::from(g), f32::from(b))
            })
            .collect();

        match self.cluster(&samples) {
            Ok(color) => {
                debug!("dominant color {} from {} pixels", color, pixels.len());
                Extraction::Dominant(color)
            }
            Err(reason) => {
                warn!("dominant color detection failed: {}", reason);
                Extraction::Failed { reason }
            }
        }
    }

    /// Run k-means from every seed and return the most populated center
    fn cluster(&self, samples: &[Srgb<f32>]) -> Result<Color, ExtractionFailure> {
        if self.attempts == 0 {
            return Err(ExtractionFailure::NoAttempts);
        }

        let converge = self.convergence * self.convergence;
        let mut best: Option<(f32, Kmeans<Srgb<f32>>)> = None;
        for attempt in 0..self.attempts {
            let run = get_kmeans(
                self.clusters,
                self.max_iterations,
                converge,
                false,
                samples,
                self.seed.wrapping_add(attempt as u64),
            );
            let compactness = inertia(samples, &run.centroids, &run.indices);
            if best.as_ref().map_or(true, |(b, _)| compactness < *b) {
                best = Some((compactness, run));
            }
        }
        let (_, best) = best.ok_or(ExtractionFailure::NoCenters)?;

        let mut counts = vec![0usize; best.centroids.len()];
        for &index in &best.indices {
            if let Some(count) = counts.get_mut(usize::from(index)) {
                *count += 1;
            }
        }
        let dominant = counts
            .iter()
            .enumerate()
            .max_by_key(|&(_, count)| *count)
            .map(|(i, _)| i)
            .and_then(|i| best.centroids.get(i))
            .ok_or(ExtractionFailure::NoCenters)?;

        Ok(Color::new(
            to_channel(dominant.blue)?,
            to_channel(dominant.green)?,
            to_channel(dominant.red)?,
        ))
    }
}

/// Summed squared distance from each sample to its assigned center
fn inertia(samples: &[Srgb<f32>], centroids: &[Srgb<f32>], indices: &[u8]) -> f32 {
    samples
        .iter()
        .zip(indices)
        .map(|(sample, &index)| match centroids.get(usize::from(index)) {
            Some(center) => {
                (sample.red - center.red).powi(2)
                    + (sample.green - center.green).powi(2)
                    + (sample.blue - center.blue).powi(2)
            }
            None => f32::INFINITY,
        })
        .sum()
}

fn to_channel(value: f32) -> Result<u8, ExtractionFailure> {
    if !value.is_finite() {
        return Err(ExtractionFailure::NonFiniteCenter { value });
    }
    Ok(value.round().clamp(0.0, 255.0) as u8)
}
