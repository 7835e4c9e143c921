//! Error types for the cube_colors library

use thiserror::Error;

use crate::constants::exit_codes;
use crate::notation::NotationLetter;

/// Result type alias for cube_colors operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Failures reported by the external cube solver.
///
/// Both kinds come from the solver's response; they are kept apart because the
/// remedy differs (recalibrate and rescan vs. nothing to do).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The accumulated state string does not describe a valid cube
    #[error("Scanned state does not describe a valid cube")]
    InvalidState,

    /// The cube is already in the solved state
    #[error("Cube is already solved")]
    AlreadySolved,
}

impl SolveError {
    /// Process exit code associated with this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            SolveError::InvalidState => exit_codes::INCORRECTLY_SCANNED,
            SolveError::AlreadySolved => exit_codes::ALREADY_SOLVED,
        }
    }
}

/// Error types for calibration, configuration and scan assembly
#[derive(Error, Debug)]
pub enum ScanError {
    /// Color name outside the six canonical cube colors
    #[error("Unknown cube color name: {name:?}")]
    UnknownColorName { name: String },

    /// Color value does not have exactly three channels
    #[error("Malformed color for {name}: expected 3 channels, got {len}")]
    MalformedColor { name: String, len: usize },

    /// Channel value outside [0, 255]
    #[error("Channel {channel} of {name} out of range: {value} (expected 0-255)")]
    ChannelOutOfRange {
        name: String,
        channel: usize,
        value: i64,
    },

    /// A face was submitted with the wrong number of sticker regions
    #[error("Invalid face: {reason}")]
    InvalidFace { reason: String },

    /// State string requested before every face was scanned
    #[error("Scan incomplete, missing faces: {}", format_letters(missing))]
    IncompleteScan { missing: Vec<NotationLetter> },

    /// Configuration could not be read or written
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failure relayed from the external solver
    #[error(transparent)]
    Solver(#[from] SolveError),
}

fn format_letters(letters: &[NotationLetter]) -> String {
    letters.iter().map(|l| l.as_char()).collect()
}

impl ScanError {
    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if the scan can continue after this error
    ///
    /// Calibration and configuration errors must be corrected first; an
    /// incomplete scan only needs the missing faces.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ScanError::IncompleteScan { .. } | ScanError::InvalidFace { .. }
        )
    }

    /// Exit code for errors that terminate a run
    ///
    /// Only solver-layer outcomes carry a code. An incomplete scan is reported
    /// the same way as an invalid state since the solver would reject it.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ScanError::Solver(e) => Some(e.exit_code()),
            ScanError::IncompleteScan { .. } => Some(exit_codes::INCORRECTLY_SCANNED),
            _ => None,
        }
    }
}
