//! Unified error handling for the climb-profile library.
//!
//! This module provides a consistent error type for all profile operations,
//! replacing mixed error handling patterns (Option, panic, silent failures).

use std::fmt;

/// Unified error type for climb-profile operations.
#[derive(Debug, Clone)]
pub enum ProfileError {
    /// Track has too few samples for segment extraction
    InsufficientSamples {
        sample_count: usize,
        minimum_required: usize,
    },
    /// Distance and elevation arrays have different lengths
    LengthMismatch {
        distance_len: usize,
        elevation_len: usize,
    },
    /// A merge or report threshold is zero or negative
    InvalidThreshold { value: f64 },
    /// GPX track could not be read
    TrackReadFailed { message: String },
    /// Remarkable-points annotation file could not be read
    AnnotationReadFailed { message: String },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::InsufficientSamples {
                sample_count,
                minimum_required,
            } => {
                write!(
                    f,
                    "Track has {} samples, minimum {} required",
                    sample_count, minimum_required
                )
            }
            ProfileError::LengthMismatch {
                distance_len,
                elevation_len,
            } => {
                write!(
                    f,
                    "Distance has {} samples but elevation has {}",
                    distance_len, elevation_len
                )
            }
            ProfileError::InvalidThreshold { value } => {
                write!(f, "Threshold must be positive, got {}", value)
            }
            ProfileError::TrackReadFailed { message } => {
                write!(f, "Failed to read track: {}", message)
            }
            ProfileError::AnnotationReadFailed { message } => {
                write!(f, "Failed to read annotation file: {}", message)
            }
        }
    }
}

impl std::error::Error for ProfileError {}

/// Result type alias for climb-profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
