//! # Climb Profile
//!
//! Elevation profile analysis and climb segment extraction for GPS tracks.
//!
//! This library provides:
//! - GPX track loading into distance/elevation/slope arrays
//! - Slope segment extraction with noise merging
//! - Climb selection and presentation helpers (palette, waypoints)
//!
//! ## Quick Start
//!
//! ```rust
//! use climb_profile::{climb_segments, ProfileConfig};
//!
//! let distance = vec![0.0, 1.0, 2.5, 3.0, 4.0, 5.0, 6.5, 7.0, 7.5, 9.0];
//! let elevation = vec![0.0, 100.0, 120.0, 120.0, 70.0, 40.0, 45.0, 44.0, 55.0, 60.0];
//!
//! let climbs = climb_segments(&distance, &elevation, &ProfileConfig::default()).unwrap();
//! assert_eq!(climbs.len(), 2);
//! for climb in &climbs {
//!     println!("{:.1} km at {:.1}%", climb.size(), climb.mean_slope());
//! }
//! ```
//!
//! The pipeline is `calculate_slope` → `classify_signs` →
//! `all_slope_segments` → `merge_segments` → `select_segments`; the
//! high-level entry points above run it end to end. Each call owns its input
//! arrays and segment list, so independent calls are safe from any number of
//! threads.

// Unified error handling
pub mod error;
pub use error::{ProfileError, Result};

// Geographic utilities (great-circle distance accumulation)
pub mod geo_utils;

// Per-sample slope and sign classification
pub mod slope;
pub use slope::{calculate_slope, classify_signs, slope_between_points, SlopeSign};

// Segment extraction, merging and filtering
pub mod segments;
pub use segments::{
    all_slope_segments, climb_segments, merge_pair, merge_segments, merged_slope_segments,
    segments_to_json, select_segments, SegmentSummary, SlopeSegment,
};

// Track profiles (GPX loading)
pub mod profile;
pub use profile::TrackProfile;

// Remarkable points (waypoint annotations)
pub mod points;
pub use points::{read_remarkable_points, PointKind, RemarkablePoint};

// Presentation palette
pub mod palette;

/// Thresholds for segment merging and climb selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig {
    /// Minimum segment size in kilometers; shorter segments interrupting a
    /// climb or descent are folded into it. Default: 0.9
    pub merge_threshold: f64,

    /// Minimum size in kilometers for a segment to be reported as a climb.
    /// Default: 0.9
    pub report_threshold: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            merge_threshold: 0.9,
            report_threshold: 0.9,
        }
    }
}

impl ProfileConfig {
    /// Check that both thresholds are positive.
    pub fn validate(&self) -> Result<()> {
        if !(self.merge_threshold > 0.0) {
            return Err(ProfileError::InvalidThreshold {
                value: self.merge_threshold,
            });
        }
        if !(self.report_threshold > 0.0) {
            return Err(ProfileError::InvalidThreshold {
                value: self.report_threshold,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ProfileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_thresholds() {
        let config = ProfileConfig {
            merge_threshold: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ProfileError::InvalidThreshold { value }) if value == 0.0
        ));

        let config = ProfileConfig {
            report_threshold: -2.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_end_to_end_pipeline() {
        let distance = vec![0.0, 1.0, 2.5, 3.0, 4.0, 4.5, 5.0, 6.5, 7.0, 7.5, 9.0];
        let elevation = vec![0.0, 100.0, 120.0, 120.0, 70.0, 75.0, 40.0, 45.0, 44.0, 55.0, 60.0];

        let climbs = climb_segments(&distance, &elevation, &ProfileConfig::default()).unwrap();
        assert_eq!(climbs.len(), 2);
        assert_eq!(climbs[0].size(), 2.5);
        assert!((climbs[0].mean_slope() - 4.8).abs() < 0.01);
        assert_eq!(climbs[1].size(), 4.0);

        let json = segments_to_json(&climbs);
        assert!(json.contains("Positive"));
    }

    #[test]
    fn test_climb_segments_rejects_bad_config() {
        let config = ProfileConfig {
            merge_threshold: -1.0,
            ..Default::default()
        };
        let result = climb_segments(&[0.0, 1.0], &[0.0, 10.0], &config);
        assert!(matches!(result, Err(ProfileError::InvalidThreshold { .. })));
    }
}
