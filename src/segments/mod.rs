//! # Slope Segment Extraction
//!
//! Partitions an elevation profile into maximal contiguous runs of one slope
//! sign, then folds short "noise" segments into their neighbors so that only
//! meaningful climbs and descents remain.
//!
//! ## Pipeline
//! 1. Compute per-sample slope from distance/elevation ([`crate::slope`])
//! 2. Classify each slope into a ternary sign
//! 3. Scan sign transitions into segment boundaries
//! 4. Materialize one segment per boundary, adjacent segments sharing their
//!    boundary sample
//! 5. Merge short interruptions ([`merge_segments`])
//! 6. Select by sign and minimum size for presentation ([`select_segments`])

mod merge;
mod filter;

pub use merge::{merge_pair, merge_segments};
pub use filter::{segments_to_json, select_segments, SegmentSummary};

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};
use crate::slope::{calculate_slope, classify_signs, SlopeSign};

/// Minimum number of samples a track must have for extraction.
pub const MIN_SAMPLES: usize = 2;

/// A contiguous run of samples sharing one slope sign.
///
/// The first sample of a segment is the last sample of its predecessor; the
/// duplicated boundary sample is dropped again when segments are merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopeSegment {
    /// Cumulative distance of each sample, in kilometers
    pub distance: Vec<f64>,
    /// Elevation of each sample, in meters
    pub elevation: Vec<f64>,
    /// Percent grade at each sample
    pub slope: Vec<f64>,
    /// Sign of the run that produced this segment
    pub sign: SlopeSign,
}

impl SlopeSegment {
    /// Length of the segment in kilometers.
    pub fn size(&self) -> f64 {
        match (self.distance.last(), self.distance.first()) {
            (Some(last), Some(first)) => last - first,
            _ => 0.0,
        }
    }

    /// Distance covered between consecutive samples; the first delta is 0.
    fn distance_deltas(&self) -> Vec<f64> {
        let mut deltas = vec![0.0; self.distance.len()];
        for i in 1..self.distance.len() {
            deltas[i] = self.distance[i] - self.distance[i - 1];
        }
        deltas
    }

    /// Mean slope of the segment, weighted by the distance each sample covers.
    ///
    /// A segment whose samples all share one distance has no weight to
    /// average over and reports 0.
    pub fn mean_slope(&self) -> f64 {
        let deltas = self.distance_deltas();
        let total: f64 = deltas.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        let weighted: f64 = self.slope.iter().zip(&deltas).map(|(s, w)| s * w).sum();
        weighted / total
    }
}

/// Validate the input contract shared by every extraction entry point.
pub(crate) fn check_track(distance: &[f64], elevation: &[f64]) -> Result<()> {
    if distance.len() != elevation.len() {
        return Err(ProfileError::LengthMismatch {
            distance_len: distance.len(),
            elevation_len: elevation.len(),
        });
    }
    if distance.len() < MIN_SAMPLES {
        return Err(ProfileError::InsufficientSamples {
            sample_count: distance.len(),
            minimum_required: MIN_SAMPLES,
        });
    }
    Ok(())
}

/// Scan sign transitions into an ordered list of `(end_index, sign)` pairs.
///
/// A boundary ends at index `i` when the run of the current sign stops
/// continuing, detected with a one-element lookahead; the final index falls
/// back to comparing against its predecessor. The last sample is always
/// forced to be a boundary, which also covers the constant-sign track whose
/// scan finds no transition at all.
fn segment_boundaries(signs: &[SlopeSign]) -> Vec<(usize, SlopeSign)> {
    let n = signs.len();
    let mut boundaries: Vec<(usize, SlopeSign)> = Vec::new();

    for i in 1..n {
        let sign = signs[i];
        if i + 1 < n {
            if sign.as_int() * signs[i + 1].as_int() <= 0 && sign != signs[i + 1] {
                boundaries.push((i, sign));
            }
        } else if sign != signs[i - 1] {
            boundaries.push((i, sign));
        }
    }

    match boundaries.last() {
        Some(&(end, _)) if end == n - 1 => {}
        _ => boundaries.push((n - 1, signs[n - 1])),
    }

    boundaries
}

/// Materialize segments from boundary pairs.
///
/// Segment `k` spans sample indexes `[prev_end, end_k]` inclusive, so
/// adjacent segments share their boundary sample.
fn build_segments(
    distance: &[f64],
    elevation: &[f64],
    slope: &[f64],
    boundaries: &[(usize, SlopeSign)],
) -> Vec<SlopeSegment> {
    let mut segments = Vec::with_capacity(boundaries.len());
    let mut start = 0;
    for &(end, sign) in boundaries {
        segments.push(SlopeSegment {
            distance: distance[start..=end].to_vec(),
            elevation: elevation[start..=end].to_vec(),
            slope: slope[start..=end].to_vec(),
            sign,
        });
        start = end;
    }
    segments
}

/// Extract every raw slope segment of a track.
///
/// This is the unmerged view: every sign transition produces a boundary, so
/// GPS noise shows up as many short segments. Most callers want
/// [`merged_slope_segments`] or [`climb_segments`] instead.
pub fn all_slope_segments(distance: &[f64], elevation: &[f64]) -> Result<Vec<SlopeSegment>> {
    check_track(distance, elevation)?;

    let slope = calculate_slope(distance, elevation);
    let signs = classify_signs(&slope);
    let boundaries = segment_boundaries(&signs);

    Ok(build_segments(distance, elevation, &slope, &boundaries))
}

/// Extract slope segments and fold short interruptions into their neighbors.
pub fn merged_slope_segments(
    distance: &[f64],
    elevation: &[f64],
    merge_threshold: f64,
) -> Result<Vec<SlopeSegment>> {
    let segments = all_slope_segments(distance, elevation)?;
    merge_segments(segments, merge_threshold)
}

/// Extract the climbs of a track: merged positive segments longer than the
/// report threshold.
pub fn climb_segments(
    distance: &[f64],
    elevation: &[f64],
    config: &crate::ProfileConfig,
) -> Result<Vec<SlopeSegment>> {
    config.validate()?;
    let segments = merged_slope_segments(distance, elevation, config.merge_threshold)?;
    select_segments(&segments, Some(SlopeSign::Positive), config.report_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slope::SlopeSign::{Flat as F, Negative as N, Positive as P};

    fn reference_track() -> (Vec<f64>, Vec<f64>) {
        (
            vec![0.0, 1.0, 2.5, 3.0, 4.0, 5.0, 6.5, 7.0, 7.5, 9.0],
            vec![0.0, 100.0, 120.0, 120.0, 70.0, 40.0, 45.0, 44.0, 55.0, 60.0],
        )
    }

    fn boundaries_of(distance: &[f64], elevation: &[f64]) -> Vec<(usize, SlopeSign)> {
        let slope = calculate_slope(distance, elevation);
        segment_boundaries(&classify_signs(&slope))
    }

    #[test]
    fn test_segment_size_and_mean() {
        let distance = vec![0.0, 1.0, 2.5];
        let elevation = vec![0.0, 50.0, 100.0];
        let slope = calculate_slope(&distance, &elevation);
        let segment = SlopeSegment {
            distance,
            elevation,
            slope,
            sign: P,
        };
        assert_eq!(segment.size(), 2.5);
        assert_eq!(segment.distance_deltas(), vec![0.0, 1.0, 1.5]);
        assert!((segment.mean_slope() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_mean_slope_zero_span() {
        let segment = SlopeSegment {
            distance: vec![3.0, 3.0],
            elevation: vec![10.0, 20.0],
            slope: vec![0.0, 0.0],
            sign: F,
        };
        assert_eq!(segment.mean_slope(), 0.0);
    }

    #[test]
    fn test_boundaries_reference() {
        let (distance, elevation) = reference_track();
        let boundaries = boundaries_of(&distance, &elevation);
        assert_eq!(
            boundaries,
            vec![(2, P), (3, F), (5, N), (6, P), (7, N), (9, P)]
        );
    }

    #[test]
    fn test_boundaries_flat_plateau() {
        let boundaries = boundaries_of(
            &[0.0, 1.0, 2.0, 3.0, 4.0],
            &[0.0, 10.0, 10.0, 10.0, 0.0],
        );
        assert_eq!(boundaries, vec![(1, P), (3, F), (4, N)]);
    }

    #[test]
    fn test_boundaries_constant_sign() {
        // No transition at all: the forced final boundary is the only one.
        let boundaries = boundaries_of(&[0.0, 1.0, 2.0, 3.0], &[0.0, 10.0, 20.0, 30.0]);
        assert_eq!(boundaries, vec![(3, P)]);
    }

    #[test]
    fn test_extract_reference() {
        let (distance, elevation) = reference_track();
        let segments = all_slope_segments(&distance, &elevation).unwrap();

        assert_eq!(segments.len(), 6);
        assert_eq!(segments[0].size(), 2.5);
        assert_eq!(segments[5].size(), 2.0);
        assert!((segments[0].mean_slope() - 4.8).abs() < 0.01);
        assert!((segments[5].mean_slope() - 0.8).abs() < 0.01);

        let signs: Vec<SlopeSign> = segments.iter().map(|s| s.sign).collect();
        assert_eq!(signs, vec![P, F, N, P, N, P]);
    }

    #[test]
    fn test_extract_reconstructs_track() {
        let (distance, elevation) = reference_track();
        let segments = all_slope_segments(&distance, &elevation).unwrap();

        // Concatenating all segments, dropping the duplicated boundary sample
        // at each join, reproduces the original arrays exactly.
        let mut rebuilt_distance = segments[0].distance.clone();
        let mut rebuilt_elevation = segments[0].elevation.clone();
        for segment in &segments[1..] {
            assert_eq!(segment.distance[0], *rebuilt_distance.last().unwrap());
            rebuilt_distance.extend_from_slice(&segment.distance[1..]);
            rebuilt_elevation.extend_from_slice(&segment.elevation[1..]);
        }
        assert_eq!(rebuilt_distance, distance);
        assert_eq!(rebuilt_elevation, elevation);
    }

    #[test]
    fn test_extract_monotonic_ramp() {
        let distance: Vec<f64> = (0..11).map(|i| i as f64).collect();
        let elevation: Vec<f64> = (0..11).map(|i| (i * 100) as f64).collect();
        let segments = all_slope_segments(&distance, &elevation).unwrap();

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].sign, P);
        assert_eq!(segments[0].size(), 10.0);
        assert_eq!(segments[0].distance.len(), 11);
    }

    #[test]
    fn test_extract_all_flat() {
        let segments = all_slope_segments(&[0.0, 1.0, 2.0], &[50.0, 50.0, 50.0]).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].sign, F);
        assert_eq!(segments[0].size(), 2.0);
    }

    #[test]
    fn test_extract_rejects_short_input() {
        let err = all_slope_segments(&[0.0], &[10.0]).unwrap_err();
        assert!(matches!(
            err,
            crate::ProfileError::InsufficientSamples {
                sample_count: 1,
                minimum_required: 2,
            }
        ));
    }

    #[test]
    fn test_extract_rejects_mismatched_input() {
        let err = all_slope_segments(&[0.0, 1.0, 2.0], &[10.0, 20.0]).unwrap_err();
        assert!(matches!(err, crate::ProfileError::LengthMismatch { .. }));
    }
}
