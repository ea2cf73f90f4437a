//! Per-sample slope computation and ternary sign classification.
//!
//! Slope is expressed as a percent grade: elevation is in meters, distance in
//! kilometers, and the 0.1 factor converts the meters-per-kilometer ratio
//! into percent.

use serde::{Deserialize, Serialize};

/// Ternary classification of a slope value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlopeSign {
    Positive,
    Negative,
    Flat,
}

impl SlopeSign {
    /// Classify a single slope value.
    pub fn of(slope: f64) -> Self {
        if slope > 0.0 {
            SlopeSign::Positive
        } else if slope < 0.0 {
            SlopeSign::Negative
        } else {
            SlopeSign::Flat
        }
    }

    /// Integer form used by the boundary scan (`+1`, `-1`, `0`).
    pub(crate) fn as_int(self) -> i8 {
        match self {
            SlopeSign::Positive => 1,
            SlopeSign::Negative => -1,
            SlopeSign::Flat => 0,
        }
    }
}

/// Percent grade between two samples.
///
/// Returns 0 when the distance delta is zero or negative, which guards
/// division by zero and treats duplicate-distance samples as flat.
pub fn slope_between_points(dist1: f64, ele1: f64, dist2: f64, ele2: f64) -> f64 {
    let delta_dist = dist2 - dist1;
    let delta_ele = ele2 - ele1;
    if delta_dist > 0.0 {
        0.1 * delta_ele / delta_dist
    } else {
        0.0
    }
}

/// Per-sample slope over a whole track.
///
/// `slope[0]` is always 0 (no predecessor); `slope[i]` is the grade between
/// samples `i-1` and `i`. Both inputs are assumed equal length; callers
/// validate at the extraction boundary.
pub fn calculate_slope(distance: &[f64], elevation: &[f64]) -> Vec<f64> {
    let mut slope = vec![0.0; distance.len()];
    for i in 1..distance.len() {
        slope[i] = slope_between_points(distance[i - 1], elevation[i - 1], distance[i], elevation[i]);
    }
    slope
}

/// Classify every slope value of a track.
pub fn classify_signs(slope: &[f64]) -> Vec<SlopeSign> {
    slope.iter().map(|&s| SlopeSign::of(s)).collect()
}
