//! Selection of final segments for presentation.

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};
use crate::palette;
use crate::slope::SlopeSign;

use super::SlopeSegment;

/// Select segments by sign and minimum size, preserving order.
///
/// `sign` of `None` keeps every sign (the fully annotated profile view).
/// Only segments strictly longer than `min_size` are kept; the comparison is
/// on sign equality, never on slope magnitude. The input is not mutated.
pub fn select_segments(
    segments: &[SlopeSegment],
    sign: Option<SlopeSign>,
    min_size: f64,
) -> Result<Vec<SlopeSegment>> {
    if !(min_size > 0.0) {
        return Err(ProfileError::InvalidThreshold { value: min_size });
    }

    Ok(segments
        .iter()
        .filter(|segment| sign.map_or(true, |s| segment.sign == s))
        .filter(|segment| segment.size() > min_size)
        .cloned()
        .collect())
}

/// Renderer-facing view of one segment.
///
/// Carries the distance range, sign, weighted mean slope and the palette
/// color the rendering collaborator fills the segment with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSummary {
    pub start_km: f64,
    pub end_km: f64,
    pub size_km: f64,
    pub sign: SlopeSign,
    pub mean_slope: f64,
    pub color: String,
}

impl SegmentSummary {
    pub fn from_segment(segment: &SlopeSegment) -> Self {
        let mean_slope = segment.mean_slope();
        SegmentSummary {
            start_km: segment.distance.first().copied().unwrap_or(0.0),
            end_km: segment.distance.last().copied().unwrap_or(0.0),
            size_km: segment.size(),
            sign: segment.sign,
            mean_slope,
            color: palette::slope_color(mean_slope).to_string(),
        }
    }
}

/// Serialize a segment list as JSON summaries for a renderer.
pub fn segments_to_json(segments: &[SlopeSegment]) -> String {
    let summaries: Vec<SegmentSummary> = segments.iter().map(SegmentSummary::from_segment).collect();
    serde_json::to_string(&summaries).unwrap_or_else(|_| "[]".to_string())
}
