//! Presentation palette: colors handed to the rendering collaborator.
//!
//! Slope colors are looked up by 2%-wide grade buckets; the mapping is
//! presentation policy, not part of the segment contract.

/// Main profile line color.
pub const COLOR_PROFILE: &str = "#353535";
/// Fill color under the whole profile.
pub const COLOR_FILL: &str = "#d9d9d9";
/// Horizontal grid line color.
pub const COLOR_GRID: &str = "#bfbfbf";

/// Start waypoint color.
pub const COLOR_START: &str = "#2e7d32";
/// Finish waypoint color.
pub const COLOR_FINISH: &str = "#c62828";
/// Intermediate waypoint color.
pub const COLOR_POINT: &str = "#455a64";

/// Fill colors per mean-slope bucket, from gentle to steep.
///
/// Bucket `k` covers grades `[2k, 2k+2)` percent; the last bucket absorbs
/// everything steeper.
pub const SLOPE_COLORS: &[&str] = &[
    "#8ae68a", // 0-2%
    "#ffd932", // 2-4%
    "#ffa03c", // 4-6%
    "#ff6b3c", // 6-8%
    "#e63232", // 8-10%
    "#b41e1e", // 10%+
];

/// Color for a segment's mean slope.
///
/// The bucket index is `floor(mean_slope / 2)` clamped to the palette bounds,
/// so descents map to the gentlest color and extreme grades to the steepest.
pub fn slope_color(mean_slope: f64) -> &'static str {
    let bucket = (mean_slope / 2.0).floor();
    let clamped = bucket.max(0.0).min((SLOPE_COLORS.len() - 1) as f64);
    SLOPE_COLORS[clamped as usize]
}
