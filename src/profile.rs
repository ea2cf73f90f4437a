//! Track profiles: a named track reduced to distance/elevation/slope arrays.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};
use crate::geo_utils::cumulative_distance_km;
use crate::segments::{self, SlopeSegment};
use crate::slope::calculate_slope;
use crate::ProfileConfig;

/// Elevation profile of one recorded track.
///
/// `distance` is cumulative kilometers from the start (first value 0,
/// non-decreasing), `elevation` is meters, `slope` is the per-sample percent
/// grade. All three arrays have equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackProfile {
    pub name: String,
    pub distance: Vec<f64>,
    pub elevation: Vec<f64>,
    pub slope: Vec<f64>,
}

impl TrackProfile {
    /// Build a profile from raw coordinates, in degrees, and elevations in
    /// meters.
    pub fn from_coordinates(
        name: &str,
        latitude: &[f64],
        longitude: &[f64],
        elevation: &[f64],
    ) -> Result<Self> {
        if latitude.len() != longitude.len() {
            return Err(ProfileError::TrackReadFailed {
                message: format!(
                    "latitude has {} samples but longitude has {}",
                    latitude.len(),
                    longitude.len()
                ),
            });
        }

        let distance = cumulative_distance_km(latitude, longitude);
        segments::check_track(&distance, elevation)?;
        let slope = calculate_slope(&distance, elevation);

        Ok(TrackProfile {
            name: name.to_string(),
            distance,
            elevation: elevation.to_vec(),
            slope,
        })
    }

    /// Read a profile from GPX data.
    ///
    /// All track segments of all tracks are flattened into one sample
    /// sequence. Every point must carry an elevation.
    pub fn from_gpx_reader<R: Read>(name: &str, reader: R) -> Result<Self> {
        let gpx = gpx::read(reader).map_err(|e| ProfileError::TrackReadFailed {
            message: e.to_string(),
        })?;

        let mut latitude = Vec::new();
        let mut longitude = Vec::new();
        let mut elevation = Vec::new();

        for track in &gpx.tracks {
            for segment in &track.segments {
                for point in &segment.points {
                    let ele = point.elevation.ok_or_else(|| ProfileError::TrackReadFailed {
                        message: format!(
                            "track point {} has no elevation",
                            latitude.len()
                        ),
                    })?;
                    latitude.push(point.point().y());
                    longitude.push(point.point().x());
                    elevation.push(ele);
                }
            }
        }

        let profile = Self::from_coordinates(name, &latitude, &longitude, &elevation)?;
        info!(
            "[Profile] loaded '{}': {} samples over {:.1} km",
            profile.name,
            profile.distance.len(),
            profile.max_distance()
        );
        Ok(profile)
    }

    /// Read a profile from a GPX file; the file stem becomes the name.
    pub fn from_gpx_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let file = File::open(path).map_err(|e| ProfileError::TrackReadFailed {
            message: format!("{}: {}", path.display(), e),
        })?;
        Self::from_gpx_reader(&name, BufReader::new(file))
    }

    /// Total distance of the track in kilometers.
    pub fn max_distance(&self) -> f64 {
        self.distance.iter().cloned().fold(0.0, f64::max)
    }

    /// Highest elevation of the track in meters.
    pub fn max_elevation(&self) -> f64 {
        self.elevation.iter().cloned().fold(f64::MIN, f64::max)
    }

    /// Elevation of the first sample at or beyond `target_km`, falling back
    /// to the last sample when the target lies past the end of the track.
    ///
    /// Used to anchor waypoint markers on the profile.
    pub fn closest_elevation(&self, target_km: f64) -> f64 {
        self.distance
            .iter()
            .position(|&d| d >= target_km)
            .map(|i| self.elevation[i])
            .unwrap_or_else(|| *self.elevation.last().unwrap_or(&0.0))
    }

    /// Raw (unmerged) slope segments of the profile.
    pub fn raw_segments(&self) -> Result<Vec<SlopeSegment>> {
        segments::all_slope_segments(&self.distance, &self.elevation)
    }

    /// Slope segments with short interruptions merged away.
    pub fn merged_segments(&self, merge_threshold: f64) -> Result<Vec<SlopeSegment>> {
        segments::merged_slope_segments(&self.distance, &self.elevation, merge_threshold)
    }

    /// Climbs of the profile: merged positive segments above the report
    /// threshold.
    pub fn climbs(&self, config: &ProfileConfig) -> Result<Vec<SlopeSegment>> {
        segments::climb_segments(&self.distance, &self.elevation, config)
    }
}
