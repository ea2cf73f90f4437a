//! Remarkable points: named waypoints overlaid on a rendered profile.
//!
//! Points come from a row-oriented annotation file of
//! `distance label water` records, space-delimited with `|` quoting for
//! labels containing spaces. The file is independent of segment extraction;
//! a missing or malformed file is a skippable condition at the presentation
//! layer.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};
use crate::palette;

/// Position of a waypoint relative to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointKind {
    Start,
    Intermediate,
    Finish,
}

/// An annotated waypoint on the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemarkablePoint {
    /// Distance from the start, in kilometers
    pub distance: f64,
    /// Waypoint name
    pub label: String,
    /// Whether water is available at the waypoint
    pub has_water: bool,
}

impl RemarkablePoint {
    /// Classify the waypoint against the profile's total distance.
    pub fn kind(&self, max_distance: f64) -> PointKind {
        if self.distance == 0.0 {
            PointKind::Start
        } else if self.distance > max_distance {
            PointKind::Finish
        } else {
            PointKind::Intermediate
        }
    }

    /// Label text drawn next to the waypoint marker.
    pub fn display_text(&self, max_distance: f64) -> String {
        let prefix = match self.kind(max_distance) {
            PointKind::Start => "Start ",
            PointKind::Finish => "Finish ",
            PointKind::Intermediate => "",
        };
        let suffix = if self.has_water { " W" } else { "" };
        format!("{}{} - {}{}", prefix, self.distance as i64, self.label, suffix)
    }

    /// Marker color for the waypoint.
    pub fn color(&self, max_distance: f64) -> &'static str {
        match self.kind(max_distance) {
            PointKind::Start => palette::COLOR_START,
            PointKind::Finish => palette::COLOR_FINISH,
            PointKind::Intermediate => palette::COLOR_POINT,
        }
    }

    /// Start and finish labels are drawn bold.
    pub fn is_emphasized(&self, max_distance: f64) -> bool {
        self.kind(max_distance) != PointKind::Intermediate
    }
}

/// Read remarkable points from an annotation file.
pub fn read_remarkable_points<P: AsRef<Path>>(path: P) -> Result<Vec<RemarkablePoint>> {
    let file = File::open(path.as_ref()).map_err(|e| ProfileError::AnnotationReadFailed {
        message: format!("{}: {}", path.as_ref().display(), e),
    })?;
    remarkable_points_from_reader(file)
}

/// Read remarkable points from any byte source.
pub fn remarkable_points_from_reader<R: Read>(reader: R) -> Result<Vec<RemarkablePoint>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .quote(b'|')
        .from_reader(reader);

    let mut points = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| ProfileError::AnnotationReadFailed {
            message: format!("row {}: {}", row + 1, e),
        })?;
        points.push(parse_record(&record, row + 1)?);
    }
    Ok(points)
}

fn parse_record(record: &csv::StringRecord, row: usize) -> Result<RemarkablePoint> {
    let malformed = |what: &str| ProfileError::AnnotationReadFailed {
        message: format!("row {}: {}", row, what),
    };

    if record.len() != 3 {
        return Err(malformed(&format!("expected 3 fields, got {}", record.len())));
    }

    let distance: f64 = record[0]
        .parse()
        .map_err(|_| malformed(&format!("invalid distance '{}'", &record[0])))?;
    let water: i64 = record[2]
        .parse()
        .map_err(|_| malformed(&format!("invalid water flag '{}'", &record[2])))?;

    Ok(RemarkablePoint {
        distance,
        label: record[1].to_string(),
        has_water: water == 1,
    })
}
