//! Iterative merging of short slope segments into their neighbors.
//!
//! A short segment interrupting an otherwise-long climb or descent is noise
//! in the recorded track, not terrain. Merging folds it into the surrounding
//! same-sign run: at a candidate index `i` of the pass's sign, either the
//! next segment is shorter than the threshold and the one after matches the
//! sign (3-way shape), or the next two together are shorter and the third
//! matches (4-way lookahead). In both shapes the three segments at `i` are
//! collapsed into one and the scan restarts; the 4-way remainder resolves on
//! the rescan.
//!
//! Passes run in a fixed Negative, Positive, Negative order. The asymmetry is
//! deliberate and matches the reference output: a list can still contain a
//! mergeable run of the non-final sign when the sequence completes.

use log::{debug, warn};

use crate::error::{ProfileError, Result};
use crate::slope::SlopeSign;

use super::SlopeSegment;

/// Merge two adjacent segments into one.
///
/// The first sample of `b` duplicates the last sample of `a` and is dropped;
/// the result keeps `a`'s sign.
pub fn merge_pair(a: &SlopeSegment, b: &SlopeSegment) -> SlopeSegment {
    let mut distance = a.distance.clone();
    let mut elevation = a.elevation.clone();
    let mut slope = a.slope.clone();
    distance.extend_from_slice(&b.distance[1..]);
    elevation.extend_from_slice(&b.elevation[1..]);
    slope.extend_from_slice(&b.slope[1..]);
    SlopeSegment {
        distance,
        elevation,
        slope,
        sign: a.sign,
    }
}

/// Fold short segments into their neighbors, in three fixed passes.
///
/// Rejects a threshold that is not strictly positive (including NaN): every
/// segment would qualify as mergeable and the safety cap would silently
/// truncate the run instead of signalling misuse.
pub fn merge_segments(segments: Vec<SlopeSegment>, threshold: f64) -> Result<Vec<SlopeSegment>> {
    if !(threshold > 0.0) {
        return Err(ProfileError::InvalidThreshold { value: threshold });
    }

    let segments = merge_pass(segments, threshold, SlopeSign::Negative);
    let segments = merge_pass(segments, threshold, SlopeSign::Positive);
    Ok(merge_pass(segments, threshold, SlopeSign::Negative))
}

/// Repeatedly merge the leftmost mergeable run of `sign` until none remains.
///
/// Normal inputs always converge because each merge removes two segments;
/// the iteration cap is a guard against pathological inputs only.
fn merge_pass(mut segments: Vec<SlopeSegment>, threshold: f64, sign: SlopeSign) -> Vec<SlopeSegment> {
    let max_iterations = 2 * segments.len();
    let mut iterations = 0;

    while let Some(index) = find_mergeable(&segments, threshold, sign) {
        if iterations >= max_iterations {
            warn!(
                "[Segments] {:?} merge pass did not converge after {} iterations, returning partial result",
                sign, max_iterations
            );
            break;
        }
        iterations += 1;
        debug!(
            "[Segments] merging {:?} run at index {} of {}",
            sign,
            index,
            segments.len()
        );
        segments = merge_at(segments, index);
    }

    segments
}

/// Leftmost index where a merge of `sign` applies, if any.
fn find_mergeable(segments: &[SlopeSegment], threshold: f64, sign: SlopeSign) -> Option<usize> {
    for i in 0..segments.len() {
        if segments[i].sign != sign {
            continue;
        }
        if i + 2 < segments.len()
            && segments[i + 1].size() < threshold
            && segments[i + 2].sign == sign
        {
            return Some(i);
        }
        if i + 3 < segments.len()
            && segments[i + 1].size() + segments[i + 2].size() < threshold
            && segments[i + 3].sign == sign
        {
            return Some(i);
        }
    }
    None
}

/// Collapse the three segments at `index` into one, rebuilding the list.
///
/// A span running past the end of the list is a silent no-op; the candidate
/// search has already validated the indexes it returns.
fn merge_at(segments: Vec<SlopeSegment>, index: usize) -> Vec<SlopeSegment> {
    if index + 2 >= segments.len() {
        return segments;
    }

    let merged = merge_pair(&merge_pair(&segments[index], &segments[index + 1]), &segments[index + 2]);

    let mut rebuilt = Vec::with_capacity(segments.len() - 2);
    rebuilt.extend(segments[..index].iter().cloned());
    rebuilt.push(merged);
    rebuilt.extend(segments[index + 3..].iter().cloned());
    rebuilt
}
