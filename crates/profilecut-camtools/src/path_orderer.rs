//! Path Orderer
//!
//! Rebuilds the connectivity of loose line segments. Starting from the segment
//! whose start point lies nearest the origin, each following position is
//! filled with an unplaced segment that touches the running end point, and
//! that segment is reversed when it was its end that touched.
//!
//! Endpoints are compared in the XY plane within a tolerance; Z is ignored.

use profilecut_core::{PathError, PathResult, Point, Segment, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Which candidate to take when several segments continue the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Take the first matching segment in scan order
    FirstMatch,
    /// Keep swapping in every match while scanning; the last one stays
    #[default]
    LastMatch,
}

/// Parameters for path ordering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderingParameters {
    /// Maximum XY distance for two endpoints to count as joined
    pub tolerance: f64,
    /// Candidate selection when more than one segment matches
    pub tie_break: TieBreak,
}

impl Default for OrderingParameters {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            tie_break: TieBreak::default(),
        }
    }
}

/// How a candidate segment meets the running end point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attachment {
    /// Its start touches; placed as is
    Start,
    /// Its end touches; placed reversed
    End,
}

/// Orders and orients segments into one connected path
#[derive(Debug, Clone, Default)]
pub struct PathOrderer {
    params: OrderingParameters,
}

impl PathOrderer {
    pub fn new(params: OrderingParameters) -> Self {
        Self { params }
    }

    /// Index of the segment whose start point is nearest the origin
    ///
    /// Segment 0 is the baseline; a later segment only replaces it when it is
    /// strictly closer, so ties resolve to the earliest index.
    pub fn origin_segment_index(segments: &[Segment]) -> Option<usize> {
        let first = segments.first()?;
        let mut closest = 0;
        let mut best = first.start.distance_2d(&Point::ORIGIN);

        for (idx, segment) in segments.iter().enumerate().skip(1) {
            let distance = segment.start.distance_2d(&Point::ORIGIN);
            if distance < best {
                closest = idx;
                best = distance;
            }
        }

        Some(closest)
    }

    /// Reorder and reorient `segments` in place into a connected chain
    ///
    /// On `OpenPath` the segments before the failing position are already in
    /// their final order; the rest are left in scan order.
    pub fn order(&self, segments: &mut [Segment]) -> PathResult<()> {
        self.check_tolerance()?;

        let origin = Self::origin_segment_index(segments).ok_or(PathError::EmptyPath)?;
        segments.swap(0, origin);
        debug!(origin, start = %segments[0].start, "Selected starting segment");

        for position in 1..segments.len() {
            let tail = segments[position - 1].end;
            let mut placed = None;

            for candidate in position..segments.len() {
                if let Some(attachment) = self.attachment(&tail, &segments[candidate]) {
                    segments.swap(position, candidate);
                    placed = Some(attachment);
                    if self.params.tie_break == TieBreak::FirstMatch {
                        break;
                    }
                }
            }

            match placed {
                Some(Attachment::Start) => {}
                Some(Attachment::End) => segments[position].reverse(),
                None => {
                    return Err(PathError::OpenPath {
                        position,
                        after_index: position - 1,
                        x: tail.x,
                        y: tail.y,
                    })
                }
            }

            trace!(
                position,
                reversed = placed == Some(Attachment::End),
                segment = %segments[position],
                "Placed segment"
            );
        }

        Ok(())
    }

    /// Check that the ordered path returns to where it started
    pub fn validate_closed(&self, segments: &[Segment]) -> PathResult<()> {
        self.check_tolerance()?;

        let (first, last) = match (segments.first(), segments.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(PathError::EmptyPath),
        };

        let gap = last.end.distance_2d(&first.start);
        if gap > self.params.tolerance {
            return Err(PathError::NotClosed { gap });
        }
        Ok(())
    }

    /// Start is checked first so a segment touching at both ends keeps its direction.
    fn attachment(&self, tail: &Point, candidate: &Segment) -> Option<Attachment> {
        if tail.coincides_with(&candidate.start, self.params.tolerance) {
            Some(Attachment::Start)
        } else if tail.coincides_with(&candidate.end, self.params.tolerance) {
            Some(Attachment::End)
        } else {
            None
        }
    }

    fn check_tolerance(&self) -> PathResult<()> {
        let tolerance = self.params.tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(PathError::InvalidTolerance(tolerance));
        }
        Ok(())
    }
}
