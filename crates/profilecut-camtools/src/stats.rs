//! Path statistics
//!
//! Summarizes an ordered path for logging and program header comments.

use profilecut_core::Segment;
use serde::{Deserialize, Serialize};

/// Axis-aligned extent of a path in the XY plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Summary of an ordered segment path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSummary {
    /// Number of segments in the path
    pub segment_count: usize,
    /// Sum of the XY lengths of all segments
    pub length: f64,
    /// XY extent; `None` for an empty path
    pub bounds: Option<Bounds>,
    /// Whether the last end meets the first start within tolerance
    pub closed: bool,
}

impl PathSummary {
    pub fn from_segments(segments: &[Segment], tolerance: f64) -> Self {
        let length = segments.iter().map(Segment::length_2d).sum();

        let bounds = segments
            .iter()
            .flat_map(|s| [s.start, s.end])
            .fold(None, |acc: Option<Bounds>, p| {
                Some(match acc {
                    None => Bounds {
                        min_x: p.x,
                        min_y: p.y,
                        max_x: p.x,
                        max_y: p.y,
                    },
                    Some(b) => Bounds {
                        min_x: b.min_x.min(p.x),
                        min_y: b.min_y.min(p.y),
                        max_x: b.max_x.max(p.x),
                        max_y: b.max_y.max(p.y),
                    },
                })
            });

        let closed = match (segments.first(), segments.last()) {
            (Some(first), Some(last)) => last.end.coincides_with(&first.start, tolerance),
            _ => false,
        };

        Self {
            segment_count: segments.len(),
            length,
            bounds,
            closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profilecut_core::Point;

    #[test]
    fn test_summary_of_closed_square() {
        let p = |x, y| Point::new(x, y, 0.0);
        let segments = vec![
            Segment::new(p(0.0, 0.0), p(2.0, 0.0)),
            Segment::new(p(2.0, 0.0), p(2.0, 1.0)),
            Segment::new(p(2.0, 1.0), p(0.0, 1.0)),
            Segment::new(p(0.0, 1.0), p(0.0, 0.0)),
        ];

        let summary = PathSummary::from_segments(&segments, 0.01625);
        assert_eq!(summary.segment_count, 4);
        assert!((summary.length - 6.0).abs() < 1e-9);
        assert!(summary.closed);

        let bounds = summary.bounds.unwrap();
        assert_eq!(bounds.width(), 2.0);
        assert_eq!(bounds.height(), 1.0);
    }

    #[test]
    fn test_summary_of_empty_path() {
        let summary = PathSummary::from_segments(&[], 0.01625);
        assert_eq!(summary.segment_count, 0);
        assert!(summary.bounds.is_none());
        assert!(!summary.closed);
    }
}
