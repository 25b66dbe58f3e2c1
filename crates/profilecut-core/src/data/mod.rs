//! Data models for profile geometry
//!
//! This module provides:
//! - 3D points with planar (X/Y) distance helpers
//! - Directed line segments that can be reversed in place
//!
//! All connectivity decisions in profilecut are made in the XY plane; the Z
//! coordinate is carried along from the drawing but never compared.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in drawing space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
    /// Z-axis position
    pub z: f64,
}

impl Point {
    /// The drawing origin
    pub const ORIGIN: Point = Point {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a point from its three coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        debug_assert!(
            x.is_finite() && y.is_finite() && z.is_finite(),
            "Point coordinates must be finite: x={x}, y={y}, z={z}"
        );
        Self { x, y, z }
    }

    /// Euclidean distance to `other` in the XY plane
    pub fn distance_2d(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether `other` lies within `tolerance` of this point in the XY plane
    pub fn coincides_with(&self, other: &Point, tolerance: f64) -> bool {
        self.distance_2d(other) <= tolerance
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{:.3} Y:{:.3} Z:{:.3}", self.x, self.y, self.z)
    }
}

/// A directed line from `start` to `end`
///
/// Segments are undirected for connectivity: either endpoint may be used to
/// enter one. The direction only matters once the path has been ordered, when
/// the toolpath follows each segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    /// Entry point
    pub start: Point,
    /// Exit point
    pub end: Point,
}

impl Segment {
    /// Create a segment between two points
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Swap the start and end points
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }

    /// Return a copy running the other way
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Length of the segment projected onto the XY plane
    pub fn length_2d(&self) -> f64 {
        self.start.distance_2d(&self.end)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] -> [{}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_ignores_z() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(3.0, 4.0, 100.0);
        assert_eq!(a.distance_2d(&b), 5.0);
    }

    #[test]
    fn test_coincides_within_tolerance() {
        let a = Point::new(1.0, 1.0, 0.0);
        let b = Point::new(1.01, 1.0, 0.0);
        assert!(a.coincides_with(&b, 0.01625));
        assert!(!a.coincides_with(&b, 0.005));
    }

    #[test]
    fn test_reverse_swaps_endpoints() {
        let mut seg = Segment::new(Point::new(1.0, 2.0, 3.0), Point::new(4.0, 5.0, 6.0));
        seg.reverse();
        assert_eq!(seg.start, Point::new(4.0, 5.0, 6.0));
        assert_eq!(seg.end, Point::new(1.0, 2.0, 3.0));
        assert_eq!(seg.reversed().start, Point::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_length_2d() {
        let seg = Segment::new(Point::new(0.0, 0.0, 0.0), Point::new(0.0, 2.5, 1.0));
        assert_eq!(seg.length_2d(), 2.5);
    }

    #[test]
    fn test_point_display() {
        let p = Point::new(12.5, -3.25, 0.0);
        assert_eq!(p.to_string(), "X:12.500 Y:-3.250 Z:0.000");
    }

    #[test]
    fn test_segment_serde() {
        let seg = Segment::new(Point::new(1.0, 2.0, 3.0), Point::new(4.0, 5.0, 6.0));
        let json = serde_json::to_string(&seg).unwrap();
        let back: Segment = serde_json::from_str(&json).unwrap();
        assert_eq!(seg, back);
    }
}
