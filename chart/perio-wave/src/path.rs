//! Smoothed wave paths.
//!
//! Each curve is a 5-point control polyline — two fixed endpoints at level 1
//! plus the three movable site points — smoothed into cubic Bézier segments
//! with a Catmull-Rom-style 1/6 tension. End segments reuse the nearest
//! defined neighbor, so the curve starts and ends tangent to its edge.

use crate::{Level, Viewport};
use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Level drawn at the two fixed endpoints (the mesial/distal tooth boundary).
pub const ENDPOINT_LEVEL: Level = 1;

/// One cubic Bézier segment of a smoothed wave path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BezierSegment {
    /// Segment start point.
    pub from: Point2<f64>,
    /// First control point.
    pub cp1: Point2<f64>,
    /// Second control point.
    pub cp2: Point2<f64>,
    /// Segment end point.
    pub to: Point2<f64>,
}

/// The five control points of one curve, left to right.
///
/// Index 0 and 4 are the fixed endpoints at [`ENDPOINT_LEVEL`]; indices 1-3
/// are the movable mesial/central/distal sites.
#[must_use]
pub fn control_points(levels: &[Level; 3], viewport: &Viewport) -> [Point2<f64>; 5] {
    let xs = viewport.x_positions();
    let edge_y = viewport.y_for_level(ENDPOINT_LEVEL);
    [
        Point2::new(xs[0], edge_y),
        Point2::new(xs[1], viewport.y_for_level(levels[0])),
        Point2::new(xs[2], viewport.y_for_level(levels[1])),
        Point2::new(xs[3], viewport.y_for_level(levels[2])),
        Point2::new(xs[4], edge_y),
    ]
}

/// Smooth a control polyline into cubic Bézier segments.
///
/// Returns one segment per consecutive point pair; fewer than two points
/// yield no segments.
#[must_use]
pub fn smooth_segments(points: &[Point2<f64>]) -> Vec<BezierSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(points.len() - 1);
    for i in 0..points.len() - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points.get(i + 2).copied().unwrap_or(p2);

        let cp1 = p1 + (p2 - p0).scale(1.0 / 6.0);
        let cp2 = p2 - (p3 - p1).scale(1.0 / 6.0);

        segments.push(BezierSegment {
            from: p1,
            cp1,
            cp2,
            to: p2,
        });
    }
    segments
}

/// Smooth a control polyline traversed right-to-left.
///
/// Used for the closing half of the pocket fill outline; equivalent to
/// reversing the points and smoothing.
#[must_use]
pub fn smooth_segments_reversed(points: &[Point2<f64>]) -> Vec<BezierSegment> {
    let reversed: Vec<Point2<f64>> = points.iter().rev().copied().collect();
    smooth_segments(&reversed)
}
