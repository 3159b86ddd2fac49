// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow geometry.

use kurbo::{BezPath, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Arrowhead shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowHead {
    /// Length of each barb, in pixels.
    pub length: f64,
    /// Angle between each barb and the shaft, in degrees.
    pub rotation_deg: f64,
}

impl Default for ArrowHead {
    fn default() -> Self {
        Self {
            length: 6.0,
            rotation_deg: 45.0,
        }
    }
}

/// Builds an arrow from `start` to `end` with its head at `start`.
///
/// The path is the shaft `start → end` followed by the head: a barb, `start`, and the
/// other barb. A zero-length arrow has no head.
pub fn arrow_path(start: Point, end: Point, head: ArrowHead) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(start);
    path.line_to(end);

    if let Some((left, right)) = arrow_barbs(start, end, head) {
        path.move_to(left);
        path.line_to(start);
        path.line_to(right);
    }
    path
}

/// Returns the two barb tips of an arrowhead at `tip` pointing away from `handle`.
///
/// The point `head.length` along the shaft is rotated by `±head.rotation_deg` around `tip`.
/// Returns `None` when `tip` and `handle` coincide.
pub fn arrow_barbs(tip: Point, handle: Point, head: ArrowHead) -> Option<(Point, Point)> {
    let shaft = handle - tip;
    let distance = shaft.hypot();
    if distance == 0.0 || !distance.is_finite() {
        return None;
    }
    let along = tip + shaft * (head.length / distance);
    let theta = head.rotation_deg.to_radians();
    Some((rotate(along, tip, theta), rotate(along, tip, -theta)))
}

fn rotate(p: Point, pivot: Point, theta: f64) -> Point {
    let (sin, cos) = (theta.sin(), theta.cos());
    let d = p - pivot;
    pivot + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::PathEl;

    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn horizontal_arrow_has_symmetric_barbs() {
        let start = Point::new(10.0, 20.0);
        let end = Point::new(34.0, 20.0);
        let (left, right) = arrow_barbs(start, end, ArrowHead::default()).unwrap();
        let h = 6.0 * core::f64::consts::FRAC_1_SQRT_2;
        assert!(close(left, Point::new(10.0 + h, 20.0 + h)), "{left:?}");
        assert!(close(right, Point::new(10.0 + h, 20.0 - h)), "{right:?}");
    }

    #[test]
    fn barbs_are_head_length_from_the_tip() {
        let head = ArrowHead {
            length: 8.0,
            rotation_deg: 30.0,
        };
        let tip = Point::new(0.0, 0.0);
        let (left, right) = arrow_barbs(tip, Point::new(3.0, 4.0), head).unwrap();
        assert!((left.distance(tip) - 8.0).abs() < 1e-9);
        assert!((right.distance(tip) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn path_is_shaft_then_head() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(24.0, 0.0);
        let path = arrow_path(start, end, ArrowHead::default());
        let els = path.elements();
        assert_eq!(els.len(), 5);
        assert_eq!(els[0], PathEl::MoveTo(start));
        assert_eq!(els[1], PathEl::LineTo(end));
        assert!(matches!(els[2], PathEl::MoveTo(_)));
        assert_eq!(els[3], PathEl::LineTo(start));
        assert!(matches!(els[4], PathEl::LineTo(_)));
    }

    #[test]
    fn zero_length_arrow_has_no_head() {
        let p = Point::new(5.0, 5.0);
        assert_eq!(arrow_barbs(p, p, ArrowHead::default()), None);
        assert_eq!(arrow_path(p, p, ArrowHead::default()).elements().len(), 2);
    }
}
