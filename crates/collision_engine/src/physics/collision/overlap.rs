//! Overlap tests between world-space shapes
//!
//! Boxes are tested with a two-pass separating-axis test: each box is brought
//! into the other object's unrotated frame and its bounds are compared with
//! that box's limits. Circles against boxes are tested in the box frame.
//! The box-circle test always takes the circle center already normalized
//! into the box owner's frame.

use super::primitives::BoxLimits;
use super::shape::{WorldBox, WorldCircle};
use super::transform::ObjectFrame;
use crate::foundation::math::Point2;

/// First separating-axis pass: bounds of `a` inside `b_frame`
pub fn project_box(a: &WorldBox, b_frame: &ObjectFrame) -> BoxLimits {
    BoxLimits::from_quad(&b_frame.normalize_quad(&a.vertices))
}

/// Two-pass box test with the first projection already computed
///
/// `projection_a` is [`project_box`] of `a` into `b_frame`.
pub fn box_box_projected(
    projection_a: &BoxLimits,
    a: &WorldBox,
    a_frame: &ObjectFrame,
    b: &WorldBox,
) -> bool {
    if !projection_a.overlaps(&b.limits) {
        return false;
    }
    project_box(b, a_frame).overlaps(&a.limits)
}

/// Whether two boxes overlap
pub fn box_box(a: &WorldBox, a_frame: &ObjectFrame, b: &WorldBox, b_frame: &ObjectFrame) -> bool {
    box_box_projected(&project_box(a, b_frame), a, a_frame, b)
}

/// Whether a circle overlaps box limits
///
/// `center` must already be expressed in the box owner's frame.
pub fn box_circle(limits: &BoxLimits, center: Point2, radius: f64) -> bool {
    let closest = limits.closest_point(center);
    (closest - center).norm_squared() < radius * radius
}

/// Whether two circles overlap
pub fn circle_circle(a: &WorldCircle, b: &WorldCircle) -> bool {
    let reach = a.radius + b.radius;
    (a.center - b.center).norm_squared() < reach * reach
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(x: f64, y: f64, radius: f64) -> WorldCircle {
        WorldCircle { center: Point2::new(x, y), radius, code: -1 }
    }

    #[test]
    fn test_circles_touching_do_not_overlap() {
        assert!(circle_circle(&circle(0.0, 0.0, 5.0), &circle(9.0, 0.0, 5.0)));
        assert!(!circle_circle(&circle(0.0, 0.0, 5.0), &circle(10.0, 0.0, 5.0)));
        assert!(!circle_circle(&circle(0.0, 0.0, 5.0), &circle(11.0, 0.0, 5.0)));
    }

    #[test]
    fn test_circle_pairs_are_symmetric() {
        let pairs = [
            (circle(3.0, 4.0, 1.0), circle(-2.0, 7.5, 4.0)),
            (circle(0.0, 0.0, 2.0), circle(0.0, 4.0, 2.0)),
            (circle(10.0, 10.0, 0.5), circle(10.2, 10.1, 0.1)),
        ];
        for (a, b) in &pairs {
            assert_eq!(circle_circle(a, b), circle_circle(b, a));
        }
    }

    #[test]
    fn test_box_circle_uses_strict_distance() {
        let limits = BoxLimits::new(0.0, 0.0, 9.0, 9.0);
        assert!(!box_circle(&limits, Point2::new(12.0, 5.0), 3.0));
        assert!(box_circle(&limits, Point2::new(11.0, 5.0), 3.0));
        assert!(box_circle(&limits, Point2::new(4.0, 4.0), 0.5));
    }
}
