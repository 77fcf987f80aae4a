//! Planar geometry for annotation measurements.
//!
//! These functions operate on *calibrated* points, i.e. coordinates that have
//! already been mapped from image space into real-world units. Measuring in
//! the calibrated plane (rather than scaling pixel-space results) keeps the
//! values correct under non-uniform calibrations such as perspective planes.

use crate::{Pt2, Real};

/// Euclidean distance between two points.
///
/// Symmetric (`distance(a, b) == distance(b, a)`) and non-negative.
pub fn distance(a: &Pt2, b: &Pt2) -> Real {
    (b - a).norm()
}

/// Signed vertex angle at `origin`, in degrees.
///
/// Measures the angle swept counter-clockwise (y-up convention) from the leg
/// `origin → a` to the leg `origin → b`, in the range (-180, 180].
/// A degenerate leg of zero length yields 0.
pub fn vertex_angle_deg(origin: &Pt2, a: &Pt2, b: &Pt2) -> Real {
    let u = a - origin;
    let v = b - origin;
    if u.norm_squared() == 0.0 || v.norm_squared() == 0.0 {
        return 0.0;
    }
    let cross = u.x * v.y - u.y * v.x;
    let dot = u.dot(&v);
    cross.atan2(dot).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Pt2::new(1.0, 2.0);
        let b = Pt2::new(4.0, 6.0);
        assert_eq!(distance(&a, &b), distance(&b, &a));
        assert!((distance(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_of_coincident_points_is_zero() {
        let p = Pt2::new(-3.5, 7.25);
        assert_eq!(distance(&p, &p), 0.0);
    }

    #[test]
    fn right_angle_is_ninety_degrees() {
        let o = Pt2::new(0.0, 0.0);
        let a = Pt2::new(1.0, 0.0);
        let b = Pt2::new(0.0, 1.0);
        assert!((vertex_angle_deg(&o, &a, &b) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn swapping_legs_flips_the_sign() {
        let o = Pt2::new(1.0, 1.0);
        let a = Pt2::new(3.0, 1.0);
        let b = Pt2::new(2.0, 4.0);
        let ab = vertex_angle_deg(&o, &a, &b);
        let ba = vertex_angle_deg(&o, &b, &a);
        assert!((ab + ba).abs() < 1e-12);
    }

    #[test]
    fn degenerate_leg_yields_zero() {
        let o = Pt2::new(2.0, 2.0);
        let a = Pt2::new(5.0, 2.0);
        assert_eq!(vertex_angle_deg(&o, &a, &o), 0.0);
        assert_eq!(vertex_angle_deg(&o, &o, &a), 0.0);
    }
}
