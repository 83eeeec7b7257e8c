use super::{Point3d, Vector3d};
use cgmath::prelude::*;

/// Vectors shorter than this are treated as having no direction.
pub const DEGENERATE_EPSILON: f64 = 1e-12;

/// Normalises a vector, or returns `None` if it is too short to have a direction.
#[inline(always)]
pub fn try_normalize(v: Vector3d) -> Option<Vector3d> {
    let mag = v.magnitude();
    if mag > DEGENERATE_EPSILON && mag.is_finite() {
        Some(v / mag)
    } else {
        None
    }
}

/// Computes the arithmetic mean of a set of points.
///
/// # Panics
/// Panics in debug builds if `points` is empty.
pub fn average(points: &[Point3d]) -> Point3d {
    debug_assert!(!points.is_empty());
    let sum = points
        .iter()
        .fold(Vector3d::zero(), |acc, p| acc + p.to_vec());
    Point3d::from_vec(sum / points.len() as f64)
}

/// Computes the point halfway between `a` and `b`.
#[inline(always)]
pub fn midpoint(a: Point3d, b: Point3d) -> Point3d {
    a.midpoint(b)
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn normalize_rejects_zero_vectors() {
        assert!(try_normalize(Vector3d::zero()).is_none());
        assert!(try_normalize(Vector3d::new(1e-14, 0.0, 0.0)).is_none());
        assert!(try_normalize(Vector3d::new(f64::NAN, 0.0, 0.0)).is_none());
        let v = try_normalize(Vector3d::new(3.0, 0.0, 4.0)).unwrap();
        assert_approx_eq!(v.magnitude(), 1.0);
        assert_approx_eq!(v.x, 0.6);
        assert_approx_eq!(v.z, 0.8);
    }

    #[test]
    fn average_of_square() {
        let points = [
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(2.0, 0.0, 0.0),
            Point3d::new(2.0, 2.0, 0.0),
            Point3d::new(0.0, 2.0, 0.0),
        ];
        assert_eq!(average(&points), Point3d::new(1.0, 1.0, 0.0));
        assert_eq!(midpoint(points[0], points[2]), Point3d::new(1.0, 1.0, 0.0));
    }
}
