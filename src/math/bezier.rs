use cgmath::prelude::*;
use crate::util::Interval;
use super::{Point3d, Vector3d};
use super::curve::ParametricCurve3d;

/// A cubic bezier curve
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier3d {
    points: [Point3d; 4]
}

impl CubicBezier3d {
    pub const fn new(points: &[Point3d; 4]) -> Self {
        Self { points: *points }
    }

    /// A straight line with evenly spaced control points, so it is traversed at constant speed.
    pub fn line(start: Point3d, end: Point3d) -> Self {
        let s = start.to_vec();
        let e = end.to_vec();
        let ps = [s, s.lerp(e, 1./3.), s.lerp(e, 2./3.), e];
        Self { points: ps.map(Point3d::from_vec) }
    }

    /// The four control points, `p0` to `p3`.
    pub fn points(&self) -> &[Point3d; 4] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [Point3d; 4] {
        &mut self.points
    }

    /// Evaluates `B(t)`. Extrapolates for `t` outside of `[0, 1]`.
    pub fn point(&self, t: f64) -> Point3d {
        self.sample(t)
    }

    /// Evaluates `B'(t)`.
    pub fn first_derivative(&self, t: f64) -> Vector3d {
        self.sample_dt(t)
    }

    /// Evaluates `B''(t)`.
    pub fn second_derivative(&self, t: f64) -> Vector3d {
        self.sample_dt2(t)
    }

    /// Splits the curve at `t` using de Casteljau's algorithm.
    pub fn split(&self, t: f64) -> [CubicBezier3d; 2] {
        let [p00, p01, p02, p03] = self.points.map(|x| x.to_vec());
        let p10 = p00.lerp(p01, t);
        let p11 = p01.lerp(p02, t);
        let p12 = p02.lerp(p03, t);
        let p20 = p10.lerp(p11, t);
        let p21 = p11.lerp(p12, t);
        let p30 = p20.lerp(p21, t);
        let curves = [
            [p00, p10, p20, p30],
            [p30, p21, p12, p03]
        ];
        curves.map(|p| CubicBezier3d { points: p.map(Point3d::from_vec) })
    }

    /// The same curve traversed from `p3` to `p0`.
    pub fn reversed(&self) -> Self {
        let mut points = self.points;
        points.reverse();
        Self { points }
    }
}

impl ParametricCurve3d for CubicBezier3d {
    fn sample(&self, t: f64) -> Point3d {
        let t1 = 1.0 - t;
        Point3d::from_vec(t1 * t1 * t1 * self.points[0].to_vec()
            + 3.0 * t1 * t1 * t * self.points[1].to_vec()
            + 3.0 * t1 * t * t * self.points[2].to_vec()
            + t * t * t * self.points[3].to_vec())
    }

    fn bounds(&self) -> Interval<f64> {
        Interval { min: 0.0, max: 1.0 }
    }

    fn sample_dt(&self, t: f64) -> Vector3d {
        let t1 = 1.0 - t;
        (-3.0 * t1 * t1) * self.points[0].to_vec()
            + (9.0 * t * t - 12.0 * t + 3.0) * self.points[1].to_vec()
            + (-9.0 * t * t + 6.0 * t) * self.points[2].to_vec()
            + (3.0 * t * t) * self.points[3].to_vec()
    }

    fn sample_dt2(&self, t: f64) -> Vector3d {
        (6.0 * (1.0 - t)) * self.points[0].to_vec()
            + (18.0 * t - 12.0) * self.points[1].to_vec()
            - (18.0 * t - 6.0) * self.points[2].to_vec()
            + (6.0 * t) * self.points[3].to_vec()
    }
}
