use crate::error::CurveError;
use crate::util::Interval;
use super::{try_normalize, Point3d, Vector3d};
pub use algorithms::{points_at_spacing, uniform_points, MAX_POINTS_PER_STEP};

mod algorithms;

/// A parametric curve in 3D space.
pub trait ParametricCurve3d {
    /// Samples the parametric curve.
    fn sample(&self, t: f64) -> Point3d;

    /// Returns the minimum and maximum t-values that define the bounds of the curve.
    fn bounds(&self) -> Interval<f64>;

    /// Samples the derivative of the parametric curve.
    fn sample_dt(&self, t: f64) -> Vector3d;

    /// Samples the second derivative of the parametric curve.
    fn sample_dt2(&self, t: f64) -> Vector3d;

    /// The unit tangent at `t`.
    fn tangent(&self, t: f64) -> Result<Vector3d, CurveError> {
        try_normalize(self.sample_dt(t)).ok_or(CurveError::DegenerateFrame { t })
    }

    /// The unit binormal at `t`.
    fn binormal(&self, t: f64) -> Result<Vector3d, CurveError> {
        Ok(self.frame(t)?.binormal)
    }

    /// The unit normal at `t`.
    fn normal(&self, t: f64) -> Result<Vector3d, CurveError> {
        Ok(self.frame(t)?.normal)
    }

    /// Computes the tangent, normal and binormal at `t` in one pass.
    ///
    /// Fails when the first derivative vanishes, or when it is parallel to
    /// the sum of the first and second derivatives (e.g. along straight lines).
    fn frame(&self, t: f64) -> Result<Frame, CurveError> {
        let degenerate = CurveError::DegenerateFrame { t };
        let dt = self.sample_dt(t);
        let tangent = try_normalize(dt).ok_or(degenerate.clone())?;
        let bent = try_normalize(dt + self.sample_dt2(t)).ok_or(degenerate.clone())?;
        let binormal = try_normalize(tangent.cross(bent)).ok_or(degenerate.clone())?;
        let normal = try_normalize(tangent.cross(binormal)).ok_or(degenerate)?;
        Ok(Frame {
            tangent,
            normal,
            binormal,
        })
    }
}

/// An orthonormal frame along a curve.
///
/// The normal is `tangent × binormal`, so `(tangent, binormal, normal)`
/// is a right-handed basis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub tangent: Vector3d,
    pub normal: Vector3d,
    pub binormal: Vector3d,
}
