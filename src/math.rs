//! Mathematical structs and functions.

use cgmath::{Point3, Vector3};
pub use util::*;
pub use lut::ArcLengthTable;
pub use curve::{Frame, ParametricCurve3d, points_at_spacing, uniform_points, MAX_POINTS_PER_STEP};
pub use bezier::CubicBezier3d;

mod util;
mod lut;
mod curve;
mod bezier;

/// A 3D point
pub type Point3d = Point3<f64>;

/// A 3D vector
pub type Vector3d = Vector3<f64>;
