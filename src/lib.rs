pub use cgmath;
pub use curve::{BezierCurve, ObserverId, RefreshObserver};
pub use error::{CurveError, MeshError};
pub use mesh::{Edge, EdgeKey, QuadMesh};
pub use subdivision::{subdivide, subdivide_n, subdivide_with, BoundaryRule, SubdivideOptions, SubdivisionStages};
pub use util::Interval;

mod curve;
mod error;
mod mesh;
pub mod math;
pub mod subdivision;
mod util;
