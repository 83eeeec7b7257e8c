//! Error types.

use crate::mesh::EdgeKey;

/// Errors raised by curve evaluation and arc-length queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    #[error("arc-length table has not been built since the control points last changed")]
    TableNotBuilt,
    #[error("arc length {length} is outside of [0, {total}]")]
    LengthOutOfRange { length: f64, total: f64 },
    #[error("curve frame is degenerate at t = {t}")]
    DegenerateFrame { t: f64 },
    #[error("arc-length table requires at least one step")]
    InvalidStepCount,
    #[error("invalid point spacing {0}: must be positive, finite and not finer than the table resolves")]
    InvalidSpacing(f64),
    #[error("control point index {0} is out of range (expected 0..=3)")]
    ControlPointIndex(usize),
}

/// Errors raised while validating or subdividing a quad mesh.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("{indices} face indices do not form whole quads")]
    NonQuadFace { indices: usize },
    #[error("face {face} references vertex {index}, but the mesh has {count} vertices")]
    VertexOutOfRange {
        face: usize,
        index: usize,
        count: usize,
    },
    #[error("face {face} repeats a vertex")]
    DegenerateFace { face: usize },
    #[error("face {second} duplicates face {first}")]
    DuplicateFace { first: usize, second: usize },
    #[error("edge {edge:?} is shared by more than two faces ({faces:?})")]
    NonManifoldEdge { edge: EdgeKey, faces: [usize; 3] },
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },
    #[error("interior vertex {vertex} has valence {valence}, at least 3 is required")]
    DegenerateValence { vertex: usize, valence: usize },
    #[error("vertex {vertex} touches {boundary_edges} boundary edges")]
    NonManifoldVertex { vertex: usize, boundary_edges: usize },
}
