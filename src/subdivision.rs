//! Catmull-Clark subdivision of quad meshes.
//!
//! Each step is split into stages that can be run and inspected separately:
//! edge extraction, face points, edge points and adjusted vertex points,
//! which are then reassembled into a new mesh with four times as many faces.

use std::collections::BTreeMap;
use cgmath::prelude::*;
use smallvec::SmallVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::error::MeshError;
use crate::math::{average, midpoint, Point3d, Vector3d};
use crate::mesh::{Edge, EdgeKey, QuadMesh};

/// How points on the mesh boundary are placed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundaryRule {
    /// Boundary edge points average the two end points and the one face point.
    /// Boundary vertices use the same rule as interior ones, except corners of
    /// valence 2, which use the crease rule.
    #[default]
    AvailableTerms,
    /// Boundary edge points sit at the edge midpoint and boundary vertices move
    /// to `3/4 p + 1/8 (a + b)`, keeping the boundary a sharp crease.
    Crease,
}

/// Options for [subdivide_with].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubdivideOptions {
    /// The rule for points on the mesh boundary.
    pub boundary: BoundaryRule,
}

/// The intermediate results of one subdivision step.
#[derive(Clone, Debug, PartialEq)]
pub struct SubdivisionStages {
    /// The edges, in the order their edge points appear in the output.
    pub edges: Vec<Edge>,
    /// One point per face: the centroid of its corners.
    pub face_points: Vec<Point3d>,
    /// One point per edge.
    pub edge_points: Vec<Point3d>,
    /// The new position of each original vertex.
    pub vertex_points: Vec<Point3d>,
}

/// Edges and faces meeting at a vertex.
#[derive(Default)]
struct Incidence {
    edges: SmallVec<[usize; 6]>,
    faces: SmallVec<[usize; 6]>,
}

/// Subdivides a mesh once, with default options.
pub fn subdivide(mesh: &QuadMesh) -> Result<QuadMesh, MeshError> {
    subdivide_with(mesh, &SubdivideOptions::default())
}

/// Subdivides a mesh once.
///
/// The new vertices are the adjusted original vertices, then the face points,
/// then the edge points. Each face is replaced by four faces, one per corner.
pub fn subdivide_with(mesh: &QuadMesh, options: &SubdivideOptions) -> Result<QuadMesh, MeshError> {
    Ok(SubdivisionStages::compute(mesh, options)?.assemble(mesh))
}

/// Subdivides a mesh `iterations` times.
pub fn subdivide_n(
    mesh: &QuadMesh,
    iterations: usize,
    options: &SubdivideOptions,
) -> Result<QuadMesh, MeshError> {
    let mut mesh = mesh.clone();
    for _ in 0..iterations {
        mesh = subdivide_with(&mesh, options)?;
    }
    Ok(mesh)
}

impl SubdivisionStages {
    /// Validates the mesh and computes every new point.
    pub fn compute(mesh: &QuadMesh, options: &SubdivideOptions) -> Result<Self, MeshError> {
        mesh.check_faces()?;
        let edges = mesh.edges()?;
        let face_points = face_points(mesh);
        let edge_points = edge_points(mesh, &edges, &face_points, options.boundary);
        let vertex_points = vertex_points(mesh, &edges, &face_points, options.boundary)?;
        log::debug!(
            "subdivision stages: {} vertices, {} faces, {} edges",
            vertex_points.len(),
            face_points.len(),
            edges.len()
        );
        Ok(Self {
            edges,
            face_points,
            edge_points,
            vertex_points,
        })
    }

    /// The index of the first face point in the output mesh.
    pub fn face_point_offset(&self) -> usize {
        self.vertex_points.len()
    }

    /// The index of the first edge point in the output mesh.
    pub fn edge_point_offset(&self) -> usize {
        self.vertex_points.len() + self.face_points.len()
    }

    /// Maps each edge to the index of its edge point in the output mesh.
    pub fn edge_point_indices(&self) -> BTreeMap<EdgeKey, usize> {
        let offset = self.edge_point_offset();
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| (edge.key, offset + i))
            .collect()
    }

    /// Builds the subdivided mesh. `mesh` must be the mesh the stages were computed from.
    pub fn assemble(&self, mesh: &QuadMesh) -> QuadMesh {
        let vertices = self
            .vertex_points
            .iter()
            .chain(&self.face_points)
            .chain(&self.edge_points)
            .copied()
            .collect();

        let edge_idx = self.edge_point_indices();
        let edge = |a: usize, b: usize| edge_idx[&EdgeKey::new(a, b)];
        let faces = mesh
            .faces
            .iter()
            .enumerate()
            .flat_map(|(i, &[p1, p2, p3, p4])| {
                let fp = self.face_point_offset() + i;
                let (e12, e23, e34, e41) = (edge(p1, p2), edge(p2, p3), edge(p3, p4), edge(p4, p1));
                [
                    [p1, e12, fp, e41],
                    [p2, e23, fp, e12],
                    [p3, e34, fp, e23],
                    [p4, e41, fp, e34],
                ]
            })
            .collect();

        QuadMesh { vertices, faces }
    }
}

/// Computes the centroid of each face.
///
/// # Panics
/// Panics if a face refers to a vertex that doesn't exist.
pub fn face_points(mesh: &QuadMesh) -> Vec<Point3d> {
    mesh.faces
        .iter()
        .map(|face| average(&face.map(|i| mesh.vertices[i])))
        .collect()
}

/// Computes the point inserted on each edge.
///
/// Interior edges average their two end points and two face points;
/// boundary edges follow `rule`.
///
/// # Panics
/// Panics if `edges` or `face_points` were not computed from `mesh`, so that
/// an edge refers to a vertex or face that doesn't exist.
pub fn edge_points(
    mesh: &QuadMesh,
    edges: &[Edge],
    face_points: &[Point3d],
    rule: BoundaryRule,
) -> Vec<Point3d> {
    edges
        .iter()
        .map(|edge| {
            let [a, b] = edge.key.vertices().map(|i| mesh.vertices[i]);
            let f1 = face_points[edge.faces.0];
            match (edge.faces.1, rule) {
                (Some(f2), _) => average(&[a, b, f1, face_points[f2]]),
                (None, BoundaryRule::AvailableTerms) => average(&[a, b, f1]),
                (None, BoundaryRule::Crease) => midpoint(a, b),
            }
        })
        .collect()
}

/// Computes the new position of each original vertex.
///
/// A vertex of valence `n` moves to `(f + 2r + (n - 3)p) / n`, where `f` is
/// the average of the surrounding face points and `r` the average of the
/// surrounding edge midpoints. Boundary corners of valence 2, and every
/// boundary vertex under [BoundaryRule::Crease], move to `3/4 p + 1/8 (a + b)`
/// instead, where `a` and `b` are their neighbours along the boundary.
/// Vertices that no face uses keep their position.
///
/// # Panics
/// Panics if `edges` or `face_points` were not computed from `mesh`, so that
/// an edge or face refers to a vertex or face that doesn't exist.
pub fn vertex_points(
    mesh: &QuadMesh,
    edges: &[Edge],
    face_points: &[Point3d],
    rule: BoundaryRule,
) -> Result<Vec<Point3d>, MeshError> {
    let mut incidence: Vec<Incidence> = mesh.vertices.iter().map(|_| Default::default()).collect();
    for (i, edge) in edges.iter().enumerate() {
        for v in edge.key.vertices() {
            incidence[v].edges.push(i);
        }
    }
    for (i, face) in mesh.faces.iter().enumerate() {
        for &v in face {
            incidence[v].faces.push(i);
        }
    }

    mesh.vertices
        .iter()
        .zip(&incidence)
        .enumerate()
        .map(|(vertex, (&p, inc))| {
            if inc.edges.is_empty() {
                log::debug!("vertex {} is not used by any face, keeping its position", vertex);
                return Ok(p);
            }

            let n = inc.edges.len();
            let boundary = inc
                .edges
                .iter()
                .map(|&e| &edges[e])
                .filter(|e| e.is_boundary())
                .collect::<SmallVec<[_; 2]>>();

            match boundary.as_slice() {
                [] if n < 3 => Err(MeshError::DegenerateValence { vertex, valence: n }),
                [a, b] if n < 3 || rule == BoundaryRule::Crease => {
                    let a = mesh.vertices[a.key.other(vertex)].to_vec();
                    let b = mesh.vertices[b.key.other(vertex)].to_vec();
                    Ok(Point3d::from_vec(0.75 * p.to_vec() + 0.125 * (a + b)))
                }
                [] | [_, _] => {
                    let f = mean_vec(inc.faces.iter().map(|&f| face_points[f].to_vec()));
                    let r = mean_vec(inc.edges.iter().map(|&e| {
                        let [a, b] = edges[e].key.vertices().map(|i| mesh.vertices[i]);
                        midpoint(a, b).to_vec()
                    }));
                    let n = n as f64;
                    Ok(Point3d::from_vec((f + 2.0 * r + (n - 3.0) * p.to_vec()) / n))
                }
                other => Err(MeshError::NonManifoldVertex { vertex, boundary_edges: other.len() }),
            }
        })
        .collect()
}

fn mean_vec(vectors: impl ExactSizeIterator<Item = Vector3d>) -> Vector3d {
    let n = vectors.len() as f64;
    vectors.fold(Vector3d::zero(), |acc, v| acc + v) / n
}
