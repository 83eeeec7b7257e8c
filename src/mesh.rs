use std::collections::BTreeMap;
use itertools::Itertools;
use crate::error::MeshError;
use crate::math::Point3d;

mod primitives;

/// An indexed mesh made entirely of quads.
///
/// Corner `i` of a face is joined to corner `(i + 1) % 4`; all faces should
/// share the same winding.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadMesh {
    /// The vertex positions.
    pub vertices: Vec<Point3d>,
    /// The faces, as indices into `vertices`.
    pub faces: Vec<[usize; 4]>,
}

/// An undirected edge between two vertices, stored as `(min, max)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeKey(usize, usize);

/// An edge of a quad mesh and the faces either side of it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub key: EdgeKey,
    /// The first face to use the edge, and the second, if there is one.
    pub faces: (usize, Option<usize>),
}

impl EdgeKey {
    /// Creates the key for the edge between `a` and `b`, in either order.
    pub fn new(a: usize, b: usize) -> Self {
        Self(usize::min(a, b), usize::max(a, b))
    }

    /// The lower vertex index.
    pub fn low(&self) -> usize {
        self.0
    }

    /// The higher vertex index.
    pub fn high(&self) -> usize {
        self.1
    }

    pub fn vertices(&self) -> [usize; 2] {
        [self.0, self.1]
    }

    /// Given one end of the edge, returns the other.
    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.0 { self.1 } else { self.0 }
    }
}

impl Edge {
    /// Whether only one face uses this edge.
    pub fn is_boundary(&self) -> bool {
        self.faces.1.is_none()
    }
}

impl QuadMesh {
    pub fn new(vertices: Vec<Point3d>, faces: Vec<[usize; 4]>) -> Self {
        Self { vertices, faces }
    }

    /// Creates a mesh from a flat index buffer, four indices per face.
    pub fn from_flat(vertices: Vec<Point3d>, indices: &[usize]) -> Result<Self, MeshError> {
        if indices.len() % 4 != 0 {
            return Err(MeshError::NonQuadFace { indices: indices.len() });
        }
        let faces = indices
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Ok(Self { vertices, faces })
    }

    /// Flattens the faces into an index buffer.
    pub fn flat_indices(&self) -> Vec<usize> {
        self.faces.iter().flatten().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Checks that the mesh can be subdivided.
    pub fn validate(&self) -> Result<(), MeshError> {
        self.check_faces()?;
        self.edges().map(drop)
    }

    /// Checks vertex positions and per-face indices, without building edges.
    pub(crate) fn check_faces(&self) -> Result<(), MeshError> {
        if let Some(index) = self
            .vertices
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        {
            return Err(MeshError::NonFiniteVertex { index });
        }

        let count = self.vertices.len();
        let mut seen = BTreeMap::new();
        for (face, corners) in self.faces.iter().enumerate() {
            if let Some(&index) = corners.iter().find(|&&i| i >= count) {
                return Err(MeshError::VertexOutOfRange { face, index, count });
            }
            let mut sorted = *corners;
            sorted.sort_unstable();
            if sorted.windows(2).any(|w| w[0] == w[1]) {
                return Err(MeshError::DegenerateFace { face });
            }
            if let Some(&first) = seen.get(&sorted) {
                return Err(MeshError::DuplicateFace { first, second: face });
            }
            seen.insert(sorted, face);
        }
        Ok(())
    }

    /// Finds the edges of the mesh, in the order they are first used by a face.
    ///
    /// Fails if an edge is used by more than two faces.
    pub fn edges(&self) -> Result<Vec<Edge>, MeshError> {
        let mut edges: Vec<Edge> = Vec::with_capacity(2 * self.faces.len());
        let mut lookup = BTreeMap::new();
        for (face, corners) in self.faces.iter().enumerate() {
            for (&a, &b) in corners.iter().circular_tuple_windows() {
                let key = EdgeKey::new(a, b);
                match lookup.get(&key).copied() {
                    None => {
                        lookup.insert(key, edges.len());
                        edges.push(Edge { key, faces: (face, None) });
                    }
                    Some(idx) => {
                        let edge = &mut edges[idx];
                        match edge.faces.1 {
                            None => edge.faces.1 = Some(face),
                            Some(second) => {
                                return Err(MeshError::NonManifoldEdge {
                                    edge: key,
                                    faces: [edge.faces.0, second, face],
                                })
                            }
                        }
                    }
                }
            }
        }
        Ok(edges)
    }

    /// The edges used by only one face.
    pub fn boundary_edges(&self) -> Result<Vec<Edge>, MeshError> {
        let mut edges = self.edges()?;
        edges.retain(Edge::is_boundary);
        Ok(edges)
    }

    /// Whether every edge is shared by two faces.
    pub fn is_closed(&self) -> Result<bool, MeshError> {
        Ok(self.edges()?.iter().all(|e| !e.is_boundary()))
    }

    /// The number of edges meeting at each vertex.
    pub fn vertex_valences(&self) -> Result<Vec<usize>, MeshError> {
        let mut valences = vec![0; self.vertices.len()];
        for edge in self.edges()? {
            for v in edge.key.vertices() {
                if let Some(n) = valences.get_mut(v) {
                    *n += 1;
                }
            }
        }
        Ok(valences)
    }
}
