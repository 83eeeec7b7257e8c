use super::QuadMesh;
use crate::math::Point3d;

impl QuadMesh {
    /// A mesh containing a single face.
    pub fn quad(corners: [Point3d; 4]) -> Self {
        Self {
            vertices: corners.to_vec(),
            faces: vec![[0, 1, 2, 3]],
        }
    }

    /// An axis-aligned box with outward facing, counter-clockwise faces.
    ///
    /// Vertex `i` sits at the `max` corner along x, y and z when bit 0, 1 and 2 of `i` are set.
    pub fn cube(min: Point3d, max: Point3d) -> Self {
        let vertices = (0..8)
            .map(|i| Point3d::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            ))
            .collect();
        let faces = vec![
            [0, 2, 3, 1], // -z
            [4, 5, 7, 6], // +z
            [0, 1, 5, 4], // -y
            [2, 6, 7, 3], // +y
            [0, 4, 6, 2], // -x
            [1, 3, 7, 5], // +x
        ];
        Self { vertices, faces }
    }

    /// A flat `nx` by `ny` grid of square faces in the z = 0 plane, with its corner at the origin.
    pub fn grid(nx: usize, ny: usize, size: f64) -> Self {
        let row = nx + 1;
        let vertices = (0..=ny)
            .flat_map(|j| (0..=nx).map(move |i| Point3d::new(i as f64 * size, j as f64 * size, 0.0)))
            .collect();
        let faces = (0..ny)
            .flat_map(|j| (0..nx).map(move |i| {
                let v = j * row + i;
                [v, v + 1, v + row + 1, v + row]
            }))
            .collect();
        Self { vertices, faces }
    }
}
