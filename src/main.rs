use std::time::Instant;

use bezier_subdiv::math::Point3d;
use bezier_subdiv::{subdivide_n, BezierCurve, QuadMesh, SubdivideOptions};

const NUM_LOOKUPS: u32 = 1_000_000;

fn main() {
    let cube = QuadMesh::cube(Point3d::new(-1.0, -1.0, -1.0), Point3d::new(1.0, 1.0, 1.0));

    println!("Subdividing...");
    for iterations in 1..=6 {
        let start = Instant::now();
        let mesh = match subdivide_n(&cube, iterations, &SubdivideOptions::default()) {
            Ok(mesh) => mesh,
            Err(err) => {
                eprintln!("subdivision failed: {}", err);
                return;
            }
        };
        println!(
            "{} iterations: {} vertices, {} faces in {:?}",
            iterations,
            mesh.vertices.len(),
            mesh.faces.len(),
            start.elapsed(),
        );
    }

    println!("Sampling...");
    let curve = BezierCurve::default();
    let total = curve.arc_length().unwrap_or_default();
    let start = Instant::now();
    let mut acc = 0.0;
    for i in 0..NUM_LOOKUPS {
        let length = total * (i as f64 / NUM_LOOKUPS as f64);
        acc += curve.arc_length_to_t(length).unwrap_or_default();
    }
    let lookup = start.elapsed() / NUM_LOOKUPS;
    println!(
        "Avg. arc-length lookup: {:?} (length {:.4}, mean t {:.4})",
        lookup,
        total,
        acc / NUM_LOOKUPS as f64,
    );
}
