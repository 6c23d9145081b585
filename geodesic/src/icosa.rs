//! Canonical icosahedron on the unit sphere.

use crate::mesh::{normalize3, Mesh};

/// Build the canonical golden-ratio icosahedron: 12 unit vertices,
/// 20 triangular faces with outward CCW winding.
#[must_use]
pub fn icosahedron() -> Mesh {
    let phi = (1.0 + 5.0_f64.sqrt()) * 0.5;

    let raw: [[f64; 3]; 12] = [
        [-1.0, phi, 0.0],
        [1.0, phi, 0.0],
        [-1.0, -phi, 0.0],
        [1.0, -phi, 0.0],
        [0.0, -1.0, phi],
        [0.0, 1.0, phi],
        [0.0, -1.0, -phi],
        [0.0, 1.0, -phi],
        [phi, 0.0, -1.0],
        [phi, 0.0, 1.0],
        [-phi, 0.0, -1.0],
        [-phi, 0.0, 1.0],
    ];
    let vertices = raw.iter().map(|&v| normalize3(v)).collect();

    // Common icosahedron layout (matches many libs).
    let faces = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    Mesh { vertices, faces }
}
