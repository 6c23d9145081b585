use geodesic::icosahedron;

#[test]
fn base_icosahedron_counts() {
    let mesh = icosahedron();
    assert_eq!(mesh.vertices.len(), 12);
    assert_eq!(mesh.faces.len(), 20);
}

#[test]
fn subdivision_face_and_vertex_counts() {
    for n in 0..=3u32 {
        let mesh = icosahedron().subdivided(n);
        let quads = 4usize.pow(n);
        assert_eq!(mesh.faces.len(), 20 * quads, "faces at n={n}");
        // Watertight subdivision: every shared-edge midpoint is created once,
        // so V = 10 * 4^n + 2 holds exactly.
        assert_eq!(mesh.vertices.len(), 10 * quads + 2, "vertices at n={n}");
    }
}

#[test]
fn vertices_stay_on_unit_sphere() {
    let mesh = icosahedron().subdivided(3);
    for v in &mesh.vertices {
        let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!((norm - 1.0).abs() < 1e-12, "norm {norm}");
    }
}

#[test]
fn faces_reference_valid_distinct_vertices() {
    let mesh = icosahedron().subdivided(2);
    let count = mesh.vertices.len() as u32;
    for face in &mesh.faces {
        assert!(face.iter().all(|&i| i < count));
        assert_ne!(face[0], face[1]);
        assert_ne!(face[1], face[2]);
        assert_ne!(face[2], face[0]);
    }
}

#[test]
fn no_duplicate_midpoint_vertices() {
    let mesh = icosahedron().subdivided(2);
    // Any duplicated midpoint would place two vertices at distance ~0.
    for i in 0..mesh.vertices.len() {
        for j in (i + 1)..mesh.vertices.len() {
            let a = mesh.vertices[i];
            let b = mesh.vertices[j];
            let d2 = (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2);
            assert!(d2 > 1e-12, "vertices {i} and {j} coincide");
        }
    }
}

#[test]
fn subdivision_is_deterministic() {
    let a = icosahedron().subdivided(2);
    let b = icosahedron().subdivided(2);
    assert_eq!(a, b);
}
