//! Indexed triangle mesh on the unit sphere with midpoint-cached subdivision.

use std::collections::HashMap;

/// Unordered vertex-index pair identifying an edge.
#[derive(Hash, Eq, PartialEq, Clone, Copy)]
struct EdgeKey(u32, u32);

impl EdgeKey {
    fn new(a: u32, b: u32) -> Self {
        if a < b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// Triangle mesh whose vertices all lie on the unit sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions, unit length.
    pub vertices: Vec<[f64; 3]>,
    /// Vertex-index triples, counter-clockwise from outside.
    pub faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Split every face into four by inserting normalized edge midpoints.
    ///
    /// A midpoint is computed exactly once per shared edge: the cache is
    /// keyed by the sorted endpoint pair, so both faces sharing an edge
    /// reference the same new vertex and the refined mesh stays watertight.
    #[must_use]
    pub fn subdivide(&self) -> Mesh {
        let mut vertices = self.vertices.clone();
        let mut faces = Vec::with_capacity(self.faces.len() * 4);
        let mut cache: HashMap<EdgeKey, u32> = HashMap::new();

        fn midpoint_index(
            vertices: &mut Vec<[f64; 3]>,
            cache: &mut HashMap<EdgeKey, u32>,
            a: u32,
            b: u32,
        ) -> u32 {
            let key = EdgeKey::new(a, b);
            if let Some(&idx) = cache.get(&key) {
                return idx;
            }
            let va = vertices[a as usize];
            let vb = vertices[b as usize];
            let mid = normalize3([
                (va[0] + vb[0]) * 0.5,
                (va[1] + vb[1]) * 0.5,
                (va[2] + vb[2]) * 0.5,
            ]);
            let idx = vertices.len() as u32;
            vertices.push(mid);
            cache.insert(key, idx);
            idx
        }

        for &[a, b, c] in &self.faces {
            let m_ab = midpoint_index(&mut vertices, &mut cache, a, b);
            let m_bc = midpoint_index(&mut vertices, &mut cache, b, c);
            let m_ca = midpoint_index(&mut vertices, &mut cache, c, a);
            faces.push([a, m_ab, m_ca]);
            faces.push([b, m_bc, m_ab]);
            faces.push([c, m_ca, m_bc]);
            faces.push([m_ab, m_bc, m_ca]);
        }

        Mesh { vertices, faces }
    }

    /// Apply `n` subdivision passes.
    #[must_use]
    pub fn subdivided(self, n: u32) -> Mesh {
        let mut mesh = self;
        for _ in 0..n {
            mesh = mesh.subdivide();
        }
        mesh
    }
}

/// Normalize a 3D vector (returns the input unchanged if it is zero).
#[inline]
#[must_use]
pub fn normalize3(mut a: [f64; 3]) -> [f64; 3] {
    let n = (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt();
    if n > 0.0 {
        a[0] /= n;
        a[1] /= n;
        a[2] /= n;
    }
    a
}
