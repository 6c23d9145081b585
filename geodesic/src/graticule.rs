//! Geographic (lon/lat) view of a unit-sphere triangle mesh.

use geo_types::{LineString, Polygon};

use crate::mesh::Mesh;

/// Faces whose three longitudes span more than this many degrees are
/// assumed to wrap around the ±180° antimeridian and are dropped.
/// A heuristic threshold, not a derived geometric bound: it trades a
/// few legitimate near-antimeridian triangles for the absence of
/// spurious full-width polygons.
pub const LON_SPAN_LIMIT_DEG: f64 = 270.0;

/// Longitude/latitude in degrees for a unit vector.
#[inline]
#[must_use]
pub fn vertex_lonlat(v: [f64; 3]) -> (f64, f64) {
    let lon = v[1].atan2(v[0]).to_degrees();
    let lat = v[2].clamp(-1.0, 1.0).asin().to_degrees();
    (lon, lat)
}

/// Closed lon/lat triangles for every face that does not cross the
/// antimeridian. The retained set is deterministic for a given mesh.
#[must_use]
pub fn face_polygons(mesh: &Mesh) -> Vec<Polygon<f64>> {
    let lonlat: Vec<(f64, f64)> = mesh.vertices.iter().map(|&v| vertex_lonlat(v)).collect();

    let mut polygons = Vec::with_capacity(mesh.faces.len());
    for face in &mesh.faces {
        let lons = face.map(|i| lonlat[i as usize].0);
        let min = lons.iter().copied().fold(f64::INFINITY, f64::min);
        let max = lons.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max - min > LON_SPAN_LIMIT_DEG {
            continue;
        }
        let ring: Vec<(f64, f64)> = face.iter().map(|&i| lonlat[i as usize]).collect();
        // Polygon::new closes the exterior ring.
        polygons.push(Polygon::new(LineString::from(ring), vec![]));
    }
    polygons
}
