//! Geodesic sphere construction by recursive icosahedron subdivision,
//! plus the geographic (lon/lat) view of the resulting triangle grid.
#![deny(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro)]

pub mod graticule;
pub mod icosa;
pub mod mesh;

pub use graticule::{face_polygons, vertex_lonlat, LON_SPAN_LIMIT_DEG};
pub use icosa::icosahedron;
pub use mesh::Mesh;
