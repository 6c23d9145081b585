//! Coordinate reprojection through PROJ definition strings.

use geo_types::{Coord, LineString, Polygon};
use proj::Proj;

/// Errors raised while setting up a reprojection.
#[derive(thiserror::Error, Debug)]
pub enum ProjectionError {
    /// Definition string rejected by PROJ.
    #[error("invalid projection definition: {0}")]
    Definition(#[from] proj::ProjCreateError),
}

/// Forward projection from geographic degrees into one target projection.
pub struct Projector {
    proj: Proj,
}

impl Projector {
    /// Compile a PROJ pipeline definition
    /// (`+proj=<code> +ellps=... +datum=... +units=... +no_defs`).
    pub fn new(definition: &str) -> Result<Self, ProjectionError> {
        Ok(Self { proj: Proj::new(definition)? })
    }

    /// Project one lon/lat pair (degrees). Points outside the projection's
    /// valid domain come back non-finite instead of raising.
    #[must_use]
    pub fn project(&self, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
        let point = geo_types::Point::new(lon_deg.to_radians(), lat_deg.to_radians());
        match self.proj.project(point, false) {
            Ok(p) => (p.x(), p.y()),
            Err(_) => (f64::NAN, f64::NAN),
        }
    }

    /// Project every ring coordinate of `polygon`.
    #[must_use]
    pub fn project_polygon(&self, polygon: &Polygon<f64>) -> Polygon<f64> {
        let exterior = self.project_ring(polygon.exterior());
        let interiors = polygon.interiors().iter().map(|r| self.project_ring(r)).collect();
        Polygon::new(exterior, interiors)
    }

    fn project_ring(&self, ring: &LineString<f64>) -> LineString<f64> {
        LineString::new(
            ring.coords()
                .map(|c| {
                    let (x, y) = self.project(c.x, c.y);
                    Coord { x, y }
                })
                .collect(),
        )
    }
}
