//! Per-projection scene planning and SVG composition.
//!
//! Scene planning is pure geometry over already-reprojected polygons so the
//! two-tier extent fallback can be tested without a PROJ runtime.

use std::panic::{catch_unwind, AssertUnwindSafe};

use geo::{BooleanOps, BoundingRect, MultiPolygon, Polygon, Rect};
use svg::node::element::path::Data;
use svg::node::element::{Path as SvgPath, Rectangle, Text};
use svg::Document;

use crate::reproject::{ProjectionError, Projector};

/// Canvas width in pixels; height follows the extent's aspect ratio.
const CANVAS_WIDTH: f64 = 1500.0;
/// Cap on the map band height (equal-aspect scaling shrinks to fit).
const MAX_MAP_HEIGHT: f64 = 1000.0;
/// Blank border around the map band.
const MARGIN: f64 = 20.0;
/// Vertical space reserved for the title above the map band.
const TITLE_BAND: f64 = 60.0;

/// Errors raised while rendering one projection.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// The projection definition was rejected.
    #[error(transparent)]
    Projection(#[from] ProjectionError),
    /// Neither the grid nor the basemap produced finite geometry.
    #[error("projection produced no finite geometry")]
    EmptyExtent,
}

/// Everything needed to draw one projection's map.
pub struct Scene {
    /// Reprojected basemap polygons (fully finite ones only).
    pub basemap: MultiPolygon<f64>,
    /// Reprojected grid triangles, clipped to the mask when possible.
    pub grid: MultiPolygon<f64>,
    /// Visible bounds, taken from the clip mask.
    pub extent: Rect<f64>,
    /// Display name shown as the figure title.
    pub title: String,
}

/// Reproject basemap and grid into `definition`, plan the scene and
/// compose the SVG document for it.
pub fn render_projection(
    title: &str,
    definition: &str,
    basemap: &[Polygon<f64>],
    grid: &[Polygon<f64>],
) -> Result<Document, RenderError> {
    let projector = Projector::new(definition)?;
    let basemap_proj: Vec<Polygon<f64>> =
        basemap.iter().map(|p| projector.project_polygon(p)).collect();
    let grid_proj: Vec<Polygon<f64>> = grid.iter().map(|p| projector.project_polygon(p)).collect();
    let scene = plan_scene(title, basemap_proj, grid_proj)?;
    Ok(compose(&scene))
}

/// Choose the clip mask and extent, then clip the grid.
///
/// If every reprojected grid coordinate is finite the grid itself is the
/// mask and extent source. Otherwise (restricted-domain projections) the
/// mask falls back to the fully-finite basemap polygons. A failing clip
/// degrades to the unclipped grid rather than dropping the projection.
pub fn plan_scene(
    title: &str,
    basemap_proj: Vec<Polygon<f64>>,
    grid_proj: Vec<Polygon<f64>>,
) -> Result<Scene, RenderError> {
    let grid_is_finite = !grid_proj.is_empty() && grid_proj.iter().all(polygon_is_finite);

    let finite_grid = MultiPolygon::new(
        grid_proj.iter().filter(|p| polygon_is_finite(p)).cloned().collect(),
    );
    let finite_basemap = MultiPolygon::new(
        basemap_proj
            .into_iter()
            .filter(|p| !p.exterior().0.is_empty() && polygon_is_finite(p))
            .collect(),
    );

    let mask: &MultiPolygon<f64> = if grid_is_finite { &finite_grid } else { &finite_basemap };
    let extent = mask.bounding_rect().ok_or(RenderError::EmptyExtent)?;

    // Boolean ops can panic on degenerate rings; fall back to the
    // unclipped grid in that case.
    let grid = match catch_unwind(AssertUnwindSafe(|| finite_grid.intersection(mask))) {
        Ok(clipped) => clipped,
        Err(_) => finite_grid.clone(),
    };

    Ok(Scene { basemap: finite_basemap, grid, extent, title: title.to_string() })
}

fn polygon_is_finite(polygon: &Polygon<f64>) -> bool {
    polygon
        .exterior()
        .coords()
        .chain(polygon.interiors().iter().flat_map(|r| r.coords()))
        .all(|c| c.x.is_finite() && c.y.is_finite())
}

/// Compose the SVG document: white background, basemap fill beneath grid
/// outlines, equal-aspect viewport on the extent, centered title, no axes.
#[must_use]
pub fn compose(scene: &Scene) -> Document {
    let dx = scene.extent.width().max(f64::EPSILON);
    let dy = scene.extent.height().max(f64::EPSILON);
    let mut scale = (CANVAS_WIDTH - 2.0 * MARGIN) / dx;
    if dy * scale > MAX_MAP_HEIGHT - 2.0 * MARGIN {
        scale = (MAX_MAP_HEIGHT - 2.0 * MARGIN) / dy;
    }
    let width = dx * scale + 2.0 * MARGIN;
    let height = dy * scale + 2.0 * MARGIN + TITLE_BAND;

    let min = scene.extent.min();
    let max = scene.extent.max();
    // SVG y grows downward; flip around the extent's top edge.
    let to_px =
        move |x: f64, y: f64| ((x - min.x) * scale + MARGIN, (max.y - y) * scale + MARGIN + TITLE_BAND);

    let background = Rectangle::new()
        .set("width", "100%")
        .set("height", "100%")
        .set("fill", "white");

    let basemap = SvgPath::new()
        .set("fill", "lightgray")
        .set("fill-rule", "evenodd")
        .set("stroke", "white")
        .set("stroke-width", 0.5)
        .set("d", multipolygon_data(&scene.basemap, &to_px));

    let grid = SvgPath::new()
        .set("fill", "none")
        .set("stroke", "blue")
        .set("stroke-width", 0.5)
        .set("d", multipolygon_data(&scene.grid, &to_px));

    let caption = Text::new(scene.title.clone())
        .set("x", width / 2.0)
        .set("y", TITLE_BAND * 0.65)
        .set("font-family", "sans-serif")
        .set("font-size", 28)
        .set("text-anchor", "middle");

    Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height))
        .add(background)
        .add(basemap)
        .add(grid)
        .add(caption)
}

fn multipolygon_data<F>(multi: &MultiPolygon<f64>, to_px: &F) -> Data
where
    F: Fn(f64, f64) -> (f64, f64),
{
    let mut data = Data::new();
    for polygon in &multi.0 {
        data = ring_data(data, polygon.exterior(), to_px);
        for ring in polygon.interiors() {
            data = ring_data(data, ring, to_px);
        }
    }
    data
}

fn ring_data<F>(mut data: Data, ring: &geo::LineString<f64>, to_px: &F) -> Data
where
    F: Fn(f64, f64) -> (f64, f64),
{
    let mut coords = ring.coords();
    let Some(first) = coords.next() else {
        return data;
    };
    let (x, y) = to_px(first.x, first.y);
    data = data.move_to((x, y));
    for c in coords {
        let (x, y) = to_px(c.x, c.y);
        data = data.line_to((x, y));
    }
    data.close()
}

/// Filesystem-safe display name: alphanumerics, spaces and underscores
/// only, trailing whitespace trimmed.
#[must_use]
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_')
        .collect::<String>()
        .trim_end()
        .to_string()
}
