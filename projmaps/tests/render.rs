use geo::BoundingRect;
use geo_types::{polygon, Polygon};
use projmaps::render::{compose, plan_scene, sanitize_title, Scene};

fn unit_triangle(x0: f64, y0: f64) -> Polygon<f64> {
    polygon![
        (x: x0, y: y0),
        (x: x0 + 1.0, y: y0),
        (x: x0, y: y0 + 1.0),
    ]
}

fn square(x0: f64, y0: f64, size: f64) -> Polygon<f64> {
    polygon![
        (x: x0, y: y0),
        (x: x0 + size, y: y0),
        (x: x0 + size, y: y0 + size),
        (x: x0, y: y0 + size),
    ]
}

#[test]
fn sanitize_keeps_letters_digits_spaces_underscores() {
    assert_eq!(sanitize_title("Mercator (1569)"), "Mercator 1569");
    assert_eq!(sanitize_title("Hammer & Eckert-Greifendorff"), "Hammer  EckertGreifendorff");
    assert_eq!(sanitize_title("plain_name"), "plain_name");
    assert_eq!(sanitize_title("trailing! "), "trailing");
}

#[test]
fn finite_grid_is_its_own_mask_and_extent() {
    let basemap = vec![square(-10.0, -10.0, 20.0)];
    let grid = vec![unit_triangle(0.0, 0.0), unit_triangle(2.0, 2.0)];
    let scene = plan_scene("t", basemap, grid).unwrap();
    // Extent comes from the grid, not the much larger basemap square.
    assert!((scene.extent.min().x - 0.0).abs() < 1e-12);
    assert!((scene.extent.max().x - 3.0).abs() < 1e-12);
    assert!((scene.extent.max().y - 3.0).abs() < 1e-12);
    assert!(!scene.grid.0.is_empty());
}

#[test]
fn non_finite_grid_falls_back_to_basemap_extent() {
    let basemap = vec![square(-5.0, -5.0, 10.0)];
    let mut bad = unit_triangle(100.0, 100.0);
    bad.exterior_mut(|ring| ring.0[1].x = f64::INFINITY);
    let grid = vec![unit_triangle(0.0, 0.0), bad];
    let scene = plan_scene("t", basemap, grid).unwrap();
    // Extent comes from the basemap square.
    assert!((scene.extent.min().x - -5.0).abs() < 1e-12);
    assert!((scene.extent.max().x - 5.0).abs() < 1e-12);
    // The non-finite triangle is gone and the clipped grid stays inside
    // the basemap-derived extent.
    let bbox = scene.grid.bounding_rect().unwrap();
    assert!(bbox.min().x >= -5.0 - 1e-9 && bbox.max().x <= 5.0 + 1e-9);
    for poly in &scene.grid {
        for coord in poly.exterior().coords() {
            assert!(coord.x.is_finite() && coord.y.is_finite());
        }
    }
}

#[test]
fn empty_geometry_is_an_error() {
    let mut bad = unit_triangle(0.0, 0.0);
    bad.exterior_mut(|ring| ring.0[0].x = f64::NAN);
    let err = plan_scene("t", vec![], vec![bad]);
    assert!(err.is_err());
}

#[test]
fn composed_document_has_background_layers_and_title() {
    let basemap = vec![square(-5.0, -5.0, 10.0)];
    let grid = vec![unit_triangle(0.0, 0.0)];
    let scene: Scene = plan_scene("Mollweide", basemap, grid).unwrap();
    let rendered = compose(&scene).to_string();
    assert!(rendered.contains("<svg"));
    assert!(rendered.contains("Mollweide"));
    assert!(rendered.contains("lightgray"));
    assert!(rendered.contains("blue"));
    // Two path layers: filled basemap and unfilled grid.
    assert_eq!(rendered.matches("<path").count(), 2);
}

#[test]
fn document_saves_to_disk() {
    let basemap = vec![square(-5.0, -5.0, 10.0)];
    let grid = vec![unit_triangle(0.0, 0.0)];
    let scene = plan_scene("Save Check", basemap, grid).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("{}.svg", sanitize_title("Save Check")));
    svg::save(&path, &compose(&scene)).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Save Check"));
}

#[test]
fn projection_table_is_well_formed() {
    let table = projmaps::projections::PROJECTIONS;
    assert!(!table.is_empty());
    for &(name, definition) in table {
        assert!(!sanitize_title(name).is_empty(), "unusable name {name:?}");
        assert!(definition.starts_with("+proj="), "bad definition {definition:?}");
        assert!(definition.ends_with("+no_defs"));
    }
    let mut names: Vec<&str> = table.iter().map(|&(n, _)| n).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), table.len(), "duplicate display names");
}
