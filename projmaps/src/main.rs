//! Batch renderer: world basemap plus geodesic graticule under many
//! cartographic projections, one SVG per projection.
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro)]

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use geo_types::Polygon;
use log::{info, warn};
use projmaps::{basemap, projections, render};

/// Icosahedron subdivision passes for the graticule.
const SUBDIVISIONS: u32 = 3;
/// Zipped shapefile with the country polygons.
const BASEMAP_ARCHIVE: &str = "map.zip";
/// Output directory for file mode, created if absent.
const OUTPUT_DIR: &str = "projection_maps_svg";

#[derive(Parser, Debug)]
#[command(name = "projmaps", version, about = "Generate maps of various geographic projections.")]
struct Args {
    /// Display each map in the system viewer instead of saving it.
    #[arg(long)]
    show: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mesh = geodesic::icosahedron().subdivided(SUBDIVISIONS);
    let grid = geodesic::face_polygons(&mesh);
    println!(
        "[grid] subdivisions={} faces={} retained_triangles={}",
        SUBDIVISIONS,
        mesh.faces.len(),
        grid.len()
    );

    let world = basemap::load(Path::new(BASEMAP_ARCHIVE))
        .with_context(|| format!("loading basemap archive '{BASEMAP_ARCHIVE}'"))?;
    println!("[basemap] polygons={}", world.len());

    let table = projections::PROJECTIONS;
    println!("[table] projections={}", table.len());

    if args.show {
        println!("Running in interactive display mode. Close each viewer and press Enter to continue...");
    } else {
        std::fs::create_dir_all(OUTPUT_DIR)
            .with_context(|| format!("creating output directory '{OUTPUT_DIR}'"))?;
        println!("Preparing to save maps in the '{OUTPUT_DIR}/' directory...");
    }

    let mut rendered = 0usize;
    for &(title, definition) in table {
        info!("generating plot for: {title}");
        match run_one(title, definition, &world, &grid, args.show) {
            Ok(()) => rendered += 1,
            Err(e) => warn!("skipping '{title}': {e}"),
        }
    }
    println!("[done] rendered {rendered}/{} projections", table.len());
    Ok(())
}

/// Render one projection end to end. Any error here skips only this
/// projection; the batch keeps going.
fn run_one(
    title: &str,
    definition: &str,
    world: &[Polygon<f64>],
    grid: &[Polygon<f64>],
    show: bool,
) -> anyhow::Result<()> {
    let document = render::render_projection(title, definition, world, grid)?;
    let filename = format!("{}.svg", render::sanitize_title(title));

    if show {
        let path = std::env::temp_dir().join(filename);
        svg::save(&path, &document)
            .with_context(|| format!("writing '{}'", path.display()))?;
        display(&path)?;
    } else {
        let path = PathBuf::from(OUTPUT_DIR).join(filename);
        svg::save(&path, &document)
            .with_context(|| format!("writing '{}'", path.display()))?;
        println!("--> saved {}", path.display());
    }
    Ok(())
}

/// Open `path` in the platform viewer and block until Enter is pressed.
/// The sequential gate of interactive mode; rendering never proceeds to
/// the next projection while the current one is on display.
fn display(path: &Path) -> anyhow::Result<()> {
    let opener = if cfg!(target_os = "macos") { "open" } else { "xdg-open" };
    std::process::Command::new(opener)
        .arg(path)
        .spawn()
        .with_context(|| format!("launching '{opener}'"))?;
    println!("[show] {} (press Enter for the next projection)", path.display());
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
