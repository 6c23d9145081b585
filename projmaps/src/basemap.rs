//! Country polygons loaded from a zipped shapefile archive.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use geo_types::{MultiPolygon, Polygon};

/// Errors raised while loading the basemap archive.
#[derive(thiserror::Error, Debug)]
pub enum BasemapError {
    /// Archive could not be opened or read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Not a valid zip archive.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    /// Archive holds no `.shp` entry.
    #[error("no shapefile entry in archive")]
    MissingShapefile,
    /// Shapefile payload could not be parsed.
    #[error("shapefile error: {0}")]
    Shapefile(#[from] shapefile::Error),
}

/// Load every polygon from the first `.shp` entry of the archive at `path`.
///
/// Only the geometry stream is read; attribute tables are ignored.
pub fn load(path: &Path) -> Result<Vec<Polygon<f64>>, BasemapError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let index = (0..archive.len())
        .find(|&i| {
            archive
                .by_index(i)
                .map(|entry| entry.name().to_ascii_lowercase().ends_with(".shp"))
                .unwrap_or(false)
        })
        .ok_or(BasemapError::MissingShapefile)?;

    let mut entry = archive.by_index(index)?;
    let mut buf = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut buf)?;

    let shapes = shapefile::ShapeReader::new(Cursor::new(buf))?.read()?;
    let mut polygons = Vec::new();
    for shape in shapes {
        if let shapefile::Shape::Polygon(poly) = shape {
            let multi: MultiPolygon<f64> = poly.into();
            polygons.extend(multi.0);
        }
    }
    Ok(polygons)
}
