use std::{collections::HashMap, path::Path};

use geo::{Geometry, MultiPolygon};
use shapefile::{dbase::FieldValue, Reader};

use crate::{common::extract_zip, error::{Error, Result}, geom::shape_to_geometry};
use super::{BoundaryProvider, BoundarySource};

/// Boundaries read out of a ZIP archive held in memory.
///
/// Every lookup extracts the archive into a fresh temporary directory, which is
/// removed again before returning, whatever the outcome.
#[derive(Debug, Clone)]
pub struct ArchiveBoundaries {
    archive: Vec<u8>,
    source: BoundarySource,
}

impl ArchiveBoundaries {
    pub fn new(archive: Vec<u8>, source: BoundarySource) -> Self {
        Self { archive, source }
    }

    /// Extract the archive and read every named boundary in it.
    pub fn load(&self) -> Result<HashMap<String, MultiPolygon<f64>>> {
        let tmpdir = tempfile::Builder::new().prefix("london-boundary-files").tempdir()?;
        extract_zip(&self.archive, tmpdir.path())?;

        let shape_file = tmpdir.path().join(&self.source.shapefile_path);
        if !shape_file.is_file() {
            return Err(Error::MissingArchiveEntry(self.source.shapefile_path.clone()));
        }

        read_boundaries(&shape_file, &self.source.name_field)
    }
}

impl BoundaryProvider for ArchiveBoundaries {
    fn resolve(&self, area_name: &str) -> Result<MultiPolygon<f64>> {
        self.load()?.remove(area_name)
            .ok_or_else(|| Error::UnknownArea(area_name.to_string()))
    }
}

/// Read all (multi)polygons of a boundary shape file, keyed by `name_field`.
/// Records without a name are skipped.
pub(super) fn read_boundaries(path: &Path, name_field: &str) -> Result<HashMap<String, MultiPolygon<f64>>> {
    let mut reader = Reader::from_path(path)?;

    let mut boundaries = HashMap::new();
    for result in reader.iter_shapes_and_records() {
        let (shape, record) = result?;
        let Some(FieldValue::Character(Some(name))) = record.get(name_field) else { continue };

        let boundary = match shape_to_geometry(shape)? {
            Geometry::MultiPolygon(mp) => mp,
            Geometry::Polygon(p) => MultiPolygon(vec![p]),
            _ => return Err(Error::UnsupportedShape(format!("non-polygon boundary for '{}'", name.trim()))),
        };
        boundaries.insert(name.trim().to_string(), boundary);
    }

    log::debug!("[boundary::archive] {} boundaries in {}", boundaries.len(), path.display());
    Ok(boundaries)
}
