//! Administrative boundaries keyed by area name.
//!
//! [`BoundaryProvider`] is the seam between the filter and wherever boundary
//! polygons come from: an in-memory table ([`StaticBoundaries`]), a boundary
//! archive already in memory ([`ArchiveBoundaries`]), or the London statistical
//! GIS boundary archive fetched through an on-disk response cache ([`LondonBoundaries`]).

mod archive;
mod cache;
#[cfg(feature = "download")]
mod london;
mod source;

use std::collections::HashMap;

use geo::MultiPolygon;

use crate::error::{Error, Result};

pub use archive::ArchiveBoundaries;
pub use cache::ResponseCache;
#[cfg(feature = "download")]
pub use london::LondonBoundaries;
pub use source::{BoundarySource, BOROUGH_SHAPE_FILE_PATH, LONDON_BOUNDARY_FILE_URL};

/// Resolves an administrative area name to its boundary polygon.
pub trait BoundaryProvider {
    /// Fails with [`Error::UnknownArea`] if the name is not in the boundary dataset.
    fn resolve(&self, area_name: &str) -> Result<MultiPolygon<f64>>;
}

/// Boundaries held in memory, keyed by area name.
#[derive(Debug, Clone, Default)]
pub struct StaticBoundaries {
    areas: HashMap<String, MultiPolygon<f64>>,
}

impl StaticBoundaries {
    pub fn new() -> Self { Self::default() }

    /// Add (or replace) the boundary of an area.
    pub fn with_area(mut self, name: impl Into<String>, boundary: impl Into<MultiPolygon<f64>>) -> Self {
        self.areas.insert(name.into(), boundary.into());
        self
    }

    /// Get the number of areas.
    #[inline] pub fn len(&self) -> usize { self.areas.len() }

    /// Check if there are no areas.
    #[inline] pub fn is_empty(&self) -> bool { self.areas.is_empty() }
}

impl FromIterator<(String, MultiPolygon<f64>)> for StaticBoundaries {
    fn from_iter<I: IntoIterator<Item = (String, MultiPolygon<f64>)>>(iter: I) -> Self {
        Self { areas: iter.into_iter().collect() }
    }
}

impl BoundaryProvider for StaticBoundaries {
    fn resolve(&self, area_name: &str) -> Result<MultiPolygon<f64>> {
        self.areas.get(area_name).cloned()
            .ok_or_else(|| Error::UnknownArea(area_name.to_string()))
    }
}
