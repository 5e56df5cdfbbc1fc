use std::{cell::RefCell, collections::HashMap};

use geo::MultiPolygon;

use crate::error::{Error, Result};
use super::{ArchiveBoundaries, BoundaryProvider, BoundarySource, ResponseCache};

/// London borough boundaries from the statistical GIS boundary archive.
///
/// The archive is fetched once through the [`ResponseCache`]; resolved
/// boundaries are kept in memory for the lifetime of the provider.
#[derive(Debug)]
pub struct LondonBoundaries {
    source: BoundarySource,
    cache: ResponseCache,
    loaded: RefCell<Option<HashMap<String, MultiPolygon<f64>>>>,
}

impl LondonBoundaries {
    /// Provider using the default source and the per-user cache directory.
    pub fn new() -> Result<Self> {
        let dir = ResponseCache::default_dir()
            .ok_or_else(|| std::io::Error::other("no cache directory on this platform"))?;
        Ok(Self::with_cache(ResponseCache::new(dir)))
    }

    /// Provider using the default source and the given cache.
    pub fn with_cache(cache: ResponseCache) -> Self {
        Self { source: BoundarySource::default(), cache, loaded: RefCell::new(None) }
    }

    /// Replace the boundary source (archive URL, shape file path, name field).
    pub fn with_source(mut self, source: BoundarySource) -> Self {
        self.source = source;
        self.loaded = RefCell::new(None);
        self
    }

    #[inline] pub fn source(&self) -> &BoundarySource { &self.source }

    #[inline] pub fn cache(&self) -> &ResponseCache { &self.cache }

    /// Names of all areas in the boundary dataset, sorted.
    pub fn area_names(&self) -> Result<Vec<String>> {
        self.ensure_loaded()?;
        let mut names = self.loaded.borrow().iter()
            .flat_map(|areas| areas.keys().cloned())
            .collect::<Vec<_>>();
        names.sort();
        Ok(names)
    }

    fn ensure_loaded(&self) -> Result<()> {
        if self.loaded.borrow().is_some() { return Ok(()) }

        let archive = self.cache.fetch(&self.source.url)?;
        let areas = ArchiveBoundaries::new(archive, self.source.clone()).load()?;
        *self.loaded.borrow_mut() = Some(areas);
        Ok(())
    }
}

impl BoundaryProvider for LondonBoundaries {
    fn resolve(&self, area_name: &str) -> Result<MultiPolygon<f64>> {
        self.ensure_loaded()?;
        self.loaded.borrow().as_ref()
            .and_then(|areas| areas.get(area_name).cloned())
            .ok_or_else(|| Error::UnknownArea(area_name.to_string()))
    }
}
