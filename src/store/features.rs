use geo::{BoundingRect, Coord, Geometry, Rect};
use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};

use crate::error::{Error, Result};

/// An ordered table of features: attribute rows paired with geometries.
///
/// Row `i` of `data` belongs to `geoms[i]`. Collections are never mutated in
/// place by this crate; selection and concatenation build new ones.
#[derive(Debug, Clone)]
pub struct FeatureCollection {
    data: DataFrame,
    geoms: Vec<Geometry<f64>>,
    epsg: Option<u32>, // EPSG code, if known
}

impl FeatureCollection {
    /// Pair an attribute table with its geometries, checking that lengths agree.
    pub fn new(data: DataFrame, geoms: Vec<Geometry<f64>>, epsg: Option<u32>) -> Result<Self> {
        if data.height() != geoms.len() && data.width() > 0 {
            return Err(Error::LengthMismatch { rows: data.height(), geoms: geoms.len() });
        }
        Ok(Self { data, geoms, epsg })
    }

    /// A collection with no rows and no columns.
    pub fn empty() -> Self {
        Self { data: DataFrame::empty(), geoms: Vec::new(), epsg: None }
    }

    /// Get the number of features.
    #[inline] pub fn len(&self) -> usize { self.geoms.len() }

    /// Check if there are no features.
    #[inline] pub fn is_empty(&self) -> bool { self.geoms.is_empty() }

    /// Get a reference to the attribute table.
    #[inline] pub fn data(&self) -> &DataFrame { &self.data }

    /// Get a reference to the list of geometries.
    #[inline] pub fn geoms(&self) -> &[Geometry<f64>] { &self.geoms }

    /// Get the EPSG code, if known.
    #[inline] pub fn epsg(&self) -> Option<u32> { self.epsg }

    /// Split into attribute table, geometries, and EPSG code.
    pub fn into_parts(self) -> (DataFrame, Vec<Geometry<f64>>, Option<u32>) {
        (self.data, self.geoms, self.epsg)
    }

    /// Replace the attribute table, keeping geometries and CRS.
    pub fn with_data(self, data: DataFrame) -> Result<Self> {
        Self::new(data, self.geoms, self.epsg)
    }

    /// Compute the bounding rectangle of all geometries.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.geoms.iter()
            .filter_map(|geom| geom.bounding_rect())
            .reduce(|a, b| Rect::new(
                Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            ))
    }

    /// New collection holding the rows where `mask` is true, in their original order.
    pub fn select(&self, mask: &[bool]) -> Result<Self> {
        if mask.len() != self.len() {
            return Err(Error::LengthMismatch { rows: mask.len(), geoms: self.len() });
        }

        let data = if self.data.width() > 0 {
            self.data.filter(&BooleanChunked::from_slice("mask".into(), mask))?
        } else {
            self.data.clone()
        };

        let geoms = self.geoms.iter().zip(mask)
            .filter_map(|(geom, &keep)| keep.then(|| geom.clone()))
            .collect();

        Self::new(data, geoms, self.epsg)
    }

    /// Stack collections vertically in input order, preserving every row.
    /// Schemas are expected to match; no reconciliation is attempted.
    /// Collections with neither rows nor columns (see [`FeatureCollection::empty`]) are skipped.
    pub fn concat(collections: impl IntoIterator<Item = Self>) -> Result<Self> {
        let mut collections = collections.into_iter()
            .filter(|fc| !(fc.is_empty() && fc.data.width() == 0));
        let Some(mut out) = collections.next() else { return Ok(Self::empty()) };

        for next in collections {
            out.data.vstack_mut(&next.data)?;
            out.geoms.extend(next.geoms);
            out.epsg = out.epsg.or(next.epsg);
        }

        Ok(out)
    }
}
