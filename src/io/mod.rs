//! Output formats for filtered feature collections.
//!
//! - `csv` - attribute table only
//! - `geojson` - attributes as properties, geometries as GeoJSON
//!
//! GeoJSON export is a method on [`FeatureCollection`](crate::FeatureCollection).

mod csv;
mod geojson;

pub use csv::*;
