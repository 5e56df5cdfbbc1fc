use geo::MultiPolygon;

use crate::{boundary::BoundaryProvider, error::Result, geom::PreparedPolygon, store::FeatureCollection};

/// Filters all elements of the data set that lie in the specified borough.
///
/// Row order and attributes are preserved, and geometries are returned
/// unclipped. An unknown borough is an error, never an empty result.
pub fn reduce_to_borough<P: BoundaryProvider + ?Sized>(provider: &P, borough_name: &str, data: &FeatureCollection) -> Result<FeatureCollection> {
    let borough = provider.resolve(borough_name)?;
    let filtered = reduce_to_polygon(borough, data)?;
    log::info!("[filter] {borough_name}: kept {} of {} features", filtered.len(), data.len());
    Ok(filtered)
}

/// Filters all elements of the data set that lie within `boundary`.
pub fn reduce_to_polygon(boundary: impl Into<MultiPolygon<f64>>, data: &FeatureCollection) -> Result<FeatureCollection> {
    // Prepared once, queried for every feature.
    let prepared = PreparedPolygon::prepare(boundary);
    let mask = data.geoms().iter()
        .map(|geom| prepared.contains(geom))
        .collect::<Vec<_>>();
    data.select(&mask)
}
