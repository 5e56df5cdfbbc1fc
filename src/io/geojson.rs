use std::{fs::File, io::BufWriter, path::Path};

use geo::{Coord, Geometry, LineString, Polygon};
use polars::prelude::AnyValue;
use serde_json::{json, Map, Number, Value};

use crate::{error::Result, store::FeatureCollection};

impl FeatureCollection {
    /// Export as a GeoJSON FeatureCollection.
    /// Every attribute column becomes a feature property; geometries are written unclipped.
    pub fn to_geojson(&self) -> Result<Value> {
        let columns = self.data().get_columns();

        let mut features = Vec::with_capacity(self.len());
        for (idx, geom) in self.geoms().iter().enumerate() {
            let mut properties = Map::new();
            for column in columns {
                let value = column.as_materialized_series().get(idx)?;
                properties.insert(column.name().to_string(), any_value_to_json(&value));
            }

            features.push(json!({
                "type": "Feature",
                "geometry": geometry_to_geojson(geom),
                "properties": properties,
            }));
        }

        let mut out = json!({
            "type": "FeatureCollection",
            "features": features,
        });
        if let Some(epsg) = self.epsg() {
            out["crs"] = json!({
                "type": "name",
                "properties": { "name": format!("urn:ogc:def:crs:EPSG::{epsg}") },
            });
        }
        Ok(out)
    }

    /// Write the GeoJSON export to a file.
    pub fn to_geojson_file(&self, path: &Path) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(writer, &self.to_geojson()?)?;
        log::debug!("[io::geojson] wrote {} features to {}", self.len(), path.display());
        Ok(())
    }
}

fn any_value_to_json(value: &AnyValue) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => json!(b),
        AnyValue::String(s) => json!(s),
        AnyValue::StringOwned(s) => json!(s.as_str()),
        AnyValue::Int8(v) => json!(v),
        AnyValue::Int16(v) => json!(v),
        AnyValue::Int32(v) => json!(v),
        AnyValue::Int64(v) => json!(v),
        AnyValue::UInt8(v) => json!(v),
        AnyValue::UInt16(v) => json!(v),
        AnyValue::UInt32(v) => json!(v),
        AnyValue::UInt64(v) => json!(v),
        // NaN and infinities have no JSON representation.
        AnyValue::Float32(v) => Number::from_f64(*v as f64).map_or(Value::Null, Value::Number),
        AnyValue::Float64(v) => Number::from_f64(*v).map_or(Value::Null, Value::Number),
        other => Value::String(other.to_string()),
    }
}

fn coords(ls: &LineString<f64>) -> Vec<[f64; 2]> {
    ls.coords().map(|c| [c.x, c.y]).collect()
}

fn rings(polygon: &Polygon<f64>) -> Vec<Vec<[f64; 2]>> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(coords)
        .collect()
}

fn point(c: Coord<f64>) -> [f64; 2] { [c.x, c.y] }

fn geometry_to_geojson(geom: &Geometry<f64>) -> Value {
    match geom {
        Geometry::Point(p) => json!({ "type": "Point", "coordinates": point(p.0) }),
        Geometry::MultiPoint(mp) => json!({
            "type": "MultiPoint",
            "coordinates": mp.iter().map(|p| point(p.0)).collect::<Vec<_>>(),
        }),
        Geometry::Line(line) => json!({
            "type": "LineString",
            "coordinates": [point(line.start), point(line.end)],
        }),
        Geometry::LineString(ls) => json!({ "type": "LineString", "coordinates": coords(ls) }),
        Geometry::MultiLineString(mls) => json!({
            "type": "MultiLineString",
            "coordinates": mls.iter().map(coords).collect::<Vec<_>>(),
        }),
        Geometry::Polygon(p) => json!({ "type": "Polygon", "coordinates": rings(p) }),
        Geometry::MultiPolygon(mp) => json!({
            "type": "MultiPolygon",
            "coordinates": mp.iter().map(rings).collect::<Vec<_>>(),
        }),
        Geometry::Rect(r) => json!({ "type": "Polygon", "coordinates": rings(&r.to_polygon()) }),
        Geometry::Triangle(t) => json!({ "type": "Polygon", "coordinates": rings(&t.to_polygon()) }),
        Geometry::GeometryCollection(gc) => json!({
            "type": "GeometryCollection",
            "geometries": gc.iter().map(geometry_to_geojson).collect::<Vec<_>>(),
        }),
    }
}
