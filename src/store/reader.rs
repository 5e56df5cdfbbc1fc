use std::{fs, path::{Path, PathBuf}, sync::LazyLock};

use polars::prelude::{Column, DataFrame, PlSmallStr};
use regex::Regex;
use shapefile::{dbase::{self, Date, FieldType, FieldValue, Record}, Reader};

use crate::{error::Result, geom::shape_to_geometry};
use super::FeatureCollection;

/// Turns vector files into feature collections.
pub trait FeatureStoreReader {
    /// Parse one file into geometries + attributes.
    fn read(&self, path: &Path) -> Result<FeatureCollection>;

    /// Parse several files and concatenate them in input order.
    fn read_many(&self, paths: &[PathBuf]) -> Result<FeatureCollection> {
        FeatureCollection::concat(
            paths.iter()
                .map(|path| self.read(path))
                .collect::<Result<Vec<_>>>()?
        )
    }
}

/// Reads ESRI shapefiles (`.shp` + `.dbf`, optional `.prj`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapefileReader;

impl FeatureStoreReader for ShapefileReader {
    fn read(&self, path: &Path) -> Result<FeatureCollection> {
        let mut reader = Reader::from_path(path)?;

        let mut geoms = Vec::with_capacity(reader.shape_count()?);
        let mut records = Vec::with_capacity(geoms.capacity());
        for result in reader.iter_shapes_and_records() {
            let (shape, record) = result?;
            geoms.push(shape_to_geometry(shape)?);
            records.push(record);
        }

        log::debug!("[store::read] {} features from {}", geoms.len(), path.display());

        let data = records_to_dataframe(&table_fields(path)?, &records)?;
        FeatureCollection::new(data, geoms, epsg_from_shapefile(path))
    }
}

/// Field names and types declared in the `.dbf` header next to a shapefile, sorted by name.
pub(crate) fn table_fields(path: &Path) -> Result<Vec<(String, FieldType)>> {
    let table = dbase::Reader::from_path(path.with_extension("dbf"))?;
    let mut fields = table.fields().iter()
        .filter(|field| field.name() != "DeletionFlag")
        .map(|field| (field.name().to_string(), field.field_type()))
        .collect::<Vec<_>>();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(fields)
}

/// Convert dBase records into a DataFrame, one column per declared field.
/// The column type follows the dBase field type, so a table without records
/// still carries its full schema.
pub(crate) fn records_to_dataframe(fields: &[(String, FieldType)], records: &[Record]) -> Result<DataFrame> {
    /// Get a character-like field as text
    fn text(value: Option<&FieldValue>) -> Option<String> {
        match value? {
            FieldValue::Character(s) => s.as_ref().map(|s| s.trim().to_string()),
            FieldValue::Memo(s) => Some(s.trim().to_string()),
            FieldValue::Date(d) => d.as_ref().map(iso_date),
            FieldValue::DateTime(dt) => Some(format!("{dt:?}")),
            other => Some(format!("{other:?}")),
        }
    }

    /// Get a numeric-like field as f64
    fn number(value: Option<&FieldValue>) -> Option<f64> {
        match value? {
            FieldValue::Numeric(n) => *n,
            FieldValue::Float(f) => f.map(f64::from),
            FieldValue::Double(d) | FieldValue::Currency(d) => Some(*d),
            FieldValue::Integer(i) => Some(f64::from(*i)),
            _ => None,
        }
    }

    fn iso_date(date: &Date) -> String {
        format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
    }

    let columns = fields.iter()
        .map(|(field, ty)| {
            let name = PlSmallStr::from(field.as_str());
            let values = records.iter().map(|record| record.get(field));
            match ty {
                FieldType::Numeric | FieldType::Float | FieldType::Double | FieldType::Currency =>
                    Column::new(name, values.map(number).collect::<Vec<_>>()),
                FieldType::Integer =>
                    Column::new(name, values.map(|value| match value {
                        Some(FieldValue::Integer(i)) => Some(*i),
                        _ => None,
                    }).collect::<Vec<_>>()),
                FieldType::Logical =>
                    Column::new(name, values.map(|value| match value {
                        Some(FieldValue::Logical(b)) => *b,
                        _ => None,
                    }).collect::<Vec<_>>()),
                _ => Column::new(name, values.map(text).collect::<Vec<_>>()),
            }
        })
        .collect::<Vec<_>>();

    Ok(DataFrame::new(columns)?)
}

/// Sniff the EPSG code from the `.prj` next to a shapefile, if there is one.
pub(crate) fn epsg_from_shapefile(path: &Path) -> Option<u32> {
    static AUTHORITY: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"AUTHORITY\[\s*"EPSG"\s*,\s*"?(\d+)"?\s*\]"#).expect("valid EPSG regex")
    });

    let wkt = fs::read_to_string(path.with_extension("prj")).ok()?;

    // The outermost AUTHORITY comes last in WKT1.
    if let Some(code) = AUTHORITY.captures_iter(&wkt).last().and_then(|c| c[1].parse().ok()) {
        return Some(code)
    }
    wkt.contains("British_National_Grid").then_some(27700)
}

#[cfg(test)]
mod tests {
    use polars::prelude::DataType;
    use shapefile::dbase::{FieldType, FieldValue, Record};

    use super::*;

    fn record(fields: &[(&str, FieldValue)]) -> Record {
        let mut record = Record::default();
        for (name, value) in fields {
            record.insert(name.to_string(), value.clone());
        }
        record
    }

    #[test]
    fn columns_follow_field_types() {
        let records = vec![
            record(&[
                ("NAME", FieldValue::Character(Some("Haringey ".into()))),
                ("DOR", FieldValue::Numeric(Some(3.0))),
                ("BASE", FieldValue::Logical(Some(true))),
            ]),
            record(&[
                ("NAME", FieldValue::Character(None)),
                ("DOR", FieldValue::Numeric(None)),
                ("BASE", FieldValue::Logical(Some(false))),
            ]),
        ];
        let fields = [
            ("BASE".to_string(), FieldType::Logical),
            ("DOR".to_string(), FieldType::Numeric),
            ("NAME".to_string(), FieldType::Character),
        ];
        let df = records_to_dataframe(&fields, &records).unwrap();
        assert_eq!(df.get_column_names().iter().map(|n| n.as_str()).collect::<Vec<_>>(), ["BASE", "DOR", "NAME"]);
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("NAME").unwrap().str().unwrap().get(0), Some("Haringey"));
        assert_eq!(df.column("NAME").unwrap().str().unwrap().get(1), None);
        assert_eq!(df.column("DOR").unwrap().f64().unwrap().get(0), Some(3.0));
        assert_eq!(df.column("BASE").unwrap().bool().unwrap().get(1), Some(false));
    }

    #[test]
    fn no_records_keep_the_schema() {
        let fields = [
            ("HEIGHT".to_string(), FieldType::Numeric),
            ("LEVELS".to_string(), FieldType::Integer),
            ("NAME".to_string(), FieldType::Character),
        ];
        let df = records_to_dataframe(&fields, &[]).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.get_column_names().iter().map(|n| n.as_str()).collect::<Vec<_>>(), ["HEIGHT", "LEVELS", "NAME"]);
        assert_eq!(df.column("HEIGHT").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("LEVELS").unwrap().dtype(), &DataType::Int32);
        assert_eq!(df.column("NAME").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn epsg_from_prj() {
        let dir = tempfile::tempdir().unwrap();
        let shp = dir.path().join("HB0101.shp");
        assert_eq!(epsg_from_shapefile(&shp), None);

        std::fs::write(dir.path().join("HB0101.prj"),
            r#"PROJCS["OSGB 1936 / British National Grid",GEOGCS["OSGB 1936",AUTHORITY["EPSG","4277"]],AUTHORITY["EPSG","27700"]]"#).unwrap();
        assert_eq!(epsg_from_shapefile(&shp), Some(27700));

        std::fs::write(dir.path().join("HB0101.prj"),
            r#"PROJCS["British_National_Grid",GEOGCS["GCS_OSGB_1936"]]"#).unwrap();
        assert_eq!(epsg_from_shapefile(&shp), Some(27700));
    }
}
