//! Fixture builders shared by the integration tests.
#![allow(dead_code)]

use std::{
    fs,
    io::{Cursor, Write},
    path::Path,
};

use shapefile::{
    dbase::{FieldName, FieldValue, Record, TableWriterBuilder},
    Point, Polygon, PolygonRing, Writer,
};
use zip::{write::SimpleFileOptions, ZipWriter};

fn field(name: &str) -> FieldName {
    FieldName::try_from(name).unwrap()
}

fn named_record(name: &str, height: f64) -> Record {
    let mut record = Record::default();
    record.insert("NAME".to_string(), FieldValue::Character(Some(name.to_string())));
    record.insert("HEIGHT".to_string(), FieldValue::Numeric(Some(height)));
    record
}

/// Point shapefile with a NAME and a HEIGHT attribute per feature.
pub fn write_points(path: &Path, features: &[(&str, f64, f64)]) {
    let table = TableWriterBuilder::new()
        .add_character_field(field("NAME"), 32)
        .add_numeric_field(field("HEIGHT"), 10, 2);
    let mut writer = Writer::from_path(path, table).unwrap();
    for (i, &(name, x, y)) in features.iter().enumerate() {
        writer.write_shape_and_record(&Point::new(x, y), &named_record(name, i as f64)).unwrap();
    }
}

/// Polygon shapefile with one axis-aligned square per named feature.
pub fn write_squares(path: &Path, features: &[(&str, [f64; 4])]) {
    let table = TableWriterBuilder::new()
        .add_character_field(field("NAME"), 32)
        .add_numeric_field(field("HEIGHT"), 10, 2);
    let mut writer = Writer::from_path(path, table).unwrap();
    for (i, &(name, bounds)) in features.iter().enumerate() {
        writer.write_shape_and_record(&square(bounds), &named_record(name, i as f64)).unwrap();
    }
}

/// Closed clockwise square ring, the shapefile convention for outer rings.
pub fn square([minx, miny, maxx, maxy]: [f64; 4]) -> Polygon {
    Polygon::new(PolygonRing::Outer(vec![
        Point::new(minx, miny),
        Point::new(minx, maxy),
        Point::new(maxx, maxy),
        Point::new(maxx, miny),
        Point::new(minx, miny),
    ]))
}

/// Zip every sidecar file of `shp` under `entry` (a `.shp` path inside the archive).
pub fn zip_shapefile(shp: &Path, entry: &str) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for ext in ["shp", "shx", "dbf"] {
        let entry = Path::new(entry).with_extension(ext);
        zip.start_file(entry.to_string_lossy().into_owned(), SimpleFileOptions::default()).unwrap();
        zip.write_all(&fs::read(shp.with_extension(ext)).unwrap()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Empty files with the given names, for resolution tests.
pub fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"").unwrap();
    }
}
