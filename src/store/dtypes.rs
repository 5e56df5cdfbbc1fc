//! Data types of the UKBuildings attribute table.
//!
//! Flags are stored as booleans and small counts as narrow integers to save
//! memory. Categorical codes are kept as text: the attribute table never grows
//! beyond a borough's worth of rows, and text columns stay stackable across files.

use polars::prelude::DataType;

use crate::error::Result;
use super::FeatureCollection;

/// Target type of a UKBuildings attribute column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Bool,
    Int8,
    Int16,
    Category,
}

impl ColumnType {
    /// The polars dtype this column is cast to.
    pub fn dtype(&self) -> DataType {
        match self {
            Self::Bool => DataType::Boolean,
            Self::Int8 => DataType::Int8,
            Self::Int16 => DataType::Int16,
            Self::Category => DataType::String,
        }
    }
}

pub const UKBUILDING_DATA_TYPES: &[(&str, ColumnType)] = &[
    ("BASE", ColumnType::Bool),
    ("BEC", ColumnType::Int8),
    ("BUNG", ColumnType::Bool),
    ("DOR", ColumnType::Int16),
    ("DPS", ColumnType::Int16),
    ("GET", ColumnType::Category),
    ("MBN", ColumnType::Category),
    ("NAB", ColumnType::Category),
    ("RBCA", ColumnType::Category),
    ("RBCAT", ColumnType::Category),
    ("RBCC", ColumnType::Category),
    ("RBCS", ColumnType::Category),
    ("RBCT", ColumnType::Category),
    ("RBCTT", ColumnType::Category),
    ("RBN", ColumnType::Int8),
    // TODO: RBQ and KBD are missing from the dataset manual's type table.
    ("RDT", ColumnType::Category),
    ("RDTT", ColumnType::Category),
    ("RNR", ColumnType::Category),
    ("RRN", ColumnType::Int8),
    ("RRT", ColumnType::Category),
    ("RRTT", ColumnType::Category),
    ("RWN", ColumnType::Int8),
    ("RWT", ColumnType::Category),
    ("RWTT", ColumnType::Category),
    ("SBC", ColumnType::Category),
];

/// Cast UKBuildings columns to the types in [`UKBUILDING_DATA_TYPES`].
/// Columns absent from the data are skipped; geometries and CRS are kept.
pub fn convert_to_proper_ukbuilding_types(collection: FeatureCollection) -> Result<FeatureCollection> {
    let (mut data, geoms, epsg) = collection.into_parts();

    for (name, ty) in UKBUILDING_DATA_TYPES {
        let Ok(column) = data.column(name) else { continue };
        if column.dtype() == &ty.dtype() { continue }

        // Same name, so the column is replaced in place.
        let cast = column.cast(&ty.dtype())?;
        data.with_column(cast)?;
    }

    FeatureCollection::new(data, geoms, epsg)
}
