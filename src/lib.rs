#![doc = "Utilities to work with the UKMap and UKBuildings datasets"]
mod boundary;
mod common;
mod error;
mod filter;
mod geom;
mod grid;
mod io;
mod read;
mod store;

#[doc(inline)]
pub use error::{Error, Result, NOT_HB_ERROR_MESSAGE};

#[doc(inline)]
pub use grid::{production_blocks, BlockId, BoundingBox, ReferenceGrid};

#[doc(inline)]
pub use store::{
    convert_to_proper_ukbuilding_types, production_block_chunked_files, production_block_files_in_bbox,
    ColumnType, FeatureCollection, FeatureStoreReader, ShapefileReader, PRODUCTION_BLOCK_EXTENSION,
    UKBUILDING_DATA_TYPES,
};

#[doc(inline)]
pub use read::{read_blocks, read_ukbuildings, read_ukmap, read_ukmap_bbox};

#[doc(inline)]
pub use geom::PreparedPolygon;

#[doc(inline)]
pub use boundary::{
    ArchiveBoundaries, BoundaryProvider, BoundarySource, ResponseCache, StaticBoundaries,
    BOROUGH_SHAPE_FILE_PATH, LONDON_BOUNDARY_FILE_URL,
};

#[cfg(feature = "download")]
#[doc(inline)]
pub use boundary::LondonBoundaries;

#[doc(inline)]
pub use filter::{reduce_to_borough, reduce_to_polygon};

#[doc(inline)]
pub use io::{write_csv, write_csv_string};
