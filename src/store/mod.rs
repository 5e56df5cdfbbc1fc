mod dtypes;
mod features;
mod reader;
mod resolve;

pub use dtypes::{convert_to_proper_ukbuilding_types, ColumnType, UKBUILDING_DATA_TYPES};
pub use features::FeatureCollection;
pub use reader::{FeatureStoreReader, ShapefileReader};
pub use resolve::{production_block_chunked_files, production_block_files_in_bbox, PRODUCTION_BLOCK_EXTENSION};
