use std::path::Path;

use crate::{
    error::Result,
    grid::{BlockId, BoundingBox, ReferenceGrid},
    store::{
        convert_to_proper_ukbuilding_types, production_block_chunked_files, production_block_files_in_bbox,
        FeatureCollection, FeatureStoreReader, ShapefileReader,
    },
};

/// Read the UKMap files of the given production blocks into one collection,
/// in block order.
pub fn read_ukmap(root_folder: &Path, blocks: &[BlockId]) -> Result<FeatureCollection> {
    read_blocks(&ShapefileReader, root_folder, blocks)
}

/// Read every UKMap production block touched by the bounding box.
pub fn read_ukmap_bbox(root_folder: &Path, grid: &ReferenceGrid, bbox: &BoundingBox) -> Result<FeatureCollection> {
    let files = production_block_files_in_bbox(root_folder, grid, bbox)?;
    ShapefileReader.read_many(&files)
}

/// Read a UKBuildings shape file and cast its attributes to their proper types.
pub fn read_ukbuildings(path: &Path) -> Result<FeatureCollection> {
    convert_to_proper_ukbuilding_types(ShapefileReader.read(path)?)
}

/// Resolve blocks to files under `root_folder` and read them with `reader`.
pub fn read_blocks<R: FeatureStoreReader + ?Sized, S: AsRef<str>>(reader: &R, root_folder: &Path, blocks: &[S]) -> Result<FeatureCollection> {
    let files = production_block_chunked_files(root_folder, blocks)?;
    reader.read_many(&files)
}
