use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{error::{Error, Result}, grid::{BoundingBox, ReferenceGrid}};

/// Extension of the vector files production blocks are chunked into.
pub const PRODUCTION_BLOCK_EXTENSION: &str = "shp";

/// List the production block files directly inside `root_folder`,
/// sorted by file name so that resolution does not depend on the platform.
fn list_block_files(root_folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root_folder).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == PRODUCTION_BLOCK_EXTENSION)
        {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Shape file paths for each production block, in request order.
///
/// A file belongs to a block if its file stem contains the block identifier
/// (case-sensitive). If several files match, the first by file name wins.
pub fn production_block_chunked_files<S: AsRef<str>>(root_folder: &Path, blocks: &[S]) -> Result<Vec<PathBuf>> {
    let files = list_block_files(root_folder)?;
    log::debug!("[store::resolve] {} candidate files in {}", files.len(), root_folder.display());

    blocks.iter()
        .map(|block| {
            let block = block.as_ref();
            let mut matches = files.iter()
                .filter(|path| path.file_stem().and_then(|s| s.to_str()).is_some_and(|stem| stem.contains(block)));

            let first = matches.next()
                .ok_or_else(|| Error::PartitionNotFound(block.to_string()))?;

            let others = matches.count();
            if others > 0 {
                log::warn!("[store::resolve] {block} matches {} files; using {}", others + 1, first.display());
            }
            Ok(first.clone())
        })
        .collect()
}

/// Shape file paths for every production block touched by the bounding box.
pub fn production_block_files_in_bbox(root_folder: &Path, grid: &ReferenceGrid, bbox: &BoundingBox) -> Result<Vec<PathBuf>> {
    production_block_chunked_files(root_folder, &grid.production_blocks(bbox)?)
}
