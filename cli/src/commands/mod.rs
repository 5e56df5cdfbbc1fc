pub mod blocks;
pub mod files;
pub mod filter;

use anyhow::{bail, Result};
use ukgeo::BoundingBox;

use crate::cli::BboxArgs;

impl BboxArgs {
    pub fn to_bbox(self) -> Result<BoundingBox> {
        Ok(BoundingBox::new(self.minx, self.miny, self.maxx, self.maxy)?)
    }
}

pub fn assert_not_stdout(path: &std::path::Path) -> Result<()> {
    if path == std::path::Path::new("-") {
        bail!("stdout is not supported; provide a real file path.");
    }
    Ok(())
}
