use anyhow::{Context, Result};
use ukgeo::{production_block_files_in_bbox, ReferenceGrid};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::FilesArgs) -> Result<()> {
    let bbox = args.bbox.to_bbox()?;
    let files = production_block_files_in_bbox(&args.root, &ReferenceGrid::HB, &bbox)
        .with_context(|| format!("[files] resolving blocks under {}", args.root.display()))?;
    for file in files {
        println!("{}", file.display());
    }
    Ok(())
}
