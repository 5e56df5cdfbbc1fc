use anyhow::Result;
use ukgeo::ReferenceGrid;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::BlocksArgs) -> Result<()> {
    let bbox = args.bbox.to_bbox()?;
    for block in ReferenceGrid::HB.production_blocks(&bbox)? {
        println!("{block}");
    }
    Ok(())
}
