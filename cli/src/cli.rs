use std::path::PathBuf;

/// UKMap and UKBuildings dataset utilities
#[derive(clap::Parser, Debug)]
#[command(name = "ukgeo", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory for cached downloads, defaults to the per-user cache
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub cache_dir: Option<PathBuf>,

    /// Clear the download cache before running
    #[arg(long, global = true)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the production blocks touched by a bounding box
    Blocks(BlocksArgs),

    /// Print the partition files of the production blocks touched by a bounding box
    Files(FilesArgs),

    /// Read the blocks touched by a bounding box and keep features inside a borough (forbids stdout)
    Filter(FilterArgs),

    /// Read one shape file (e.g. UKBuildings) and keep features inside a borough (forbids stdout)
    FilterFile(FilterFileArgs),
}

/// Bounding box in British National Grid metres.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct BboxArgs {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

#[derive(clap::Args, Debug)]
pub struct BlocksArgs {
    #[command(flatten)]
    pub bbox: BboxArgs,
}

#[derive(clap::Args, Debug)]
pub struct FilesArgs {
    /// Folder holding the partitioned dataset
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub root: PathBuf,

    #[command(flatten)]
    pub bbox: BboxArgs,
}

#[derive(clap::Args, Debug)]
pub struct FilterArgs {
    /// Folder holding the partitioned dataset
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub root: PathBuf,

    /// Borough name, e.g. "Westminster"
    pub borough: String,

    #[command(flatten)]
    pub bbox: BboxArgs,

    /// Cast attributes to the UKBuildings data types
    #[arg(long)]
    pub ukbuildings: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug)]
pub struct FilterFileArgs {
    /// Input shape file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Borough name, e.g. "Westminster"
    pub borough: String,

    /// Cast attributes to the UKBuildings data types
    #[arg(long)]
    pub ukbuildings: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output file, .csv (attributes only) or .geojson
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}
