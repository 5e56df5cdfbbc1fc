use std::path::Path;

use anyhow::{bail, Context, Result};
use ukgeo::{
    convert_to_proper_ukbuilding_types, read_ukbuildings, read_ukmap_bbox, reduce_to_borough, write_csv,
    FeatureCollection, FeatureStoreReader, LondonBoundaries, ReferenceGrid, ResponseCache, ShapefileReader,
};

use crate::cli::{Cli, FilterArgs, FilterFileArgs, OutputArgs};
use super::assert_not_stdout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Geojson,
}

impl OutputFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("geojson" | "json") => Ok(Self::Geojson),
            _ => bail!("Unsupported output format: {} (expected .csv or .geojson)", path.display()),
        }
    }
}

/// Validate the output path before any data is read.
fn check_output(args: &OutputArgs) -> Result<OutputFormat> {
    assert_not_stdout(&args.output)?;
    if !args.force && args.output.exists() {
        bail!("Refusing to overwrite existing file: {} (use --force)", args.output.display());
    }
    OutputFormat::from_path(&args.output)
}

fn boundaries(cli: &Cli) -> Result<LondonBoundaries> {
    let boundaries = match &cli.cache_dir {
        Some(dir) => LondonBoundaries::with_cache(ResponseCache::new(dir)),
        None => LondonBoundaries::new().context("[filter] no default cache directory, use --cache-dir")?,
    };
    if cli.no_cache {
        log::info!("[filter] clearing cache {}", boundaries.cache().dir().display());
        boundaries.cache().clear()?;
    }
    Ok(boundaries)
}

fn reduce_and_write(cli: &Cli, borough: &str, data: &FeatureCollection, output: &OutputArgs, format: OutputFormat) -> Result<()> {
    let filtered = reduce_to_borough(&boundaries(cli)?, borough, data)
        .with_context(|| format!("[filter] reducing to borough '{borough}'"))?;

    let kept = filtered.len();
    log::info!("[filter] writing {kept} features to {}", output.output.display());
    match format {
        OutputFormat::Csv => {
            let (mut df, _, _) = filtered.into_parts();
            write_csv(&mut df, &output.output)?;
        }
        OutputFormat::Geojson => filtered.to_geojson_file(&output.output)?,
    }

    println!("Wrote {kept} of {} features in {borough} -> {}", data.len(), output.output.display());
    Ok(())
}

pub fn run(cli: &Cli, args: &FilterArgs) -> Result<()> {
    let format = check_output(&args.output)?;

    let bbox = args.bbox.to_bbox()?;
    log::info!("[filter] reading blocks under {}", args.root.display());
    let mut data = read_ukmap_bbox(&args.root, &ReferenceGrid::HB, &bbox)
        .with_context(|| format!("[filter] reading blocks under {}", args.root.display()))?;
    if args.ukbuildings {
        data = convert_to_proper_ukbuilding_types(data)?;
    }

    reduce_and_write(cli, &args.borough, &data, &args.output, format)
}

pub fn run_file(cli: &Cli, args: &FilterFileArgs) -> Result<()> {
    let format = check_output(&args.output)?;

    log::info!("[filter] reading {}", args.input.display());
    let data = if args.ukbuildings {
        read_ukbuildings(&args.input)
    } else {
        ShapefileReader.read(&args.input)
    }.with_context(|| format!("[filter] reading {}", args.input.display()))?;

    reduce_and_write(cli, &args.borough, &data, &args.output, format)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::OutputFormat;

    #[test]
    fn format_follows_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("out.csv")).unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("OUT.GeoJSON")).unwrap(), OutputFormat::Geojson);
        assert!(OutputFormat::from_path(Path::new("out.shp")).is_err());
        assert!(OutputFormat::from_path(Path::new("-")).is_err());
    }
}
