use std::path::PathBuf;

/// Message carried by [`Error::OutOfReference`].
pub const NOT_HB_ERROR_MESSAGE: &str =
    "Supports only HB production block reference. Please refer to dataset manual.";

/// Errors raised while addressing, loading, or filtering UKMap / UKBuildings data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A bounding box coordinate falls outside the reference grid.
    #[error("{}", NOT_HB_ERROR_MESSAGE)]
    OutOfReference,

    /// A bounding box whose minimum exceeds its maximum on some axis.
    #[error("invalid bounding box: ({minx}, {miny}, {maxx}, {maxy})")]
    InvalidBounds { minx: f64, miny: f64, maxx: f64, maxy: f64 },

    /// Not a well-formed production block identifier.
    #[error("invalid production block identifier: '{0}'")]
    InvalidBlockId(String),

    /// No file under the search root matches the production block.
    #[error("no shape file found for production block '{0}'")]
    PartitionNotFound(String),

    /// The area name is absent from the administrative boundary dataset.
    #[error("Unknown borough '{0}'.")]
    UnknownArea(String),

    /// The boundary archive does not contain the expected shape file.
    #[error("boundary archive has no entry {}", .0.display())]
    MissingArchiveEntry(PathBuf),

    /// Attribute rows and geometries disagree in length.
    #[error("feature collection has {rows} attribute rows but {geoms} geometries")]
    LengthMismatch { rows: usize, geoms: usize },

    /// A shape type that has no geometry counterpart.
    #[error("unsupported shape type: {0}")]
    UnsupportedShape(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("shapefile error: {0}")]
    Shapefile(#[from] shapefile::Error),

    #[error("dBase error: {0}")]
    Dbase(#[from] shapefile::dbase::Error),

    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "download")]
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
