use std::path::PathBuf;

/// URL of the London statistical GIS boundary files (2016 release).
pub const LONDON_BOUNDARY_FILE_URL: &str = "https://files.datapress.com/london/dataset/statistical-gis-boundary-files-london/2016-10-03T13:52:28/statistical-gis-boundaries-london.zip";

/// Where in the London archive the borough shape file lives.
pub const BOROUGH_SHAPE_FILE_PATH: &str = "statistical-gis-boundaries-london/ESRI/London_Borough_Excluding_MHW.shp";

/// Location of an administrative boundary dataset inside a ZIP archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundarySource {
    /// Where the archive is fetched from.
    pub url: String,
    /// Path of the boundary shape file relative to the archive root.
    pub shapefile_path: PathBuf,
    /// Attribute holding the area name.
    pub name_field: String,
}

impl Default for BoundarySource {
    /// London boroughs, excluding the area below mean high water.
    fn default() -> Self {
        Self {
            url: LONDON_BOUNDARY_FILE_URL.to_string(),
            shapefile_path: PathBuf::from(BOROUGH_SHAPE_FILE_PATH),
            name_field: "NAME".to_string(),
        }
    }
}
