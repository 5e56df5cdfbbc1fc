mod prepared;
mod shape;

pub use prepared::PreparedPolygon;
pub(crate) use shape::shape_to_geometry;
