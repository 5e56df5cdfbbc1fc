mod bbox;
mod block_id;
mod reference;

pub use bbox::BoundingBox;
pub use block_id::BlockId;
pub use reference::{production_blocks, ReferenceGrid};
