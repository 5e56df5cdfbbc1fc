use std::{fmt, str::FromStr, sync::Arc};

use crate::error::Error;

/// GeoInformationGroup production block identifier, e.g. "HB0102".
/// Column and row are 1-based cell indices within the reference grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId {
    id: Arc<str>, // e.g., "HB0102" for column 1, row 2
    column: u32,
    row: u32,
}

impl BlockId {
    /// Build the identifier for a cell; indices are zero-padded to at least two digits.
    pub fn new(prefix: &str, column: u32, row: u32) -> Self {
        Self { id: Arc::from(format!("{prefix}{column:02}{row:02}")), column, row }
    }

    #[inline] pub fn as_str(&self) -> &str { &self.id }

    #[inline] pub fn column(&self) -> u32 { self.column }

    #[inline] pub fn row(&self) -> u32 { self.row }
}

impl AsRef<str> for BlockId {
    fn as_ref(&self) -> &str { &self.id }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.id) }
}

impl FromStr for BlockId {
    type Err = Error;

    /// Parses an alphabetic prefix followed by an even number (>= 4) of digits,
    /// split evenly into column and row.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidBlockId(s.to_string());

        let split = s.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
        let (prefix, digits) = s.split_at(split);
        if prefix.is_empty()
            || !prefix.chars().all(|c| c.is_ascii_uppercase())
            || digits.len() < 4
            || digits.len() % 2 != 0
            || !digits.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let (column, row) = digits.split_at(digits.len() / 2);
        Ok(Self {
            id: Arc::from(s),
            column: column.parse().map_err(|_| invalid())?,
            row: row.parse().map_err(|_| invalid())?,
        })
    }
}
