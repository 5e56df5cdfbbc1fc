use crate::error::{Error, Result};

use super::{BlockId, BoundingBox};

/// A uniform grid of square production blocks on the OS national grid.
///
/// Blocks are addressed by 1-based column (x) and row (y) indices counted from
/// the grid origin `(min_x, min_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceGrid {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
    pub cell_side_length: i64,
    pub prefix: &'static str,
}

impl ReferenceGrid {
    /// The HB production block reference used by UKMap and UKBuildings.
    pub const HB: Self = Self {
        min_x: 500_000,
        min_y: 100_000,
        max_x: 600_000,
        max_y: 200_000,
        cell_side_length: 5_000,
        prefix: "HB",
    };

    /// Check that the bounding box lies within the grid extent.
    fn check_extent(&self, bbox: &BoundingBox) -> Result<()> {
        if bbox.minx() < self.min_x as f64
            || bbox.miny() < self.min_y as f64
            || bbox.maxx() > self.max_x as f64
            || bbox.maxy() > self.max_y as f64
        {
            return Err(Error::OutOfReference);
        }
        Ok(())
    }

    /// 1-based cell index of a coordinate along an axis starting at `origin`.
    /// The coordinate is truncated toward zero before bucketing.
    /// Coordinates below the origin have no index.
    #[inline]
    fn cell_index(&self, coord: f64, origin: i64) -> Result<u32> {
        let index = (coord.trunc() as i64 - origin).div_euclid(self.cell_side_length) + 1;
        u32::try_from(index).ok()
            .filter(|&index| index >= 1)
            .ok_or(Error::OutOfReference)
    }

    /// All production blocks touched by the bounding box, columns outer and rows inner.
    pub fn production_blocks(&self, bbox: &BoundingBox) -> Result<Vec<BlockId>> {
        self.check_extent(bbox)?;

        let start_x = self.cell_index(bbox.minx(), self.min_x)?;
        let end_x = self.cell_index(bbox.maxx(), self.min_x)?;
        let start_y = self.cell_index(bbox.miny(), self.min_y)?;
        let end_y = self.cell_index(bbox.maxy(), self.min_y)?;

        Ok((start_x..=end_x)
            .flat_map(|x| (start_y..=end_y).map(move |y| BlockId::new(self.prefix, x, y)))
            .collect())
    }

    /// The square a production block covers.
    pub fn block_bounds(&self, block: &BlockId) -> BoundingBox {
        let side = self.cell_side_length as f64;
        let minx = self.min_x as f64 + (block.column() as f64 - 1.0) * side;
        let miny = self.min_y as f64 + (block.row() as f64 - 1.0) * side;
        BoundingBox::square(minx, miny, side)
    }
}

impl Default for ReferenceGrid {
    fn default() -> Self { Self::HB }
}

/// Production blocks of the HB reference touched by the bounding box
/// `(minx, miny, maxx, maxy)` in OS national grid coordinates.
pub fn production_blocks(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Result<Vec<BlockId>> {
    ReferenceGrid::HB.production_blocks(&BoundingBox::new(minx, miny, maxx, maxy)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Vec<String> {
        production_blocks(minx, miny, maxx, maxy).unwrap()
            .into_iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn single_block() {
        assert_eq!(ids(500000.0, 100000.0, 500001.0, 100001.0), ["HB0101"]);
        assert_eq!(ids(500000.0, 100000.0, 500000.1, 100000.1), ["HB0101"]);
        assert_eq!(ids(505000.0, 100000.0, 505001.0, 100001.0), ["HB0201"]);
        assert_eq!(ids(500000.0, 105000.0, 500001.0, 105001.0), ["HB0102"]);
    }

    #[test]
    fn columns_vary_slowest() {
        assert_eq!(ids(500000.0, 100000.0, 505000.0, 100001.0), ["HB0101", "HB0201"]);
        assert_eq!(ids(500000.0, 100000.0, 500001.0, 105000.0), ["HB0101", "HB0102"]);
        assert_eq!(
            ids(500000.0, 100000.0, 505000.0, 105000.0),
            ["HB0101", "HB0102", "HB0201", "HB0202"],
        );
    }

    #[test]
    fn truncates_before_bucketing() {
        assert_eq!(ids(504999.0, 100000.0, 505001.0, 100001.0), ["HB0101", "HB0201"]);
        assert_eq!(ids(504999.9, 100000.0, 505001.0, 100001.0), ["HB0101", "HB0201"]);
        assert_eq!(ids(500000.0, 100000.0, 504999.9, 100001.0), ["HB0101"]);
    }

    #[test]
    fn count_matches_index_span() {
        let grid = ReferenceGrid::HB;
        for (minx, miny, maxx, maxy) in [
            (500000.0, 100000.0, 600000.0, 200000.0),
            (512345.6, 131000.0, 538000.2, 149999.9),
            (599999.0, 199999.0, 600000.0, 200000.0),
        ] {
            let bbox = BoundingBox::new(minx, miny, maxx, maxy).unwrap();
            let blocks = grid.production_blocks(&bbox).unwrap();
            let span = |lo: f64, hi: f64, origin: i64| {
                (grid.cell_index(hi, origin).unwrap() - grid.cell_index(lo, origin).unwrap() + 1) as usize
            };
            assert!(!blocks.is_empty());
            assert_eq!(blocks.len(), span(minx, maxx, grid.min_x) * span(miny, maxy, grid.min_y));
        }
    }

    #[test]
    fn whole_extent_reaches_past_last_row() {
        let blocks = production_blocks(500000.0, 100000.0, 600000.0, 200000.0).unwrap();
        assert_eq!(blocks.len(), 21 * 21);
        assert_eq!(blocks.last().unwrap().as_str(), "HB2121");
    }

    #[test]
    fn outside_reference_fails() {
        for (minx, miny, maxx, maxy) in [
            (499999.0, 100000.0, 500001.0, 100001.0),
            (500000.0, 100000.0, 600001.0, 100001.0),
            (500000.0, 99999.0, 500001.0, 100001.0),
            (500000.0, 100000.0, 500001.0, 200001.0),
        ] {
            assert!(matches!(
                production_blocks(minx, miny, maxx, maxy),
                Err(Error::OutOfReference)
            ));
        }
    }

    #[test]
    fn out_of_reference_message_is_fixed() {
        let err = production_blocks(0.0, 0.0, 1.0, 1.0).unwrap_err();
        assert_eq!(err.to_string(), crate::error::NOT_HB_ERROR_MESSAGE);
    }

    #[test]
    fn custom_grid_is_independent() {
        let grid = ReferenceGrid { min_x: 0, min_y: 0, max_x: 100, max_y: 100, cell_side_length: 10, prefix: "TQ" };
        let bbox = BoundingBox::new(15.0, 0.0, 25.0, 9.0).unwrap();
        let blocks: Vec<_> = grid.production_blocks(&bbox).unwrap()
            .into_iter().map(|id| id.to_string()).collect();
        assert_eq!(blocks, ["TQ0201", "TQ0301"]);
    }

    #[test]
    fn block_bounds_cover_their_cell() {
        let grid = ReferenceGrid::HB;
        let bounds = grid.block_bounds(&BlockId::new("HB", 2, 3));
        assert_eq!(bounds, BoundingBox::new(505000.0, 110000.0, 510000.0, 115000.0).unwrap());
        let inner = BoundingBox::new(bounds.minx(), bounds.miny(), bounds.maxx() - 1.0, bounds.maxy() - 1.0).unwrap();
        let blocks = grid.production_blocks(&inner).unwrap();
        assert_eq!(blocks, [BlockId::new("HB", 2, 3)]);
    }

    #[test]
    fn malformed_boxes_never_enumerate() {
        for (minx, miny, maxx, maxy) in [
            (505000.0, 100000.0, 500000.0, 100001.0),
            (f64::NAN, 100000.0, 500001.0, 100001.0),
            (500000.0, 100000.0, f64::NAN, 100001.0),
            (500000.0, f64::NAN, 500001.0, f64::NAN),
        ] {
            assert!(matches!(
                production_blocks(minx, miny, maxx, maxy),
                Err(Error::InvalidBounds { .. })
            ));
        }
    }

    #[test]
    fn cells_below_the_origin_have_no_index() {
        let grid = ReferenceGrid::HB;
        assert!(matches!(grid.cell_index(499_999.0, grid.min_x), Err(Error::OutOfReference)));
        assert!(matches!(grid.cell_index(-1.0, grid.min_x), Err(Error::OutOfReference)));
        assert_eq!(grid.cell_index(500_000.0, grid.min_x).unwrap(), 1);
    }
}
