use ukgeo::{production_blocks, BlockId, BoundingBox, Error, ReferenceGrid, NOT_HB_ERROR_MESSAGE};

fn ids(blocks: &[BlockId]) -> Vec<&str> {
    blocks.iter().map(BlockId::as_str).collect()
}

#[test]
fn documented_examples() {
    assert_eq!(ids(&production_blocks(500000.0, 100000.0, 500001.0, 100001.0).unwrap()), ["HB0101"]);
    assert_eq!(ids(&production_blocks(500000.0, 100000.0, 505000.0, 100001.0).unwrap()), ["HB0101", "HB0201"]);
    assert_eq!(ids(&production_blocks(504999.9, 100000.0, 505000.0, 100001.0).unwrap()), ["HB0101", "HB0201"]);
}

#[test]
fn size_is_product_of_spans() {
    let boxes = [
        (512345.0, 134567.0, 523456.0, 145678.0),
        (530000.0, 180000.0, 530000.0, 180000.0),
        (599999.0, 199999.0, 600000.0, 200000.0),
    ];
    for (minx, miny, maxx, maxy) in boxes {
        let cols = (maxx as i64 - 500000) / 5000 - (minx as i64 - 500000) / 5000 + 1;
        let rows = (maxy as i64 - 100000) / 5000 - (miny as i64 - 100000) / 5000 + 1;
        assert_eq!(production_blocks(minx, miny, maxx, maxy).unwrap().len() as i64, cols * rows);
    }
}

#[test]
fn out_of_reference_boxes_fail() {
    for (minx, miny, maxx, maxy) in [
        (499999.0, 100000.0, 500001.0, 100001.0),
        (500000.0, 100000.0, 600001.0, 100001.0),
        (500000.0, 99999.0, 500001.0, 100001.0),
        (500000.0, 100000.0, 500001.0, 200001.0),
    ] {
        let err = production_blocks(minx, miny, maxx, maxy).unwrap_err();
        assert!(matches!(err, Error::OutOfReference));
        assert_eq!(err.to_string(), NOT_HB_ERROR_MESSAGE);
    }
}

#[test]
fn identifiers_round_trip_to_their_cell() {
    let grid = ReferenceGrid::HB;
    let bbox = BoundingBox::new(512000.0, 117000.0, 512001.0, 117001.0).unwrap();
    let blocks = grid.production_blocks(&bbox).unwrap();
    assert_eq!(ids(&blocks), ["HB0304"]);

    let cell = grid.block_bounds(&blocks[0]);
    assert_eq!((cell.minx(), cell.miny(), cell.maxx(), cell.maxy()), (510000.0, 115000.0, 515000.0, 120000.0));
    assert_eq!("HB0304".parse::<BlockId>().unwrap(), blocks[0]);
}
