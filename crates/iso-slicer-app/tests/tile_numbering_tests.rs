//! Integration tests for the enumeration-to-numbering contract.

use iso_slicer_app::extract_tiles;
use iso_slicer_core::{Color, GridAddress, PixelSurface, TileSpec};
use iso_slicer_grid::TileGrid;

#[test]
fn tile_numbering_tests_preserves_row_major_order() {
    let source =
        PixelSurface::new(88, 88, Color::rgb(255, 0, 0)).expect("source should allocate");
    let spec = TileSpec::new(44, 44, 1, Color::BLACK).expect("spec should be valid");
    let grid = TileGrid::for_source(&source, &spec);

    let tiles = extract_tiles(&source, &spec, &grid).expect("extraction should succeed");

    assert_eq!(tiles.len(), 15);
    let expected: Vec<GridAddress> = grid.addresses().collect();
    let actual: Vec<GridAddress> = tiles.iter().map(|(address, _)| *address).collect();
    assert_eq!(actual, expected, "k-th tile must carry the k-th address");
}
