#![warn(missing_docs)]
//! # iso-slicer-layout
//!
//! ## Purpose
//! Renders the textual artifacts describing one slicing run: an HTML page
//! reconstructing the mosaic and a JSON manifest of the produced tiles.
//!
//! ## Responsibilities
//! - Lay out tile images at their staggered lattice positions.
//! - Annotate each tile with its grid address for inspection.
//! - Encode/decode the slice manifest for downstream tooling.
//!
//! ## Data flow
//! Ordered (address, file name) records from the pipeline ->
//! [`render_layout_html`] / [`SliceManifest`] -> files written next to the
//! tile bitmaps.
//!
//! ## Error model
//! Rendering is pure string assembly and cannot fail. Manifest codec
//! failures return [`LayoutError`].

use std::fmt::Write as _;

use iso_slicer_core::GridAddress;
use iso_slicer_grid::TileGrid;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One persisted tile: where it sits in the mosaic and what file holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRecord {
    /// Mosaic row of the tile.
    pub row: u32,
    /// Mosaic column of the tile.
    pub col: u32,
    /// File name of the saved bitmap, relative to the output directory.
    pub file_name: String,
}

impl TileRecord {
    /// Creates a record from an address and its saved file name.
    pub fn new(address: GridAddress, file_name: impl Into<String>) -> Self {
        Self {
            row: address.row,
            col: address.col,
            file_name: file_name.into(),
        }
    }
}

/// Machine-readable description of one slicing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceManifest {
    /// Tile width in pixels.
    pub tile_width: u32,
    /// Tile height in pixels.
    pub tile_height: u32,
    /// Diamond envelope offset used for the run.
    pub offset: u32,
    /// Source image width in pixels.
    pub source_width: u32,
    /// Source image height in pixels.
    pub source_height: u32,
    /// Tile records in enumeration (row-major) order.
    pub tiles: Vec<TileRecord>,
}

impl SliceManifest {
    /// Serializes the manifest to pretty JSON bytes.
    ///
    /// # Errors
    /// Returns [`LayoutError::Codec`] when JSON serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, LayoutError> {
        serde_json::to_vec_pretty(self).map_err(LayoutError::Codec)
    }

    /// Deserializes a manifest from JSON bytes.
    ///
    /// # Errors
    /// Returns [`LayoutError::Codec`] when JSON decoding fails.
    pub fn from_json_bytes(raw: &[u8]) -> Result<Self, LayoutError> {
        serde_json::from_slice(raw).map_err(LayoutError::Codec)
    }
}

/// Renders the HTML preview reconstructing the sliced mosaic.
///
/// Each tile is absolutely positioned at its sampling origin, shifted by
/// half a tile so the overhanging first row and column stay visible. Emission
/// follows the record order, preserving the enumeration contract, and every
/// image carries an address annotation in its `title` attribute.
pub fn render_layout_html(grid: &TileGrid, records: &[TileRecord]) -> String {
    let tile_width = grid.tile_width();
    let tile_height = grid.tile_height();
    let half_width = tile_width / 2;
    let half_height = tile_height / 2;

    let canvas_width = u64::from(grid.columns()) * u64::from(tile_width) + u64::from(half_width);
    let canvas_height =
        u64::from(grid.rows() - 1) * u64::from(half_height) + u64::from(tile_height);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>sliced mosaic</title>\n");
    html.push_str("<style>\n");
    html.push_str(".mosaic { position: relative; background: #222; }\n");
    html.push_str(".mosaic img { position: absolute; }\n");
    html.push_str("</style>\n</head>\n<body>\n");
    let _ = writeln!(
        html,
        "<div class=\"mosaic\" style=\"width:{canvas_width}px;height:{canvas_height}px\">"
    );

    for record in records {
        let address = GridAddress {
            row: record.row,
            col: record.col,
        };
        let origin = grid.origin(address);
        let left = origin.x + i64::from(half_width);
        let top = origin.y + i64::from(half_height);

        let _ = writeln!(
            html,
            "<img src=\"{file}\" title=\"r{row} c{col} {file}\" \
             style=\"left:{left}px;top:{top}px;width:{tile_width}px;height:{tile_height}px\">",
            file = record.file_name,
            row = record.row,
            col = record.col,
        );
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// Layout artifact error type.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Manifest JSON encoding/decoding failure.
    #[error("manifest codec failure: {0}")]
    Codec(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    //! Unit tests for layout rendering and manifest codec.

    use iso_slicer_core::{Color, PixelSurface, TileSpec};

    use super::*;

    fn sample_grid() -> TileGrid {
        let source = PixelSurface::new(88, 88, Color::BLACK).expect("source allocates");
        let spec = TileSpec::new(44, 44, 1, Color::BLACK).expect("spec should be valid");
        TileGrid::for_source(&source, &spec)
    }

    fn sample_records(grid: &TileGrid) -> Vec<TileRecord> {
        grid.addresses()
            .enumerate()
            .map(|(index, address)| TileRecord::new(address, format!("{index}.bmp")))
            .collect()
    }

    #[test]
    fn layout_lists_every_tile_in_order() {
        let grid = sample_grid();
        let records = sample_records(&grid);
        let html = render_layout_html(&grid, &records);

        let mut last_position = 0;
        for record in &records {
            let needle = format!("src=\"{}\"", record.file_name);
            let position = html.find(&needle).expect("every tile must be emitted");
            assert!(
                position > last_position,
                "{} must appear after the previous tile",
                record.file_name
            );
            last_position = position;
        }
    }

    #[test]
    fn layout_staggers_alternate_rows() {
        let grid = sample_grid();
        let records = sample_records(&grid);
        let html = render_layout_html(&grid, &records);

        // Row 0 (even) starts half a tile left of row 1 at the same column.
        assert!(html.contains("title=\"r0 c0 0.bmp\" style=\"left:0px;top:0px"));
        assert!(html.contains("title=\"r1 c0 3.bmp\" style=\"left:22px;top:22px"));
    }

    #[test]
    fn layout_annotates_addresses() {
        let grid = sample_grid();
        let records = sample_records(&grid);
        let html = render_layout_html(&grid, &records);

        assert!(html.contains("title=\"r4 c2 14.bmp\""));
    }

    #[test]
    fn manifest_round_trips_json() {
        let grid = sample_grid();
        let manifest = SliceManifest {
            tile_width: 44,
            tile_height: 44,
            offset: 1,
            source_width: 88,
            source_height: 88,
            tiles: sample_records(&grid),
        };

        let encoded = manifest.to_json_bytes().expect("encoding should succeed");
        let decoded = SliceManifest::from_json_bytes(&encoded).expect("decoding should succeed");
        assert_eq!(decoded, manifest);
    }
}
