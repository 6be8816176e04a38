#![warn(missing_docs)]
//! # iso-slicer-grid
//!
//! ## Purpose
//! Enumerates the tile addresses covering a source image and maps each
//! address to its pixel-space sampling origin.
//!
//! ## Responsibilities
//! - Compute tile counts for the staggered isometric lattice.
//! - Enumerate [`GridAddress`] values in strict row-major order.
//! - Map addresses to signed [`SourceOrigin`] anchors, including the
//!   half-tile horizontal stagger on even rows.
//!
//! ## Data flow
//! Validated source surface + [`TileSpec`] -> [`TileGrid`] -> address stream
//! consumed by the sampler and by layout/persistence numbering.
//!
//! ## Error model
//! None. Degenerate image dimensions are rejected earlier, at source surface
//! creation, so the constructor takes the already-validated surface.

use iso_slicer_core::{GridAddress, PixelSurface, SourceOrigin, TileSpec};

/// Staggered isometric tile grid over one source image.
///
/// Consecutive rows advance by half a tile height and even rows shift left
/// by half a tile width, producing the interlocking diamond pattern. The
/// extra column and the doubled-plus-one row count guarantee the overhanging
/// border tiles still cover every source pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    columns: u32,
    rows: u32,
    tile_width: u32,
    tile_height: u32,
}

impl TileGrid {
    /// Builds the grid covering `source` with tiles shaped by `spec`.
    pub fn for_source(source: &PixelSurface, spec: &TileSpec) -> Self {
        Self {
            columns: source.width().div_ceil(spec.width) + 1,
            rows: 2 * source.height().div_ceil(spec.height) + 1,
            tile_width: spec.width,
            tile_height: spec.height,
        }
    }

    /// Number of tile columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows, counting half-height steps.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of tiles enumerated by [`TileGrid::addresses`].
    pub fn tile_count(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.columns)
    }

    /// Tile width the grid was built for.
    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Tile height the grid was built for.
    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Enumerates every address in row-major order.
    ///
    /// The k-th yielded address corresponds to output index
    /// `starting_number + k`; callers persisting tiles rely on this order.
    pub fn addresses(&self) -> impl Iterator<Item = GridAddress> + '_ {
        let columns = self.columns;
        (0..self.rows)
            .flat_map(move |row| (0..columns).map(move |col| GridAddress { row, col }))
    }

    /// Sampling origin for one address.
    ///
    /// Even rows are shifted left by half a tile width; every row advances by
    /// half a tile height, so vertically adjacent rows overlap by half.
    pub fn origin(&self, address: GridAddress) -> SourceOrigin {
        let half_width = i64::from(self.tile_width / 2);
        let half_height = i64::from(self.tile_height / 2);

        let stagger = if address.row % 2 == 0 { half_width } else { 0 };
        SourceOrigin {
            x: i64::from(address.col) * i64::from(self.tile_width) - stagger,
            y: i64::from(address.row) * half_height - half_height,
        }
    }
}
