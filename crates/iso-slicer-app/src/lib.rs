#![warn(missing_docs)]
//! # iso-slicer-app
//!
//! ## Purpose
//! Orchestrates the slicing pipeline: load the source image, extract every
//! diamond tile, persist the bitmaps, and emit the layout artifacts.
//!
//! ## Responsibilities
//! - Hold the validated run configuration ([`SliceConfig`]).
//! - Drive grid enumeration and diamond extraction in output order.
//! - Apply the per-file error policy: a failed tile save is recorded and the
//!   remaining batch continues; a failed source load aborts the run.
//! - Render and write the HTML layout and JSON manifest.
//!
//! ## Data flow
//! [`SliceConfig`] -> [`run_slice`] -> tiles saved under the output
//! directory + `layout.html` + `manifest.json` -> [`SliceReport`] summary.
//!
//! ## Error model
//! Fatal configuration/load failures surface as [`AppError`]. Per-file write
//! failures are collected into the report instead of aborting, since tiles
//! are independent of each other.

use std::fs;
use std::path::PathBuf;

use iso_slicer_bitmap::{BitmapError, load_surface, save_surface_bmp};
use iso_slicer_core::{Color, CoreError, GridAddress, PixelSurface, TileSpec};
use iso_slicer_grid::TileGrid;
use iso_slicer_layout::{LayoutError, SliceManifest, TileRecord, render_layout_html};
use iso_slicer_sampler::{SamplerError, extract_diamond};
use thiserror::Error;

/// Build-time application version loaded from the root `VERSION` file.
pub const APP_VERSION: &str = env!("ISO_SLICER_VERSION");

/// File name of the HTML layout artifact.
pub const LAYOUT_FILE_NAME: &str = "layout.html";

/// File name of the JSON manifest artifact.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Returns the app version sourced from the root `VERSION` file.
pub fn app_version() -> &'static str {
    APP_VERSION
}

/// Output file naming template with one integer substitution slot.
///
/// The slot is written `{}` and receives the tile number; `.bmp` is always
/// appended. A template without a slot gets the number appended to its end,
/// so distinct tiles never collide on one file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNamePattern {
    template: String,
}

impl FileNamePattern {
    /// Creates a pattern from a template such as `tile{}`.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Produces the file name for one tile number.
    pub fn file_name(&self, number: u64) -> String {
        let stem = if self.template.contains("{}") {
            self.template.replacen("{}", &number.to_string(), 1)
        } else {
            format!("{}{number}", self.template)
        };

        format!("{stem}.bmp")
    }
}

impl Default for FileNamePattern {
    fn default() -> Self {
        Self::new("{}")
    }
}

/// Validated configuration record for one slicing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceConfig {
    /// Source image path.
    pub source_path: PathBuf,
    /// Tile geometry and background fill.
    pub tile: TileSpec,
    /// Directory receiving tiles and layout artifacts; created if missing.
    pub output_dir: PathBuf,
    /// Naming template for tile files.
    pub file_pattern: FileNamePattern,
    /// Tile number assigned to the first enumerated tile.
    pub starting_number: u64,
}

impl SliceConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// Returns [`AppError::UnsupportedOffset`] when the envelope offset
    /// exceeds half the tile width.
    pub fn new(
        source_path: PathBuf,
        tile: TileSpec,
        output_dir: PathBuf,
        file_pattern: FileNamePattern,
        starting_number: u64,
    ) -> Result<Self, AppError> {
        if tile.offset > tile.max_offset() {
            return Err(AppError::UnsupportedOffset {
                offset: tile.offset,
                max: tile.max_offset(),
            });
        }

        Ok(Self {
            source_path,
            tile,
            output_dir,
            file_pattern,
            starting_number,
        })
    }
}

/// Parses a `#RRGGBB` or `#RRGGBBAA` hex color (leading `#` optional).
///
/// # Errors
/// Returns [`AppError::InvalidColor`] for any other shape.
pub fn parse_hex_color(value: &str) -> Result<Color, AppError> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    let invalid = || AppError::InvalidColor {
        value: value.to_string(),
    };

    if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
        return Err(invalid());
    }

    let channel = |index: usize| -> Result<u8, AppError> {
        u8::from_str_radix(&digits[index..index + 2], 16).map_err(|_| invalid())
    };

    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if digits.len() == 8 { channel(6)? } else { 255 };

    Ok(Color::rgba(r, g, b, a))
}

/// Extracts every tile of `grid` from `source` in enumeration order.
///
/// Returns the explicit ordered collection the persistence step numbers
/// from; the k-th entry corresponds to output index `starting_number + k`.
///
/// # Errors
/// Returns [`AppError::Sampler`] when tile allocation rejects the geometry.
pub fn extract_tiles(
    source: &PixelSurface,
    spec: &TileSpec,
    grid: &TileGrid,
) -> Result<Vec<(GridAddress, PixelSurface)>, AppError> {
    let mut tiles = Vec::with_capacity(grid.tile_count() as usize);
    for address in grid.addresses() {
        let tile = extract_diamond(source, spec, grid.origin(address))?;
        tiles.push((address, tile));
    }

    Ok(tiles)
}

/// Summary of one completed slicing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceReport {
    /// Total tiles enumerated by the grid.
    pub tile_count: usize,
    /// Tiles successfully written to disk.
    pub saved_count: usize,
    /// File names whose save failed, in enumeration order.
    pub failed_saves: Vec<String>,
    /// Whether `layout.html` was written.
    pub layout_written: bool,
    /// Whether `manifest.json` was written.
    pub manifest_written: bool,
}

/// Runs the full slicing pipeline for one configuration.
///
/// # Errors
/// Returns [`AppError::Bitmap`] when the source cannot be loaded and
/// [`AppError::OutputDir`] when the output directory cannot be created.
/// Per-file save failures do not abort; they are logged and collected into
/// the returned [`SliceReport`].
pub fn run_slice(config: &SliceConfig) -> Result<SliceReport, AppError> {
    let source = load_surface(&config.source_path)?;
    let grid = TileGrid::for_source(&source, &config.tile);
    log::info!(
        "slicing {}x{} source into {} columns x {} rows ({} tiles)",
        source.width(),
        source.height(),
        grid.columns(),
        grid.rows(),
        grid.tile_count()
    );

    let tiles = extract_tiles(&source, &config.tile, &grid)?;

    fs::create_dir_all(&config.output_dir).map_err(|source| AppError::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut records = Vec::with_capacity(tiles.len());
    let mut failed_saves = Vec::new();
    for (index, (address, tile)) in tiles.iter().enumerate() {
        let file_name = config
            .file_pattern
            .file_name(config.starting_number + index as u64);
        let path = config.output_dir.join(&file_name);

        if let Err(error) = save_surface_bmp(tile, &path) {
            log::warn!("tile save failed, continuing batch: {error}");
            failed_saves.push(file_name.clone());
        }

        // Addressing stays complete even when a save failed; the manifest
        // and layout describe the full mosaic.
        records.push(TileRecord::new(*address, file_name));
    }

    let layout_written = write_artifact(
        &config.output_dir.join(LAYOUT_FILE_NAME),
        render_layout_html(&grid, &records).as_bytes(),
    );

    let manifest = SliceManifest {
        tile_width: config.tile.width,
        tile_height: config.tile.height,
        offset: config.tile.offset,
        source_width: source.width(),
        source_height: source.height(),
        tiles: records,
    };
    let manifest_written = match manifest.to_json_bytes() {
        Ok(bytes) => write_artifact(&config.output_dir.join(MANIFEST_FILE_NAME), &bytes),
        Err(error) => {
            log::error!("manifest encoding failed: {error}");
            false
        }
    };

    let report = SliceReport {
        tile_count: tiles.len(),
        saved_count: tiles.len() - failed_saves.len(),
        failed_saves,
        layout_written,
        manifest_written,
    };
    log::info!(
        "sliced successfully: {}/{} tiles written to {}",
        report.saved_count,
        report.tile_count,
        config.output_dir.display()
    );

    Ok(report)
}

fn write_artifact(path: &std::path::Path, bytes: &[u8]) -> bool {
    match fs::write(path, bytes) {
        Ok(()) => true,
        Err(error) => {
            log::error!("artifact write failed for '{}': {error}", path.display());
            false
        }
    }
}

/// App integration error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Surface or tile-spec validation error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    /// Diamond extraction error.
    #[error("sampler error: {0}")]
    Sampler(#[from] SamplerError),
    /// Image load/save error.
    #[error("bitmap error: {0}")]
    Bitmap(#[from] BitmapError),
    /// Layout/manifest codec error.
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
    /// Envelope offset outside the supported range.
    #[error("unsupported offset {offset}: must be at most {max} (half the tile width)")]
    UnsupportedOffset {
        /// Rejected offset.
        offset: u32,
        /// Largest supported offset for the configured tile width.
        max: u32,
    },
    /// Background color string could not be parsed.
    #[error("invalid background color '{value}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor {
        /// Rejected input.
        value: String,
    },
    /// Output directory could not be created.
    #[error("failed to create output directory '{}': {source}", path.display())]
    OutputDir {
        /// Rejected path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
