#![warn(missing_docs)]
//! # iso-slicer binary
//!
//! Command-line entry point: parses and validates the run configuration,
//! then hands it to the slicing pipeline.

use std::path::PathBuf;

use clap::Parser;
use iso_slicer_app::{
    AppError, FileNamePattern, SliceConfig, app_version, parse_hex_color, run_slice,
};
use iso_slicer_core::TileSpec;

/// Slices a rectangular image into diamond-shaped isometric tiles and emits
/// an HTML preview reconstructing the mosaic.
#[derive(Debug, Parser)]
#[command(name = "iso-slicer", version = app_version())]
struct Cli {
    /// Source image to slice.
    #[arg(long)]
    image: PathBuf,

    /// Square tile size in pixels.
    #[arg(long, default_value_t = 44)]
    tile_size: u32,

    /// Tile width override; defaults to the square tile size.
    #[arg(long)]
    tile_width: Option<u32>,

    /// Tile height override; defaults to the square tile size.
    #[arg(long)]
    tile_height: Option<u32>,

    /// Diamond envelope offset: 1 for even tile widths, 0 for odd ones.
    #[arg(long, default_value_t = 1)]
    offset: u32,

    /// Background fill as hex color, e.g. #000000 or #00000080.
    #[arg(long, default_value = "#000000")]
    background: String,

    /// Directory to write tiles, layout.html, and manifest.json into.
    #[arg(long, default_value = "out")]
    output: PathBuf,

    /// File name pattern with one `{}` slot for the tile number,
    /// e.g. `tile{}`.
    #[arg(long, default_value = "{}")]
    file_name: String,

    /// Tile number assigned to the first tile.
    #[arg(long, default_value_t = 0)]
    starting_number: u64,
}

impl Cli {
    /// Validates the raw arguments into a slicing configuration.
    fn into_config(self) -> Result<SliceConfig, AppError> {
        let background = parse_hex_color(&self.background)?;
        let tile = TileSpec::new(
            self.tile_width.unwrap_or(self.tile_size),
            self.tile_height.unwrap_or(self.tile_size),
            self.offset,
            background,
        )?;

        SliceConfig::new(
            self.image,
            tile,
            self.output,
            FileNamePattern::new(self.file_name),
            self.starting_number,
        )
    }
}

/// CLI entry point.
fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = match cli.into_config() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("invalid configuration: {error}");
            std::process::exit(2);
        }
    };

    match run_slice(&config) {
        Ok(report) => {
            println!(
                "sliced successfully: {}/{} tiles written to {}",
                report.saved_count,
                report.tile_count,
                config.output_dir.display()
            );
            if !report.failed_saves.is_empty() {
                eprintln!("failed saves: {}", report.failed_saves.join(", "));
                std::process::exit(1);
            }
        }
        Err(error) => {
            eprintln!("slicing failed: {error}");
            std::process::exit(1);
        }
    }
}
