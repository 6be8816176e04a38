#![warn(missing_docs)]
//! # iso-slicer-bitmap
//!
//! ## Purpose
//! Bridges [`PixelSurface`] buffers to image files on disk.
//!
//! ## Responsibilities
//! - Decode a source image file into a read-only surface.
//! - Encode tile surfaces as uncompressed BMP files.
//! - Report missing paths distinctly from decode/write failures.
//!
//! ## Data flow
//! Source path -> [`load_surface`] -> surface consumed by the grid/sampler
//! pipeline; each extracted tile -> [`save_surface_bmp`] -> output directory.
//!
//! ## Error model
//! A missing source path is [`BitmapError::NotFound`] and aborts the run.
//! Decode and write failures carry the affected path; write failures are
//! per-file and do not stop the remaining batch (tiles are independent).

use std::path::{Path, PathBuf};

use iso_slicer_core::{Color, CoreError, PixelSurface};
use thiserror::Error;

/// Loads an image file into an owned pixel surface.
///
/// Any format the enabled `image` decoders understand is accepted; pixels
/// are normalized to RGBA.
///
/// # Errors
/// Returns [`BitmapError::NotFound`] when the path does not exist,
/// [`BitmapError::Decode`] when the file cannot be read as an image, and
/// [`BitmapError::Surface`] when the decoded geometry is degenerate.
pub fn load_surface(path: &Path) -> Result<PixelSurface, BitmapError> {
    if !path.exists() {
        return Err(BitmapError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let decoded = image::open(path)
        .map_err(|source| BitmapError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (width, height) = decoded.dimensions();
    let pixels = decoded
        .pixels()
        .map(|pixel| {
            let [r, g, b, a] = pixel.0;
            Color::rgba(r, g, b, a)
        })
        .collect();

    Ok(PixelSurface::from_pixels(width, height, pixels)?)
}

/// Saves one surface as a BMP file.
///
/// # Errors
/// Returns [`BitmapError::Write`] when encoding or the disk write fails.
pub fn save_surface_bmp(surface: &PixelSurface, path: &Path) -> Result<(), BitmapError> {
    let buffer = surface_to_rgba_image(surface);
    buffer
        .save_with_format(path, image::ImageFormat::Bmp)
        .map_err(|source| BitmapError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Converts a surface into an `image` RGBA buffer for encoding.
pub fn surface_to_rgba_image(surface: &PixelSurface) -> image::RgbaImage {
    let mut raw = Vec::with_capacity(surface.pixels().len() * 4);
    for pixel in surface.pixels() {
        raw.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
    }

    // Length is width * height * 4 by surface construction.
    image::RgbaImage::from_raw(surface.width(), surface.height(), raw)
        .expect("surface buffer length matches its dimensions")
}

/// Bitmap I/O error type.
#[derive(Debug, Error)]
pub enum BitmapError {
    /// Source path does not resolve to a readable file.
    #[error("source image not found: {}", path.display())]
    NotFound {
        /// Missing path.
        path: PathBuf,
    },
    /// File exists but cannot be decoded as an image.
    #[error("failed to decode image '{}': {source}", path.display())]
    Decode {
        /// Unreadable path.
        path: PathBuf,
        /// Decoder failure.
        #[source]
        source: image::ImageError,
    },
    /// Encoding or disk write failed for one output file.
    #[error("failed to write image '{}': {source}", path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Encoder or I/O failure.
        #[source]
        source: image::ImageError,
    },
    /// Decoded geometry failed surface validation.
    #[error("decoded image rejected: {0}")]
    Surface(#[from] CoreError),
}
