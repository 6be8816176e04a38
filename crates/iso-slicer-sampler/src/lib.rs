#![warn(missing_docs)]
//! # iso-slicer-sampler
//!
//! ## Purpose
//! Fills one tile-sized surface with a diamond-shaped cut of the source
//! image, anchored at a caller-provided sampling origin.
//!
//! ## Responsibilities
//! - Sweep the tile's scanlines with a triangular (diamond) envelope.
//! - Track the envelope span through its growing and shrinking phases.
//! - Tolerate sampling past the source edges by skipping affected columns.
//!
//! ## Data flow
//! Grid enumeration supplies a [`SourceOrigin`] per tile ->
//! [`extract_diamond`] reads the shared source surface and returns a freshly
//! allocated tile surface consumed by persistence.
//!
//! ## Ownership and lifetimes
//! The source surface is only borrowed; every returned tile owns its buffer,
//! so extractions never alias each other.
//!
//! ## Error model
//! The only failure is dimension misconfiguration, propagated from tile
//! surface allocation as [`SamplerError`]. Out-of-bounds sampling is expected
//! edge behavior, not an error.

use iso_slicer_core::{CoreError, PixelSurface, SourceOrigin, TileSpec};
use thiserror::Error;

/// Phase of the diamond envelope across a tile's scanlines.
///
/// The only allowed transition is growing to shrinking; one tile never grows
/// again after its widest scanline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanPhase {
    /// Envelope widens by one span unit per scanline.
    Growing,
    /// Envelope narrows by one span unit per scanline.
    Shrinking,
}

/// Running envelope state for one tile extraction.
///
/// The span is the half-width of the copied region on the current scanline:
/// `grab_start = width/2 - span`, `grab_count = 2 * span`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanTracker {
    span: u32,
    phase: SpanPhase,
}

impl SpanTracker {
    /// Starts the envelope at the configured offset in the growing phase.
    pub fn new(offset: u32) -> Self {
        Self {
            span: offset,
            phase: SpanPhase::Growing,
        }
    }

    /// Span value for the current scanline.
    pub fn span(&self) -> u32 {
        self.span
    }

    /// Current envelope phase.
    pub fn phase(&self) -> SpanPhase {
        self.phase
    }

    /// Advances the envelope after one scanline has been copied.
    ///
    /// An increment that would push the span past `half_width` is cancelled:
    /// the span holds its last valid value for the transition scanline and
    /// the envelope switches to shrinking. While shrinking, the span
    /// saturates at zero so overlong tiles copy nothing instead of
    /// underflowing.
    pub fn advance(&mut self, half_width: u32) {
        match self.phase {
            SpanPhase::Growing => {
                let grown = self.span.saturating_add(1);
                if grown > half_width {
                    self.phase = SpanPhase::Shrinking;
                } else {
                    self.span = grown;
                }
            }
            SpanPhase::Shrinking => {
                self.span = self.span.saturating_sub(1);
            }
        }
    }
}

/// Extracts one diamond-shaped tile from `source` at `origin`.
///
/// Destination pixels outside the envelope keep the background fill from
/// `spec`. Columns whose source coordinate falls outside the source surface
/// are silently skipped; border tiles legitimately sample partially or fully
/// off-image.
///
/// # Errors
/// Returns [`SamplerError::Surface`] when the tile dimensions in `spec` are
/// invalid.
pub fn extract_diamond(
    source: &PixelSurface,
    spec: &TileSpec,
    origin: SourceOrigin,
) -> Result<PixelSurface, SamplerError> {
    let mut tile = PixelSurface::new(spec.width, spec.height, spec.background)?;

    let half_width = spec.width / 2;
    let mut tracker = SpanTracker::new(spec.offset);

    for y in 0..spec.height {
        let grab_start = i64::from(half_width) - i64::from(tracker.span());
        let grab_count = 2 * i64::from(tracker.span());

        for i in 0..grab_count {
            let dest_x = grab_start + i;
            // Unsupported offsets can push the envelope past the tile edges;
            // clip instead of panicking.
            if dest_x < 0 || dest_x >= i64::from(spec.width) {
                continue;
            }

            let source_x = origin.x + dest_x;
            let source_y = origin.y + i64::from(y);
            if !source.contains(source_x, source_y) {
                continue;
            }

            tile.set(
                dest_x as u32,
                y,
                source.get(source_x as u32, source_y as u32),
            );
        }

        tracker.advance(half_width);
    }

    Ok(tile)
}

/// Sampler error type.
#[derive(Debug, Error)]
pub enum SamplerError {
    /// Tile surface allocation rejected the configured geometry.
    #[error("tile surface allocation failed: {0}")]
    Surface(#[from] CoreError),
}
