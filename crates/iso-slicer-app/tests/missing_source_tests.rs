//! Integration tests for the fatal missing-source policy.

use std::path::PathBuf;

use iso_slicer_app::{AppError, FileNamePattern, SliceConfig, run_slice};
use iso_slicer_bitmap::BitmapError;
use iso_slicer_core::{Color, TileSpec};

#[test]
fn missing_source_tests_aborts_with_not_found() {
    let tile = TileSpec::new(44, 44, 1, Color::BLACK).expect("spec should be valid");
    let config = SliceConfig::new(
        PathBuf::from("/nonexistent/iso-slicer-source.png"),
        tile,
        std::env::temp_dir().join("iso-slicer-missing-source"),
        FileNamePattern::default(),
        0,
    )
    .expect("config should be valid");

    let result = run_slice(&config);
    assert!(matches!(
        result,
        Err(AppError::Bitmap(BitmapError::NotFound { .. }))
    ));
}
