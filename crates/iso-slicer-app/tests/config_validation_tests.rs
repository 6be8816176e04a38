//! Integration tests for configuration validation.

use std::path::PathBuf;

use iso_slicer_app::{AppError, FileNamePattern, SliceConfig, parse_hex_color};
use iso_slicer_core::{Color, TileSpec};

#[test]
fn config_validation_tests_rejects_oversized_offset() {
    let tile = TileSpec::new(44, 44, 23, Color::BLACK).expect("spec should construct");
    let result = SliceConfig::new(
        PathBuf::from("source.png"),
        tile,
        PathBuf::from("out"),
        FileNamePattern::default(),
        0,
    );

    assert!(matches!(
        result,
        Err(AppError::UnsupportedOffset { offset: 23, max: 22 })
    ));
}

#[test]
fn config_validation_tests_accepts_boundary_offset() {
    let tile = TileSpec::new(44, 44, 22, Color::BLACK).expect("spec should construct");
    assert!(
        SliceConfig::new(
            PathBuf::from("source.png"),
            tile,
            PathBuf::from("out"),
            FileNamePattern::default(),
            0,
        )
        .is_ok()
    );
}

#[test]
fn config_validation_tests_parses_hex_colors() {
    assert_eq!(parse_hex_color("#ff0080").expect("color should parse"), Color::rgb(255, 0, 128));
    assert_eq!(
        parse_hex_color("00ff0040").expect("color should parse"),
        Color::rgba(0, 255, 0, 64)
    );
    assert!(parse_hex_color("#12345").is_err());
    assert!(parse_hex_color("#zzzzzz").is_err());
}
