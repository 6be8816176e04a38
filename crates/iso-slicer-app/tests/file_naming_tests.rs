//! Integration tests for output file naming.

use iso_slicer_app::FileNamePattern;

#[test]
fn file_naming_tests_substitutes_the_number_slot() {
    let pattern = FileNamePattern::new("tile{}");
    assert_eq!(pattern.file_name(7), "tile7.bmp");
}

#[test]
fn file_naming_tests_defaults_to_plain_numbers() {
    let pattern = FileNamePattern::default();
    assert_eq!(pattern.file_name(0), "0.bmp");
    assert_eq!(pattern.file_name(14), "14.bmp");
}

#[test]
fn file_naming_tests_appends_number_without_slot() {
    let pattern = FileNamePattern::new("tile");
    assert_eq!(pattern.file_name(3), "tile3.bmp");
}
