//! End-to-end configuration resolution against on-disk JSON fixtures.

use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;

use gcode_analyze::{Args, ConfigError, DEFAULT_FEEDRATE, Options, OutputFormat};

fn json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{content}").expect("write fixture");
    file
}

fn resolve(argv: &[&str]) -> Result<Options, ConfigError> {
    Options::resolve(Args::try_parse_from(argv.iter().copied()).expect("valid invocation"))
}

#[test]
fn profile_with_both_axis_speeds_uses_minimum() {
    let profile = json_file(r#"{"axes": {"x": {"speed": 6000}, "y": {"speed": 4000}}}"#);
    let path = profile.path().to_str().expect("utf-8 temp path");

    let options = resolve(&["gcode-analyze", "--profile", path]).expect("resolve");
    assert_eq!(options.feedrate, 4000.0);
    assert!(options.feedrate_set);
}

#[test]
fn profile_with_one_axis_speed_uses_it() {
    let profile = json_file(r#"{"axes": {"x": {"speed": 3500}}}"#);
    let path = profile.path().to_str().expect("utf-8 temp path");

    let options = resolve(&["gcode-analyze", "-p", path]).expect("resolve");
    assert_eq!(options.feedrate, 3500.0);
    assert!(options.feedrate_set);
}

#[test]
fn profile_without_axis_speeds_keeps_default_feedrate() {
    let profile = json_file(r#"{"name": "generic", "axes": {}}"#);
    let path = profile.path().to_str().expect("utf-8 temp path");

    let options = resolve(&["gcode-analyze", "-p", path]).expect("resolve");
    assert_eq!(options.feedrate, DEFAULT_FEEDRATE);
    assert!(!options.feedrate_set);
    // The document itself is still retained
    assert!(options.profile.is_some());
}

#[test]
fn profile_offsets_are_zero_z_coordinates_in_order() {
    let profile = json_file(r#"{"extruder": {"offsets": [[1, 2], [3, 4]]}}"#);
    let path = profile.path().to_str().expect("utf-8 temp path");

    let options = resolve(&["gcode-analyze", "-p", path]).expect("resolve");
    assert_eq!(options.offsets.len(), 2);
    assert_eq!(options.offsets[0].x, Some(1.0));
    assert_eq!(options.offsets[0].y, Some(2.0));
    assert_eq!(options.offsets[0].z, Some(0.0));
    assert_eq!(options.offsets[1].x, Some(3.0));
    assert_eq!(options.offsets[1].y, Some(4.0));
    assert_eq!(options.offsets[1].z, Some(0.0));
}

#[test]
fn malformed_second_offset_keeps_only_the_first() {
    let profile = json_file(r#"{"extruder": {"offsets": [[1, 2], [5]]}}"#);
    let path = profile.path().to_str().expect("utf-8 temp path");

    let options = resolve(&["gcode-analyze", "-p", path]).expect("resolve");
    assert_eq!(options.offsets.len(), 1);
    assert_eq!(options.offsets[0].x, Some(1.0));
    assert_eq!(options.offsets[0].y, Some(2.0));
}

#[test]
fn missing_profile_file_is_a_returned_file_access_error() {
    // No partial Options escapes; the entry point turns this into a
    // non-zero exit.
    let err = resolve(&["gcode-analyze", "-p", "/no/such/profile.json"]).unwrap_err();
    assert!(matches!(err, ConfigError::FileAccess { .. }));
}

#[test]
fn ignore_list_keeps_per_axis_presence() {
    let ignore = json_file(r#"[{"x": 1, "y": 2}, {"z": 3}]"#);
    let path = ignore.path().to_str().expect("utf-8 temp path");

    let options = resolve(&["gcode-analyze", "--ignore", path]).expect("resolve");
    assert_eq!(options.ignore.len(), 2);
    assert_eq!(options.ignore[0].x, Some(1.0));
    assert_eq!(options.ignore[0].y, Some(2.0));
    assert!(options.ignore[0].z.is_none());
    assert!(options.ignore[1].x.is_none());
    assert!(options.ignore[1].y.is_none());
    assert_eq!(options.ignore[1].z, Some(3.0));
}

#[test]
fn empty_ignore_file_is_a_schema_error() {
    let ignore = json_file("[]");
    let path = ignore.path().to_str().expect("utf-8 temp path");

    let err = resolve(&["gcode-analyze", "-i", path]).unwrap_err();
    assert!(matches!(err, ConfigError::Schema { .. }));
}

#[test]
fn unparseable_ignore_file_is_a_parse_error() {
    let ignore = json_file("not json");
    let path = ignore.path().to_str().expect("utf-8 temp path");

    let err = resolve(&["gcode-analyze", "-i", path]).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn bogus_output_format_is_a_validation_error() {
    let err = resolve(&["gcode-analyze", "--output", "BOGUS"]).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn last_output_flag_wins_across_long_and_short_forms() {
    let options = resolve(&["gcode-analyze", "-o", "XML", "--output", "JSON"]).expect("resolve");
    assert_eq!(options.output, OutputFormat::Json);

    let options = resolve(&["gcode-analyze", "--output", "JSON", "-o", "XML"]).expect("resolve");
    assert_eq!(options.output, OutputFormat::Xml);
}

#[test]
fn repeated_profile_flag_uses_last_path() {
    let slow = json_file(r#"{"axes": {"x": {"speed": 1000}}}"#);
    let fast = json_file(r#"{"axes": {"x": {"speed": 9000}}}"#);
    let slow_path = slow.path().to_str().expect("utf-8 temp path");
    let fast_path = fast.path().to_str().expect("utf-8 temp path");

    let options = resolve(&["gcode-analyze", "-p", slow_path, "-p", fast_path]).expect("resolve");
    assert_eq!(options.feedrate, 9000.0);
}

#[test]
fn flags_combine_in_any_order() {
    let profile = json_file(r#"{"axes": {"y": {"speed": 2400}}}"#);
    let ignore = json_file(r#"[{"x": 0}]"#);
    let profile_path = profile.path().to_str().expect("utf-8 temp path");
    let ignore_path = ignore.path().to_str().expect("utf-8 temp path");

    let options = resolve(&[
        "gcode-analyze",
        "-o",
        "XML",
        "-i",
        ignore_path,
        "-f",
        "part.gcode",
        "-p",
        profile_path,
    ])
    .expect("resolve");

    assert_eq!(options.output, OutputFormat::Xml);
    assert_eq!(
        options.filename.as_deref(),
        Some(std::path::Path::new("part.gcode"))
    );
    assert_eq!(options.feedrate, 2400.0);
    assert!(options.feedrate_set);
    assert_eq!(options.ignore.len(), 1);
    assert_eq!(options.ignore[0].x, Some(0.0));
}
