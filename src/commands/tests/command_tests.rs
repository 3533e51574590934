//! Tests for argument handling and command execution

extern crate std;

use std::fs;
use std::path::PathBuf;

use crate::commands::{build_cli, Command, CommandFactory, GroundkitCommandFactory};
use crate::commands::coordinate_system_from_args;
use crate::coordinate::AxisConvention;
use crate::errors::GeoError;
use crate::utils::logger::Logger;

fn matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["groundkit"];
    argv.extend_from_slice(args);
    build_cli().try_get_matches_from(argv).unwrap()
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("groundkit-{}-{}", std::process::id(), name))
}

fn run(args: &[&str]) -> Result<Vec<String>, GeoError> {
    let logger = Logger::console_only();
    let factory = GroundkitCommandFactory::new();
    let command = factory.create_command(&matches(args), &logger)?;
    command.run()
}

#[test]
fn test_no_origin_means_no_system() {
    std::assert!(coordinate_system_from_args(&matches(&[])).unwrap().is_none());
}

#[test]
fn test_system_from_flags() {
    let args = matches(&["--origin", "19.0,47.0", "--orientation", "-30", "--type", "nwu"]);
    let system = coordinate_system_from_args(&args).unwrap().unwrap();
    std::assert_eq!(system.axis_convention(), AxisConvention::Nwu);
    std::assert_eq!(system.orientation(), -30.0);
    std::assert_eq!(system.origin().x, 19.0);
}

#[test]
fn test_invalid_type_is_config_error() {
    let args = matches(&["--origin", "19.0,47.0", "--type", "xyz"]);
    let err = coordinate_system_from_args(&args).unwrap_err();
    std::assert!(matches!(err, GeoError::InvalidAxisConvention(_)));
}

#[test]
fn test_system_from_config_file() {
    let path = temp_path("config.toml");
    fs::write(&path, "[coordinate_system]\norigin = [8.5, 47.4]\ntype = \"nwu\"\norientation = 90\n").unwrap();

    let args = matches(&["--config", path.to_str().unwrap(), "--origin", "0,0"]);
    let system = coordinate_system_from_args(&args).unwrap().unwrap();
    std::assert_eq!(system.origin().x, 8.5);
    std::assert_eq!(system.orientation(), 90.0);

    fs::remove_file(&path).ok();
}

#[test]
fn test_transform_origin_is_zero() {
    let lines = run(&["19.0,47.0", "--origin", "19.0,47.0"]).unwrap();
    std::assert_eq!(lines, vec!["0.000,0.000".to_string()]);
}

#[test]
fn test_transform_with_polar() {
    let lines = run(&["19.0,47.001", "--origin", "19.0,47.0", "--polar"]).unwrap();
    std::assert_eq!(lines.len(), 2);
    std::assert!(lines[1].ends_with("@ 0.00 deg"));
}

#[test]
fn test_transform_flat_to_lon_lat() {
    let lines = run(&["0,0,25", "--origin", "19.0,47.0", "--from", "flat", "--to", "lonlat"]).unwrap();
    std::assert_eq!(lines, vec!["19.00000000,47.00000000,25.000".to_string()]);
}

#[test]
fn test_transform_map_view_without_origin() {
    let lines = run(&["180,0", "--to", "mapview"]).unwrap();
    std::assert_eq!(lines.len(), 1);
    std::assert!(lines[0].starts_with("20037508.343,"));
}

#[test]
fn test_transform_flat_without_origin_fails() {
    let err = run(&["19.0,47.0"]).unwrap_err();
    std::assert!(err.is_config_error());
}

#[test]
fn test_info_lists_ellipsoids() {
    let lines = run(&[]).unwrap();
    std::assert_eq!(lines[0], "Known ellipsoids:");
    std::assert!(lines.iter().any(|l| l.contains("WGS84")));
}

#[test]
fn test_info_describes_system() {
    let lines = run(&["--origin", "19.0,47.0", "--type", "nwu"]).unwrap();
    std::assert!(lines[0].contains("nwu"));
    std::assert!(lines.iter().any(|l| l.starts_with("type = \"nwu\"")));
}

#[test]
fn test_info_emits_one_line_per_entry() {
    let lines = run(&["--origin", "19.0,47.0", "--ellipsoid", "GRS80"]).unwrap();
    std::assert!(lines.iter().all(|l| !l.contains('\n')));
    std::assert!(lines.contains(&"[coordinate_system]".to_string()));
    std::assert!(lines.contains(&"ellipsoid = \"GRS80\"".to_string()));
}

#[test]
fn test_batch_reads_file() {
    let input = temp_path("points.txt");
    fs::write(&input, "# mission\n19.0,47.0\n\n19.0 47.0 100\n").unwrap();

    let lines = run(&["--input-file", input.to_str().unwrap(), "--origin", "19.0,47.0"]).unwrap();
    std::assert_eq!(lines, vec!["0.000,0.000".to_string(), "0.000,0.000,100.000".to_string()]);

    fs::remove_file(&input).ok();
}

#[test]
fn test_batch_reports_line_number() {
    let input = temp_path("broken.txt");
    fs::write(&input, "19.0,47.0\nnot a point\n").unwrap();

    let err = run(&["--input-file", input.to_str().unwrap(), "--origin", "19.0,47.0"]).unwrap_err();
    std::assert!(err.to_string().contains(":2:"));

    fs::remove_file(&input).ok();
}

#[test]
fn test_batch_writes_output_file() {
    let input = temp_path("in.txt");
    let output = temp_path("out.txt");
    fs::write(&input, "0,0\n10,20\n").unwrap();

    let logger = Logger::console_only();
    let args = matches(&[
        "--input-file", input.to_str().unwrap(),
        "--output", output.to_str().unwrap(),
        "--origin", "19.0,47.0",
        "--from", "flat",
        "--to", "lonlat",
    ]);
    let command = GroundkitCommandFactory::new().create_command(&args, &logger).unwrap();
    command.execute().unwrap();

    let written = fs::read_to_string(&output).unwrap();
    std::assert_eq!(written.lines().count(), 2);
    std::assert_eq!(written.lines().next(), Some("19.00000000,47.00000000"));

    fs::remove_file(&input).ok();
    fs::remove_file(&output).ok();
}
