//! Command-line interface definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap definition of the `groundkit` command line
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("groundkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Flat-Earth coordinate transforms for UAV ground control")
        .arg(
            Arg::new("point")
                .help("Point to transform as 'x,y[,z]' (lon,lat for geographic input)")
                .index(1)
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("origin")
                .long("origin")
                .help("Origin of the flat-Earth system as 'lon,lat'")
                .value_name("LON,LAT")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("orientation")
                .long("orientation")
                .help("Clockwise angle of the zero axis from north, in degrees")
                .value_name("DEGREES")
                .allow_hyphen_values(true)
                .default_value("0"),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .help("Axis convention of the flat-Earth system (neu or nwu)")
                .value_name("TYPE")
                .default_value("neu"),
        )
        .arg(
            Arg::new("ellipsoid")
                .long("ellipsoid")
                .help("Name of the reference ellipsoid")
                .value_name("NAME")
                .default_value("WGS84"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file describing the coordinate system; overrides --origin and friends")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("Coordinate space of the input (lonlat, mapview, flat)")
                .value_name("SPACE")
                .default_value("lonlat"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Coordinate space of the output (lonlat, mapview, flat)")
                .value_name("SPACE")
                .default_value("flat"),
        )
        .arg(
            Arg::new("polar")
                .long("polar")
                .help("Also print the polar form of flat-Earth results")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("input-file")
                .short('i')
                .long("input-file")
                .help("Transform every point of a file, one per line")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file for batch transforms (stdout if omitted)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("File receiving the log")
                .value_name("FILE")
                .default_value("groundkit.log"),
        )
}
