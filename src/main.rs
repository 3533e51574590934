use std::process;
use log::error;

use groundkit::utils::logger::Logger;
use groundkit::commands::{build_cli, CommandFactory, GroundkitCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let log_file = matches.get_one::<String>("log-file")
        .cloned()
        .unwrap_or_else(|| "groundkit.log".to_string());
    let verbose = matches.get_flag("verbose");

    let logger = match Logger::new(&log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger(&log_file, verbose) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = GroundkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            process::exit(1);
        }
    };
}
