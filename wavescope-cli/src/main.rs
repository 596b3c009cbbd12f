// wavescope-cli/src/main.rs
//
// Entry point for the Wavescope CLI.
//
// Responsibilities:
// - Parsing arguments (clap errors exit with code 1, help/version with 0).
// - Setting up console and optional file logging.
// - Running the render batch and mapping fatal errors to exit code 1.

use clap::Parser;
use clap::error::ErrorKind;
use std::process;
use wavescope_cli::error::{EXIT_FAILURE, EXIT_SUCCESS};
use wavescope_cli::logging::setup_logging;
use wavescope_cli::{Cli, run_render};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_FAILURE,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = setup_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Error: {e}");
        process::exit(EXIT_FAILURE);
    }

    match run_render(&cli) {
        Ok(_) => process::exit(EXIT_SUCCESS),
        Err(e) => {
            log::error!("Error: {}", e);
            process::exit(EXIT_FAILURE);
        }
    }
}
