use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::error;

use txt2scad::cli::{Cli, USAGE};
use txt2scad::{ConversionRequest, logging};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let request = ConversionRequest::from(cli);
    if let Err(err) = txt2scad::run(&request) {
        error!(error = %format!("{err:#}"), "conversion failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
