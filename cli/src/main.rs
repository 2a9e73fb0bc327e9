//! ecv1
//!
//! Command-line front end for envelope-core.
//! Exit code 0 on success, 1 on usage, I/O, format or decode errors.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

mod args;
mod commands;
mod logging;

use args::Args;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("warning: logging disabled: {}", e);
    }

    match commands::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
