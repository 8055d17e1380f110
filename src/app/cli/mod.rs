//! CLI Adapter.
//!
//! The role runner scans its own arguments; the image driver uses clap.

pub mod images;

use tracing::Level;

use crate::app::api;
use crate::app::logging::init_logging;
use crate::domain::{EXIT_SUCCESS, ParsedArgs, USAGE};

/// Entry point for the `rolecheck` role runner.
pub fn run() {
    init_logging(Level::WARN);

    let args: Vec<String> =
        std::env::args_os().skip(1).map(|arg| arg.to_string_lossy().into_owned()).collect();

    std::process::exit(run_with_args(&args));
}

/// Run the role runner for `args` and return the process exit code.
pub fn run_with_args(args: &[String]) -> i32 {
    let config = match api::parse_run_args(args) {
        Ok(ParsedArgs::Run(config)) => config,
        Ok(ParsedArgs::Help) => {
            println!("{}", USAGE);
            return EXIT_SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {}", e);
            return e.exit_code();
        }
    };

    match api::test_roles(&config) {
        Ok(summary) => summary.exit_code(),
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code()
        }
    }
}
