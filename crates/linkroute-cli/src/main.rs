use linkroute_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log to the state dir if we can; a CLI that can't write its log still runs.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("linkroute error: {:#}", err);
        std::process::exit(1);
    }
}
