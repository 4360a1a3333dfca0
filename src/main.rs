//! `modeldocs` - maintenance tooling for per-model markdown tutorial sites

use clap::Parser;

use modeldocs::cli::args::Cli;
use modeldocs::cli::commands;
use modeldocs::error::ExitCode;
use modeldocs::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
