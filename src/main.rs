//! noipd: No-IP Dynamic DNS Updater
//!
//! Entry point for the noipd binary.

use std::process::ExitCode;

use noip_updater::config::{Cli, Config};

mod app;
mod run;

use app::{exit_code, setup_tracing};

fn main() -> ExitCode {
    // clap handles `-h`/`--help` (print usage, exit 0) before this
    // returns; other unrecognized arguments are accepted and ignored.
    let cli = Cli::parse_args();

    setup_tracing(cli.verbose);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Required-field diagnostics go to standard output, not
            // the log stream.
            println!("{e}");
            return exit_code::CONFIG_ERROR;
        }
    };
    tracing::info!("Configuration loaded: {config}");

    run_application(config)
}

/// Runs the main application with the given configuration.
fn run_application(config: Config) -> ExitCode {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    runtime.block_on(run::execute(config));

    // The scheduler loop never resolves; this is unreachable short of
    // runtime teardown.
    exit_code::SUCCESS
}
