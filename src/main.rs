//! scoop-search - search scoop buckets for packages and executables

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use scoop_search::Result;
use scoop_search::app::AppContext;
use scoop_search::cli::Cli;
use scoop_search::cli::commands;
use scoop_search::cli::output::{emit_robot_or_stderr, robot_error};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.hook {
        commands::hook::run();
        return ExitCode::SUCCESS;
    }
    init_tracing(&cli);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            if cli.robot {
                emit_robot_or_stderr(&robot_error(e.code(), e.to_string()), &e);
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let ctx = AppContext::from_cli(cli)?;
    commands::run(&ctx, cli)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,scoop_search=warn",
        1 => "info,scoop_search=debug",
        2 => "debug,scoop_search=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.robot {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
