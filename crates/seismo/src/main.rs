mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing; stdout is reserved for the scan report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Scan(args)) => commands::scan::run(&args),
        None => commands::scan::run(&cli.scan),
    }
}
