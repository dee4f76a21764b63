use anyhow::Context;
use clap::Parser;
use geno_config::{GenoConfig, LOG_ENV};

mod cli;
mod commands;
mod discovery;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("genofhir error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    let config = match &flags.config {
        Some(path) => GenoConfig::load_from(path)
            .with_context(|| format!("failed to load config file {}", path.display()))?,
        None => GenoConfig::load_with_dotenv().context("failed to load configuration")?,
    };
    init_tracing(flags.quiet, flags.verbose, &config.log.level)?;

    commands::dispatch(cli.command, &config, &flags)
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
