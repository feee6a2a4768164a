use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use strata_config::StrataConfig;

mod cli;
mod commands;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("strata error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let project_root = resolve_project_root(&cli.project)?;

    let config = StrataConfig::load_with_dotenv(&project_root).with_context(|| {
        format!("failed to load configuration for {}", project_root.display())
    })?;
    init_tracing(cli.quiet, cli.verbose, &config.general.log_level)?;

    let flags = cli.global_flags();
    let toggles = cli.toggles(config.toggles);

    if cli.info_only {
        return commands::info::handle(&project_root, toggles, &flags);
    }
    commands::transform::handle(&project_root, toggles, &config.general, &flags)
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("STRATA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn resolve_project_root(project: &Path) -> anyhow::Result<PathBuf> {
    if !project.is_dir() {
        anyhow::bail!(
            "invalid project '{}': directory does not exist",
            project.display()
        );
    }
    Ok(project.to_path_buf())
}
