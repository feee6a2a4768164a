use std::path::PathBuf;

use clap::Parser;
use strata_config::Toggles;

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `strata` binary.
#[derive(Debug, Parser)]
#[command(
    name = "strata",
    version,
    about = "Restructure a flat-layer Java project into clean-architecture layers"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Maven project directory (the one holding pom.xml)
    pub project: PathBuf,

    /// Do not generate use-case contracts
    #[arg(long)]
    pub skip_use_cases: bool,

    /// Do not generate use-case implementations
    #[arg(long)]
    pub skip_impl: bool,

    /// Do not move controllers into the presentation layer
    #[arg(long)]
    pub skip_controllers: bool,

    /// Do not promote repository interfaces into the domain layer
    #[arg(long)]
    pub skip_repositories: bool,

    /// Do not copy infrastructure folders
    #[arg(long)]
    pub skip_infrastructure: bool,

    /// Do not build the domain layer
    #[arg(long)]
    pub skip_domain: bool,

    /// Do not copy data folders
    #[arg(long)]
    pub skip_data: bool,

    /// Print project information and exit without changing anything
    #[arg(long)]
    pub info_only: bool,

    /// Output format: json, raw
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no report)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
        }
    }

    /// Apply `--skip-*` flags on top of the configured toggles.
    #[must_use]
    pub const fn toggles(&self, configured: Toggles) -> Toggles {
        Toggles {
            use_cases: configured.use_cases && !self.skip_use_cases,
            implementations: configured.implementations && !self.skip_impl,
            controllers: configured.controllers && !self.skip_controllers,
            repositories: configured.repositories && !self.skip_repositories,
            infrastructure: configured.infrastructure && !self.skip_infrastructure,
            domain: configured.domain && !self.skip_domain,
            data: configured.data && !self.skip_data,
        }
    }
}
