mod check;
mod completions;
mod generate;
mod targets;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use cons_coder_manifest::{Error, ProjectConfig};
use eyre::Result;
use generate::GenerateCommand;
use targets::TargetsCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for cons_coder_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Read the project config.
///
/// An explicit `--config` path must exist; the default `cons-coder.toml`
/// in the working directory is optional.
pub(crate) fn project_config(path: Option<&Path>) -> cons_coder_manifest::Result<ProjectConfig> {
    match path {
        Some(path) => ProjectConfig::open(path),
        None => Ok(ProjectConfig::open_if_exists(ProjectConfig::FILE_NAME)?.unwrap_or_default()),
    }
}

/// Print each load failure as a diagnostic. Returns whether any failed.
pub(crate) fn report_load_failures(failures: Vec<Box<Error>>) -> bool {
    let failed = !failures.is_empty();
    for e in failures {
        eprintln!("{:?}", miette::Report::new(*e));
    }
    failed
}

#[derive(Parser)]
#[command(name = "cons-coder")]
#[command(version)]
#[command(about = "Generate constant declarations from XML or YAML definitions")]
pub(crate) struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Targets(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate constant sources for one target
    Generate(GenerateCommand),

    /// Validate constant definitions without generating code
    Check(CheckCommand),

    /// List supported targets
    Targets(TargetsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
