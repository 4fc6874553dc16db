use std::path::PathBuf;

use clap::Args;
use cons_coder_manifest::{Flavor, ProjectConfig, Target};
use eyre::{Result, eyre};

use super::{UnwrapOrExit, project_config, report_load_failures};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Directory holding the XML/YAML definitions
    #[arg(short = 'd', long = "dir")]
    pub dir: Option<PathBuf>,

    /// Only check this target (defaults to all targets)
    #[arg(short = 'l', long = "lang")]
    pub target: Option<Target>,

    /// Only check this flavor (defaults to both)
    #[arg(short = 'm', long = "flavor")]
    pub flavor: Option<Flavor>,

    /// Path to cons-coder.toml (defaults to ./cons-coder.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let project = project_config(self.config.as_deref()).unwrap_or_exit();
        let input_dir = self.dir.clone().or(project.input).ok_or_else(|| {
            eyre!("no input directory; pass --dir or set 'input' in {}", ProjectConfig::FILE_NAME)
        })?;

        let targets = match self.target.or(project.target) {
            Some(target) => vec![target],
            None => Target::ALL.to_vec(),
        };
        let flavors = match self.flavor.or(project.flavor) {
            Some(flavor) => vec![flavor],
            None => vec![Flavor::Constants, Flavor::Class],
        };

        let inputs = ops::load_inputs(&input_dir)?;
        let report = ops::check(&inputs, &input_dir, &targets, &flavors);
        report_load_failures(inputs.failures);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
