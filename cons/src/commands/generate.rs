use std::path::PathBuf;

use clap::Args;
use cons_coder_codegen::RenderConfig;
use cons_coder_manifest::{Flavor, ProjectConfig, Target};
use eyre::{Result, eyre};
use tracing::info;

use super::{UnwrapOrExit, project_config, report_load_failures};
use crate::{
    language::TargetSupport,
    ops::{self, LoadedInputs, WriteMode},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Directory holding the XML/YAML definitions
    #[arg(short = 'd', long = "dir")]
    pub dir: Option<PathBuf>,

    /// Directory receiving the generated sources
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target language (python, go, java, swift, kotlin, typescript, javascript)
    #[arg(short = 'l', long = "lang")]
    pub target: Option<Target>,

    /// Package or module name (go, java, kotlin)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Structural flavor: 'class' (default) or 'const'
    #[arg(short = 'm', long = "flavor")]
    pub flavor: Option<Flavor>,

    /// Extra text placed at the top of every generated header
    #[arg(long)]
    pub header: Option<String>,

    /// Path to cons-coder.toml (defaults to ./cons-coder.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let project = project_config(self.config.as_deref()).unwrap_or_exit();
        let (input_dir, config) = self.resolve(project)?;
        info!(
            input = %input_dir.display(),
            output = %config.output_dir.display(),
            target = %config.target,
            flavor = %config.flavor,
            "generating"
        );

        let LoadedInputs { files, failures } = ops::load_inputs(&input_dir)?;
        let load_failed = report_load_failures(failures);

        let renderer = TargetSupport::renderer(config.target);
        let mode = if self.dry_run {
            WriteMode::DryRun
        } else {
            WriteMode::Write
        };
        let report = ops::generate(&files, renderer.as_ref(), &config, mode);
        report.render(&mut TerminalOutput::new());

        if load_failed || report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }

    /// Merge flags over the project config into the input directory and
    /// render settings.
    fn resolve(&self, project: ProjectConfig) -> Result<(PathBuf, RenderConfig)> {
        let target = self.target.or(project.target).ok_or_else(|| {
            eyre!("no target language; pass --lang or set 'target' in {}", ProjectConfig::FILE_NAME)
        })?;
        let input_dir = self.dir.clone().or(project.input).ok_or_else(|| {
            eyre!("no input directory; pass --dir or set 'input' in {}", ProjectConfig::FILE_NAME)
        })?;
        let output_dir = self.output.clone().or(project.output).ok_or_else(|| {
            eyre!("no output directory; pass --output or set 'output' in {}", ProjectConfig::FILE_NAME)
        })?;

        let mut config = RenderConfig::new(target)
            .with_output_dir(output_dir)
            .with_flavor(self.flavor.or(project.flavor).unwrap_or_default())
            .with_header_comment(self.header.clone().or(project.header));
        if let Some(package) = self.package.clone().or(project.package) {
            config = config.with_package(package);
        }

        Ok((input_dir, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> GenerateCommand {
        GenerateCommand {
            dir: None,
            output: None,
            target: None,
            package: None,
            flavor: None,
            header: None,
            config: None,
            dry_run: false,
        }
    }

    fn project() -> ProjectConfig {
        ProjectConfig {
            input: Some("constants".into()),
            output: Some("gen".into()),
            target: Some(Target::Java),
            package: Some("com.acme.constants".into()),
            flavor: Some(Flavor::Constants),
            header: Some("Do not edit.".into()),
        }
    }

    #[test]
    fn test_resolve_from_project_config() {
        let (input, config) = command().resolve(project()).unwrap();

        assert_eq!(input, PathBuf::from("constants"));
        assert_eq!(config.output_dir, PathBuf::from("gen"));
        assert_eq!(config.target, Target::Java);
        assert_eq!(config.package, "com.acme.constants");
        assert_eq!(config.flavor, Flavor::Constants);
        assert_eq!(config.header_comment.as_deref(), Some("Do not edit."));
    }

    #[test]
    fn test_flags_override_project_config() {
        let cmd = GenerateCommand {
            dir: Some("defs".into()),
            target: Some(Target::Go),
            flavor: Some(Flavor::Class),
            ..command()
        };
        let (input, config) = cmd.resolve(project()).unwrap();

        assert_eq!(input, PathBuf::from("defs"));
        assert_eq!(config.output_dir, PathBuf::from("gen"));
        assert_eq!(config.target, Target::Go);
        assert_eq!(config.flavor, Flavor::Class);
        assert_eq!(config.package, "com.acme.constants");
    }

    #[test]
    fn test_defaults_without_package() {
        let cmd = GenerateCommand {
            dir: Some("defs".into()),
            output: Some("out".into()),
            target: Some(Target::Kotlin),
            ..command()
        };
        let (_, config) = cmd.resolve(ProjectConfig::default()).unwrap();

        assert_eq!(config.package, "com.example.constants");
        assert_eq!(config.flavor, Flavor::Class);
        assert!(config.header_comment.is_none());
    }

    #[test]
    fn test_missing_target_is_an_error() {
        let cmd = GenerateCommand {
            dir: Some("defs".into()),
            output: Some("out".into()),
            ..command()
        };
        let err = cmd.resolve(ProjectConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("no target language"));
    }

    #[test]
    fn test_missing_output_is_an_error() {
        let cmd = GenerateCommand {
            dir: Some("defs".into()),
            target: Some(Target::Swift),
            ..command()
        };
        let err = cmd.resolve(ProjectConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("no output directory"));
    }
}
