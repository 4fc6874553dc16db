//! Optional project configuration (`cons-coder.toml`).

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, Flavor, Result, Target, error::SourceContext};

/// Project defaults for the generator. Command line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory holding the constant definitions.
    pub input: Option<PathBuf>,
    /// Directory receiving the generated sources.
    pub output: Option<PathBuf>,
    pub target: Option<Target>,
    /// Package or module name for targets that declare one.
    pub package: Option<String>,
    pub flavor: Option<Flavor>,
    /// Extra line placed at the top of every generated header.
    pub header: Option<String>,
}

impl ProjectConfig {
    pub const FILE_NAME: &'static str = "cons-coder.toml";

    /// Parse a config from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        toml::from_str(content).map_err(|e| ctx.config_error(e))
    }

    /// Parse a config file from the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse the config at `path` when it exists.
    pub fn open_if_exists(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl FromStr for ProjectConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, Self::FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: ProjectConfig = r#"
            input = "constants"
            output = "gen/ts"
            target = "ts"
            flavor = "const"
            header = "Do not edit."
        "#
        .parse()
        .unwrap();

        assert_eq!(config.input, Some(PathBuf::from("constants")));
        assert_eq!(config.output, Some(PathBuf::from("gen/ts")));
        assert_eq!(config.target, Some(Target::TypeScript));
        assert_eq!(config.flavor, Some(Flavor::Constants));
        assert_eq!(config.header.as_deref(), Some("Do not edit."));
        assert_eq!(config.package, None);
    }

    #[test]
    fn test_empty_config() {
        let config: ProjectConfig = "".parse().unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_unknown_target_is_reported() {
        let err = "target = \"cobol\"".parse::<ProjectConfig>().unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
    }

    #[test]
    fn test_unknown_key_is_reported() {
        let err = "language = \"go\"".parse::<ProjectConfig>().unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
    }

    #[test]
    fn test_open_if_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(ProjectConfig::FILE_NAME);
        assert_eq!(ProjectConfig::open_if_exists(&path).unwrap(), None);

        std::fs::write(&path, "package = \"consts\"").unwrap();
        let config = ProjectConfig::open_if_exists(&path).unwrap().unwrap();
        assert_eq!(config.package.as_deref(), Some("consts"));
    }
}
