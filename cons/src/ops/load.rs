//! Load operation - input discovery and parsing.

use std::path::Path;

use cons_coder_core::ConstantsFile;
use cons_coder_manifest::{Error, discover, load};
use eyre::{Context, Result, bail};
use tracing::{info, warn};

/// Definitions loaded from an input directory.
#[derive(Debug, Default)]
pub struct LoadedInputs {
    /// Files that parsed successfully, in path order.
    pub files: Vec<ConstantsFile>,
    /// Parse failures, one per skipped file.
    pub failures: Vec<Box<Error>>,
}

/// Discover and parse every definition file in `dir`.
///
/// A file that fails to parse is recorded and skipped. Finding no
/// definition files at all is an error.
pub fn load_inputs(dir: &Path) -> Result<LoadedInputs> {
    if !dir.is_dir() {
        bail!("input directory '{}' does not exist", dir.display());
    }

    let paths = discover(dir)
        .wrap_err_with(|| format!("failed to list '{}'", dir.display()))?;
    if paths.is_empty() {
        bail!(
            "no constant definitions (.xml, .yaml, .yml) found in '{}'",
            dir.display()
        );
    }

    let mut inputs = LoadedInputs::default();
    for path in &paths {
        match load(path) {
            Ok(file) => inputs.files.push(file),
            Err(e) => {
                warn!(path = %path.display(), "skipping file that failed to parse");
                inputs.failures.push(e);
            }
        }
    }

    info!(
        dir = %dir.display(),
        loaded = inputs.files.len(),
        failed = inputs.failures.len(),
        "loaded inputs"
    );
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const USER_XML: &str = r#"<constants label="用户模块">
    <status label="账号状态">
        <active type="int" label="激活" value="1"/>
        <inactive type="int" label="停用" value="0"/>
    </status>
</constants>"#;

    #[test]
    fn test_load_inputs_skips_broken_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("user.xml"), USER_XML).unwrap();
        fs::write(temp.path().join("broken.xml"), "<constants>").unwrap();

        let inputs = load_inputs(temp.path()).unwrap();

        assert_eq!(inputs.files.len(), 1);
        assert_eq!(inputs.files[0].file_name, "user");
        assert_eq!(inputs.failures.len(), 1);
        assert!(matches!(*inputs.failures[0], Error::Xml { .. }));
    }

    #[test]
    fn test_load_inputs_requires_definitions() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.txt"), "nothing here").unwrap();

        let err = load_inputs(temp.path()).unwrap_err();
        assert!(err.to_string().starts_with("no constant definitions"));
    }

    #[test]
    fn test_load_inputs_missing_dir() {
        let temp = TempDir::new().unwrap();
        let err = load_inputs(&temp.path().join("missing")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
