//! Loading constant definitions from disk.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDateTime};
use cons_coder_core::ConstantsFile;
use tracing::{debug, warn};

use crate::{Error, Result, xml::parse_xml, yaml::parse_yaml};

/// Where a parsed file came from.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    /// File stem, e.g. `user` for `config/user.xml`.
    pub file_name: String,
    pub path: PathBuf,
    pub last_modified: NaiveDateTime,
}

impl SourceInfo {
    /// Build source info from a path, reading its modification time.
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let last_modified = match std::fs::metadata(path).and_then(|m| m.modified()) {
            Ok(modified) => DateTime::<Local>::from(modified).naive_local(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read modification time");
                Local::now().naive_local()
            }
        };

        Self {
            file_name,
            path: path.to_path_buf(),
            last_modified,
        }
    }
}

/// Input formats, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xml,
    Yaml,
}

impl Format {
    /// Extensions recognized as constant definitions.
    pub const EXTENSIONS: [&'static str; 3] = ["xml", "yaml", "yml"];

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "xml" => Some(Format::Xml),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// Parse constant definitions from a string.
pub fn parse_str(content: &str, format: Format, info: SourceInfo) -> Result<ConstantsFile> {
    let filename = info.path.display().to_string();
    match format {
        Format::Xml => parse_xml(content, &filename, info),
        Format::Yaml => parse_yaml(content, &filename, info),
    }
}

/// Read and parse one constant definition file.
pub fn load(path: impl AsRef<Path>) -> Result<ConstantsFile> {
    let path = path.as_ref();
    let Some(format) = Format::from_path(path) else {
        return Err(Box::new(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        }));
    };

    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let file = parse_str(&content, format, SourceInfo::from_path(path))?;
    debug!(
        path = %path.display(),
        groups = file.groups.len(),
        constants = file.constant_count(),
        "loaded constants file"
    );
    Ok(file)
}

/// Find every constant definition file directly inside `dir`, sorted by path.
pub fn discover(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let escaped = glob::Pattern::escape(&dir.display().to_string());

    let mut paths = Vec::new();
    for ext in Format::EXTENSIONS {
        let pattern = format!("{}/*.{}", escaped, ext);
        let entries = glob::glob(&pattern).map_err(|source| {
            Box::new(Error::Pattern {
                pattern: pattern.clone(),
                source,
            })
        })?;
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => paths.push(path),
                Ok(_) => {}
                Err(e) => warn!(error = %e, "skipping unreadable entry"),
            }
        }
    }

    paths.sort();
    paths.dedup();
    Ok(paths)
}
