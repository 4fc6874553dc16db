//! The per-target renderer interface.

use std::path::PathBuf;

use cons_coder_core::{ConstantsFile, ModelError};
use cons_coder_manifest::Target;
use thiserror::Error;

use super::{LiteralStyle, NamingConvention, TypeMapper};
use crate::RenderConfig;

/// A rendered output unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the output directory
    pub path: PathBuf,
    /// File content
    pub content: String,
}

impl RenderedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Errors raised while rendering one source file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("group '{group}' cannot be rendered")]
    InvalidGroup {
        group: String,
        #[source]
        source: ModelError,
    },

    #[error("'{first}' and '{second}' both map to {scope} identifier '{ident}'")]
    IdentifierCollision {
        scope: String,
        first: String,
        second: String,
        ident: String,
    },

    #[error("constant '{constant}' of group '{group}' maps to '{ident}', which names a generated accessor")]
    AccessorCollision {
        group: String,
        constant: String,
        ident: String,
    },

    #[error("output '{path}' of '{second}' would overwrite the one generated from '{first}'")]
    OutputCollision {
        path: String,
        first: String,
        second: String,
    },
}

impl RenderError {
    pub(crate) fn invalid_group(group: &str, source: ModelError) -> Self {
        Self::InvalidGroup {
            group: group.to_string(),
            source,
        }
    }
}

/// Trait for target-specific renderers.
///
/// Implement this trait to add support for rendering constants in a new
/// language.
pub trait Renderer {
    /// Target identifier
    fn target(&self) -> Target;

    /// Naming rules for identifiers and file stems
    fn naming(&self) -> NamingConvention;

    /// Scalar type mapping
    fn type_mapper(&self) -> &dyn TypeMapper;

    /// Literal spelling for values, labels and keys
    fn literal_style(&self) -> LiteralStyle {
        LiteralStyle::for_target(self.target())
    }

    /// Output file name for one source file, relative to the output directory.
    fn output_file_name(&self, file: &ConstantsFile) -> String {
        format!(
            "{}.{}",
            self.naming().file_stem(&file.file_name),
            self.target().extension()
        )
    }

    /// Render one source file into its output units.
    fn render(
        &self,
        file: &ConstantsFile,
        config: &RenderConfig,
    ) -> Result<Vec<RenderedFile>, RenderError>;

    /// Names one rendered file declares in a namespace every output of the
    /// run shares, such as a Go package, paired with the source names
    /// claiming them.
    ///
    /// Default implementation declares none.
    fn shared_names(
        &self,
        _file: &ConstantsFile,
        _config: &RenderConfig,
    ) -> Result<Vec<(String, String)>, RenderError> {
        Ok(Vec::new())
    }

    /// Render the package index over all rendered files.
    ///
    /// Default implementation emits no index.
    fn render_index(
        &self,
        _files: &[ConstantsFile],
        _config: &RenderConfig,
    ) -> Result<Option<RenderedFile>, RenderError> {
        Ok(None)
    }
}
