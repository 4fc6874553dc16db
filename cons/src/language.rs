//! Unified target dispatch.
//!
//! Centralizes renderer creation and the per-target name and type mapping.

use cons_coder_codegen::language::Renderer;
use cons_coder_codegen_go::GoRenderer;
use cons_coder_codegen_java::JavaRenderer;
use cons_coder_codegen_javascript::JavaScriptRenderer;
use cons_coder_codegen_kotlin::KotlinRenderer;
use cons_coder_codegen_python::PythonRenderer;
use cons_coder_codegen_swift::SwiftRenderer;
use cons_coder_codegen_typescript::TypeScriptRenderer;
use cons_coder_core::ScalarType;
use cons_coder_manifest::Target;

/// Target-specific support for code generation.
pub struct TargetSupport;

impl TargetSupport {
    /// Create the renderer for a target.
    pub fn renderer(target: Target) -> Box<dyn Renderer> {
        match target {
            Target::Python => Box::new(PythonRenderer),
            Target::Go => Box::new(GoRenderer),
            Target::Java => Box::new(JavaRenderer),
            Target::Swift => Box::new(SwiftRenderer),
            Target::Kotlin => Box::new(KotlinRenderer),
            Target::TypeScript => Box::new(TypeScriptRenderer),
            Target::JavaScript => Box::new(JavaScriptRenderer),
        }
    }

    /// Member identifier for a raw constant name.
    pub fn map_name(raw: &str, target: Target) -> String {
        Self::renderer(target).naming().member_name(raw)
    }

    /// Type spelling for a scalar type.
    pub fn map_type(ty: ScalarType, target: Target) -> &'static str {
        Self::renderer(target).type_mapper().map_type(ty)
    }
}
