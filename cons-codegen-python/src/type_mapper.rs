//! Python type mapper implementation.

use cons_coder_codegen::language::TypeMapper;
use cons_coder_core::ScalarType;
use cons_coder_manifest::Target;

/// Python type mapper implementation.
pub struct PythonTypeMapper;

impl TypeMapper for PythonTypeMapper {
    fn target(&self) -> Target {
        Target::Python
    }

    fn map_type(&self, ty: ScalarType) -> &'static str {
        match ty {
            ScalarType::Int => "int",
            ScalarType::String => "str",
            ScalarType::Float => "float",
            ScalarType::Bool => "bool",
            ScalarType::Unknown => "Any",
        }
    }
}
