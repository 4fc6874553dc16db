//! Go type mapper implementation.

use cons_coder_codegen::language::TypeMapper;
use cons_coder_core::ScalarType;
use cons_coder_manifest::Target;

/// Go type mapper implementation.
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn target(&self) -> Target {
        Target::Go
    }

    fn map_type(&self, ty: ScalarType) -> &'static str {
        match ty {
            ScalarType::Int => "int",
            ScalarType::String => "string",
            ScalarType::Float => "float64",
            ScalarType::Bool => "bool",
            ScalarType::Unknown => "interface{}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_types() {
        let mapper = GoTypeMapper;

        assert_eq!(mapper.map_type(ScalarType::Int), "int");
        assert_eq!(mapper.map_type(ScalarType::String), "string");
        assert_eq!(mapper.map_type(ScalarType::Float), "float64");
        assert_eq!(mapper.map_type(ScalarType::Bool), "bool");
        assert_eq!(mapper.map_type(ScalarType::Unknown), "interface{}");
    }
}
