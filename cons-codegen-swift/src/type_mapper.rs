//! Swift type mapper implementation.

use cons_coder_codegen::language::TypeMapper;
use cons_coder_core::ScalarType;
use cons_coder_manifest::Target;

/// Swift type mapper implementation.
pub struct SwiftTypeMapper;

impl TypeMapper for SwiftTypeMapper {
    fn target(&self) -> Target {
        Target::Swift
    }

    fn map_type(&self, ty: ScalarType) -> &'static str {
        match ty {
            ScalarType::Int => "Int",
            ScalarType::String => "String",
            ScalarType::Float => "Double",
            ScalarType::Bool => "Bool",
            ScalarType::Unknown => "AnyHashable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swift_types() {
        let mapper = SwiftTypeMapper;

        assert_eq!(mapper.map_type(ScalarType::Int), "Int");
        assert_eq!(mapper.map_type(ScalarType::String), "String");
        assert_eq!(mapper.map_type(ScalarType::Float), "Double");
        assert_eq!(mapper.map_type(ScalarType::Bool), "Bool");
        assert_eq!(mapper.map_type(ScalarType::Unknown), "AnyHashable");
    }
}
