//! Rendering tests for Python output.

use cons_coder_codegen::{
    RenderConfig,
    language::{RenderError, Renderer},
    testing::{
        file_with_groups, frozen_config, order_file, sample_file, status_file, status_group,
    },
};
use cons_coder_codegen_python::PythonRenderer;
use cons_coder_core::{Constant, ConstantGroup, ConstantsFile, ScalarType};
use cons_coder_manifest::{Flavor, Target};

fn render_one(file: &ConstantsFile, config: &RenderConfig) -> (String, String) {
    let mut files = PythonRenderer.render(file, config).expect("render failed");
    assert_eq!(files.len(), 1);
    let rendered = files.remove(0);
    (rendered.path.display().to_string(), rendered.content)
}

#[test]
fn test_minimal_flavor() {
    let config = frozen_config(Target::Python).with_flavor(Flavor::Constants);
    let (path, content) = render_one(&status_file(), &config);

    assert_eq!(path, "user.py");
    insta::assert_snapshot!(content, @r#"
    """
    用户模块

    Source: user.xml
    Last modified: 2024-05-01 08:30:00
    Generated at: 2024-06-01 10:00:00
    Generator: cons-coder v1.0.0
    """

    # 账号状态
    STATUS_ACTIVE = 1  # 激活
    STATUS_INACTIVE = 0  # 停用
    "#);
}

#[test]
fn test_minimal_flavor_has_no_index() {
    let config = frozen_config(Target::Python).with_flavor(Flavor::Constants);
    let index = PythonRenderer.render_index(&[status_file()], &config).unwrap();
    assert!(index.is_none());
}

#[test]
fn test_status_class() {
    let (_, content) = render_one(&status_file(), &frozen_config(Target::Python));

    assert!(content.contains("from typing import Any, Dict, List, Optional\n\n\nclass Status:\n"));
    assert!(content.contains("    \"\"\"账号状态\"\"\"\n"));
    assert!(content.contains("    ACTIVE = 1  # 激活\n    INACTIVE = 0  # 停用\n"));
    assert!(content.contains(
        "    def __new__(cls, *args: Any, **kwargs: Any) -> \"Status\":\n        raise TypeError("
    ));
    assert!(content.contains("        return [cls.ACTIVE, cls.INACTIVE]\n"));
    assert!(content.contains("        return [\"ACTIVE\", \"INACTIVE\"]\n"));
    assert!(content.contains(
        "        return {\n            \"ACTIVE\": cls.ACTIVE,\n            \"INACTIVE\": cls.INACTIVE,\n        }\n"
    ));
}

#[test]
fn test_status_format_value() {
    let (_, content) = render_one(&status_file(), &frozen_config(Target::Python));

    assert!(content.contains("    def format_value(cls, value: int, lang: str = \"zh\") -> str:\n"));
    assert!(content.contains(
        "            \"zh\": {\n                cls.ACTIVE: \"激活\",\n                cls.INACTIVE: \"停用\",\n            },\n"
    ));
    assert!(content.contains(
        "            \"en\": {\n                cls.ACTIVE: \"Active\",\n                cls.INACTIVE: \"Inactive\",\n            },\n"
    ));
    assert!(content.contains("return table.get(value, f\"Unknown({value})\")"));
    assert!(!content.contains("\"ja\""));
}

#[test]
fn test_status_lookups() {
    let (_, content) = render_one(&status_file(), &frozen_config(Target::Python));

    assert!(content.contains("    def is_valid(cls, value: Any) -> bool:\n        return value in cls.get_all_values()\n"));
    assert!(content.contains(
        "    def from_string(cls, name: str) -> Optional[int]:\n        return cls.get_key_value_pairs().get(name)\n"
    ));
    assert!(content.contains("cls.ACTIVE: \"Account is usable\","));
    assert!(content.contains("cls.INACTIVE: \"停用\","));
    assert!(content.contains("f\"Unknown constant value: {value}\""));
    assert!(content.ends_with("\"Unknown constant value: {value}\")\n"));
}

#[test]
fn test_literals_per_type() {
    let (path, content) = render_one(&sample_file(), &frozen_config(Target::Python));

    assert_eq!(path, "settings.py");
    assert!(content.contains("    BLUE = \"#0000ff\"  # 蓝色\n    RED = \"#ff0000\"  # 红色\n"));
    assert!(content.contains("    HALF = 0.5  # 一半\n"));
    assert!(content.contains("    BETA = False  # beta\n    DARK_MODE = True  # 深色模式\n"));
    assert!(content.contains("def get_all_values(cls) -> List[bool]:"));
    assert!(content.contains("def from_string(cls, name: str) -> Optional[str]:"));
    assert!(content.contains("\n\n\nclass ThemeColor:\n"));
}

#[test]
fn test_header_comment() {
    let config = frozen_config(Target::Python).with_header_comment(Some("Do not edit.".into()));
    let (_, content) = render_one(&status_file(), &config);
    assert!(content.starts_with("\"\"\"\nDo not edit.\n\n用户模块\n"));
}

#[test]
fn test_render_is_deterministic() {
    let config = frozen_config(Target::Python);
    assert_eq!(
        render_one(&sample_file(), &config),
        render_one(&sample_file(), &config)
    );
}

#[test]
fn test_index() {
    let config = frozen_config(Target::Python);
    let index = PythonRenderer
        .render_index(&[status_file(), order_file()], &config)
        .unwrap()
        .expect("index expected");

    assert_eq!(index.path.display().to_string(), "__init__.py");
    let content = index.content;
    assert!(content.starts_with("\"\"\"\nPackage index\n\nSources: user.xml, order.yaml\n"));
    assert!(content.contains("from .user import Status\nfrom .order import PayChannel\n"));
    assert!(content.contains("__all__ = [\n    \"Status\",\n    \"PayChannel\",\n]\n"));
    assert!(content.ends_with("__version__ = \"1.0.0\"\n__generator__ = \"cons-coder\"\n"));
}

#[test]
fn test_index_skips_files_without_groups() {
    let files = [file_with_groups("empty", vec![]), order_file()];
    let index = PythonRenderer
        .render_index(&files, &frozen_config(Target::Python))
        .unwrap()
        .expect("index expected");

    assert!(index.content.contains("Sources: empty.xml, order.yaml\n"));
    assert!(index.content.contains("\nfrom .order import PayChannel\n\n__all__"));
    assert!(!index.content.contains("from .empty"));
}

#[test]
fn test_module_stem_is_importable() {
    let file = file_with_groups("user-status", vec![status_group()]);
    let config = frozen_config(Target::Python);

    let (path, _) = render_one(&file, &config);
    assert_eq!(path, "user_status.py");

    let index = PythonRenderer
        .render_index(&[file], &config)
        .unwrap()
        .expect("index expected");
    assert!(index.content.contains("from .user_status import Status\n"));
}

#[test]
fn test_index_rejects_shared_class_names() {
    // Both files define a `status` group
    let err = PythonRenderer
        .render_index(&[status_file(), sample_file()], &frozen_config(Target::Python))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "'user.status' and 'settings.status' both map to package index identifier 'Status'"
    );
}

#[test]
fn test_member_named_like_accessor_renders() {
    // Class attributes are UPPER_SNAKE, accessors are snake_case
    let group = ConstantGroup::new(
        "mode",
        "",
        vec![Constant::new("is_valid", ScalarType::Int, "1")],
    )
    .unwrap();
    let (_, content) = render_one(&file_with_groups("modes", vec![group]), &frozen_config(Target::Python));
    assert!(content.contains("    IS_VALID = 1  # is_valid\n"));
}

#[test]
fn test_mixed_group_fails() {
    let group = ConstantGroup {
        name: "mixed".into(),
        label: String::new(),
        constants: vec![
            Constant::new("a", ScalarType::Int, "1"),
            Constant::new("b", ScalarType::String, "x"),
        ],
    };
    let file = ConstantsFile {
        groups: vec![group],
        ..status_file()
    };

    let err = PythonRenderer
        .render(&file, &frozen_config(Target::Python))
        .unwrap_err();
    assert!(matches!(err, RenderError::InvalidGroup { ref group, .. } if group == "mixed"));
}
