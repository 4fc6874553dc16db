//! Rendering tests for Swift output.

use cons_coder_codegen::{
    RenderConfig,
    language::{RenderError, Renderer},
    testing::{file_with_groups, frozen_config, sample_file, status_file},
};
use cons_coder_codegen_swift::SwiftRenderer;
use cons_coder_core::{Constant, ConstantGroup, ConstantsFile, ScalarType};
use cons_coder_manifest::{Flavor, Target};

fn render_one(file: &ConstantsFile, config: &RenderConfig) -> (String, String) {
    let mut files = SwiftRenderer.render(file, config).expect("render failed");
    assert_eq!(files.len(), 1);
    let rendered = files.remove(0);
    (rendered.path.display().to_string(), rendered.content)
}

#[test]
fn test_minimal_flavor() {
    let config = frozen_config(Target::Swift).with_flavor(Flavor::Constants);
    let (path, content) = render_one(&status_file(), &config);

    assert_eq!(path, "User.swift");
    insta::assert_snapshot!(content, @r#"
    import Foundation

    /*
     * 用户模块
     *
     * Source: user.xml
     * Last modified: 2024-05-01 08:30:00
     * Generated at: 2024-06-01 10:00:00
     * Generator: cons-coder v1.0.0
     */

    // 账号状态
    public let STATUS_ACTIVE: Int = 1 // 激活
    public let STATUS_INACTIVE: Int = 0 // 停用
    "#);
}

#[test]
fn test_caseless_enum() {
    let (_, content) = render_one(&status_file(), &frozen_config(Target::Swift));

    assert!(content.contains("/// 账号状态\npublic enum Status {\n"));
    assert!(content.contains(
        "    /// 激活\n    public static let active: Int = 1\n    /// 停用\n    public static let inactive: Int = 0\n"
    ));
    assert!(!content.contains("    case "));
    assert!(content.ends_with("    }\n}\n"));
}

#[test]
fn test_accessors() {
    let (_, content) = render_one(&status_file(), &frozen_config(Target::Swift));

    assert!(content.contains(
        "public static func getAllValues() -> [Int] {\n        return [Status.active, Status.inactive]\n    }"
    ));
    assert!(content.contains("return [\"active\", \"inactive\"]"));
    assert!(content.contains(
        "        return [\n            \"active\": Status.active,\n            \"inactive\": Status.inactive,\n        ]\n"
    ));
    assert!(content.contains("public static func format(_ value: Int, lang: String = \"zh\") -> String {"));
    assert!(content.contains("\"en\": [\n                \"active\": \"Active\",\n"));
    assert!(content.contains("\"ja\": [\n                \"active\": \"激活\",\n"));
    assert!(content.contains("return \"Unknown(\\(value))\""));
    assert!(content.contains("public static func isValid(_ value: Int) -> Bool {"));
    assert!(content.contains("public static func fromString(_ key: String) -> Int? {\n        return getKeyValuePairs()[key]\n"));
    assert!(content.contains(
        "        switch value {\n        case Status.active:\n            return \"Account is usable\"\n"
    ));
    assert!(content.contains("return \"Unknown constant value: \\(value)\""));
}

#[test]
fn test_sample_types() {
    let (path, content) = render_one(&sample_file(), &frozen_config(Target::Swift));

    assert_eq!(path, "Settings.swift");
    assert!(content.contains("public enum ThemeColor {"));
    assert!(content.contains("public static let blue: String = \"#0000ff\""));
    assert!(content.contains("public static let half: Double = 0.5"));
    assert!(content.contains("public static let darkMode: Bool = true"));
    assert!(content.contains("}\n\n/// 主题色\npublic enum ThemeColor {"));
}

#[test]
fn test_member_named_like_accessor_is_rejected() {
    let group = ConstantGroup::new(
        "view",
        "",
        vec![
            Constant::new("get_all_values", ScalarType::Int, "1"),
            Constant::new("grid", ScalarType::Int, "2"),
        ],
    )
    .unwrap();
    let file = file_with_groups("views", vec![group]);

    let err = SwiftRenderer
        .render(&file, &frozen_config(Target::Swift))
        .unwrap_err();
    assert_eq!(
        err,
        RenderError::AccessorCollision {
            group: "view".into(),
            constant: "get_all_values".into(),
            ident: "getAllValues".into(),
        }
    );
}

#[test]
fn test_unknown_type_is_hashable() {
    let group = ConstantGroup::new(
        "limits",
        "",
        vec![Constant::new("timeout", ScalarType::Unknown, "30")],
    )
    .unwrap();
    let (_, content) = render_one(
        &file_with_groups("limits", vec![group]),
        &frozen_config(Target::Swift),
    );

    assert!(content.contains("public static let timeout: AnyHashable = 30\n"));
    assert!(content.contains("public static func getAllValues() -> [AnyHashable] {"));
    assert!(content.contains("public static func isValid(_ value: AnyHashable) -> Bool {"));
}
