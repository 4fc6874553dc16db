//! Rendering tests for Go output.

use cons_coder_codegen::{
    RenderConfig,
    language::{RenderError, Renderer},
    testing::{file_with_groups, frozen_config, sample_file, status_file},
};
use cons_coder_codegen_go::GoRenderer;
use cons_coder_core::{Constant, ConstantGroup, ConstantsFile, ScalarType};
use cons_coder_manifest::{Flavor, Target};

const HEADER: &str = "/*
 * 用户模块
 *
 * Source: user.xml
 * Last modified: 2024-05-01 08:30:00
 * Generated at: 2024-06-01 10:00:00
 * Generator: cons-coder v1.0.0
 */
";

fn render_one(file: &ConstantsFile, config: &RenderConfig) -> (String, String) {
    let mut files = GoRenderer.render(file, config).expect("render failed");
    assert_eq!(files.len(), 1);
    let rendered = files.remove(0);
    (rendered.path.display().to_string(), rendered.content)
}

#[test]
fn test_minimal_flavor() {
    let config = frozen_config(Target::Go).with_flavor(Flavor::Constants);
    let (path, content) = render_one(&status_file(), &config);

    assert_eq!(path, "user.go");
    insta::assert_snapshot!(content, @r"
    /*
     * 用户模块
     *
     * Source: user.xml
     * Last modified: 2024-05-01 08:30:00
     * Generated at: 2024-06-01 10:00:00
     * Generator: cons-coder v1.0.0
     */

    package cons

    // 账号状态
    const (
    	STATUS_ACTIVE   = 1 // 激活
    	STATUS_INACTIVE = 0 // 停用
    )
    ");
}

#[test]
fn test_struct_and_var() {
    let (_, content) = render_one(&status_file(), &frozen_config(Target::Go));

    assert!(content.starts_with(HEADER));
    assert!(content.contains("\npackage cons\n\nimport \"fmt\"\n\n"));
    assert!(content.contains(
        "// statusCons 账号状态\ntype statusCons struct {\n\tActive   int\n\tInactive int\n}\n"
    ));
    assert!(content.contains(
        "var Status = statusCons{\n\tActive:   1, // 激活\n\tInactive: 0, // 停用\n}\n"
    ));
}

#[test]
fn test_accessors() {
    let (_, content) = render_one(&status_file(), &frozen_config(Target::Go));

    assert!(content.contains(
        "func (s statusCons) AllValues() []int {\n\treturn []int{s.Active, s.Inactive}\n}\n"
    ));
    assert!(content.contains(
        "func (s statusCons) AllKeys() []string {\n\treturn []string{\"Active\", \"Inactive\"}\n}\n"
    ));
    assert!(content.contains(
        "\treturn map[string]int{\n\t\t\"Active\":   s.Active,\n\t\t\"Inactive\": s.Inactive,\n\t}\n"
    ));
    assert!(content.contains(
        "\tswitch value {\n\tcase s.Active:\n\t\treturn \"激活\"\n\tcase s.Inactive:\n\t\treturn \"停用\"\n\t}\n\treturn fmt.Sprintf(\"Unknown(%v)\", value)\n"
    ));
    assert!(content.contains("func (s statusCons) IsValid(value int) bool {\n"));
    assert!(content.contains(
        "func (s statusCons) FromString(key string) (int, bool) {\n\tvalue, ok := s.KeyValuePairs()[key]\n\treturn value, ok\n}\n"
    ));
    assert!(!content.contains("Description"));
}

#[test]
fn test_sample_types() {
    let (_, content) = render_one(&sample_file(), &frozen_config(Target::Go));

    assert!(content.contains("type themeColorCons struct {\n\tBlue string\n\tRed  string\n}\n"));
    assert!(content.contains("\tBlue: \"#0000ff\", // 蓝色\n"));
    assert!(content.contains("func (s ratioCons) Format(value float64) string {"));
    assert!(content.contains("\tBeta:     false, // beta\n\tDarkMode: true, // 深色模式\n"));
}

#[test]
fn test_package_override() {
    let config = frozen_config(Target::Go).with_package("com.acme.consts");
    let (_, content) = render_one(&status_file(), &config);
    assert!(content.contains("\npackage consts\n"));
}

#[test]
fn test_no_index() {
    let index = GoRenderer
        .render_index(&[status_file()], &frozen_config(Target::Go))
        .unwrap();
    assert!(index.is_none());
}

#[test]
fn test_member_named_like_accessor_is_rejected() {
    let group = ConstantGroup::new(
        "mode",
        "",
        vec![
            Constant::new("is_valid", ScalarType::Int, "1"),
            Constant::new("format", ScalarType::Int, "2"),
        ],
    )
    .unwrap();
    let file = file_with_groups("modes", vec![group]);

    let err = GoRenderer
        .render(&file, &frozen_config(Target::Go))
        .unwrap_err();
    assert_eq!(
        err,
        RenderError::AccessorCollision {
            group: "mode".into(),
            constant: "format".into(),
            ident: "Format".into(),
        }
    );

    // Flat constants carry no accessors
    let config = frozen_config(Target::Go).with_flavor(Flavor::Constants);
    assert!(GoRenderer.render(&file, &config).is_ok());
}

#[test]
fn test_shared_names() {
    let file = status_file();
    let names = |flavor| {
        let config = frozen_config(Target::Go).with_flavor(flavor);
        GoRenderer.shared_names(&file, &config).unwrap()
    };

    let owned = |owner: &str, ident: &str| (owner.to_string(), ident.to_string());
    assert_eq!(
        names(Flavor::Class),
        [owned("user.status", "Status"), owned("user.status", "statusCons")]
    );
    assert_eq!(
        names(Flavor::Constants),
        [
            owned("user.status.active", "STATUS_ACTIVE"),
            owned("user.status.inactive", "STATUS_INACTIVE"),
        ]
    );
}
