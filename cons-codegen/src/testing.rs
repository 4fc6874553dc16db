//! Shared fixtures for renderer tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use chrono::{NaiveDate, NaiveDateTime};
use cons_coder_core::{Constant, ConstantGroup, ConstantsFile, ScalarType, Version};
use cons_coder_manifest::Target;

use crate::RenderConfig;

/// Last-modified time of every fixture file: `2024-05-01 08:30:00`.
pub fn fixed_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(8, 30, 0))
        .expect("valid fixture timestamp")
}

/// Render settings with a frozen clock (`2024-06-01 10:00:00`) and version `1.0.0`.
pub fn frozen_config(target: Target) -> RenderConfig {
    let generated_at = NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .expect("valid fixture timestamp");
    RenderConfig::new(target)
        .with_generated_at(generated_at)
        .with_tool_version(Version::new(1, 0, 0))
}

/// `status`: `active = 1` (激活) and `inactive = 0` (停用).
pub fn status_group() -> ConstantGroup {
    ConstantGroup::new(
        "status",
        "账号状态",
        vec![
            Constant::new("active", ScalarType::Int, "1")
                .with_label("激活")
                .with_description("Account is usable"),
            Constant::new("inactive", ScalarType::Int, "0").with_label("停用"),
        ],
    )
    .expect("valid status group")
}

/// `config/user.xml` holding only [`status_group`].
pub fn status_file() -> ConstantsFile {
    ConstantsFile::new(
        "user",
        "config/user.xml",
        "用户模块",
        vec![status_group()],
        fixed_timestamp(),
    )
    .expect("valid status file")
}

/// `config/settings.yaml` with one group per scalar type.
pub fn sample_file() -> ConstantsFile {
    let groups = vec![
        status_group(),
        ConstantGroup::new(
            "theme_color",
            "主题色",
            vec![
                Constant::new("red", ScalarType::String, "#ff0000").with_label("红色"),
                Constant::new("blue", ScalarType::String, "#0000ff").with_label("蓝色"),
            ],
        )
        .expect("valid theme group"),
        ConstantGroup::new(
            "ratio",
            "",
            vec![Constant::new("half", ScalarType::Float, "0.5").with_label("一半")],
        )
        .expect("valid ratio group"),
        ConstantGroup::new(
            "feature_flag",
            "功能开关",
            vec![
                Constant::new("dark_mode", ScalarType::Bool, "true").with_label("深色模式"),
                Constant::new("beta", ScalarType::Bool, "false"),
            ],
        )
        .expect("valid flag group"),
    ];

    ConstantsFile::new(
        "settings",
        "config/settings.yaml",
        "系统设置",
        groups,
        fixed_timestamp(),
    )
    .expect("valid sample file")
}

/// `config/order.yaml` holding `pay_channel`: `web` (网页) and `app` (应用).
pub fn order_file() -> ConstantsFile {
    let group = ConstantGroup::new(
        "pay_channel",
        "支付渠道",
        vec![
            Constant::new("web", ScalarType::String, "web").with_label("网页"),
            Constant::new("app", ScalarType::String, "app").with_label("应用"),
        ],
    )
    .expect("valid pay channel group");

    ConstantsFile::new(
        "order",
        "config/order.yaml",
        "订单模块",
        vec![group],
        fixed_timestamp(),
    )
    .expect("valid order file")
}

/// `config/<name>.xml` with the given groups and no label.
pub fn file_with_groups(name: &str, groups: Vec<ConstantGroup>) -> ConstantsFile {
    ConstantsFile::new(
        name,
        format!("config/{}.xml", name),
        "",
        groups,
        fixed_timestamp(),
    )
    .expect("valid fixture file")
}
