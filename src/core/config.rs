//! # Configuration Module / 配置模块
//!
//! Loading and defaulting of the report configuration. All fields fall back
//! to the conventions of the original Karate artifacts, so the tool works
//! without any configuration file at all.
//!
//! 报告配置的加载与默认值。所有字段都回退到原始 Karate 产物的约定，
//! 因此即使没有任何配置文件工具也能工作。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default file name of the report configuration.
/// 报告配置的默认文件名。
pub const DEFAULT_CONFIG_FILE: &str = "ConsolidateReport.toml";

/// Represents the report configuration, loaded from a TOML file.
/// Every field has a default so a missing or partial file still yields a
/// usable configuration.
/// 代表报告配置，从 TOML 文件加载。
/// 每个字段都有默认值，因此缺失或不完整的文件仍能得到可用的配置。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// The language for the tool's output messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 工具输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// The artifact name of the report. The consolidated document is written
    /// as `consolidated-<report_name>.html` inside the reports directory.
    ///
    /// 报告的产物名称。整合文档会以 `consolidated-<report_name>.html`
    /// 的形式写入报告目录。
    #[serde(default = "default_report_name")]
    pub report_name: String,

    /// The `<title>` of the consolidated document.
    /// 整合文档的 `<title>`。
    #[serde(default = "default_title")]
    pub title: String,

    /// The CSS class that marks the content root element of each rendered
    /// report document. Extraction takes the first element carrying it.
    ///
    /// 标记每个已渲染报告文档内容根元素的 CSS 类。
    /// 提取时取第一个带有该类的元素。
    #[serde(default = "default_content_class")]
    pub content_class: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            report_name: default_report_name(),
            title: default_title(),
            content_class: default_content_class(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_report_name() -> String {
    "karate-report".to_string()
}

fn default_title() -> String {
    "Consolidated Karate Report".to_string()
}

fn default_content_class() -> String {
    "container".to_string()
}

/// Loads a `ReportConfig` from a TOML file.
/// 从 TOML 文件加载 `ReportConfig`。
pub fn load_report_config(path: &Path) -> Result<ReportConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let config: ReportConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;
    Ok(config)
}

/// Resolves the configuration for a command invocation.
///
/// An explicitly given path must load, and a broken file is an error. With
/// no explicit path, [`DEFAULT_CONFIG_FILE`] is loaded when it exists in
/// the working directory; otherwise the built-in defaults apply.
///
/// 解析一次命令调用所用的配置。
///
/// 显式给出的路径必须能加载，文件损坏视为错误。未显式给出时，
/// 若工作目录存在 [`DEFAULT_CONFIG_FILE`] 则加载它；否则使用内置默认值。
pub fn resolve_report_config(explicit: Option<&Path>) -> Result<ReportConfig> {
    match explicit {
        Some(path) => load_report_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load_report_config(default_path)
            } else {
                Ok(ReportConfig::default())
            }
        }
    }
}
