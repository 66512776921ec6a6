//! # Render Command Module / 渲染命令模块
//!
//! This module implements the `render` command for the karate-consolidator
//! CLI, which turns a test-run results JSON file into a standalone HTML
//! report ready for consolidation.
//!
//! 此模块实现了 karate-consolidator CLI 的 `render` 命令，
//! 将测试运行结果 JSON 文件渲染为可供整合的独立 HTML 报告。

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::{
    core::{config, models::RunResults},
    infra::t,
    reporting::html::render_run_report,
};

/// Executes the render command with the provided arguments.
///
/// # Arguments
/// * `results` - Path to the test-run results JSON file
/// * `dir` - Directory where the rendered report will be written
/// * `language` - Pre-parsed display language
/// * `lang_overridden` - Whether the language came from an explicit `--lang`
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub async fn execute(
    results: PathBuf,
    dir: PathBuf,
    language: &str,
    lang_overridden: bool,
) -> Result<()> {
    let config = config::resolve_report_config(None)?;
    let locale = super::effective_locale(&config, language, lang_overridden);
    rust_i18n::set_locale(&locale);

    let raw = tokio::fs::read_to_string(&results).await.with_context(|| {
        t!(
            "render.results_read_failed",
            locale = &locale,
            path = results.display()
        )
    })?;
    let run: RunResults = serde_json::from_str(&raw).with_context(|| {
        t!(
            "render.results_parse_failed",
            locale = &locale,
            path = results.display()
        )
    })?;

    let report_path = render_run_report(&run, &dir, &config)?;
    println!(
        "{}",
        t!(
            "render.written",
            locale = &locale,
            path = report_path.display()
        )
        .green()
        .bold()
    );

    Ok(())
}
