//! # Consolidate Command Module / 整合命令模块
//!
//! This module implements the `consolidate` command for the
//! karate-consolidator CLI, which merges a directory of rendered feature
//! reports into a single tabbed, searchable HTML document.
//!
//! 此模块实现了 karate-consolidator CLI 的 `consolidate` 命令，
//! 将一个目录中的已渲染 feature 报告合并为单个带标签页、可搜索的 HTML 文档。

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::{
    core::{assembler::assemble, config, source::consolidated_file_name},
    infra::{
        fs::{absolute_path, is_directory, write_atomic},
        t,
    },
    reporting::console::print_consolidation_summary,
};

/// Executes the consolidate command with the provided arguments.
///
/// # Arguments
/// * `dir` - Directory containing the rendered HTML reports
/// * `config_path` - Optional path to the report configuration file
/// * `jobs` - Number of report files to read concurrently
/// * `language` - Pre-parsed display language
/// * `lang_overridden` - Whether the language came from an explicit `--lang`
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub async fn execute(
    dir: PathBuf,
    config_path: Option<PathBuf>,
    jobs: Option<usize>,
    language: &str,
    lang_overridden: bool,
) -> Result<()> {
    let config = config::resolve_report_config(config_path.as_deref())?;
    let locale = super::effective_locale(&config, language, lang_overridden);
    rust_i18n::set_locale(&locale);

    if !is_directory(&dir) {
        anyhow::bail!(t!(
            "reports_dir_not_found",
            locale = &locale,
            path = dir.display()
        ));
    }
    let dir = absolute_path(&dir)?;

    let (summary, features) = super::load_sources(&dir, jobs, &locale).await?;

    let document = assemble(&config, &summary, &features)?;

    let target = dir.join(consolidated_file_name(&config.report_name));
    write_atomic(&target, &document.to_html()).with_context(|| {
        t!(
            "consolidate.write_failed",
            locale = &locale,
            path = target.display()
        )
    })?;

    print_consolidation_summary(&document, &locale);
    println!(
        "\n{}",
        t!(
            "consolidate.written",
            locale = &locale,
            path = target.display()
        )
        .green()
        .bold()
    );

    Ok(())
}
