//! # Search Command Module / 搜索命令模块
//!
//! This module implements the `search` command for the karate-consolidator
//! CLI. It consolidates the reports directory in memory, highlights a term
//! across every feature panel and prints per-tab match counts. The on-disk
//! consolidated artifact is never touched.
//!
//! 此模块实现了 karate-consolidator CLI 的 `search` 命令。
//! 它在内存中整合报告目录，在每个 feature 面板中高亮搜索词并打印
//! 各标签页的匹配数。磁盘上的整合产物不会被改动。

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::{
    core::{assembler::assemble, config, highlight::MIN_SEARCH_TERM_LEN},
    infra::{
        fs::{absolute_path, is_directory, write_atomic},
        t,
    },
    reporting::console::print_search_summary,
};

/// Executes the search command with the provided arguments.
///
/// # Arguments
/// * `dir` - Directory containing the rendered HTML reports
/// * `term` - Text to search for across all feature panels
/// * `config_path` - Optional path to the report configuration file
/// * `jobs` - Number of report files to read concurrently
/// * `output` - Optional path for the pre-highlighted document
/// * `language` - Pre-parsed display language
/// * `lang_overridden` - Whether the language came from an explicit `--lang`
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub async fn execute(
    dir: PathBuf,
    term: String,
    config_path: Option<PathBuf>,
    jobs: Option<usize>,
    output: Option<PathBuf>,
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
    let mut document = assemble(&config, &summary, &features)?;

    println!(
        "{}",
        t!("search.searching", locale = &locale, term = &term)
    );
    let outcome = document.search(&term)?;

    if outcome.term_too_short {
        println!(
            "{}",
            t!(
                "search.term_too_short",
                locale = &locale,
                min = MIN_SEARCH_TERM_LEN
            )
            .yellow()
        );
    } else {
        print_search_summary(&outcome, &locale);
    }

    if let Some(path) = output {
        write_atomic(&path, &document.to_html()).with_context(|| {
            t!(
                "consolidate.write_failed",
                locale = &locale,
                path = path.display()
            )
        })?;
        println!(
            "{}",
            t!("search.written", locale = &locale, path = path.display()).green()
        );
    }

    Ok(())
}
