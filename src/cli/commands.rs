//! # CLI Commands Module / CLI 命令模块
//!
//! This module groups the subcommand implementations of the
//! karate-consolidator CLI and the plumbing they share: locale resolution
//! and concurrent loading of report sources.
//!
//! 此模块汇集 karate-consolidator CLI 的子命令实现及其共享的基础逻辑：
//! 语言解析与报告源的并发加载。

use anyhow::Result;
use colored::*;
use futures::{stream, StreamExt};
use std::path::Path;

use crate::{
    core::{
        config::ReportConfig,
        source::{ReportSource, SUMMARY_FILE_NAME},
    },
    infra::{fs::discover_feature_reports, t},
};

pub mod consolidate;
pub mod init;
pub mod render;
pub mod search;

/// Resolves the display locale for one command invocation.
///
/// An explicit `--lang` wins over the configuration file; otherwise the
/// configured language applies.
///
/// 解析一次命令调用的显示语言。
/// 显式的 `--lang` 优先于配置文件，否则使用配置中的语言。
pub(crate) fn effective_locale(
    config: &ReportConfig,
    language: &str,
    lang_overridden: bool,
) -> String {
    if lang_overridden {
        language.to_string()
    } else {
        config.language.clone()
    }
}

/// Discovers and reads the summary and feature report sources of a reports
/// directory. Feature files are read concurrently but collected in
/// discovery order. A file that cannot be read yields a source without
/// markup rather than an error.
///
/// 发现并读取报告目录中的摘要源和 feature 报告源。
/// feature 文件并发读取，但按发现顺序收集。
/// 无法读取的文件产生不带标记的源，而不是错误。
pub(crate) async fn load_sources(
    dir: &Path,
    jobs: Option<usize>,
    locale: &str,
) -> Result<(ReportSource, Vec<ReportSource>)> {
    println!(
        "{}",
        t!("consolidate.scanning", locale = locale, path = dir.display())
    );

    let feature_paths = discover_feature_reports(dir)?;
    if feature_paths.is_empty() {
        println!("{}", t!("consolidate.no_features", locale = locale).yellow());
    } else {
        println!(
            "{}",
            t!(
                "consolidate.feature_count",
                locale = locale,
                count = feature_paths.len()
            )
        );
    }

    let jobs = jobs.unwrap_or(num_cpus::get() / 2 + 1).max(1);

    let summary_path = dir.join(SUMMARY_FILE_NAME);
    let summary_markup = tokio::fs::read_to_string(&summary_path).await.ok();
    let summary = ReportSource::summary(summary_path, summary_markup);

    let features = stream::iter(feature_paths)
        .map(|path| async move {
            let markup = tokio::fs::read_to_string(&path).await.ok();
            ReportSource::feature(path, markup)
        })
        .buffered(jobs)
        .collect::<Vec<_>>()
        .await;

    Ok((summary, features))
}
