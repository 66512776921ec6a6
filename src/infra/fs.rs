//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as discovering rendered report files and writing the consolidated
//! artifact atomically.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如发现已渲染的报告文件以及原子地写出整合产物。

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::core::source::{CONSOLIDATED_PREFIX, SUMMARY_FILE_NAME};

/// Walks a reports directory and collects every feature report file.
///
/// A feature report is any `.html` file except the reserved summary file
/// and previously consolidated artifacts (files carrying the
/// `consolidated-` prefix). Subdirectories are included. The result is
/// sorted by full path, which fixes the tab order across runs.
///
/// 遍历报告目录并收集所有 feature 报告文件。
///
/// feature 报告是除保留摘要文件和既有整合产物
/// （带 `consolidated-` 前缀的文件）之外的任何 `.html` 文件。
/// 包含子目录。结果按完整路径排序，从而固定每次运行的标签顺序。
///
/// # Arguments
/// * `dir` - The reports directory to scan
///
/// # Returns
/// Sorted paths of the discovered feature report files
pub fn discover_feature_reports(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut reports = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry =
            entry.with_context(|| format!("Failed to scan reports directory: {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("html") {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        if file_name == SUMMARY_FILE_NAME || file_name.starts_with(CONSOLIDATED_PREFIX) {
            continue;
        }
        reports.push(path.to_path_buf());
    }
    reports.sort();
    Ok(reports)
}

/// Writes `contents` to `path` through a temporary file in the same
/// directory, renaming it into place afterwards. A failed run never leaves
/// a half-written artifact at the destination.
///
/// 通过同目录下的临时文件将 `contents` 写入 `path`，
/// 随后改名到位。失败的运行不会在目标位置留下写了一半的产物。
///
/// # Arguments
/// * `path` - Destination path of the artifact
/// * `contents` - Full contents to write
///
/// # Returns
/// A `Result` indicating success or failure
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).with_context(|| {
        format!(
            "Failed to create a temporary file in: {}",
            dir.display()
        )
    })?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write: {}", path.display()))?;
    file.persist(path)
        .with_context(|| format!("Failed to move the artifact into place: {}", path.display()))?;
    Ok(())
}

/// Checks if a path exists and is a directory.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a directory, `false` otherwise
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}
