//! # Report Source Module / 报告源模块
//!
//! This module defines the input model of a consolidation run: the report
//! files discovered on disk, their role (summary or feature), and the
//! reserved artifact names the consolidator works with.
//!
//! 此模块定义整合运行的输入模型：磁盘上发现的报告文件、
//! 它们的角色（摘要或 feature），以及整合器使用的保留产物名称。

use std::path::{Path, PathBuf};

/// The reserved, well-known file name of the run-level summary report.
/// 运行级摘要报告的保留文件名。
pub const SUMMARY_FILE_NAME: &str = "karate-summary.html";

/// Prefix of the consolidated output artifact. Files carrying it are never
/// ingested as feature reports, so re-runs do not consume their own output.
/// 整合输出产物的前缀。带有该前缀的文件不会被当作 feature 报告摄取，
/// 因此重新运行不会消费自己的输出。
pub const CONSOLIDATED_PREFIX: &str = "consolidated-";

/// File name of the single-document report produced by the renderer.
/// 渲染器产生的单文档报告的文件名。
pub const RENDERED_REPORT_FILE: &str = "karate-report.html";

/// Builds the output file name of a consolidation run.
/// 构建整合运行的输出文件名。
pub fn consolidated_file_name(report_name: &str) -> String {
    format!("{}{}.html", CONSOLIDATED_PREFIX, report_name)
}

/// The role a report source plays during consolidation.
/// 报告源在整合过程中扮演的角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// The run-level summary document.
    /// 运行级摘要文档。
    Summary,
    /// A per-feature report document.
    /// 按 feature 拆分的报告文档。
    Feature,
}

/// One discovered report file, together with its raw markup once read.
/// `raw_markup` stays `None` when the file could not be read; the assembler
/// degrades such a source to an empty panel instead of aborting the run.
///
/// 一个已发现的报告文件，连同读取后的原始标记。
/// 当文件无法读取时 `raw_markup` 保持为 `None`；
/// 组装器会将这样的源降级为空面板，而不是中止运行。
#[derive(Debug, Clone)]
pub struct ReportSource {
    /// Path of the report file on disk.
    /// 报告文件在磁盘上的路径。
    pub path: PathBuf,
    /// The role of this source.
    /// 此源的角色。
    pub kind: ReportKind,
    /// The file contents, or `None` when the file was unreadable.
    /// 文件内容，文件不可读时为 `None`。
    pub raw_markup: Option<String>,
}

impl ReportSource {
    /// Creates a summary source.
    pub fn summary(path: PathBuf, raw_markup: Option<String>) -> Self {
        Self {
            path,
            kind: ReportKind::Summary,
            raw_markup,
        }
    }

    /// Creates a feature source.
    pub fn feature(path: PathBuf, raw_markup: Option<String>) -> Self {
        Self {
            path,
            kind: ReportKind::Feature,
            raw_markup,
        }
    }

    /// Gets the file's base name without its extension, used to derive the
    /// tab label and id. Falls back to "feature" for degenerate paths.
    ///
    /// 获取不含扩展名的文件基础名，用于派生标签页的标题和 id。
    /// 对于异常路径回退为 "feature"。
    pub fn file_stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "feature".to_string())
    }
}

/// Notices raised while assembling a consolidated document. All of them are
/// recoverable: they are reported to the caller and the run continues.
///
/// 组装整合文档时产生的通知。它们都是可恢复的：
/// 上报给调用方后运行会继续。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyNotice {
    /// A source file could not be located or read; an empty panel was emitted.
    /// 某个源文件无法定位或读取；已生成空面板。
    UnreadableSource { path: PathBuf },
    /// A readable source exposed no content root element; an empty panel was
    /// emitted.
    /// 可读的源没有暴露内容根元素；已生成空面板。
    MissingContentRoot { path: PathBuf },
    /// Two sources normalized to the same tab id; the later one was
    /// auto-disambiguated instead of being dropped.
    /// 两个源规范化后得到相同的标签页 id；后者被自动去重而不是被丢弃。
    IdCollision { label: String, id: String },
}

impl AssemblyNotice {
    /// The path the notice refers to, when it refers to one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            AssemblyNotice::UnreadableSource { path } => Some(path),
            AssemblyNotice::MissingContentRoot { path } => Some(path),
            AssemblyNotice::IdCollision { .. } => None,
        }
    }
}
