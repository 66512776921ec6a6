//! # Karate Consolidator Library / Karate Consolidator 库
//!
//! This library provides the core functionality for the Karate Consolidator tool,
//! which renders Karate test-run results to standalone HTML and merges a directory
//! of per-feature reports into a single tabbed, searchable document.
//!
//! 此库为 Karate Consolidator 工具提供核心功能，
//! 它将 Karate 测试运行结果渲染为独立 HTML，并把按 feature 拆分的报告目录
//! 合并为一个带标签页、可搜索的文档。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, tab model, document assembly and the highlight engine
//! - `infra` - Infrastructure services like report discovery and file system operations
//! - `reporting` - Single-document HTML rendering and console output
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、标签页模型、文档组装和高亮引擎
//! - `infra` - 基础设施服务，如报告发现和文件系统操作
//! - `reporting` - 单文档 HTML 渲染和控制台输出
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use crate::core::assembler;
pub use crate::core::config;
pub use crate::core::models;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
