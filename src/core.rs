//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Karate Consolidator,
//! including data models, configuration, the tab model, the document
//! assembler and the search highlight engine.
//!
//! 此模块包含 Karate Consolidator 的核心功能，
//! 包括数据模型、配置、标签页模型、文档组装器和搜索高亮引擎。

pub mod models;
pub mod config;
pub mod source;
pub mod tabs;
pub mod fragment;
pub mod assembler;
pub mod document;
pub mod highlight;

// Re-exports
pub use assembler::assemble;
pub use config::ReportConfig;
pub use document::ConsolidatedDocument;
pub use tabs::TabBar;
