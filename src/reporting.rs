//! # Reporting Module / 报告模块
//!
//! This module handles the generation and display of reports in multiple
//! formats. It provides functionality for rendering standalone HTML reports
//! and printing colorful, formatted summaries to the console with
//! internationalization support.
//!
//! 此模块处理多种格式的报告生成和显示。
//! 它提供渲染独立 HTML 报告和在控制台打印彩色格式化摘要的功能，
//! 支持国际化。

pub mod console;
pub mod html;

// Re-export common reporting functions
pub use console::{print_consolidation_summary, print_search_summary};
pub use html::render_run_report;
