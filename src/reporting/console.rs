//! # Console Reporting Module / 控制台报告模块
//!
//! This module handles the display of consolidation and search results in
//! the console. It provides functionality for printing colorful, formatted
//! summaries with internationalization support.
//!
//! 此模块处理整合与搜索结果在控制台中的显示。
//! 它提供打印彩色格式化摘要的功能，支持国际化。

use colored::*;

use crate::core::document::ConsolidatedDocument;
use crate::core::highlight::SearchOutcome;
use crate::core::source::AssemblyNotice;
use crate::infra::t;

/// Prints a formatted summary of a consolidation run to the console.
/// Displays the tab table in input order, marks the active tab, and lists
/// every notice the assembler raised.
///
/// 在控制台打印整合运行的格式化摘要。
/// 按输入顺序显示标签表格，标出激活标签，并列出组装器产生的所有通知。
///
/// # Arguments / 参数
/// * `document` - The consolidated document to summarize
///                要总结的整合文档
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
///
/// # Output Format / 输出格式
/// ```text
/// --- Consolidation Summary ---
/// Tabs (in input order):
///   - checkout                 | #checkout                  active
///   - login                    | #login
/// ```
pub fn print_consolidation_summary(document: &ConsolidatedDocument, locale: &str) {
    println!("\n{}", t!("consolidation_banner", locale = locale).bold());
    println!("{}", t!("tabs_header", locale = locale));

    if document.tab_bar().is_empty() {
        println!("  {}", t!("no_tabs", locale = locale).dimmed());
    }
    for tab in document.tab_bar().tabs() {
        let marker = if tab.active {
            t!("active_marker", locale = locale).green().to_string()
        } else {
            String::new()
        };
        println!(
            "  - {:<26} | #{:<26} {}",
            tab.label, tab.id, marker
        );
    }

    for notice in document.notices() {
        println!("  {}", describe_notice(notice, locale).yellow());
    }
}

/// Prints a formatted summary of a search pass to the console.
/// Displays per-tab match counts, the total, and which tab was activated.
///
/// 在控制台打印一次搜索的格式化摘要。
/// 显示每个标签的匹配计数、总数以及哪个标签被激活。
///
/// # Arguments / 参数
/// * `outcome` - The search outcome to summarize
///               要总结的搜索结果
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
pub fn print_search_summary(outcome: &SearchOutcome, locale: &str) {
    println!("\n{}", t!("search_banner", locale = locale).bold());

    for panel in &outcome.panels {
        let count = if panel.count > 0 {
            panel.count.to_string().green()
        } else {
            panel.count.to_string().dimmed()
        };
        println!("  - {:<26} | {:>6}", panel.label, count);
    }

    let matched_tabs = outcome.panels.iter().filter(|panel| panel.count > 0).count();
    if outcome.total() == 0 {
        println!("{}", t!("search.no_matches", locale = locale).yellow());
        return;
    }
    println!(
        "{}",
        t!(
            "search.total",
            locale = locale,
            count = outcome.total(),
            tabs = matched_tabs
        )
    );
    if let Some(index) = outcome.activated {
        if let Some(panel) = outcome.panels.get(index) {
            println!(
                "{}",
                t!("search.activated", locale = locale, label = panel.label).green()
            );
        }
    }
}

/// Renders one assembly notice as a localized, human-readable line.
///
/// 将一条组装通知渲染为本地化的可读文本行。
///
/// # Arguments
/// * `notice` - The notice to describe
/// * `locale` - The language locale to use for messages
///
/// # Returns
/// A formatted string describing the notice
pub fn describe_notice(notice: &AssemblyNotice, locale: &str) -> String {
    match notice {
        AssemblyNotice::UnreadableSource { path } => t!(
            "notice.unreadable_source",
            locale = locale,
            path = path.display()
        )
        .to_string(),
        AssemblyNotice::MissingContentRoot { path } => t!(
            "notice.missing_content_root",
            locale = locale,
            path = path.display()
        )
        .to_string(),
        AssemblyNotice::IdCollision { label, id } => t!(
            "notice.id_collision",
            locale = locale,
            label = label,
            id = id
        )
        .to_string(),
    }
}
