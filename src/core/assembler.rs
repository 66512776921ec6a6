//! # Assembler Module / 组装模块
//!
//! Builds the consolidated document: a fixed skeleton carrying the merged
//! styles, the summary panel, the search box and one tab per feature report,
//! into which each source document's content root is spliced.
//!
//! 构建整合文档：一个固定骨架，携带合并后的样式、摘要面板、
//! 搜索框以及每个 feature 报告对应的标签页，
//! 各源文档的内容根被接入其中。

use anyhow::Result;
use ego_tree::NodeId;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::core::config::ReportConfig;
use crate::core::document::{ConsolidatedDocument, TabNodes, NAV_ITEM_SELECTOR, PANE_SELECTOR};
use crate::core::fragment::{copy_subtree, copy_subtree_before, escape_html};
use crate::core::source::{AssemblyNotice, ReportSource};
use crate::core::tabs::TabBar;
use crate::infra::t;

/// Fixed stylesheet of the consolidated document / 整合文档的固定样式表
const CONSOLIDATED_STYLE: &str = include_str!("assets/consolidated.css");

/// Embedded tab-switching and search behavior / 嵌入的标签切换与搜索行为脚本
const CONSOLIDATED_SCRIPT: &str = include_str!("assets/consolidated.js");

static STYLE_ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("head > style").unwrap()); // Valid literal
static SUMMARY_PANEL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#summary").unwrap()); // Valid literal
static SOURCE_STYLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("style").unwrap()); // Valid literal

/// Assembles one consolidated document out of a summary source and an
/// ordered list of feature sources.
///
/// The skeleton is built first, with every tab already in place; the
/// foreign content roots are then copied into their panels. Unreadable
/// sources and sources without a content root degrade to empty panels and
/// are reported through the document's notices instead of failing the run.
///
/// 由一个摘要源和有序的 feature 源列表组装出一份整合文档。
///
/// 先构建包含全部标签位的骨架，再将外部内容根拷贝进各自面板。
/// 不可读的源或缺少内容根的源降级为空面板，
/// 通过文档的通知上报而不是让运行失败。
pub fn assemble(
    config: &ReportConfig,
    summary: &ReportSource,
    features: &[ReportSource],
) -> Result<ConsolidatedDocument> {
    let content_selector = parse_content_selector(&config.content_class)?;
    let locale = config.language.as_str();
    let mut notices: Vec<AssemblyNotice> = Vec::new();

    let mut tab_bar = TabBar::new();
    for feature in features {
        let label = feature.file_stem();
        let added = tab_bar.add(&label);
        if added.renamed {
            notices.push(AssemblyNotice::IdCollision {
                label,
                id: added.id,
            });
        }
    }

    let skeleton = build_skeleton(config, &tab_bar, locale);
    let mut document = Html::parse_document(&skeleton);

    // Collect every splice anchor before the first mutation; node ids stay
    // valid across mutations, selections do not.
    let style_anchor = document
        .select(&STYLE_ANCHOR_SELECTOR)
        .next()
        .map(|element| element.id());
    let summary_panel = document
        .select(&SUMMARY_PANEL_SELECTOR)
        .next()
        .map(|element| element.id());
    let nav_items: Vec<NodeId> = document
        .select(&NAV_ITEM_SELECTOR)
        .map(|element| element.id())
        .collect();
    let panes: Vec<NodeId> = document
        .select(&PANE_SELECTOR)
        .map(|element| element.id())
        .collect();
    let (Some(style_anchor), Some(summary_panel)) = (style_anchor, summary_panel) else {
        anyhow::bail!("Consolidated skeleton lost its head or summary section during parsing.");
    };
    if nav_items.len() != tab_bar.len() || panes.len() != tab_bar.len() {
        anyhow::bail!("Consolidated skeleton lost its tab structure during parsing.");
    }

    splice_summary(
        &mut document,
        summary,
        &content_selector,
        style_anchor,
        summary_panel,
        &mut notices,
    );

    let tab_nodes: Vec<TabNodes> = nav_items
        .into_iter()
        .zip(panes)
        .map(|(nav_item, pane)| TabNodes { nav_item, pane })
        .collect();
    for (feature, nodes) in features.iter().zip(&tab_nodes) {
        splice_content(
            &mut document,
            feature,
            &content_selector,
            nodes.pane,
            &mut notices,
        );
    }

    Ok(ConsolidatedDocument::new(
        document, tab_bar, tab_nodes, notices,
    ))
}

fn parse_content_selector(content_class: &str) -> Result<Selector> {
    Selector::parse(&format!(".{}", content_class))
        .map_err(|_| anyhow::anyhow!(t!("assembler.bad_content_class", class = content_class)))
}

/// Builds the static page the content roots are spliced into. Every nav
/// entry and panel already exists here; the splice passes only copy
/// subtrees into place.
fn build_skeleton(config: &ReportConfig, tab_bar: &TabBar, locale: &str) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html><html><head><title>{}</title>",
        escape_html(&config.title)
    ));
    html.push_str("<style>");
    html.push_str(CONSOLIDATED_STYLE);
    html.push_str("</style>");
    html.push_str("</head><body>");

    html.push_str("<div id=\"summary\" class=\"container\"></div>");
    html.push_str(&format!(
        "<div id=\"search-box\"><input type=\"text\" id=\"search-input\" placeholder=\"{}\"></div>",
        escape_html(&t!("report.search_all_placeholder", locale = locale))
    ));

    html.push_str("<div class=\"container\">");
    html.push_str("<ul class=\"nav-tabs\">");
    for tab in tab_bar.tabs() {
        let class = if tab.active { " class=\"active\"" } else { "" };
        html.push_str(&format!(
            "<li{}><a href=\"#{}\" data-toggle=\"tab\">{}</a></li>",
            class,
            tab.id,
            escape_html(&tab.label)
        ));
    }
    html.push_str("</ul>");
    html.push_str("<div class=\"tab-content\">");
    for tab in tab_bar.tabs() {
        let class = if tab.active {
            "tab-pane active"
        } else {
            "tab-pane"
        };
        html.push_str(&format!("<div class=\"{}\" id=\"{}\"></div>", class, tab.id));
    }
    html.push_str("</div></div>");

    html.push_str("<script>");
    html.push_str(CONSOLIDATED_SCRIPT);
    html.push_str("</script></body></html>");
    html
}

/// Copies the summary's style elements into the head, ahead of the fixed
/// stylesheet, then splices the summary's content root into the summary
/// panel.
fn splice_summary(
    document: &mut Html,
    summary: &ReportSource,
    content_selector: &Selector,
    style_anchor: NodeId,
    summary_panel: NodeId,
    notices: &mut Vec<AssemblyNotice>,
) {
    let Some(markup) = summary.raw_markup.as_deref() else {
        notices.push(AssemblyNotice::UnreadableSource {
            path: summary.path.clone(),
        });
        return;
    };
    let source = Html::parse_document(markup);
    for style in source.select(&SOURCE_STYLE_SELECTOR) {
        copy_subtree_before(*style, &mut document.tree, style_anchor);
    }
    match source.select(content_selector).next() {
        Some(content_root) => {
            copy_subtree(*content_root, &mut document.tree, summary_panel);
        }
        None => notices.push(AssemblyNotice::MissingContentRoot {
            path: summary.path.clone(),
        }),
    }
}

/// Splices one feature source's content root into its panel.
fn splice_content(
    document: &mut Html,
    source: &ReportSource,
    content_selector: &Selector,
    pane: NodeId,
    notices: &mut Vec<AssemblyNotice>,
) {
    let Some(markup) = source.raw_markup.as_deref() else {
        notices.push(AssemblyNotice::UnreadableSource {
            path: source.path.clone(),
        });
        return;
    };
    let parsed = Html::parse_document(markup);
    match parsed.select(content_selector).next() {
        Some(content_root) => {
            copy_subtree(*content_root, &mut document.tree, pane);
        }
        None => notices.push(AssemblyNotice::MissingContentRoot {
            path: source.path.clone(),
        }),
    }
}
