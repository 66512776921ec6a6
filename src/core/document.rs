//! # Document Module / 文档模块
//!
//! The in-memory model of a consolidated report: the parsed markup plus the
//! tab bar and the node handles needed to re-point the active tab or run a
//! search without re-parsing.
//!
//! 整合报告的内存模型：已解析的标记，加上标签栏以及
//! 无需重新解析即可切换激活标签或执行搜索的节点句柄。

use anyhow::Result;
use ego_tree::NodeId;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::core::fragment::{collect_text, element_value};
use crate::core::highlight::{self, PanelMatches, SearchOutcome, MIN_SEARCH_TERM_LEN};
use crate::core::source::AssemblyNotice;
use crate::core::tabs::TabBar;

pub(crate) static NAV_ITEM_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("ul.nav-tabs > li").unwrap()); // Valid literal
pub(crate) static PANE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".tab-content > .tab-pane").unwrap()); // Valid literal

/// Node handles of one tab: its nav entry and its content panel.
/// 单个标签的节点句柄：导航项与内容面板。
#[derive(Debug, Clone, Copy)]
pub(crate) struct TabNodes {
    pub(crate) nav_item: NodeId,
    pub(crate) pane: NodeId,
}

/// A consolidated report document.
/// 一份整合报告文档。
#[derive(Debug)]
pub struct ConsolidatedDocument {
    html: Html,
    tab_bar: TabBar,
    tab_nodes: Vec<TabNodes>,
    notices: Vec<AssemblyNotice>,
}

impl ConsolidatedDocument {
    pub(crate) fn new(
        html: Html,
        tab_bar: TabBar,
        tab_nodes: Vec<TabNodes>,
        notices: Vec<AssemblyNotice>,
    ) -> Self {
        Self {
            html,
            tab_bar,
            tab_nodes,
            notices,
        }
    }

    /// The document's tab bar.
    pub fn tab_bar(&self) -> &TabBar {
        &self.tab_bar
    }

    /// Notices raised while the document was assembled.
    pub fn notices(&self) -> &[AssemblyNotice] {
        &self.notices
    }

    /// Serializes the document back to markup.
    /// 将文档序列化回标记。
    pub fn to_html(&self) -> String {
        self.html.html()
    }

    /// Concatenated text content of the panel at `index`.
    /// `index` 处面板的文本内容拼接。
    pub fn panel_text(&self, index: usize) -> Option<String> {
        let nodes = self.tab_nodes.get(index)?;
        self.html.tree.get(nodes.pane).map(collect_text)
    }

    /// Moves the active marker to the tab at `index`, rewriting the `active`
    /// class on every nav entry and panel.
    /// 将激活标记移动到 `index` 处的标签，
    /// 重写所有导航项与面板上的 `active` 类。
    pub fn activate_tab(&mut self, index: usize) -> Result<()> {
        self.tab_bar.activate(index)?;
        self.apply_tab_classes();
        Ok(())
    }

    /// Runs one search pass: clears highlights from any earlier pass, marks
    /// every occurrence of `term` in each panel, and activates the first
    /// panel that matched. Terms shorter than the minimum only clear.
    ///
    /// 执行一次搜索：清除之前的高亮，在每个面板中标记 `term` 的
    /// 所有出现，并激活第一个命中的面板。短于最小长度的词条只做清除。
    pub fn search(&mut self, term: &str) -> Result<SearchOutcome> {
        let mut outcome = SearchOutcome {
            cleared: highlight::clear_highlights(&mut self.html),
            ..SearchOutcome::default()
        };
        if term.chars().count() < MIN_SEARCH_TERM_LEN {
            outcome.term_too_short = true;
            return Ok(outcome);
        }
        for (index, nodes) in self.tab_nodes.iter().enumerate() {
            let count = highlight::mark_subtree(&mut self.html.tree, nodes.pane, term);
            let tab = &self.tab_bar.tabs()[index];
            outcome.panels.push(PanelMatches {
                tab_id: tab.id.clone(),
                label: tab.label.clone(),
                count,
            });
        }
        if let Some(index) = outcome.panels.iter().position(|panel| panel.count > 0) {
            self.tab_bar.activate(index)?;
            self.apply_tab_classes();
            outcome.activated = Some(index);
        }
        Ok(outcome)
    }

    /// Regenerates each nav entry and panel element so their classes agree
    /// with the tab bar. Swapping the whole element value keeps the
    /// children in place and avoids touching cached selector state.
    fn apply_tab_classes(&mut self) {
        for (index, nodes) in self.tab_nodes.iter().enumerate() {
            let Some(tab) = self.tab_bar.tabs().get(index) else {
                continue;
            };
            let item_markup = if tab.active {
                "<li class=\"active\"></li>"
            } else {
                "<li></li>"
            };
            let pane_markup = if tab.active {
                format!("<div class=\"tab-pane active\" id=\"{}\"></div>", tab.id)
            } else {
                format!("<div class=\"tab-pane\" id=\"{}\"></div>", tab.id)
            };
            if let Some(value) = element_value(item_markup) {
                if let Some(mut nav_item) = self.html.tree.get_mut(nodes.nav_item) {
                    *nav_item.value() = value;
                }
            }
            if let Some(value) = element_value(&pane_markup) {
                if let Some(mut pane) = self.html.tree.get_mut(nodes.pane) {
                    *pane.value() = value;
                }
            }
        }
    }
}
