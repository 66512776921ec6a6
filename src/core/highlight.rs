//! # Highlight Module / 高亮模块
//!
//! The in-document search engine. Marking wraps every case-insensitive
//! occurrence of a term inside `<span class="search-highlight">` elements;
//! clearing unwraps those spans and merges the split text nodes back
//! together, restoring the markup the marking pass started from.
//!
//! 文档内搜索引擎。标记操作把词条的每个大小写不敏感出现
//! 包进 `<span class="search-highlight">` 元素；
//! 清除操作解开这些 span 并把被切分的文本节点合并回去，
//! 恢复标记前的原始标记。

use std::ops::Range;

use ego_tree::{NodeId, Tree};
use once_cell::sync::Lazy;
use scraper::{Html, Node, Selector};

use crate::core::fragment::{collect_text, element_value, text_node};

/// Class carried by every highlight span.
/// 每个高亮 span 携带的类名。
pub const HIGHLIGHT_CLASS: &str = "search-highlight";

/// Terms shorter than this are rejected before any document work happens.
/// 短于此长度的词条在任何文档操作之前就被拒绝。
pub const MIN_SEARCH_TERM_LEN: usize = 3;

static HIGHLIGHT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.search-highlight").unwrap()); // Valid literal

/// Match counts for one tab panel of the consolidated document.
/// 整合文档中单个标签面板的匹配计数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelMatches {
    /// DOM id of the panel's tab.
    pub tab_id: String,
    /// Label of the panel's tab.
    pub label: String,
    /// Number of highlight spans inserted into the panel.
    pub count: usize,
}

/// Outcome of one search pass over a consolidated document.
/// 对整合文档执行一次搜索的结果。
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// The term was below [`MIN_SEARCH_TERM_LEN`]; the document was left
    /// untouched apart from clearing earlier highlights.
    /// 词条短于最小长度；除清除既有高亮外未改动文档。
    pub term_too_short: bool,
    /// Highlight spans removed from a previous pass.
    /// 清除的上一轮高亮 span 数。
    pub cleared: usize,
    /// Per-panel match counts, in tab order.
    /// 按标签顺序的各面板匹配计数。
    pub panels: Vec<PanelMatches>,
    /// Index of the tab that was activated, when any panel matched.
    /// 有面板命中时被激活的标签下标。
    pub activated: Option<usize>,
}

impl SearchOutcome {
    /// Total matches across every panel.
    pub fn total(&self) -> usize {
        self.panels.iter().map(|panel| panel.count).sum()
    }
}

/// Finds the first occurrence of `needle` in `haystack` at or after byte
/// offset `from`, ignoring case. The returned range indexes the ORIGINAL
/// haystack, so the matched slice keeps its own casing. Occurrences whose
/// lowercase expansion would split a haystack character are skipped.
///
/// 在 `haystack` 中从字节偏移 `from` 起查找 `needle` 的第一次出现，
/// 忽略大小写。返回的区间索引原始 haystack，因此匹配片段保留原有大小写。
/// 小写展开会切开某个字符的出现会被跳过。
pub fn find_case_insensitive(haystack: &str, needle: &str, from: usize) -> Option<Range<usize>> {
    find_lowered(haystack, &needle.to_lowercase(), from)
}

fn find_lowered(haystack: &str, needle_lower: &str, from: usize) -> Option<Range<usize>> {
    if needle_lower.is_empty() || from > haystack.len() {
        return None;
    }
    for (idx, _) in haystack[from..].char_indices() {
        let start = from + idx;
        if let Some(end) = match_at(haystack, start, needle_lower) {
            return Some(start..end);
        }
    }
    None
}

/// Matches `needle_lower` against the lowercase expansion of the haystack
/// characters starting at `at`. Returns the end byte offset of the match,
/// which always lands on a character boundary of the original haystack.
fn match_at(haystack: &str, at: usize, needle_lower: &str) -> Option<usize> {
    let mut needle_chars = needle_lower.chars();
    let mut expected = needle_chars.next()?;
    let mut end = at;
    let mut done = false;
    for ch in haystack[at..].chars() {
        for lower in ch.to_lowercase() {
            if done {
                // The needle ran out inside this character's expansion.
                return None;
            }
            if lower != expected {
                return None;
            }
            match needle_chars.next() {
                Some(next) => expected = next,
                None => done = true,
            }
        }
        end += ch.len_utf8();
        if done {
            return Some(end);
        }
    }
    None
}

/// Wraps every occurrence of `term` under `root` in a highlight span and
/// returns the number of spans inserted. Text inside `<script>` and
/// `<style>` elements is never touched. A single text node containing
/// several occurrences is split once per occurrence.
///
/// 将 `root` 下 `term` 的每次出现包进高亮 span，返回插入的 span 数。
/// `<script>` 与 `<style>` 内的文本不会被改动。
/// 同一文本节点中的多次出现会被逐一切分。
pub fn mark_subtree(tree: &mut Tree<Node>, root: NodeId, term: &str) -> usize {
    let needle_lower = term.to_lowercase();
    if needle_lower.is_empty() {
        return 0;
    }
    let span_template = match element_value(&format!("<span class=\"{}\"></span>", HIGHLIGHT_CLASS))
    {
        Some(value) => value,
        None => return 0,
    };
    mark_children(tree, root, &needle_lower, &span_template)
}

enum Visit {
    Recurse,
    Mark,
    Skip,
}

fn mark_children(tree: &mut Tree<Node>, parent: NodeId, needle_lower: &str, span: &Node) -> usize {
    // Snapshot the child list up front: nodes inserted while marking must
    // not be visited by the same pass.
    let children: Vec<NodeId> = match tree.get(parent) {
        Some(node) => node.children().map(|child| child.id()).collect(),
        None => return 0,
    };
    let mut inserted = 0;
    for child_id in children {
        let visit = match tree.get(child_id).map(|child| child.value()) {
            Some(Node::Element(element)) => {
                let name = element.name();
                if name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style") {
                    Visit::Skip
                } else {
                    Visit::Recurse
                }
            }
            Some(Node::Text(_)) => Visit::Mark,
            _ => Visit::Skip,
        };
        match visit {
            Visit::Recurse => inserted += mark_children(tree, child_id, needle_lower, span),
            Visit::Mark => inserted += mark_text(tree, child_id, needle_lower, span),
            Visit::Skip => {}
        }
    }
    inserted
}

/// Splits one text node around each occurrence. The node itself is reused
/// to hold the remaining suffix, so the loop terminates once no occurrence
/// is left; a node ending exactly on a match is detached instead.
fn mark_text(tree: &mut Tree<Node>, node_id: NodeId, needle_lower: &str, span: &Node) -> usize {
    let mut inserted = 0;
    loop {
        let text = match tree.get(node_id).and_then(|node| node.value().as_text()) {
            Some(text) => text.to_string(),
            None => break,
        };
        let range = match find_lowered(&text, needle_lower, 0) {
            Some(range) => range,
            None => break,
        };
        let prefix = &text[..range.start];
        let matched = &text[range.clone()];
        let suffix = &text[range.end..];

        if let Some(mut node) = tree.get_mut(node_id) {
            if !prefix.is_empty() {
                node.insert_before(text_node(prefix));
            }
        }
        let span_id = match tree.get_mut(node_id) {
            Some(mut node) => node.insert_before(span.clone()).id(),
            None => break,
        };
        if let Some(mut span_node) = tree.get_mut(span_id) {
            span_node.append(text_node(matched));
        }
        inserted += 1;

        if suffix.is_empty() {
            if let Some(mut node) = tree.get_mut(node_id) {
                node.detach();
            }
            break;
        }
        let remainder = suffix.to_string();
        if let Some(mut node) = tree.get_mut(node_id) {
            if let Node::Text(value) = node.value() {
                value.text = remainder.as_str().into();
            }
        }
    }
    inserted
}

/// Removes every highlight span from the document, splicing the span's text
/// back into its place, and merges the text nodes the marking pass split.
/// After a mark/clear round trip the document serializes byte-identically
/// to its pre-mark form. Returns the number of spans removed.
///
/// 移除文档中的所有高亮 span，把 span 的文本接回原位，
/// 并合并标记时切分的文本节点。一次标记/清除往返后，
/// 文档序列化结果与标记前逐字节一致。返回移除的 span 数。
pub fn clear_highlights(document: &mut Html) -> usize {
    let span_ids: Vec<NodeId> = document
        .select(&HIGHLIGHT_SELECTOR)
        .map(|element| element.id())
        .collect();
    let mut touched_parents: Vec<NodeId> = Vec::new();
    let mut removed = 0;
    // Unwrap innermost spans first so nested spans collapse correctly.
    for span_id in span_ids.into_iter().rev() {
        let (parent_id, text) = match document.tree.get(span_id) {
            Some(span) => match span.parent() {
                Some(parent) => (parent.id(), collect_text(span)),
                None => continue,
            },
            None => continue,
        };
        if let Some(mut span) = document.tree.get_mut(span_id) {
            if !text.is_empty() {
                span.insert_before(text_node(&text));
            }
            span.detach();
        }
        if !touched_parents.contains(&parent_id) {
            touched_parents.push(parent_id);
        }
        removed += 1;
    }
    for parent_id in touched_parents {
        merge_text_children(&mut document.tree, parent_id);
    }
    removed
}

/// Merges runs of adjacent text children of `parent` into the first node of
/// each run.
/// 把 `parent` 下相邻的文本子节点串合并进每段的第一个节点。
pub fn merge_text_children(tree: &mut Tree<Node>, parent: NodeId) {
    let children: Vec<NodeId> = match tree.get(parent) {
        Some(node) => node.children().map(|child| child.id()).collect(),
        None => return,
    };
    let mut run_head: Option<NodeId> = None;
    for child_id in children {
        let is_text = tree
            .get(child_id)
            .map(|child| child.value().is_text())
            .unwrap_or(false);
        if !is_text {
            run_head = None;
            continue;
        }
        let Some(head_id) = run_head else {
            run_head = Some(child_id);
            continue;
        };
        let extra = match tree.get(child_id).and_then(|child| child.value().as_text()) {
            Some(text) => text.to_string(),
            None => continue,
        };
        if let Some(mut head) = tree.get_mut(head_id) {
            if let Node::Text(value) = head.value() {
                value.text.push_slice(&extra);
            }
        }
        if let Some(mut node) = tree.get_mut(child_id) {
            node.detach();
        }
    }
}
