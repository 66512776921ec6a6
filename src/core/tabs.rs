//! # Tab Bar Module / 标签栏模块
//!
//! Ordered model of the consolidated document's navigation tabs. Tab ids are
//! derived from feature file names, sanitized into safe DOM ids, kept unique
//! across the document, and steered clear of the ids the skeleton already
//! claims for itself.
//!
//! 整合文档导航标签的有序模型。标签 id 由 feature 文件名派生，
//! 清洗为安全的 DOM id，在整篇文档内保持唯一，
//! 并避开骨架已占用的 id。

use anyhow::Result;

use crate::infra::t;

/// DOM ids the consolidated skeleton claims before any tab is added.
/// A feature that normalizes to one of these is renamed like a collision.
/// 整合骨架在添加任何标签之前已占用的 DOM id。
/// 规范化后撞上这些 id 的 feature 会按冲突规则重命名。
pub const RESERVED_IDS: [&str; 3] = ["summary", "search-box", "search-input"];

/// Reduces an arbitrary label to a safe DOM id: runs of characters outside
/// `[A-Za-z0-9_-]` collapse into a single `-`, leading and trailing dashes
/// are trimmed, and a label with nothing left falls back to `feature`.
///
/// 将任意标题压缩为安全的 DOM id：`[A-Za-z0-9_-]` 之外的字符连续段
/// 折叠为单个 `-`，去掉首尾的连字符，压缩后为空则回退为 `feature`。
pub fn sanitize_id(label: &str) -> String {
    let mut id = String::with_capacity(label.len());
    let mut pending_dash = false;
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            if pending_dash && !id.is_empty() {
                id.push('-');
            }
            pending_dash = false;
            id.push(ch);
        } else {
            pending_dash = true;
        }
    }
    let trimmed = id.trim_matches('-');
    if trimmed.is_empty() {
        "feature".to_string()
    } else {
        trimmed.to_string()
    }
}

/// One navigation tab of the consolidated document.
/// 整合文档中的一个导航标签。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Unique DOM id shared by the nav entry and its content panel.
    /// 导航项与其内容面板共享的唯一 DOM id。
    pub id: String,
    /// Human-readable label shown in the nav bar.
    /// 导航栏中展示的可读标题。
    pub label: String,
    /// Whether this tab is the active one.
    /// 此标签是否处于激活状态。
    pub active: bool,
}

/// Result of adding a tab: its position, its final id, and whether the id
/// had to be renamed away from a collision or a reserved id.
/// 添加标签的结果：位置、最终 id，以及 id 是否因冲突或保留 id 被重命名。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedTab {
    pub index: usize,
    pub id: String,
    pub renamed: bool,
}

/// The ordered collection of tabs. Exactly one tab is active whenever the
/// bar is non-empty; the first tab added becomes active by default.
/// 标签的有序集合。只要标签栏非空，恰好有一个标签处于激活状态；
/// 默认第一个添加的标签被激活。
#[derive(Debug, Clone, Default)]
pub struct TabBar {
    tabs: Vec<Tab>,
}

impl TabBar {
    /// Creates an empty tab bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tab for the given label. The id is sanitized from the label
    /// and, when it is reserved or already taken, disambiguated with a
    /// numeric suffix (`login`, `login-2`, `login-3`, ...).
    ///
    /// 为给定标题添加一个标签。id 由标题清洗得到，
    /// 若为保留 id 或已被占用，则追加数字后缀去重
    /// （`login`、`login-2`、`login-3`……）。
    pub fn add(&mut self, label: &str) -> AddedTab {
        let base = sanitize_id(label);
        let mut id = base.clone();
        let mut suffix = 2usize;
        while self.is_taken(&id) {
            id = format!("{}-{}", base, suffix);
            suffix += 1;
        }
        let renamed = id != base;
        let index = self.tabs.len();
        self.tabs.push(Tab {
            id: id.clone(),
            label: label.to_string(),
            active: index == 0,
        });
        AddedTab { index, id, renamed }
    }

    fn is_taken(&self, id: &str) -> bool {
        RESERVED_IDS.contains(&id) || self.tabs.iter().any(|tab| tab.id == id)
    }

    /// Moves the active marker to the tab at `index`.
    /// 将激活标记移动到 `index` 处的标签。
    pub fn activate(&mut self, index: usize) -> Result<()> {
        if index >= self.tabs.len() {
            anyhow::bail!(t!(
                "tabs.activate_out_of_range",
                index = index,
                count = self.tabs.len()
            ));
        }
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            tab.active = i == index;
        }
        Ok(())
    }

    /// Index of the active tab, `None` when the bar is empty.
    /// 激活标签的下标，标签栏为空时为 `None`。
    pub fn active_index(&self) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.active)
    }

    /// The tabs in document order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Number of tabs in the bar.
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Whether the bar has no tabs at all.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
