//! # Fragment Module / 片段模块
//!
//! Low-level DOM helpers shared by the assembler and the highlight engine:
//! escaping text for markup, minting fresh nodes, and copying subtrees
//! between parsed documents.
//!
//! 组装器与高亮引擎共享的底层 DOM 辅助函数：
//! 为标记转义文本、铸造新节点，以及在已解析文档之间复制子树。

use ego_tree::{NodeId, NodeRef, Tree};
use scraper::node::Text;
use scraper::{Html, Node};

/// Escapes the five HTML-significant characters so arbitrary text can be
/// embedded in markup or attribute values.
/// 转义五个 HTML 敏感字符，使任意文本可以嵌入标记或属性值。
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Mints a standalone text node carrying `content`.
/// 铸造一个携带 `content` 的独立文本节点。
pub fn text_node(content: &str) -> Node {
    Node::Text(Text {
        text: content.into(),
    })
}

/// Parses a one-element markup fragment and returns the element's node
/// value, ready to be inserted into another tree. Returns `None` when the
/// fragment contains no element.
///
/// 解析仅含一个元素的标记片段，返回该元素的节点值，
/// 可插入到其它树中。片段不含元素时返回 `None`。
pub fn element_value(fragment: &str) -> Option<Node> {
    let parsed = Html::parse_fragment(fragment);
    parsed
        .root_element()
        .children()
        .find(|child| child.value().is_element())
        .map(|child| child.value().clone())
}

/// Deep-copies the subtree rooted at `src` into `dest`, appended as the last
/// child of `dest_parent`. Returns the id of the copied root, or `None` when
/// `dest_parent` no longer exists.
///
/// 将以 `src` 为根的子树深拷贝到 `dest` 中，追加为 `dest_parent` 的
/// 最后一个子节点。返回拷贝根的 id，`dest_parent` 不存在时返回 `None`。
pub fn copy_subtree(
    src: NodeRef<'_, Node>,
    dest: &mut Tree<Node>,
    dest_parent: NodeId,
) -> Option<NodeId> {
    let new_id = dest.get_mut(dest_parent)?.append(src.value().clone()).id();
    for child in src.children() {
        copy_subtree(child, dest, new_id);
    }
    Some(new_id)
}

/// Deep-copies the subtree rooted at `src` into `dest`, inserted immediately
/// before `dest_sibling`.
/// 将以 `src` 为根的子树深拷贝到 `dest` 中，插入到 `dest_sibling` 之前。
pub fn copy_subtree_before(
    src: NodeRef<'_, Node>,
    dest: &mut Tree<Node>,
    dest_sibling: NodeId,
) -> Option<NodeId> {
    let new_id = dest
        .get_mut(dest_sibling)?
        .insert_before(src.value().clone())
        .id();
    for child in src.children() {
        copy_subtree(child, dest, new_id);
    }
    Some(new_id)
}

/// Concatenates every text descendant of `node` in document order.
/// 按文档顺序拼接 `node` 的所有文本后代。
pub fn collect_text(node: NodeRef<'_, Node>) -> String {
    let mut out = String::new();
    append_text(node, &mut out);
    out
}

fn append_text(node: NodeRef<'_, Node>, out: &mut String) {
    if let Node::Text(text) = node.value() {
        out.push_str(text);
    }
    for child in node.children() {
        append_text(child, out);
    }
}
