// src/core/html.rs
// First-match searches over a `DocumentTree`, plus the handful of predicates the
// report extraction needs. Absent results are `None`, never an error.

use super::decode::decode_legacy;
use super::tree::{DocumentTree, Node, NodeId};

/// Pre-order depth-first search from `root`: the node itself, then its children left to
/// right. Returns the first node `pred` accepts. `None` root yields `None`.
pub fn find_first<P>(tree: &DocumentTree, root: Option<NodeId>, mut pred: P) -> Option<NodeId>
where
    P: FnMut(&DocumentTree, NodeId) -> bool,
{
    let mut stack = vec![root?];
    while let Some(id) = stack.pop() {
        if pred(tree, id) {
            return Some(id);
        }
        let kids: Vec<NodeId> = tree.children(id).collect();
        stack.extend(kids.into_iter().rev());
    }
    None
}

/// Same search, starting at a cursor node. Never climbs to its parent or earlier siblings.
pub fn find_first_from<P>(tree: &DocumentTree, start: NodeId, pred: P) -> Option<NodeId>
where
    P: FnMut(&DocumentTree, NodeId) -> bool,
{
    find_first(tree, Some(start), pred)
}

/* ---------------- Predicates ---------------- */

pub fn is_tag<'a>(tag: &'a str) -> impl Fn(&DocumentTree, NodeId) -> bool + 'a {
    move |tree, id| tree.get(id).is_tag(tag)
}

pub fn is_any_tag<'a>(tags: &'a [&'a str]) -> impl Fn(&DocumentTree, NodeId) -> bool + 'a {
    move |tree, id| tree.get(id).tag().is_some_and(|t| tags.contains(&t))
}

/// Element `tag` whose attribute `key` has exactly `value`.
pub fn has_tag_attr<'a>(
    tag: &'a str,
    key: &'a str,
    value: &'a str,
) -> impl Fn(&DocumentTree, NodeId) -> bool + 'a {
    move |tree, id| {
        let node = tree.get(id);
        node.is_tag(tag) && node.attr(key) == Some(value)
    }
}

/// Element `tag` carrying attribute `key`, any value.
pub fn has_tag_with_key<'a>(tag: &'a str, key: &'a str) -> impl Fn(&DocumentTree, NodeId) -> bool + 'a {
    move |tree, id| {
        let node = tree.get(id);
        node.is_tag(tag) && node.has_attr(key)
    }
}

/// Text node whose decoded payload equals `text` exactly.
pub fn has_text<'a>(text: &'a str) -> impl Fn(&DocumentTree, NodeId) -> bool + 'a {
    move |tree, id| tree.get(id).text().is_some_and(|raw| decode_legacy(raw) == text)
}

/// Decoded text of a text node; `None` for anything else.
pub fn node_text(node: &Node) -> Option<String> {
    node.text().map(decode_legacy)
}

/// Decoded text of everything below `id`. No trimming.
pub fn inner_text(tree: &DocumentTree, id: NodeId) -> String {
    decode_legacy(&tree.raw_text(id))
}
