// src/specs/section.rs
//! Locate the report section by its named anchor.
//!
//! The report marks each block with `<a name="…">Label</a>`. We look for the first anchor
//! (pre-order) whose *first child* is a text node decoding to the label, byte for byte.
//! No trimming: `"Данные ГН "` with its trailing space is what the report carries, and other
//! sections differ only in small ways.
//!
//! The section origin is the anchor's parent; tables are searched among the parent's later
//! siblings (`specs::tables`).

use crate::core::html::{find_first, has_tag_with_key, node_text};
use crate::core::tree::{DocumentTree, NodeId};
use crate::config::consts::{ANCHOR_KEY, ANCHOR_TAG};
use crate::error::{Error, Result};

/// The anchor node carrying `label`, if any. Anchors without a text first child are skipped.
pub fn find_anchor(tree: &DocumentTree, label: &str) -> Option<NodeId> {
    let is_anchor = has_tag_with_key(ANCHOR_TAG, ANCHOR_KEY);
    find_first(tree, Some(tree.root()), |tree, id| {
        if !is_anchor(tree, id) {
            return false;
        }
        let node = tree.get(id);
        // First child must exist and be text, and the anchor must have a parent to return
        let label_matches = node
            .first_child
            .and_then(|c| node_text(tree.get(c)))
            .is_some_and(|text| text == label);
        if !label_matches {
            tracing::trace!(node = id.index(), "anchor skipped");
        }
        label_matches && node.parent.is_some()
    })
}

/// Parent of the matching anchor.
pub fn locate_section(tree: &DocumentTree, label: &str) -> Result<NodeId> {
    let origin = find_anchor(tree, label).and_then(|a| tree.parent(a));
    match origin {
        Some(id) => {
            tracing::debug!(origin = id.index(), label, "section located");
            Ok(id)
        }
        None => Err(Error::SectionNotFound { label: label.to_string() }),
    }
}
