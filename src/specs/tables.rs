// src/specs/tables.rs
//! Collect the data tables that follow a section origin.
//!
//! Walks the origin's later siblings in order. A sibling whose tag is the stop tag (the next
//! `<h2>`) ends the section and is not searched. Every other sibling is searched (itself and
//! its descendants) for the first qualifying table. The walk also ends at the end of the
//! sibling chain, or after `max_sibling_steps` siblings.

use crate::config::options::ExtractOptions;
use crate::core::html::{find_first_from, has_tag_attr};
use crate::core::tree::{DocumentTree, NodeId};

pub fn scan_tables(tree: &DocumentTree, origin: NodeId, opts: &ExtractOptions) -> Vec<NodeId> {
    let want = has_tag_attr(&opts.table.tag, &opts.table.key, &opts.table.value);
    let mut tables = Vec::new();
    let mut steps = 0usize;
    let mut current = tree.next_sibling(origin);

    while let Some(sib) = current {
        if steps >= opts.max_sibling_steps {
            tracing::warn!(
                steps,
                "no <{}> after {} siblings; stopping table scan",
                opts.stop_tag,
                steps
            );
            break;
        }
        steps += 1;

        if tree.get(sib).is_tag(&opts.stop_tag) {
            tracing::debug!(steps, "reached <{}>", opts.stop_tag);
            break;
        }

        if let Some(table) = find_first_from(tree, sib, &want) {
            tables.push(table);
        }
        current = tree.next_sibling(sib);
    }

    tracing::debug!(found = tables.len(), steps, "table scan done");
    tables
}
