// src/record.rs
// Readings and the table -> lines assembly.

use chrono::NaiveDateTime;

use crate::config::options::ExtractOptions;
use crate::core::html::is_any_tag;
use crate::core::tree::{DocumentTree, NodeId};
use crate::csv::join_fields;
use crate::specs::rows::{classify_row, DateCursor, RowKind};

const ROW_TAG: &str = "tr";
const SECTION_TAGS: &[&str] = &["thead", "tbody", "tfoot"];

/// One meter reading. Values are kept exactly as the report prints them
/// (decimal comma or point, padding and all).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub timestamp: NaiveDateTime,
    pub kwh_delivered: String,
    pub kwh_received: String,
    pub kvarh_delivered: String,
    pub kvarh_received: String,
}

impl Record {
    /// `dd.mm.yyyy;HH:MM:00;f2;f3;f4;f5`. Seconds are always `00`.
    pub fn to_line(&self, delim: char) -> String {
        let date = self.timestamp.format("%d.%m.%Y").to_string();
        let time = self.timestamp.format("%H:%M:00").to_string();
        join_fields(
            &[
                &date,
                &time,
                &self.kwh_delivered,
                &self.kwh_received,
                &self.kvarh_delivered,
                &self.kvarh_received,
            ],
            delim,
        )
    }
}

/// `tr` elements of a table in document order: direct children, and children of
/// `thead`/`tbody`/`tfoot`. Anything else (whitespace, captions, nested tables) is skipped.
pub fn table_rows(tree: &DocumentTree, table: NodeId) -> Vec<NodeId> {
    let is_section = is_any_tag(SECTION_TAGS);
    let mut rows = Vec::new();
    for child in tree.children(table) {
        if tree.get(child).is_tag(ROW_TAG) {
            rows.push(child);
        } else if is_section(tree, child) {
            rows.extend(tree.children(child).filter(|&r| tree.get(r).is_tag(ROW_TAG)));
        }
    }
    rows
}

/// Turn one table into output lines, moving `cursor` on every date marker.
pub fn assemble(
    tree: &DocumentTree,
    table: NodeId,
    cursor: &mut DateCursor,
    opts: &ExtractOptions,
) -> Vec<String> {
    let mut lines = Vec::new();

    for row in table_rows(tree, table) {
        match classify_row(tree, row, cursor, opts) {
            Ok(RowKind::Header) => {}
            Ok(RowKind::DateMarker(date)) => {
                tracing::trace!(?date, "date marker");
                *cursor = date;
            }
            Ok(RowKind::Data(record)) => lines.push(record.to_line(opts.delim)),
            Err(e) => tracing::debug!(row = row.index(), "skipping row: {e}"),
        }
    }
    lines
}
