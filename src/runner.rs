// src/runner.rs
use std::path::{Path, PathBuf};

use crate::{
    config::options::{AppOptions, ExtractOptions},
    core::tree::DocumentTree,
    error::{Error, Result},
    file::{output_path, read_report, write_report_lines},
    progress::Progress,
    record::assemble,
    specs::{section::locate_section, tables::scan_tables},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub rows_written: usize,
}

/// Full pipeline over an already-built tree: section -> tables -> lines.
///
/// Each table starts from `opts.initial_date` unless `carry_date_across_tables` is set, in
/// which case the date of the last marker flows into the next table.
pub fn extract_tree(tree: &DocumentTree, opts: &ExtractOptions) -> Result<Vec<String>> {
    let origin = locate_section(tree, &opts.section_label)?;

    let tables = scan_tables(tree, origin, opts);
    if tables.is_empty() {
        return Err(Error::NoTables {
            label: opts.section_label.clone(),
            tag: opts.table.tag.clone(),
            key: opts.table.key.clone(),
            value: opts.table.value.clone(),
        });
    }

    let mut lines = Vec::new();
    let mut cursor = opts.initial_date;
    for table in tables {
        if !opts.carry_date_across_tables {
            cursor = opts.initial_date;
        }
        let mut part = assemble(tree, table, &mut cursor, opts);
        tracing::debug!(table = table.index(), rows = part.len(), "table converted");
        lines.append(&mut part);
    }
    Ok(lines)
}

/// Parse raw report bytes and extract.
pub fn extract(bytes: &[u8], opts: &ExtractOptions) -> Result<Vec<String>> {
    let tree = DocumentTree::from_bytes(bytes);
    tracing::trace!(nodes = tree.len(), "document parsed");
    extract_tree(&tree, opts)
}

/// Read one report, write its lines next to it (or into the output dir).
pub fn convert_file(input: &Path, opts: &AppOptions) -> Result<(PathBuf, usize)> {
    let bytes = read_report(input)?;
    let lines = extract(&bytes, &opts.extract)?;
    let out = output_path(input, &opts.output);
    write_report_lines(&out, &lines)?;
    tracing::info!(input = %input.display(), out = %out.display(), rows = lines.len(), "converted");
    Ok((out, lines.len()))
}

/// Top-level runner. Stops at the first report that can't be converted.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    inputs: &[PathBuf],
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(inputs.len());
    }

    let mut summary = RunSummary::default();
    let result = inputs.iter().try_for_each(|input| {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Converting {}", input.display()));
        }
        let (out, rows) = convert_file(input, opts)?;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(input, &out, rows);
        }
        summary.rows_written += rows;
        summary.files_written.push(out);
        Ok::<_, Error>(())
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result.map(|()| summary)
}
