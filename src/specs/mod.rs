// src/specs/mod.rs
//! # Report "specs" module
//!
//! Everything that knows *where the readings live* in the report HTML and how to read
//! them. The report is a long document of titled blocks; ours starts at a named anchor
//! and runs until the next `<h2>`.
//!
//! ## Typical call chain
//! ```text
//! runner::extract → section::locate_section   (anchor → its parent)
//!                 → tables::scan_tables        (parent's later siblings, up to <h2>)
//!                 → record::assemble           (per table, rows via rows::classify_row)
//! ```
//!
//! ## Conventions & invariants
//! - Text is compared **after** Windows-1251 decoding and **without** trimming.
//! - Attributes are looked up by key; their order in the markup never matters.
//! - "Not found" inside a spec is `None`/empty; only the runner turns a missing section or
//!   an empty table list into an error.
//! - Malformed rows are skipped, never fatal.
pub mod rows;
pub mod section;
pub mod tables;
