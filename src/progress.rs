// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting for multi-file runs.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of input files.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One input converted; `rows` lines were written to `out`.
    fn item_done(&mut self, _input: &Path, _out: &Path, _rows: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
