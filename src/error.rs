// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that make a whole report unusable.
#[derive(Error, Debug)]
pub enum Error {
    #[error("section anchor <a name=…>{label:?}</a> not found")]
    SectionNotFound { label: String },

    #[error("no <{tag} {key}=\"{value}\"> found after section {label:?}")]
    NoTables {
        label: String,
        tag: String,
        key: String,
        value: String,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// A table row that can't be turned into anything. Skipped, never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedRow {
    #[error("row has no cells")]
    Empty,

    #[error("data row has {found} cells, need {expected}")]
    TooFewCells { found: usize, expected: usize },

    #[error("date marker {0:?} has nothing after ':'")]
    MissingDate(String),

    #[error("bad date {0:?} (want dd.mm.yyyy)")]
    BadDate(String),

    #[error("bad time {0:?} (want HH:MM)")]
    BadTime(String),

    #[error("date {0} is out of range")]
    DateOutOfRange(String),
}
