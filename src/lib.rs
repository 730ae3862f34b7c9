// src/lib.rs

pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod progress;
pub mod record;
pub mod runner;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use error::{Error, MalformedRow, Result};
pub use runner::{extract, extract_tree};
