// src/file.rs

use std::{
    ffi::OsString,
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::config::options::OutputOptions;
use crate::csv::write_lines;
use crate::error::{Error, Result};

pub fn read_report(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::Read { path: path.to_path_buf(), source })
}

/// `<dir>/<input file name><suffix>`: the suffix is appended, not swapped in
/// (`418.html` -> `418.html.csv`). `dir` is the input's own directory unless overridden.
pub fn output_path(input: &Path, opts: &OutputOptions) -> PathBuf {
    let mut name: OsString = input.file_name().map(OsString::from).unwrap_or_default();
    name.push(&opts.suffix);

    match &opts.out_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Create/truncate `path` and write `lines`. Parent directories are created as needed.
pub fn write_report_lines(path: &Path, lines: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let write_err = |source| Error::Write { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(write_err)?;
    write_lines(BufWriter::new(file), lines).map_err(write_err)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| Error::Write { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
