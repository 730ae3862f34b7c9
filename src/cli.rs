// src/cli.rs
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::config::consts::{MAX_SIBLING_STEPS, OUTPUT_SUFFIX, SECTION_LABEL};
use crate::config::options::{AppOptions, DateEpoch};
use crate::csv::write_lines;
use crate::file::read_report;
use crate::progress::Progress;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EpochArg {
    /// Stamp rows with the marker's own date
    Zero,
    /// Reproduce the old converter (date shifted by one month and one day)
    Legacy,
}

impl From<EpochArg> for DateEpoch {
    fn from(e: EpochArg) -> Self {
        match e {
            EpochArg::Zero => DateEpoch::Zero,
            EpochArg::Legacy => DateEpoch::Legacy,
        }
    }
}

/// Convert meter reports (Windows-1251 HTML) into `;`-delimited readings.
#[derive(Parser, Debug)]
#[command(name = "meter_scrape", version)]
pub struct Args {
    /// Report files to convert
    #[arg(required = true, value_name = "REPORT")]
    pub inputs: Vec<PathBuf>,

    /// Decoded text of the section anchor (matched exactly, whitespace included)
    #[arg(long, default_value = SECTION_LABEL)]
    pub label: String,

    /// How marker dates are combined with row times
    #[arg(long, value_enum, default_value_t = EpochArg::Zero)]
    pub epoch: EpochArg,

    /// Keep the last marker date when moving to the next table
    #[arg(long)]
    pub carry_date: bool,

    /// Give up looking for the closing <h2> after this many siblings
    #[arg(long, default_value_t = MAX_SIBLING_STEPS)]
    pub max_siblings: usize,

    /// Appended to the input file name to form the output name
    #[arg(long, default_value = OUTPUT_SUFFIX)]
    pub suffix: String,

    /// Write outputs here instead of next to each input
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Print lines to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.extract.section_label = self.label.clone();
        opts.extract.set_epoch(self.epoch.into());
        opts.extract.carry_date_across_tables = self.carry_date;
        opts.extract.max_sibling_steps = self.max_siblings;
        opts.output.suffix = self.suffix.clone();
        opts.output.out_dir = self.out_dir.clone();
        opts
    }
}

/// Prints one line per converted report.
struct CliProgress;

impl Progress for CliProgress {
    fn item_done(&mut self, input: &Path, out: &Path, rows: usize) {
        println!("{} -> {} ({rows} rows)", input.display(), out.display());
    }
}

pub fn run(args: Args) -> crate::Result<()> {
    crate::log::init(args.verbose);
    let opts = args.to_options();

    if args.stdout {
        let stdout = io::stdout();
        for input in &args.inputs {
            let lines = crate::extract(&read_report(input)?, &opts.extract)?;
            write_lines(stdout.lock(), &lines).map_err(|source| crate::Error::Write {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
        }
        return Ok(());
    }

    let mut progress = CliProgress;
    let summary = crate::runner::run(&args.inputs, &opts, Some(&mut progress as &mut dyn Progress))?;
    tracing::info!(
        files = summary.files_written.len(),
        rows = summary.rows_written,
        "done"
    );
    Ok(())
}
