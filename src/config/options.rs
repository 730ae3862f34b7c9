// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::specs::rows::DateCursor;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub output: OutputOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            extract: ExtractOptions::default(),
            output: OutputOptions::default(),
        }
    }
}

/// Where the time-of-day sits before the cursor's year/month/day are added to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateEpoch {
    /// Year 0, month 0, day 0: the cursor's numbers come out unchanged.
    #[default]
    Zero,
    /// 0000-01-01, like the old converter: every stamp lands one month and one day
    /// after the reported date.
    Legacy,
}

impl DateEpoch {
    /// (year, month, day) the cursor offsets are added to.
    pub fn base(self) -> (i32, u32, u32) {
        match self {
            DateEpoch::Zero => (0, 0, 0),
            DateEpoch::Legacy => (0, 1, 1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableMatch {
    pub tag: String,
    pub key: String,
    pub value: String,
}

impl Default for TableMatch {
    fn default() -> Self {
        Self {
            tag: TABLE_TAG.to_string(),
            key: TABLE_ATTR_KEY.to_string(),
            value: TABLE_ATTR_VALUE.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Decoded anchor text that marks the section. Compared exactly.
    pub section_label: String,
    pub table: TableMatch,
    pub stop_tag: String,
    pub max_sibling_steps: usize,
    pub header_label: String,
    pub date_prefix: String,
    pub epoch: DateEpoch,
    pub initial_date: DateCursor,
    /// Keep the last seen date when moving on to the next table.
    pub carry_date_across_tables: bool,
    pub delim: char,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            section_label: SECTION_LABEL.to_string(),
            table: TableMatch::default(),
            stop_tag: STOP_TAG.to_string(),
            max_sibling_steps: MAX_SIBLING_STEPS,
            header_label: HEADER_LABEL.to_string(),
            date_prefix: DATE_PREFIX.to_string(),
            epoch: DateEpoch::Zero,
            initial_date: DateCursor::default(),
            carry_date_across_tables: false,
            delim: FIELD_DELIM,
        }
    }
}

impl ExtractOptions {
    /// Settings that reproduce the old converter's output byte for byte.
    pub fn legacy() -> Self {
        Self {
            epoch: DateEpoch::Legacy,
            initial_date: DateCursor::new(1, 1, 1),
            ..Self::default()
        }
    }

    pub fn set_epoch(&mut self, epoch: DateEpoch) {
        self.epoch = epoch;
        self.initial_date = match epoch {
            DateEpoch::Zero => DateCursor::default(),
            DateEpoch::Legacy => DateCursor::new(1, 1, 1),
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    /// Appended to the full input file name (`418.html` -> `418.html.csv`).
    pub suffix: String,
    /// Write next to the input when `None`.
    pub out_dir: Option<PathBuf>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            suffix: OUTPUT_SUFFIX.to_string(),
            out_dir: None,
        }
    }
}
