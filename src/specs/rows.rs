// src/specs/rows.rs
//! Row classification for the readings tables.
//!
//! Each `<tr>` is one of:
//! - a title row (`Время | кВт·ч … `): skipped;
//! - a date marker (`Дата: 15.03.2024`): moves the [`DateCursor`];
//! - a reading (`09:30 | 12,5 | 0,0 | 3,1 | 0,2`): stamped with the cursor's date.
//!
//! Readings carry only a time of day. The date comes from the last marker seen, applied as
//! year/month/day *offsets* onto an epoch (see [`DateEpoch`]) rather than built as a calendar
//! date. With the default epoch the two agree; the legacy epoch reproduces the old
//! converter's one-month-one-day shift.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::config::consts::{DATE_SPLIT, MIN_DATA_CELLS};
use crate::config::options::{DateEpoch, ExtractOptions};
use crate::core::html::{find_first_from, inner_text, is_any_tag};
use crate::core::tree::{DocumentTree, NodeId};
use crate::error::MalformedRow;
use crate::record::Record;

const CELL_TAGS: &[&str] = &["th", "td"];

/// Running "current date" for one pipeline run. Plain numbers, not a validated date:
/// the zero cursor is a legal starting point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DateCursor {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateCursor {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Add this cursor's fields onto `epoch` and put `time` on the result.
    ///
    /// Month overflow carries into the year and day overflow walks forward through the
    /// calendar, the way `AddDate` style arithmetic does. Month 0 and day 0 therefore mean
    /// "the one before" (December of the previous year, last day of the previous month).
    pub fn stamp(&self, time: NaiveTime, epoch: DateEpoch) -> Result<NaiveDateTime, MalformedRow> {
        let (base_y, base_m, base_d) = epoch.base();
        let out_of_range = || MalformedRow::DateOutOfRange(format!("{:?} + {:?}", self, epoch));

        let months = i64::from(base_y + self.year) * 12 + i64::from(base_m + self.month) - 1;
        let year = i32::try_from(months.div_euclid(12)).map_err(|_| out_of_range())?;
        let month = months.rem_euclid(12) as u32 + 1;
        let days = i64::from(base_d + self.day) - 1;

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
        let date = TimeDelta::try_days(days)
            .and_then(|d| first.checked_add_signed(d))
            .ok_or_else(out_of_range)?;
        Ok(date.and_time(time))
    }
}

impl From<NaiveDate> for DateCursor {
    fn from(d: NaiveDate) -> Self {
        Self::new(d.year(), d.month(), d.day())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowKind {
    Header,
    DateMarker(DateCursor),
    Data(Record),
}

/// Decoded text of each `th`/`td` in the row, in order. A cell may sit directly under the
/// `tr` or one level down.
pub fn row_cells(tree: &DocumentTree, row: NodeId) -> Vec<String> {
    let is_cell = is_any_tag(CELL_TAGS);
    tree.children(row)
        .filter_map(|child| find_first_from(tree, child, &is_cell))
        .map(|cell| inner_text(tree, cell))
        .collect()
}

pub fn classify_row(
    tree: &DocumentTree,
    row: NodeId,
    cursor: &DateCursor,
    opts: &ExtractOptions,
) -> Result<RowKind, MalformedRow> {
    classify_cells(&row_cells(tree, row), cursor, opts)
}

pub fn classify_cells(
    cells: &[String],
    cursor: &DateCursor,
    opts: &ExtractOptions,
) -> Result<RowKind, MalformedRow> {
    let first = cells.first().ok_or(MalformedRow::Empty)?;

    if *first == opts.header_label {
        return Ok(RowKind::Header);
    }

    if first.contains(opts.date_prefix.as_str()) {
        let date = first
            .split(DATE_SPLIT)
            .nth(1)
            .ok_or_else(|| MalformedRow::MissingDate(first.clone()))?;
        return parse_date(date.trim()).map(|d| RowKind::DateMarker(d.into()));
    }

    let time = parse_time(first.trim())?;
    if cells.len() < MIN_DATA_CELLS {
        return Err(MalformedRow::TooFewCells { found: cells.len(), expected: MIN_DATA_CELLS });
    }
    let timestamp = cursor.stamp(time, opts.epoch)?;

    Ok(RowKind::Data(Record {
        timestamp,
        kwh_delivered: cells[1].clone(),
        kwh_received: cells[2].clone(),
        kvarh_delivered: cells[3].clone(),
        kvarh_received: cells[4].clone(),
    }))
}

/// Strict `dd.mm.yyyy`: two-digit day and month, four-digit year.
fn parse_date(s: &str) -> Result<NaiveDate, MalformedRow> {
    let bad = || MalformedRow::BadDate(s.to_string());
    let b = s.as_bytes();
    let shape_ok = b.len() == 10
        && b[2] == b'.'
        && b[5] == b'.'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 2 || i == 5 || c.is_ascii_digit());
    if !shape_ok {
        return Err(bad());
    }
    NaiveDate::parse_from_str(s, "%d.%m.%Y").map_err(|_| bad())
}

fn parse_time(s: &str) -> Result<NaiveTime, MalformedRow> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| MalformedRow::BadTime(s.to_string()))
}
