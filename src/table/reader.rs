//! Spreadsheet loader.
//!
//! Reads the first worksheet of a workbook into a [`Table`]. The first
//! non-blank row becomes the header, every other row becomes data, and every
//! cell is rendered to text through [`cell_text`] so nothing downstream has
//! to care about numbers, dates or empty cells.
//!
//! Any format `calamine` can open by extension works (`.xlsx`, `.xlsm`,
//! `.xls`, `.xlsb`, `.ods`); which files are picked up is decided by the
//! collector's glob pattern, not here.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDateTime;

use super::Table;
use crate::error::{MergeError, Result};
use crate::transforms::DEFAULT_NA_VALUES;

const SECONDS_PER_DAY: f64 = 86_400.0;

impl Table {
    /// Load the first worksheet of the workbook at `path`, reading the
    /// default NA texts as missing values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened as a workbook or the
    /// worksheet cannot be decoded.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with(path, &DEFAULT_NA_VALUES)
    }

    /// Load the first worksheet, rendering cells whose whole text is one of
    /// `na_values` as empty strings.
    ///
    /// Columns are counted from column A even when the used area starts
    /// further right, so blank leading columns survive as `Unnamed: <i>`.
    /// Blank rows above the header are not part of the used area and are
    /// skipped. A workbook without worksheets, or with an empty first
    /// worksheet, loads as a table with no columns and no rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened as a workbook or the
    /// worksheet cannot be decoded.
    pub fn load_with<P, S>(path: P, na_values: &[S]) -> Result<Self>
    where
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        let mut workbook = open_workbook_auto(path).map_err(|source| MergeError::OpenWorkbook {
            path: path.to_path_buf(),
            source,
        })?;

        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range.map_err(|source| MergeError::ReadWorksheet {
                path: path.to_path_buf(),
                source,
            })?,
            None => return Ok(Table::default()),
        };

        let na: HashSet<&str> = na_values.iter().map(AsRef::as_ref).collect();
        let render = |cell: &Data| {
            let text = cell_text(cell);
            if na.contains(text.as_str()) {
                String::new()
            } else {
                text
            }
        };
        // Blank columns left of the used area
        let lead = range.start().map_or(0, |(_, col)| col as usize);
        let padded = |row: &[Data]| -> Vec<String> {
            std::iter::repeat(String::new())
                .take(lead)
                .chain(row.iter().map(render))
                .collect()
        };

        let mut rows: Vec<&[Data]> = range.rows().collect();
        trim_blank_tail(&mut rows);
        let mut rows = rows.into_iter();
        let header = match rows.next() {
            Some(header) => header,
            None => return Ok(Table::default()),
        };

        let mut table = Table::new(header_names(padded(header)));
        for row in rows {
            table.push_row(padded(row));
        }

        tracing::debug!(
            path = %path.display(),
            columns = table.width(),
            rows = table.len(),
            "loaded worksheet"
        );
        Ok(table)
    }
}

/// Render one spreadsheet cell as text. Empty cells render as `""`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => float_text(*f),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(dt) => {
            if dt.is_duration() {
                duration_text(dt.as_f64() * SECONDS_PER_DAY)
            } else if dt.as_f64() < 1.0 && dt.as_f64() >= 0.0 {
                // Time-of-day only: no date part in the serial
                clock_text((dt.as_f64() * SECONDS_PER_DAY).round() as i64)
            } else {
                match dt.as_datetime() {
                    Some(naive) => datetime_text(&naive),
                    None => float_text(dt.as_f64()),
                }
            }
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// Render a float, dropping the fraction when it is integral.
pub fn float_text(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Render a calendar timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn datetime_text(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Render a duration in seconds as `<d> days HH:MM:SS`.
pub fn duration_text(seconds: f64) -> String {
    let total = seconds.round() as i64;
    let days = total.div_euclid(86_400);
    let rest = total.rem_euclid(86_400);
    format!("{} days {}", days, clock_text(rest))
}

fn clock_text(seconds: i64) -> String {
    let seconds = seconds.rem_euclid(86_400);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Build unique column names from the rendered header row.
///
/// Blank names become `Unnamed: <index>`. A repeated name gets the first
/// `.<n>` suffix that is not already taken by another column.
pub fn header_names<I>(header: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut used: HashSet<String> = HashSet::new();
    let mut next_suffix: HashMap<String, usize> = HashMap::new();

    header
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| {
            let base = if raw.trim().is_empty() {
                format!("Unnamed: {}", idx)
            } else {
                raw
            };

            let mut name = base.clone();
            if used.contains(&name) {
                let n = next_suffix.entry(base.clone()).or_insert(1);
                while used.contains(&name) {
                    name = format!("{}.{}", base, n);
                    *n += 1;
                }
            }
            used.insert(name.clone());
            name
        })
        .collect()
}

/// Drop trailing rows where every cell is blank in the sheet itself.
///
/// Text that only renders as empty (NA values) does not count as blank.
fn trim_blank_tail(rows: &mut Vec<&[Data]>) {
    while rows.last().is_some_and(|row| row.iter().all(is_blank)) {
        rows.pop();
    }
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}
