//! Time-of-day extraction.
//!
//! Durations exported as `0 days 01:23:45` (or embedded in longer text) are
//! reduced to the bare `H:MM:SS` / `HH:MM:SS` part. The pattern is specific
//! enough that it is applied to every column.

use std::sync::OnceLock;

use regex::Regex;

use crate::table::{Table, Transform};

fn clock_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{1,2}:\d{2}:\d{2}").expect("clock pattern is valid"))
}

/// Replaces a cell with the first `H:MM:SS` match inside it.
///
/// Cells without a match keep their value.
#[derive(Default)]
pub struct ExtractTime {
    extracted: usize,
}

impl ExtractTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells rewritten so far.
    pub fn extracted_count(&self) -> usize {
        self.extracted
    }
}

impl Transform for ExtractTime {
    fn transform(&mut self, table: &mut Table) {
        self.extracted += table.map_cells(|cell| extract(cell).map(str::to_string));
    }
}

/// First clock-like substring of `value`, if any.
pub fn extract(value: &str) -> Option<&str> {
    clock_pattern().find(value).map(|m| m.as_str())
}
