//! Placeholder clearing.
//!
//! Values such as `nan` or `None` are what a text rendering of a missing
//! value looks like. They are blanked when they make up the whole cell, so
//! later steps only ever see real text or an empty string.

use std::collections::HashSet;

use crate::table::{Table, Transform};

/// Placeholder tokens cleared by default.
pub const DEFAULT_PLACEHOLDER_TOKENS: [&str; 4] = ["nan", "NaT", "NaN", "None"];

/// Whole-cell texts read as missing values when a workbook is loaded.
///
/// This is the usual spreadsheet-reader NA set. Matching cells, headers
/// included, load as empty strings.
pub const DEFAULT_NA_VALUES: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Replaces cells equal to a placeholder token with an empty string.
///
/// Matching is exact and case-sensitive: `"nan"` is cleared, `"Nan"` and
/// `"banana"` are not.
pub struct ClearPlaceholders {
    tokens: HashSet<String>,
    cleared: usize,
}

impl ClearPlaceholders {
    /// Create a clearer for the given token set.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            cleared: 0,
        }
    }

    /// Number of cells cleared so far.
    pub fn cleared_count(&self) -> usize {
        self.cleared
    }
}

impl Default for ClearPlaceholders {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_TOKENS)
    }
}

impl Transform for ClearPlaceholders {
    fn transform(&mut self, table: &mut Table) {
        let tokens = &self.tokens;
        self.cleared += table.map_cells(|cell| tokens.contains(cell).then(String::new));
    }
}
