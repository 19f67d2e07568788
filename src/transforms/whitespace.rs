//! Line-break collapsing.
//!
//! Spreadsheet cells often carry manual line breaks (Alt+Enter). In a CSV
//! those become embedded newlines, which trip up line-oriented consumers.
//! This transform folds every line break, together with the whitespace
//! around it, into a single space and trims the cell.

use std::sync::OnceLock;

use regex::Regex;

use crate::table::{Table, Transform};

fn line_break_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*[\r\n]+\s*").expect("line break pattern is valid"))
}

/// Collapses whitespace runs containing a line break, then trims.
///
/// - `"Line1\n  Line2"` becomes `"Line1 Line2"`
/// - `"a \r\n\r\n b"` becomes `"a b"`
/// - `"  padded  "` becomes `"padded"` (trim only)
/// - inner runs of plain spaces are left as they are
#[derive(Default)]
pub struct CollapseLineBreaks;

impl Transform for CollapseLineBreaks {
    fn transform(&mut self, table: &mut Table) {
        table.map_cells(|cell| Some(collapse(cell)));
    }
}

/// Collapse line-break runs in one value and trim it.
pub fn collapse(value: &str) -> String {
    line_break_run().replace_all(value, " ").trim().to_string()
}
