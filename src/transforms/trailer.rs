//! Trailer row trimming.
//!
//! Exported reports end with a fixed number of summary rows (totals,
//! generation timestamp, and so on). They are dropped by position: there is
//! nothing in their content that reliably tells them apart from data.

use crate::table::{Table, Transform};

/// Trailer rows dropped by default.
pub const DEFAULT_TRAILER_ROWS: usize = 3;

/// Drops the last `count` rows when the table has at least that many.
///
/// A table shorter than `count` is left untouched rather than emptied.
pub struct TrimTrailer {
    count: usize,
}

impl TrimTrailer {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Default for TrimTrailer {
    fn default() -> Self {
        Self::new(DEFAULT_TRAILER_ROWS)
    }
}

impl Transform for TrimTrailer {
    fn transform(&mut self, table: &mut Table) {
        let len = table.rows.len();
        if len >= self.count {
            table.rows.truncate(len - self.count);
        }
    }
}
