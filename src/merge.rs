//! Concatenation and de-duplication of normalized tables.
//!
//! Tables are appended in discovery order. The merged column set is the
//! union of all columns in first-seen order; a table missing some of them
//! gets empty cells there. Files are expected to share one schema, so a
//! differing column set is logged as a warning rather than silently
//! reconciled.

use std::collections::HashSet;

use crate::table::Table;

/// Counts reported after a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Tables appended.
    pub tables: usize,
    /// Rows before de-duplication.
    pub rows_in: usize,
    /// Duplicate rows dropped.
    pub duplicates: usize,
}

impl MergeStats {
    /// Rows left after de-duplication.
    pub fn rows_out(&self) -> usize {
        self.rows_in - self.duplicates
    }
}

/// Accumulates tables and produces one de-duplicated table.
#[derive(Debug, Default)]
pub struct Merger {
    tables: Vec<Table>,
}

impl Merger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table. Its rows follow every row pushed before.
    pub fn push(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Number of tables pushed so far.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Concatenate every table and drop duplicate rows.
    pub fn finish(self) -> (Table, MergeStats) {
        let columns = union_columns(&self.tables);
        let mut merged = Table::new(columns.iter().cloned());
        let mut stats = MergeStats {
            tables: self.tables.len(),
            ..MergeStats::default()
        };

        for table in self.tables {
            if table.columns != columns {
                tracing::warn!(
                    expected = ?columns,
                    found = ?table.columns,
                    "column set differs between input files; missing cells are left empty"
                );
            }
            let mapping: Vec<Option<usize>> = columns
                .iter()
                .map(|name| table.column_index(name))
                .collect();

            for row in table.rows {
                let aligned = mapping
                    .iter()
                    .map(|idx| idx.and_then(|i| row.get(i).cloned()).unwrap_or_default())
                    .collect();
                merged.rows.push(aligned);
            }
        }

        stats.rows_in = merged.len();
        stats.duplicates = dedup_rows(&mut merged);
        (merged, stats)
    }
}

/// Union of column names, in first-seen order.
fn union_columns(tables: &[Table]) -> Vec<String> {
    let mut seen = HashSet::new();
    tables
        .iter()
        .flat_map(|t| t.columns.iter())
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

/// Drop rows equal to an earlier row, keeping order. Returns the number dropped.
pub fn dedup_rows(table: &mut Table) -> usize {
    let before = table.rows.len();
    let mut seen: HashSet<Vec<String>> = HashSet::with_capacity(before);
    table.rows.retain(|row| seen.insert(row.clone()));
    before - table.rows.len()
}
