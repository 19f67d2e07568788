//! Type definitions for the in-memory tabular model.
//!
//! A [`Table`] is a header row plus an ordered list of data rows. Every cell
//! is text: the loader renders numbers, dates and empties to strings before a
//! table is ever handed to the normalization pipeline, so transforms only
//! ever deal with `String`s.

/// An ordered, all-text table with a fixed column set.
///
/// Invariant: every row holds exactly `columns.len()` cells. Constructors and
/// [`Table::push_row`] pad or truncate rows to keep it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names in file order.
    pub columns: Vec<String>,
    /// Data rows, one `String` per column.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Create a table from columns and rows, fitting each row to the width.
    pub fn with_rows<I, S>(columns: I, rows: Vec<Vec<String>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    /// Append a row, padding with empty cells or truncating to the width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate over every cell mutably, row by row.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.rows.iter_mut().flat_map(|row| row.iter_mut())
    }

    /// Replace every cell with `f(cell)` when `f` returns `Some`.
    ///
    /// Returns the number of cells that changed.
    pub fn map_cells<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut changed = 0;
        for cell in self.cells_mut() {
            if let Some(new_value) = f(cell) {
                if *cell != new_value {
                    *cell = new_value;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Cells of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(move |row| row.get(index).map(String::as_str))
    }
}
