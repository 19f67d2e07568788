//! Table transformation pipeline.
//!
//! This module provides the [`Transform`] trait and [`TransformChain`] for
//! applying in-place modifications to a loaded [`Table`]. Each normalization
//! step (placeholder clearing, mojibake repair, line-break collapsing,
//! trailer trimming, time extraction) is one transform; the chain runs them
//! in the order they were added.
//!
//! # Example
//!
//! ```
//! use sheetmerge::table::{Table, Transform, TransformChain};
//!
//! /// Upper-cases every cell.
//! struct Shout;
//!
//! impl Transform for Shout {
//!     fn transform(&mut self, table: &mut Table) {
//!         table.map_cells(|cell| Some(cell.to_uppercase()));
//!     }
//! }
//!
//! /// Keeps only the first `n` rows.
//! struct Head(usize);
//!
//! impl Transform for Head {
//!     fn transform(&mut self, table: &mut Table) {
//!         table.rows.truncate(self.0);
//!     }
//! }
//!
//! let mut chain = TransformChain::new().with(Shout).with(Head(1));
//!
//! let mut table = Table::with_rows(
//!     ["name"],
//!     vec![vec!["alice".to_string()], vec!["bob".to_string()]],
//! );
//! chain.transform(&mut table);
//!
//! assert_eq!(table.rows, vec![vec!["ALICE".to_string()]]);
//! ```

use super::Table;

/// A transformation that modifies a table in place.
///
/// Transforms are infallible: a step that cannot apply to a cell (for
/// example a failed encoding repair) leaves that cell as it was and moves
/// on. Only loading and writing can fail.
pub trait Transform {
    /// Short name used in debug logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
            .rsplit("::")
            .next()
            .unwrap_or("transform")
    }

    /// Apply this transformation to the table.
    fn transform(&mut self, table: &mut Table);
}

/// A chain of transforms applied in sequence.
///
/// Each transform sees the result of the previous ones.
pub struct TransformChain {
    transforms: Vec<Box<dyn Transform>>,
}

impl TransformChain {
    /// Create an empty transform chain.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the end of the chain.
    pub fn with<T: Transform + 'static>(mut self, transform: T) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Check if the chain has no transforms.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Get the number of transforms in the chain.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Names of the transforms, in application order.
    pub fn names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }
}

impl Default for TransformChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for TransformChain {
    fn name(&self) -> &'static str {
        "TransformChain"
    }

    fn transform(&mut self, table: &mut Table) {
        for transform in &mut self.transforms {
            let rows_before = table.len();
            transform.transform(table);
            tracing::debug!(
                step = transform.name(),
                rows_before,
                rows_after = table.len(),
                "applied transform"
            );
        }
    }
}
