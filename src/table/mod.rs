//! In-memory tables, their loader, writer and transform pipeline.
//!
//! # Structure
//!
//! - `types` - The [`Table`] model
//! - `reader` - Loading the first worksheet of a workbook as text
//! - `writer` - Writing a table as BOM-prefixed delimited text
//! - `transform` - The [`Transform`] trait and [`TransformChain`]

pub mod reader;
pub mod transform;
mod types;
pub mod writer;

pub use reader::cell_text;
pub use transform::{Transform, TransformChain};
pub use types::Table;
pub use writer::{CsvOptions, UTF8_BOM};
