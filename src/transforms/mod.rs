//! Individual normalization transforms.
//!
//! These transforms implement the [`crate::table::Transform`] trait and are
//! composed into the per-file pipeline by [`crate::pipeline`].
//!
//! - [`ClearPlaceholders`] - Blanks `nan`/`NaT`/`NaN`/`None` cells
//! - [`RepairMojibake`] - Undoes UTF-8 text misread as Latin-1
//! - [`CollapseLineBreaks`] - Folds multi-line cells onto one line
//! - [`TrimTrailer`] - Drops the fixed summary rows at the end of a file
//! - [`ExtractTime`] - Reduces duration text to its `HH:MM:SS` part

mod mojibake;
mod placeholder;
mod time;
mod trailer;
mod whitespace;

pub use mojibake::{repair as repair_mojibake, RepairMojibake, MOJIBAKE_TRIGGERS};
pub use placeholder::{ClearPlaceholders, DEFAULT_NA_VALUES, DEFAULT_PLACEHOLDER_TOKENS};
pub use time::{extract as extract_time, ExtractTime};
pub use trailer::{TrimTrailer, DEFAULT_TRAILER_ROWS};
pub use whitespace::{collapse as collapse_line_breaks, CollapseLineBreaks};
