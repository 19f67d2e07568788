//! The per-file normalization pipeline.
//!
//! Every loaded table goes through the same five steps, always in this
//! order:
//!
//! 1. [`ClearPlaceholders`]
//! 2. [`RepairMojibake`]
//! 3. [`CollapseLineBreaks`]
//! 4. [`TrimTrailer`]
//! 5. [`ExtractTime`]
//!
//! Trailer trimming runs before time extraction so the positional cut is
//! made on the rows exactly as they came out of the file.

use crate::config::PipelineConfig;
use crate::table::{Table, Transform, TransformChain};
use crate::transforms::{
    ClearPlaceholders, CollapseLineBreaks, ExtractTime, RepairMojibake, TrimTrailer,
};

/// Build the normalization chain for the given settings.
pub fn build(config: &PipelineConfig) -> TransformChain {
    TransformChain::new()
        .with(ClearPlaceholders::new(config.placeholder_tokens.iter().cloned()))
        .with(RepairMojibake::new())
        .with(CollapseLineBreaks)
        .with(TrimTrailer::new(config.trailer_rows))
        .with(ExtractTime::new())
}

/// Run the full normalization chain over one table.
pub fn normalize(table: &mut Table, config: &PipelineConfig) {
    build(config).transform(table);
}
