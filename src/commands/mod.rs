//! Command handlers for the sheetmerge CLI.
//!
//! Argument parsing stays in main.rs; handlers load config and call into the library.

pub mod combine;
