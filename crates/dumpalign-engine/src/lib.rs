//! dumpalign engine - orchestration layer
//!
//! Coordinates the pure alignment logic in dumpalign-core with the file
//! and git plumbing in dumpalign-store.

pub mod commands;

pub use commands::align::{
    align_all, align_all_with, align_file, AlignOptions, FileOutcome, RunSummary,
};
