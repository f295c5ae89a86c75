//! Working-copy file access
//!
//! Provides:
//! - Reads that discard undecodable bytes instead of failing
//! - Atomic write-back using a temp file and rename

mod atomic;
mod working;

pub use atomic::atomic_write;
pub use working::{decode_discarding_invalid, read_working_file, write_aligned_file, WorkingCopy};
