//! Command orchestration layer.
//!
//! Provides high-level command functions that coordinate between
//! core alignment logic and the filesystem.

pub mod align;
