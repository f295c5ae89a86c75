//! dumpalign store - filesystem and version-control plumbing
//!
//! Provides:
//! - Lossy reads of working dump files and atomic write-back
//! - A git-backed baseline provider
//! - YAML configuration loading

pub mod config_file;
pub mod errors;
pub mod files;
pub mod git;

// Re-export key types
pub use config_file::load_config;
pub use errors::Result;
pub use git::GitBaselineProvider;
