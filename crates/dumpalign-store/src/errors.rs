//! Error handling for dumpalign-store
//!
//! Wraps dumpalign-core ExError with store-specific helpers

use dumpalign_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a version-control failure
pub fn git_error(path: &Path, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::ExternalService)
        .with_op("git_show")
        .with_path(path)
        .with_message(reason)
}
