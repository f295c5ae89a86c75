use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using the canonical structured error
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, log filtering and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
    ExternalService,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context (operation, file path)
/// and a human-readable message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<PathBuf>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " {}", op)?;
        }
        if let Some(path) = &self.path {
            write!(f, " ({})", path.display())?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

// ========== Domain Errors ==========

/// Domain failures raised while configuring or persisting an alignment run
#[derive(Debug, Error)]
pub enum DumpAlignError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Failed to read working file {path}: {source}")]
    WorkingFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write aligned file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<DumpAlignError> for ExError {
    fn from(err: DumpAlignError) -> Self {
        let message = err.to_string();
        match err {
            DumpAlignError::ConfigRead { path, .. } => ExError::new(ExErrorKind::Io)
                .with_op("load_config")
                .with_path(path)
                .with_message(message),

            DumpAlignError::ConfigParse { path, .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("load_config")
                .with_path(path)
                .with_message(message),

            DumpAlignError::InvalidConfig { .. } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("validate_config")
                .with_message(message),

            DumpAlignError::WorkingFileRead { path, .. } => ExError::new(ExErrorKind::Io)
                .with_op("read_working_file")
                .with_path(path)
                .with_message(message),

            DumpAlignError::WriteFailed { path, .. } => ExError::new(ExErrorKind::Io)
                .with_op("write_aligned_file")
                .with_path(path)
                .with_message(message),

            DumpAlignError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<std::io::Error> for ExError {
    fn from(err: std::io::Error) -> Self {
        ExError::new(ExErrorKind::Io).with_message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_stable() {
        assert_eq!(ExErrorKind::InvalidConfig.code(), "ERR_INVALID_CONFIG");
        assert_eq!(ExErrorKind::Io.code(), "ERR_IO");
        assert_eq!(ExErrorKind::Serialization.code(), "ERR_SERIALIZATION");
        assert_eq!(ExErrorKind::ExternalService.code(), "ERR_EXTERNAL_SERVICE");
        assert_eq!(ExErrorKind::Internal.code(), "ERR_INTERNAL");
    }

    #[test]
    fn test_write_failure_maps_to_io_with_path() {
        let err = DumpAlignError::WriteFailed {
            path: PathBuf::from("dump/lfs.dll.exports.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::Io);
        assert_eq!(ex.op(), Some("write_aligned_file"));
        assert_eq!(ex.path(), Some(Path::new("dump/lfs.dll.exports.txt")));
        assert!(ex.message().contains("denied"));
    }

    #[test]
    fn test_invalid_config_maps_to_invalid_config_kind() {
        let ex: ExError = DumpAlignError::InvalidConfig {
            reason: "empty filename".to_string(),
        }
        .into();
        assert_eq!(ex.code(), "ERR_INVALID_CONFIG");
    }

    #[test]
    fn test_display_includes_code_op_and_path() {
        let ex = ExError::new(ExErrorKind::Io)
            .with_op("read_working_file")
            .with_path("a/b.txt")
            .with_message("boom");
        assert_eq!(ex.to_string(), "[ERR_IO] read_working_file (a/b.txt): boom");
    }

    #[test]
    fn test_source_chain() {
        let inner = ExError::new(ExErrorKind::ExternalService).with_message("git failed");
        let outer = ExError::new(ExErrorKind::Internal).with_source(inner);
        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(ExErrorKind::ExternalService)
        );
        assert!(std::error::Error::source(&outer).is_some());
    }
}
