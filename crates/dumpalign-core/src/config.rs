//! Alignment run configuration

use crate::errors::{DumpAlignError, ExError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the dumps when nothing else is configured
pub const DEFAULT_DUMP_DIRECTORY: &str = "cmake-dump-release-x64";

/// Files processed when nothing else is configured, in processing order
pub const DEFAULT_TARGET_FILENAMES: &[&str] = &[
    "lfs.dll.dependents.txt",
    "lfs.dll.exports.txt",
    "lfs.dll.headers.txt",
    "lfs.dll.imports.txt",
    "lfs.dll.ldd.txt",
];

/// Revision the git provider reads baselines from
pub const DEFAULT_BASELINE_REVISION: &str = "HEAD";

/// Where the dumps live and which of them to realign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlignConfig {
    pub dump_directory: PathBuf,
    pub target_filenames: Vec<String>,
    pub baseline_revision: String,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            dump_directory: PathBuf::from(DEFAULT_DUMP_DIRECTORY),
            target_filenames: DEFAULT_TARGET_FILENAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            baseline_revision: DEFAULT_BASELINE_REVISION.to_string(),
        }
    }
}

impl AlignConfig {
    /// Paths of all target files, in configured order
    pub fn target_paths(&self) -> Vec<PathBuf> {
        self.target_filenames
            .iter()
            .map(|name| self.dump_directory.join(name))
            .collect()
    }

    /// Reject filenames that are empty or would escape the dump directory.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::InvalidConfig` naming the first bad entry.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<(), ExError> {
        if self.baseline_revision.trim().is_empty() {
            return Err(invalid("baseline_revision must not be empty"));
        }
        for name in &self.target_filenames {
            if name.trim().is_empty() {
                return Err(invalid("target_filenames contains an empty entry"));
            }
            let mut components = Path::new(name).components();
            let plain = matches!(
                (components.next(), components.next()),
                (Some(std::path::Component::Normal(_)), None)
            );
            if !plain || name.contains('\\') {
                return Err(invalid(&format!(
                    "target filename `{}` must be a bare file name",
                    name
                )));
            }
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> ExError {
    DumpAlignError::InvalidConfig {
        reason: reason.to_string(),
    }
    .into()
}
