//! Git-backed baseline provider
//!
//! Baselines are read with `git show <revision>:./<file>` run from the
//! working file's own directory, so the file does not need to sit at the
//! repository root.

use crate::errors::{git_error, Result};
use crate::files::decode_discarding_invalid;
use dumpalign_core::baseline::BaselineProvider;
use dumpalign_core::config::DEFAULT_BASELINE_REVISION;
use dumpalign_core::core_types::schema::EVENT_SKIP;
use std::path::Path;
use std::process::{Command, Stdio};

/// Reads baselines from a git revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitBaselineProvider {
    revision: String,
}

impl GitBaselineProvider {
    pub fn new(revision: impl Into<String>) -> Self {
        Self {
            revision: revision.into(),
        }
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    /// Object spec naming `file_name` relative to the current directory
    fn object_spec(&self, file_name: &str) -> String {
        format!("{}:./{}", self.revision, file_name)
    }

    #[allow(clippy::result_large_err)]
    fn show(&self, path: &Path) -> Result<String> {
        let file_name = path
            .file_name()
            .ok_or_else(|| git_error(path, "path has no file name"))?;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let output = Command::new("git")
            .arg("show")
            .arg(self.object_spec(&file_name.to_string_lossy()))
            .current_dir(dir)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| git_error(path, format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            return Err(git_error(
                path,
                format!("git show exited with {}", output.status),
            ));
        }
        Ok(decode_discarding_invalid(&output.stdout))
    }
}

impl Default for GitBaselineProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASELINE_REVISION)
    }
}

impl BaselineProvider for GitBaselineProvider {
    fn fetch_baseline(&self, path: &Path) -> Option<String> {
        match self.show(path) {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => {
                tracing::debug!(
                    component = module_path!(),
                    op = "git_show",
                    event = EVENT_SKIP,
                    file = %path.display(),
                    "Empty baseline"
                );
                None
            }
            Err(err) => {
                tracing::debug!(
                    component = module_path!(),
                    op = "git_show",
                    event = EVENT_SKIP,
                    file = %path.display(),
                    err_code = err.code(),
                    "{}",
                    err
                );
                None
            }
        }
    }
}
