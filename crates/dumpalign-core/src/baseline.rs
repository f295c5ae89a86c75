//! Baseline provider trait and in-process implementations
//!
//! A baseline is the last-known-good text of a dump file. Providers return
//! `None` when no baseline exists; callers treat that as "leave the file
//! alone", never as an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Source of historical file contents
///
/// Implementations must swallow their own failures: a provider that cannot
/// reach its backing store returns `None`.
pub trait BaselineProvider {
    /// Fetch the baseline text for the working file at `path`
    fn fetch_baseline(&self, path: &Path) -> Option<String>;
}

impl<P: BaselineProvider + ?Sized> BaselineProvider for &P {
    fn fetch_baseline(&self, path: &Path) -> Option<String> {
        (**self).fetch_baseline(path)
    }
}

/// Provider with no history; every file is skipped
///
/// # Example
/// ```
/// use dumpalign_core::baseline::{BaselineProvider, NoBaseline};
/// use std::path::Path;
///
/// assert_eq!(NoBaseline.fetch_baseline(Path::new("any.txt")), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBaseline;

impl BaselineProvider for NoBaseline {
    fn fetch_baseline(&self, _path: &Path) -> Option<String> {
        None
    }
}

/// Provider serving baselines from an in-memory map keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemoryBaselines {
    texts: HashMap<PathBuf, String>,
}

impl MemoryBaselines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `text` as the baseline of `path`
    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.texts.insert(path.into(), text.into());
    }

    pub fn with(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }
}

impl BaselineProvider for MemoryBaselines {
    fn fetch_baseline(&self, path: &Path) -> Option<String> {
        self.texts.get(path).cloned()
    }
}
