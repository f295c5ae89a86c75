//! Per-file and per-run alignment orchestration.
//!
//! ## Pipeline (per file)
//! 1. Read the working copy (missing file: skip silently)
//! 2. Fetch the baseline (none: skip, file untouched)
//! 3. Realign the working text against the baseline
//! 4. Write back unless dry-run or the bytes are unchanged
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for each file:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use `tracing::debug!()` for internal details
//! and `tracing::warn!()` for alignment anomalies.

#![allow(clippy::result_large_err)]

use dumpalign_core::align::{align_texts, AlignmentReport};
use dumpalign_core::baseline::BaselineProvider;
use dumpalign_core::config::AlignConfig;
use dumpalign_core::core_types::schema::EVENT_SKIP;
use dumpalign_core::{log_op_end, log_op_error, log_op_start};
use dumpalign_store::errors::Result;
use dumpalign_store::files::{read_working_file, write_aligned_file};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Options for an alignment run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignOptions {
    /// Compute alignments but never write.
    pub dry_run: bool,
}

/// What happened to a single target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The working file does not exist.
    Missing,
    /// The provider has no baseline; the file was left untouched.
    NoBaseline,
    /// The file was realigned.
    Aligned {
        /// Output differs from the bytes that were on disk.
        changed: bool,
        report: AlignmentReport,
    },
}

impl FileOutcome {
    fn label(&self) -> &'static str {
        match self {
            FileOutcome::Missing => "missing",
            FileOutcome::NoBaseline => "no_baseline",
            FileOutcome::Aligned { changed: true, .. } => "changed",
            FileOutcome::Aligned { changed: false, .. } => "unchanged",
        }
    }
}

/// Outcomes of a run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files: Vec<(PathBuf, FileOutcome)>,
}

impl RunSummary {
    pub fn aligned(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Aligned { .. }))
    }

    pub fn changed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Aligned { changed: true, .. }))
    }

    pub fn without_baseline(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::NoBaseline))
    }

    pub fn missing(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Missing))
    }

    /// Total alignment warnings across all files.
    pub fn warnings(&self) -> usize {
        self.files
            .iter()
            .map(|(_, outcome)| match outcome {
                FileOutcome::Aligned { report, .. } => {
                    report.duplicates.len() + report.baseline_collisions.len() + report.overlaps
                }
                _ => 0,
            })
            .sum()
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Realign one working file against its baseline.
///
/// ## Errors
///
/// - `Io`: the file exists but cannot be read, or cannot be written back
pub fn align_file(
    path: &Path,
    provider: &dyn BaselineProvider,
    options: AlignOptions,
) -> Result<FileOutcome> {
    log_op_start!("align_file", file = %path.display());
    let start = Instant::now();

    let outcome = align_file_impl(path, provider, options).map_err(|e| {
        log_op_error!(
            "align_file",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            file = %path.display()
        );
        e
    })?;

    log_op_end!(
        "align_file",
        duration_ms = start.elapsed().as_millis() as u64,
        file = %path.display(),
        outcome = outcome.label()
    );

    Ok(outcome)
}

fn align_file_impl(
    path: &Path,
    provider: &dyn BaselineProvider,
    options: AlignOptions,
) -> Result<FileOutcome> {
    let Some(working) = read_working_file(path)? else {
        tracing::debug!(
            component = module_path!(),
            op = "align_file",
            event = EVENT_SKIP,
            file = %path.display(),
            "Working file missing"
        );
        return Ok(FileOutcome::Missing);
    };

    let Some(baseline) = provider.fetch_baseline(path) else {
        tracing::info!(
            component = module_path!(),
            op = "align_file",
            event = EVENT_SKIP,
            file = %path.display(),
            "No baseline"
        );
        return Ok(FileOutcome::NoBaseline);
    };

    let label = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let aligned = align_texts(&baseline, &working.text, &label);
    let changed = !working.matches(&aligned.text);

    if changed && !options.dry_run {
        write_aligned_file(path, &aligned.text)?;
    }

    Ok(FileOutcome::Aligned {
        changed,
        report: aligned.report,
    })
}

/// Realign every configured target file.
///
/// Equivalent to [`align_all_with`] without a progress callback.
///
/// ## Errors
///
/// - `Io`: the first file that cannot be read or written stops the run
pub fn align_all(
    config: &AlignConfig,
    provider: &dyn BaselineProvider,
    options: AlignOptions,
) -> Result<RunSummary> {
    align_all_with(config, provider, options, |_, _| {})
}

/// Realign every configured target file, calling `on_file` after each one.
///
/// Files are processed in configured order. A missing file or missing
/// baseline does not stop the run; the first I/O error does.
///
/// ## Errors
///
/// - `Io`: as for [`align_file`]
pub fn align_all_with(
    config: &AlignConfig,
    provider: &dyn BaselineProvider,
    options: AlignOptions,
    mut on_file: impl FnMut(&Path, &FileOutcome),
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    for path in config.target_paths() {
        let outcome = align_file(&path, provider, options)?;
        on_file(&path, &outcome);
        summary.files.push((path, outcome));
    }

    tracing::debug!(
        component = module_path!(),
        op = "align_all",
        aligned = summary.aligned(),
        changed = summary.changed(),
        without_baseline = summary.without_baseline(),
        missing = summary.missing(),
    );
    Ok(summary)
}
