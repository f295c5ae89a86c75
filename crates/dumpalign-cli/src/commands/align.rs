//! Align command
//!
//! Usage: dumpalign align [--config <PATH>] [--dir <DIR>] [--file <NAME>]...
//!                        [--revision <REV>] [--dry-run] [--log-json]

use clap::Args;
use dumpalign_core::config::AlignConfig;
use dumpalign_engine::{align_all_with, AlignOptions, FileOutcome};
use dumpalign_store::{load_config, GitBaselineProvider};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct AlignArgs {
    /// YAML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the dump files (overrides the config file)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// File to realign, relative to the dump directory (repeatable; replaces the configured list)
    #[arg(long = "file", value_name = "NAME")]
    pub files: Vec<String>,

    /// Git revision holding the baselines (overrides the config file)
    #[arg(long)]
    pub revision: Option<String>,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// Layer defaults, the config file and flags, then validate the result
fn resolve_config(args: &AlignArgs) -> Result<AlignConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AlignConfig::default(),
    };
    if let Some(dir) = &args.dir {
        config.dump_directory = dir.clone();
    }
    if !args.files.is_empty() {
        config.target_filenames = args.files.clone();
    }
    if let Some(revision) = &args.revision {
        config.baseline_revision = revision.clone();
    }
    config.validate()?;
    Ok(config)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Execute align command
pub fn execute(args: AlignArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(&args)?;
    let provider = GitBaselineProvider::new(config.baseline_revision.clone());
    let options = AlignOptions {
        dry_run: args.dry_run,
    };

    println!(
        "Aligning working copy in {} with {}...",
        config.dump_directory.display(),
        config.baseline_revision
    );

    let summary = align_all_with(&config, &provider, options, |path, outcome| {
        let name = display_name(path);
        match outcome {
            FileOutcome::Missing => {}
            FileOutcome::NoBaseline => println!("  [Skip] No baseline for {}", name),
            FileOutcome::Aligned { changed, .. } if options.dry_run => {
                if *changed {
                    println!("  [Would change] {}", name);
                } else {
                    println!("  [Unchanged] {}", name);
                }
            }
            FileOutcome::Aligned { .. } => println!("  [Done] Aligned {}", name),
        }
    })?;

    let warnings = summary.warnings();
    if warnings > 0 {
        println!("{} alignment warning(s); see log output", warnings);
    }

    Ok(())
}
