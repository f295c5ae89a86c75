use dumpalign_core::baseline::MemoryBaselines;
use dumpalign_core::config::AlignConfig;
use dumpalign_core::errors::ExErrorKind;
use dumpalign_engine::{align_all, align_all_with, AlignOptions, FileOutcome};
use std::fs;
use tempfile::TempDir;

fn config_for(dir: &TempDir, names: &[&str]) -> AlignConfig {
    AlignConfig {
        dump_directory: dir.path().to_path_buf(),
        target_filenames: names.iter().map(|n| n.to_string()).collect(),
        ..AlignConfig::default()
    }
}

#[test]
fn test_files_are_processed_in_configured_order() {
    // Given three targets: one aligned, one without baseline, one missing
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let a = temp_dir.path().join("a.txt");
    let b = temp_dir.path().join("b.txt");
    fs::write(&a, "H\n  y:9\n  x:7\n").unwrap();
    fs::write(&b, "B\n").unwrap();
    let provider = MemoryBaselines::new().with(&a, "H\n  x:1\n  y:2\n");
    let config = config_for(&temp_dir, &["a.txt", "b.txt", "c.txt"]);

    // When running over all of them
    let mut seen = Vec::new();
    let summary = align_all_with(&config, &provider, AlignOptions::default(), |path, _| {
        seen.push(path.to_path_buf())
    })
    .unwrap();

    // Then every file gets an outcome, in order
    assert_eq!(seen, vec![a.clone(), b.clone(), temp_dir.path().join("c.txt")]);
    assert!(matches!(
        summary.files[0].1,
        FileOutcome::Aligned { changed: true, .. }
    ));
    assert_eq!(summary.files[1].1, FileOutcome::NoBaseline);
    assert_eq!(summary.files[2].1, FileOutcome::Missing);
    assert_eq!(fs::read_to_string(&a).unwrap(), "H\n  x:7\n  y:9\n");
    assert_eq!(fs::read_to_string(&b).unwrap(), "B\n");
}

#[test]
fn test_dry_run_over_all_files_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let a = temp_dir.path().join("a.txt");
    fs::write(&a, "B\n\nA\n").unwrap();
    let provider = MemoryBaselines::new().with(&a, "A\n\nB\n");
    let config = config_for(&temp_dir, &["a.txt"]);

    let summary = align_all(&config, &provider, AlignOptions { dry_run: true }).unwrap();

    assert_eq!(summary.changed(), 1);
    assert_eq!(fs::read_to_string(&a).unwrap(), "B\n\nA\n");
}

#[test]
fn test_io_error_stops_the_run() {
    // Given the first target is a directory
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let broken = temp_dir.path().join("broken.txt");
    fs::create_dir(&broken).unwrap();
    let later = temp_dir.path().join("later.txt");
    fs::write(&later, "B\n\nA\n").unwrap();
    let provider = MemoryBaselines::new()
        .with(&broken, "X\n")
        .with(&later, "A\n\nB\n");
    let config = config_for(&temp_dir, &["broken.txt", "later.txt"]);

    // When running
    let err = align_all(&config, &provider, AlignOptions::default()).unwrap_err();

    // Then the error propagates and later files are not touched
    assert_eq!(err.kind(), ExErrorKind::Io);
    assert_eq!(err.path(), Some(broken.as_path()));
    assert_eq!(fs::read_to_string(&later).unwrap(), "B\n\nA\n");
}

#[test]
fn test_empty_target_list_is_an_empty_summary() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = config_for(&temp_dir, &[]);

    let summary = align_all(&config, &MemoryBaselines::new(), AlignOptions::default()).unwrap();

    assert!(summary.files.is_empty());
    assert_eq!(summary.aligned(), 0);
}
