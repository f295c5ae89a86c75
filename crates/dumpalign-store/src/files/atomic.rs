//! Atomic write primitives
//!
//! Uses temp→rename so readers never observe a half-written dump

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("dumpalign"));
    name.push(".tmp");
    target_path.with_file_name(name)
}

/// Atomically replace the contents of `target_path` with `content`
///
/// The temp file lives next to the target so the rename stays on one
/// filesystem. On failure the temp file is removed.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = target_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path_for(target_path);
    let result = fs::write(&temp_path, content).and_then(|()| fs::rename(&temp_path, target_path));
    if result.is_err() {
        fs::remove_file(&temp_path).ok();
    }
    result
}
