//! YAML configuration loading
//!
//! Every key is optional; missing keys keep their defaults. Relative
//! `dump_directory` values are resolved against the config file's own
//! directory.

use crate::errors::Result;
use dumpalign_core::config::AlignConfig;
use dumpalign_core::errors::DumpAlignError;
use std::fs;
use std::path::Path;

/// Load and validate the configuration at `path`
///
/// # Errors
///
/// - `ExErrorKind::Io` if the file cannot be read
/// - `ExErrorKind::Serialization` if it is not valid YAML for [`AlignConfig`]
/// - `ExErrorKind::InvalidConfig` if it fails validation
#[allow(clippy::result_large_err)]
pub fn load_config(path: &Path) -> Result<AlignConfig> {
    let content = fs::read_to_string(path).map_err(|source| DumpAlignError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config = parse_config_str(&content, path)?;
    if config.dump_directory.is_relative() {
        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.dump_directory = base.join(&config.dump_directory);
        }
    }
    Ok(config)
}

/// Parse and validate configuration text; `origin` is used in errors only
///
/// An empty document yields the default configuration.
///
/// # Errors
///
/// As for [`load_config`], minus the read failure.
#[allow(clippy::result_large_err)]
pub fn parse_config_str(content: &str, origin: &Path) -> Result<AlignConfig> {
    let config: AlignConfig = if content.trim().is_empty() {
        AlignConfig::default()
    } else {
        serde_yaml::from_str(content).map_err(|e| DumpAlignError::ConfigParse {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dumpalign_core::config::DEFAULT_TARGET_FILENAMES;
    use dumpalign_core::errors::ExErrorKind;
    use std::path::PathBuf;

    #[test]
    fn test_empty_document_is_default() {
        let config = parse_config_str("\n", Path::new("c.yaml")).unwrap();
        assert_eq!(config, AlignConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = parse_config_str("baseline_revision: v1.2\n", Path::new("c.yaml")).unwrap();
        assert_eq!(config.baseline_revision, "v1.2");
        assert_eq!(config.target_filenames.len(), DEFAULT_TARGET_FILENAMES.len());
    }

    #[test]
    fn test_full_document() {
        let yaml = "dump_directory: out\ntarget_filenames:\n  - a.txt\n  - b.txt\nbaseline_revision: main\n";
        let config = parse_config_str(yaml, Path::new("c.yaml")).unwrap();
        assert_eq!(config.dump_directory, PathBuf::from("out"));
        assert_eq!(config.target_filenames, vec!["a.txt", "b.txt"]);
        assert_eq!(config.baseline_revision, "main");
    }

    #[test]
    fn test_unknown_key_is_serialization_error() {
        let err = parse_config_str("dump_dir: x\n", Path::new("c.yaml")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Serialization);
        assert_eq!(err.path(), Some(Path::new("c.yaml")));
    }

    #[test]
    fn test_escaping_filename_is_invalid_config() {
        let err =
            parse_config_str("target_filenames: ['../secret']\n", Path::new("c.yaml")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    }
}
