//! Search configuration for graphwalk
//!
//! Configuration is read from a TOML file passed with `--config`.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::Result;

pub use types::{LoggingConfig, RelaxerKind, SearchConfig, CONFIG_FORMAT_VERSION};

impl SearchConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SearchConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            crate::bail_invalid!("config version", config.version);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert!(config.directed);
        assert_eq!(config.relaxer, RelaxerKind::Shortest);
        assert!(config.max_reopens.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphwalk.toml");
        fs::write(
            &path,
            "version = 1\ndirected = false\nrelaxer = \"longest\"\nmax_reopens = 4\n",
        )
        .unwrap();

        let expected = SearchConfig {
            directed: false,
            relaxer: RelaxerKind::Longest,
            max_reopens: Some(4),
            ..Default::default()
        };
        assert_eq!(SearchConfig::load(&path).unwrap(), expected);
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphwalk.toml");
        fs::write(&path, "relaxer = \"longest\"\n\n[logging]\nlevel = \"debug\"\n").unwrap();

        let loaded = SearchConfig::load(&path).unwrap();
        assert!(loaded.directed);
        assert_eq!(loaded.relaxer, RelaxerKind::Longest);
        assert_eq!(loaded.logging.level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_load_rejects_future_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphwalk.toml");
        fs::write(&path, "version = 99\n").unwrap();

        let err = SearchConfig::load(&path).unwrap_err();
        assert!(matches!(err, GraphError::InvalidValue { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = SearchConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }

    #[test]
    fn test_load_rejects_unknown_relaxer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphwalk.toml");
        fs::write(&path, "relaxer = \"widest\"\n").unwrap();

        let err = SearchConfig::load(&path).unwrap_err();
        assert!(matches!(err, GraphError::Toml(_)));
    }
}
