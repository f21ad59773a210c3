//! Configuration management
//!
//! The config file is the only durable state: a small JSON object holding
//! the remote source, the backup destination, and the resolved rclone path.

use crate::types::BackupError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file, relative to the working directory
pub const CONFIG_FILE: &str = "config.json";

/// Directory for exported change reports
pub const TEMP_DIR: &str = "temp_data";

/// Directory for rclone sync logs
pub const LOG_DIR: &str = "logs";

/// Directory a downloaded rclone binary is installed into
pub const INSTALL_DIR: &str = "rclone_bin";

fn default_source() -> String {
    "gdrive:".to_string()
}

/// Persistent configuration for driveback
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Remote identifier, e.g. `gdrive:` or `gdrive:photos`
    #[serde(default = "default_source")]
    pub source: String,

    /// Backup destination path; empty means not configured yet
    #[serde(default)]
    pub destination: String,

    /// Resolved rclone executable; empty triggers re-resolution
    #[serde(default)]
    pub rclone_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            destination: String::new(),
            rclone_path: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// A missing or unreadable file yields the defaults; a corrupt config is
    /// recoverable by re-running the settings action, not a hard error.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<(), BackupError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|err| BackupError::ConfigWrite(std::io::Error::other(err)))?;
        std::fs::write(path, json).map_err(BackupError::ConfigWrite)
    }

    /// Check whether a destination has been configured.
    pub fn has_destination(&self) -> bool {
        !self.destination.is_empty()
    }

    /// The remote alias to look for in `rclone listremotes` output:
    /// the source up to and including the first `:`, or the whole source
    /// when it has no colon.
    pub fn remote_alias(&self) -> &str {
        match self.source.find(':') {
            Some(idx) => &self.source[..=idx],
            None => &self.source,
        }
    }

    /// Configured rclone path, if it still points at an existing file.
    pub fn rclone_path_if_present(&self) -> Option<PathBuf> {
        if self.rclone_path.is_empty() {
            return None;
        }
        let path = PathBuf::from(&self.rclone_path);
        path.is_file().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.source, "gdrive:");
        assert_eq!(config.destination, "");
        assert_eq!(config.rclone_path, "");
        assert!(!config.has_destination());
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let config = Config::load(&dir.path().join("does_not_exist.json"));

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_corrupt_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").expect("write");

        let config = Config::load(&path);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        let config = Config {
            source: "gdrive:photos".to_string(),
            destination: "/mnt/backup".to_string(),
            rclone_path: "/usr/bin/rclone".to_string(),
        };
        config.save(&path).expect("save");

        let loaded = Config::load(&path);
        assert_eq!(loaded, config);
        assert!(loaded.has_destination());
    }

    #[test]
    fn test_missing_keys_are_defaulted() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"destination": "/backup"}"#).expect("write");

        let config = Config::load(&path);
        assert_eq!(config.source, "gdrive:");
        assert_eq!(config.destination, "/backup");
        assert_eq!(config.rclone_path, "");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"source": "s3:", "destination": "/b", "legacy_field": 7}"#,
        )
        .expect("write");

        let config = Config::load(&path);
        assert_eq!(config.source, "s3:");
        assert_eq!(config.destination, "/b");
    }

    #[test]
    fn test_remote_alias_truncates_after_colon() {
        let mut config = Config::default();
        config.source = "gdrive:photos/2024".to_string();
        assert_eq!(config.remote_alias(), "gdrive:");

        config.source = "gdrive:".to_string();
        assert_eq!(config.remote_alias(), "gdrive:");

        config.source = "plainname".to_string();
        assert_eq!(config.remote_alias(), "plainname");
    }

    #[test]
    fn test_rclone_path_if_present() {
        let dir = tempdir().expect("tempdir");
        let binary = dir.path().join("rclone");
        std::fs::write(&binary, "#!/bin/sh\n").expect("write");

        let mut config = Config::default();
        assert_eq!(config.rclone_path_if_present(), None);

        config.rclone_path = binary.display().to_string();
        assert_eq!(config.rclone_path_if_present(), Some(binary));

        config.rclone_path = dir.path().join("missing").display().to_string();
        assert_eq!(config.rclone_path_if_present(), None);
    }
}
