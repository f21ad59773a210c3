//! Error types for driveback

use thiserror::Error;

/// Error types for driveback operations
#[derive(Debug, Error)]
pub enum BackupError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The rclone binary could not be resolved
    #[error("rclone binary not found")]
    BinaryNotFound,

    /// Spawning the rclone subprocess failed for a reason other than absence
    #[error("failed to launch rclone: {0}")]
    Spawn(#[source] std::io::Error),

    /// A captured-mode command exceeded its deadline
    #[error("rclone command timed out after {seconds}s")]
    CommandTimeout { seconds: u64 },

    /// Downloading the rclone release archive failed
    #[error("download failed: {0}")]
    Download(String),

    /// Extracting the release archive failed, or it held no usable binary
    #[error("archive extraction failed: {0}")]
    Extraction(String),

    /// rclone reported failure while listing a target
    #[error("could not list '{target}': {detail}")]
    ListingFailed { target: String, detail: String },

    /// A listing record was missing or mistyped a required field
    #[error("malformed listing entry '{path}': {reason}")]
    MalformedListing { path: String, reason: String },

    /// Persisting the configuration failed
    #[error("could not write config: {0}")]
    ConfigWrite(#[source] std::io::Error),

    /// Writing the change report failed
    #[error("could not write report: {0}")]
    ReportWrite(#[source] std::io::Error),

    /// User interrupt (Ctrl-C) - clean exit, not a failure
    #[error("interrupted by user")]
    Interrupted,
}

impl BackupError {
    /// Check if this error means the external binary is unusable, so any
    /// action that needs it should be declined with install guidance.
    pub fn needs_binary_install(&self) -> bool {
        matches!(
            self,
            BackupError::BinaryNotFound | BackupError::Download(_) | BackupError::Extraction(_)
        )
    }

    /// Check if this error is the clean user-interrupt exit.
    pub fn is_interrupt(&self) -> bool {
        matches!(self, BackupError::Interrupted)
    }
}
