//! # driveback - Interactive Cloud Backup Tool
//!
//! Review every change before it happens.
//!
//! A terminal backup tool that mirrors a cloud remote to a local destination
//! by driving the external `rclone` binary. Scans are transfer-free: both
//! sides are listed with `rclone lsjson`, the difference is classified into
//! new / changed / deleted entries, and nothing is copied until the user
//! reviews the result and confirms the sync.

// Module declarations
pub mod commands;
pub mod config;
pub mod diff;
pub mod rclone;
pub mod report;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use types::{BackupError, ChangeSet, FileEntry, Listing};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
