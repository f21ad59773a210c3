//! Resolving a usable rclone binary
//!
//! Resolution priority: the configured path if it still exists, then the
//! process search path, then a previously installed copy. Downloading a
//! fresh copy is a separate, explicitly confirmed step (`install`).

use crate::config::Config;
use std::path::{Path, PathBuf};

/// Base URL rclone release archives are downloaded from
pub const DOWNLOAD_BASE_URL: &str = "https://downloads.rclone.org";

/// Platform binary name
#[cfg(windows)]
pub const BINARY_NAME: &str = "rclone.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "rclone";

/// Resolve a usable rclone path without touching the network.
///
/// Returns `None` when nothing is resolvable; the caller then decides
/// whether to offer an install.
pub fn locate(config: &Config, install_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = config.rclone_path_if_present() {
        return Some(path);
    }
    if let Ok(path) = which::which(BINARY_NAME) {
        return Some(path);
    }
    installed_binary(install_dir)
}

/// A previously installed copy under the local install directory, if any.
pub fn installed_binary(install_dir: &Path) -> Option<PathBuf> {
    let path = install_dir.join(BINARY_NAME);
    path.is_file().then_some(path)
}

/// The release asset name for an OS/architecture pair.
///
/// Unknown combinations deterministically fall back to the linux/amd64
/// asset. Best-effort default, not a guarantee that the asset runs there.
pub fn release_asset_name(os: &str, arch: &str) -> String {
    let os = match os {
        "windows" => "windows",
        "macos" => "osx",
        "linux" => "linux",
        _ => "linux",
    };
    let arch = match arch {
        "x86_64" => "amd64",
        "x86" => "386",
        "aarch64" => "arm64",
        "arm" => "arm",
        _ => "amd64",
    };
    format!("rclone-current-{os}-{arch}.zip")
}

/// The release asset matching the running platform.
pub fn current_asset_name() -> String {
    release_asset_name(std::env::consts::OS, std::env::consts::ARCH)
}
