//! Download and installation of an rclone release archive
//!
//! Only ever entered after explicit interactive confirmation. Any failure
//! aborts the install and leaves resolution to the user.

use crate::rclone::locate::{current_asset_name, BINARY_NAME, DOWNLOAD_BASE_URL};
use crate::types::BackupError;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Release archives larger than this are rejected as bogus
const MAX_ARCHIVE_BYTES: u64 = 1024 * 1024 * 1024;

/// Download the platform-matched rclone release archive, extract it, and
/// return the path of the contained executable (marked runnable on unix).
pub fn install(install_dir: &Path) -> Result<PathBuf, BackupError> {
    std::fs::create_dir_all(install_dir)
        .map_err(|err| BackupError::Download(format!("cannot create install dir: {err}")))?;

    let asset = current_asset_name();
    let url = format!("{DOWNLOAD_BASE_URL}/{asset}");
    let archive_path = install_dir.join(&asset);
    download_to_file(&url, &archive_path)?;

    unzip_to_dir(&archive_path, install_dir)?;
    let _ = std::fs::remove_file(&archive_path);

    let binary = find_binary(install_dir)
        .ok_or_else(|| BackupError::Extraction(format!("{BINARY_NAME} not found in archive")))?;
    mark_executable(&binary)?;

    // Keep a stable copy directly under the install dir so later runs can
    // resolve it without re-walking the versioned archive layout.
    let stable = install_dir.join(BINARY_NAME);
    if binary != stable {
        std::fs::copy(&binary, &stable)
            .map_err(|err| BackupError::Extraction(err.to_string()))?;
        mark_executable(&stable)?;
    }
    Ok(stable)
}

/// Download a release asset to disk with a hard size limit.
fn download_to_file(url: &str, dest: &Path) -> Result<(), BackupError> {
    let response = ureq::get(url)
        .set("User-Agent", "driveback")
        .call()
        .map_err(|err| BackupError::Download(err.to_string()))?;

    let mut reader = response.into_reader().take(MAX_ARCHIVE_BYTES + 1);
    let mut file = File::create(dest).map_err(|err| BackupError::Download(err.to_string()))?;
    let copied = std::io::copy(&mut reader, &mut file)
        .map_err(|err| BackupError::Download(err.to_string()))?;
    if copied > MAX_ARCHIVE_BYTES {
        let _ = std::fs::remove_file(dest);
        return Err(BackupError::Download(format!(
            "archive exceeds {MAX_ARCHIVE_BYTES} byte limit"
        )));
    }
    Ok(())
}

/// Extract a zip archive into a directory.
///
/// Entries with unsafe (absolute or parent-escaping) names are skipped.
fn unzip_to_dir(zip_path: &Path, dest_dir: &Path) -> Result<(), BackupError> {
    let file = File::open(zip_path).map_err(|err| BackupError::Extraction(err.to_string()))?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|err| BackupError::Extraction(err.to_string()))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|err| BackupError::Extraction(err.to_string()))?;
        let outpath = match entry.enclosed_name() {
            Some(path) => dest_dir.join(path),
            None => continue,
        };
        if entry.name().ends_with('/') {
            std::fs::create_dir_all(&outpath)
                .map_err(|err| BackupError::Extraction(err.to_string()))?;
            continue;
        }
        if let Some(parent) = outpath.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| BackupError::Extraction(err.to_string()))?;
        }
        let mut outfile =
            File::create(&outpath).map_err(|err| BackupError::Extraction(err.to_string()))?;
        std::io::copy(&mut entry, &mut outfile)
            .map_err(|err| BackupError::Extraction(err.to_string()))?;
    }
    Ok(())
}

/// Find the rclone executable anywhere under `dir`; release archives nest
/// it inside a versioned directory.
fn find_binary(dir: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if let Some(found) = find_binary(&path) {
                return Some(found);
            }
        } else if path.file_name().and_then(|n| n.to_str()) == Some(BINARY_NAME) {
            return Some(path);
        }
    }
    None
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<(), BackupError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .map_err(|err| BackupError::Extraction(err.to_string()))
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<(), BackupError> {
    Ok(())
}
