//! The apply action - confirmed mirrored sync

use crate::config::{Config, LOG_DIR};
use crate::rclone::RcloneRunner;
use crate::report;
use crate::types::BackupError;
use crate::ui;

use super::scan;

/// Apply always re-scans first so the confirmation reflects current state.
/// The remote can still change between confirmation and the sync call;
/// that window is inherent to the scan-then-confirm design.
pub fn run_apply_action(config: &Config, runner: &RcloneRunner) -> Result<(), BackupError> {
    ui::print_info("Scanning for changes first...");
    let changes = scan::scan_and_display(config, runner)?;

    if changes.is_empty() {
        ui::print_info("Nothing to sync!");
        return Ok(());
    }

    run_sync(config, runner)
}

/// Confirm and run the streamed `rclone sync`, with a timestamped log
/// file whose path is handed to rclone.
fn run_sync(config: &Config, runner: &RcloneRunner) -> Result<(), BackupError> {
    ui::print_section("Applying Changes");
    println!();
    ui::print_warning("This will modify your backup files!");

    if !ui::confirm(
        "\nAre you sure you want to continue? (yes/no): ",
        &["yes", "y"],
    )? {
        ui::print_info("Sync cancelled.");
        return Ok(());
    }

    std::fs::create_dir_all(LOG_DIR)?;
    let log_file = report::sync_log_path();
    let log_arg = log_file.display().to_string();

    println!();
    ui::print_info("Starting synchronization...");
    ui::print_info(&format!("Log file: {log_arg}"));
    println!();

    let status = runner.run_streamed(&[
        "sync",
        &config.source,
        &config.destination,
        "--progress",
        "--checksum",
        "--track-renames",
        "--delete-after",
        "--log-file",
        &log_arg,
        "--log-level",
        "INFO",
        "--stats",
        "1s",
        "--stats-one-line",
    ])?;

    println!();
    if status == Some(0) {
        ui::print_success("Backup completed successfully!");
        ui::print_info(&format!("Log saved to: {log_arg}"));
    } else {
        ui::print_error("Sync failed. Check log for details.");
        ui::print_info(&format!("Log file: {log_arg}"));
    }
    Ok(())
}
