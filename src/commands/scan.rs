//! The scan action - transfer-free change detection

use crate::config::Config;
use crate::diff::classify;
use crate::rclone::{parse_listing, RcloneRunner};
use crate::report;
use crate::types::{BackupError, ChangeSet, Listing};
use crate::ui;
use std::path::Path;

/// Fetch both listings and classify the difference. Pure data; no display.
///
/// The remote listing must succeed. A destination that does not exist yet,
/// or that rclone cannot list, counts as empty: everything remote is new.
pub fn scan_changes(config: &Config, runner: &RcloneRunner) -> Result<ChangeSet, BackupError> {
    let remote = fetch_listing(runner, &config.source, "Fetching remote file list...")?;

    let local = if Path::new(&config.destination).exists() {
        let spinner = ui::scan_spinner("Fetching local file list...");
        let output = runner.run_captured(&[
            "lsjson",
            &config.destination,
            "--recursive",
            "--files-only",
        ]);
        spinner.finish_and_clear();
        match output {
            Ok(out) if out.success() => parse_listing(&out.stdout)?,
            Ok(_) => Listing::new(),
            Err(err) => return Err(err),
        }
    } else {
        Listing::new()
    };

    Ok(classify(&remote, &local))
}

fn fetch_listing(
    runner: &RcloneRunner,
    target: &str,
    message: &str,
) -> Result<Listing, BackupError> {
    let spinner = ui::scan_spinner(message);
    let output = runner.run_captured(&["lsjson", target, "--recursive", "--files-only"]);
    spinner.finish_and_clear();

    let output = output?;
    if !output.success() {
        return Err(BackupError::ListingFailed {
            target: target.to_string(),
            detail: output.stderr.trim().to_string(),
        });
    }
    parse_listing(&output.stdout)
}

/// Scan, print the summary box, and offer the itemized listing.
pub fn scan_and_display(
    config: &Config,
    runner: &RcloneRunner,
) -> Result<ChangeSet, BackupError> {
    ui::print_section("Scanning for Changes");
    ui::print_info("This will compare files without downloading them...");

    let changes = scan_changes(config, runner)?;

    println!();
    report::print_summary(&changes);
    println!();

    if changes.is_empty() {
        ui::print_success("No changes detected! Everything is up to date.");
        return Ok(changes);
    }

    println!("Total changes: {}", changes.total_changes());
    if ui::confirm("\nShow detailed file list? (Y/n): ", &["", "y", "yes"])? {
        println!();
        report::print_details(&changes);
    }

    Ok(changes)
}

/// The full interactive scan action: display plus optional export.
pub fn run_scan_action(config: &Config, runner: &RcloneRunner) -> Result<(), BackupError> {
    let changes = scan_and_display(config, runner)?;
    if changes.is_empty() {
        return Ok(());
    }

    if ui::confirm("\nExport report? (y/N): ", &["y", "yes"])? {
        let path = report::write_report(&changes)?;
        ui::print_success(&format!("Report exported to: {}", path.display()));
    }
    Ok(())
}
