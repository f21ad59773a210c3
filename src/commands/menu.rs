//! The interactive menu - the orchestrator every action returns to

use crate::config::Config;
use crate::types::BackupError;
use crate::ui;
use console::style;
use std::path::Path;

use super::{check, require_destination, resolve_runner, scan, sync};

/// Run the interactive menu loop until the user exits.
///
/// Every action-level error is rendered here and control returns to the
/// menu; only the user interrupt escapes, so `main` can turn it into the
/// clean informational exit.
pub fn run(config_path: &Path) -> Result<(), BackupError> {
    loop {
        if ui::interrupt::interrupted() {
            return Err(BackupError::Interrupted);
        }

        // Reload each round so edits from the settings action (or another
        // editor) are always reflected in the banner.
        let config = Config::load(config_path);

        ui::print_header("DRIVEBACK - CLOUD BACKUP TOOL");
        let destination = if config.has_destination() {
            style(config.destination.clone()).green()
        } else {
            style("Not configured".to_string()).red()
        };
        println!("Current destination: {destination}\n");

        println!("{}", style("Main Menu:").bold());
        println!();
        println!("  1. Configure remote connection");
        println!("  2. Configure settings");
        println!("  3. Scan for changes");
        println!("  4. Apply changes (sync)");
        println!("  5. Check system");
        println!("  6. Help");
        println!("  7. Exit");
        println!();

        let choice = ui::prompt("Enter your choice (1-7): ")?;
        match choice.as_str() {
            "1" => dispatch(configure_remote(config_path))?,
            "2" => dispatch(configure_settings(config_path))?,
            "3" => dispatch(scan_action(config_path))?,
            "4" => dispatch(apply_action(config_path))?,
            "5" => dispatch(check_action(config_path))?,
            "6" => show_help(),
            "7" => {
                println!();
                ui::print_success("Thank you for using driveback!");
                return Ok(());
            }
            _ => ui::print_error("Invalid choice. Please enter 1-7."),
        }

        ui::pause()?;
    }
}

/// The action-level error boundary: interrupts propagate, everything else
/// becomes a message and the menu continues.
fn dispatch(result: Result<(), BackupError>) -> Result<(), BackupError> {
    match result {
        Ok(()) => Ok(()),
        Err(err) if err.is_interrupt() => Err(err),
        Err(err) => {
            ui::print_error(&err.to_string());
            if err.needs_binary_install() {
                ui::print_info("Install rclone manually from: https://rclone.org/downloads/");
            }
            Ok(())
        }
    }
}

/// Hand the remote setup over to rclone's own interactive config UI.
fn configure_remote(config_path: &Path) -> Result<(), BackupError> {
    let mut config = Config::load(config_path);
    let runner = resolve_runner(&mut config, config_path)?;

    ui::print_section("Remote Connection Setup");
    ui::print_info("Handing over to rclone's interactive configuration...");
    println!();
    runner.run_streamed(&["config"])?;
    Ok(())
}

/// Prompt for source and destination; empty input keeps the current value.
fn configure_settings(config_path: &Path) -> Result<(), BackupError> {
    let mut config = Config::load(config_path);

    ui::print_section("Configuration");
    println!("\nCurrent settings:");
    println!("  Source:      {}", style(&config.source).cyan());
    let destination = if config.has_destination() {
        config.destination.as_str()
    } else {
        "(not set)"
    };
    println!("  Destination: {}", style(destination).cyan());
    println!(
        "\n{}",
        style("Press Enter to keep current value, or type new value:").yellow()
    );
    println!();

    config.source = ui::prompt_with_default("Source", &config.source)?;
    config.destination = ui::prompt_with_default("Destination", &config.destination)?;

    if !config.has_destination() {
        ui::print_error("Destination must be set!");
        return Ok(());
    }

    config.save(config_path)?;
    ui::print_success("Configuration saved!");
    Ok(())
}

fn scan_action(config_path: &Path) -> Result<(), BackupError> {
    let mut config = Config::load(config_path);
    if !require_destination(&config) {
        return Ok(());
    }
    let runner = resolve_runner(&mut config, config_path)?;
    scan::run_scan_action(&config, &runner)
}

fn apply_action(config_path: &Path) -> Result<(), BackupError> {
    let mut config = Config::load(config_path);
    if !require_destination(&config) {
        return Ok(());
    }
    let runner = resolve_runner(&mut config, config_path)?;
    sync::run_apply_action(&config, &runner)
}

fn check_action(config_path: &Path) -> Result<(), BackupError> {
    let mut config = Config::load(config_path);
    let runner = resolve_runner(&mut config, config_path)?;
    check::run(&config, &runner)?;
    Ok(())
}

fn show_help() {
    ui::print_section("Help & Usage Guide");
    println!();
    println!("{}", style("Quick Start:").bold());
    println!("  1. Configure remote connection - set up your cloud remote");
    println!("  2. Configure settings - choose the backup destination");
    println!("  3. Scan for changes - see what would be synced");
    println!("  4. Apply changes - perform the actual backup");
    println!();
    println!("{}", style("How It Works:").bold());
    println!("  - Scanning is fast: it compares metadata, nothing is downloaded");
    println!("  - Only new and changed files are transferred during sync");
    println!("  - Files deleted on the remote are removed from the backup");
    println!();
    println!("{}", style("First Time Setup:").bold());
    println!("  1. Run 'Check system' to verify rclone and the remote");
    println!("  2. Configure your destination folder");
    println!("  3. Scan, review, and apply");
    println!();
    println!("{}", style("Tips:").bold());
    println!("  - The first backup transfers everything; later runs only changes");
    println!("  - Always review the scan before applying");
    println!("  - Export reports to keep a record of what changed");
    println!();
}
