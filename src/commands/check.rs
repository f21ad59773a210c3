//! The system check action

use crate::config::Config;
use crate::rclone::RcloneRunner;
use crate::types::BackupError;
use crate::ui;

/// Probe the rclone binary and verify the configured remote exists.
///
/// Returns whether both checks passed.
pub fn run(config: &Config, runner: &RcloneRunner) -> Result<bool, BackupError> {
    ui::print_section("System Check");

    let version = runner.run_captured(&["version"])?;
    let first_line = version.stdout.lines().next().unwrap_or("").trim();
    if !version.success() || first_line.is_empty() {
        ui::print_error("rclone is not installed properly");
        ui::print_info("Install from: https://rclone.org/downloads/");
        return Ok(false);
    }
    ui::print_success(&format!("rclone installed: {first_line}"));

    let alias = config.remote_alias();
    let remotes = runner.run_captured(&["listremotes"])?;
    let configured =
        remotes.success() && remotes.stdout.lines().any(|line| line.trim() == alias);

    if configured {
        ui::print_success(&format!("Remote '{alias}' is configured"));
        Ok(true)
    } else {
        ui::print_error(&format!("Remote '{alias}' not found"));
        ui::print_info("Run 'Configure remote connection' to set it up");
        Ok(false)
    }
}
