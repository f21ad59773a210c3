//! Per-action orchestration

pub mod check;
pub mod menu;
pub mod scan;
pub mod sync;

use crate::config::{Config, INSTALL_DIR};
use crate::rclone::{self, RcloneRunner};
use crate::types::BackupError;
use crate::ui;
use std::path::Path;

/// One-shot actions reachable from the CLI without entering the menu.
#[derive(Debug, Clone, Copy)]
pub enum SingleAction {
    Scan,
    Sync,
    Check,
}

/// Run a single action and return, instead of looping in the menu.
pub fn run_single(action: SingleAction, config_path: &Path) -> Result<(), BackupError> {
    let mut config = Config::load(config_path);

    match action {
        SingleAction::Check => {
            let runner = resolve_runner(&mut config, config_path)?;
            check::run(&config, &runner)?;
        }
        SingleAction::Scan => {
            if !require_destination(&config) {
                return Ok(());
            }
            let runner = resolve_runner(&mut config, config_path)?;
            scan::run_scan_action(&config, &runner)?;
        }
        SingleAction::Sync => {
            if !require_destination(&config) {
                return Ok(());
            }
            let runner = resolve_runner(&mut config, config_path)?;
            sync::run_apply_action(&config, &runner)?;
        }
    }
    Ok(())
}

/// Guard shared by scan and sync: both need a configured destination.
pub(crate) fn require_destination(config: &Config) -> bool {
    if config.has_destination() {
        return true;
    }
    ui::print_error("Destination not configured. Run 'Configure settings' first.");
    false
}

/// Resolve a usable rclone binary, offering a confirmed download when
/// nothing is found. A successful install is recorded in the config.
pub(crate) fn resolve_runner(
    config: &mut Config,
    config_path: &Path,
) -> Result<RcloneRunner, BackupError> {
    let install_dir = Path::new(INSTALL_DIR);

    if let Some(path) = rclone::locate(config, install_dir) {
        return Ok(RcloneRunner::new(path));
    }

    ui::print_warning("rclone was not found on this system.");
    if !ui::confirm("Download and install rclone now? (y/N): ", &["y", "yes"])? {
        ui::print_info("Install it manually from: https://rclone.org/downloads/");
        return Err(BackupError::BinaryNotFound);
    }

    ui::print_info("Downloading rclone...");
    let path = rclone::install(install_dir)?;
    ui::print_success(&format!("rclone installed at: {}", path.display()));

    config.rclone_path = path.display().to_string();
    config.save(config_path)?;

    Ok(RcloneRunner::new(path))
}
