use clap::{Parser, Subcommand};
use driveback::commands::{self, SingleAction};
use driveback::config::CONFIG_FILE;
use driveback::ui;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "driveback",
    version,
    about = "Interactive cloud backup tool - review every change before it happens"
)]
struct Cli {
    /// Path to the config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Scan for changes without transferring anything
    Scan,
    /// Scan, confirm, and run the mirrored sync
    Sync,
    /// Verify the rclone binary and the configured remote
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    ui::interrupt::install();

    let result = match cli.command {
        None => commands::menu::run(&cli.config),
        Some(Action::Scan) => commands::run_single(SingleAction::Scan, &cli.config),
        Some(Action::Sync) => commands::run_single(SingleAction::Sync, &cli.config),
        Some(Action::Check) => commands::run_single(SingleAction::Check, &cli.config),
    };

    match result {
        Ok(()) => Ok(()),
        Err(err) if err.is_interrupt() => {
            // Ctrl-C is a clean exit, not a failure.
            println!();
            ui::print_info("Interrupted by user");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
