//! Styled terminal output and blocking prompts

use crate::types::BackupError;
use crate::ui::interrupt;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, ErrorKind, Write};

const HEADER_WIDTH: usize = 70;

/// Print a success line.
pub fn print_success(text: &str) {
    println!("{} {}", style("✔").green().bold(), text);
}

/// Print an error line.
pub fn print_error(text: &str) {
    println!("{} {}", style("✘").red().bold(), text);
}

/// Print a warning line.
pub fn print_warning(text: &str) {
    println!("{} {}", style("!").yellow().bold(), text);
}

/// Print an informational line.
pub fn print_info(text: &str) {
    println!("{} {}", style("·").cyan().bold(), text);
}

/// Print the banner header.
pub fn print_header(text: &str) {
    let rule = "=".repeat(HEADER_WIDTH);
    println!("\n{rule}");
    println!("{}", style(center(text)).cyan().bold());
    println!("{rule}\n");
}

/// Print a section header.
pub fn print_section(text: &str) {
    println!("\n{}", style(format!("▶ {text}")).blue().bold());
    println!("{}", "-".repeat(HEADER_WIDTH));
}

fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= HEADER_WIDTH {
        return text.to_string();
    }
    let pad = (HEADER_WIDTH - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Read one line of user input after showing `label`.
///
/// Ctrl-C (and closed stdin) surface as `Interrupted` so the caller can
/// unwind into the clean informational exit.
pub fn prompt(label: &str) -> Result<String, BackupError> {
    print!("{label}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) => Err(BackupError::Interrupted),
        Ok(_) => {
            if interrupt::interrupted() {
                Err(BackupError::Interrupted)
            } else {
                Ok(line.trim().to_string())
            }
        }
        Err(err) if err.kind() == ErrorKind::Interrupted || interrupt::interrupted() => {
            Err(BackupError::Interrupted)
        }
        Err(err) => Err(BackupError::Io(err)),
    }
}

/// Prompt with a current value shown; empty input keeps the current value.
pub fn prompt_with_default(label: &str, current: &str) -> Result<String, BackupError> {
    let shown = if current.is_empty() { "(not set)" } else { current };
    let input = prompt(&format!("{label} [{shown}]: "))?;
    if input.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(input)
    }
}

/// Ask a yes/no question; `accepted` lists the answers counting as yes.
pub fn confirm(label: &str, accepted: &[&str]) -> Result<bool, BackupError> {
    let answer = prompt(label)?.to_lowercase();
    Ok(accepted.contains(&answer.as_str()))
}

/// Block until the user presses Enter.
pub fn pause() -> Result<(), BackupError> {
    prompt("\nPress Enter to continue...").map(|_| ())
}

/// Spinner shown while a listing is being fetched.
pub fn scan_spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.enable_steady_tick(std::time::Duration::from_millis(120));
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
    }
    bar.set_message(message.to_string());
    bar
}
