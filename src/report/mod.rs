//! Rendering of scan results
//!
//! Three surfaces: the fixed-width summary box, the itemized terminal
//! listing (capped per category), and the exported plain-text report
//! (uncapped). Formatting is kept in `String`-returning helpers with thin
//! print wrappers so the output can be asserted on directly.

use crate::types::{BackupError, ChangeSet};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Itemized terminal listing shows at most this many entries per category
pub const DETAIL_CAP: usize = 50;

const BOX_WIDTH: usize = 57;
const RULE_WIDTH: usize = 70;

/// Humanize a byte count: `1.17 KB`, `2.00 MB`, ...
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in ["B", "KB", "MB", "GB", "TB"] {
        if value < 1024.0 {
            return format!("{value:.2} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.2} PB")
}

/// The fixed-width summary box with counts and totals.
pub fn format_summary(changes: &ChangeSet) -> String {
    let line = |text: String| format!("  │ {text:<BOX_WIDTH$} │");
    let rule = |left: char, right: char| {
        format!("  {left}{}{right}", "─".repeat(BOX_WIDTH + 2))
    };

    let mut lines = Vec::new();
    lines.push(rule('┌', '┐'));
    lines.push(line("NEW FILES".to_string()));
    lines.push(line(format!("  Count: {}", changes.new.len())));
    lines.push(line(format!("  Size:  {}", format_size(changes.total_new_size))));
    lines.push(rule('├', '┤'));
    lines.push(line("CHANGED FILES".to_string()));
    lines.push(line(format!("  Count: {}", changes.changed.len())));
    lines.push(rule('├', '┤'));
    lines.push(line("DELETED FILES".to_string()));
    lines.push(line(format!("  Count: {}", changes.deleted.len())));
    lines.push(line(format!(
        "  Space: {} will be freed",
        format_size(changes.total_deleted_size)
    )));
    lines.push(rule('└', '┘'));
    lines.join("\n")
}

/// Print the summary box.
pub fn print_summary(changes: &ChangeSet) {
    println!("{}", format_summary(changes));
}

/// The itemized listing, capped at [`DETAIL_CAP`] entries per category.
pub fn format_details(changes: &ChangeSet) -> String {
    let mut sections = Vec::new();

    if !changes.new.is_empty() {
        let mut lines = vec![format!("New Files ({})", changes.new.len())];
        for entry in changes.new.iter().take(DETAIL_CAP) {
            lines.push(format!(
                "  + {:<50} {:>12}",
                entry.path,
                format_size(entry.size)
            ));
        }
        push_elision(&mut lines, changes.new.len());
        sections.push(lines.join("\n"));
    }

    if !changes.changed.is_empty() {
        let mut lines = vec![format!("Changed Files ({})", changes.changed.len())];
        for entry in changes.changed.iter().take(DETAIL_CAP) {
            let arrow = if entry.size_diff >= 0 { '↑' } else { '↓' };
            lines.push(format!(
                "  ~ {:<40} {} → {} {}",
                entry.path,
                format_size(entry.old_size),
                format_size(entry.new_size),
                arrow
            ));
        }
        push_elision(&mut lines, changes.changed.len());
        sections.push(lines.join("\n"));
    }

    if !changes.deleted.is_empty() {
        let mut lines = vec![format!("Deleted Files ({})", changes.deleted.len())];
        for entry in changes.deleted.iter().take(DETAIL_CAP) {
            lines.push(format!(
                "  - {:<50} {:>12}",
                entry.path,
                format_size(entry.size)
            ));
        }
        push_elision(&mut lines, changes.deleted.len());
        sections.push(lines.join("\n"));
    }

    sections.join("\n\n")
}

fn push_elision(lines: &mut Vec<String>, total: usize) {
    if total > DETAIL_CAP {
        lines.push(format!("  ... and {} more files", total - DETAIL_CAP));
    }
}

/// Print the itemized listing.
pub fn print_details(changes: &ChangeSet) {
    println!("{}", format_details(changes));
}

/// The full report body: header with generation timestamp, summary, then
/// one line per entry. Uncapped.
pub fn render_report(changes: &ChangeSet, generated_at: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let thin_rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str("DRIVEBACK - CHANGE REPORT\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("Generated: {generated_at}\n"));
    out.push_str(&rule);
    out.push_str("\n\n");

    out.push_str("SUMMARY\n");
    out.push_str(&thin_rule);
    out.push('\n');
    out.push_str(&format!(
        "New files:     {} ({})\n",
        changes.new.len(),
        format_size(changes.total_new_size)
    ));
    out.push_str(&format!("Changed files: {}\n", changes.changed.len()));
    out.push_str(&format!(
        "Deleted files: {} ({})\n\n",
        changes.deleted.len(),
        format_size(changes.total_deleted_size)
    ));

    out.push_str(&format!("NEW FILES: {}\n", changes.new.len()));
    out.push_str(&thin_rule);
    out.push('\n');
    for entry in &changes.new {
        out.push_str(&format!("+ {} ({})\n", entry.path, format_size(entry.size)));
    }
    out.push('\n');

    out.push_str(&format!("CHANGED FILES: {}\n", changes.changed.len()));
    out.push_str(&thin_rule);
    out.push('\n');
    for entry in &changes.changed {
        out.push_str(&format!(
            "~ {} ({} → {})\n",
            entry.path,
            format_size(entry.old_size),
            format_size(entry.new_size)
        ));
    }
    out.push('\n');

    out.push_str(&format!("DELETED FILES: {}\n", changes.deleted.len()));
    out.push_str(&thin_rule);
    out.push('\n');
    for entry in &changes.deleted {
        out.push_str(&format!("- {} ({})\n", entry.path, format_size(entry.size)));
    }

    out
}

/// Write the report under the temporary-artifacts directory with a
/// timestamped filename, returning the path.
pub fn write_report(changes: &ChangeSet) -> Result<PathBuf, BackupError> {
    write_report_to(changes, Path::new(crate::config::TEMP_DIR))
}

/// Write the report under an explicit directory.
pub fn write_report_to(changes: &ChangeSet, dir: &Path) -> Result<PathBuf, BackupError> {
    std::fs::create_dir_all(dir).map_err(BackupError::ReportWrite)?;

    let now = Local::now();
    let path = dir.join(format!("changes_report_{}.txt", now.format("%Y%m%d_%H%M%S")));
    let body = render_report(changes, &now.format("%Y-%m-%d %H:%M:%S").to_string());
    std::fs::write(&path, body).map_err(BackupError::ReportWrite)?;
    Ok(path)
}

/// The log file path a sync run hands to rclone, timestamp-named.
pub fn sync_log_path() -> PathBuf {
    Path::new(crate::config::LOG_DIR).join(format!(
        "backup_{}.log",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}
