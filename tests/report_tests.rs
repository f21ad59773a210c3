//! Reporter integration tests

use driveback::report::{format_details, format_summary, render_report, write_report_to, DETAIL_CAP};
use driveback::types::{ChangeSet, ChangedEntry, DeletedEntry, NewEntry};
use tempfile::tempdir;

fn sample_changes() -> ChangeSet {
    let mut changes = ChangeSet::new();
    changes.add_new(NewEntry {
        path: "Documents/report_q2.pdf".to_string(),
        size: 420_000,
        modified: "2024-05-01T10:00:00Z".to_string(),
    });
    changes.add_new(NewEntry {
        path: "Photos/cat.jpg".to_string(),
        size: 1_200_000,
        modified: "2024-05-02T08:30:00Z".to_string(),
    });
    changes.add_changed(ChangedEntry {
        path: "notes.txt".to_string(),
        old_size: 1024,
        new_size: 4096,
        size_diff: 3072,
        modified: "2024-05-03T12:00:00Z".to_string(),
    });
    changes.add_deleted(DeletedEntry {
        path: "obsolete/draft.txt".to_string(),
        size: 900,
        modified: "2023-11-11T11:11:11Z".to_string(),
    });
    changes
}

#[test]
fn test_summary_counts_match_changeset() {
    let summary = format_summary(&sample_changes());

    assert!(summary.contains("Count: 2"));
    assert!(summary.contains("Count: 1"));
    assert!(summary.contains("will be freed"));
}

#[test]
fn test_details_prefixes_per_category() {
    let details = format_details(&sample_changes());

    assert!(details.contains("+ Documents/report_q2.pdf"));
    assert!(details.contains("~ notes.txt"));
    assert!(details.contains("- obsolete/draft.txt"));
}

#[test]
fn test_report_file_written_with_timestamped_name() {
    let dir = tempdir().expect("tempdir");

    let path = write_report_to(&sample_changes(), dir.path()).expect("write report");

    let name = path.file_name().and_then(|n| n.to_str()).expect("name");
    assert!(name.starts_with("changes_report_"));
    assert!(name.ends_with(".txt"));
    // changes_report_YYYYMMDD_HHMMSS.txt
    assert_eq!(name.len(), "changes_report_".len() + 15 + ".txt".len());

    let body = std::fs::read_to_string(&path).expect("read");
    assert!(body.contains("DRIVEBACK - CHANGE REPORT"));
    assert!(body.contains("Generated: "));
    assert!(body.contains("+ Documents/report_q2.pdf (410.16 KB)"));
    assert!(body.contains("~ notes.txt (1.00 KB → 4.00 KB)"));
    assert!(body.contains("- obsolete/draft.txt (900.00 B)"));
}

#[test]
fn test_report_creates_missing_directory() {
    let dir = tempdir().expect("tempdir");
    let nested = dir.path().join("temp_data");

    let path = write_report_to(&sample_changes(), &nested).expect("write report");

    assert!(path.starts_with(&nested));
    assert!(path.exists());
}

#[test]
fn test_report_lists_every_entry_uncapped() {
    let mut changes = ChangeSet::new();
    for i in 0..(DETAIL_CAP + 30) {
        changes.add_deleted(DeletedEntry {
            path: format!("bulk/file_{i:04}.dat"),
            size: 10,
            modified: "T".to_string(),
        });
    }

    let report = render_report(&changes, "2024-05-01 10:00:00");
    let listed = report.lines().filter(|l| l.starts_with("- ")).count();
    assert_eq!(listed, DETAIL_CAP + 30);
}

#[test]
fn test_terminal_details_are_capped() {
    let mut changes = ChangeSet::new();
    for i in 0..(DETAIL_CAP + 30) {
        changes.add_deleted(DeletedEntry {
            path: format!("bulk/file_{i:04}.dat"),
            size: 10,
            modified: "T".to_string(),
        });
    }

    let details = format_details(&changes);
    let listed = details
        .lines()
        .filter(|l| l.trim_start().starts_with("- "))
        .count();
    assert_eq!(listed, DETAIL_CAP);
    assert!(details.contains("... and 30 more files"));
}
