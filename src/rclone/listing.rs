//! Parsing of `rclone lsjson` output
//!
//! `lsjson --recursive --files-only` emits a JSON array of objects, each
//! carrying at least `Path`, `Size`, and `ModTime`. Validation happens
//! here, at the parse boundary; the classifier downstream assumes
//! well-formed listings.

use crate::types::{BackupError, FileEntry, Listing};
use serde_json::Value;

/// Parse raw `lsjson` output into a validated `Listing`.
///
/// Each record must carry a non-empty string `Path`, a non-negative
/// integer `Size`, and a string `ModTime`; anything else is rejected with
/// `MalformedListing` naming the offending record. Duplicate paths keep
/// the later record.
pub fn parse_listing(raw: &str) -> Result<Listing, BackupError> {
    let records: Vec<Value> =
        serde_json::from_str(raw).map_err(|err| BackupError::MalformedListing {
            path: "<listing>".to_string(),
            reason: format!("output is not a JSON array: {err}"),
        })?;

    let mut listing = Listing::new();
    for (index, record) in records.iter().enumerate() {
        listing.insert(validate_record(record, index)?);
    }
    Ok(listing)
}

fn validate_record(record: &Value, index: usize) -> Result<FileEntry, BackupError> {
    // Use the path for error context whenever one is present, the record
    // index otherwise.
    let label = || {
        record
            .get("Path")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("<entry {index}>"))
    };
    let malformed = |reason: String| BackupError::MalformedListing {
        path: label(),
        reason,
    };

    let object = record
        .as_object()
        .ok_or_else(|| malformed("record is not an object".to_string()))?;

    let path = object
        .get("Path")
        .ok_or_else(|| malformed("missing Path".to_string()))?
        .as_str()
        .ok_or_else(|| malformed("Path is not a string".to_string()))?;
    if path.is_empty() {
        return Err(malformed("Path is empty".to_string()));
    }

    let size_value = object
        .get("Size")
        .ok_or_else(|| malformed("missing Size".to_string()))?;
    let size = size_value
        .as_u64()
        .ok_or_else(|| malformed(format!("Size is not a non-negative integer: {size_value}")))?;

    let modified = object
        .get("ModTime")
        .ok_or_else(|| malformed("missing ModTime".to_string()))?
        .as_str()
        .ok_or_else(|| malformed("ModTime is not a string".to_string()))?;

    Ok(FileEntry::new(path, size, modified))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_well_formed_listing() {
        let raw = r#"[
            {"Path": "docs/a.txt", "Size": 120, "ModTime": "2024-05-01T10:00:00Z", "IsDir": false},
            {"Path": "b.bin", "Size": 0, "ModTime": "2024-05-02T11:30:00Z"}
        ]"#;

        let listing = parse_listing(raw).expect("parse");

        assert_eq!(listing.len(), 2);
        let entry = listing.get("docs/a.txt").expect("entry");
        assert_eq!(entry.size, 120);
        assert_eq!(entry.modified, "2024-05-01T10:00:00Z");
        assert_eq!(listing.total_size, 120);
    }

    #[test]
    fn test_empty_array_is_empty_listing() {
        let listing = parse_listing("[]").expect("parse");
        assert!(listing.is_empty());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let raw = r#"[{"Path": "a", "Size": 1, "ModTime": "T", "MimeType": "text/plain", "Hashes": {}}]"#;
        let listing = parse_listing(raw).expect("parse");
        assert!(listing.contains("a"));
    }

    #[test]
    fn test_duplicate_paths_keep_later_record() {
        let raw = r#"[
            {"Path": "a", "Size": 1, "ModTime": "T1"},
            {"Path": "a", "Size": 9, "ModTime": "T2"}
        ]"#;

        let listing = parse_listing(raw).expect("parse");

        assert_eq!(listing.len(), 1);
        assert_eq!(listing.get("a").expect("entry").size, 9);
    }

    #[test]
    fn test_non_array_output_is_rejected() {
        let err = parse_listing("{\"Path\": \"a\"}").unwrap_err();
        assert!(matches!(err, BackupError::MalformedListing { .. }));
    }

    #[test]
    fn test_missing_size_names_path() {
        let raw = r#"[{"Path": "docs/broken.bin", "ModTime": "T"}]"#;
        let err = parse_listing(raw).unwrap_err();

        match err {
            BackupError::MalformedListing { path, reason } => {
                assert_eq!(path, "docs/broken.bin");
                assert!(reason.contains("Size"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_size_is_rejected() {
        let raw = r#"[{"Path": "shrunk", "Size": -5, "ModTime": "T"}]"#;
        let err = parse_listing(raw).unwrap_err();

        match err {
            BackupError::MalformedListing { path, reason } => {
                assert_eq!(path, "shrunk");
                assert!(reason.contains("non-negative"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_string_modtime_is_rejected() {
        let raw = r#"[{"Path": "a", "Size": 1, "ModTime": 1714556400}]"#;
        let err = parse_listing(raw).unwrap_err();
        assert!(err.to_string().contains("ModTime"));
    }

    #[test]
    fn test_missing_path_uses_record_index() {
        let raw = r#"[{"Size": 1, "ModTime": "T"}]"#;
        let err = parse_listing(raw).unwrap_err();

        match err {
            BackupError::MalformedListing { path, .. } => assert_eq!(path, "<entry 0>"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
