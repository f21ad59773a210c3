//! ChangeSet - the classified result of one scan

/// A file present on the remote but absent locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub path: String,
    pub size: u64,
    pub modified: String,
}

/// A file present on both sides whose size or timestamp differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedEntry {
    pub path: String,
    pub old_size: u64,
    pub new_size: u64,
    /// `new_size - old_size`; negative when the file shrank
    pub size_diff: i64,
    pub modified: String,
}

/// A file present locally but absent on the remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedEntry {
    pub path: String,
    pub size: u64,
    pub modified: String,
}

/// The result of comparing a remote listing against a local one.
///
/// Constructed once per scan and immutable afterwards. The three sequences
/// are pairwise disjoint and path-ordered. Unchanged files are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangeSet {
    pub new: Vec<NewEntry>,
    pub changed: Vec<ChangedEntry>,
    pub deleted: Vec<DeletedEntry>,

    /// Sum of sizes over `new`
    pub total_new_size: u64,

    /// Sum of sizes over `deleted`
    pub total_deleted_size: u64,
}

impl ChangeSet {
    /// Create a new empty ChangeSet
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new file and update the running total.
    pub fn add_new(&mut self, entry: NewEntry) {
        self.total_new_size += entry.size;
        self.new.push(entry);
    }

    /// Record a changed file.
    pub fn add_changed(&mut self, entry: ChangedEntry) {
        self.changed.push(entry);
    }

    /// Record a deleted file and update the running total.
    pub fn add_deleted(&mut self, entry: DeletedEntry) {
        self.total_deleted_size += entry.size;
        self.deleted.push(entry);
    }

    /// Total number of classified entries across all categories
    pub fn total_changes(&self) -> usize {
        self.new.len() + self.changed.len() + self.deleted.len()
    }

    /// Check whether the scan found anything to do
    pub fn is_empty(&self) -> bool {
        self.total_changes() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_changeset() {
        let changes = ChangeSet::new();

        assert!(changes.is_empty());
        assert_eq!(changes.total_changes(), 0);
        assert_eq!(changes.total_new_size, 0);
        assert_eq!(changes.total_deleted_size, 0);
    }

    #[test]
    fn test_add_new_accumulates_total() {
        let mut changes = ChangeSet::new();
        changes.add_new(NewEntry {
            path: "a.txt".to_string(),
            size: 100,
            modified: "T1".to_string(),
        });
        changes.add_new(NewEntry {
            path: "b.txt".to_string(),
            size: 50,
            modified: "T1".to_string(),
        });

        assert_eq!(changes.new.len(), 2);
        assert_eq!(changes.total_new_size, 150);
        assert_eq!(changes.total_deleted_size, 0);
    }

    #[test]
    fn test_add_deleted_accumulates_total() {
        let mut changes = ChangeSet::new();
        changes.add_deleted(DeletedEntry {
            path: "gone.txt".to_string(),
            size: 77,
            modified: "T1".to_string(),
        });

        assert_eq!(changes.deleted.len(), 1);
        assert_eq!(changes.total_deleted_size, 77);
    }

    #[test]
    fn test_changed_does_not_touch_totals() {
        let mut changes = ChangeSet::new();
        changes.add_changed(ChangedEntry {
            path: "doc.txt".to_string(),
            old_size: 10,
            new_size: 30,
            size_diff: 20,
            modified: "T2".to_string(),
        });

        assert_eq!(changes.total_changes(), 1);
        assert_eq!(changes.total_new_size, 0);
        assert_eq!(changes.total_deleted_size, 0);
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_totals_match_sequence_sums() {
        let mut changes = ChangeSet::new();
        for (i, size) in [10u64, 20, 30].iter().enumerate() {
            changes.add_new(NewEntry {
                path: format!("new{i}.txt"),
                size: *size,
                modified: "T".to_string(),
            });
        }
        changes.add_deleted(DeletedEntry {
            path: "old.txt".to_string(),
            size: 5,
            modified: "T".to_string(),
        });

        let new_sum: u64 = changes.new.iter().map(|e| e.size).sum();
        let deleted_sum: u64 = changes.deleted.iter().map(|e| e.size).sum();
        assert_eq!(changes.total_new_size, new_sum);
        assert_eq!(changes.total_deleted_size, deleted_sum);
    }
}
