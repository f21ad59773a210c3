//! The change classifier

use crate::types::{ChangeSet, ChangedEntry, DeletedEntry, Listing, NewEntry};

/// Classify the difference between a remote listing and a local one.
///
/// Partitions `paths(remote) ∪ paths(local)` into three disjoint
/// categories, dropping the unchanged fourth:
///
/// 1. **new** - present on the remote, absent locally
/// 2. **changed** - present on both, differing in size or timestamp
/// 3. **deleted** - present locally, absent on the remote
///
/// Equality is strictly `(size, modified)` equality. No content is read or
/// transferred; two files whose metadata happens to match are reported
/// unchanged even if their bytes differ.
///
/// Pure function of its two inputs; never fails on well-formed listings.
/// Output sequences inherit the listings' path order.
///
/// # Example
/// ```
/// use driveback::diff::classify;
/// use driveback::types::{FileEntry, Listing};
///
/// let remote = Listing::from_entries(vec![FileEntry::new("a.txt", 10, "T1")]);
/// let local = Listing::new();
///
/// let changes = classify(&remote, &local);
/// assert_eq!(changes.new.len(), 1);
/// assert_eq!(changes.total_new_size, 10);
/// ```
pub fn classify(remote: &Listing, local: &Listing) -> ChangeSet {
    let mut changes = ChangeSet::new();

    for (path, remote_entry) in remote.iter() {
        match local.get(path) {
            None => {
                changes.add_new(NewEntry {
                    path: path.clone(),
                    size: remote_entry.size,
                    modified: remote_entry.modified.clone(),
                });
            }
            Some(local_entry) => {
                if remote_entry.size != local_entry.size
                    || remote_entry.modified != local_entry.modified
                {
                    changes.add_changed(ChangedEntry {
                        path: path.clone(),
                        old_size: local_entry.size,
                        new_size: remote_entry.size,
                        size_diff: remote_entry.size as i64 - local_entry.size as i64,
                        modified: remote_entry.modified.clone(),
                    });
                }
            }
        }
    }

    for (path, local_entry) in local.iter() {
        if !remote.contains(path) {
            changes.add_deleted(DeletedEntry {
                path: path.clone(),
                size: local_entry.size,
                modified: local_entry.modified.clone(),
            });
        }
    }

    changes
}
