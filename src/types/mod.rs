//! Core type definitions for driveback

mod changeset;
mod entry;
mod error;

pub use changeset::{ChangeSet, ChangedEntry, DeletedEntry, NewEntry};
pub use entry::{FileEntry, Listing};
pub use error::BackupError;
