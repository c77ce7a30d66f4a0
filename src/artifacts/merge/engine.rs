//! Three-way merge engine
//!
//! Given the tips of two branches and their merge base, computes the merged
//! file set and a report of conflicts. The engine only decides; it performs
//! no commit and touches no state. The façade stages the result and decides
//! whether to auto-commit based on whether the report is empty.
//!
//! ## Decision table
//!
//! For each path, let `hB`/`hO`/`hT` be the hash in base/ours/theirs (absent
//! when the side lacks the path):
//!
//! - Same hash on both sides → take ours
//! - Added on one side only → take that side
//! - Changed on one side only (the other matches base) → take the change
//! - Deleted on one side, untouched on the other → drop the path
//! - Modified here, deleted there → Modify/Delete conflict, keep ours
//! - Deleted here, modified there → Delete/Modify conflict, keep theirs
//! - Modified differently on both sides → Content conflict; the result is a
//!   synthesized snapshot with `<<<<<<< HEAD` / `=======` / `>>>>>>>` markers
//!
//! Without a base (independent histories) every path reduces to the
//! added-on-one-side rows.
//!
//! Output order is stable: ours' files first in their commit order, then
//! theirs' files that ours does not carry.

use crate::areas::object_store::ObjectStore;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::snapshot::FileSnapshot;
use std::collections::HashMap;

/// Category of a merge conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// Both sides modified the file and neither matches the base
    Content,
    /// Ours modified the file, theirs deleted it
    ModifyDelete,
    /// Ours deleted the file, theirs modified it
    DeleteModify,
}

impl ConflictKind {
    fn label(&self) -> &'static str {
        match self {
            ConflictKind::Content => "Content",
            ConflictKind::ModifyDelete => "Modify/Delete",
            ConflictKind::DeleteModify => "Delete/Modify",
        }
    }
}

/// A single conflicted path in a merge result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConflict {
    pub kind: ConflictKind,
    pub path: String,
}

impl MergeConflict {
    fn new(kind: ConflictKind, path: &str) -> Self {
        MergeConflict {
            kind,
            path: path.to_string(),
        }
    }
}

impl std::fmt::Display for MergeConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CONFLICT ({}): {}", self.kind.label(), self.path)
    }
}

/// Result of running the decision table
#[derive(Debug, Default)]
pub struct MergedFiles {
    /// Merged snapshots, ours-order first
    pub files: Vec<FileSnapshot>,
    /// One entry per conflicted path
    pub conflicts: Vec<MergeConflict>,
}

impl MergedFiles {
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Merge `theirs` into `ours` relative to `base`
///
/// Snapshot contents for conflict markers are resolved through the object
/// store by hash. Files taken from `theirs` come through as lightweight
/// snapshots; callers materialize them by blob lookup.
pub fn merge_commits(
    ours: &Commit,
    theirs: &Commit,
    base: Option<&Commit>,
    objects: &ObjectStore,
) -> MergedFiles {
    let map_ours = file_map(Some(ours));
    let map_theirs = file_map(Some(theirs));
    let map_base = file_map(base);

    let mut result = MergedFiles::default();

    for file in ours.files() {
        let path = file.path();
        let hash_ours = file.hash();
        let hash_theirs = map_theirs.get(path).copied();
        let hash_base = map_base.get(path).copied();

        match hash_theirs {
            None => match hash_base {
                // Added on ours only
                None => result.files.push(file.clone()),
                // Untouched here, deleted there: accept the deletion
                Some(hash_base) if hash_base == hash_ours => {}
                // Modified here, deleted there
                Some(_) => {
                    result
                        .conflicts
                        .push(MergeConflict::new(ConflictKind::ModifyDelete, path));
                    result.files.push(file.clone());
                }
            },
            // Identical on both sides (including identical changes)
            Some(hash_theirs) if hash_theirs == hash_ours => result.files.push(file.clone()),
            Some(hash_theirs) => {
                if hash_base == Some(hash_ours) {
                    // Only theirs changed the file
                    result
                        .files
                        .push(FileSnapshot::lightweight(path, hash_theirs.clone()));
                } else if hash_base == Some(hash_theirs) {
                    // Only ours changed the file
                    result.files.push(file.clone());
                } else {
                    result
                        .conflicts
                        .push(MergeConflict::new(ConflictKind::Content, path));
                    result.files.push(conflict_snapshot(
                        path,
                        hash_ours,
                        hash_theirs,
                        theirs.id(),
                        objects,
                    ));
                }
            }
        }
    }

    for file in theirs.files() {
        let path = file.path();
        if map_ours.contains_key(path) {
            continue;
        }

        match map_base.get(path) {
            // Added on theirs only
            None => result.files.push(file.clone()),
            // Untouched there, deleted here: accept the deletion
            Some(hash_base) if *hash_base == file.hash() => {}
            // Deleted here, modified there
            Some(_) => {
                result
                    .conflicts
                    .push(MergeConflict::new(ConflictKind::DeleteModify, path));
                result.files.push(file.clone());
            }
        }
    }

    result
}

fn file_map(commit: Option<&Commit>) -> HashMap<&str, &ObjectId> {
    commit
        .map(|c| c.files().iter().map(|f| (f.path(), f.hash())).collect())
        .unwrap_or_default()
}

/// Synthesize the conflict-marker snapshot for a content conflict
fn conflict_snapshot(
    path: &str,
    hash_ours: &ObjectId,
    hash_theirs: &ObjectId,
    theirs_id: &ObjectId,
    objects: &ObjectStore,
) -> FileSnapshot {
    let content_ours = String::from_utf8_lossy(&objects.blob_content(hash_ours)).into_owned();
    let content_theirs = String::from_utf8_lossy(&objects.blob_content(hash_theirs)).into_owned();

    let conflict_text = format!(
        "<<<<<<< HEAD\n{}\n=======\n{}\n>>>>>>> {}\n",
        content_ours,
        content_theirs,
        theirs_id.to_short_oid()
    );

    FileSnapshot::new(path, conflict_text)
}
