//! File snapshots
//!
//! A snapshot captures a tracked file at a point in time: its path, its
//! content bytes and a content-addressed hash over both. Two snapshots are
//! considered equal when their hashes are equal.
//!
//! Commits do not carry file contents inline; they store the *lightweight*
//! form of a snapshot (path and hash with empty content) and resolve the
//! bytes through the blob store on demand.

use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;

/// A content-addressed file snapshot
///
/// The hash is a digest of `content ∥ path`, so two files with the same
/// content but different paths hash differently.
#[derive(Debug, Clone, Eq)]
pub struct FileSnapshot {
    path: String,
    content: Bytes,
    hash: ObjectId,
}

impl FileSnapshot {
    /// Create a snapshot of `path` with the given content
    ///
    /// The hash is computed eagerly and never changes afterwards.
    pub fn new(path: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let path = path.into();
        let content = content.into();
        let hash = ObjectId::digest(&[content.as_ref(), path.as_bytes()]);

        FileSnapshot {
            path,
            content,
            hash,
        }
    }

    /// Create a lightweight snapshot carrying only path and hash
    ///
    /// This is the form persisted inside commits; the content lives in the
    /// blob store under `hash`.
    pub fn lightweight(path: impl Into<String>, hash: ObjectId) -> Self {
        FileSnapshot {
            path: path.into(),
            content: Bytes::new(),
            hash,
        }
    }

    /// Get the lightweight form of this snapshot
    pub fn to_lightweight(&self) -> Self {
        Self::lightweight(self.path.clone(), self.hash.clone())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn hash(&self) -> &ObjectId {
        &self.hash
    }
}

impl PartialEq for FileSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hash_is_deterministic() {
        let first = FileSnapshot::new("a.txt", "content");
        let second = FileSnapshot::new("a.txt", "content");

        assert_eq!(first.hash(), second.hash());
        assert_eq!(first, second);
    }

    #[test]
    fn hash_depends_on_path_as_well_as_content() {
        let first = FileSnapshot::new("a.txt", "content");
        let second = FileSnapshot::new("b.txt", "content");
        let third = FileSnapshot::new("a.txt", "other content");

        assert_ne!(first.hash(), second.hash());
        assert_ne!(first.hash(), third.hash());
    }

    #[test]
    fn lightweight_form_keeps_path_and_hash_only() {
        let full = FileSnapshot::new("src/lib.rs", "pub fn answer() {}");
        let light = full.to_lightweight();

        assert_eq!(light.path(), full.path());
        assert_eq!(light.hash(), full.hash());
        assert!(light.content().is_empty());
        assert_eq!(light, full);
    }
}
