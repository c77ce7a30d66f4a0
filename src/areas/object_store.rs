//! Object store
//!
//! Owns the entire commit DAG and the blob content pool. Commits and blobs
//! are immortal: once added they are never mutated or removed, so borrowed
//! references handed out by the accessors stay valid for the store's
//! lifetime. Branches and traversals refer to commits by id, never by
//! owning pointers.
//!
//! ## Failure model
//!
//! Lookups signal absence through `Option` (commits) or an empty byte
//! sequence (blobs); there are no recoverable errors. Re-adding an existing
//! commit id is a programming error and asserts.

use crate::artifacts::objects::commit::{Commit, SlimCommit};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::HashMap;

/// Content-addressed storage for commits and blobs
#[derive(Debug, Default)]
pub struct ObjectStore {
    /// Commit DAG, keyed by commit id
    commits: HashMap<ObjectId, Commit>,
    /// Blob content pool, keyed by snapshot hash
    blobs: HashMap<ObjectId, Bytes>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a commit under its id
    ///
    /// # Panics
    ///
    /// Panics if a commit with the same id is already stored; commit ids
    /// include the creation time, so a collision means a caller bug.
    pub fn add_commit(&mut self, commit: Commit) {
        assert!(
            !self.commits.contains_key(commit.id()),
            "duplicate commit id: {}",
            commit.id()
        );

        self.commits.insert(commit.id().clone(), commit);
    }

    /// Look up a commit by id
    pub fn commit(&self, id: &ObjectId) -> Option<&Commit> {
        self.commits.get(id)
    }

    pub fn contains_commit(&self, id: &ObjectId) -> bool {
        self.commits.contains_key(id)
    }

    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    /// The traversal view of a stored commit
    pub fn slim_commit(&self, id: &ObjectId) -> Option<SlimCommit> {
        self.commits.get(id).map(Commit::to_slim)
    }

    /// Store blob content under its hash
    ///
    /// Idempotent: when the hash is already present the existing content is
    /// authoritative and the write is a no-op.
    pub fn save_blob(&mut self, hash: &ObjectId, content: Bytes) {
        self.blobs.entry(hash.clone()).or_insert(content);
    }

    /// Resolve blob content by hash
    ///
    /// Absence is not an error; callers treat an empty result as "not yet
    /// materialized".
    pub fn blob_content(&self, hash: &ObjectId) -> Bytes {
        self.blobs.get(hash).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::merkle::TreeDigest;
    use chrono::{FixedOffset, TimeZone};
    use pretty_assertions::assert_eq;

    fn sample_commit(message: &str) -> Commit {
        let timestamp = FixedOffset::east_opt(0)
            .unwrap()
            .timestamp_opt(1_700_000_000, 0)
            .unwrap();
        Commit::new(
            message.to_string(),
            "tester".to_string(),
            timestamp,
            TreeDigest::empty(),
            vec![],
            vec![],
        )
    }

    #[test]
    fn stored_commits_are_found_by_id() {
        let mut store = ObjectStore::new();
        let commit = sample_commit("first");
        let oid = commit.id().clone();

        store.add_commit(commit);

        assert!(store.contains_commit(&oid));
        assert_eq!(store.commit(&oid).unwrap().message(), "first");
        assert_eq!(store.commit_count(), 1);
    }

    #[test]
    fn absent_commit_returns_none() {
        let store = ObjectStore::new();
        let oid = ObjectId::digest(&[b"missing"]);

        assert!(store.commit(&oid).is_none());
        assert!(store.slim_commit(&oid).is_none());
    }

    #[test]
    #[should_panic(expected = "duplicate commit id")]
    fn duplicate_commit_id_panics() {
        let mut store = ObjectStore::new();

        store.add_commit(sample_commit("twice"));
        store.add_commit(sample_commit("twice"));
    }

    #[test]
    fn blob_writes_are_first_writer_wins() {
        let mut store = ObjectStore::new();
        let hash = ObjectId::digest(&[b"some file"]);

        store.save_blob(&hash, Bytes::from_static(b"original"));
        store.save_blob(&hash, Bytes::from_static(b"impostor"));

        assert_eq!(store.blob_content(&hash), Bytes::from_static(b"original"));
    }

    #[test]
    fn absent_blob_resolves_to_empty_content() {
        let store = ObjectStore::new();
        let hash = ObjectId::digest(&[b"nothing here"]);

        assert!(store.blob_content(&hash).is_empty());
    }
}
