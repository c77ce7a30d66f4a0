//! Commit objects
//!
//! Commits are immutable nodes of the history DAG. Each carries:
//! - A message, an author and a wall-clock timestamp
//! - The Merkle root digest over the committed file set
//! - The ordered list of lightweight file snapshots
//! - Up to two parent commit ids (two for merge commits)
//!
//! ## Identity
//!
//! The commit id is a digest of `(message, author, unix seconds, tree digest,
//! parent ids)`. Because the timestamp participates, two otherwise identical
//! commits created at different instants have different ids; the façade's
//! injectable clock exists so tests can rely on this.

use crate::artifacts::merkle::TreeDigest;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::snapshot::FileSnapshot;

/// Slim representation of a commit
///
/// Contains only the fields traversal algorithms need: the commit's own id
/// and its parent ids.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    /// The commit's object ID
    pub oid: ObjectId,
    /// The commit's parent object IDs
    pub parents: Vec<ObjectId>,
}

/// An immutable commit record
///
/// All fields are fixed at construction; the id is derived from the other
/// fields and never changes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Derived identifier
    id: ObjectId,
    /// Commit message
    message: String,
    /// Commit author
    author: String,
    /// Wall-clock creation time
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    /// Merkle root over the committed file set
    tree: TreeDigest,
    /// Lightweight snapshots, in staging order
    files: Vec<FileSnapshot>,
    /// Parent commit IDs (empty for a root commit, two for a merge commit)
    parents: Vec<ObjectId>,
}

impl Commit {
    /// Create a new commit
    ///
    /// # Arguments
    ///
    /// * `message` - Commit message
    /// * `author` - Commit author
    /// * `timestamp` - Creation time (participates in the id)
    /// * `tree` - Merkle root digest over `files`
    /// * `files` - Lightweight snapshots in staging order
    /// * `parents` - Parent ids; at most two
    pub fn new(
        message: String,
        author: String,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
        tree: TreeDigest,
        files: Vec<FileSnapshot>,
        parents: Vec<ObjectId>,
    ) -> Self {
        debug_assert!(parents.len() <= 2, "commits carry at most two parents");

        let id = Self::calculate_id(&message, &author, &timestamp, &tree, &parents);

        Commit {
            id,
            message,
            author,
            timestamp,
            tree,
            files,
            parents,
        }
    }

    fn calculate_id(
        message: &str,
        author: &str,
        timestamp: &chrono::DateTime<chrono::FixedOffset>,
        tree: &TreeDigest,
        parents: &[ObjectId],
    ) -> ObjectId {
        let seconds = timestamp.timestamp().to_string();

        let mut parts: Vec<&[u8]> = vec![
            message.as_bytes(),
            author.as_bytes(),
            seconds.as_bytes(),
            tree.as_str().as_bytes(),
        ];
        for parent in parents {
            parts.push(parent.as_ref().as_bytes());
        }

        ObjectId::digest(&parts)
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }

    pub fn tree(&self) -> &TreeDigest {
        &self.tree
    }

    pub fn files(&self) -> &[FileSnapshot] {
        &self.files
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// First parent, if any
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    /// Second parent; set only on merge commits
    pub fn merge_parent(&self) -> Option<&ObjectId> {
        self.parents.get(1)
    }

    /// A commit is a merge commit iff it has two parents
    pub fn is_merge_commit(&self) -> bool {
        self.parents.len() == 2
    }

    /// Format the timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    /// The traversal view of this commit
    pub fn to_slim(&self) -> SlimCommit {
        SlimCommit {
            oid: self.id.clone(),
            parents: self.parents.clone(),
        }
    }
}
