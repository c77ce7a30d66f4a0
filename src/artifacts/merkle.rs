//! Merkle digest over staged snapshots
//!
//! The tree digester fixes the identity of a staged file set: identical
//! multisets of `(path, content)` always produce the same root digest,
//! regardless of staging order, while any path or content change produces a
//! different one.
//!
//! ## Digest format
//!
//! - Blob node: `sha1("blob " ∥ decimal(len) ∥ NUL ∥ content)`
//! - Tree node: `sha1("tree " ∥ concat(child.digest ∥ child.name))`, children
//!   sorted lexicographically by name
//!
//! The engine currently builds a *flat* tree: a single root whose children
//! are one blob per staged file. The node shape leaves room for a
//! path-partitioned tree without changing the commit-level contract.

use crate::artifacts::objects::sha1_hex;
use crate::artifacts::objects::snapshot::FileSnapshot;

/// Digest of an empty staging set
pub const EMPTY_TREE_DIGEST: &str = "empty_tree";

/// Root digest of a Merkle tree
///
/// Either a 40-character hex digest or the `"empty_tree"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeDigest(String);

impl TreeDigest {
    /// The digest of an empty staging set
    pub fn empty() -> Self {
        TreeDigest(EMPTY_TREE_DIGEST.to_string())
    }

    pub fn is_empty_tree(&self) -> bool {
        self.0 == EMPTY_TREE_DIGEST
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 10 characters, the abbreviation used by the history listing
    pub fn to_short_digest(&self) -> String {
        self.0.split_at(10).0.to_string()
    }
}

impl std::fmt::Display for TreeDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node of the Merkle tree
#[derive(Debug, Clone)]
enum MerkleNode {
    /// Leaf over a single staged file
    Blob { name: String, digest: String },
    /// Interior node over a sorted list of children
    Tree {
        name: String,
        digest: String,
        children: Vec<MerkleNode>,
    },
}

impl MerkleNode {
    fn blob(snapshot: &FileSnapshot) -> Self {
        let header = format!("blob {}", snapshot.content().len());
        let digest = sha1_hex(&[header.as_bytes(), &[0], snapshot.content().as_ref()]);

        MerkleNode::Blob {
            name: snapshot.path().to_string(),
            digest,
        }
    }

    fn tree(name: impl Into<String>, mut children: Vec<MerkleNode>) -> Self {
        children.sort_by(|a, b| a.name().cmp(b.name()));

        let mut preimage = b"tree ".to_vec();
        for child in &children {
            preimage.extend_from_slice(child.digest().as_bytes());
            preimage.extend_from_slice(child.name().as_bytes());
        }

        MerkleNode::Tree {
            name: name.into(),
            digest: sha1_hex(&[&preimage]),
            children,
        }
    }

    fn name(&self) -> &str {
        match self {
            MerkleNode::Blob { name, .. } | MerkleNode::Tree { name, .. } => name,
        }
    }

    fn digest(&self) -> &str {
        match self {
            MerkleNode::Blob { digest, .. } | MerkleNode::Tree { digest, .. } => digest,
        }
    }
}

/// Merkle tree over a staged file set
#[derive(Debug, Clone)]
pub struct MerkleTree {
    root: MerkleNode,
}

impl MerkleTree {
    /// Build the tree over the given snapshots
    ///
    /// Input order is irrelevant; children are sorted by path before the
    /// root digest is fixed.
    pub fn from_snapshots<'s>(snapshots: impl IntoIterator<Item = &'s FileSnapshot>) -> Self {
        let children = snapshots.into_iter().map(MerkleNode::blob).collect();

        MerkleTree {
            root: MerkleNode::tree("root", children),
        }
    }

    /// The root digest, or the empty-tree sentinel for an empty input
    pub fn root_digest(&self) -> TreeDigest {
        match &self.root {
            MerkleNode::Tree { children, .. } if children.is_empty() => TreeDigest::empty(),
            node => TreeDigest(node.digest().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn snapshots(specs: &[(&str, &str)]) -> Vec<FileSnapshot> {
        specs
            .iter()
            .map(|(path, content)| FileSnapshot::new(*path, content.as_bytes().to_vec()))
            .collect()
    }

    #[test]
    fn empty_staging_digests_to_sentinel() {
        let staged: Vec<FileSnapshot> = vec![];
        let tree = MerkleTree::from_snapshots(&staged);

        assert_eq!(tree.root_digest(), TreeDigest::empty());
        assert!(tree.root_digest().is_empty_tree());
    }

    #[test]
    fn root_digest_is_invariant_under_input_order() {
        let forward = snapshots(&[("x", "1"), ("y", "2"), ("z", "3")]);
        let backward = snapshots(&[("z", "3"), ("x", "1"), ("y", "2")]);

        let first = MerkleTree::from_snapshots(&forward).root_digest();
        let second = MerkleTree::from_snapshots(&backward).root_digest();

        assert_eq!(first, second);
    }

    #[rstest]
    #[case::content_change(&[("x", "1"), ("y", "2")], &[("x", "1"), ("y", "changed")])]
    #[case::path_change(&[("x", "1"), ("y", "2")], &[("x", "1"), ("z", "2")])]
    #[case::extra_file(&[("x", "1")], &[("x", "1"), ("y", "2")])]
    fn root_digest_is_sensitive_to_changes(
        #[case] left: &[(&str, &str)],
        #[case] right: &[(&str, &str)],
    ) {
        let left = snapshots(left);
        let right = snapshots(right);

        let first = MerkleTree::from_snapshots(&left).root_digest();
        let second = MerkleTree::from_snapshots(&right).root_digest();

        assert_ne!(first, second);
    }

    #[test]
    fn identical_stagings_digest_identically() {
        let files = snapshots(&[("a/b.txt", "alpha"), ("a/c.txt", "beta")]);

        let first = MerkleTree::from_snapshots(&files).root_digest();
        let second = MerkleTree::from_snapshots(&files).root_digest();

        assert_eq!(first, second);
        assert_eq!(first.to_short_digest().len(), 10);
    }
}
