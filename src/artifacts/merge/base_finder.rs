//! Merge base discovery
//!
//! Finds a lowest common ancestor of two commits, the base of a three-way
//! merge.
//!
//! ## Algorithm
//!
//! 1. Equal ids short-circuit: a commit is its own merge base.
//! 2. Breadth-first over parent edges from `ours`, recording every reachable
//!    id into an ancestor set.
//! 3. Breadth-first from `theirs`; the first dequeued commit whose id is in
//!    the ancestor set is the merge base.
//! 4. No hit means the histories are independent and there is no base.
//!
//! For criss-cross histories with several candidate ancestors this picks one
//! of them deterministically (the first encountered from `theirs`); the
//! engine does not recursively merge candidate bases, which can surface
//! conflicts Git would auto-resolve. That trade-off is intentional.
//!
//! The finder loads commits through a caller-supplied closure, so it works
//! against any storage backend that can produce a [`SlimCommit`] per id.

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashSet, VecDeque};

/// Finds the merge base of two commits
///
/// # Type Parameters
///
/// * `CommitLoaderFn` - Function that takes a commit id and returns its
///   [`SlimCommit`], or `None` for ids the backend does not know. Unknown
///   ids are treated as parentless, which keeps the traversal robust
///   against malformed input.
pub struct MergeBaseFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> Option<SlimCommit>,
{
    /// Function to load commit data for any given commit ID
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> MergeBaseFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> Option<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Find a lowest common ancestor of `ours` and `theirs`
    ///
    /// # Returns
    ///
    /// * `Some(id)` - a commit reachable from both inputs
    /// * `None` - the histories share no ancestor
    pub fn find_merge_base(&self, ours: &ObjectId, theirs: &ObjectId) -> Option<ObjectId> {
        if ours == theirs {
            return Some(ours.clone());
        }

        let ancestors = self.collect_ancestors(ours);

        // First hit of the breadth-first walk from `theirs` is the base
        let mut visited = HashSet::from([theirs.clone()]);
        let mut queue = VecDeque::from([theirs.clone()]);

        while let Some(current) = queue.pop_front() {
            if ancestors.contains(&current) {
                return Some(current);
            }

            for parent in self.parents_of(&current) {
                if visited.insert(parent.clone()) {
                    queue.push_back(parent);
                }
            }
        }

        None
    }

    /// Every commit reachable from `start`, including `start` itself
    fn collect_ancestors(&self, start: &ObjectId) -> HashSet<ObjectId> {
        let mut ancestors = HashSet::from([start.clone()]);
        let mut queue = VecDeque::from([start.clone()]);

        while let Some(current) = queue.pop_front() {
            for parent in self.parents_of(&current) {
                if ancestors.insert(parent.clone()) {
                    queue.push_back(parent);
                }
            }
        }

        ancestors
    }

    fn parents_of(&self, id: &ObjectId) -> Vec<ObjectId> {
        (self.commit_loader)(id)
            .map(|slim| slim.parents)
            .unwrap_or_default()
    }
}
