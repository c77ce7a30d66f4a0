//! Commit history traversal
//!
//! [`HistoryWalk`] enumerates every commit reachable from a starting tip
//! along parent edges, depth-first with first-discovered semantics. A
//! visited set keyed by commit id guarantees that shared ancestors behind
//! merge commits are yielded exactly once. The history listing renders the
//! collected walk in reverse, oldest reachable commit first.

use crate::areas::object_store::ObjectStore;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

/// Depth-first iterator over the commits reachable from a tip
///
/// Uses an explicit stack; parent edges are followed first-parent first,
/// so for merge commits the second parent's subgraph is explored before
/// the first parent's.
pub struct HistoryWalk<'s> {
    objects: &'s ObjectStore,
    pending: Vec<&'s Commit>,
    visited: HashSet<ObjectId>,
}

impl<'s> HistoryWalk<'s> {
    /// Start a walk from `start`; a `None` start yields an empty walk
    pub fn new(objects: &'s ObjectStore, start: Option<&ObjectId>) -> Self {
        let mut pending = Vec::new();
        let mut visited = HashSet::new();

        if let Some(start) = start
            && let Some(commit) = objects.commit(start)
        {
            visited.insert(start.clone());
            pending.push(commit);
        }

        HistoryWalk {
            objects,
            pending,
            visited,
        }
    }
}

impl<'s> Iterator for HistoryWalk<'s> {
    type Item = &'s Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let commit = self.pending.pop()?;

        for parent_id in commit.parents() {
            if self.visited.insert(parent_id.clone())
                && let Some(parent) = self.objects.commit(parent_id)
            {
                self.pending.push(parent);
            }
        }

        Some(commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::merkle::TreeDigest;
    use chrono::{FixedOffset, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn add_commit(store: &mut ObjectStore, message: &str, parents: Vec<ObjectId>) -> ObjectId {
        let seconds = 1_640_995_200 + store.commit_count() as i64 * 3600;
        let timestamp = FixedOffset::east_opt(0)
            .unwrap()
            .timestamp_opt(seconds, 0)
            .unwrap();
        let commit = Commit::new(
            message.to_string(),
            "tester".to_string(),
            timestamp,
            TreeDigest::empty(),
            vec![],
            parents,
        );
        let oid = commit.id().clone();
        store.add_commit(commit);
        oid
    }

    #[fixture]
    fn diamond() -> (ObjectStore, Vec<ObjectId>) {
        //     A
        //    / \
        //   B   C
        //    \ /
        //     D (merge commit)
        let mut store = ObjectStore::new();
        let a = add_commit(&mut store, "a", vec![]);
        let b = add_commit(&mut store, "b", vec![a.clone()]);
        let c = add_commit(&mut store, "c", vec![a.clone()]);
        let d = add_commit(&mut store, "d", vec![b.clone(), c.clone()]);

        (store, vec![a, b, c, d])
    }

    #[test]
    fn null_start_yields_nothing() {
        let store = ObjectStore::new();

        assert_eq!(HistoryWalk::new(&store, None).count(), 0);
    }

    #[test]
    fn linear_history_walks_tip_to_root() {
        let mut store = ObjectStore::new();
        let a = add_commit(&mut store, "a", vec![]);
        let b = add_commit(&mut store, "b", vec![a.clone()]);
        let c = add_commit(&mut store, "c", vec![b.clone()]);

        let walked: Vec<ObjectId> = HistoryWalk::new(&store, Some(&c))
            .map(|commit| commit.id().clone())
            .collect();

        assert_eq!(walked, vec![c, b, a]);
    }

    #[rstest]
    fn shared_ancestor_behind_a_merge_appears_once(diamond: (ObjectStore, Vec<ObjectId>)) {
        let (store, oids) = diamond;
        let tip = &oids[3];

        let walked: Vec<ObjectId> = HistoryWalk::new(&store, Some(tip))
            .map(|commit| commit.id().clone())
            .collect();

        assert_eq!(walked.len(), 4);
        let unique: HashSet<_> = walked.iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[rstest]
    fn walk_covers_exactly_the_reachable_set(diamond: (ObjectStore, Vec<ObjectId>)) {
        let (mut store, oids) = diamond;
        // An unrelated root must stay out of the walk
        add_commit(&mut store, "stray", vec![]);

        let walked: HashSet<ObjectId> = HistoryWalk::new(&store, Some(&oids[3]))
            .map(|commit| commit.id().clone())
            .collect();

        assert_eq!(walked, oids.into_iter().collect());
    }
}
