//! An in-memory version control engine
//!
//! Twig models Git's core object model without any on-disk repository
//! format: content-addressed file snapshots, an append-only commit DAG with
//! up to two parents per commit, named branches with a movable HEAD, a
//! staging area, a Merkle digest over staged content and a three-way merge
//! with textual conflict markers.
//!
//! The [`Repository`](areas::repository::Repository) facade is the entry
//! point; the only side effects outside process memory are the workspace
//! files written by `checkout` and `merge`.

pub mod areas;
pub mod artifacts;
pub mod commands;
