//! Branch references and HEAD
//!
//! This area manages the repository's named branches and the single
//! "current branch" selector that plays the role of HEAD. Branches point to
//! commits by id; retargeting a branch never touches the object store.
//!
//! ## Branch states
//!
//! - *Unborn*: the branch exists with no commit. Only the first commit moves
//!   it on; it cannot be branched from or merged.
//! - *Populated*: the branch has a tip and supports every operation.
//!
//! There is no detached state: checkout always selects a named branch, and
//! `update_head` without a current branch is a programming error surfaced as
//! [`RepositoryError::DetachedHead`].

use crate::artifacts::branch::Branch;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::error::RepositoryError;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;

/// Branch and HEAD manager
#[derive(Debug, Default)]
pub struct Refs {
    /// All branches, ordered by name
    branches: BTreeMap<BranchName, Branch>,
    /// The checked-out branch, if any
    current: Option<BranchName>,
}

impl Refs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a branch pointing at `target`
    ///
    /// # Errors
    ///
    /// [`RepositoryError::BranchAlreadyExists`] when the name is taken.
    pub fn create_branch(
        &mut self,
        name: BranchName,
        target: Option<ObjectId>,
    ) -> anyhow::Result<()> {
        if self.branches.contains_key(&name) {
            return Err(RepositoryError::BranchAlreadyExists {
                name: name.to_string(),
            }
            .into());
        }

        self.branches
            .insert(name.clone(), Branch::new(name, target));
        Ok(())
    }

    /// Make `name` the current branch
    ///
    /// # Errors
    ///
    /// [`RepositoryError::BranchNotFound`] when no such branch exists.
    pub fn checkout_branch(&mut self, name: &BranchName) -> anyhow::Result<()> {
        if !self.branches.contains_key(name) {
            return Err(RepositoryError::BranchNotFound {
                name: name.to_string(),
            }
            .into());
        }

        self.current = Some(name.clone());
        Ok(())
    }

    /// Retarget the current branch to `commit_id`
    ///
    /// # Errors
    ///
    /// [`RepositoryError::DetachedHead`] when no branch is checked out.
    pub fn update_head(&mut self, commit_id: ObjectId) -> anyhow::Result<()> {
        let current = self
            .current
            .as_ref()
            .ok_or(RepositoryError::DetachedHead)?;

        let branch = self
            .branches
            .get_mut(current)
            .ok_or(RepositoryError::DetachedHead)?;
        branch.set_last_commit(commit_id);
        Ok(())
    }

    /// The checked-out branch, if any
    pub fn current_branch(&self) -> Option<&Branch> {
        self.current.as_ref().and_then(|name| self.branches.get(name))
    }

    pub fn branch(&self, name: &BranchName) -> Option<&Branch> {
        self.branches.get(name)
    }

    /// All branches, ordered by name
    pub fn all_branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.values()
    }
}
