pub mod branch_name;

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// A named, movable pointer to a commit
///
/// A branch with no commit is *unborn*: it exists (the initial `master` is
/// one) but cannot serve as a merge target or a branching point until its
/// first commit.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Branch {
    name: BranchName,
    last_commit: Option<ObjectId>,
}

impl Branch {
    pub fn name(&self) -> &BranchName {
        &self.name
    }

    pub fn last_commit(&self) -> Option<&ObjectId> {
        self.last_commit.as_ref()
    }

    /// Retarget the branch to a new tip
    pub fn set_last_commit(&mut self, commit_id: ObjectId) {
        self.last_commit = Some(commit_id);
    }
}
