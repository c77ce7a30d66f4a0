//! The staging→commit pipeline
//!
//! Shared by `commit` and the auto-commit path of `merge`:
//! 1. Fix the tree digest over the staged set
//! 2. Persist every staged blob (idempotent)
//! 3. Build lightweight file entries in staging order
//! 4. Create the commit and store it
//! 5. Retarget the current branch
//! 6. Clear staging

use crate::areas::repository::Repository;
use crate::artifacts::merkle::MerkleTree;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    pub(crate) fn write_commit(
        &mut self,
        message: &str,
        author: &str,
        parents: Vec<ObjectId>,
    ) -> anyhow::Result<ObjectId> {
        let tree = MerkleTree::from_snapshots(self.staging().files()).root_digest();

        let staged = self.staging().files().to_vec();
        let mut commit_files = Vec::with_capacity(staged.len());
        for file in &staged {
            self.objects_mut().save_blob(file.hash(), file.content().clone());
            commit_files.push(file.to_lightweight());
        }

        let commit = Commit::new(
            message.to_string(),
            author.to_string(),
            self.now(),
            tree,
            commit_files,
            parents,
        );
        let oid = commit.id().clone();

        self.objects_mut().add_commit(commit);
        self.refs_mut().update_head(oid.clone())?;
        self.staging_mut().clear();

        Ok(oid)
    }
}
