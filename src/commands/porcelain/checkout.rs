use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use std::io::Write;

impl Repository {
    /// Switch to a branch and materialize its tip into the working tree
    ///
    /// Workspace files are overwritten without confirmation. Checking out an
    /// unborn branch only moves HEAD.
    ///
    /// # Errors
    ///
    /// [`RepositoryError::BranchNotFound`](crate::artifacts::error::RepositoryError::BranchNotFound)
    /// when no such branch exists.
    pub fn checkout(&mut self, name: &str) -> anyhow::Result<()> {
        let name = BranchName::try_parse(name.to_string())?;
        self.refs_mut().checkout_branch(&name)?;

        writeln!(self.writer(), "Switched to branch '{}'", name)?;

        let tip = self
            .refs()
            .current_branch()
            .and_then(|branch| branch.last_commit().cloned());

        if let Some(tip) = tip {
            let commit = self
                .objects()
                .commit(&tip)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("branch tip {} missing from object store", tip))?;

            self.restore_files(&commit)?;
            writeln!(
                self.writer(),
                "Files restored from commit {}",
                tip.to_short_oid()
            )?;
        }

        Ok(())
    }

    /// Write every file of `commit` into the working tree
    ///
    /// Lightweight entries are resolved through the blob store; one line is
    /// reported per restored file.
    pub(crate) fn restore_files(&self, commit: &Commit) -> anyhow::Result<()> {
        for file in commit.files() {
            let content = self.objects().blob_content(file.hash());
            self.workspace().save_file(file.path(), &content)?;
            writeln!(self.writer(), "Restored: {}", file.path())?;
        }

        Ok(())
    }
}
