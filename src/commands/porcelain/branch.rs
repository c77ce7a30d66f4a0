use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::error::RepositoryError;
use std::io::Write;

impl Repository {
    /// Create a branch pointing at the current tip
    ///
    /// # Errors
    ///
    /// [`RepositoryError::EmptyHead`] when the current branch has no commit;
    /// [`RepositoryError::BranchAlreadyExists`] on a name collision.
    pub fn create_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let name = BranchName::try_parse(name.to_string())?;

        let tip = self
            .refs()
            .current_branch()
            .and_then(|branch| branch.last_commit().cloned())
            .ok_or(RepositoryError::EmptyHead)?;

        self.refs_mut().create_branch(name.clone(), Some(tip))?;

        writeln!(self.writer(), "Branch created: {}", name)?;
        Ok(())
    }
}
