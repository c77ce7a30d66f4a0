use crate::areas::repository::Repository;
use crate::artifacts::error::RepositoryError;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Commit the staged snapshots onto the current branch
    ///
    /// The new commit's first parent is the current branch tip (none for the
    /// first commit on an unborn branch). Staging is cleared on success.
    ///
    /// # Errors
    ///
    /// [`RepositoryError::EmptyStaging`] when nothing is staged.
    pub fn commit(&mut self, message: &str, author: &str) -> anyhow::Result<ObjectId> {
        if self.staging().is_empty() {
            return Err(RepositoryError::EmptyStaging.into());
        }

        let parents = self
            .refs()
            .current_branch()
            .and_then(|branch| branch.last_commit().cloned())
            .into_iter()
            .collect();

        let oid = self.write_commit(message, author, parents)?;

        writeln!(
            self.writer(),
            "[{} {}] {}",
            self.current_branch_name(),
            oid.to_short_oid(),
            message
        )?;

        Ok(oid)
    }
}
