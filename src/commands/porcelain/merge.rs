use crate::areas::repository::{MERGE_AUTHOR, Repository};
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::error::RepositoryError;
use crate::artifacts::merge::base_finder::MergeBaseFinder;
use crate::artifacts::merge::engine::{MergeConflict, merge_commits};
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

/// Outcome of a merge operation
///
/// Conflicts are a successful completion, not an error: the merge result is
/// staged and written to the working tree, and resolution happens through
/// subsequent `add` + `commit`.
#[derive(Debug, PartialEq, Eq)]
pub enum MergeStatus {
    /// One of the branches has no commit yet
    NothingToMerge,
    /// Both tips are the same commit
    AlreadyUpToDate,
    /// Clean merge; carries the new merge commit's id
    Merged(ObjectId),
    /// Conflicted merge; staging holds the result for manual resolution
    Conflicted(Vec<MergeConflict>),
}

impl Repository {
    /// Merge `branch_name` into the current branch
    ///
    /// Runs the three-way decision table against the merge base, stages the
    /// result and materializes it into the working tree. A clean merge
    /// auto-commits with both tips as parents; a conflicted one reports and
    /// leaves staging populated.
    ///
    /// # Errors
    ///
    /// [`RepositoryError::BranchNotFound`] when `branch_name` is unknown.
    pub fn merge(&mut self, branch_name: &str) -> anyhow::Result<MergeStatus> {
        let name = BranchName::try_parse(branch_name.to_string())?;

        let theirs_tip = self
            .refs()
            .branch(&name)
            .ok_or_else(|| RepositoryError::BranchNotFound {
                name: name.to_string(),
            })?
            .last_commit()
            .cloned();
        let ours_tip = self
            .refs()
            .current_branch()
            .and_then(|branch| branch.last_commit().cloned());

        let (Some(ours_tip), Some(theirs_tip)) = (ours_tip, theirs_tip) else {
            writeln!(self.writer(), "Nothing to merge.")?;
            return Ok(MergeStatus::NothingToMerge);
        };

        if ours_tip == theirs_tip {
            writeln!(self.writer(), "Already up to date.")?;
            return Ok(MergeStatus::AlreadyUpToDate);
        }

        writeln!(
            self.writer(),
            "Merging {} into {}...",
            name,
            self.current_branch_name()
        )?;

        let merged = {
            let objects = self.objects();

            let base_oid = MergeBaseFinder::new(|oid| objects.slim_commit(oid))
                .find_merge_base(&ours_tip, &theirs_tip);
            let base = base_oid.as_ref().and_then(|oid| objects.commit(oid));

            let ours = objects
                .commit(&ours_tip)
                .ok_or_else(|| anyhow::anyhow!("branch tip {} missing from object store", ours_tip))?;
            let theirs = objects.commit(&theirs_tip).ok_or_else(|| {
                anyhow::anyhow!("branch tip {} missing from object store", theirs_tip)
            })?;

            merge_commits(ours, theirs, base, objects)
        };

        self.staging_mut().clear();
        for file in &merged.files {
            self.staging_mut().add_file(file.clone());

            // Lightweight entries carry no content; look it up by hash
            let content = if file.content().is_empty() {
                self.objects().blob_content(file.hash())
            } else {
                file.content().clone()
            };
            self.workspace().save_file(file.path(), &content)?;
            writeln!(self.writer(), "Restored: {}", file.path())?;
        }

        if merged.is_clean() {
            let message = format!("Merge branch '{}'", name);
            let oid = self.write_commit(&message, MERGE_AUTHOR, vec![ours_tip, theirs_tip])?;

            writeln!(self.writer(), "Merge successful.")?;
            Ok(MergeStatus::Merged(oid))
        } else {
            writeln!(self.writer(), "MERGE CONFLICT! Fix conflicts manually.")?;
            for conflict in &merged.conflicts {
                writeln!(self.writer(), "{}", conflict)?;
            }

            Ok(MergeStatus::Conflicted(merged.conflicts))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::branch::branch_name::BranchName;
    use pretty_assertions::assert_eq;

    fn repository() -> Repository {
        let root = std::env::temp_dir().join(format!("twig-merge-unit-{}", std::process::id()));
        Repository::new(root, Box::new(std::io::sink())).expect("repository")
    }

    #[test]
    fn merging_an_unborn_branch_is_a_noop() {
        let mut repo = repository();
        repo.add("a.txt", "A").unwrap();
        repo.commit("init", "alice").unwrap();

        // An unborn branch is not reachable through create_branch; wire one
        // up at the refs level to exercise the guard.
        let name = BranchName::try_parse("unborn".to_string()).unwrap();
        repo.refs_mut().create_branch(name, None).unwrap();

        let status = repo.merge("unborn").unwrap();
        assert_eq!(status, MergeStatus::NothingToMerge);
        assert_eq!(repo.objects().commit_count(), 1);
    }

    #[test]
    fn merging_an_unknown_branch_fails() {
        let mut repo = repository();

        let err = repo.merge("ghost").unwrap_err();
        assert_eq!(
            err.downcast::<RepositoryError>().unwrap(),
            RepositoryError::BranchNotFound {
                name: "ghost".to_string()
            }
        );
    }
}
