use crate::areas::repository::Repository;
use crate::artifacts::log::HistoryWalk;
use crate::artifacts::objects::commit::Commit;
use std::io::Write;

impl Repository {
    /// Print the commit history of the current branch
    ///
    /// Walks the graph depth-first from the tip and renders the collected
    /// walk in reverse, so shared ancestors print before the commits built
    /// on them and every commit appears exactly once.
    pub fn log(&self) -> anyhow::Result<()> {
        let Some(branch) = self.refs().current_branch() else {
            writeln!(self.writer(), "No history yet")?;
            return Ok(());
        };
        let Some(tip) = branch.last_commit() else {
            writeln!(self.writer(), "No history yet")?;
            return Ok(());
        };

        let history: Vec<&Commit> = HistoryWalk::new(self.objects(), Some(tip)).collect();

        writeln!(self.writer())?;
        writeln!(
            self.writer(),
            "===== Commit History for '{}' =====",
            branch.name()
        )?;

        for commit in history.iter().rev() {
            writeln!(self.writer(), "Commit: {}", commit.id())?;
            writeln!(self.writer(), "Author: {}", commit.author())?;
            writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
            writeln!(
                self.writer(),
                "Tree:   {}...",
                commit.tree().to_short_digest()
            )?;
            if commit.is_merge_commit()
                && let (Some(first), Some(second)) = (commit.parent(), commit.merge_parent())
            {
                writeln!(
                    self.writer(),
                    "Merge:  {} {}",
                    first.to_short_oid(),
                    second.to_short_oid()
                )?;
            }
            writeln!(self.writer())?;
            writeln!(self.writer(), "    {}", commit.message())?;
            writeln!(self.writer(), "------------------------------------------")?;
        }

        Ok(())
    }
}
