use crate::areas::repository::Repository;
use crate::artifacts::objects::snapshot::FileSnapshot;
use bytes::Bytes;
use std::io::Write;

impl Repository {
    /// Stage a snapshot of `path`, replacing any previously staged version
    pub fn add(&mut self, path: &str, content: impl Into<Bytes>) -> anyhow::Result<()> {
        let file = FileSnapshot::new(path, content);
        self.staging_mut().add_file(file);

        writeln!(self.writer(), "File staged: {}", path)?;
        Ok(())
    }
}
