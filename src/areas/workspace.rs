use anyhow::Context;
use std::path::Path;

/// Working-tree writer
///
/// Materializes restored files under the workspace root. Checkout and merge
/// overwrite workspace files without confirmation; the engine itself never
/// reads them back.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `content` to `file_path`, creating intermediate directories
    ///
    /// The file is truncated if it already exists.
    pub fn save_file(&self, file_path: &str, content: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directories for {:?}", full_path))?;
        }

        std::fs::write(&full_path, content)
            .with_context(|| format!("failed to write file at {:?}", full_path))?;

        Ok(())
    }
}
