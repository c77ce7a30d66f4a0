//! Repository abstraction and coordination
//!
//! This module provides the main `Repository` type that coordinates all
//! repository operations. It acts as a facade over the lower-level areas
//! (object store, staging, refs, workspace) and implements the high-level
//! commands in `crate::commands`.
//!
//! ## Architecture
//!
//! The repository owns:
//! - Object store: commits and blob content
//! - Staging area: pending snapshots for the next commit
//! - Refs: branches and the current-branch selector
//! - Workspace: the working-tree writer for checkout and merge
//!
//! plus an output writer for human-readable operation reports and an
//! injectable clock that fixes commit timestamps (and with them commit ids).
//!
//! ## Concurrency
//!
//! Single-threaded and run-to-completion: no operation suspends or
//! re-enters. Callers needing shared access wrap the whole repository in a
//! lock.

use crate::areas::object_store::ObjectStore;
use crate::areas::refs::Refs;
use crate::areas::staging::StagingArea;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use std::cell::{RefCell, RefMut};
use std::path::PathBuf;

/// Name of the branch created and checked out on repository creation
pub const DEFAULT_BRANCH_NAME: &str = "master";

/// Author recorded on automatic merge commits
pub const MERGE_AUTHOR: &str = "MergeUser";

/// Source of commit timestamps
pub type Clock = Box<dyn Fn() -> chrono::DateTime<chrono::FixedOffset>>;

/// In-memory repository
///
/// The main entry point for all engine operations.
///
/// ## Usage
///
/// ```ignore
/// let mut repo = Repository::new(PathBuf::from("."), Box::new(stdout()))?;
/// repo.add("file.txt", "content")?;
/// repo.commit("Initial commit", "alice")?;
/// ```
pub struct Repository {
    /// Object store (commits and blobs)
    objects: ObjectStore,
    /// Branch references and HEAD
    refs: Refs,
    /// Staging area
    staging: StagingArea,
    /// Working-tree writer
    workspace: Workspace,
    /// Output writer for operation reports
    writer: RefCell<Box<dyn std::io::Write>>,
    /// Timestamp source for new commits
    clock: Clock,
}

impl Repository {
    /// Create a repository rooted at `workspace_root`
    ///
    /// A `master` branch is created unborn and checked out; the first commit
    /// converts it into a root commit's branch.
    pub fn new(
        workspace_root: PathBuf,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let mut refs = Refs::new();
        let master = BranchName::try_parse(DEFAULT_BRANCH_NAME.to_string())?;
        refs.create_branch(master.clone(), None)?;
        refs.checkout_branch(&master)?;

        Ok(Repository {
            objects: ObjectStore::new(),
            refs,
            staging: StagingArea::new(),
            workspace: Workspace::new(workspace_root.into_boxed_path()),
            writer: RefCell::new(writer),
            clock: Box::new(|| chrono::Local::now().fixed_offset()),
        })
    }

    /// Replace the timestamp source; tests use this to pin commit ids
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn objects(&self) -> &ObjectStore {
        &self.objects
    }

    pub(crate) fn objects_mut(&mut self) -> &mut ObjectStore {
        &mut self.objects
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub(crate) fn refs_mut(&mut self) -> &mut Refs {
        &mut self.refs
    }

    pub fn staging(&self) -> &StagingArea {
        &self.staging
    }

    pub(crate) fn staging_mut(&mut self) -> &mut StagingArea {
        &mut self.staging
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// The current timestamp according to the repository clock
    pub(crate) fn now(&self) -> chrono::DateTime<chrono::FixedOffset> {
        (self.clock)()
    }

    /// Name of the checked-out branch, for prompts and reports
    pub fn current_branch_name(&self) -> String {
        self.refs
            .current_branch()
            .map(|branch| branch.name().to_string())
            .unwrap_or_else(|| "Detached".to_string())
    }
}
