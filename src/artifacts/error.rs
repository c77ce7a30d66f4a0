//! Error kinds for repository operations
//!
//! [`RepositoryError`] is the typed failure surface of the façade. It uses
//! enum variants so callers can match on specific failure modes without
//! parsing error messages. Working-tree write failures are not listed here;
//! they propagate as `std::io::Error` through `anyhow` from the workspace.
//!
//! Merge conflicts are *not* errors: a conflicted merge completes
//! successfully with a non-empty conflict report and leaves the staging area
//! populated for manual resolution.

use thiserror::Error;

/// Errors returned by repository operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// A commit was requested with no staged files.
    #[error("Nothing to commit (staging area is empty)")]
    EmptyStaging,

    /// Branch creation was requested before any commit exists.
    #[error("Cannot create branch: no commits exist yet (HEAD is empty)")]
    EmptyHead,

    /// The referenced branch name does not exist.
    #[error("Branch not found: {name}")]
    BranchNotFound {
        /// The name that failed to resolve.
        name: String,
    },

    /// A branch with this name already exists.
    #[error("Branch already exists: {name}")]
    BranchAlreadyExists {
        /// The colliding name.
        name: String,
    },

    /// A head update was requested while no branch is checked out.
    #[error("HEAD is detached (no active branch)")]
    DetachedHead,
}
