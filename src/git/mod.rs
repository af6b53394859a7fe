//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the tag operations
//! the workflow needs, allowing the real repository to be swapped for an
//! in-memory mock in tests.
//!
//! # Overview
//!
//! The primary abstraction is the [TagStore] trait. The concrete
//! implementations include:
//!
//! - [repository::GitRepository]: libgit2 for local tag access, the `git`
//!   binary (with a timeout) for remote operations
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! # Usage
//!
//! The workflow takes any `&impl TagStore`, so callers pass the store in
//! explicitly rather than relying on a global command runner.
//!
//! ```rust
//! # use tagit::git::TagStore;
//! # fn example<S: TagStore>(store: &S) -> tagit::Result<()> {
//! store.refresh_remote_tags("origin")?;
//! let tags = store.list_tags("s1v")?;
//! # let _ = tags;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::GitRepository;

use crate::error::Result;

/// Tag operations consumed by the tagging workflow
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// remote failures to [crate::error::TagitError::Remote], hung processes to
/// [crate::error::TagitError::Timeout] and tag creation failures to
/// [crate::error::TagitError::TagCreation].
pub trait TagStore {
    /// Fetch tag references from a remote
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    fn refresh_remote_tags(&self, remote: &str) -> Result<()>;

    /// List tag names starting with `prefix`
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Matching tag names, empty if there are none
    /// * `Err` - If the tags cannot be read
    fn list_tags(&self, prefix: &str) -> Result<Vec<String>>;

    /// Create a lightweight tag on the current HEAD commit
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists or HEAD cannot be resolved
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push a single tag to a remote
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    /// * `name` - Tag to push
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}
