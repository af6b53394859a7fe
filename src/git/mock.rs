use crate::error::{Result, TagitError};
use crate::git::TagStore;
use std::cell::RefCell;

/// Mock repository for testing without actual git operations
///
/// Holds an in-memory tag list and records every call so tests can assert
/// which side effects the workflow performed.
#[derive(Debug, Default)]
pub struct MockRepository {
    tags: RefCell<Vec<String>>,
    created: RefCell<Vec<String>>,
    pushed: RefCell<Vec<(String, String)>>,
    refreshes: RefCell<Vec<String>>,
    refresh_failure: Option<MockFailure>,
    create_failure: Option<String>,
    push_failure: Option<MockFailure>,
}

/// Failure injected into a mocked remote operation
#[derive(Debug, Clone, PartialEq)]
pub enum MockFailure {
    Error(String),
    Timeout,
}

impl MockFailure {
    fn to_error(&self, operation: &'static str) -> TagitError {
        match self {
            MockFailure::Error(msg) => TagitError::remote(operation, msg.clone()),
            MockFailure::Timeout => TagitError::Timeout { operation, secs: 1 },
        }
    }
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock repository holding the given tags
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let repo = Self::new();
        repo.tags
            .borrow_mut()
            .extend(tags.into_iter().map(Into::into));
        repo
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.get_mut().push(name.into());
    }

    pub fn fail_refresh(mut self, failure: MockFailure) -> Self {
        self.refresh_failure = Some(failure);
        self
    }

    pub fn fail_create(mut self, msg: impl Into<String>) -> Self {
        self.create_failure = Some(msg.into());
        self
    }

    pub fn fail_push(mut self, failure: MockFailure) -> Self {
        self.push_failure = Some(failure);
        self
    }

    /// Tags created through [TagStore::create_tag]
    pub fn created_tags(&self) -> Vec<String> {
        self.created.borrow().clone()
    }

    /// (remote, tag) pairs pushed through [TagStore::push_tag]
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.pushed.borrow().clone()
    }

    /// Remotes refreshed through [TagStore::refresh_remote_tags]
    pub fn refreshed_remotes(&self) -> Vec<String> {
        self.refreshes.borrow().clone()
    }
}

impl TagStore for MockRepository {
    fn refresh_remote_tags(&self, remote: &str) -> Result<()> {
        self.refreshes.borrow_mut().push(remote.to_string());
        match &self.refresh_failure {
            Some(failure) => Err(failure.to_error("refresh")),
            None => Ok(()),
        }
    }

    fn list_tags(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .tags
            .borrow()
            .iter()
            .filter(|t| t.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        if let Some(msg) = &self.create_failure {
            return Err(TagitError::tag_creation(msg.clone()));
        }
        if self.tags.borrow().iter().any(|t| t == name) {
            return Err(TagitError::tag_creation(format!(
                "Tag '{}' already exists",
                name
            )));
        }
        self.tags.borrow_mut().push(name.to_string());
        self.created.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        if let Some(failure) = &self.push_failure {
            return Err(failure.to_error("push"));
        }
        self.pushed
            .borrow_mut()
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }
}
