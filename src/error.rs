use thiserror::Error;

/// Unified error type for tagit operations
#[derive(Error, Debug)]
pub enum TagitError {
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Invalid environment: {0}")]
    InvalidEnvironment(String),

    #[error("Invalid bump type: {0}")]
    InvalidBumpKind(String),

    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("Tag creation failed: {0}")]
    TagCreation(String),

    #[error("Remote {operation} failed: {message}")]
    Remote {
        operation: &'static str,
        message: String,
    },

    #[error("Remote {operation} timed out after {secs} seconds")]
    Timeout { operation: &'static str, secs: u64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tagit
pub type Result<T> = std::result::Result<T, TagitError>;

impl TagitError {
    /// Create a missing argument error
    pub fn missing_argument(msg: impl Into<String>) -> Self {
        TagitError::MissingArgument(msg.into())
    }

    /// Create an invalid environment error for the given token
    pub fn invalid_environment(token: impl Into<String>) -> Self {
        TagitError::InvalidEnvironment(token.into())
    }

    /// Create a version parsing error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        TagitError::Parse(msg.into())
    }

    /// Create a tag creation error with context
    pub fn tag_creation(msg: impl Into<String>) -> Self {
        TagitError::TagCreation(msg.into())
    }

    /// Create a remote error for a named operation ("refresh", "push")
    pub fn remote(operation: &'static str, msg: impl Into<String>) -> Self {
        TagitError::Remote {
            operation,
            message: msg.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagitError::Config(msg.into())
    }

    /// Whether the error came from the process hitting its timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, TagitError::Timeout { .. })
    }
}
