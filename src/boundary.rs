use std::fmt;

/// Non-fatal issues hit while computing or publishing a tag.
/// These are reported to the user but do not stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Refreshing tags from the remote failed; local tags were used
    RefreshFailed { remote: String, reason: String },
    /// Latest tag's version part is not a clean X.Y.Z; missing parts counted as 0
    UnparsableTag { tag: String, reason: String },
    /// Tag was created locally but could not be pushed
    PushFailed {
        tag: String,
        remote: String,
        reason: String,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::RefreshFailed { remote, reason } => {
                write!(
                    f,
                    "Could not fetch tags from remote '{}': {}. Using local tags.",
                    remote, reason
                )
            }
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::PushFailed {
                tag,
                remote,
                reason,
            } => {
                write!(
                    f,
                    "Tag '{}' was created locally but not pushed to '{}': {}",
                    tag, remote, reason
                )
            }
        }
    }
}
