//! Domain logic - pure tag naming and versioning rules independent of git operations

pub mod environment;
pub mod tag;
pub mod version;

pub use environment::Environment;
pub use tag::{select_latest, Tag, TagOrdering};
pub use version::{BumpKind, Version};
