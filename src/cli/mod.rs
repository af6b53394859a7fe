//! Command-line facing workflow

pub mod orchestration;

pub use orchestration::{TagWorkflow, WorkflowResult};
