//! User interface module - formatting of status, warnings and results.

pub mod formatter;

use crate::cli::WorkflowResult;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_manual_push_instruction,
    display_proposed_tag, display_status, display_success,
};

/// Print the outcome of a tagging run, including any warnings collected.
pub fn display_workflow_result(result: &WorkflowResult, remote: &str) {
    for warning in &result.warnings {
        display_boundary_warning(warning);
    }

    display_proposed_tag(result.previous_tag.as_deref(), &result.tag);

    if !result.created {
        display_status(&format!("Dry run: would create and push {}", result.tag));
        return;
    }

    if result.pushed {
        display_success(&format!("New tag created: {}", result.tag));
    } else {
        display_success(&format!("Tag {} created locally", result.tag));
        display_manual_push_instruction(&result.tag, remote);
    }
}
