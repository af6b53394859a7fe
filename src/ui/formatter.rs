//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic. Styling goes through
//! `console`, which drops colors automatically when output is not a terminal.

use console::style;

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the tag change: "From: old -> To: new", or the initial tag.
///
/// # Arguments
/// * `old_tag` - Previous tag (None if this is the first tag for the prefix)
/// * `new_tag` - The new tag
pub fn display_proposed_tag(old_tag: Option<&str>, new_tag: &str) {
    match old_tag {
        Some(old) => {
            println!("\n{}", style("Tag Change:").bold());
            println!("  From: {}", style(old).red());
            println!("  To:   {}", style(new_tag).green());
        }
        None => {
            println!("\n{}", style("Initial Tag:").bold());
            println!("  New tag: {}", style(new_tag).green());
        }
    }
}

/// Display manual push instruction for a tag.
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    println!(
        "\n{} To push this tag later, run:\n  {}",
        style("→").yellow(),
        style(format!("git push {} {}", remote, tag)).cyan()
    );
}
