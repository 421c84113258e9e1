//! Command implementations for the vsrecipe CLI

pub mod codes;
pub mod completions;
pub mod discover;
pub mod edit;
pub mod export;
pub mod variants;

use std::path::Path;

use console::Style;

/// Print the one-line discovery status the way every command reports it
pub fn print_discovery_status(root: Option<&Path>) {
    match root {
        Some(root) => println!(
            "{} {}",
            Style::new().bold().apply_to("Discovery:"),
            Style::new().green().apply_to(root.display())
        ),
        None => println!(
            "{} {}",
            Style::new().bold().apply_to("Discovery:"),
            Style::new().yellow().apply_to("not found")
        ),
    }
}
