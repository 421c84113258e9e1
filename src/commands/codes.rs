//! Codes command implementation
//!
//! Prints the discovered autocomplete pool, optionally filtered by a
//! case-insensitive substring.

use crate::cli::CodesArgs;
use crate::discovery::Discovery;
use crate::error::Result;

/// Run codes command
pub fn run(env_var: &str, root: Option<&str>, args: CodesArgs) -> Result<()> {
    // no progress bar: codes output is meant for piping
    let discovery = Discovery::run(Some(env_var), root);

    if discovery.root.is_none() {
        super::print_discovery_status(None);
        return Ok(());
    }

    let needle = args.filter.map(|f| f.to_lowercase());
    let matching: Vec<&String> = discovery
        .pool
        .iter()
        .filter(|code| {
            needle
                .as_ref()
                .is_none_or(|n| code.to_lowercase().contains(n))
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matching)?);
        return Ok(());
    }

    for code in &matching {
        println!("{code}");
    }
    if matching.is_empty() {
        eprintln!("No matching codes.");
    }
    Ok(())
}
