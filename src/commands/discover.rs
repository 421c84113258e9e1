//! Discover command implementation
//!
//! Runs a full discovery pass and reports the resolved asset root, the
//! autocomplete pool size, and the variant corpus size. A miss is not an
//! error; the diagnostic trail explains what was tried.

use console::Style;

use crate::discovery::Discovery;
use crate::error::Result;

/// Run discover command
pub fn run(env_var: &str, root: Option<&str>, verbose: bool) -> Result<()> {
    let discovery = Discovery::run_with_progress(Some(env_var), root, true);

    // the full trail on a miss, or on request
    if verbose || discovery.root.is_none() {
        for line in &discovery.log {
            println!("{}", Style::new().dim().apply_to(line));
        }
        println!();
    }

    super::print_discovery_status(discovery.root.as_deref());

    if discovery.root.is_some() {
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Codes:"),
            discovery.pool.len()
        );
        println!(
            "  {} {} tokens across {} bases",
            Style::new().bold().apply_to("Variants:"),
            discovery.corpus.token_count(),
            discovery.corpus.base_count()
        );
    } else {
        println!("Autocomplete and variant picking will be empty until a root is found.");
    }

    Ok(())
}
