//! Variants command implementation
//!
//! Shows the corpus tokens recorded for a wildcarded code's base key.

use console::Style;

use crate::cli::VariantsArgs;
use crate::discovery::{self, corpus};
use crate::error::Result;
use crate::recipe::wildcard;

/// Run variants command
pub fn run(env_var: &str, root: Option<&str>, args: VariantsArgs) -> Result<()> {
    // only the corpus is needed here, skip the autocomplete pool
    let (asset_root, _log) = discovery::resolve(Some(env_var), root);
    let Some(asset_root) = asset_root else {
        super::print_discovery_status(None);
        return Ok(());
    };
    let corpus = corpus::build_corpus(&asset_root);

    // accept both `game:ingot-*` and bare `game:ingot`
    let mut pattern = args.pattern.clone();
    if !pattern.ends_with('*') {
        pattern.push('*');
    }
    let Some(key) = wildcard::variant_key(&pattern) else {
        eprintln!("Not a wildcardable pattern: {}", args.pattern);
        return Ok(());
    };

    if args.json {
        let tokens = corpus.get(&key).cloned().unwrap_or_default();
        let map = std::collections::BTreeMap::from([(key, tokens)]);
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    match corpus.get(&key) {
        Some(tokens) => {
            println!(
                "{} {}",
                Style::new().bold().apply_to(&key),
                Style::new().dim().apply_to(format!("({} variants)", tokens.len()))
            );
            for token in tokens {
                println!("  {token}");
            }
        }
        None => {
            println!("No variants known for {key}");
        }
    }
    Ok(())
}
