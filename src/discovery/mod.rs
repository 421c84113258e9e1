//! Asset-root discovery for vsrecipe
//!
//! This module handles:
//! - Locating the game's `assets/survival` directory from an explicit root
//!   or an environment variable
//! - Expanding `~` and `$VAR` references in user-supplied paths
//! - Collecting an ordered diagnostic trail of every candidate tried
//!
//! A miss is never fatal: callers get `None` plus the trail and degrade to
//! empty pools.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

pub mod corpus;
pub mod extract;
pub mod pool;

pub use corpus::VariantCorpus;
pub use pool::Discovery;

/// Environment variable consulted when no explicit root is given
pub const DEFAULT_ENV_VAR: &str = "VINTAGE_STORY";

/// Subdirectory that marks a valid asset root
pub const ITEMTYPES_DIR: &str = "itemtypes";

/// Second definition tree scanned for codes and variants
pub const BLOCKTYPES_DIR: &str = "blocktypes";

/// Default domain prefix for codes written without one
pub const DEFAULT_DOMAIN: &str = "game";

static ENV_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)").expect("env ref regex"));

/// Ordered diagnostic trail produced by [`resolve`]
pub type DiscoveryLog = Vec<String>;

/// Expand `~` and `$VAR`/`${VAR}` references, then make the path absolute.
///
/// References to unset variables are left as-is; the candidate simply fails
/// validation later. Relative paths are joined to the current directory; the
/// result is canonicalized when it exists.
pub fn expand_root(raw: &str) -> PathBuf {
    let mut s = ENV_REF_RE
        .replace_all(raw, |caps: &regex::Captures| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            env::var(name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned();

    if s == "~" || s.starts_with("~/") || s.starts_with("~\\") {
        if let Some(home) = dirs::home_dir() {
            s = format!("{}{}", home.display(), &s[1..]);
        }
    }

    let path = PathBuf::from(s);
    let absolute = if path.is_absolute() {
        path
    } else {
        env::current_dir().map(|cwd| cwd.join(&path)).unwrap_or(path)
    };
    dunce::canonicalize(&absolute).unwrap_or(absolute)
}

/// Candidate asset roots derived from an expanded root, in probe order
pub fn candidate_roots(root: &Path) -> Vec<PathBuf> {
    let parent = root.parent().unwrap_or(root);
    vec![
        root.join("assets").join("survival"),
        root.join("Vintagestory").join("assets").join("survival"),
        parent.join("Vintagestory").join("assets").join("survival"),
        // in case the user points directly at .../assets/survival
        root.to_path_buf(),
    ]
}

/// Structural check: the directory exists and holds an `itemtypes` tree
pub fn is_asset_root(path: &Path) -> bool {
    path.is_dir() && path.join(ITEMTYPES_DIR).is_dir()
}

fn probe_candidates(root: &Path, log: &mut DiscoveryLog) -> Option<PathBuf> {
    for candidate in candidate_roots(root) {
        let ok = is_asset_root(&candidate);
        log.push(format!(
            "  Try: {}  -> {}",
            candidate.display(),
            if ok { "OK" } else { "nope" }
        ));
        if ok {
            log.push(format!("[FOUND] Using: {}", candidate.display()));
            return Some(candidate);
        }
    }
    None
}

/// Resolve the asset root from an explicit path and/or an environment variable.
///
/// The explicit root is tried first; the env var only when that misses. Every
/// candidate and its outcome lands in the returned trail. A non-absolute
/// explicit root is flagged but still attempted, since expansion may resolve
/// it.
pub fn resolve(env_var: Option<&str>, direct_root: Option<&str>) -> (Option<PathBuf>, DiscoveryLog) {
    let mut log = DiscoveryLog::new();
    log.push("---- Starting discovery ----".to_string());

    if let Some(raw) = direct_root {
        if !Path::new(raw).is_absolute() {
            log.push(format!("Direct search path is not absolute: {raw:?}"));
        }
        let expanded = expand_root(raw);
        log.push(format!(
            "Direct search path provided: {raw:?} (expanded: {})",
            expanded.display()
        ));
        if let Some(found) = probe_candidates(&expanded, &mut log) {
            return (Some(found), log);
        }
    }

    if let Some(key) = env_var {
        match env::var(key) {
            Err(_) => log.push(format!("Env {key}: not set")),
            Ok(val) if val.is_empty() => log.push(format!("Env {key}: not set")),
            Ok(val) => {
                log.push(format!("Env {key}: {val:?}"));
                let expanded = expand_root(&val);
                if let Some(found) = probe_candidates(&expanded, &mut log) {
                    return (Some(found), log);
                }
            }
        }
    }

    log.push(
        "[FAILED] Could not locate 'assets/survival'. Pass --root or set your env var."
            .to_string(),
    );
    (None, log)
}
