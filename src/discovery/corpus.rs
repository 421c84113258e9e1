//! Variant-corpus construction
//!
//! Scans the `itemtypes` and `blocktypes` definition trees and aggregates
//! every concrete `domain:base-token` occurrence into a map from base key
//! (`domain:base-`, trailing dash significant) to the set of observed
//! variant tokens. The corpus is rebuilt wholesale on every call so a
//! re-discovery always reflects the current asset root exactly.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use super::{BLOCKTYPES_DIR, DEFAULT_DOMAIN, ITEMTYPES_DIR};

static DOMAIN_TRIPLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([a-z0-9_]+):([a-z0-9_]+)-([a-z0-9_]+)\b").expect("domain triple regex")
});
static BARE_TRIPLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([a-z0-9_]+)-([a-z0-9_]+)\b").expect("bare triple regex"));

/// Map from `domain:base-` key to the variant tokens seen under it
#[derive(Debug, Clone, Default)]
pub struct VariantCorpus {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl VariantCorpus {
    fn add(&mut self, domain: &str, base: &str, token: &str) {
        if base.is_empty() || token.is_empty() {
            return;
        }
        let key = format!("{domain}:{base}-");
        self.entries.entry(key).or_default().insert(token.to_string());
    }

    /// Scan one blob of definition text into the corpus
    pub fn scan_text(&mut self, text: &str) {
        for caps in DOMAIN_TRIPLE_RE.captures_iter(text) {
            let domain = caps[1].to_lowercase();
            self.add(&domain, &caps[2], &caps[3]);
        }
        for caps in BARE_TRIPLE_RE.captures_iter(text) {
            let (base, token) = (&caps[1], &caps[2]);
            if base.contains('*') || token.contains('*') {
                continue;
            }
            self.add(DEFAULT_DOMAIN, base, token);
        }
    }

    /// Variant tokens for a base key, if any were observed
    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(key).filter(|tokens| !tokens.is_empty())
    }

    /// Number of base keys in the corpus
    pub fn base_count(&self) -> usize {
        self.entries.len()
    }

    /// Total variant tokens across all bases
    pub fn token_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

}

/// True for files the scanners read: `.json` and `.json5` definitions
pub fn is_definition_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("json") | Some("json5")
    )
}

/// All definition files under the two fixed definition trees, walk order
pub fn definition_files(asset_root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for kind in [ITEMTYPES_DIR, BLOCKTYPES_DIR] {
        let tree = asset_root.join(kind);
        if !tree.is_dir() {
            continue;
        }
        for entry in WalkDir::new(&tree).into_iter().filter_map(|e| e.ok()) {
            if entry.file_type().is_file() && is_definition_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }
    files
}

/// Build a fresh corpus from every definition file under the asset root.
///
/// Files that fail to read contribute nothing; the scan continues.
pub fn build_corpus(asset_root: &Path) -> VariantCorpus {
    let mut corpus = VariantCorpus::default();
    for file in definition_files(asset_root) {
        let Ok(text) = std::fs::read_to_string(&file) else {
            continue;
        };
        corpus.scan_text(&text);
    }
    corpus
}
