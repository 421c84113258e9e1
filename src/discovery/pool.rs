//! Full discovery run: root resolution, autocomplete pool, variant corpus
//!
//! One `Discovery::run` replaces all previously computed state wholesale;
//! partial results from a failed scan are never kept.

use std::collections::BTreeSet;
use std::path::PathBuf;

use super::corpus::{self, VariantCorpus};
use super::extract::extract_codes;
use super::{DiscoveryLog, resolve};
use crate::progress::ScanProgress;

/// Everything one discovery pass produces
#[derive(Debug, Default)]
pub struct Discovery {
    /// Resolved asset root, when one validated
    pub root: Option<PathBuf>,

    /// Sorted, de-duplicated autocomplete pool of identifier patterns
    pub pool: Vec<String>,

    /// Variant corpus keyed by `domain:base-`
    pub corpus: VariantCorpus,

    /// Ordered diagnostic trail from path resolution
    pub log: DiscoveryLog,
}

impl Discovery {
    /// Resolve the asset root and build the pool and corpus from it.
    ///
    /// A resolution miss degrades to an empty pool and corpus; the log tells
    /// the user what was tried.
    pub fn run(env_var: Option<&str>, direct_root: Option<&str>) -> Self {
        Self::run_with_progress(env_var, direct_root, false)
    }

    /// Like [`Discovery::run`], optionally showing a scan progress bar
    pub fn run_with_progress(
        env_var: Option<&str>,
        direct_root: Option<&str>,
        show_progress: bool,
    ) -> Self {
        let (root, log) = resolve(env_var, direct_root);

        let Some(ref asset_root) = root else {
            return Self {
                root,
                log,
                ..Self::default()
            };
        };

        let files = corpus::definition_files(asset_root);
        let progress = show_progress.then(|| ScanProgress::new(files.len() as u64));

        let mut codes: BTreeSet<String> = BTreeSet::new();
        let mut corpus = VariantCorpus::default();
        for file in &files {
            if let Some(ref pb) = progress {
                pb.tick(&file.display().to_string());
            }
            // unreadable files contribute nothing
            let Ok(text) = std::fs::read_to_string(file) else {
                continue;
            };
            codes.extend(extract_codes(&text));
            corpus.scan_text(&text);
        }
        if let Some(pb) = progress {
            pb.finish();
        }

        Self {
            root,
            pool: codes.into_iter().collect(),
            corpus,
            log,
        }
    }

    /// Merge user-supplied custom items into the pool, keeping it sorted
    pub fn add_custom_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut merged: BTreeSet<String> = self.pool.drain(..).collect();
        merged.extend(items.into_iter().filter(|i| !i.trim().is_empty()));
        self.pool = merged.into_iter().collect();
    }
}
