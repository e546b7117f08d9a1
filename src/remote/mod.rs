//! Remote fallback over buckets that are known but not added locally.
//!
//! Each candidate bucket's repository tree is listed through the GitHub API
//! and manifest file names are matched against the term. Manifest contents
//! are never fetched, so remote matches carry a name only.

use std::path::PathBuf;

use parking_lot::Mutex;
use rayon::prelude::*;
use regex::Regex;
use tracing::debug;

use crate::config::ScoopRoot;
use crate::error::{Result, SearchError};
use crate::search::{Match, ResultSet, sort_matches};

pub mod catalog;
pub mod github;

pub use catalog::{Catalog, load_catalog, missing_buckets, repo_slug};
pub use github::{GithubClient, RateLimit, TreeEntry};

pub struct RemoteSearcher {
    client: GithubClient,
    catalog_path: PathBuf,
    buckets_dir: PathBuf,
}

impl RemoteSearcher {
    #[must_use]
    pub fn new(client: GithubClient, root: &ScoopRoot) -> Self {
        Self {
            client,
            catalog_path: root.catalog_path(),
            buckets_dir: root.buckets_dir(),
        }
    }

    /// Rate-limit guard run before any remote search.
    pub fn quota_exhausted(&self) -> Result<bool> {
        self.client.quota_exhausted()
    }

    /// Search every catalog bucket that is not present locally.
    pub fn search_remote(&self, term: &str) -> Result<ResultSet> {
        let catalog = load_catalog(&self.catalog_path)?;
        let candidates = missing_buckets(&catalog, &self.buckets_dir);
        debug!(candidates = candidates.len(), "remote bucket candidates");

        let pattern = name_pattern(term)?;
        let results = Mutex::new(ResultSet::new());

        candidates.par_iter().try_for_each(|(bucket, url)| -> Result<()> {
            let matches = self.search_bucket_with(url, &pattern)?;
            debug!(bucket = %bucket, matches = matches.len(), "searched remote bucket");
            results.lock().insert(*bucket, matches);
            Ok(())
        })?;

        Ok(results.into_inner())
    }

    /// Search one catalog bucket by name.
    pub fn search_remote_bucket(&self, bucket: &str, term: &str) -> Result<Vec<Match>> {
        let catalog = load_catalog(&self.catalog_path)?;
        let url = catalog
            .get(bucket)
            .ok_or_else(|| SearchError::Remote(format!("unknown bucket {bucket}")))?;
        self.search_bucket_with(url, &name_pattern(term)?)
    }

    fn search_bucket_with(&self, url: &str, pattern: &Regex) -> Result<Vec<Match>> {
        let (owner, repo) = repo_slug(url)?;
        let tree = self.client.tree(owner, repo)?;
        Ok(matching_manifests(&tree, pattern))
    }
}

/// Manifest paths, optionally under `bucket/`, whose file stem contains `term`.
pub fn name_pattern(term: &str) -> Result<Regex> {
    let term = regex::escape(term);
    Ok(Regex::new(&format!(
        r"(?i)^(?:bucket/)?([^/]*{term}[^/]*)\.json$"
    ))?)
}

/// Name-only matches for every tree entry the pattern accepts, sorted.
#[must_use]
pub fn matching_manifests(tree: &[TreeEntry], pattern: &Regex) -> Vec<Match> {
    let mut matches: Vec<_> = tree
        .iter()
        .filter_map(|entry| pattern.captures(&entry.path))
        .filter_map(|captures| captures.get(1))
        .map(|stem| Match::by_name(stem.as_str(), ""))
        .collect();
    sort_matches(&mut matches);
    matches
}
