//! Search engine for scoop buckets
//!
//! Local buckets are scanned first. Only when nothing matches locally, and the
//! GitHub quota allows it, are known-but-missing buckets searched remotely.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ScoopRoot;
use crate::error::Result;
use crate::remote::RemoteSearcher;

pub mod matcher;
pub mod scanner;

pub use matcher::{match_manifests, sort_matches};
pub use scanner::scan_buckets;

/// One matching package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub name: String,
    /// Empty for remote matches
    pub version: String,
    /// Matching executable, empty when the package name itself matched
    pub bin: String,
}

impl Match {
    #[must_use]
    pub fn by_name(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            bin: String::new(),
        }
    }

    #[must_use]
    pub fn by_bin(
        name: impl Into<String>,
        version: impl Into<String>,
        bin: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            bin: bin.into(),
        }
    }
}

/// Matches grouped by bucket name.
///
/// Key order is meaningless here; [`ResultSet::sorted`] gives the
/// presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    buckets: HashMap<String, Vec<Match>>,
}

impl ResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, bucket: impl Into<String>, matches: Vec<Match>) {
        self.buckets.insert(bucket.into(), matches);
    }

    #[must_use]
    pub fn get(&self, bucket: &str) -> Option<&[Match]> {
        self.buckets.get(bucket).map(Vec::as_slice)
    }

    /// Total matches across every bucket.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// True when no bucket holds a match (buckets may still be present).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }

    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Buckets in lexicographic order.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &[Match])> {
        let mut buckets: Vec<_> = self
            .buckets
            .iter()
            .map(|(name, matches)| (name.as_str(), matches.as_slice()))
            .collect();
        buckets.sort_by(|a, b| a.0.cmp(b.0));
        buckets
    }
}

/// Where a result set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Local,
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub origin: Origin,
    pub results: ResultSet,
}

/// Run the two-tier search.
///
/// With `remote` set to `None` the remote tier is skipped entirely.
pub fn run_search(
    root: &ScoopRoot,
    term: &str,
    remote: Option<&RemoteSearcher>,
) -> Result<SearchOutcome> {
    let local = scan_buckets(&root.buckets_dir(), term)?;
    debug!(
        buckets = local.bucket_count(),
        matches = local.match_count(),
        "local scan finished"
    );
    if !local.is_empty() {
        return Ok(SearchOutcome {
            origin: Origin::Local,
            results: local,
        });
    }

    let Some(remote) = remote else {
        return Ok(SearchOutcome {
            origin: Origin::Local,
            results: local,
        });
    };

    if remote.quota_exhausted()? {
        warn!("GitHub API quota exhausted, skipping remote search");
        return Ok(SearchOutcome {
            origin: Origin::Local,
            results: local,
        });
    }

    info!(term, "no local matches, searching other known buckets");
    let results = remote.search_remote(term)?;
    if results.is_empty() {
        return Ok(SearchOutcome {
            origin: Origin::Local,
            results: local,
        });
    }

    Ok(SearchOutcome {
        origin: Origin::Remote,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buckets_count_as_empty() {
        let mut set = ResultSet::new();
        set.insert("main", Vec::new());
        set.insert("extras", Vec::new());
        assert!(set.is_empty());
        assert_eq!(set.bucket_count(), 2);

        set.insert("extras", vec![Match::by_name("7zip", "21.07")]);
        assert!(!set.is_empty());
        assert_eq!(set.match_count(), 1);
    }

    #[test]
    fn test_sorted_is_lexicographic() {
        let mut set = ResultSet::new();
        set.insert("versions", Vec::new());
        set.insert("extras", Vec::new());
        set.insert("main", Vec::new());
        let names: Vec<_> = set.sorted().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["extras", "main", "versions"]);
    }
}
