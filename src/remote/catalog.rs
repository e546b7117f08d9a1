//! Known-bucket catalog (`apps/scoop/current/buckets.json`).

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, SearchError};

/// Bucket name to repository URL.
pub type Catalog = BTreeMap<String, String>;

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = std::fs::read_to_string(path).map_err(|err| SearchError::read(path, err))?;
    serde_json::from_str(&raw).map_err(|err| {
        SearchError::Config(format!("parse bucket catalog {}: {err}", path.display()))
    })
}

/// Catalog entries with no bucket directory of the same name under
/// `buckets_dir`.
#[must_use]
pub fn missing_buckets<'a>(catalog: &'a Catalog, buckets_dir: &Path) -> Vec<(&'a str, &'a str)> {
    catalog
        .iter()
        .filter(|(name, _)| !buckets_dir.join(name).is_dir())
        .map(|(name, url)| (name.as_str(), url.as_str()))
        .collect()
}

/// `(owner, repo)` from the last two path segments of a repository URL.
pub fn repo_slug(url: &str) -> Result<(&str, &str)> {
    let trimmed = url.trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    let mut segments = trimmed.rsplit('/').filter(|segment| !segment.is_empty());
    match (segments.next(), segments.next()) {
        (Some(repo), Some(owner)) if !owner.ends_with(':') => Ok((owner, repo)),
        _ => Err(SearchError::Remote(format!(
            "cannot derive owner/repo from bucket url {url}"
        ))),
    }
}
