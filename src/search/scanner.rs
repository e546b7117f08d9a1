//! Concurrent scan over every local bucket.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rayon::prelude::*;
use tracing::debug;

use crate::error::{Result, SearchError};

use super::{ResultSet, match_manifests};

/// Scan each bucket under `buckets_root` in parallel.
///
/// Every bucket gets an entry, even when it has no matches. The first failing
/// bucket fails the whole scan.
pub fn scan_buckets(buckets_root: &Path, term: &str) -> Result<ResultSet> {
    let buckets = list_buckets(buckets_root)?;
    let results = Mutex::new(ResultSet::new());

    buckets.par_iter().try_for_each(|(name, dir)| -> Result<()> {
        let matches = match_manifests(&manifest_dir(dir), term)?;
        debug!(bucket = %name, matches = matches.len(), "scanned bucket");
        results.lock().insert(name.clone(), matches);
        Ok(())
    })?;

    Ok(results.into_inner())
}

/// Immediate subdirectories of `buckets_root` as `(name, path)` pairs.
fn list_buckets(buckets_root: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = std::fs::read_dir(buckets_root).map_err(|err| {
        SearchError::Config(format!(
            "Scoop folder does not exist - {}: {err}",
            buckets_root.display()
        ))
    })?;

    let mut buckets = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| SearchError::read(buckets_root, err))?;
        let path = entry.path();
        if path.is_dir() {
            buckets.push((entry.file_name().to_string_lossy().into_owned(), path));
        }
    }
    Ok(buckets)
}

/// Newer buckets keep manifests under `bucket/`, older ones at the top level.
fn manifest_dir(bucket: &Path) -> PathBuf {
    let nested = bucket.join("bucket");
    if nested.is_dir() {
        nested
    } else {
        bucket.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Match;
    use crate::test_utils::fixtures::BucketFixture;

    #[test]
    fn test_scan_nested_and_flat_layouts() {
        let fixture = BucketFixture::new();
        fixture.add_manifest("main", "7zip", r#"{"version": "21.07"}"#);
        fixture.add_file("legacy/zip.json", r#"{"version": "3.0"}"#);
        fixture.add_file("stray.json", "{}");

        let results = scan_buckets(&fixture.buckets_dir(), "zip").unwrap();
        assert_eq!(results.bucket_count(), 2);
        assert_eq!(
            results.get("main").unwrap(),
            [Match::by_name("7zip", "21.07")]
        );
        assert_eq!(results.get("legacy").unwrap(), [Match::by_name("zip", "3.0")]);
    }

    #[test]
    fn test_nested_dir_preferred_over_top_level() {
        let fixture = BucketFixture::new();
        fixture.add_manifest("extras", "inner", "{}");
        fixture.add_file("extras/outer.json", "{}");

        let results = scan_buckets(&fixture.buckets_dir(), "").unwrap();
        assert_eq!(results.get("extras").unwrap(), [Match::by_name("inner", "")]);
    }

    #[test]
    fn test_buckets_without_matches_are_kept() {
        let fixture = BucketFixture::new();
        fixture.add_manifest("main", "git", "{}");
        fixture.add_manifest("extras", "vscode", "{}");

        let results = scan_buckets(&fixture.buckets_dir(), "git").unwrap();
        assert_eq!(results.bucket_count(), 2);
        assert!(results.get("extras").unwrap().is_empty());
        assert_eq!(results.match_count(), 1);
    }

    #[test]
    fn test_scan_is_repeatable() {
        let fixture = BucketFixture::new();
        for (bucket, name) in [("main", "a-b"), ("main", "ab"), ("extras", "abc"), ("x", "zab")] {
            fixture.add_manifest(bucket, name, r#"{"version": "1"}"#);
        }

        let first = scan_buckets(&fixture.buckets_dir(), "ab").unwrap();
        let second = scan_buckets(&fixture.buckets_dir(), "ab").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.sorted(), second.sorted());
    }

    #[test]
    fn test_one_bad_bucket_fails_scan() {
        let fixture = BucketFixture::new();
        fixture.add_manifest("main", "git", "{}");
        fixture.add_manifest("broken", "bad", r#"{"bin": 42}"#);

        let err = scan_buckets(&fixture.buckets_dir(), "git").unwrap_err();
        assert!(matches!(err, SearchError::MalformedManifest { .. }));
    }

    #[test]
    fn test_byte_order_mark_and_garbage_do_not_fail_scan() {
        let fixture = BucketFixture::new();
        fixture.add_manifest("main", "7zip", r#"{"version": "21.07"}"#);
        fixture.add_manifest("thirdparty", "other", "\u{feff}{\"version\": \"1.0\"}");
        fixture.add_manifest("thirdparty", "unzip", "<<<garbage");

        let results = scan_buckets(&fixture.buckets_dir(), "zip").unwrap();
        assert_eq!(
            results.get("main").unwrap(),
            [Match::by_name("7zip", "21.07")]
        );
        assert_eq!(
            results.get("thirdparty").unwrap(),
            [Match::by_name("unzip", "")]
        );

        let all = scan_buckets(&fixture.buckets_dir(), "other").unwrap();
        assert_eq!(
            all.get("thirdparty").unwrap(),
            [Match::by_name("other", "1.0")]
        );
    }

    #[test]
    fn test_missing_root_is_config_error() {
        let fixture = BucketFixture::new();
        let err = scan_buckets(&fixture.root().join("missing"), "x").unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }
}
