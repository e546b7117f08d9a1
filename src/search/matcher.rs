//! Per-bucket manifest matching.

use std::path::Path;

use crate::error::{Result, SearchError};
use crate::manifest::{MANIFEST_EXT, Manifest, bare_name, strip_extension};

use super::Match;

/// Find manifests in `dir` whose name or one of whose executables contains
/// `term`, ignoring case.
///
/// A name match wins over any executable match. Among executables the first
/// match in declaration order is reported. Executables are compared without
/// their directory and extension, but reported with the extension.
pub fn match_manifests(dir: &Path, term: &str) -> Result<Vec<Match>> {
    let term = term.to_lowercase();
    let entries = std::fs::read_dir(dir).map_err(|err| SearchError::read(dir, err))?;

    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| SearchError::read(dir, err))?;
        let path = entry.path();
        if !entry.file_name().to_string_lossy().ends_with(MANIFEST_EXT) || !path.is_file() {
            continue;
        }

        let manifest = Manifest::from_path(&path)?;
        if let Some(found) = match_manifest(manifest, &term) {
            matches.push(found);
        }
    }

    sort_matches(&mut matches);
    Ok(matches)
}

/// Match a single manifest. `term` must already be lowercase.
#[must_use]
pub fn match_manifest(manifest: Manifest, term: &str) -> Option<Match> {
    if manifest.stem.to_lowercase().contains(term) {
        return Some(Match::by_name(manifest.stem, manifest.version));
    }

    let bin = manifest
        .bin
        .commands()
        .map(bare_name)
        .find(|name| strip_extension(name).to_lowercase().contains(term))?
        .to_string();
    Some(Match::by_bin(manifest.stem, manifest.version, bin))
}

/// Stable sort by name, ignoring case and hyphens.
pub fn sort_matches(matches: &mut [Match]) {
    matches.sort_by_cached_key(|found| sort_key(&found.name));
}

fn sort_key(name: &str) -> String {
    name.to_lowercase().replace('-', "")
}
