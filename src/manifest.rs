//! Scoop manifest parsing.
//!
//! Only `version` and `bin` are read. Everything else in a manifest is
//! ignored, and missing fields are treated as empty rather than as errors.
//! The polymorphic `bin` field is normalized into [`Bin`] right after
//! parsing so the matcher never touches raw JSON.

use std::path::Path;

use serde_json::Value;
use tracing::warn;

use crate::error::{Result, SearchError};

/// Extension every manifest file carries.
pub const MANIFEST_EXT: &str = ".json";

/// A parsed manifest, reduced to the fields search cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// File name without the `.json` extension, case preserved
    pub stem: String,
    pub version: String,
    pub bin: Bin,
}

/// Normalized `bin` declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Bin {
    #[default]
    Absent,
    Single(String),
    Multi(Vec<BinEntry>),
}

/// One element of an array-shaped `bin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinEntry {
    Path(String),
    /// `[path, alias, args...]`; trailing arguments are dropped
    Shim { path: String, alias: Option<String> },
}

impl BinEntry {
    /// The name a user would type to run this entry.
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::Path(path) => path,
            Self::Shim { path, alias } => alias.as_deref().unwrap_or(path),
        }
    }
}

impl Bin {
    /// Build from the raw `bin` value. `path` is only used for the error.
    pub fn from_value(value: Option<&Value>, path: &Path) -> Result<Self> {
        let malformed = || SearchError::MalformedManifest {
            path: path.to_path_buf(),
        };

        match value {
            None | Some(Value::Null) => Ok(Self::Absent),
            Some(Value::String(single)) => Ok(Self::Single(single.clone())),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(entry) => Ok(BinEntry::Path(entry.clone())),
                    Value::Array(parts) => {
                        let mut parts = parts.iter();
                        let path = parts
                            .next()
                            .and_then(Value::as_str)
                            .ok_or_else(malformed)?
                            .to_string();
                        let alias = match parts.next() {
                            None => None,
                            Some(Value::String(alias)) => Some(alias.clone()),
                            Some(_) => return Err(malformed()),
                        };
                        Ok(BinEntry::Shim { path, alias })
                    }
                    _ => Err(malformed()),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Multi),
            Some(_) => Err(malformed()),
        }
    }

    /// Candidate executable names, in declaration order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        let (single, multi): (Option<&str>, &[BinEntry]) = match self {
            Self::Absent => (None, &[]),
            Self::Single(entry) => (Some(entry.as_str()), &[]),
            Self::Multi(entries) => (None, entries.as_slice()),
        };
        single
            .into_iter()
            .chain(multi.iter().map(BinEntry::command))
    }
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| SearchError::read(path, err))?;
        Self::parse(path, &raw)
    }

    /// Parse manifest text; the stem is taken from `path`.
    ///
    /// A leading byte-order mark is skipped. A body that still is not JSON
    /// keeps its stem with an empty version and no `bin`.
    pub fn parse(path: &Path, raw: &str) -> Result<Self> {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        let value: Value = serde_json::from_str(raw).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "unparsable manifest");
            Value::Null
        });

        let version = value
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let bin = Bin::from_value(value.get("bin"), path)?;

        Ok(Self {
            stem: manifest_stem(path),
            version,
            bin,
        })
    }
}

fn manifest_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.strip_suffix(MANIFEST_EXT)
        .map_or_else(|| name.clone(), str::to_string)
}

/// Final path component, accepting both `/` and `\` separators.
#[must_use]
pub fn bare_name(entry: &str) -> &str {
    entry.rsplit(['/', '\\']).next().unwrap_or(entry)
}

/// `name` without its last extension. Dotfiles keep their name.
#[must_use]
pub fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}
