use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SearchError};

/// Default GitHub REST endpoint.
pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Explicit scoop installation root, if any source provided one
    pub root_path: Option<PathBuf>,
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub enabled: bool,
    pub api_base: String,
    pub token: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_base: DEFAULT_GITHUB_API.to_string(),
            token: None,
        }
    }
}

impl Config {
    /// Load scoop's own `config.json`, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(patch) = Self::load_patch(&config_file_path()?)? {
            config.merge_patch(patch);
        }
        config.apply_env_overrides();

        Ok(config)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| SearchError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = serde_json::from_str(&raw)
            .map_err(|err| SearchError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(value) = patch.root_path.filter(|path| !path.as_os_str().is_empty()) {
            self.root_path = Some(value);
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(value) = env_string("SCOOP").filter(|value| !value.is_empty()) {
            self.root_path = Some(PathBuf::from(value));
        }
        if let Some(value) = env_string("SCOOP_SEARCH_GITHUB_API") {
            self.remote.api_base = value.trim_end_matches('/').to_string();
        }
        if let Some(value) = env_string("GITHUB_TOKEN") {
            self.remote.token = Some(value);
        }
        if let Some(value) = env_bool("SCOOP_SEARCH_NO_REMOTE") {
            self.remote.enabled = !value;
        }
    }

    /// Resolve the installation root: explicit setting, else `~/scoop`.
    pub fn scoop_root(&self) -> Result<ScoopRoot> {
        if let Some(path) = &self.root_path {
            return Ok(ScoopRoot::new(path.clone()));
        }
        let home = dirs::home_dir()
            .ok_or_else(|| SearchError::MissingConfig("Could not determine home dir".to_string()))?;
        Ok(ScoopRoot::new(home.join("scoop")))
    }
}

/// Fields of scoop's `config.json` that matter here. The rest is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub root_path: Option<PathBuf>,
}

/// `$XDG_CONFIG_HOME/scoop/config.json`, falling back to `~/.config`.
fn config_file_path() -> Result<PathBuf> {
    let base = match env_string("XDG_CONFIG_HOME").filter(|value| !value.is_empty()) {
        Some(value) => PathBuf::from(value),
        None => dirs::home_dir()
            .ok_or_else(|| SearchError::MissingConfig("Could not determine home dir".to_string()))?
            .join(".config"),
    };
    Ok(base.join("scoop").join("config.json"))
}

/// Layout of a scoop installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoopRoot {
    path: PathBuf,
}

impl ScoopRoot {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn buckets_dir(&self) -> PathBuf {
        self.path.join("buckets")
    }

    /// Catalog of known buckets shipped with scoop itself.
    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        self.path.join("apps/scoop/current/buckets.json")
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|value| {
        matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}
