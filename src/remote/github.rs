//! Minimal blocking GitHub REST client.
//!
//! Only the two read-only endpoints the remote search needs: rate limit
//! introspection and recursive tree listing.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use tracing::debug;

use crate::config::RemoteConfig;
use crate::error::{Result, SearchError};

const USER_AGENT: &str = concat!("scoop-search/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Deserialize)]
struct RateLimitResponse {
    resources: RateLimitResources,
}

#[derive(Debug, Clone, Deserialize)]
struct RateLimitResources {
    core: RateLimit,
}

/// Quota for one resource category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateLimit {
    pub limit: u64,
    #[serde(default)]
    pub remaining: Option<u64>,
}

impl RateLimit {
    /// Requests left; older payloads without `remaining` report the limit.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.remaining.unwrap_or(self.limit)
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

#[derive(Debug, Clone, Deserialize)]
struct TreeResponse {
    #[serde(default)]
    tree: Vec<TreeEntry>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeEntry {
    pub path: String,
}

/// Shared by every remote worker thread.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: reqwest::blocking::Client,
    api_base: String,
}

impl GithubClient {
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(token) = config.token.as_deref().filter(|token| !token.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|err| SearchError::Config(format!("invalid GITHUB_TOKEN: {err}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|err| SearchError::Config(format!("github http client: {err}")))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /rate_limit`, core category.
    pub fn core_rate_limit(&self) -> Result<RateLimit> {
        let response: RateLimitResponse = self.get_json("/rate_limit")?;
        Ok(response.resources.core)
    }

    /// True only when the core quota has exactly nothing left.
    pub fn quota_exhausted(&self) -> Result<bool> {
        let quota = self.core_rate_limit()?;
        debug!(
            limit = quota.limit,
            remaining = quota.remaining(),
            "github rate limit"
        );
        Ok(quota.is_exhausted())
    }

    /// Every path in the default branch of `owner/repo`.
    pub fn tree(&self, owner: &str, repo: &str) -> Result<Vec<TreeEntry>> {
        let response: TreeResponse =
            self.get_json(&format!("/repos/{owner}/{repo}/git/trees/HEAD?recursive=1"))?;
        if response.truncated {
            debug!(owner, repo, "github tree listing truncated");
        }
        Ok(response.tree)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.api_base);
        let response = self.client.get(&url).send()?;

        if !response.status().is_success() {
            return Err(SearchError::Remote(format!(
                "GET {url}: HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|err| SearchError::Remote(format!("GET {url}: parse response: {err}")))
    }
}
