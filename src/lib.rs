//! scoop-search
//!
//! Local-first search over scoop bucket manifests, with a GitHub fallback
//! for buckets that are known but not added.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod presenter;
pub mod remote;
pub mod search;
pub mod test_utils;

pub use error::{Result, SearchError};
