use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::search::{Match, Origin, SearchOutcome};

#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    Error { code: String, message: String },
}

/// JSON shape of a finished search. Buckets without matches are omitted.
#[derive(Debug, Serialize)]
pub struct SearchReport<'a> {
    pub query: &'a str,
    pub origin: Origin,
    pub total: usize,
    pub buckets: BTreeMap<&'a str, &'a [Match]>,
}

impl<'a> SearchReport<'a> {
    #[must_use]
    pub fn new(query: &'a str, outcome: &'a SearchOutcome) -> Self {
        let buckets: BTreeMap<_, _> = outcome
            .results
            .sorted()
            .into_iter()
            .filter(|(_, matches)| !matches.is_empty())
            .collect();
        Self {
            query,
            origin: outcome.origin,
            total: outcome.results.match_count(),
            buckets,
        }
    }
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    RobotResponse {
        status: RobotStatus::Ok,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
    }
}

pub fn robot_error(
    code: impl Into<String>,
    message: impl Into<String>,
) -> RobotResponse<serde_json::Value> {
    RobotResponse {
        status: RobotStatus::Error {
            code: code.into(),
            message: message.into(),
        },
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data: serde_json::Value::Null,
    }
}

pub fn emit_robot<T: Serialize>(response: &RobotResponse<T>) -> Result<()> {
    let payload = serde_json::to_string_pretty(response)?;
    println!("{payload}");
    Ok(())
}

/// Print `response`, or `Error: {fallback}` on stderr if it cannot be
/// serialized. Returns whether the JSON went out.
pub fn emit_robot_or_stderr<T: Serialize>(
    response: &RobotResponse<T>,
    fallback: &dyn std::fmt::Display,
) -> bool {
    match emit_robot(response) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("Error: {fallback} ({err})");
            false
        }
    }
}
