//! scoop-search <query> - Search buckets

use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{SearchReport, emit_robot, robot_ok};
use crate::error::Result;
use crate::presenter::render;
use crate::search::run_search;

pub fn run(ctx: &AppContext, query: &str) -> Result<bool> {
    let remote = ctx.remote_searcher()?;
    let outcome = run_search(&ctx.root, query, remote.as_ref())?;
    debug!(origin = ?outcome.origin, matches = outcome.results.match_count(), "search finished");

    if ctx.robot_mode {
        emit_robot(&robot_ok(SearchReport::new(query, &outcome)))?;
        return Ok(!outcome.results.is_empty());
    }

    let (text, any_match) = render(&outcome.results, outcome.origin);
    print!("{text}");
    Ok(any_match)
}
