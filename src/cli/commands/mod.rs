//! CLI command implementations
//!
//! Each command has its own module with a `run()` function.

pub mod hook;
pub mod search;

use crate::app::AppContext;
use crate::cli::Cli;
use crate::error::Result;

/// Run the search for `cli`. Returns whether anything matched.
pub fn run(ctx: &AppContext, cli: &Cli) -> Result<bool> {
    search::run(ctx, cli.term())
}
