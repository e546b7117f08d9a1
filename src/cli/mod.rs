//! Command-line surface.

use clap::{ArgAction, Parser};

pub mod commands;
pub mod output;

/// Search local scoop buckets, falling back to other known buckets on GitHub.
#[derive(Parser, Debug)]
#[command(name = "scoop-search", version, about)]
pub struct Cli {
    /// Term to look for in package names and executables; omit to list everything
    pub query: Option<String>,

    /// Print a PowerShell hook that routes `scoop search` to this tool
    #[arg(long, conflicts_with = "query")]
    pub hook: bool,

    /// Never fall back to searching other known buckets on GitHub
    #[arg(long)]
    pub no_remote: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    pub robot: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The search term; empty matches everything.
    #[must_use]
    pub fn term(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_lists_everything() {
        let cli = Cli::try_parse_from(["scoop-search"]).unwrap();
        assert_eq!(cli.term(), "");
        assert!(!cli.hook);
    }

    #[test]
    fn test_query_and_flags() {
        let cli = Cli::try_parse_from(["scoop-search", "-vv", "--no-remote", "git"]).unwrap();
        assert_eq!(cli.term(), "git");
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_remote);
    }

    #[test]
    fn test_hook_conflicts_with_query() {
        assert!(Cli::try_parse_from(["scoop-search", "--hook"]).unwrap().hook);
        assert!(Cli::try_parse_from(["scoop-search", "--hook", "git"]).is_err());
    }
}
