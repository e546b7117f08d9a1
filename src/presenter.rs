//! Human-readable rendering of search results.

use std::fmt::Write as _;

use crate::search::{Match, Origin, ResultSet};

pub const NO_MATCHES: &str = "No matches found.";

const REMOTE_BANNER: &str = "Results from other known buckets...\n\
(add them using 'scoop bucket add <bucket name>')";

/// Render `results` and report whether anything matched.
///
/// Buckets appear in lexicographic order, each followed by a blank line;
/// buckets without matches are left out. When nothing matched the output is
/// just [`NO_MATCHES`].
#[must_use]
pub fn render(results: &ResultSet, origin: Origin) -> (String, bool) {
    let buckets: Vec<_> = results
        .sorted()
        .into_iter()
        .filter(|(_, matches)| !matches.is_empty())
        .collect();

    if buckets.is_empty() {
        return (format!("{NO_MATCHES}\n"), false);
    }

    let mut out = String::new();
    if origin == Origin::Remote {
        out.push_str(REMOTE_BANNER);
        out.push_str("\n\n");
    }

    for (bucket, matches) in buckets {
        match origin {
            Origin::Local => {
                let _ = writeln!(out, "'{bucket}' bucket:");
            }
            Origin::Remote => {
                let _ = writeln!(
                    out,
                    "'{bucket}' bucket (install using 'scoop bucket add {bucket}'):"
                );
            }
        }
        for found in matches {
            out.push_str(&match_line(found, origin));
            out.push('\n');
        }
        out.push('\n');
    }

    (out, true)
}

fn match_line(found: &Match, origin: Origin) -> String {
    let mut line = match origin {
        Origin::Local => format!("    {} ({})", found.name, found.version),
        Origin::Remote => format!("    {}", found.name),
    };
    if !found.bin.is_empty() {
        let _ = write!(line, " --> includes '{}'", found.bin);
    }
    line
}
