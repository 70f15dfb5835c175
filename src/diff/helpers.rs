//! Helper functions for diff parsing.

use regex::Regex;
use std::sync::LazyLock;

/// Added-side range of a hunk header: `+start` or `+start,count`.
static NEW_RANGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+(\d+)(?:,(\d+))?").expect("Invalid hunk range regex"));

/// Parse the added side of a hunk header line.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@ optional context".
/// The first `+N[,M]` on the line wins. A missing count means 1.
///
/// Returns `(new_start, new_count)` or None if the line carries no added side
/// or the numbers overflow.
pub(super) fn parse_hunk_header(line: &str) -> Option<(usize, usize)> {
    let caps = NEW_RANGE_REGEX.captures(line)?;
    let start = caps.get(1)?.as_str().parse().ok()?;
    let count = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 1,
    };
    Some((start, count))
}
