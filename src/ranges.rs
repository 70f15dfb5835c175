//! Line membership tests against a file's changed ranges.
//!
//! Small range lists are scanned directly. Larger lists are sorted and
//! searched, checking only the neighbors of the insertion point.

use crate::diff::ChangedRange;

/// Range counts up to this size use a linear scan.
pub const LINEAR_SCAN_LIMIT: usize = 5;

/// Returns true if `line` falls inside any of `ranges` (bounds inclusive).
///
/// Picks [`contains_linear`] for up to [`LINEAR_SCAN_LIMIT`] ranges and
/// [`contains_sorted`] otherwise, so the sorted strategy's precondition
/// applies to large inputs.
pub fn contains(line: usize, ranges: &[ChangedRange]) -> bool {
    if ranges.len() <= LINEAR_SCAN_LIMIT {
        contains_linear(line, ranges)
    } else {
        contains_sorted(line, ranges)
    }
}

/// Check every range.
pub fn contains_linear(line: usize, ranges: &[ChangedRange]) -> bool {
    ranges.iter().any(|r| r.contains(line))
}

/// Sort a copy by `(start, end)`, locate the lower bound of `(line, line)`
/// and test only the ranges at that index and the one before it.
///
/// # Precondition
///
/// The ranges must not overlap. With overlapping ranges the covering range
/// can sit further than one slot from the insertion point and a match may be
/// missed. `git diff -U0` hunks for a single file do not overlap in practice,
/// but nothing enforces it.
pub fn contains_sorted(line: usize, ranges: &[ChangedRange]) -> bool {
    let mut sorted = ranges.to_vec();
    sorted.sort_unstable();

    let idx = sorted.partition_point(|r| (r.start(), r.end()) < (line, line));

    [idx.checked_sub(1), Some(idx)]
        .into_iter()
        .flatten()
        .filter_map(|i| sorted.get(i))
        .any(|r| r.contains(line))
}
