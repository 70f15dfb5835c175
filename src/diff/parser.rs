//! Core diff parsing logic.

use super::api::ChangedRange;
use super::helpers::parse_hunk_header;

/// Parse changed ranges from raw `git diff -U0` output.
///
/// Only hunk headers (lines starting with `@@`) are inspected; hunk bodies
/// and file headers are ignored. Ranges come back in diff order, neither
/// merged nor deduplicated. Malformed headers are skipped, so this never
/// fails.
///
/// # Arguments
///
/// * `diff_output` - Raw unified diff output for a single file
pub fn parse_changed_ranges(diff_output: &str) -> Vec<ChangedRange> {
    let mut ranges = Vec::new();

    for line in diff_output.lines() {
        if !line.starts_with("@@") {
            continue;
        }

        if let Some((start, count)) = parse_hunk_header(line) {
            // count == 0 is a pure deletion
            if let Some(range) = ChangedRange::from_hunk(start, count) {
                ranges.push(range);
            }
        }
    }

    ranges
}
