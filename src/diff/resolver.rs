//! Per-run cache in front of a [`DiffSource`].

use std::collections::HashMap;
use tracing::{debug, error};

use super::api::{ChangedRange, DiffSource};

/// Resolves the changed ranges of each file at most once per run.
///
/// Failures are logged and cached as an empty range list, so every finding
/// in that file is treated as untouched.
pub struct DiffRangeResolver<S> {
    source: S,
    diff_range: String,
    cache: HashMap<String, Vec<ChangedRange>>,
}

impl<S: DiffSource> DiffRangeResolver<S> {
    pub fn new(source: S, diff_range: impl Into<String>) -> Self {
        Self {
            source,
            diff_range: diff_range.into(),
            cache: HashMap::new(),
        }
    }

    /// Changed ranges for `file_path`, querying the source on first use only.
    pub fn ranges_for(&mut self, file_path: &str) -> &[ChangedRange] {
        if !self.cache.contains_key(file_path) {
            let ranges = match self.source.changed_ranges(file_path, &self.diff_range) {
                Ok(ranges) => {
                    debug!("{}: {} changed range(s)", file_path, ranges.len());
                    ranges
                }
                Err(e) => {
                    error!("Error getting changed lines for {}: {}", file_path, e);
                    Vec::new()
                }
            };
            self.cache.insert(file_path.to_string(), ranges);
        }

        self.cache
            .get(file_path)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct files resolved so far.
    pub fn resolved_files(&self) -> usize {
        self.cache.len()
    }
}
