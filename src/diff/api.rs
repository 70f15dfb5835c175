//! Public API for diff resolution.

use crate::error::Result;
use crate::git::run_git;
use std::path::PathBuf;

use super::parser::parse_changed_ranges;

/// A closed interval `[start, end]` of 1-based line numbers on the new side
/// of a diff.
///
/// Always satisfies `1 <= start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChangedRange {
    start: usize,
    end: usize,
}

impl ChangedRange {
    /// Build the range covered by a hunk starting at `start` spanning `count` lines.
    ///
    /// Returns `None` for pure deletions (`count == 0`), for a zero start line
    /// and when the end line does not fit in `usize`.
    pub fn from_hunk(start: usize, count: usize) -> Option<Self> {
        if start == 0 || count == 0 {
            return None;
        }
        let end = start.checked_add(count - 1)?;
        Some(Self { start, end })
    }

    /// Build a range from inclusive bounds. Returns `None` unless `1 <= start <= end`.
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start >= 1 && start <= end).then_some(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Boundary-inclusive containment.
    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }
}

/// Something that can report the changed ranges of one file for a diff range.
pub trait DiffSource {
    /// Changed ranges of `file_path` between the refs in `diff_range`
    /// (e.g. `origin/main...HEAD`), in diff order.
    fn changed_ranges(&self, file_path: &str, diff_range: &str) -> Result<Vec<ChangedRange>>;
}

/// [`DiffSource`] backed by `git diff -U0 <range> -- <path>`.
#[derive(Debug, Clone)]
pub struct GitDiffSource {
    repo_dir: PathBuf,
}

impl GitDiffSource {
    /// Run git inside `repo_dir`.
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }
}

impl DiffSource for GitDiffSource {
    fn changed_ranges(&self, file_path: &str, diff_range: &str) -> Result<Vec<ChangedRange>> {
        let output = run_git(&self.repo_dir, &["diff", "-U0", diff_range, "--", file_path])?;
        Ok(parse_changed_ranges(&output.stdout))
    }
}
