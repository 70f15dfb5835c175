//! Changed-line resolution from git diffs.
//!
//! This module turns `git diff -U0 <range> -- <path>` output into the
//! closed line intervals that were added or modified on the new side:
//! - Hunk headers are parsed for their `+start[,count]` part
//! - Pure deletions (`count == 0`) contribute nothing
//! - Results are cached per file for the lifetime of one resolver

mod api;
mod helpers;
mod parser;
mod resolver;


// Re-export public API
pub use api::{ChangedRange, DiffSource, GitDiffSource};
pub use parser::parse_changed_ranges;
pub use resolver::DiffRangeResolver;
