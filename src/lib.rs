//! Filter cppcheck MISRA findings down to lines changed in a git diff range.
//!
//! The pipeline: [`diff`] resolves changed line ranges per file via
//! `git diff -U0`, [`ranges`] tests line membership, [`report`] reads and
//! writes cppcheck XML, and [`filter`] ties them together.

pub mod cli;
pub mod diff;
pub mod error;
pub mod filter;
pub mod git;
pub mod logging;
pub mod ranges;
pub mod report;

#[cfg(test)]
mod test_support;
