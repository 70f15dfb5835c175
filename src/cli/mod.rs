//! CLI argument parsing for cppcheck-diff-filter.
//!
//! Uses clap derive macros for declarative argument definitions.

use crate::filter::{DEFAULT_DIFF_RANGE, DEFAULT_RULE_PREFIX};
use clap::Parser;
use std::path::PathBuf;

// Display order for log level option (placed at end of help text)
const LOG_LEVEL_DISPLAY_ORDER: usize = 100;

/// Filter cppcheck results for MISRA violations in changed lines.
///
/// Reads a cppcheck XML report, keeps only the findings of the selected rule
/// family that sit on lines changed in the git diff range, writes them to a
/// new report and prints them. Always exits with status 0.
#[derive(Parser, Debug)]
#[command(name = "cppcheck-diff-filter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to cppcheck XML file.
    #[arg(long)]
    pub input: PathBuf,

    /// Output file path.
    #[arg(long)]
    pub output: PathBuf,

    /// Git diff range.
    #[arg(long = "git-diff", default_value = DEFAULT_DIFF_RANGE)]
    pub git_diff: String,

    /// Only findings whose id starts with this prefix are considered.
    #[arg(long, env = "CPPCHECK_FILTER_RULE_PREFIX", default_value = DEFAULT_RULE_PREFIX)]
    pub rule_prefix: String,

    /// Repository directory git runs in.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Log level (see https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html)
    /// [env: CPPCHECK_FILTER_LOG=] [default: info]
    #[arg(
        long,
        env = "CPPCHECK_FILTER_LOG",
        default_value = "info",
        hide_default_value = true,
        hide_env = true,
        display_order = LOG_LEVEL_DISPLAY_ORDER,
        verbatim_doc_comment
    )]
    pub log_level: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
