//! cppcheck-diff-filter: keep only the MISRA findings on changed lines.
//!
//! Parses arguments, runs the filter and prints the final count. The exit
//! status is always 0; problems are reported on stdout instead.

use cppcheck_diff_filter::cli::Cli;
use cppcheck_diff_filter::diff::GitDiffSource;
use cppcheck_diff_filter::filter::run_filter;
use cppcheck_diff_filter::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(&cli.log_level);

    let num_issues = run_filter(
        GitDiffSource::new(&cli.repo),
        &cli.input,
        &cli.git_diff,
        &cli.output,
        &cli.rule_prefix,
    );
    println!("Found {} misra violations", num_issues);

    ExitCode::SUCCESS
}
