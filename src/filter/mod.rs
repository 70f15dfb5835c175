//! Filtering of cppcheck findings down to changed lines.
//!
//! The pipeline is linear: load the report, keep the findings that belong
//! to the rule family and touch a changed line, write the filtered report,
//! then print a summary. Any error along the way is logged and counted as
//! zero findings so a CI job never fails because of this tool.

mod summary;


pub use summary::{finding_lines, summary_lines};

use crate::diff::{DiffRangeResolver, DiffSource};
use crate::error::Result;
use crate::ranges;
use crate::report::{FilteredReport, Finding, Report, load_report, write_report};
use std::path::Path;
use tracing::{debug, error};

/// Diff range used when none is given.
pub const DEFAULT_DIFF_RANGE: &str = "origin/main...HEAD";

/// Rule family kept by default.
pub const DEFAULT_RULE_PREFIX: &str = "misra-c2012";

/// Selects findings of one rule family that fall on changed lines.
pub struct ReportFilter<S> {
    resolver: DiffRangeResolver<S>,
    rule_prefix: String,
}

impl<S: DiffSource> ReportFilter<S> {
    /// Filter against `diff_range` as reported by `source`.
    pub fn new(source: S, diff_range: &str, rule_prefix: &str) -> Self {
        Self {
            resolver: DiffRangeResolver::new(source, diff_range),
            rule_prefix: rule_prefix.to_string(),
        }
    }

    /// Keep the findings of `report` that match the rule prefix and have a
    /// location on a changed line. Order is preserved.
    pub fn select(&mut self, report: Report) -> Result<FilteredReport> {
        let mut kept = Vec::new();

        for finding in &report.findings {
            if !finding.id.starts_with(&self.rule_prefix) {
                continue;
            }
            if self.touches_changed_line(finding)? {
                debug!("keeping {} ({} location(s))", finding.id, finding.locations.len());
                kept.push(finding.clone());
            }
        }

        FilteredReport::from_source(&report, kept)
    }

    /// True on the first location that falls inside its file's changed ranges.
    ///
    /// The line is read before the file is checked, so a malformed line
    /// fails the run even on a location without a file.
    fn touches_changed_line(&mut self, finding: &Finding) -> Result<bool> {
        for location in &finding.locations {
            let line = location.line_number()?;
            let Some(file) = location.file_path() else {
                continue;
            };
            if line == 0 {
                continue;
            }

            if ranges::contains(line, self.resolver.ranges_for(file)) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Load `input`, select findings and write the result to `output`.
    pub fn filter_file(&mut self, input: &Path, output: &Path) -> Result<FilteredReport> {
        let report = load_report(input)?;
        let filtered = self.select(report)?;
        write_report(&filtered, output)?;
        Ok(filtered)
    }
}

/// Filter the report at `input` against `diff_range`, write the kept findings
/// to `output` and print the summary.
///
/// Returns the number of kept findings. Errors are logged and reported as 0;
/// in that case the summary is not printed and `output` may not exist.
pub fn run_filter<S: DiffSource>(
    source: S,
    input: &Path,
    diff_range: &str,
    output: &Path,
    rule_prefix: &str,
) -> usize {
    let mut filter = ReportFilter::new(source, diff_range, rule_prefix);

    match filter.filter_file(input, output) {
        Ok(filtered) => {
            for line in summary_lines(&filtered) {
                println!("{}", line);
            }
            filtered.len()
        }
        Err(e) => {
            error!("Error filtering results: {}", e);
            0
        }
    }
}
