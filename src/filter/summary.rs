//! Human-readable summary of kept findings.

use crate::report::{FilteredReport, Finding};

/// Header line followed by one line per location of every kept finding.
pub fn summary_lines(report: &FilteredReport) -> Vec<String> {
    let mut lines = vec![format!("Found {} issues in changed lines", report.len())];
    for finding in &report.findings {
        lines.extend(finding_lines(finding));
    }
    lines
}

/// `<file>:<line>: <severity>: <message> [<rule-id>]` for each location.
pub fn finding_lines(finding: &Finding) -> Vec<String> {
    finding
        .locations
        .iter()
        .map(|loc| {
            format!(
                "{}:{}: {}: {} [{}]",
                loc.file.as_deref().unwrap_or_default(),
                loc.line.as_deref().unwrap_or_default(),
                finding.severity,
                finding.msg,
                finding.id
            )
        })
        .collect()
}
