//! Streaming parser for cppcheck XML reports.

use crate::error::{FilterError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use super::model::{Finding, Location, Report, UNKNOWN_SEVERITY};

/// An `<error>` element whose end tag has not been read yet.
struct OpenFinding {
    /// Position in `Report::findings`.
    index: usize,
    /// Open-element depth once the `<error>` start tag has been read.
    depth: usize,
}

/// Parse a cppcheck XML report.
///
/// Every `<error>` element at any depth becomes a [`Finding`], in start-tag
/// order. A nested `<error>` is its own finding and also stays part of the
/// enclosing finding's body. Only direct `<location>` children count as
/// locations. The `<cppcheck>` element directly under the root supplies the
/// tool version.
///
/// Each finding keeps every event of its element untouched, whitespace
/// included, so it can be written back verbatim.
///
/// # Returns
///
/// * `Ok(Report)` - Findings in document order
/// * `Err(FilterError::Xml)` - The document is not well-formed
/// * `Err(FilterError::ReportError)` - No root element, or the document ends early
pub fn parse_report(xml: &str) -> Result<Report> {
    let mut reader = Reader::from_str(xml);

    let mut report = Report::default();
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut open: Vec<OpenFinding> = Vec::new();

    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Eof => break,
            Event::Start(e) | Event::Empty(e) => {
                let is_start = matches!(event, Event::Start(_));
                let name = e.name();

                if depth == 0 {
                    saw_root = true;
                    report.version = attr(e, "version")?;
                } else if depth == 1
                    && name.as_ref() == b"cppcheck"
                    && report.cppcheck_version.is_none()
                {
                    report.cppcheck_version = Some(attr(e, "version")?.unwrap_or_default());
                }

                if name.as_ref() == b"location" {
                    if let Some(parent) = open.last().filter(|f| f.depth == depth) {
                        report.findings[parent.index]
                            .locations
                            .push(read_location(e)?);
                    }
                }

                let mut owners: Vec<usize> = open.iter().map(|f| f.index).collect();
                if name.as_ref() == b"error" {
                    report.findings.push(read_finding(e)?);
                    let index = report.findings.len() - 1;
                    owners.push(index);
                    if is_start {
                        open.push(OpenFinding {
                            index,
                            depth: depth + 1,
                        });
                    }
                }
                record(&mut report.findings, &owners, &event);

                if is_start {
                    depth += 1;
                }
            }
            Event::End(_) => {
                let owners: Vec<usize> = open.iter().map(|f| f.index).collect();
                record(&mut report.findings, &owners, &event);
                depth = depth.saturating_sub(1);
                while open.last().is_some_and(|f| depth < f.depth) {
                    open.pop();
                }
            }
            _ => {
                let owners: Vec<usize> = open.iter().map(|f| f.index).collect();
                record(&mut report.findings, &owners, &event);
            }
        }
    }

    if !saw_root {
        return Err(FilterError::ReportError(
            "report has no root element".to_string(),
        ));
    }
    if depth != 0 || !open.is_empty() {
        return Err(FilterError::ReportError(format!(
            "report ends with {} unclosed element(s)",
            depth
        )));
    }

    Ok(report)
}

/// Append `event` to the body of every finding in `owners`.
fn record(findings: &mut [Finding], owners: &[usize], event: &Event<'_>) {
    for &index in owners {
        findings[index].events.push(event.clone().into_owned());
    }
}

fn read_finding(e: &BytesStart<'_>) -> Result<Finding> {
    Ok(Finding::new(
        attr(e, "id")?.unwrap_or_default(),
        attr(e, "severity")?.unwrap_or_else(|| UNKNOWN_SEVERITY.to_string()),
        attr(e, "msg")?.unwrap_or_default(),
    ))
}

fn read_location(e: &BytesStart<'_>) -> Result<Location> {
    Ok(Location {
        file: attr(e, "file")?,
        line: attr(e, "line")?,
    })
}

/// Unescaped value of attribute `name`, if present.
fn attr(e: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    match e.try_get_attribute(name).map_err(quick_xml::Error::from)? {
        Some(a) => Ok(Some(a.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}
