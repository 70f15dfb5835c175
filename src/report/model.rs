//! In-memory view of a cppcheck XML report.

use crate::error::{FilterError, Result};
use quick_xml::events::Event;

/// Root `version` used when the input report does not carry one.
pub const DEFAULT_RESULTS_VERSION: &str = "2";

/// Severity shown for findings without a `severity` attribute.
pub const UNKNOWN_SEVERITY: &str = "unknown";

/// A parsed cppcheck report.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// `version` attribute of the root element.
    pub version: Option<String>,
    /// `version` attribute of the `<cppcheck>` element under the root.
    /// `None` when the element itself is missing; an element without the
    /// attribute gives an empty string.
    pub cppcheck_version: Option<String>,
    /// Every `<error>` element in document order.
    pub findings: Vec<Finding>,
}

/// One `<location>` child of an `<error>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub file: Option<String>,
    /// Raw `line` attribute text.
    pub line: Option<String>,
}

impl Location {
    /// The 1-based line number, or 0 when the attribute is missing or not positive.
    ///
    /// A value that is not an integer is a report error.
    pub fn line_number(&self) -> Result<usize> {
        let Some(raw) = self.line.as_deref() else {
            return Ok(0);
        };
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| FilterError::ReportError(format!("invalid line number '{}'", raw)))?;
        Ok(usize::try_from(value).unwrap_or(0))
    }

    /// File path, if present and non-empty.
    pub fn file_path(&self) -> Option<&str> {
        self.file.as_deref().filter(|f| !f.is_empty())
    }
}

/// One `<error>` element.
#[derive(Debug, Clone)]
pub struct Finding {
    /// Rule identifier, e.g. `misra-c2012-8.4`.
    pub id: String,
    pub severity: String,
    pub msg: String,
    pub locations: Vec<Location>,
    /// The element exactly as read, from its start tag to its end tag.
    pub(super) events: Vec<Event<'static>>,
}

impl Finding {
    pub(super) fn new(id: String, severity: String, msg: String) -> Self {
        Self {
            id,
            severity,
            msg,
            locations: Vec::new(),
            events: Vec::new(),
        }
    }
}

/// The report written back out: the envelope plus the kept findings.
#[derive(Debug, Clone)]
pub struct FilteredReport {
    pub version: String,
    pub cppcheck_version: String,
    pub findings: Vec<Finding>,
}

impl FilteredReport {
    /// Wrap `findings` in the envelope taken from `source`.
    ///
    /// Fails when `source` has no `<cppcheck>` element, since the envelope
    /// cannot be rebuilt without it.
    pub fn from_source(source: &Report, findings: Vec<Finding>) -> Result<Self> {
        let cppcheck_version = source.cppcheck_version.clone().ok_or_else(|| {
            FilterError::ReportError("report has no <cppcheck> element".to_string())
        })?;

        Ok(Self {
            version: source
                .version
                .clone()
                .unwrap_or_else(|| DEFAULT_RESULTS_VERSION.to_string()),
            cppcheck_version,
            findings,
        })
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}
