//! Serialization of filtered reports.

use crate::error::{FilterError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;
use std::path::Path;

use super::model::FilteredReport;

/// Render the report as an XML document with an XML declaration.
///
/// Layout: `<results version>`, `<cppcheck version/>`, then `<errors>`
/// holding each kept `<error>` element re-emitted from its original events.
/// Only the envelope is indented here; finding bodies keep their own
/// whitespace.
pub fn render_report(report: &FilteredReport) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());

    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
    )?;
    newline(&mut writer, 0)?;
    emit(
        &mut writer,
        Event::Start(
            BytesStart::new("results").with_attributes([("version", report.version.as_str())]),
        ),
    )?;
    newline(&mut writer, 1)?;
    emit(
        &mut writer,
        Event::Empty(
            BytesStart::new("cppcheck")
                .with_attributes([("version", report.cppcheck_version.as_str())]),
        ),
    )?;
    newline(&mut writer, 1)?;

    if report.is_empty() {
        emit(&mut writer, Event::Empty(BytesStart::new("errors")))?;
    } else {
        emit(&mut writer, Event::Start(BytesStart::new("errors")))?;
        for finding in &report.findings {
            newline(&mut writer, 2)?;
            for event in &finding.events {
                emit(&mut writer, event.clone())?;
            }
        }
        newline(&mut writer, 1)?;
        emit(&mut writer, Event::End(BytesEnd::new("errors")))?;
    }

    newline(&mut writer, 0)?;
    emit(&mut writer, Event::End(BytesEnd::new("results")))?;
    newline(&mut writer, 0)?;

    Ok(writer.into_inner())
}

/// Render `report` and write it to `path`.
pub fn write_report(report: &FilteredReport, path: &Path) -> Result<()> {
    let bytes = render_report(report)?;
    std::fs::write(path, bytes).map_err(|e| FilterError::io(path, e))
}

/// Line break followed by `level` two-space indents.
fn newline(writer: &mut Writer<Vec<u8>>, level: usize) -> Result<()> {
    let text = format!("\n{}", "  ".repeat(level));
    emit(writer, Event::Text(BytesText::new(&text)))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| FilterError::Xml(e.into()))
}
