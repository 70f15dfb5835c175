//! Tests for report parsing and rendering.

use super::*;

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<results version="2">
    <cppcheck version="2.13.0"/>
    <errors>
        <error id="misra-c2012-8.4" severity="style" msg="A compatible declaration shall be visible" verbose="misra 8.4">
            <location file="source/core_mqtt.c" line="10" column="5"/>
            <symbol>MQTT_Init</symbol>
        </error>
        <error id="nullPointer" severity="error" msg="Null pointer dereference: p &amp; q" cwe="476">
            <location file="source/core_mqtt.c" line="42" column="9" info="Null pointer dereference"/>
            <location file="source/core_mqtt_state.c" line="7" column="1" info="Assignment"/>
        </error>
        <error id="misra-c2012-21.6" severity="style" msg="Use of stdio"/>
    </errors>
</results>
"#;

#[test]
fn test_parse_envelope() {
    let report = parse_report(SAMPLE).unwrap();
    assert_eq!(report.version.as_deref(), Some("2"));
    assert_eq!(report.cppcheck_version.as_deref(), Some("2.13.0"));
    assert_eq!(report.findings.len(), 3);
}

#[test]
fn test_parse_finding_attributes_and_locations() {
    let report = parse_report(SAMPLE).unwrap();

    let first = &report.findings[0];
    assert_eq!(first.id, "misra-c2012-8.4");
    assert_eq!(first.severity, "style");
    assert_eq!(first.msg, "A compatible declaration shall be visible");
    assert_eq!(
        first.locations,
        vec![Location {
            file: Some("source/core_mqtt.c".to_string()),
            line: Some("10".to_string()),
        }]
    );

    let second = &report.findings[1];
    assert_eq!(second.msg, "Null pointer dereference: p & q");
    assert_eq!(second.locations.len(), 2);
    assert_eq!(
        second.locations[1].file.as_deref(),
        Some("source/core_mqtt_state.c")
    );

    // Self-closing error with no locations
    let third = &report.findings[2];
    assert_eq!(third.id, "misra-c2012-21.6");
    assert!(third.locations.is_empty());
}

#[test]
fn test_parse_defaults_for_missing_attributes() {
    let xml = r#"<results><errors><error><location file="a.c"/></error></errors></results>"#;
    let report = parse_report(xml).unwrap();

    assert!(report.version.is_none());
    assert!(report.cppcheck_version.is_none());
    let finding = &report.findings[0];
    assert_eq!(finding.id, "");
    assert_eq!(finding.severity, UNKNOWN_SEVERITY);
    assert_eq!(finding.msg, "");
    assert_eq!(finding.locations[0].line_number().unwrap(), 0);
}

#[test]
fn test_parse_ignores_nested_locations() {
    let xml = r#"<results>
  <errors>
    <error id="misra-c2012-1.1">
      <location file="a.c" line="1"/>
      <extra><location file="b.c" line="2"/></extra>
    </error>
  </errors>
</results>"#;
    let report = parse_report(xml).unwrap();
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].locations.len(), 1);
    assert_eq!(report.findings[0].locations[0].file.as_deref(), Some("a.c"));
}

#[test]
fn test_parse_rejects_malformed_xml() {
    let xml = r#"<results><errors><error id="x"></errors></results>"#;
    assert!(parse_report(xml).is_err());
}

#[test]
fn test_parse_rejects_truncated_document() {
    let xml = r#"<results version="2"><errors><error id="x">"#;
    assert!(parse_report(xml).is_err());
}

#[test]
fn test_parse_rejects_empty_document() {
    let err = parse_report("").unwrap_err();
    assert!(err.to_string().contains("no root element"));
}

#[test]
fn test_location_line_number() {
    let loc = |line: Option<&str>| Location {
        file: Some("a.c".to_string()),
        line: line.map(str::to_string),
    };

    assert_eq!(loc(Some("12")).line_number().unwrap(), 12);
    assert_eq!(loc(Some(" 7 ")).line_number().unwrap(), 7);
    assert_eq!(loc(Some("0")).line_number().unwrap(), 0);
    assert_eq!(loc(Some("-3")).line_number().unwrap(), 0);
    assert_eq!(loc(None).line_number().unwrap(), 0);
    assert!(loc(Some("twelve")).line_number().is_err());
}

#[test]
fn test_location_empty_file_is_absent() {
    let loc = Location {
        file: Some(String::new()),
        line: Some("1".to_string()),
    };
    assert!(loc.file_path().is_none());
}

#[test]
fn test_render_envelope_with_kept_findings() {
    let report = parse_report(SAMPLE).unwrap();
    let kept = vec![report.findings[0].clone()];
    let filtered = FilteredReport::from_source(&report, kept).unwrap();

    let xml = String::from_utf8(render_report(&filtered).unwrap()).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
    assert!(xml.contains(r#"<results version="2">"#));
    assert!(xml.contains(r#"<cppcheck version="2.13.0"/>"#));
    assert!(xml.contains(r#"verbose="misra 8.4""#));
    assert!(xml.contains("<symbol>MQTT_Init</symbol>"));
    assert!(!xml.contains("nullPointer"));
    assert!(xml.trim_end().ends_with("</results>"));
}

#[test]
fn test_render_preserves_escaped_attributes() {
    let report = parse_report(SAMPLE).unwrap();
    let kept = vec![report.findings[1].clone()];
    let filtered = FilteredReport::from_source(&report, kept).unwrap();

    let xml = String::from_utf8(render_report(&filtered).unwrap()).unwrap();
    assert!(xml.contains("p &amp; q"));

    // Output parses back to the same finding
    let reparsed = parse_report(&xml).unwrap();
    assert_eq!(reparsed.findings.len(), 1);
    assert_eq!(reparsed.findings[0].msg, "Null pointer dereference: p & q");
    assert_eq!(reparsed.findings[0].locations, report.findings[1].locations);
}

#[test]
fn test_render_defaults_envelope() {
    let report = parse_report(r#"<results><cppcheck/><errors/></results>"#).unwrap();
    assert_eq!(report.cppcheck_version.as_deref(), Some(""));

    let filtered = FilteredReport::from_source(&report, Vec::new()).unwrap();
    assert_eq!(filtered.version, DEFAULT_RESULTS_VERSION);
    assert_eq!(filtered.cppcheck_version, "");

    let xml = String::from_utf8(render_report(&filtered).unwrap()).unwrap();
    assert!(xml.contains(r#"<results version="2">"#));
    assert!(xml.contains(r#"<cppcheck version=""/>"#));
    assert!(xml.contains("<errors/>"));
}

#[test]
fn test_write_and_load_report_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("cppcheck.xml");
    std::fs::write(&input, SAMPLE).unwrap();

    let report = load_report(&input).unwrap();
    let filtered = FilteredReport::from_source(&report, report.findings.clone()).unwrap();
    let output = dir.path().join("filtered.xml");
    write_report(&filtered, &output).unwrap();

    let written = load_report(&output).unwrap();
    let ids: Vec<&str> = written.findings.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["misra-c2012-8.4", "nullPointer", "misra-c2012-21.6"]);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = load_report(&dir.path().join("missing.xml")).unwrap_err();
    assert!(matches!(err, crate::error::FilterError::Io { .. }));
}

#[test]
fn test_envelope_requires_cppcheck_element() {
    let report = parse_report(r#"<results version="2"><errors/></results>"#).unwrap();
    assert!(report.cppcheck_version.is_none());

    let err = FilteredReport::from_source(&report, Vec::new()).unwrap_err();
    assert!(matches!(err, crate::error::FilterError::ReportError(_)));
    assert!(err.to_string().contains("<cppcheck>"));
}

#[test]
fn test_cppcheck_element_must_be_under_root() {
    let xml = r#"<results><errors><cppcheck version="9"/></errors></results>"#;
    assert!(parse_report(xml).unwrap().cppcheck_version.is_none());
}

#[test]
fn test_render_keeps_finding_body_verbatim() {
    let body = r#"<error id="misra-c2012-8.4" severity="style" msg="a &lt; b">
      <location file="a.c" line="3"/>
      <symbol>  x  </symbol>
      <!-- note -->
    </error>"#;
    let xml = format!(
        r#"<results version="2"><cppcheck version="2.13.0"/><errors>
    {}
  </errors></results>"#,
        body
    );
    let report = parse_report(&xml).unwrap();
    let kept = report.findings.clone();
    let filtered = FilteredReport::from_source(&report, kept).unwrap();

    let out = String::from_utf8(render_report(&filtered).unwrap()).unwrap();
    assert!(out.contains(body), "body not preserved in:\n{}", out);
    assert!(out.contains("<symbol>  x  </symbol>"));
}

#[test]
fn test_parse_nested_error_is_its_own_finding() {
    let xml = r#"<results><cppcheck version="2.13.0"/><errors>
    <error id="misra-c2012-1.1">
      <location file="a.c" line="1"/>
      <error id="misra-c2012-1.2"><location file="b.c" line="2"/></error>
    </error>
    <error id="misra-c2012-1.3"/>
  </errors></results>"#;
    let report = parse_report(xml).unwrap();

    let ids: Vec<&str> = report.findings.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["misra-c2012-1.1", "misra-c2012-1.2", "misra-c2012-1.3"]);

    // Outer keeps only its direct location, inner gets its own
    assert_eq!(report.findings[0].locations.len(), 1);
    assert_eq!(report.findings[0].locations[0].file.as_deref(), Some("a.c"));
    assert_eq!(report.findings[1].locations[0].file.as_deref(), Some("b.c"));

    // Outer body still contains the nested element
    let filtered = FilteredReport::from_source(&report, vec![report.findings[0].clone()]).unwrap();
    let out = String::from_utf8(render_report(&filtered).unwrap()).unwrap();
    assert!(out.contains(r#"<error id="misra-c2012-1.2">"#));
}
