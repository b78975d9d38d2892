//! 適合性検証レポート

use crate::finding::{FindingSummary, Findings, MalformedTypeAssertion, Mismatch, MismatchKind};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

const NONE_MARKER: &str = "none";

/// One category of the rendered report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub lines: Vec<String>,
}

impl ReportSection {
    fn new<I: IntoIterator<Item = String>>(title: &str, lines: I) -> Self {
        Self {
            title: title.to_string(),
            lines: lines.into_iter().collect(),
        }
    }
}

/// Conformance Report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub conforms: bool,
    pub summary: FindingSummary,
    pub findings: Findings,
}

impl ConformanceReport {
    pub fn new(findings: Findings) -> Self {
        Self {
            conforms: findings.is_conformant(),
            summary: findings.summary(),
            findings,
        }
    }

    /// カテゴリごとのセクション (空でも必ず出力)
    pub fn sections(&self) -> Vec<ReportSection> {
        render(&self.findings)
    }

    /// 人間可読形式で出力
    pub fn to_text(&self) -> String {
        let mut output = format!(
            "Conformance Report: {}\n",
            if self.conforms { "CONFORMS" } else { "DOES NOT CONFORM" }
        );

        for section in self.sections() {
            output.push_str(&format!("\n## {} ({})\n", section.title, section.lines.len()));
            if section.lines.is_empty() {
                output.push_str(&format!("- {}\n", NONE_MARKER));
            }
            for line in &section.lines {
                output.push_str(&format!("- {}\n", line));
            }
        }

        output
    }

    /// JSON 形式でシリアライズ
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn to_json_string(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Render findings as ordered sections: missing classes, missing properties,
/// domain/range mismatches, malformed type assertions
pub fn render(findings: &Findings) -> Vec<ReportSection> {
    vec![
        ReportSection::new(
            "Missing classes",
            findings.missing_classes.iter().map(|c| c.to_string()),
        ),
        ReportSection::new(
            "Missing properties",
            findings.missing_properties.iter().map(|p| p.to_string()),
        ),
        ReportSection::new(
            "Domain/range mismatches",
            findings.mismatches.iter().map(describe_mismatch),
        ),
        ReportSection::new(
            "Malformed type assertions",
            findings
                .malformed_type_assertions
                .iter()
                .map(describe_malformed),
        ),
    ]
}

fn describe_mismatch(m: &Mismatch) -> String {
    let asserted = if m.asserted.is_empty() {
        String::new()
    } else {
        format!(" (asserted: {})", m.asserted.iter().join(", "))
    };

    let expected = m.expected.iter().join(" | ");

    match m.kind {
        MismatchKind::Domain => format!(
            "{} for {}: {} is not a {}{}",
            m.kind.label(),
            m.property,
            m.subject,
            expected,
            asserted
        ),
        MismatchKind::Range => format!(
            "{} for {}: {} is not a {}{}",
            m.kind.label(),
            m.property,
            m.object,
            expected,
            asserted
        ),
        MismatchKind::TypeCategory => format!(
            "{} for {}: {} has literal object {} where an instance of {} is expected",
            m.kind.label(),
            m.property,
            m.subject,
            m.object,
            expected
        ),
    }
}

fn describe_malformed(m: &MalformedTypeAssertion) -> String {
    format!("{} has rdf:type with literal object {}", m.subject, m.object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontocheck_core::model::{Iri, Literal, ObjectValue};

    #[test]
    fn test_empty_findings_render_none_markers() {
        let report = ConformanceReport::new(Findings::default());
        assert!(report.conforms);
        assert_eq!(
            report.to_text(),
            "Conformance Report: CONFORMS\n\
             \n## Missing classes (0)\n- none\n\
             \n## Missing properties (0)\n- none\n\
             \n## Domain/range mismatches (0)\n- none\n\
             \n## Malformed type assertions (0)\n- none\n"
        );
    }

    #[test]
    fn test_sections_keep_fixed_order() {
        let titles: Vec<_> = render(&Findings::default())
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Missing classes",
                "Missing properties",
                "Domain/range mismatches",
                "Malformed type assertions"
            ]
        );
    }

    #[test]
    fn test_mismatch_lines() {
        let domain = Mismatch {
            kind: MismatchKind::Domain,
            property: Iri::new("writes"),
            subject: Iri::new("a1"),
            object: ObjectValue::entity("p1"),
            expected: vec![Iri::new("Author")],
            asserted: vec![Iri::new("Reviewer")],
            statement_index: 1,
        };
        assert_eq!(
            describe_mismatch(&domain),
            "domain mismatch for writes: a1 is not a Author (asserted: Reviewer)"
        );

        let category = Mismatch {
            kind: MismatchKind::TypeCategory,
            property: Iri::new("reviewedBy"),
            subject: Iri::new("p1"),
            object: ObjectValue::Literal(Literal::string("Jane Doe")),
            expected: vec![Iri::new("Author")],
            asserted: Vec::new(),
            statement_index: 0,
        };
        assert_eq!(
            describe_mismatch(&category),
            "type-category mismatch for reviewedBy: p1 has literal object \
             \"Jane Doe\"^^<http://www.w3.org/2001/XMLSchema#string> where an instance of Author is expected"
        );
    }

    #[test]
    fn test_json_record_shape() {
        let mut findings = Findings::default();
        findings.missing_classes.insert(Iri::new("Reviewer"));
        let report = ConformanceReport::new(findings);
        let json = report.to_json().unwrap();

        assert_eq!(json["conforms"], serde_json::json!(false));
        assert_eq!(json["summary"]["missing_classes"], serde_json::json!(1));
        assert_eq!(
            json["findings"]["missing_classes"],
            serde_json::json!(["Reviewer"])
        );
    }
}
