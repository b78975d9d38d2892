//! 検証結果 (Findings)

use ontocheck_core::model::{Iri, Literal, ObjectValue};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Mismatch kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MismatchKind {
    /// Subject typed, but none of its types is in the declared domain
    Domain,
    /// Object typed, but not with the declared range class
    Range,
    /// Literal object where an instance of the range class is expected
    TypeCategory,
}

impl MismatchKind {
    pub fn label(&self) -> &'static str {
        match self {
            MismatchKind::Domain => "domain mismatch",
            MismatchKind::Range => "range mismatch",
            MismatchKind::TypeCategory => "type-category mismatch",
        }
    }
}

/// One domain/range/type-category violation, tied to a single statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mismatch {
    pub kind: MismatchKind,
    pub property: Iri,
    pub subject: Iri,
    pub object: ObjectValue,
    /// Declared domain classes, or the range class
    pub expected: Vec<Iri>,
    /// Asserted types of the checked node (subject for domain, object for range)
    pub asserted: Vec<Iri>,
    /// Position of the statement in the fact store traversal
    pub statement_index: usize,
}

impl Mismatch {
    /// property, subject, statement position, kind
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.property
            .cmp(&other.property)
            .then_with(|| self.subject.cmp(&other.subject))
            .then_with(|| self.statement_index.cmp(&other.statement_index))
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

/// `rdf:type` statement whose object is a literal instead of a class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MalformedTypeAssertion {
    pub subject: Iri,
    pub object: Literal,
    pub statement_index: usize,
}

/// Counts per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingSummary {
    pub missing_classes: usize,
    pub missing_properties: usize,
    pub domain_mismatches: usize,
    pub range_mismatches: usize,
    pub type_category_mismatches: usize,
    pub malformed_type_assertions: usize,
}

impl FindingSummary {
    pub fn total(&self) -> usize {
        self.missing_classes
            + self.missing_properties
            + self.domain_mismatches
            + self.range_mismatches
            + self.type_category_mismatches
            + self.malformed_type_assertions
    }
}

/// All problems found in one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Findings {
    /// Classes used in type assertions but never declared (each once)
    pub missing_classes: BTreeSet<Iri>,
    /// Predicates used but never declared (each once)
    pub missing_properties: BTreeSet<Iri>,
    /// Per-statement mismatches in canonical order
    pub mismatches: Vec<Mismatch>,
    pub malformed_type_assertions: Vec<MalformedTypeAssertion>,
}

impl Findings {
    pub fn is_conformant(&self) -> bool {
        self.missing_classes.is_empty()
            && self.missing_properties.is_empty()
            && self.mismatches.is_empty()
            && self.malformed_type_assertions.is_empty()
    }

    pub fn mismatches_of(&self, kind: MismatchKind) -> impl Iterator<Item = &Mismatch> + '_ {
        self.mismatches.iter().filter(move |m| m.kind == kind)
    }

    pub fn summary(&self) -> FindingSummary {
        FindingSummary {
            missing_classes: self.missing_classes.len(),
            missing_properties: self.missing_properties.len(),
            domain_mismatches: self.mismatches_of(MismatchKind::Domain).count(),
            range_mismatches: self.mismatches_of(MismatchKind::Range).count(),
            type_category_mismatches: self.mismatches_of(MismatchKind::TypeCategory).count(),
            malformed_type_assertions: self.malformed_type_assertions.len(),
        }
    }

    /// Restore canonical order after merging partial results
    pub fn sort(&mut self) {
        self.mismatches.sort_by(Mismatch::canonical_cmp);
        self.malformed_type_assertions.sort_by(|a, b| {
            a.subject
                .cmp(&b.subject)
                .then_with(|| a.statement_index.cmp(&b.statement_index))
        });
    }
}
