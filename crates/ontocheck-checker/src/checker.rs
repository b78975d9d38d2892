//! スキーマ適合性検証
//!
//! 3 つの独立した検査をファクトストア全体に対して実行します:
//! (a) 未宣言クラスの使用
//! (b) 未宣言プロパティの使用
//! (c) 宣言済みプロパティの domain / range 不一致
//!
//! 型情報のないノードは検査しません。肯定的に誤った型だけが違反です。

use crate::config::{CheckConfig, ReservedPredicates};
use crate::finding::{Findings, MalformedTypeAssertion, Mismatch, MismatchKind};
use ontocheck_core::model::{Iri, ObjectValue, RangeSpec, Statement};
use ontocheck_store::{FactStore, SchemaStore};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Conformance validator trait
pub trait ConformanceValidator {
    fn check(&self, schema: &SchemaStore, facts: &FactStore) -> Findings;
}

/// Default conformance checker.
///
/// Holds no state besides its configuration; stores are only borrowed for
/// the duration of one pass.
#[derive(Debug, Clone, Default)]
pub struct ConformanceChecker {
    config: CheckConfig,
}

impl ConformanceChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    fn run_sequential(&self, schema: &SchemaStore, facts: &FactStore) -> Findings {
        Findings {
            missing_classes: undeclared_classes(schema, facts),
            missing_properties: undeclared_properties(
                schema,
                facts,
                self.config.reserved_predicates,
            ),
            mismatches: domain_range_mismatches(schema, facts),
            malformed_type_assertions: malformed_type_assertions(facts),
        }
    }

    #[cfg(feature = "parallel")]
    fn run(&self, schema: &SchemaStore, facts: &FactStore) -> Findings {
        if !self.config.parallel {
            return self.run_sequential(schema, facts);
        }

        let reserved = self.config.reserved_predicates;
        let ((missing_classes, malformed_type_assertions), (missing_properties, mismatches)) =
            rayon::join(
                || {
                    rayon::join(
                        || undeclared_classes(schema, facts),
                        || malformed_type_assertions(facts),
                    )
                },
                || {
                    rayon::join(
                        || undeclared_properties(schema, facts, reserved),
                        || domain_range_mismatches(schema, facts),
                    )
                },
            );

        Findings {
            missing_classes,
            missing_properties,
            mismatches,
            malformed_type_assertions,
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn run(&self, schema: &SchemaStore, facts: &FactStore) -> Findings {
        self.run_sequential(schema, facts)
    }
}

impl ConformanceValidator for ConformanceChecker {
    fn check(&self, schema: &SchemaStore, facts: &FactStore) -> Findings {
        info!(statements = facts.len(), "starting conformance check");

        let mut findings = self.run(schema, facts);
        findings.sort();

        let summary = findings.summary();
        info!(
            missing_classes = summary.missing_classes,
            missing_properties = summary.missing_properties,
            domain = summary.domain_mismatches,
            range = summary.range_mismatches,
            type_category = summary.type_category_mismatches,
            malformed = summary.malformed_type_assertions,
            "conformance check complete"
        );
        findings
    }
}

/// (a) Classes named in type assertions but absent from the schema
pub fn undeclared_classes(schema: &SchemaStore, facts: &FactStore) -> BTreeSet<Iri> {
    let missing: BTreeSet<Iri> = facts
        .type_assertions()
        .filter_map(|st| st.object.as_entity())
        .filter(|class| !schema.is_declared_class(class))
        .cloned()
        .collect();
    debug!(count = missing.len(), "undeclared classes");
    missing
}

/// (b) Predicates used in the fact graph but absent from the schema
pub fn undeclared_properties(
    schema: &SchemaStore,
    facts: &FactStore,
    reserved: ReservedPredicates,
) -> BTreeSet<Iri> {
    let missing: BTreeSet<Iri> = facts
        .statements()
        .map(|st| &st.predicate)
        .filter(|p| !reserved.is_reserved(p) && !schema.is_declared_property(p))
        .cloned()
        .collect();
    debug!(count = missing.len(), "undeclared properties");
    missing
}

/// (c) Domain, range and type-category mismatches of declared properties
pub fn domain_range_mismatches(schema: &SchemaStore, facts: &FactStore) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();

    for (index, st) in facts.indexed_statements() {
        if !schema.is_declared_property(&st.predicate) {
            continue;
        }
        if let Some(m) = check_domain(schema, facts, index, st) {
            mismatches.push(m);
        }
        if let Some(m) = check_range(schema, facts, index, st) {
            mismatches.push(m);
        }
    }

    mismatches.sort_by(Mismatch::canonical_cmp);
    debug!(count = mismatches.len(), "domain/range mismatches");
    mismatches
}

/// Type assertions whose object is a literal
pub fn malformed_type_assertions(facts: &FactStore) -> Vec<MalformedTypeAssertion> {
    facts
        .indexed_statements()
        .filter(|(_, st)| st.is_type_assertion())
        .filter_map(|(index, st)| {
            st.object.as_literal().map(|lit| MalformedTypeAssertion {
                subject: st.subject.clone(),
                object: lit.clone(),
                statement_index: index,
            })
        })
        .collect()
}

fn check_domain(
    schema: &SchemaStore,
    facts: &FactStore,
    index: usize,
    st: &Statement,
) -> Option<Mismatch> {
    let domain = schema.domain_of(&st.predicate);
    if domain.is_empty() {
        return None;
    }
    let types = facts.types_of(&st.subject);
    // 型なしの主語はスキップ
    if types.is_empty() || !types.is_disjoint(domain) {
        return None;
    }
    Some(Mismatch {
        kind: MismatchKind::Domain,
        property: st.predicate.clone(),
        subject: st.subject.clone(),
        object: st.object.clone(),
        expected: domain.iter().cloned().collect(),
        asserted: types.iter().cloned().collect(),
        statement_index: index,
    })
}

fn check_range(
    schema: &SchemaStore,
    facts: &FactStore,
    index: usize,
    st: &Statement,
) -> Option<Mismatch> {
    let mismatch = |kind, expected, asserted| Mismatch {
        kind,
        property: st.predicate.clone(),
        subject: st.subject.clone(),
        object: st.object.clone(),
        expected,
        asserted,
        statement_index: index,
    };

    match (schema.range_of(&st.predicate)?, &st.object) {
        (RangeSpec::Class(class), ObjectValue::Entity(object)) => {
            let types = facts.types_of(object);
            if types.is_empty() || types.contains(class) {
                return None;
            }
            Some(mismatch(
                MismatchKind::Range,
                vec![class.clone()],
                types.iter().cloned().collect(),
            ))
        }
        (RangeSpec::Class(class), ObjectValue::Literal(_)) => Some(mismatch(
            MismatchKind::TypeCategory,
            vec![class.clone()],
            Vec::new(),
        )),
        // literal ranges are never checked
        (RangeSpec::Literal, _) => None,
    }
}
