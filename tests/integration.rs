// Integration tests for ontocheck components
// These tests run the whole pipeline: source text -> stores -> checker -> report

#![cfg(test)]

use ontocheck_checker::{
    CheckConfig, ConformanceChecker, ConformanceReport, ConformanceValidator, MismatchKind,
};
use ontocheck_core::model::{Iri, Literal, Statement};
use ontocheck_core::vocabulary;
use ontocheck_core::{EntityKind, IdentifierMinter};
use ontocheck_loader::{DefaultGraphLoader, GraphLoader, InputFormat, SchemaDocument};
use ontocheck_store::{research, FactStore};
use proptest::prelude::*;

const TBOX: &str = r#"
@prefix ex: <http://example.org/research/> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

ex:Author a owl:Class .
ex:Paper a owl:Class .
ex:writes a owl:ObjectProperty ;
    rdfs:domain ex:Author ;
    rdfs:range ex:Paper .
ex:reviewedBy a owl:ObjectProperty ;
    rdfs:range ex:Author .
ex:title a owl:DatatypeProperty ;
    rdfs:domain ex:Paper ;
    rdfs:range xsd:string .
"#;

fn ex(local: &str) -> Iri {
    Iri::new(format!("http://example.org/research/{}", local))
}

fn check(schema_src: &str, facts_src: &str) -> ConformanceReport {
    let loader = DefaultGraphLoader;
    let schema = loader.load_schema(schema_src, InputFormat::Turtle).unwrap();
    let facts = loader.load_facts(facts_src, InputFormat::Turtle).unwrap();
    ConformanceReport::new(ConformanceChecker::new().check(&schema, &facts))
}

#[test]
fn test_end_to_end_untyped_object_is_skipped() {
    let report = check(
        TBOX,
        r#"
        @prefix ex: <http://example.org/research/> .
        ex:a1 a ex:Author ; ex:writes ex:p1 .
        "#,
    );
    assert!(report.conforms, "{}", report.to_text());
}

#[test]
fn test_end_to_end_undeclared_type_and_domain() {
    let report = check(
        TBOX,
        r#"
        @prefix ex: <http://example.org/research/> .
        ex:a1 a ex:Reviewer ; ex:writes ex:p1 .
        "#,
    );
    let findings = &report.findings;
    assert_eq!(findings.missing_classes.len(), 1);
    assert!(findings.missing_classes.contains(&ex("Reviewer")));
    assert_eq!(findings.mismatches_of(MismatchKind::Domain).count(), 1);
    assert!(findings.missing_properties.is_empty());
}

#[test]
fn test_end_to_end_literal_for_class_range() {
    let report = check(
        TBOX,
        r#"
        @prefix ex: <http://example.org/research/> .
        ex:p1 ex:reviewedBy "Jane Doe" .
        "#,
    );
    let findings = &report.findings;
    assert_eq!(findings.mismatches.len(), 1);
    assert_eq!(findings.mismatches[0].kind, MismatchKind::TypeCategory);
    assert!(report.to_text().contains("type-category mismatch"));
}

#[test]
fn test_end_to_end_entity_for_literal_range_passes() {
    let report = check(
        TBOX,
        r#"
        @prefix ex: <http://example.org/research/> .
        ex:p1 a ex:Paper ; ex:title ex:t1 .
        ex:p2 a ex:Paper ; ex:title ex:a2 .
        ex:a2 a ex:Author .
        "#,
    );
    assert!(report.conforms, "{}", report.to_text());
}

#[test]
fn test_end_to_end_literal_type_assertion() {
    let report = check(
        TBOX,
        r#"
        @prefix ex: <http://example.org/research/> .
        ex:a1 a "Author" .
        "#,
    );
    assert_eq!(report.findings.malformed_type_assertions.len(), 1);
    assert!(report.findings.missing_classes.is_empty());
    assert!(!report.conforms);
}

#[test]
fn test_research_schema_with_minted_abox() {
    let minter = IdentifierMinter::research();
    let term = |local: &str| minter.term(local).unwrap();
    let author = minter.mint(EntityKind::Author, "Jane Doe").unwrap();
    let paper = minter.mint(EntityKind::Paper, "10.1000/xyz123").unwrap();
    let venue = minter.mint(EntityKind::Venue, "ISWC").unwrap();
    let city = minter.mint(EntityKind::City, "New York").unwrap();

    let facts: FactStore = vec![
        Statement::type_assertion(author.clone(), term("Author")),
        Statement::new(author.clone(), term("name"), Literal::string("Jane Doe")),
        Statement::type_assertion(paper.clone(), term("Paper")),
        Statement::new(paper.clone(), term("hasCorrespondingAuthor"), author.clone()),
        Statement::new(author.clone(), term("writes"), paper.clone()),
        Statement::type_assertion(city.clone(), term("City")),
        Statement::new(city, term("name"), Literal::string("New York")),
        Statement::new(venue.clone(), term("name"), Literal::string("ISWC")),
    ]
    .into_iter()
    .collect();

    let report = ConformanceReport::new(ConformanceChecker::new().check(&research::schema(), &facts));
    assert!(report.conforms, "{}", report.to_text());

    // 論文を Author として書くと domain 違反
    let mut broken = facts.clone();
    broken.insert(Statement::new(paper.clone(), term("writes"), venue));
    let report =
        ConformanceReport::new(ConformanceChecker::new().check(&research::schema(), &broken));
    assert_eq!(report.summary.domain_mismatches, 1);
    assert_eq!(report.findings.mismatches[0].subject, paper);
}

#[test]
fn test_json_and_turtle_schemas_agree() {
    let loader = DefaultGraphLoader;
    let from_turtle = loader.load_schema(TBOX, InputFormat::Turtle).unwrap();
    let json = serde_json::to_string(&SchemaDocument::from_store(&from_turtle)).unwrap();
    let from_json = loader.load_schema(&json, InputFormat::Json).unwrap();
    assert_eq!(from_turtle, from_json);
}

#[test]
fn test_ntriples_facts() {
    let facts = format!(
        "<{a}> <{t}> <{c}> .\n<{a}> <{w}> <{p}> .\n",
        a = ex("a1"),
        t = vocabulary::RDF_TYPE,
        c = ex("Paper"),
        w = ex("writes"),
        p = ex("p1"),
    );
    let loader = DefaultGraphLoader;
    let schema = loader.load_schema(TBOX, InputFormat::Turtle).unwrap();
    let facts = loader.load_facts(&facts, InputFormat::NTriples).unwrap();
    let findings = ConformanceChecker::new().check(&schema, &facts);
    assert_eq!(findings.summary().domain_mismatches, 1);
}

#[test]
fn test_report_text_is_stable_across_runs() {
    let abox = r#"
        @prefix ex: <http://example.org/research/> .
        ex:a1 a ex:Reviewer ; ex:writes ex:p1 ; ex:edits ex:p1 .
        ex:p2 a ex:Paper ; ex:writes ex:p1 ; ex:title ex:t1 .
        ex:p1 ex:reviewedBy "Jane Doe" .
    "#;
    let first = check(TBOX, abox).to_text();
    for _ in 0..5 {
        assert_eq!(check(TBOX, abox).to_text(), first);
    }
}

proptest! {
    #[test]
    fn prop_sequential_and_parallel_reports_match(
        edges in prop::collection::vec((0..5u8, 0..3u8, 0..5u8), 0..30),
        typed in prop::collection::vec((0..5u8, 0..3u8), 0..10),
    ) {
        let classes = ["Author", "Paper", "Reviewer"];
        let properties = ["writes", "reviewedBy", "edits"];

        let mut facts = FactStore::new();
        for (node, class) in typed {
            facts.insert(Statement::type_assertion(ex(&format!("n{}", node)), ex(classes[class as usize])));
        }
        for (s, p, o) in edges {
            facts.insert(Statement::new(
                ex(&format!("n{}", s)),
                ex(properties[p as usize]),
                ex(&format!("n{}", o)),
            ));
        }

        let schema = DefaultGraphLoader.load_schema(TBOX, InputFormat::Turtle).unwrap();
        let sequential = ConformanceChecker::with_config(CheckConfig { parallel: false, ..CheckConfig::default() })
            .check(&schema, &facts);
        let parallel = ConformanceChecker::new().check(&schema, &facts);
        prop_assert_eq!(
            ConformanceReport::new(sequential).to_text(),
            ConformanceReport::new(parallel).to_text()
        );
    }
}
