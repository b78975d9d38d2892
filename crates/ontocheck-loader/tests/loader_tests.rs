use ontocheck_core::model::{Iri, ObjectValue, RangeSpec};
use ontocheck_loader::{DefaultGraphLoader, GraphLoader, InputFormat, LoadError};
use std::io::Write;
use tempfile::NamedTempFile;

const ABOX: &str = r#"
@prefix ex: <http://example.org/research/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

<http://example.org/research/author/1> a ex:Author ;
    ex:name "Jane Doe"^^xsd:string .
<http://example.org/research/paper/1> a ex:Paper ;
    ex:hasCorrespondingAuthor <http://example.org/research/author/1> ;
    ex:citationCount "3"^^xsd:integer .
"#;

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_turtle_facts_from_file() {
    let file = temp_file(".ttl", ABOX);
    let facts = DefaultGraphLoader
        .load_facts_file(file.path(), None)
        .unwrap();

    assert_eq!(facts.len(), 5);
    let author = Iri::new("http://example.org/research/author/1");
    assert!(facts
        .types_of(&author)
        .contains(&Iri::new("http://example.org/research/Author")));
}

#[test]
fn test_load_json_schema_from_file() {
    let file = temp_file(
        ".json",
        r#"{ "classes": ["Author"], "properties": [ { "id": "name", "domain": ["Author"], "range": "literal" } ] }"#,
    );
    let schema = DefaultGraphLoader
        .load_schema_file(file.path(), None)
        .unwrap();
    assert!(schema.is_declared_class(&Iri::new("Author")));
    assert_eq!(schema.range_of(&Iri::new("name")), Some(&RangeSpec::Literal));
}

#[test]
fn test_json_facts_with_explicit_format() {
    let file = temp_file(
        ".data",
        r#"{ "statements": [ { "subject": "a1", "predicate": "writes", "object": { "entity": "p1" } } ] }"#,
    );
    let facts = DefaultGraphLoader
        .load_facts_file(file.path(), Some(InputFormat::Json))
        .unwrap();
    let st = facts.statements().next().unwrap();
    assert_eq!(st.object, ObjectValue::entity("p1"));
}

#[test]
fn test_unknown_extension_without_format() {
    let file = temp_file(".data", "{}");
    let result = DefaultGraphLoader.load_facts_file(file.path(), None);
    assert!(matches!(result, Err(LoadError::UnsupportedFormat(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = DefaultGraphLoader.load_schema_file(
        std::path::Path::new("/nonexistent/ontocheck/tbox.ttl"),
        None,
    );
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[test]
fn test_turtle_schema_through_loader() {
    let tbox = r#"
        @prefix ex: <http://example.org/research/> .
        @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        ex:Author a rdfs:Class .
        ex:writes a rdf:Property ; rdfs:domain ex:Author .
    "#;
    let schema = DefaultGraphLoader
        .load_schema(tbox, InputFormat::Turtle)
        .unwrap();
    assert_eq!(schema.statistics().property_count, 1);
    assert_eq!(
        schema.range_of(&Iri::new("http://example.org/research/writes")),
        None
    );
}

#[test]
fn test_research_ontology_turtle_export_reloads() {
    use ontocheck_core::{vocabulary, RESEARCH_NAMESPACE};
    use ontocheck_loader::{parse_ntriples, parse_turtle, schema_from_statements};
    use ontocheck_loader::{write_ntriples, write_turtle};
    use ontocheck_store::research;

    let exported = research::statements();
    let text = write_turtle(&exported, &[("ex", RESEARCH_NAMESPACE)]).unwrap();
    assert!(text.contains("rdfs:subClassOf"));

    let reloaded = parse_turtle(&text).unwrap();
    assert_eq!(reloaded.len(), exported.len());
    let subclass = reloaded
        .iter()
        .filter(|st| st.predicate == vocabulary::RDFS_SUBCLASS_OF)
        .count();
    assert_eq!(subclass, research::SUBCLASS_AXIOMS.len());
    assert_eq!(schema_from_statements(&reloaded).unwrap(), research::schema());

    let nt = write_ntriples(&exported).unwrap();
    let reloaded = parse_ntriples(&nt).unwrap();
    assert_eq!(schema_from_statements(&reloaded).unwrap(), research::schema());
}
