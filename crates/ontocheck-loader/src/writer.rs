//! Turtle / N-Triples 書き出し

use crate::LoadError;
use ontocheck_core::model::{Iri, ObjectValue, Statement};
use ontocheck_core::vocabulary;
use sophia::api::prefix::{Prefix, PrefixMapPair};
use sophia::api::serializer::{Stringifier, TripleSerializer};
use sophia::api::term::{BnodeId, IriRef, LanguageTag, SimpleTerm};
use sophia::api::MownStr;
use sophia::turtle::serializer::nt::NtSerializer;
use sophia::turtle::serializer::turtle::{TurtleConfig, TurtleSerializer};

/// Statements as pretty-printed Turtle. `prefixes` are added to the
/// rdf/rdfs/owl/xsd defaults.
pub fn write_turtle(
    statements: &[Statement],
    prefixes: &[(&str, &str)],
) -> Result<String, LoadError> {
    let triples = to_triples(statements)?;

    let mut prefix_map = TurtleConfig::default_prefix_map();
    prefix_map.push(prefix_pair("owl", vocabulary::OWL_NS)?);
    for (prefix, ns) in prefixes {
        prefix_map.push(prefix_pair(prefix, ns)?);
    }
    let config = TurtleConfig::new()
        .with_pretty(true)
        .with_own_prefix_map(prefix_map);

    let mut serializer = TurtleSerializer::new_stringifier_with_config(config);
    let text = serializer
        .serialize_graph(&triples)
        .map_err(|e| LoadError::Serialize(e.to_string()))?
        .as_str()
        .to_string();
    tracing::debug!(count = triples.len(), "wrote Turtle");
    Ok(text)
}

/// Statements as N-Triples, one line per statement
pub fn write_ntriples(statements: &[Statement]) -> Result<String, LoadError> {
    let triples = to_triples(statements)?;
    let mut serializer = NtSerializer::new_stringifier();
    let text = serializer
        .serialize_graph(&triples)
        .map_err(|e| LoadError::Serialize(e.to_string()))?
        .as_str()
        .to_string();
    Ok(text)
}

fn prefix_pair(prefix: &str, ns: &str) -> Result<PrefixMapPair, LoadError> {
    let prefix = Prefix::new(Box::<str>::from(prefix))
        .map_err(|e| LoadError::MalformedInput(format!("invalid prefix: {}", e)))?;
    let ns = sophia::iri::Iri::new(Box::<str>::from(ns))
        .map_err(|e| LoadError::MalformedInput(format!("invalid namespace: {}", e)))?;
    Ok((prefix, ns))
}

fn to_triples<'a>(statements: &'a [Statement]) -> Result<Vec<[SimpleTerm<'a>; 3]>, LoadError> {
    statements
        .iter()
        .enumerate()
        .map(|(i, st)| -> Result<[SimpleTerm<'a>; 3], LoadError> {
            Ok([
                node(&st.subject).map_err(|e| e.at(i, "subject"))?,
                iri_term(&st.predicate).map_err(|e| e.at(i, "predicate"))?,
                object(&st.object).map_err(|e| e.at(i, "object"))?,
            ])
        })
        .collect()
}

fn iri_term(iri: &Iri) -> Result<SimpleTerm<'_>, LoadError> {
    IriRef::new(MownStr::from(iri.as_str()))
        .map(SimpleTerm::Iri)
        .map_err(|e| LoadError::MalformedInput(e.to_string()))
}

fn node(iri: &Iri) -> Result<SimpleTerm<'_>, LoadError> {
    match iri.as_str().strip_prefix("_:") {
        Some(label) => BnodeId::new(MownStr::from(label))
            .map(SimpleTerm::BlankNode)
            .map_err(|e| LoadError::MalformedInput(e.to_string())),
        None => iri_term(iri),
    }
}

fn object(value: &ObjectValue) -> Result<SimpleTerm<'_>, LoadError> {
    let lit = match value {
        ObjectValue::Entity(iri) => return node(iri),
        ObjectValue::Literal(lit) => lit,
    };
    let lexical = MownStr::from(lit.value.as_str());
    match &lit.language {
        Some(tag) => LanguageTag::new(MownStr::from(tag.as_str()))
            .map(|tag| SimpleTerm::LiteralLanguage(lexical, tag))
            .map_err(|e| LoadError::MalformedInput(e.to_string())),
        None => IriRef::new(MownStr::from(lit.datatype.as_str()))
            .map(|dt| SimpleTerm::LiteralDatatype(lexical, dt))
            .map_err(|e| LoadError::MalformedInput(e.to_string())),
    }
}
