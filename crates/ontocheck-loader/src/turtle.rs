//! Turtle / N-Triples 読み込み

use crate::LoadError;
use ontocheck_core::model::{Iri, Literal, ObjectValue, Statement};
use ontocheck_core::vocabulary;
use sophia::api::source::TripleSource;
use sophia::api::term::{SimpleTerm, Term, TermKind};
use sophia::turtle::parser::{nt, turtle};

/// Turtle 文書をステートメント列に変換
pub fn parse_turtle(src: &str) -> Result<Vec<Statement>, LoadError> {
    let triples: Vec<[SimpleTerm<'static>; 3]> = turtle::parse_str(src)
        .collect_triples()
        .map_err(|e| LoadError::Parse(e.to_string()))?;
    convert_all(&triples)
}

/// N-Triples 文書をステートメント列に変換
pub fn parse_ntriples(src: &str) -> Result<Vec<Statement>, LoadError> {
    let triples: Vec<[SimpleTerm<'static>; 3]> = nt::parse_str(src)
        .collect_triples()
        .map_err(|e| LoadError::Parse(e.to_string()))?;
    convert_all(&triples)
}

fn convert_all<T: Term>(triples: &[[T; 3]]) -> Result<Vec<Statement>, LoadError> {
    let statements = triples
        .iter()
        .enumerate()
        .map(|(i, [s, p, o])| -> Result<Statement, LoadError> {
            Ok(Statement {
                subject: entity(s).map_err(|e| e.at(i, "subject"))?,
                predicate: entity(p).map_err(|e| e.at(i, "predicate"))?,
                object: object(o).map_err(|e| e.at(i, "object"))?,
            })
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    tracing::debug!(count = statements.len(), "parsed RDF statements");
    Ok(statements)
}

/// IRI またはブランクノード
fn entity<T: Term>(term: &T) -> Result<Iri, LoadError> {
    match term.kind() {
        TermKind::Iri => {
            let iri = term
                .iri()
                .ok_or_else(|| LoadError::MalformedInput("IRI term without IRI".to_string()))?;
            Ok(Iri::parse(iri.as_str())?)
        }
        TermKind::BlankNode => {
            let id = term.bnode_id().ok_or_else(|| {
                LoadError::MalformedInput("blank node term without label".to_string())
            })?;
            Ok(Iri::parse(&format!("_:{}", id.as_str()))?)
        }
        other => Err(LoadError::MalformedInput(format!(
            "expected IRI or blank node, found {:?}",
            other
        ))),
    }
}

fn object<T: Term>(term: &T) -> Result<ObjectValue, LoadError> {
    if term.kind() != TermKind::Literal {
        return entity(term).map(ObjectValue::Entity);
    }

    let value = term
        .lexical_form()
        .ok_or_else(|| LoadError::MalformedInput("literal without lexical form".to_string()))?
        .to_string();

    if let Some(tag) = term.language_tag() {
        return Ok(ObjectValue::Literal(Literal::lang(value, tag.as_str())));
    }

    let datatype = match term.datatype() {
        Some(dt) => Iri::parse(dt.as_str())?,
        None => Iri::new(vocabulary::XSD_STRING),
    };
    Ok(ObjectValue::Literal(Literal::typed(value, datatype)))
}
