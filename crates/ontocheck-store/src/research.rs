//! Built-in bibliographic research ontology
//!
//! Authors, papers, venues (conferences, workshops, journals), their editions,
//! proceedings and volumes, and the cities editions are held in.
//!
//! | property | domain | range |
//! |---|---|---|
//! | `heldInYear` | Edition, Volume | literal (journal volumes carry a year too) |
//! | `name` | Venue, Author, City | literal |
//!
//! [`statements`] renders the ontology as RDFS triples, subclass axioms
//! included, for export.

use crate::schema::SchemaStore;
use ontocheck_core::identifier::IdentifierMinter;
use ontocheck_core::model::{Iri, ObjectValue, RangeSpec, Statement};
use ontocheck_core::vocabulary;

pub const CLASSES: [&str; 12] = [
    "Author",
    "Reviewer",
    "Paper",
    "City",
    "Edition",
    "Volume",
    "Venue",
    "Conference",
    "Workshop",
    "Journal",
    "Publication",
    "Proceedings",
];

/// `(subclass, superclass)` pairs. Emitted as `rdfs:subClassOf` by
/// [`statements`]; the checker never walks the hierarchy.
pub const SUBCLASS_AXIOMS: [(&str, &str); 9] = [
    ("Reviewer", "Author"),
    ("Journal", "Venue"),
    ("Journal", "Publication"),
    ("Conference", "Venue"),
    ("Conference", "Publication"),
    ("Workshop", "Venue"),
    ("Workshop", "Publication"),
    ("Proceedings", "Publication"),
    ("Volume", "Publication"),
];

/// `(property, domain classes, range class)`; `None` range means literal-valued
pub const PROPERTIES: [(&str, &[&str], Option<&str>); 17] = [
    ("writes", &["Author"], Some("Paper")),
    ("hasCorrespondingAuthor", &["Paper"], Some("Author")),
    ("hasCoAuthor", &["Paper"], Some("Author")),
    ("reviewedBy", &["Paper"], Some("Reviewer")),
    ("cites", &["Paper"], Some("Paper")),
    ("publishedIn", &["Paper"], Some("Publication")),
    ("isEditionOf", &["Edition"], Some("Venue")),
    ("hasProceedings", &["Edition"], Some("Proceedings")),
    ("hasVolume", &["Journal"], Some("Volume")),
    ("hasVolumeNumber", &["Volume"], None),
    ("heldIn", &["Edition"], Some("City")),
    ("heldInYear", &["Edition", "Volume"], None),
    ("name", &["Venue", "Author", "City"], None),
    ("title", &["Paper"], None),
    ("abstract", &["Paper"], None),
    ("citationCount", &["Paper"], None),
    ("year", &["Paper"], None),
];

/// Research ontology under the default research namespace
pub fn schema() -> SchemaStore {
    schema_with(&IdentifierMinter::research())
}

/// Research ontology with terms minted under the given namespace
pub fn schema_with(minter: &IdentifierMinter) -> SchemaStore {
    let term = |local: &str| Iri::new(format!("{}{}", minter.namespace(), local));
    let mut store = SchemaStore::new();

    for class in CLASSES {
        store.declare_class(term(class));
    }

    for (property, domain, range) in PROPERTIES {
        let range = match range {
            Some(class) => RangeSpec::Class(term(class)),
            None => RangeSpec::Literal,
        };
        store.declare_property(
            term(property),
            domain.iter().map(|class| term(*class)),
            Some(range),
        );
    }

    store
}

/// Research ontology as RDFS statements under the default namespace
pub fn statements() -> Vec<Statement> {
    statements_with(&IdentifierMinter::research())
}

/// `rdf:type rdfs:Class` per class, then `rdfs:subClassOf`, then
/// `rdf:type rdf:Property` with one `rdfs:domain` per domain class and an
/// `rdfs:range` (`rdfs:Literal` for literal-valued properties)
pub fn statements_with(minter: &IdentifierMinter) -> Vec<Statement> {
    let term = |local: &str| Iri::new(format!("{}{}", minter.namespace(), local));
    let mut out = Vec::new();

    for class in CLASSES {
        out.push(Statement::type_assertion(term(class), vocabulary::RDFS_CLASS));
    }
    for (sub, sup) in SUBCLASS_AXIOMS {
        out.push(Statement::new(
            term(sub),
            vocabulary::RDFS_SUBCLASS_OF,
            ObjectValue::Entity(term(sup)),
        ));
    }

    for (property, domain, range) in PROPERTIES {
        let id = term(property);
        out.push(Statement::type_assertion(id.clone(), vocabulary::RDF_PROPERTY));
        for class in domain {
            out.push(Statement::new(
                id.clone(),
                vocabulary::RDFS_DOMAIN,
                ObjectValue::Entity(term(class)),
            ));
        }
        let range = match range {
            Some(class) => term(class),
            None => Iri::new(vocabulary::RDFS_LITERAL),
        };
        out.push(Statement::new(id, vocabulary::RDFS_RANGE, ObjectValue::Entity(range)));
    }

    out
}
