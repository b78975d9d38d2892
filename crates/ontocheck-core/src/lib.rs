//! # ontocheck core
//!
//! Statement model shared by every ontocheck crate: identifiers, literals,
//! subject–predicate–object statements, the RDF/RDFS/OWL vocabulary and
//! identifier minting for bibliographic entities.

pub mod identifier;
pub mod model;
pub mod vocabulary;

pub use identifier::{EntityKind, IdentifierMinter, RESEARCH_NAMESPACE};
pub use model::*;

use thiserror::Error;

/// Errors raised while constructing core values at the ingestion boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Empty identifier")]
    EmptyIdentifier,

    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Invalid namespace (expected absolute IRI ending in '/' or '#'): {0}")]
    InvalidNamespace(String),

    #[error("Natural key for {0} is empty after normalization")]
    EmptyNaturalKey(EntityKind),

    #[error("Unknown entity kind: {0}")]
    UnknownEntityKind(String),
}
