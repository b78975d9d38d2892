//! # ontocheck store
//!
//! In-memory stores populated by the ingestion pipeline and read by the
//! conformance checker:
//! - [`SchemaStore`]: declared classes and properties (TBox)
//! - [`FactStore`]: asserted statements with an entity type index (ABox)
//! - [`research`]: the built-in bibliographic ontology

pub mod facts;
pub mod research;
pub mod schema;

pub use facts::{FactStatistics, FactStore};
pub use schema::{PropertyDeclaration, SchemaStatistics, SchemaStore};

// Re-export core types for convenience
pub use ontocheck_core::model::{Iri, Literal, ObjectValue, RangeSpec, Statement};
