//! # ontocheck - RDF Schema Conformance Checking
//!
//! ontocheck validates an instance graph (ABox) against a declared vocabulary
//! (TBox). It reports classes and properties that are used but never declared,
//! and statements whose subject or object contradicts the declared
//! `rdfs:domain` / `rdfs:range` of their predicate.
//!
//! Nodes without asserted types are never checked: only positively wrong
//! types count as violations.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ontocheck::prelude::*;
//!
//! fn main() -> ontocheck::anyhow::Result<()> {
//!     let report = ontocheck::check_files(
//!         std::path::Path::new("tbox.ttl"),
//!         std::path::Path::new("abox.ttl"),
//!         CheckConfig::default(),
//!     )?;
//!     print!("{}", report.to_text());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`ontocheck-core`**: identifiers, literals, statements, vocabulary, identifier minting
//! - **`ontocheck-store`**: schema store, fact store with type index, research ontology
//! - **`ontocheck-loader`**: Turtle / N-Triples / JSON ingestion
//! - **`ontocheck-checker`**: conformance checks and reports
//! - **`ontocheck-cli`**: `ontocheck` command-line tool
//!
//! ## Feature Flags
//!
//! - `full` (default): All crates included
//! - `core`: Only the data model
//! - `store`: Schema and fact stores
//! - `loader`: File ingestion
//! - `checker`: Conformance checks
//! - `cli`: Command-line tools

#[cfg(feature = "ontocheck-core")]
pub use ontocheck_core as core;

#[cfg(feature = "ontocheck-store")]
pub use ontocheck_store as store;

#[cfg(feature = "ontocheck-loader")]
pub use ontocheck_loader as loader;

#[cfg(feature = "ontocheck-checker")]
pub use ontocheck_checker as checker;

#[cfg(feature = "ontocheck-cli")]
pub use ontocheck_cli as cli;

#[cfg(feature = "ontocheck-core")]
pub use ontocheck_core::model;

#[cfg(feature = "ontocheck-core")]
pub use ontocheck_core::{CoreError, EntityKind, IdentifierMinter};

#[cfg(feature = "ontocheck-store")]
pub use ontocheck_store::{FactStore, SchemaStore};

#[cfg(feature = "ontocheck-loader")]
pub use ontocheck_loader::{DefaultGraphLoader, GraphLoader, InputFormat, LoadError};

#[cfg(feature = "ontocheck-checker")]
pub use ontocheck_checker::{
    CheckConfig, ConformanceChecker, ConformanceReport, ConformanceValidator, Findings,
};

pub use anyhow;
pub use serde;
pub use serde_json;

/// Prelude module for convenient imports
///
/// ```rust
/// use ontocheck::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "ontocheck-core")]
    pub use crate::model::*;
    #[cfg(feature = "ontocheck-core")]
    pub use crate::{EntityKind, IdentifierMinter};

    #[cfg(feature = "ontocheck-store")]
    pub use crate::{FactStore, SchemaStore};

    #[cfg(feature = "ontocheck-loader")]
    pub use crate::{DefaultGraphLoader, GraphLoader, InputFormat};

    #[cfg(feature = "ontocheck-checker")]
    pub use crate::{CheckConfig, ConformanceChecker, ConformanceReport, ConformanceValidator};

    pub use serde::{Deserialize, Serialize};
    pub use serde_json::Value;
}

/// Current version of ontocheck
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load a schema and a fact graph from disk and check one against the other.
///
/// Formats are guessed from the file extensions.
#[cfg(all(feature = "ontocheck-loader", feature = "ontocheck-checker"))]
pub fn check_files(
    schema: &std::path::Path,
    facts: &std::path::Path,
    config: CheckConfig,
) -> Result<ConformanceReport, LoadError> {
    let loader = DefaultGraphLoader;
    let schema = loader.load_schema_file(schema, None)?;
    let facts = loader.load_facts_file(facts, None)?;
    let findings = ConformanceChecker::with_config(config).check(&schema, &facts);
    Ok(ConformanceReport::new(findings))
}
