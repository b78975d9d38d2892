//! Checker configuration

use ontocheck_core::model::Iri;
use ontocheck_core::vocabulary;
use serde::{Deserialize, Serialize};

/// Predicates excluded from undeclared-property detection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ReservedPredicates {
    /// Only `rdf:type`
    #[default]
    TypeOnly,
    /// Every predicate in the rdf:, rdfs: and owl: namespaces
    SchemaVocabulary,
}

impl ReservedPredicates {
    pub fn is_reserved(&self, predicate: &Iri) -> bool {
        match self {
            ReservedPredicates::TypeOnly => *predicate == vocabulary::RDF_TYPE,
            ReservedPredicates::SchemaVocabulary => {
                vocabulary::is_schema_vocabulary(predicate.as_str())
            }
        }
    }
}

/// Conformance check configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    pub reserved_predicates: ReservedPredicates,
    /// Run the independent checks on the rayon pool
    pub parallel: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            reserved_predicates: ReservedPredicates::TypeOnly,
            parallel: true,
        }
    }
}

impl CheckConfig {
    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_only_reserves_rdf_type() {
        let reserved = ReservedPredicates::TypeOnly;
        assert!(reserved.is_reserved(&Iri::new(vocabulary::RDF_TYPE)));
        assert!(!reserved.is_reserved(&Iri::new(vocabulary::RDFS_SUBCLASS_OF)));
    }

    #[test]
    fn test_schema_vocabulary_reserves_namespaces() {
        let reserved = ReservedPredicates::SchemaVocabulary;
        assert!(reserved.is_reserved(&Iri::new(vocabulary::RDF_TYPE)));
        assert!(reserved.is_reserved(&Iri::new(
            "http://www.w3.org/2000/01/rdf-schema#label"
        )));
        assert!(reserved.is_reserved(&Iri::new("http://www.w3.org/2002/07/owl#sameAs")));
        assert!(!reserved.is_reserved(&Iri::new("http://example.org/research/writes")));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config = CheckConfig::from_json(r#"{ "reserved_predicates": "schema-vocabulary" }"#)
            .unwrap();
        assert_eq!(config.reserved_predicates, ReservedPredicates::SchemaVocabulary);
        assert!(config.parallel);

        assert_eq!(CheckConfig::from_json("{}").unwrap(), CheckConfig::default());
    }
}
