//! Identifier minting for bibliographic entities
//!
//! Every entity IRI is built from `namespace + kind segment + "/" + key`.
//! Keys are normalized per kind and percent-encoded, so two distinct
//! `(kind, normalized key)` pairs never produce the same identifier.

use crate::model::Iri;
use crate::CoreError;
use iri_string::types::IriStr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default namespace of the research ontology
pub const RESEARCH_NAMESPACE: &str = "http://example.org/research/";

/// Kind of entity an identifier is minted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Author,
    Paper,
    Venue,
    Edition,
    Proceedings,
    Volume,
    City,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Author,
        EntityKind::Paper,
        EntityKind::Venue,
        EntityKind::Edition,
        EntityKind::Proceedings,
        EntityKind::Volume,
        EntityKind::City,
    ];

    /// Path segment placed between the namespace and the key
    pub fn segment(&self) -> &'static str {
        match self {
            EntityKind::Author => "author",
            EntityKind::Paper => "paper",
            EntityKind::Venue => "venue",
            EntityKind::Edition => "edition",
            EntityKind::Proceedings => "proceedings",
            EntityKind::Volume => "volume",
            EntityKind::City => "city",
        }
    }

    fn normalize(&self, key: &str) -> String {
        let key = key.trim();
        match self {
            EntityKind::City => key.chars().filter(|c| c.is_ascii_alphanumeric()).collect(),
            EntityKind::Volume => key.split_whitespace().collect::<Vec<_>>().join("-"),
            _ => key.to_string(),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.segment().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownEntityKind(s.to_string()))
    }
}

/// Builds identifiers under one namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierMinter {
    namespace: String,
}

impl IdentifierMinter {
    /// The namespace must be an absolute IRI ending in `/` or `#`
    pub fn new(namespace: &str) -> Result<Self, CoreError> {
        IriStr::new(namespace).map_err(|_| CoreError::InvalidNamespace(namespace.to_string()))?;
        if !(namespace.ends_with('/') || namespace.ends_with('#')) {
            return Err(CoreError::InvalidNamespace(namespace.to_string()));
        }
        Ok(Self {
            namespace: namespace.to_string(),
        })
    }

    pub fn research() -> Self {
        Self {
            namespace: RESEARCH_NAMESPACE.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Vocabulary term such as `ex:Author` or `ex:writes`
    pub fn term(&self, local: &str) -> Result<Iri, CoreError> {
        let local = local.trim();
        if local.is_empty() {
            return Err(CoreError::EmptyIdentifier);
        }
        Ok(Iri::new(format!("{}{}", self.namespace, encode(local, false))))
    }

    pub fn mint(&self, kind: EntityKind, natural_key: &str) -> Result<Iri, CoreError> {
        let key = encode(&kind.normalize(natural_key), false);
        if key.is_empty() {
            return Err(CoreError::EmptyNaturalKey(kind));
        }
        Ok(Iri::new(format!("{}{}/{}", self.namespace, kind.segment(), key)))
    }

    /// Key made of several parts, e.g. an edition keyed by venue and year.
    ///
    /// `-` is escaped inside each part, so the joined key is unambiguous.
    pub fn mint_composite(&self, kind: EntityKind, parts: &[&str]) -> Result<Iri, CoreError> {
        let mut encoded = Vec::with_capacity(parts.len());
        for part in parts {
            let part = encode(&kind.normalize(part), true);
            if part.is_empty() {
                return Err(CoreError::EmptyNaturalKey(kind));
            }
            encoded.push(part);
        }
        if encoded.is_empty() {
            return Err(CoreError::EmptyNaturalKey(kind));
        }
        Ok(Iri::new(format!(
            "{}{}/{}",
            self.namespace,
            kind.segment(),
            encoded.join("-")
        )))
    }
}

impl Default for IdentifierMinter {
    fn default() -> Self {
        Self::research()
    }
}

fn encode(input: &str, escape_dash: bool) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        let unreserved = byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b'~');
        if unreserved || (byte == b'-' && !escape_dash) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mint_author() {
        let minter = IdentifierMinter::research();
        let iri = minter.mint(EntityKind::Author, " 42 ").unwrap();
        assert_eq!(iri.as_str(), "http://example.org/research/author/42");
    }

    #[test]
    fn test_city_key_drops_non_alphanumerics() {
        let minter = IdentifierMinter::research();
        let iri = minter.mint(EntityKind::City, "New York").unwrap();
        assert_eq!(iri.as_str(), "http://example.org/research/city/NewYork");
    }

    #[test]
    fn test_volume_key_collapses_whitespace() {
        let minter = IdentifierMinter::research();
        let iri = minter.mint(EntityKind::Volume, "vol  12 b").unwrap();
        assert_eq!(iri.as_str(), "http://example.org/research/volume/vol-12-b");
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let minter = IdentifierMinter::research();
        let iri = minter.mint(EntityKind::Paper, "a/b c").unwrap();
        assert_eq!(iri.as_str(), "http://example.org/research/paper/a%2Fb%20c");
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let minter = IdentifierMinter::research();
        assert!(matches!(
            minter.mint(EntityKind::Author, "   "),
            Err(CoreError::EmptyNaturalKey(EntityKind::Author))
        ));
        assert!(matches!(
            minter.mint(EntityKind::City, "!!"),
            Err(CoreError::EmptyNaturalKey(EntityKind::City))
        ));
    }

    #[test]
    fn test_composite_key() {
        let minter = IdentifierMinter::research();
        let iri = minter
            .mint_composite(EntityKind::Edition, &["v-1", "2020"])
            .unwrap();
        assert_eq!(iri.as_str(), "http://example.org/research/edition/v%2D1-2020");
        assert!(minter.mint_composite(EntityKind::Edition, &[]).is_err());
    }

    #[test]
    fn test_namespace_validation() {
        assert!(IdentifierMinter::new("http://example.org/ns#").is_ok());
        assert!(IdentifierMinter::new("http://example.org/ns").is_err());
        assert!(IdentifierMinter::new("not an iri/").is_err());
    }

    #[test]
    fn test_term() {
        let minter = IdentifierMinter::research();
        assert_eq!(
            minter.term("Author").unwrap().as_str(),
            "http://example.org/research/Author"
        );
        assert!(minter.term("").is_err());
    }

    #[test]
    fn test_entity_kind_from_str() {
        assert_eq!("Author".parse::<EntityKind>().unwrap(), EntityKind::Author);
        assert_eq!("city".parse::<EntityKind>().unwrap(), EntityKind::City);
        assert!("reviewer".parse::<EntityKind>().is_err());
    }

    proptest! {
        #[test]
        fn prop_distinct_keys_mint_distinct_identifiers(a in "[ -~]{1,12}", b in "[ -~]{1,12}") {
            let minter = IdentifierMinter::research();
            let kind = EntityKind::Paper;
            if let (Ok(x), Ok(y)) = (minter.mint(kind, &a), minter.mint(kind, &b)) {
                prop_assert_eq!(x == y, a.trim() == b.trim());
            }
        }

        #[test]
        fn prop_composite_is_injective(a in "[a-z-]{1,6}", b in "[a-z-]{1,6}", c in "[a-z-]{1,6}", d in "[a-z-]{1,6}") {
            let minter = IdentifierMinter::research();
            let x = minter.mint_composite(EntityKind::Edition, &[&a, &b]).unwrap();
            let y = minter.mint_composite(EntityKind::Edition, &[&c, &d]).unwrap();
            prop_assert_eq!(x == y, a == c && b == d);
        }
    }
}
