//! Statement data model for schema conformance checking

use crate::vocabulary;
use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a class, property or entity.
///
/// Identifiers are compared by exact string equality; no normalization or
/// prefix expansion happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    /// Wrap a trusted identifier without validation
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// Validating constructor used at the ingestion boundary
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if s.is_empty() {
            return Err(CoreError::EmptyIdentifier);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(CoreError::InvalidIdentifier(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Blank node labels are carried as `_:label` identifiers
    pub fn is_blank_node(&self) -> bool {
        self.0.starts_with("_:")
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Iri::new(s)
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Iri::new(s)
    }
}

impl PartialEq<str> for Iri {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Iri {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// RDF literal value with its datatype tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub value: String,
    pub datatype: Iri,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Literal {
    /// Plain literal, typed `xsd:string`
    pub fn string<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
            datatype: Iri::new(vocabulary::XSD_STRING),
            language: None,
        }
    }

    pub fn typed<S: Into<String>>(value: S, datatype: Iri) -> Self {
        Self {
            value: value.into(),
            datatype,
            language: None,
        }
    }

    /// Language-tagged literal, typed `rdf:langString`
    pub fn lang<S: Into<String>, L: Into<String>>(value: S, language: L) -> Self {
        Self {
            value: value.into(),
            datatype: Iri::new(vocabulary::RDF_LANG_STRING),
            language: Some(language.into()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value)?;
        match &self.language {
            Some(lang) => write!(f, "@{}", lang),
            None => write!(f, "^^<{}>", self.datatype),
        }
    }
}

/// Object position of a statement: either another entity or a literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectValue {
    Entity(Iri),
    Literal(Literal),
}

impl ObjectValue {
    pub fn entity<S: Into<String>>(s: S) -> Self {
        ObjectValue::Entity(Iri::new(s))
    }

    pub fn as_entity(&self) -> Option<&Iri> {
        match self {
            ObjectValue::Entity(iri) => Some(iri),
            ObjectValue::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            ObjectValue::Literal(lit) => Some(lit),
            ObjectValue::Entity(_) => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, ObjectValue::Literal(_))
    }
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectValue::Entity(iri) => iri.fmt(f),
            ObjectValue::Literal(lit) => lit.fmt(f),
        }
    }
}

impl From<Iri> for ObjectValue {
    fn from(iri: Iri) -> Self {
        ObjectValue::Entity(iri)
    }
}

impl From<Literal> for ObjectValue {
    fn from(lit: Literal) -> Self {
        ObjectValue::Literal(lit)
    }
}

/// Subject–predicate–object statement of the fact graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Statement {
    pub subject: Iri,
    pub predicate: Iri,
    pub object: ObjectValue,
}

impl Statement {
    pub fn new<S: Into<Iri>, P: Into<Iri>, O: Into<ObjectValue>>(
        subject: S,
        predicate: P,
        object: O,
    ) -> Self {
        Statement {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// `(subject, rdf:type, class)` shorthand
    pub fn type_assertion<S: Into<Iri>, C: Into<Iri>>(subject: S, class: C) -> Self {
        Statement::new(subject, Iri::new(vocabulary::RDF_TYPE), class.into())
    }

    pub fn is_type_assertion(&self) -> bool {
        self.predicate == vocabulary::RDF_TYPE
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

/// Declared range of a property.
///
/// A property without any recorded range is `Option::<RangeSpec>::None`,
/// which is different from `Some(RangeSpec::Literal)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeSpec {
    Class(Iri),
    Literal,
}

impl RangeSpec {
    pub fn as_class(&self) -> Option<&Iri> {
        match self {
            RangeSpec::Class(iri) => Some(iri),
            RangeSpec::Literal => None,
        }
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeSpec::Class(iri) => iri.fmt(f),
            RangeSpec::Literal => f.write_str(vocabulary::RDFS_LITERAL),
        }
    }
}
