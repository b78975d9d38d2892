//! JSON interchange documents for schemas and fact graphs
//!
//! ```json
//! {
//!   "classes": ["http://example.org/research/Author"],
//!   "properties": [
//!     { "id": "http://example.org/research/writes",
//!       "domain": ["http://example.org/research/Author"],
//!       "range": { "class": "http://example.org/research/Paper" } },
//!     { "id": "http://example.org/research/name", "range": "literal" }
//!   ]
//! }
//! ```
//!
//! Every identifier goes through [`Iri::parse`]; the first invalid one aborts
//! the load with its JSON position in the error message.

use crate::LoadError;
use ontocheck_core::model::{Iri, Literal, ObjectValue, RangeSpec, Statement};
use ontocheck_core::vocabulary;
use ontocheck_store::SchemaStore;
use serde::{Deserialize, Serialize};

/// Schema description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDocument {
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domain: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeDocument>,
}

/// `{"class": iri}` or `"literal"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeDocument {
    Class(String),
    Literal,
}

/// Fact graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactDocument {
    #[serde(default)]
    pub statements: Vec<StatementDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementDocument {
    pub subject: String,
    pub predicate: String,
    pub object: ObjectDocument,
}

/// `{"entity": iri}` or `{"literal": {"value": .., "datatype": .., "language": ..}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectDocument {
    Entity(String),
    Literal(LiteralDocument),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralDocument {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

fn parse_at(value: &str, position: impl FnOnce() -> String) -> Result<Iri, LoadError> {
    Iri::parse(value).map_err(|e| LoadError::MalformedInput(format!("{}: {}", position(), e)))
}

impl SchemaDocument {
    pub fn from_json(src: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn into_store(self) -> Result<SchemaStore, LoadError> {
        let mut store = SchemaStore::new();

        for (i, class) in self.classes.iter().enumerate() {
            store.declare_class(parse_at(class, || format!("classes[{}]", i))?);
        }

        for (i, property) in self.properties.iter().enumerate() {
            let id = parse_at(&property.id, || format!("properties[{}].id", i))?;
            let domain = property
                .domain
                .iter()
                .enumerate()
                .map(|(j, d)| parse_at(d, || format!("properties[{}].domain[{}]", i, j)))
                .collect::<Result<Vec<_>, _>>()?;
            let range = match &property.range {
                Some(RangeDocument::Class(class)) => Some(RangeSpec::Class(parse_at(class, || {
                    format!("properties[{}].range.class", i)
                })?)),
                Some(RangeDocument::Literal) => Some(RangeSpec::Literal),
                None => None,
            };
            store.declare_property(id, domain, range);
        }

        Ok(store)
    }

    /// Export a store in lexicographic order
    pub fn from_store(store: &SchemaStore) -> Self {
        SchemaDocument {
            classes: store.classes().map(|c| c.as_str().to_string()).collect(),
            properties: store
                .properties()
                .map(|p| PropertyDocument {
                    id: p.id.as_str().to_string(),
                    domain: p.domain.iter().map(|d| d.as_str().to_string()).collect(),
                    range: p.range.as_ref().map(|r| match r {
                        RangeSpec::Class(class) => RangeDocument::Class(class.as_str().to_string()),
                        RangeSpec::Literal => RangeDocument::Literal,
                    }),
                })
                .collect(),
        }
    }
}

impl FactDocument {
    pub fn from_json(src: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn into_statements(self) -> Result<Vec<Statement>, LoadError> {
        self.statements
            .iter()
            .enumerate()
            .map(|(i, st)| st.to_statement(i))
            .collect()
    }
}

impl StatementDocument {
    fn to_statement(&self, i: usize) -> Result<Statement, LoadError> {
        let subject = parse_at(&self.subject, || format!("statements[{}].subject", i))?;
        let predicate = parse_at(&self.predicate, || format!("statements[{}].predicate", i))?;
        let object = match &self.object {
            ObjectDocument::Entity(entity) => ObjectValue::Entity(parse_at(entity, || {
                format!("statements[{}].object.entity", i)
            })?),
            ObjectDocument::Literal(lit) => ObjectValue::Literal(lit.to_literal(i)?),
        };
        Ok(Statement {
            subject,
            predicate,
            object,
        })
    }
}

impl LiteralDocument {
    fn to_literal(&self, i: usize) -> Result<Literal, LoadError> {
        let datatype = self
            .datatype
            .as_deref()
            .map(|dt| parse_at(dt, || format!("statements[{}].object.literal.datatype", i)))
            .transpose()?;

        match (&self.language, datatype) {
            (Some(lang), None) => Ok(Literal::lang(self.value.clone(), lang.clone())),
            (Some(lang), Some(dt)) if dt == vocabulary::RDF_LANG_STRING => {
                Ok(Literal::lang(self.value.clone(), lang.clone()))
            }
            (Some(_), Some(dt)) => Err(LoadError::MalformedInput(format!(
                "statements[{}].object.literal: language tag with datatype {}",
                i, dt
            ))),
            (None, Some(dt)) => Ok(Literal::typed(self.value.clone(), dt)),
            (None, None) => Ok(Literal::string(self.value.clone())),
        }
    }
}
