//! TBox ステートメントからスキーマを構築
//!
//! - rdf:type rdfs:Class / owl:Class → クラス宣言
//! - rdf:type rdf:Property / owl:*Property → プロパティ宣言
//! - rdfs:domain → ドメイン集合 (複数可)
//! - rdfs:range → レンジ (リテラル系は RangeSpec::Literal、最後の宣言が有効)

use crate::LoadError;
use ontocheck_core::model::{Iri, ObjectValue, RangeSpec, Statement};
use ontocheck_core::vocabulary;
use ontocheck_store::SchemaStore;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

pub fn schema_from_statements<'a, I>(statements: I) -> Result<SchemaStore, LoadError>
where
    I: IntoIterator<Item = &'a Statement>,
{
    let mut classes = BTreeSet::new();
    let mut properties = BTreeSet::new();
    let mut domains: BTreeMap<Iri, BTreeSet<Iri>> = BTreeMap::new();
    let mut ranges: BTreeMap<Iri, RangeSpec> = BTreeMap::new();
    let mut ignored = 0usize;

    for st in statements {
        match st.predicate.as_str() {
            vocabulary::RDF_TYPE => {
                let kind = expect_entity(st)?;
                if vocabulary::CLASS_KINDS.contains(&kind.as_str()) {
                    classes.insert(st.subject.clone());
                } else if vocabulary::PROPERTY_KINDS.contains(&kind.as_str()) {
                    properties.insert(st.subject.clone());
                } else {
                    ignored += 1;
                }
            }
            vocabulary::RDFS_DOMAIN => {
                let class = expect_entity(st)?;
                domains
                    .entry(st.subject.clone())
                    .or_default()
                    .insert(class.clone());
            }
            vocabulary::RDFS_RANGE => {
                let target = expect_entity(st)?;
                let range = if vocabulary::is_literal_range(target.as_str()) {
                    RangeSpec::Literal
                } else {
                    RangeSpec::Class(target.clone())
                };
                if let Some(previous) = ranges.insert(st.subject.clone(), range) {
                    warn!(property = %st.subject, %previous, "multiple rdfs:range declarations, keeping the last");
                }
            }
            _ => ignored += 1,
        }
    }

    let mut store = SchemaStore::new();
    for class in classes {
        store.declare_class(class);
    }
    for property in properties {
        let domain = domains.remove(&property).unwrap_or_default();
        let range = ranges.remove(&property);
        store.declare_property(property, domain, range);
    }

    for orphan in domains.keys().chain(ranges.keys()) {
        warn!(property = %orphan, "domain/range given for a property that is never declared, ignored");
    }
    debug!(ignored, "schema statements without declaration meaning");

    Ok(store)
}

fn expect_entity(st: &Statement) -> Result<&Iri, LoadError> {
    match &st.object {
        ObjectValue::Entity(iri) => Ok(iri),
        ObjectValue::Literal(lit) => Err(LoadError::MalformedInput(format!(
            "schema statement {} {} has literal object {}",
            st.subject, st.predicate, lit
        ))),
    }
}
