//! Schema store: declared classes and properties

use ontocheck_core::model::{Iri, RangeSpec};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

static EMPTY_DOMAIN: BTreeSet<Iri> = BTreeSet::new();

/// Declared property with its domain and range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDeclaration {
    pub id: Iri,
    /// Classes the subject is expected to belong to; empty means unconstrained
    pub domain: BTreeSet<Iri>,
    pub range: Option<RangeSpec>,
}

/// Schema statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaStatistics {
    pub class_count: usize,
    pub property_count: usize,
    pub properties_with_domain: usize,
    pub class_ranged_properties: usize,
    pub literal_ranged_properties: usize,
}

/// Declared vocabulary of the ontology (TBox).
///
/// Declarations are idempotent; re-declaring a property replaces its
/// domain and range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaStore {
    classes: BTreeSet<Iri>,
    properties: BTreeMap<Iri, PropertyDeclaration>,
}

impl SchemaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare_class(&mut self, id: Iri) {
        self.classes.insert(id);
    }

    pub fn declare_property<D>(&mut self, id: Iri, domain: D, range: Option<RangeSpec>)
    where
        D: IntoIterator<Item = Iri>,
    {
        let declaration = PropertyDeclaration {
            id: id.clone(),
            domain: domain.into_iter().collect(),
            range,
        };
        if self.properties.insert(id, declaration).is_some() {
            tracing::debug!("property re-declared, previous domain/range replaced");
        }
    }

    pub fn is_declared_class(&self, id: &Iri) -> bool {
        self.classes.contains(id)
    }

    pub fn is_declared_property(&self, id: &Iri) -> bool {
        self.properties.contains_key(id)
    }

    /// Declared domain, empty when the property has none or is undeclared
    pub fn domain_of(&self, property: &Iri) -> &BTreeSet<Iri> {
        self.properties
            .get(property)
            .map(|p| &p.domain)
            .unwrap_or(&EMPTY_DOMAIN)
    }

    pub fn range_of(&self, property: &Iri) -> Option<&RangeSpec> {
        self.properties.get(property).and_then(|p| p.range.as_ref())
    }

    pub fn property(&self, id: &Iri) -> Option<&PropertyDeclaration> {
        self.properties.get(id)
    }

    /// Declared classes in lexicographic order
    pub fn classes(&self) -> impl Iterator<Item = &Iri> + '_ {
        self.classes.iter()
    }

    /// Declared properties in lexicographic order
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDeclaration> + '_ {
        self.properties.values()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.properties.is_empty()
    }

    pub fn statistics(&self) -> SchemaStatistics {
        let mut stats = SchemaStatistics {
            class_count: self.classes.len(),
            property_count: self.properties.len(),
            properties_with_domain: 0,
            class_ranged_properties: 0,
            literal_ranged_properties: 0,
        };
        for property in self.properties.values() {
            if !property.domain.is_empty() {
                stats.properties_with_domain += 1;
            }
            match property.range {
                Some(RangeSpec::Class(_)) => stats.class_ranged_properties += 1,
                Some(RangeSpec::Literal) => stats.literal_ranged_properties += 1,
                None => {}
            }
        }
        stats
    }
}
