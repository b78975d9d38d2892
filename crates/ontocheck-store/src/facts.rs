//! Fact store: asserted statements with an entity type index

use ontocheck_core::model::{Iri, ObjectValue, Statement};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

static NO_TYPES: BTreeSet<Iri> = BTreeSet::new();

/// Fact store statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactStatistics {
    pub statement_count: usize,
    pub type_assertion_count: usize,
    pub typed_entity_count: usize,
    pub literal_object_count: usize,
}

/// Asserted instance data (ABox).
///
/// Statements form an append-only log in insertion order, which is the
/// traversal order of [`FactStore::statements`]. The entity type index is
/// updated on every append and therefore always equals a rescan of the log.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    /// Statements in insertion order
    log: Vec<Statement>,
    /// Set view of `log` for deduplication
    seen: HashSet<Statement>,
    /// Entity -> classes asserted through rdf:type
    type_index: HashMap<Iri, BTreeSet<Iri>>,
}

impl FactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement; returns false when the triple was already present
    pub fn assert_statement(&mut self, subject: Iri, predicate: Iri, object: ObjectValue) -> bool {
        self.insert(Statement {
            subject,
            predicate,
            object,
        })
    }

    pub fn insert(&mut self, statement: Statement) -> bool {
        if self.seen.contains(&statement) {
            return false;
        }
        if statement.is_type_assertion() {
            if let ObjectValue::Entity(class) = &statement.object {
                self.type_index
                    .entry(statement.subject.clone())
                    .or_default()
                    .insert(class.clone());
            }
        }
        self.seen.insert(statement.clone());
        self.log.push(statement);
        true
    }

    /// Classes the entity is asserted to be an instance of
    pub fn types_of(&self, entity: &Iri) -> &BTreeSet<Iri> {
        self.type_index.get(entity).unwrap_or(&NO_TYPES)
    }

    /// Fresh traversal over all statements in insertion order
    pub fn statements(&self) -> impl Iterator<Item = &Statement> + '_ {
        self.log.iter()
    }

    /// Statements paired with their position in the traversal order
    pub fn indexed_statements(&self) -> impl Iterator<Item = (usize, &Statement)> + '_ {
        self.log.iter().enumerate()
    }

    pub fn type_assertions(&self) -> impl Iterator<Item = &Statement> + '_ {
        self.log.iter().filter(|st| st.is_type_assertion())
    }

    pub fn contains(&self, statement: &Statement) -> bool {
        self.seen.contains(statement)
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn statistics(&self) -> FactStatistics {
        FactStatistics {
            statement_count: self.log.len(),
            type_assertion_count: self.type_assertions().count(),
            typed_entity_count: self.type_index.len(),
            literal_object_count: self.log.iter().filter(|st| st.object.is_literal()).count(),
        }
    }
}

impl Extend<Statement> for FactStore {
    fn extend<T: IntoIterator<Item = Statement>>(&mut self, iter: T) {
        for statement in iter {
            self.insert(statement);
        }
    }
}

impl FromIterator<Statement> for FactStore {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        let mut store = FactStore::new();
        store.extend(iter);
        store
    }
}
