//! In-memory search backend

use std::collections::HashMap;

use log::{debug, warn};

use super::SearchQuery;
use super::compare::matches_condition;
use super::types::{Combinator, ConditionGroup, FilterCondition};
use crate::config::ListSource;
use crate::{Entity, EntityId, FieldId, FieldValue};

/// A search index over the entities of one list source.
///
/// Index fields are addressed by their identifier and read from the mapped
/// entity property, which defaults to a field of the same name.
#[derive(Debug, Clone)]
pub struct MemoryIndex {
    list_source: ListSource,
    property_paths: HashMap<String, String>,
    fulltext_fields: Vec<String>,
    entities: Vec<Entity>,
}

impl MemoryIndex {
    pub fn new(list_source: ListSource) -> Self {
        Self {
            list_source,
            property_paths: HashMap::new(),
            fulltext_fields: Vec::new(),
            entities: Vec::new(),
        }
    }

    /// Maps an index field to the entity property it is read from.
    pub fn with_field(mut self, identifier: &str, property_path: &str) -> Self {
        self.property_paths
            .insert(identifier.to_string(), property_path.to_string());
        self
    }

    /// Declares an index field as searchable by fulltext keys.
    pub fn with_fulltext_field(mut self, identifier: &str) -> Self {
        self.fulltext_fields.push(identifier.to_string());
        self
    }

    pub fn index(&mut self, entity: Entity) {
        self.entities.retain(|existing| existing.id != entity.id);
        self.entities.push(entity);
    }

    pub fn index_all(&mut self, entities: impl IntoIterator<Item = Entity>) {
        for entity in entities {
            self.index(entity);
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn fulltext_fields(&self) -> &[String] {
        &self.fulltext_fields
    }

    /// Starts a new query. Query state never outlives the query.
    pub fn query(&self) -> MemoryQuery<'_> {
        MemoryQuery {
            index: self,
            groups: Vec::new(),
            keys: Vec::new(),
            fulltext_fields: None,
        }
    }

    fn field_value<'a>(&self, entity: &'a Entity, identifier: &str) -> Option<&'a FieldValue> {
        let property = self
            .property_paths
            .get(identifier)
            .map(String::as_str)
            .unwrap_or(identifier);
        entity.get_field(&FieldId::new(property))
    }
}

/// A query against a [`MemoryIndex`].
#[derive(Debug, Clone)]
pub struct MemoryQuery<'a> {
    index: &'a MemoryIndex,
    groups: Vec<ConditionGroup>,
    keys: Vec<String>,
    fulltext_fields: Option<Vec<String>>,
}

impl MemoryQuery<'_> {
    pub fn condition_groups(&self) -> &[ConditionGroup] {
        &self.groups
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    fn matches(&self, entity: &Entity) -> bool {
        entity.entity_type == self.index.list_source.entity_type
            && entity.bundle == self.index.list_source.bundle
            && self.groups.iter().all(|group| self.matches_group(entity, group))
            && self.keys.iter().all(|key| self.matches_key(entity, key))
    }

    fn matches_group(&self, entity: &Entity, group: &ConditionGroup) -> bool {
        let mut results = group
            .conditions
            .iter()
            .map(|condition| self.matches_condition(entity, condition));
        match group.combinator {
            Combinator::And => results.all(|matched| matched),
            Combinator::Or => results.any(|matched| matched),
        }
    }

    fn matches_condition(&self, entity: &Entity, condition: &FilterCondition) -> bool {
        let value = self.index.field_value(entity, condition.field.as_str());
        matches_condition(value, condition).unwrap_or_else(|e| {
            warn!(
                "Condition on '{}' could not be evaluated for entity '{}': {}",
                condition.field, entity.id, e
            );
            false
        })
    }

    fn matches_key(&self, entity: &Entity, key: &str) -> bool {
        let key = key.to_lowercase();
        let fields = self
            .fulltext_fields
            .as_deref()
            .unwrap_or(&self.index.fulltext_fields);
        fields.iter().any(|field| {
            self.index
                .field_value(entity, field)
                .map(|value| {
                    value
                        .to_strings()
                        .iter()
                        .any(|text| text.to_lowercase().contains(&key))
                })
                .unwrap_or(false)
        })
    }
}

impl SearchQuery for MemoryQuery<'_> {
    fn add_condition_group(&mut self, group: ConditionGroup) {
        self.groups.push(group);
    }

    fn add_fulltext_keys(&mut self, keys: &[String]) {
        self.keys
            .extend(keys.iter().filter(|key| !key.trim().is_empty()).cloned());
    }

    fn fulltext_fields(&self) -> Option<&[String]> {
        self.fulltext_fields.as_deref()
    }

    fn set_fulltext_fields(&mut self, fields: Vec<String>) {
        self.fulltext_fields = Some(fields);
    }

    fn execute(&self) -> Vec<EntityId> {
        let results: Vec<EntityId> = self
            .index
            .entities
            .iter()
            .filter(|entity| self.matches(entity))
            .map(|entity| entity.id.clone())
            .collect();
        debug!(
            "Executed query on '{}' with {} condition groups and {} keys: {} results",
            self.index.list_source.search_id,
            self.groups.len(),
            self.keys.len(),
            results.len()
        );
        results
    }
}
