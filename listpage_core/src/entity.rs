use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Identifies an entity within its entity type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Names a field, either on an entity or in the search index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FieldId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A value stored in an entity field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    DateTime(DateTime<FixedOffset>),
    Reference(EntityId),
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Flattens the value into the strings a filter compares against.
    ///
    /// Booleans render as "1" or "0" and references as the referenced id.
    /// Empty strings are dropped, so an empty field yields no strings.
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            FieldValue::String(s) if s.is_empty() => Vec::new(),
            FieldValue::String(s) => vec![s.clone()],
            FieldValue::Integer(i) => vec![i.to_string()],
            FieldValue::Boolean(b) => vec![if *b { "1" } else { "0" }.to_string()],
            FieldValue::DateTime(dt) => vec![dt.to_rfc3339()],
            FieldValue::Reference(id) => vec![id.to_string()],
            FieldValue::List(items) => items.iter().flat_map(FieldValue::to_strings).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_strings().is_empty()
    }

    /// Iterates the scalar items of the value, descending into lists.
    pub fn items(&self) -> Vec<&FieldValue> {
        match self {
            FieldValue::List(items) => items.iter().flat_map(FieldValue::items).collect(),
            other => vec![other],
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "String",
            FieldValue::Integer(_) => "Integer",
            FieldValue::Boolean(_) => "Boolean",
            FieldValue::DateTime(_) => "DateTime",
            FieldValue::Reference(_) => "Reference",
            FieldValue::List(_) => "List",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

/// An entity with typed fields.
///
/// Entities play two roles: the entity a list page is viewed on, and the
/// documents held by the in-memory search index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub entity_type: String,
    #[serde(default)]
    pub bundle: String,
    #[serde(default)]
    pub fields: HashMap<FieldId, FieldValue>,
}

impl Entity {
    pub fn new(id: impl Into<EntityId>, entity_type: &str, bundle: &str) -> Self {
        Self {
            id: id.into(),
            entity_type: entity_type.to_string(),
            bundle: bundle.to_string(),
            fields: HashMap::new(),
        }
    }

    /// Builder method to add a field to the entity.
    pub fn with_field<V: Into<FieldValue>>(mut self, id: impl Into<FieldId>, value: V) -> Self {
        self.fields.insert(id.into(), value.into());
        self
    }

    pub fn get_field(&self, id: &FieldId) -> Option<&FieldValue> {
        self.fields.get(id)
    }

    pub fn set_field<V: Into<FieldValue>>(&mut self, id: impl Into<FieldId>, value: V) {
        self.fields.insert(id.into(), value.into());
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_strings_scalars() {
        assert_eq!(FieldValue::from("test1").to_strings(), vec!["test1"]);
        assert_eq!(FieldValue::Integer(42).to_strings(), vec!["42"]);
        assert_eq!(FieldValue::Boolean(true).to_strings(), vec!["1"]);
        assert_eq!(FieldValue::Boolean(false).to_strings(), vec!["0"]);
        assert_eq!(
            FieldValue::Reference(EntityId::new("3")).to_strings(),
            vec!["3"]
        );
    }

    #[test]
    fn test_to_strings_datetime() {
        let dt = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2020, 1, 15, 10, 30, 0)
            .unwrap();
        assert_eq!(
            FieldValue::DateTime(dt).to_strings(),
            vec!["2020-01-15T10:30:00+00:00"]
        );
    }

    #[test]
    fn test_to_strings_list_flattens() {
        let value = FieldValue::List(vec![
            FieldValue::from("test1"),
            FieldValue::from(""),
            FieldValue::List(vec![FieldValue::from("test2")]),
        ]);
        assert_eq!(value.to_strings(), vec!["test1", "test2"]);
    }

    #[test]
    fn test_empty_values() {
        assert!(FieldValue::from("").is_empty());
        assert!(FieldValue::List(vec![]).is_empty());
        assert!(!FieldValue::Boolean(false).is_empty());
    }

    #[test]
    fn test_entity_builder() {
        let entity = Entity::new("1", "node", "page")
            .with_field("field_select_one", "test1")
            .with_field("field_test_boolean", true);

        assert_eq!(entity.id, EntityId::new("1"));
        assert_eq!(
            entity.get_field(&FieldId::new("field_select_one")),
            Some(&FieldValue::from("test1"))
        );
        assert_eq!(entity.get_field(&FieldId::new("missing")), None);
    }
}
