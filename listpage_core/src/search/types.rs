//! Search condition type definitions

use chrono::{DateTime, FixedOffset};

use crate::FieldId;

/// Logical operator for combining the conditions of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Combinator {
    #[default]
    And,
    Or,
}

/// Comparison operators for conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
}

impl FilterOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            FilterOperator::Equal => "=",
            FilterOperator::NotEqual => "<>",
            FilterOperator::GreaterThan => ">",
            FilterOperator::LessThan => "<",
            FilterOperator::GreaterOrEqual => ">=",
            FilterOperator::LessOrEqual => "<=",
        }
    }
}

/// Values used in conditions
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    String(String),
    DateTime(DateTime<FixedOffset>),
}

impl FilterValue {
    /// Returns the type name of this filter value for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FilterValue::String(_) => "String",
            FilterValue::DateTime(_) => "DateTime",
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::String(value)
    }
}

/// A single comparison against an index field.
///
/// On multi-valued fields, `Equal` and the range operators hold when some
/// item matches, while `NotEqual` holds when no item equals the value.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    pub field: FieldId,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

impl FilterCondition {
    pub fn new(field: FieldId, operator: FilterOperator, value: FilterValue) -> Self {
        Self {
            field,
            operator,
            value,
        }
    }
}

/// Conditions joined by one combinator.
///
/// An empty `And` group holds for every entity and an empty `Or` group for
/// none.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionGroup {
    pub combinator: Combinator,
    pub conditions: Vec<FilterCondition>,
}

impl ConditionGroup {
    pub fn new(combinator: Combinator) -> Self {
        Self {
            combinator,
            conditions: Vec::new(),
        }
    }

    pub fn with_condition(mut self, condition: FilterCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn add_condition(&mut self, condition: FilterCondition) {
        self.conditions.push(condition);
    }
}
