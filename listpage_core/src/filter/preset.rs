//! Preset filter value object and its operators

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boolean operator applied to the values of a preset filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetOperator {
    /// Any of the values.
    #[default]
    Or,
    /// All of the values.
    And,
    /// None of the values.
    Not,
}

impl PresetOperator {
    pub const ALL: [PresetOperator; 3] = [PresetOperator::Or, PresetOperator::And, PresetOperator::Not];

    /// The machine name used in persisted configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetOperator::Or => "or",
            PresetOperator::And => "and",
            PresetOperator::Not => "not",
        }
    }

    /// The label shown to editors.
    pub fn label(&self) -> &'static str {
        match self {
            PresetOperator::Or => "Any of",
            PresetOperator::And => "All of",
            PresetOperator::Not => "None of",
        }
    }

    /// Operator options as `(machine name, label)` pairs, in display order.
    pub fn options() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|op| (op.as_str(), op.label())).collect()
    }
}

impl fmt::Display for PresetOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raised when an operator name is not one of `or`, `and`, `not`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown filter operator '{0}'. Supported: or, and, not")]
pub struct OperatorError(pub String);

impl FromStr for PresetOperator {
    type Err = OperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "or" => Ok(PresetOperator::Or),
            "and" => Ok(PresetOperator::And),
            "not" => Ok(PresetOperator::Not),
            _ => Err(OperatorError(s.to_string())),
        }
    }
}

/// A saved filter definition: a facet, an operator and the values to filter on.
///
/// Contextual filters are stored without values; the values are filled in at
/// request time from the entity being viewed. An `Or` filter with no values
/// matches nothing, which is how unresolvable contextual filters fail closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetFilter {
    facet_id: String,
    #[serde(default)]
    operator: PresetOperator,
    #[serde(default)]
    values: Vec<String>,
}

impl PresetFilter {
    pub fn new(facet_id: &str, operator: PresetOperator, values: Vec<String>) -> Self {
        Self {
            facet_id: facet_id.to_string(),
            operator,
            values,
        }
    }

    /// A filter whose values will be resolved later from the viewing context.
    pub fn contextual(facet_id: &str, operator: PresetOperator) -> Self {
        Self::new(facet_id, operator, Vec::new())
    }

    /// A filter that no entity can satisfy.
    pub fn unsatisfiable(facet_id: &str) -> Self {
        Self::new(facet_id, PresetOperator::Or, Vec::new())
    }

    pub fn facet_id(&self) -> &str {
        &self.facet_id
    }

    pub fn operator(&self) -> PresetOperator {
        self.operator
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_unsatisfiable(&self) -> bool {
        self.operator == PresetOperator::Or && self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_operator_from_str() {
        assert_eq!("or".parse::<PresetOperator>(), Ok(PresetOperator::Or));
        assert_eq!("AND".parse::<PresetOperator>(), Ok(PresetOperator::And));
        assert_eq!(" not ".parse::<PresetOperator>(), Ok(PresetOperator::Not));
        assert_matches!("xor".parse::<PresetOperator>(), Err(OperatorError(op)) if op == "xor");
    }

    #[test]
    fn test_operator_labels() {
        assert_eq!(
            PresetOperator::options(),
            vec![("or", "Any of"), ("and", "All of"), ("not", "None of")]
        );
    }

    #[test]
    fn test_filter_serializes_with_lowercase_operator() {
        let filter = PresetFilter::new("body", PresetOperator::Not, vec!["cherry".to_string()]);
        let json = serde_json::to_value(&filter).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"facet_id": "body", "operator": "not", "values": ["cherry"]})
        );
    }

    #[test]
    fn test_filter_rejects_unknown_operator_on_deserialize() {
        let result = serde_json::from_value::<PresetFilter>(
            serde_json::json!({"facet_id": "body", "operator": "xor", "values": []}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unsatisfiable() {
        assert!(PresetFilter::unsatisfiable("select_one").is_unsatisfiable());
        assert!(!PresetFilter::contextual("select_one", PresetOperator::Not).is_unsatisfiable());
        assert!(
            !PresetFilter::new("select_one", PresetOperator::Or, vec!["test1".to_string()])
                .is_unsatisfiable()
        );
    }
}
