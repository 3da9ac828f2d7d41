//! Error types for condition matching

use thiserror::Error;

/// Errors that can occur while matching a condition against an entity
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Operator is not supported for the given field type
    #[error("Cannot use '{operator}' operator on {field_type} fields. Supported: {}", supported.join(", "))]
    UnsupportedOperator {
        field_type: String,
        operator: String,
        supported: Vec<String>,
    },
    /// Filter value type doesn't match the field type
    #[error("Type mismatch: {field_type} field cannot be compared with {filter_type} value")]
    TypeMismatch {
        field_type: String,
        filter_type: String,
    },
}
