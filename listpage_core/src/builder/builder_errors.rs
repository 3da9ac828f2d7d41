use thiserror::Error;

use crate::filter::FilterId;

/// Errors raised while editing a filter map.
///
/// A failed commit leaves both the working map and the draft in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    #[error("Unknown filter operator '{0}'. Supported: or, and, not")]
    UnknownOperator(String),

    #[error("No filter is being edited under '{0}'")]
    NoActiveEdit(FilterId),

    #[error("Facet '{0}' is not available for this list source")]
    UnknownFacet(String),

    #[error("A value is required for '{facet}'")]
    MissingValue { facet: String },

    #[error("Invalid value for '{facet}': {reason}")]
    InvalidValue { facet: String, reason: String },
}
