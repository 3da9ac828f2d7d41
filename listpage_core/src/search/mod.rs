//! Search query interface and an in-memory backend
//!
//! Filters are handed to the search backend as condition groups:
//! - Groups added to a query all have to hold
//! - Conditions inside a group are joined by the group's combinator
//! - Fulltext keys must each be found in one of the query's fulltext fields

mod compare;
mod memory;
mod search_errors;
mod types;

pub use memory::{MemoryIndex, MemoryQuery};
pub use search_errors::SearchError;
pub use types::*;

use crate::EntityId;

/// The query object filters are applied to.
pub trait SearchQuery {
    /// Adds a group of conditions. Groups combine with AND.
    fn add_condition_group(&mut self, group: ConditionGroup);

    /// Adds fulltext search keys.
    fn add_fulltext_keys(&mut self, keys: &[String]);

    /// The fields fulltext keys are searched in, or `None` for all fulltext fields.
    fn fulltext_fields(&self) -> Option<&[String]>;

    /// Restricts fulltext search to the given fields for this query.
    fn set_fulltext_fields(&mut self, fields: Vec<String>);

    /// Runs the query and returns the ids of the matching entities.
    fn execute(&self) -> Vec<EntityId>;
}
