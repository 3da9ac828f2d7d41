//! Filter configuration and resolution engine for faceted list pages.
//!
//! A list page shows entities from a search index, narrowed by two kinds of
//! preset filters:
//! - Default filter values, stored statically in the configuration
//! - Contextual filters, whose values are read from the entity being viewed
//!
//! The [`builder`] module drives the editing of both filter maps, the
//! [`context`] module resolves contextual filters at request time and the
//! [`query_type`] module turns the resulting filters into search conditions.

pub mod builder;
pub mod config;
pub mod context;
mod entity;
pub mod facets;
pub mod filter;
pub mod query_type;
pub mod search;

pub use entity::{Entity, EntityId, FieldId, FieldValue};
