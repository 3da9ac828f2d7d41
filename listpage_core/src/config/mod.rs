//! List page configuration: the list source, the persisted document and the
//! field remapping used by contextual filters.

mod config_errors;
mod field_map;
mod list_source;
mod page;

pub use config_errors::ConfigError;
pub use field_map::{FieldPair, FieldRemapping};
pub use list_source::ListSource;
pub use page::ListPageConfiguration;
