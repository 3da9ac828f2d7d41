mod resolve;
mod search;
mod summary;

pub use resolve::resolve_contextual_filters;
pub use search::search_list_page;
pub use summary::summarize_configuration;

use listpage_core::config::{ListPageConfiguration, ListSource};

/// The list source a stored configuration was built for.
fn list_source_for(configuration: &ListPageConfiguration) -> ListSource {
    ListSource::new(&configuration.entity_type, &configuration.bundle)
}
