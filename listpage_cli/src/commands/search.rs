use std::path::{Path, PathBuf};

use serde::Serialize;

use listpage_core::EntityId;
use listpage_core::context::{ContextualValueResolver, EntityContext, combine};
use listpage_core::filter::PresetFilter;
use listpage_core::query_type::{apply_filters, apply_search_keys};
use listpage_core::search::SearchQuery;

use super::list_source_for;
use crate::errors::CliError;
use crate::files::{load_catalog, load_configuration, load_entity, load_field_map, load_index};
use crate::ui::{self, OutputFormat};

#[derive(Serialize)]
struct SearchResult {
    filters: Vec<PresetFilter>,
    keys: Vec<String>,
    results: Vec<EntityId>,
}

/// Runs a list page: default values and resolved contextual filters, plus
/// optional fulltext keys, against an index file.
pub fn search_list_page(
    config_path: &Path,
    index_path: &Path,
    catalog_path: Option<&PathBuf>,
    field_map_path: Option<&PathBuf>,
    entity_path: Option<&PathBuf>,
    keys: Option<String>,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Searching list page");
    let configuration = load_configuration(config_path)?;
    let catalog = load_catalog(catalog_path)?;
    let remapping = load_field_map(field_map_path)?;
    let context = EntityContext::from(load_entity(entity_path)?);
    let list_source = list_source_for(&configuration);
    let index = load_index(index_path, &catalog, &list_source)?;

    let resolver = ContextualValueResolver::new(&catalog, &remapping);
    let resolved = resolver.resolve(&list_source, &configuration.contextual_filters, &context);
    let filters = combine(&configuration.default_filter_values, resolved);
    ui::debug(&format!("Applying {} filters", filters.len()));

    let keys: Vec<String> = keys
        .map(|keys| keys.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    let mut query = index.query();
    apply_filters(&mut query, &catalog, &list_source, &filters);
    apply_search_keys(&mut query, &catalog, &list_source, &keys);
    let results = query.execute();

    ui::success(&format!(
        "Query on '{}' returned {} of {} entities",
        list_source.search_id,
        results.len(),
        index.len()
    ));

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_results(&results),
        OutputFormat::Json => ui::json_output(&SearchResult {
            filters,
            keys,
            results,
        }),
    }

    Ok(())
}
