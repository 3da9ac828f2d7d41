use std::path::{Path, PathBuf};

use listpage_core::context::{ContextualValueResolver, EntityContext};

use super::list_source_for;
use crate::errors::CliError;
use crate::files::{load_catalog, load_configuration, load_entity, load_field_map};
use crate::ui::{self, OutputFormat};

/// Prints the contextual filters of a configuration as resolved against an entity.
pub fn resolve_contextual_filters(
    config_path: &Path,
    catalog_path: Option<&PathBuf>,
    field_map_path: Option<&PathBuf>,
    entity_path: Option<&PathBuf>,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Resolving contextual filters");
    let configuration = load_configuration(config_path)?;
    let catalog = load_catalog(catalog_path)?;
    let remapping = load_field_map(field_map_path)?;
    let context = EntityContext::from(load_entity(entity_path)?);

    match context.entity() {
        Some(entity) => ui::debug(&format!("Viewing {} '{}'", entity.entity_type, entity.id)),
        None => ui::info("No entity given, contextual filters match nothing"),
    }

    let resolver = ContextualValueResolver::new(&catalog, &remapping);
    let resolved = resolver.resolve(
        &list_source_for(&configuration),
        &configuration.contextual_filters,
        &context,
    );

    let unsatisfiable = resolved.iter().filter(|f| f.is_unsatisfiable()).count();
    if unsatisfiable > 0 {
        ui::warning(&format!(
            "{} contextual filters could not be resolved and match nothing",
            unsatisfiable
        ));
    }
    ui::success(&format!("Resolved {} contextual filters", resolved.len()));

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_filters(&resolved),
        OutputFormat::Json => ui::json_output(&resolved),
    }

    Ok(())
}
