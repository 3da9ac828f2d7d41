use std::path::{Path, PathBuf};

use serde::Serialize;

use listpage_core::builder::{
    ContextualFilterBuilder, DefaultValueBuilder, EditorSession, SummaryRow,
};

use super::list_source_for;
use crate::errors::CliError;
use crate::files::{load_catalog, load_configuration};
use crate::ui::{self, OutputFormat};

#[derive(Serialize)]
struct ConfigurationSummary {
    entity_type: String,
    bundle: String,
    default_filter_values: Vec<SummaryRow>,
    contextual_filters: Vec<SummaryRow>,
}

/// Prints what an editor would see for the filters of a configuration.
pub fn summarize_configuration(
    config_path: &Path,
    catalog_path: Option<&PathBuf>,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Summarizing list page filters");
    let configuration = load_configuration(config_path)?;
    let catalog = load_catalog(catalog_path)?;
    let list_source = list_source_for(&configuration);

    let mut session = EditorSession::new();
    let defaults = DefaultValueBuilder::new(&catalog, list_source.clone());
    let contextual = ContextualFilterBuilder::new(&catalog, list_source);
    defaults.initialize(&mut session, &configuration);
    contextual.initialize(&mut session, &configuration);

    let summary = ConfigurationSummary {
        entity_type: configuration.entity_type.clone(),
        bundle: configuration.bundle.clone(),
        default_filter_values: defaults.summarize(&session),
        contextual_filters: contextual.summarize(&session),
    };

    let skipped = (configuration.default_filter_values.len()
        + configuration.contextual_filters.len())
    .saturating_sub(summary.default_filter_values.len() + summary.contextual_filters.len());
    if skipped > 0 {
        ui::warning(&format!(
            "{} filters refer to facets missing from the catalog",
            skipped
        ));
    }
    ui::success(&format!(
        "Found {} default values and {} contextual filters for '{}' '{}'",
        summary.default_filter_values.len(),
        summary.contextual_filters.len(),
        summary.entity_type,
        summary.bundle
    ));

    match output_format {
        OutputFormat::Pretty => {
            ui::pretty_output_summary(
                "Default filter values",
                "Default value",
                &summary.default_filter_values,
            );
            ui::pretty_output_summary(
                "Contextual filters",
                "Operator",
                &summary.contextual_filters,
            );
        }
        OutputFormat::Json => ui::json_output(&summary),
    }

    Ok(())
}
