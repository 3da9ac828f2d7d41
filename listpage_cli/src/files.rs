//! Loading of the JSON inputs commands work on.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use listpage_core::Entity;
use listpage_core::config::{FieldRemapping, ListPageConfiguration, ListSource};
use listpage_core::facets::{FacetCatalog, QueryTypeKind, StaticFacetCatalog};
use listpage_core::search::MemoryIndex;

use crate::errors::CliError;
use crate::ui;

/// An index file: the entities to search and the fields fulltext keys match.
#[derive(Debug, Deserialize)]
struct IndexDocument {
    #[serde(default)]
    fulltext_fields: Vec<String>,
    entities: Vec<Entity>,
}

pub fn load_configuration(path: &Path) -> Result<ListPageConfiguration, CliError> {
    ListPageConfiguration::load(path).map_err(|e| {
        ui::error_with_details("Failed to load list page configuration", &e.to_string());
        CliError::FileError
    })
}

/// Loads the facet catalog. Commands need one to interpret filters.
pub fn load_catalog(path: Option<&PathBuf>) -> Result<StaticFacetCatalog, CliError> {
    let Some(path) = path else {
        ui::error("No facet catalog given. Use --catalog or set LISTPAGE_CATALOG");
        return Err(CliError::InputError);
    };
    StaticFacetCatalog::load(path).map_err(|e| {
        ui::error_with_details("Failed to load facet catalog", &e.to_string());
        CliError::FileError
    })
}

/// Loads the field remapping, or an empty one when no file is given.
pub fn load_field_map(path: Option<&PathBuf>) -> Result<FieldRemapping, CliError> {
    match path {
        Some(path) => FieldRemapping::load(path).map_err(|e| {
            ui::error_with_details("Failed to load field map", &e.to_string());
            CliError::FileError
        }),
        None => Ok(FieldRemapping::new()),
    }
}

pub fn load_entity(path: Option<&PathBuf>) -> Result<Option<Entity>, CliError> {
    let Some(path) = path else {
        return Ok(None);
    };
    read_json::<Entity>(path, "entity").map(Some)
}

/// Builds an index for the list source from an index file.
///
/// Facet fields are read from their property paths. Without explicit
/// fulltext fields, the fields of the source's fulltext facets are used.
pub fn load_index(
    path: &Path,
    catalog: &dyn FacetCatalog,
    list_source: &ListSource,
) -> Result<MemoryIndex, CliError> {
    let document = read_json::<IndexDocument>(path, "index")?;
    let facets = catalog.facets_for(list_source);

    let mut index = facets.iter().fold(MemoryIndex::new(list_source.clone()), |index, facet| {
        index.with_field(&facet.field_identifier, facet.source_field())
    });

    let fulltext_fields = if document.fulltext_fields.is_empty() {
        facets
            .iter()
            .filter(|facet| facet.query_type == QueryTypeKind::Fulltext)
            .map(|facet| facet.field_identifier.clone())
            .collect()
    } else {
        document.fulltext_fields
    };
    for field in &fulltext_fields {
        index = index.with_fulltext_field(field);
    }

    index.index_all(document.entities);
    ui::debug(&format!("Indexed {} entities from {}", index.len(), path.display()));
    Ok(index)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path, what: &str) -> Result<T, CliError> {
    let source = fs::read_to_string(path).map_err(|e| {
        ui::error_with_details(
            &format!("Failed to read {} file '{}'", what, path.display()),
            &e.to_string(),
        );
        CliError::FileError
    })?;
    serde_json::from_str(&source).map_err(|e| {
        ui::error_with_details(
            &format!("Failed to parse {} file '{}'", what, path.display()),
            &e.to_string(),
        );
        CliError::InputError
    })
}
