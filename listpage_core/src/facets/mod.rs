//! Facets available to list pages and the catalog that enumerates them

mod widget;

use std::collections::HashMap;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

pub use widget::{
    CheckboxWidget, DateWidget, FulltextWidget, LinksWidget, MultiselectWidget, Widget,
    WidgetConfig,
};

use crate::config::{ConfigError, ListSource};

/// Which query type adapter translates the facet's filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryTypeKind {
    #[default]
    Multiselect,
    Date,
    Fulltext,
}

/// A named, indexed attribute that list pages can filter on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub id: String,
    pub label: String,
    /// The index field queries filter on.
    pub field_identifier: String,
    /// The field on the list source entity the indexed value comes from.
    #[serde(default)]
    pub property_path: Option<String>,
    #[serde(default)]
    pub query_type: QueryTypeKind,
    #[serde(default)]
    pub widget: WidgetConfig,
}

impl Facet {
    pub fn new(id: &str, label: &str, field_identifier: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            field_identifier: field_identifier.to_string(),
            property_path: None,
            query_type: QueryTypeKind::default(),
            widget: WidgetConfig::default(),
        }
    }

    pub fn with_property_path(mut self, property_path: &str) -> Self {
        self.property_path = Some(property_path.to_string());
        self
    }

    pub fn with_query_type(mut self, query_type: QueryTypeKind) -> Self {
        self.query_type = query_type;
        self
    }

    pub fn with_widget(mut self, widget: WidgetConfig) -> Self {
        self.widget = widget;
        self
    }

    /// The entity field contextual values are read from.
    pub fn source_field(&self) -> &str {
        self.property_path
            .as_deref()
            .unwrap_or(self.field_identifier.as_str())
    }

    pub fn widget_instance(&self) -> Box<dyn Widget> {
        self.widget.instance()
    }

    pub fn supports_set_operators(&self) -> bool {
        self.widget_instance().supports_set_operators()
    }
}

/// Enumerates the facets of a list source.
pub trait FacetCatalog {
    /// All facets of the list source's search index, in display order.
    fn facets_for(&self, list_source: &ListSource) -> Vec<Facet>;

    fn facet(&self, list_source: &ListSource, facet_id: &str) -> Option<Facet> {
        self.facets_for(list_source)
            .into_iter()
            .find(|facet| facet.id == facet_id)
    }

    /// Facets whose widget supports any/all/none operators.
    fn set_operator_facets(&self, list_source: &ListSource) -> Vec<Facet> {
        self.facets_for(list_source)
            .into_iter()
            .filter(Facet::supports_set_operators)
            .collect()
    }
}

/// A catalog held in memory, keyed by search id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticFacetCatalog {
    #[serde(default)]
    sources: HashMap<String, Vec<Facet>>,
}

impl StaticFacetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_facets(mut self, list_source: &ListSource, facets: Vec<Facet>) -> Self {
        self.sources.insert(list_source.search_id.clone(), facets);
        self
    }

    /// Adds a facet to a list source, replacing one with the same id.
    pub fn add_facet(&mut self, list_source: &ListSource, facet: Facet) {
        let facets = self.sources.entry(list_source.search_id.clone()).or_default();
        match facets.iter_mut().find(|existing| existing.id == facet.id) {
            Some(existing) => *existing = facet,
            None => facets.push(facet),
        }
    }

    /// Removes a facet, as happens when a site builder deletes it.
    pub fn remove_facet(&mut self, list_source: &ListSource, facet_id: &str) {
        if let Some(facets) = self.sources.get_mut(&list_source.search_id) {
            facets.retain(|facet| facet.id != facet_id);
        }
    }

    /// Loads a catalog from a JSON file of the form
    /// `{"sources": {"<search id>": [<facet>, ...]}}`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: Self = serde_json::from_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Loaded facet catalog with {} sources from {}",
            catalog.sources.len(),
            path.display()
        );
        Ok(catalog)
    }
}

impl FacetCatalog for StaticFacetCatalog {
    fn facets_for(&self, list_source: &ListSource) -> Vec<Facet> {
        self.sources
            .get(&list_source.search_id)
            .cloned()
            .unwrap_or_default()
    }
}
