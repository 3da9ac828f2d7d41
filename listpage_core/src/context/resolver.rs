use log::{debug, warn};

use super::{ContextEntity, ViewingContext};
use crate::FieldValue;
use crate::config::{FieldRemapping, ListSource};
use crate::facets::{Facet, FacetCatalog};
use crate::filter::{FilterConfigurationMap, PresetFilter};

/// Fills contextual filters with values taken from the viewed entity.
///
/// A contextual filter that cannot be resolved becomes a filter nothing
/// matches, so a list page with contextual filters shows no results until it
/// is viewed on an entity that carries the values.
pub struct ContextualValueResolver<'a> {
    catalog: &'a dyn FacetCatalog,
    remapping: &'a FieldRemapping,
}

impl<'a> ContextualValueResolver<'a> {
    pub fn new(catalog: &'a dyn FacetCatalog, remapping: &'a FieldRemapping) -> Self {
        Self { catalog, remapping }
    }

    /// Resolves every contextual filter in map order.
    ///
    /// Filters on facets missing from the catalog are left out.
    pub fn resolve(
        &self,
        list_source: &ListSource,
        contextual_filters: &FilterConfigurationMap,
        context: &dyn ViewingContext,
    ) -> Vec<PresetFilter> {
        let facets = self.catalog.facets_for(list_source);
        let entity = context.current_entity();

        let mut resolved = Vec::with_capacity(contextual_filters.len());
        for (filter_id, filter) in contextual_filters.iter() {
            let Some(facet) = facets.iter().find(|facet| facet.id == filter.facet_id()) else {
                warn!(
                    "Contextual filter '{}' refers to facet '{}' which no longer exists on '{}', skipping",
                    filter_id,
                    filter.facet_id(),
                    list_source.search_id
                );
                continue;
            };
            resolved.push(self.resolve_filter(facet, filter, entity));
        }
        resolved
    }

    fn resolve_filter(
        &self,
        facet: &Facet,
        filter: &PresetFilter,
        entity: Option<&dyn ContextEntity>,
    ) -> PresetFilter {
        let Some(entity) = entity else {
            debug!(
                "No entity in context, contextual filter on '{}' matches nothing",
                facet.id
            );
            return PresetFilter::unsatisfiable(&facet.id);
        };

        match self.read_value(facet.source_field(), entity) {
            Some(value) => {
                let values = value.to_strings();
                debug!(
                    "Resolved contextual filter on '{}' to {:?} ({})",
                    facet.id,
                    values,
                    filter.operator()
                );
                PresetFilter::new(&facet.id, filter.operator(), values)
            }
            None => {
                debug!(
                    "{} entity has no value for '{}', contextual filter on '{}' matches nothing",
                    entity.entity_type(),
                    facet.source_field(),
                    facet.id
                );
                PresetFilter::unsatisfiable(&facet.id)
            }
        }
    }

    /// Reads the first non-empty value among the remapped fields and the
    /// field itself.
    fn read_value<'e>(&self, field: &str, entity: &'e dyn ContextEntity) -> Option<&'e FieldValue> {
        self.remapping
            .counterparts(field)
            .into_iter()
            .chain(std::iter::once(field))
            .filter_map(|candidate| entity.field_value(candidate))
            .find(|value| !value.is_empty())
    }
}

/// All filters to apply to a query: default values first, then the resolved
/// contextual filters. They combine with AND.
pub fn combine(default_filters: &FilterConfigurationMap, resolved: Vec<PresetFilter>) -> Vec<PresetFilter> {
    default_filters.filters().cloned().chain(resolved).collect()
}
