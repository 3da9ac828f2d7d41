//! Query type adapters
//!
//! Each facet names the adapter that turns its preset filters into search
//! conditions and into display labels for the editor summary.

mod date;
mod fulltext;
mod multiselect;

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub use date::{DateFilter, DateOperator, DateQueryType};
pub use fulltext::FulltextQueryType;
pub use multiselect::MultiselectQueryType;

use crate::config::ListSource;
use crate::facets::{Facet, FacetCatalog, QueryTypeKind};
use crate::filter::PresetFilter;
use crate::search::SearchQuery;

/// An active filter item: the raw stored value and its human readable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetResult {
    pub raw: String,
    pub display: String,
}

impl FacetResult {
    pub fn new(raw: &str, display: &str) -> Self {
        Self {
            raw: raw.to_string(),
            display: display.to_string(),
        }
    }
}

pub trait QueryType: std::fmt::Debug + Sync {
    /// Adds the filter's conditions to the query.
    fn apply(&self, query: &mut dyn SearchQuery, facet: &Facet, filter: &PresetFilter);

    /// The filter's active items as they are shown to editors.
    fn describe(&self, facet: &Facet, filter: &PresetFilter) -> Vec<FacetResult>;

    /// Checks values an editor entered for this query type.
    fn validate(&self, _values: &[String]) -> Result<(), String> {
        Ok(())
    }
}

pub fn query_type_for(kind: QueryTypeKind) -> &'static dyn QueryType {
    match kind {
        QueryTypeKind::Multiselect => &MultiselectQueryType,
        QueryTypeKind::Date => &DateQueryType,
        QueryTypeKind::Fulltext => &FulltextQueryType,
    }
}

/// Applies filters to a query through the adapters of their facets.
///
/// Filters whose facet is not in the catalog are skipped.
pub fn apply_filters<'f>(
    query: &mut dyn SearchQuery,
    catalog: &dyn FacetCatalog,
    list_source: &ListSource,
    filters: impl IntoIterator<Item = &'f PresetFilter>,
) {
    let facets: HashMap<String, Facet> = catalog
        .facets_for(list_source)
        .into_iter()
        .map(|facet| (facet.id.clone(), facet))
        .collect();

    for filter in filters {
        match facets.get(filter.facet_id()) {
            Some(facet) => query_type_for(facet.query_type).apply(query, facet, filter),
            None => warn!(
                "Skipping filter on missing facet '{}' of '{}'",
                filter.facet_id(),
                list_source.search_id
            ),
        }
    }
}

/// Applies search keys typed by a visitor.
///
/// The keys go through the first fulltext facet of the list source, so a
/// facet limited to its own field narrows the search. Without a fulltext
/// facet the keys search every fulltext field.
pub fn apply_search_keys(
    query: &mut dyn SearchQuery,
    catalog: &dyn FacetCatalog,
    list_source: &ListSource,
    keys: &[String],
) {
    let fulltext = catalog
        .facets_for(list_source)
        .into_iter()
        .find(|facet| facet.query_type == QueryTypeKind::Fulltext);

    match fulltext {
        Some(facet) => FulltextQueryType.apply_keys(query, &facet, keys),
        None => {
            debug!(
                "No fulltext facet on '{}', searching all fulltext fields",
                list_source.search_id
            );
            let keys: Vec<String> = keys
                .iter()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty())
                .collect();
            if !keys.is_empty() {
                query.add_fulltext_keys(&keys);
            }
        }
    }
}
