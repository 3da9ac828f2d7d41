use super::{FacetResult, QueryType};
use crate::facets::Facet;
use crate::filter::PresetFilter;
use crate::search::SearchQuery;

/// Adapter for fulltext facets.
///
/// Keys are searched in every fulltext field unless the facet's widget is
/// limited to its own field, in which case that field is added to the
/// query's fulltext fields.
#[derive(Debug)]
pub struct FulltextQueryType;

impl FulltextQueryType {
    /// Applies raw search keys to the query.
    pub fn apply_keys(&self, query: &mut dyn SearchQuery, facet: &Facet, keys: &[String]) {
        let keys: Vec<String> = keys
            .iter()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .collect();
        if keys.is_empty() {
            return;
        }

        query.add_fulltext_keys(&keys);

        if !facet.widget_instance().fulltext_all_fields() {
            let mut fields = vec![facet.field_identifier.clone()];
            for field in query.fulltext_fields().unwrap_or_default() {
                if !fields.contains(field) {
                    fields.push(field.clone());
                }
            }
            query.set_fulltext_fields(fields);
        }
    }
}

impl QueryType for FulltextQueryType {
    fn apply(&self, query: &mut dyn SearchQuery, facet: &Facet, filter: &PresetFilter) {
        self.apply_keys(query, facet, filter.values());
    }

    fn describe(&self, _facet: &Facet, filter: &PresetFilter) -> Vec<FacetResult> {
        filter
            .values()
            .iter()
            .filter(|key| !key.trim().is_empty())
            .map(|key| FacetResult::new(key, key))
            .collect()
    }
}
