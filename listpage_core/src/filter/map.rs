use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{FilterId, PresetFilter};

/// The preset filters of one list page, keyed by filter id.
///
/// Iteration follows filter id order, so summaries and serialized output are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterConfigurationMap {
    filters: BTreeMap<FilterId, PresetFilter>,
}

impl FilterConfigurationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the filter for a slot, returning the previous one.
    pub fn insert(&mut self, id: FilterId, filter: PresetFilter) -> Option<PresetFilter> {
        self.filters.insert(id, filter)
    }

    /// Removes a slot. Removing an absent id does nothing.
    pub fn remove(&mut self, id: &str) -> Option<PresetFilter> {
        self.filters.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&PresetFilter> {
        self.filters.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.filters.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FilterId, &PresetFilter)> {
        self.filters.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &FilterId> {
        self.filters.keys()
    }

    /// The filters in map order.
    pub fn filters(&self) -> impl Iterator<Item = &PresetFilter> {
        self.filters.values()
    }

    pub fn facet_ids(&self) -> Vec<&str> {
        self.filters.values().map(PresetFilter::facet_id).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl FromIterator<(FilterId, PresetFilter)> for FilterConfigurationMap {
    fn from_iter<T: IntoIterator<Item = (FilterId, PresetFilter)>>(iter: T) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FilterConfigurationMap {
    type Item = (&'a FilterId, &'a PresetFilter);
    type IntoIter = std::collections::btree_map::Iter<'a, FilterId, PresetFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}
