use std::collections::{BTreeMap, HashMap};

use crate::filter::{FilterConfigurationMap, FilterId, PresetOperator};

/// An uncommitted edit of one filter slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub facet_id: String,
    pub operator: PresetOperator,
    pub values: Vec<String>,
    /// Whether the slot has no committed filter yet.
    pub is_new: bool,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct BuilderState {
    /// `None` until initialized. An empty map stays empty on later
    /// initialization, even when the stored configuration has filters.
    pub(crate) working: Option<FilterConfigurationMap>,
    pub(crate) drafts: BTreeMap<FilterId, Draft>,
    /// Open drafts, most recently opened last.
    pub(crate) opened: Vec<FilterId>,
}

impl BuilderState {
    pub(crate) fn open(&mut self, filter_id: &FilterId, draft: Draft) {
        self.drafts.insert(filter_id.clone(), draft);
        self.opened.retain(|id| id != filter_id);
        self.opened.push(filter_id.clone());
    }

    pub(crate) fn close(&mut self, filter_id: &str) -> Option<Draft> {
        self.opened.retain(|id| id.as_str() != filter_id);
        self.drafts.remove(filter_id)
    }

    pub(crate) fn active(&self) -> Option<(&FilterId, &Draft)> {
        let filter_id = self.opened.last()?;
        self.drafts.get(filter_id).map(|draft| (filter_id, draft))
    }
}

/// State kept across the steps of one editing session.
///
/// Every filter kind and list source has its own working map and drafts,
/// and every draft belongs to a single slot, so several filters can be
/// edited at once without affecting each other.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    /// Keyed by filter kind and search id.
    states: HashMap<(String, String), BuilderState>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The working map of a filter kind, if it was initialized.
    pub fn working_map(&self, kind: &str, search_id: &str) -> Option<&FilterConfigurationMap> {
        self.state(kind, search_id)?.working.as_ref()
    }

    pub fn draft(&self, kind: &str, search_id: &str, filter_id: &str) -> Option<&Draft> {
        self.state(kind, search_id)?.drafts.get(filter_id)
    }

    /// Ids of the slots with an open draft.
    pub fn open_drafts(&self, kind: &str, search_id: &str) -> Vec<&FilterId> {
        self.state(kind, search_id)
            .map(|state| state.drafts.keys().collect())
            .unwrap_or_default()
    }

    pub(crate) fn state(&self, kind: &str, search_id: &str) -> Option<&BuilderState> {
        self.states.get(&(kind.to_string(), search_id.to_string()))
    }

    pub(crate) fn state_mut(&mut self, kind: &str, search_id: &str) -> &mut BuilderState {
        self.states
            .entry((kind.to_string(), search_id.to_string()))
            .or_default()
    }
}
