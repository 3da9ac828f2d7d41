//! Editing of default value and contextual filter maps
//!
//! A builder walks an editor through adding, editing and removing the
//! filters of one list source. Committed filters live in a working map held
//! by the [`EditorSession`]; uncommitted edits are drafts keyed by filter
//! slot, so several edits can be open at once.
//!
//! Typical flow:
//! 1. [`FilterConfigurationBuilder::initialize`] seeds the working map
//! 2. [`FilterConfigurationBuilder::choose_facet`] or
//!    [`FilterConfigurationBuilder::edit`] opens a draft
//! 3. [`FilterConfigurationBuilder::commit`] or
//!    [`FilterConfigurationBuilder::cancel`] closes it
//! 4. [`FilterConfigurationBuilder::save`] writes the working map back

mod builder_errors;
mod kind;
mod session;
mod view;

use std::marker::PhantomData;

use log::{debug, warn};

pub use builder_errors::BuilderError;
pub use kind::{ContextualValues, DefaultValues, FilterKind};
pub use session::{Draft, EditorSession};
pub use view::{BuilderView, EditForm, Summary, SummaryRow};

use crate::config::{ListPageConfiguration, ListSource};
use crate::facets::{Facet, FacetCatalog};
use crate::filter::{
    FilterConfigurationMap, FilterId, PresetFilter, PresetOperator, derive_filter_id,
};
use session::BuilderState;

/// Edits the static default filter values of a list page.
pub type DefaultValueBuilder<'a> = FilterConfigurationBuilder<'a, DefaultValues>;

/// Edits the contextual filters of a list page.
pub type ContextualFilterBuilder<'a> = FilterConfigurationBuilder<'a, ContextualValues>;

pub struct FilterConfigurationBuilder<'a, K: FilterKind> {
    catalog: &'a dyn FacetCatalog,
    list_source: ListSource,
    kind: PhantomData<K>,
}

impl<'a, K: FilterKind> FilterConfigurationBuilder<'a, K> {
    pub fn new(catalog: &'a dyn FacetCatalog, list_source: ListSource) -> Self {
        Self {
            catalog,
            list_source,
            kind: PhantomData,
        }
    }

    pub fn list_source(&self) -> &ListSource {
        &self.list_source
    }

    /// The facets filters of this kind can be set on, in catalog order.
    pub fn available_facets(&self) -> Vec<Facet> {
        self.catalog
            .facets_for(&self.list_source)
            .into_iter()
            .filter(K::is_eligible)
            .collect()
    }

    /// Prepares the working map for this session.
    ///
    /// A working map that already has filters is kept. Otherwise the stored
    /// filters are used when the configuration belongs to this list source
    /// and the working map was not emptied earlier in the session.
    pub fn initialize(&self, session: &mut EditorSession, configuration: &ListPageConfiguration) {
        let state = self.state_mut(session);
        if state.working.as_ref().is_some_and(|map| !map.is_empty()) {
            return;
        }

        if state.working.is_none() && self.list_source.matches(configuration) {
            let filters = K::filters(configuration).clone();
            debug!(
                "Seeding {} filters for '{}' with {} stored filters",
                K::NAME,
                self.list_source.search_id,
                filters.len()
            );
            state.working = Some(filters);
            return;
        }

        state.working = Some(FilterConfigurationMap::new());
    }

    /// Opens a draft for a new filter on a facet.
    ///
    /// A draft already open for the same slot is reopened as it was.
    /// Without an eligible facet the summary is shown instead.
    pub fn choose_facet(&self, session: &mut EditorSession, facet_id: Option<&str>) -> BuilderView {
        let Some(facet_id) = facet_id else {
            return self.summary_view(session);
        };
        let Some(facet) = self.eligible_facet(facet_id) else {
            debug!(
                "Facet '{}' cannot take {} filters on '{}'",
                facet_id,
                K::NAME,
                self.list_source.search_id
            );
            return self.summary_view(session);
        };

        let state = self.state_mut(session);
        let filter_id = match &state.working {
            Some(working) => derive_filter_id(&facet.id, working.keys().map(FilterId::as_str)),
            None => derive_filter_id(&facet.id, Vec::<&str>::new()),
        };
        let draft = match state.drafts.get(&filter_id) {
            Some(draft) => draft.clone(),
            None => {
                debug!("Opened {} filter '{}' on facet '{}'", K::NAME, filter_id, facet.id);
                Draft {
                    facet_id: facet.id.clone(),
                    operator: PresetOperator::default(),
                    values: Vec::new(),
                    is_new: true,
                }
            }
        };
        let form = self.edit_form(&facet, &filter_id, &draft);
        state.open(&filter_id, draft);
        BuilderView::Edit(form)
    }

    /// Opens a draft for a committed filter, or reopens its existing draft.
    pub fn edit(&self, session: &mut EditorSession, filter_id: &str) -> BuilderView {
        let state = self.state_mut(session);
        let Some(filter) = state.working.as_ref().and_then(|map| map.get(filter_id)) else {
            debug!("No {} filter '{}' to edit", K::NAME, filter_id);
            return self.summary_view(session);
        };
        let Some(facet) = self.eligible_facet(filter.facet_id()) else {
            warn!(
                "Facet '{}' of {} filter '{}' is no longer available",
                filter.facet_id(),
                K::NAME,
                filter_id
            );
            return self.summary_view(session);
        };

        let filter_id = FilterId::new(filter_id);
        let draft = match state.drafts.get(&filter_id) {
            Some(draft) => draft.clone(),
            None => Draft {
                facet_id: facet.id.clone(),
                operator: filter.operator(),
                values: filter.values().to_vec(),
                is_new: false,
            },
        };
        let form = self.edit_form(&facet, &filter_id, &draft);
        state.open(&filter_id, draft);
        BuilderView::Edit(form)
    }

    /// The form of the most recently opened draft, or the summary.
    pub fn view(&self, session: &EditorSession) -> BuilderView {
        let active = self.state(session).and_then(BuilderState::active);
        match active {
            Some((filter_id, draft)) => match self.eligible_facet(&draft.facet_id) {
                Some(facet) => BuilderView::Edit(self.edit_form(&facet, filter_id, draft)),
                None => self.summary_view(session),
            },
            None => self.summary_view(session),
        }
    }

    /// Records an editor's in-progress choices for one draft.
    pub fn update_draft(
        &self,
        session: &mut EditorSession,
        filter_id: &str,
        operator: PresetOperator,
        values: Vec<String>,
    ) -> Result<(), BuilderError> {
        let draft = self
            .state_mut(session)
            .drafts
            .get_mut(filter_id)
            .ok_or_else(|| BuilderError::NoActiveEdit(FilterId::new(filter_id)))?;
        draft.operator = operator;
        draft.values = values;
        Ok(())
    }

    /// Stores a draft in the working map and closes it.
    ///
    /// On error the draft stays open with the entered values and the working
    /// map is unchanged.
    pub fn commit(
        &self,
        session: &mut EditorSession,
        filter_id: &str,
        operator: &str,
        values: Vec<String>,
    ) -> Result<PresetFilter, BuilderError> {
        let state = self.state_mut(session);
        let draft = state
            .drafts
            .get_mut(filter_id)
            .ok_or_else(|| BuilderError::NoActiveEdit(FilterId::new(filter_id)))?;
        draft.values = values.clone();

        let facet = self
            .eligible_facet(&draft.facet_id)
            .ok_or_else(|| BuilderError::UnknownFacet(draft.facet_id.clone()))?;
        let operator = operator
            .parse::<PresetOperator>()
            .map_err(|e| BuilderError::UnknownOperator(e.0))?;
        let operator = if K::exposes_operator(&facet) {
            operator
        } else {
            PresetOperator::default()
        };
        draft.operator = operator;
        let values = K::prepare_values(&facet, values)?;

        let filter = PresetFilter::new(&facet.id, operator, values);
        state
            .working
            .get_or_insert_with(FilterConfigurationMap::new)
            .insert(FilterId::new(filter_id), filter.clone());
        state.close(filter_id);
        debug!(
            "Committed {} filter '{}' on facet '{}' ({})",
            K::NAME,
            filter_id,
            facet.id,
            operator
        );
        Ok(filter)
    }

    /// Drops one draft, leaving the working map and other drafts alone.
    pub fn cancel(&self, session: &mut EditorSession, filter_id: &str) -> BuilderView {
        if self.state_mut(session).close(filter_id).is_some() {
            debug!("Cancelled {} filter '{}'", K::NAME, filter_id);
        }
        self.view(session)
    }

    /// Removes a filter and its draft. Removing an unknown filter does nothing.
    pub fn delete(&self, session: &mut EditorSession, filter_id: &str) -> BuilderView {
        let state = self.state_mut(session);
        state.close(filter_id);
        if let Some(working) = state.working.as_mut() {
            if working.remove(filter_id).is_some() {
                debug!("Deleted {} filter '{}'", K::NAME, filter_id);
            }
        }
        self.view(session)
    }

    /// One row per committed filter, in working map order.
    ///
    /// Filters whose facet is gone from the catalog are left out.
    pub fn summarize(&self, session: &EditorSession) -> Vec<SummaryRow> {
        let Some(working) = self.state(session).and_then(|state| state.working.as_ref()) else {
            return Vec::new();
        };
        let facets = self.catalog.facets_for(&self.list_source);

        working
            .iter()
            .filter_map(|(filter_id, filter)| {
                let Some(facet) = facets.iter().find(|facet| facet.id == filter.facet_id()) else {
                    warn!(
                        "Skipping {} filter '{}': facet '{}' no longer exists on '{}'",
                        K::NAME,
                        filter_id,
                        filter.facet_id(),
                        self.list_source.search_id
                    );
                    return None;
                };
                Some(SummaryRow {
                    filter_id: filter_id.clone(),
                    facet_id: facet.id.clone(),
                    facet_label: facet.label.clone(),
                    operator_label: filter.operator().label().to_string(),
                    values_label: K::values_label(facet, filter),
                })
            })
            .collect()
    }

    /// A copy of the working map, ready to be saved.
    pub fn current_filters(&self, session: &EditorSession) -> FilterConfigurationMap {
        self.state(session)
            .and_then(|state| state.working.clone())
            .unwrap_or_default()
    }

    /// Writes the working map into a configuration for this list source.
    pub fn save(&self, session: &EditorSession, configuration: &mut ListPageConfiguration) {
        configuration.entity_type = self.list_source.entity_type.clone();
        configuration.bundle = self.list_source.bundle.clone();
        *K::filters_mut(configuration) = self.current_filters(session);
    }

    fn eligible_facet(&self, facet_id: &str) -> Option<Facet> {
        self.catalog
            .facet(&self.list_source, facet_id)
            .filter(|facet| K::is_eligible(facet))
    }

    fn edit_form(&self, facet: &Facet, filter_id: &FilterId, draft: &Draft) -> EditForm {
        EditForm {
            filter_id: filter_id.clone(),
            facet_id: facet.id.clone(),
            title: K::form_title(facet),
            operator: draft.operator,
            operator_options: K::exposes_operator(facet).then(PresetOperator::options),
            value_input: K::exposes_values(),
            values: draft.values.clone(),
            is_new: draft.is_new,
        }
    }

    fn summary_view(&self, session: &EditorSession) -> BuilderView {
        BuilderView::Summary(Summary {
            values_header: K::VALUES_HEADER.to_string(),
            rows: self.summarize(session),
        })
    }

    fn state<'s>(&self, session: &'s EditorSession) -> Option<&'s BuilderState> {
        session.state(K::NAME, &self.list_source.search_id)
    }

    fn state_mut<'s>(&self, session: &'s mut EditorSession) -> &'s mut BuilderState {
        session.state_mut(K::NAME, &self.list_source.search_id)
    }
}
