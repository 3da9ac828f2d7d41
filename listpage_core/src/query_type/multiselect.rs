use super::{FacetResult, QueryType};
use crate::FieldId;
use crate::facets::Facet;
use crate::filter::{PresetFilter, PresetOperator};
use crate::search::{
    Combinator, ConditionGroup, FilterCondition, FilterOperator, FilterValue, SearchQuery,
};

/// Generic adapter for facets whose values are matched by equality.
///
/// - Any of: the field holds at least one of the values
/// - All of: the field holds every value
/// - None of: the field holds none of the values
#[derive(Debug)]
pub struct MultiselectQueryType;

impl MultiselectQueryType {
    /// Builds the condition group for a filter without applying it.
    pub fn condition_group(&self, facet: &Facet, filter: &PresetFilter) -> ConditionGroup {
        let (combinator, operator) = match filter.operator() {
            PresetOperator::Or => (Combinator::Or, FilterOperator::Equal),
            PresetOperator::And => (Combinator::And, FilterOperator::Equal),
            PresetOperator::Not => (Combinator::And, FilterOperator::NotEqual),
        };

        let field = FieldId::new(facet.field_identifier.as_str());
        filter
            .values()
            .iter()
            .fold(ConditionGroup::new(combinator), |group, value| {
                group.with_condition(FilterCondition::new(
                    field.clone(),
                    operator,
                    FilterValue::from(value.as_str()),
                ))
            })
    }
}

impl QueryType for MultiselectQueryType {
    fn apply(&self, query: &mut dyn SearchQuery, facet: &Facet, filter: &PresetFilter) {
        query.add_condition_group(self.condition_group(facet, filter));
    }

    fn describe(&self, _facet: &Facet, filter: &PresetFilter) -> Vec<FacetResult> {
        filter
            .values()
            .iter()
            .map(|value| FacetResult::new(value, value))
            .collect()
    }
}
