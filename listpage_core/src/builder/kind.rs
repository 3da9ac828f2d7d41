use super::BuilderError;
use crate::config::ListPageConfiguration;
use crate::facets::Facet;
use crate::filter::{FilterConfigurationMap, PresetFilter};
use crate::query_type::query_type_for;

/// What sets the two filter builders apart.
pub trait FilterKind {
    /// Separates this kind's state in an editor session.
    const NAME: &'static str;

    /// Column header for the values column of the summary.
    const VALUES_HEADER: &'static str;

    fn filters(configuration: &ListPageConfiguration) -> &FilterConfigurationMap;

    fn filters_mut(configuration: &mut ListPageConfiguration) -> &mut FilterConfigurationMap;

    /// Whether filters of this kind can be set on the facet.
    fn is_eligible(facet: &Facet) -> bool;

    fn form_title(facet: &Facet) -> String;

    /// Whether the edit form takes values from the editor.
    fn exposes_values() -> bool;

    /// Whether the edit form lets the editor pick an operator.
    fn exposes_operator(facet: &Facet) -> bool;

    /// Validates and normalizes the values entered for a filter.
    fn prepare_values(facet: &Facet, values: Vec<String>) -> Result<Vec<String>, BuilderError>;

    /// The summary text for a committed filter.
    fn values_label(facet: &Facet, filter: &PresetFilter) -> String;
}

/// Static filter values stored with the list page.
#[derive(Debug)]
pub struct DefaultValues;

impl FilterKind for DefaultValues {
    const NAME: &'static str = "default";
    const VALUES_HEADER: &'static str = "Default value";

    fn filters(configuration: &ListPageConfiguration) -> &FilterConfigurationMap {
        &configuration.default_filter_values
    }

    fn filters_mut(configuration: &mut ListPageConfiguration) -> &mut FilterConfigurationMap {
        &mut configuration.default_filter_values
    }

    fn is_eligible(_facet: &Facet) -> bool {
        true
    }

    fn form_title(facet: &Facet) -> String {
        format!("Set default value for {}", facet.label)
    }

    fn exposes_values() -> bool {
        true
    }

    fn exposes_operator(facet: &Facet) -> bool {
        facet.supports_set_operators()
    }

    fn prepare_values(facet: &Facet, values: Vec<String>) -> Result<Vec<String>, BuilderError> {
        let values: Vec<String> = values
            .into_iter()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect();
        if values.is_empty() {
            return Err(BuilderError::MissingValue {
                facet: facet.id.clone(),
            });
        }

        query_type_for(facet.query_type)
            .validate(&values)
            .map_err(|reason| BuilderError::InvalidValue {
                facet: facet.id.clone(),
                reason,
            })?;
        Ok(values)
    }

    fn values_label(facet: &Facet, filter: &PresetFilter) -> String {
        let values = query_type_for(facet.query_type)
            .describe(facet, filter)
            .into_iter()
            .map(|result| result.display)
            .collect::<Vec<_>>()
            .join(", ");

        if facet.supports_set_operators() {
            format!("{}: {}", filter.operator().label(), values)
        } else {
            values
        }
    }
}

/// Filters whose values come from the entity a list page is viewed on.
#[derive(Debug)]
pub struct ContextualValues;

impl FilterKind for ContextualValues {
    const NAME: &'static str = "contextual";
    const VALUES_HEADER: &'static str = "Operator";

    fn filters(configuration: &ListPageConfiguration) -> &FilterConfigurationMap {
        &configuration.contextual_filters
    }

    fn filters_mut(configuration: &mut ListPageConfiguration) -> &mut FilterConfigurationMap {
        &mut configuration.contextual_filters
    }

    fn is_eligible(facet: &Facet) -> bool {
        facet.supports_set_operators()
    }

    fn form_title(facet: &Facet) -> String {
        format!("Set operator for {}", facet.label)
    }

    fn exposes_values() -> bool {
        false
    }

    fn exposes_operator(_facet: &Facet) -> bool {
        true
    }

    // Values are resolved per request; anything entered is dropped.
    fn prepare_values(_facet: &Facet, _values: Vec<String>) -> Result<Vec<String>, BuilderError> {
        Ok(Vec::new())
    }

    fn values_label(_facet: &Facet, filter: &PresetFilter) -> String {
        filter.operator().label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::{QueryTypeKind, WidgetConfig};
    use crate::filter::PresetOperator;
    use assert_matches::assert_matches;

    fn select_one() -> Facet {
        Facet::new("select_one", "Select one", "select_one")
    }

    fn created() -> Facet {
        Facet::new("created", "Created", "created")
            .with_query_type(QueryTypeKind::Date)
            .with_widget(WidgetConfig::Date)
    }

    #[test]
    fn test_default_values_are_trimmed_and_required() {
        let values = DefaultValues::prepare_values(
            &select_one(),
            vec![" test1 ".to_string(), "".to_string()],
        );
        assert_eq!(values, Ok(vec!["test1".to_string()]));

        assert_matches!(
            DefaultValues::prepare_values(&select_one(), vec!["   ".to_string()]),
            Err(BuilderError::MissingValue { facet }) if facet == "select_one"
        );
    }

    #[test]
    fn test_default_date_values_must_parse() {
        assert!(DefaultValues::prepare_values(&created(), vec!["gt|2020-01-01".to_string()]).is_ok());
        assert_matches!(
            DefaultValues::prepare_values(&created(), vec!["soon".to_string()]),
            Err(BuilderError::InvalidValue { .. })
        );
    }

    #[test]
    fn test_contextual_values_are_always_empty() {
        assert_eq!(
            ContextualValues::prepare_values(&select_one(), vec!["test1".to_string()]),
            Ok(Vec::new())
        );
    }

    #[test]
    fn test_values_labels() {
        let filter = PresetFilter::new(
            "select_one",
            PresetOperator::Or,
            vec!["test1".to_string(), "test2".to_string()],
        );
        assert_eq!(DefaultValues::values_label(&select_one(), &filter), "Any of: test1, test2");
        assert_eq!(ContextualValues::values_label(&select_one(), &filter), "Any of");

        let date = PresetFilter::new(
            "created",
            PresetOperator::Or,
            vec!["bt|2020-01-01|2020-01-31".to_string()],
        );
        assert_eq!(
            DefaultValues::values_label(&created(), &date),
            "Between 01 January 2020 and 31 January 2020"
        );
    }

    #[test]
    fn test_eligibility() {
        assert!(DefaultValues::is_eligible(&created()));
        assert!(!ContextualValues::is_eligible(&created()));
        assert!(ContextualValues::is_eligible(&select_one()));
    }
}
