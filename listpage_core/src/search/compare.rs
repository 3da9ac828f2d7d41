//! Comparison of indexed field values against conditions

use chrono::{DateTime, FixedOffset, NaiveDate};

use super::SearchError;
use super::types::{FilterCondition, FilterOperator, FilterValue};
use crate::FieldValue;

/// Check a condition against a (possibly missing, possibly multi-valued) field
pub fn matches_condition(
    field_value: Option<&FieldValue>,
    condition: &FilterCondition,
) -> Result<bool, SearchError> {
    let items = match field_value {
        Some(value) => value.items(),
        // A missing field equals nothing, so it passes only "not equal"
        None => return Ok(condition.operator == FilterOperator::NotEqual),
    };

    match condition.operator {
        FilterOperator::NotEqual => {
            for item in items {
                if compare_item(item, &FilterOperator::Equal, &condition.value)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        _ => {
            for item in items {
                if compare_item(item, &condition.operator, &condition.value)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}

/// Compare a single scalar item by delegating to type-specific comparators
fn compare_item(
    item: &FieldValue,
    operator: &FilterOperator,
    filter_value: &FilterValue,
) -> Result<bool, SearchError> {
    match item {
        FieldValue::String(_) | FieldValue::Reference(_) => {
            compare_string(item, operator, filter_value)
        }
        FieldValue::Integer(value) => compare_integer(*value, operator, filter_value),
        FieldValue::Boolean(_) => compare_boolean(item, operator, filter_value),
        FieldValue::DateTime(value) => compare_datetime(value, operator, filter_value),
        FieldValue::List(_) => Ok(false),
    }
}

fn compare_string(
    item: &FieldValue,
    operator: &FilterOperator,
    filter_value: &FilterValue,
) -> Result<bool, SearchError> {
    let value = match item {
        FieldValue::String(s) => s.as_str(),
        FieldValue::Reference(id) => id.as_str(),
        _ => return Err(type_mismatch(item, filter_value)),
    };
    let FilterValue::String(filter_str) = filter_value else {
        return Err(type_mismatch(item, filter_value));
    };

    let ordering = value.cmp(filter_str.as_str());
    Ok(match operator {
        FilterOperator::Equal => value == filter_str.as_str(),
        FilterOperator::NotEqual => value != filter_str.as_str(),
        FilterOperator::GreaterThan => ordering.is_gt(),
        FilterOperator::LessThan => ordering.is_lt(),
        FilterOperator::GreaterOrEqual => ordering.is_ge(),
        FilterOperator::LessOrEqual => ordering.is_le(),
    })
}

fn compare_integer(
    value: i64,
    operator: &FilterOperator,
    filter_value: &FilterValue,
) -> Result<bool, SearchError> {
    let filter_int = match filter_value {
        FilterValue::String(s) => s.trim().parse::<i64>().map_err(|_| SearchError::TypeMismatch {
            field_type: "Integer".to_string(),
            filter_type: format!("non-numeric {}", filter_value.type_name()),
        })?,
        _ => {
            return Err(SearchError::TypeMismatch {
                field_type: "Integer".to_string(),
                filter_type: filter_value.type_name().to_string(),
            });
        }
    };

    Ok(match operator {
        FilterOperator::Equal => value == filter_int,
        FilterOperator::NotEqual => value != filter_int,
        FilterOperator::GreaterThan => value > filter_int,
        FilterOperator::LessThan => value < filter_int,
        FilterOperator::GreaterOrEqual => value >= filter_int,
        FilterOperator::LessOrEqual => value <= filter_int,
    })
}

fn compare_boolean(
    item: &FieldValue,
    operator: &FilterOperator,
    filter_value: &FilterValue,
) -> Result<bool, SearchError> {
    let FilterValue::String(filter_str) = filter_value else {
        return Err(type_mismatch(item, filter_value));
    };
    // Booleans are indexed as "1" and "0"
    let value = item.to_strings().join("");
    match operator {
        FilterOperator::Equal => Ok(value == filter_str.trim()),
        FilterOperator::NotEqual => Ok(value != filter_str.trim()),
        _ => Err(SearchError::UnsupportedOperator {
            field_type: "Boolean".to_string(),
            operator: operator.symbol().to_string(),
            supported: vec!["=".to_string(), "<>".to_string()],
        }),
    }
}

fn compare_datetime(
    value: &DateTime<FixedOffset>,
    operator: &FilterOperator,
    filter_value: &FilterValue,
) -> Result<bool, SearchError> {
    let filter_dt = match filter_value {
        FilterValue::DateTime(dt) => *dt,
        FilterValue::String(s) => {
            // Support both full datetime and date-only formats
            if let Ok(dt) = s.parse::<DateTime<FixedOffset>>() {
                dt
            } else if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                return Ok(compare_ordered(&value.date_naive(), operator, &date));
            } else {
                return Err(SearchError::TypeMismatch {
                    field_type: "DateTime".to_string(),
                    filter_type: format!("non-date {}", filter_value.type_name()),
                });
            }
        }
    };

    Ok(compare_ordered(value, operator, &filter_dt))
}

fn compare_ordered<T: PartialOrd>(value: &T, operator: &FilterOperator, filter: &T) -> bool {
    match operator {
        FilterOperator::Equal => value == filter,
        FilterOperator::NotEqual => value != filter,
        FilterOperator::GreaterThan => value > filter,
        FilterOperator::LessThan => value < filter,
        FilterOperator::GreaterOrEqual => value >= filter,
        FilterOperator::LessOrEqual => value <= filter,
    }
}

fn type_mismatch(item: &FieldValue, filter_value: &FilterValue) -> SearchError {
    SearchError::TypeMismatch {
        field_type: item.type_name().to_string(),
        filter_type: filter_value.type_name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntityId, FieldId};
    use chrono::TimeZone;

    fn condition(operator: FilterOperator, value: &str) -> FilterCondition {
        FilterCondition::new(FieldId::new("select_one"), operator, FilterValue::from(value))
    }

    fn make_datetime(year: i32, month: u32, day: u32, hour: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(year, month, day, hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_equal_on_multi_valued_field() {
        let field = FieldValue::List(vec![FieldValue::from("test1"), FieldValue::from("test2")]);

        assert!(matches_condition(Some(&field), &condition(FilterOperator::Equal, "test2")).unwrap());
        assert!(!matches_condition(Some(&field), &condition(FilterOperator::Equal, "test3")).unwrap());
    }

    #[test]
    fn test_string_equality_is_exact() {
        let field = FieldValue::from("TEST1");

        assert!(!matches_condition(Some(&field), &condition(FilterOperator::Equal, "test1")).unwrap());
        assert!(matches_condition(Some(&field), &condition(FilterOperator::NotEqual, "test1")).unwrap());
        assert!(matches_condition(Some(&field), &condition(FilterOperator::Equal, "TEST1")).unwrap());
    }

    #[test]
    fn test_not_equal_requires_no_item_to_match() {
        let field = FieldValue::List(vec![FieldValue::from("test1"), FieldValue::from("test2")]);

        assert!(!matches_condition(Some(&field), &condition(FilterOperator::NotEqual, "test1")).unwrap());
        assert!(matches_condition(Some(&field), &condition(FilterOperator::NotEqual, "test3")).unwrap());
    }

    #[test]
    fn test_missing_field() {
        assert!(!matches_condition(None, &condition(FilterOperator::Equal, "test1")).unwrap());
        assert!(matches_condition(None, &condition(FilterOperator::NotEqual, "test1")).unwrap());
        assert!(!matches_condition(None, &condition(FilterOperator::GreaterThan, "a")).unwrap());
    }

    #[test]
    fn test_reference_and_boolean_compare_as_strings() {
        let reference = FieldValue::Reference(EntityId::new("1"));
        assert!(matches_condition(Some(&reference), &condition(FilterOperator::Equal, "1")).unwrap());

        let boolean = FieldValue::Boolean(true);
        assert!(matches_condition(Some(&boolean), &condition(FilterOperator::Equal, "1")).unwrap());
        assert!(!matches_condition(Some(&boolean), &condition(FilterOperator::Equal, "0")).unwrap());
    }

    #[test]
    fn test_boolean_range_is_unsupported() {
        let boolean = FieldValue::Boolean(true);
        let result = matches_condition(Some(&boolean), &condition(FilterOperator::GreaterThan, "0"));
        assert!(matches!(result, Err(SearchError::UnsupportedOperator { .. })));
    }

    #[test]
    fn test_integer_comparisons() {
        let field = FieldValue::Integer(42);
        assert!(matches_condition(Some(&field), &condition(FilterOperator::GreaterThan, "41")).unwrap());
        assert!(matches_condition(Some(&field), &condition(FilterOperator::LessOrEqual, "42")).unwrap());

        let result = matches_condition(Some(&field), &condition(FilterOperator::Equal, "abc"));
        assert!(matches!(result, Err(SearchError::TypeMismatch { .. })));
    }

    #[test]
    fn test_datetime_against_datetime_value() {
        let field = FieldValue::DateTime(make_datetime(2020, 1, 15, 10));
        let after = FilterCondition::new(
            FieldId::new("created"),
            FilterOperator::GreaterThan,
            FilterValue::DateTime(make_datetime(2020, 1, 1, 0)),
        );
        let before = FilterCondition::new(
            FieldId::new("created"),
            FilterOperator::LessThan,
            FilterValue::DateTime(make_datetime(2020, 1, 1, 0)),
        );

        assert!(matches_condition(Some(&field), &after).unwrap());
        assert!(!matches_condition(Some(&field), &before).unwrap());
    }

    #[test]
    fn test_datetime_against_date_string() {
        let field = FieldValue::DateTime(make_datetime(2020, 1, 15, 10));
        assert!(matches_condition(Some(&field), &condition(FilterOperator::Equal, "2020-01-15")).unwrap());

        let result = matches_condition(Some(&field), &condition(FilterOperator::Equal, "yesterday"));
        assert!(matches!(result, Err(SearchError::TypeMismatch { .. })));
    }

    #[test]
    fn test_string_against_datetime_value_is_a_mismatch() {
        let field = FieldValue::from("test1");
        let condition = FilterCondition::new(
            FieldId::new("select_one"),
            FilterOperator::Equal,
            FilterValue::DateTime(make_datetime(2020, 1, 1, 0)),
        );
        assert!(matches!(
            matches_condition(Some(&field), &condition),
            Err(SearchError::TypeMismatch { .. })
        ));
    }
}
