//! Date range filters
//!
//! A date filter value has the form `op|first[|second]` where `op` is `gt`
//! (after), `lt` (before) or `bt` (between). Dates are `YYYY-MM-DD` or
//! RFC 3339 datetimes.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use log::debug;

use super::{FacetResult, QueryType};
use crate::FieldId;
use crate::facets::Facet;
use crate::filter::PresetFilter;
use crate::search::{
    Combinator, ConditionGroup, FilterCondition, FilterOperator, FilterValue, SearchQuery,
};

const DISPLAY_FORMAT: &str = "%d %B %Y";

/// Comparison mode of a date filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOperator {
    After,
    Before,
    Between,
}

impl DateOperator {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "gt" => Some(DateOperator::After),
            "lt" => Some(DateOperator::Before),
            "bt" => Some(DateOperator::Between),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateOperator::After => "After",
            DateOperator::Before => "Before",
            DateOperator::Between => "Between",
        }
    }
}

/// A parsed date filter value.
#[derive(Debug, Clone, PartialEq)]
pub struct DateFilter {
    pub operator: DateOperator,
    pub first: DateTime<FixedOffset>,
    pub second: Option<DateTime<FixedOffset>>,
}

impl DateFilter {
    /// Parses `op|first[|second]`. Returns `None` for unknown operators,
    /// unparsable dates and a between filter without a second date.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split('|');
        let operator = DateOperator::from_code(parts.next()?.trim())?;
        let first = parse_date(parts.next()?)?;
        let second = match parts.next() {
            Some(second) => Some(parse_date(second)?),
            None => None,
        };
        if operator == DateOperator::Between && second.is_none() {
            return None;
        }

        Some(Self {
            operator,
            first,
            second,
        })
    }

    /// Human readable form, e.g. "Between 01 January 2020 and 31 January 2020".
    pub fn label(&self) -> String {
        let first = self.first.format(DISPLAY_FORMAT);
        match (self.operator, self.second) {
            (DateOperator::Between, Some(second)) => format!(
                "{} {} and {}",
                self.operator.label(),
                first,
                second.format(DISPLAY_FORMAT)
            ),
            _ => format!("{} {}", self.operator.label(), first),
        }
    }

    /// The conditions on `field` this filter stands for.
    ///
    /// Days are half-open: "after" starts at the next day, "before" ends at
    /// the start of the given day, and "between" runs up to the day after
    /// the second date.
    pub fn condition_group(&self, field: &FieldId) -> ConditionGroup {
        let condition = |operator, value| {
            FilterCondition::new(field.clone(), operator, FilterValue::DateTime(value))
        };
        let group = ConditionGroup::new(Combinator::And);
        match (self.operator, self.second) {
            (DateOperator::After, _) => group.with_condition(condition(
                FilterOperator::GreaterOrEqual,
                start_of_next_day(&self.first),
            )),
            (DateOperator::Before, _) => {
                group.with_condition(condition(FilterOperator::LessThan, start_of_day(&self.first)))
            }
            (DateOperator::Between, Some(second)) => group
                .with_condition(condition(
                    FilterOperator::GreaterOrEqual,
                    start_of_day(&self.first),
                ))
                .with_condition(condition(FilterOperator::LessThan, start_of_next_day(&second))),
            (DateOperator::Between, None) => group,
        }
    }
}

fn parse_date(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    FixedOffset::east_opt(0)?
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .single()
}

fn start_of_next_day(dt: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    match dt.date_naive().succ_opt() {
        Some(next) => at_date(dt, next),
        None => *dt,
    }
}

fn start_of_day(dt: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    at_date(dt, dt.date_naive())
}

fn at_date(dt: &DateTime<FixedOffset>, date: NaiveDate) -> DateTime<FixedOffset> {
    dt.offset()
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .single()
        .unwrap_or(*dt)
}

/// Adapter for date facets.
#[derive(Debug)]
pub struct DateQueryType;

impl DateQueryType {
    fn active_filter(filter: &PresetFilter) -> Option<DateFilter> {
        let raw = filter.values().first()?;
        let parsed = DateFilter::parse(raw);
        if parsed.is_none() {
            debug!(
                "Ignoring unsupported date filter '{}' on facet '{}'",
                raw,
                filter.facet_id()
            );
        }
        parsed
    }
}

impl QueryType for DateQueryType {
    fn apply(&self, query: &mut dyn SearchQuery, facet: &Facet, filter: &PresetFilter) {
        if let Some(date_filter) = Self::active_filter(filter) {
            query.add_condition_group(
                date_filter.condition_group(&FieldId::new(facet.field_identifier.as_str())),
            );
        }
    }

    fn describe(&self, _facet: &Facet, filter: &PresetFilter) -> Vec<FacetResult> {
        match Self::active_filter(filter) {
            Some(date_filter) => {
                let raw = filter.values().first().cloned().unwrap_or_default();
                vec![FacetResult::new(&raw, &date_filter.label())]
            }
            None => Vec::new(),
        }
    }

    fn validate(&self, values: &[String]) -> Result<(), String> {
        match values.first() {
            Some(raw) if DateFilter::parse(raw).is_some() => Ok(()),
            Some(raw) => Err(format!("'{}' is not a valid date filter", raw)),
            None => Err("A date filter needs a value".to_string()),
        }
    }
}
