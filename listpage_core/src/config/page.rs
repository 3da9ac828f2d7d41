use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ConfigError;
use crate::filter::FilterConfigurationMap;

/// The persisted configuration of a list page.
///
/// Saving always writes the whole document, so two editors saving the same
/// list page concurrently resolve as last write wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPageConfiguration {
    #[serde(default)]
    pub entity_type: String,
    #[serde(default)]
    pub bundle: String,
    #[serde(default)]
    pub default_filter_values: FilterConfigurationMap,
    #[serde(default)]
    pub contextual_filters: FilterConfigurationMap,
    #[serde(default)]
    pub exposed_filters: Vec<String>,
    #[serde(default)]
    pub exposed_filters_overridden: bool,
}

impl ListPageConfiguration {
    pub fn new(entity_type: &str, bundle: &str) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            bundle: bundle.to_string(),
            ..Default::default()
        }
    }

    pub fn with_default_filter_values(mut self, filters: FilterConfigurationMap) -> Self {
        self.default_filter_values = filters;
        self
    }

    pub fn with_contextual_filters(mut self, filters: FilterConfigurationMap) -> Self {
        self.contextual_filters = filters;
        self
    }

    /// Reads a stored configuration without ever failing.
    ///
    /// Each part is read on its own: a part with an unexpected shape falls
    /// back to its default, and a document that is not an object yields an
    /// empty configuration.
    pub fn from_json_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            warn!("List page configuration is not an object, treating it as empty");
            return Self::default();
        };

        let string = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            entity_type: string("entity_type"),
            bundle: string("bundle"),
            default_filter_values: read_part(
                object.get("default_filter_values"),
                "default_filter_values",
            ),
            contextual_filters: read_part(object.get("contextual_filters"), "contextual_filters"),
            exposed_filters: read_part(object.get("exposed_filters"), "exposed_filters"),
            exposed_filters_overridden: object
                .get("exposed_filters_overridden")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }

    /// Parses a stored configuration, treating malformed JSON as empty.
    pub fn from_json_str(source: &str) -> Self {
        match serde_json::from_str::<Value>(source) {
            Ok(value) => Self::from_json_value(&value),
            Err(e) => {
                warn!("List page configuration is not valid JSON ({}), treating it as empty", e);
                Self::default()
            }
        }
    }

    /// Loads a configuration file. Only an unreadable file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded list page configuration from {}", path.display());
        Ok(Self::from_json_str(&source))
    }

    pub fn to_json_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn read_part<T: Default + for<'de> Deserialize<'de>>(value: Option<&Value>, key: &str) -> T {
    match value {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            warn!("Ignoring malformed '{}' in list page configuration: {}", key, e);
            T::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterId, PresetFilter, PresetOperator};
    use serde_json::json;

    fn sample() -> ListPageConfiguration {
        let mut defaults = FilterConfigurationMap::new();
        defaults.insert(
            FilterId::new("4:body"),
            PresetFilter::new("body", PresetOperator::Or, vec!["updated cherry".to_string()]),
        );
        let mut contextual = FilterConfigurationMap::new();
        contextual.insert(
            FilterId::new("9:reference"),
            PresetFilter::contextual("reference", PresetOperator::Or),
        );
        contextual.insert(FilterId::new("4:link"), PresetFilter::contextual("link", PresetOperator::Not));

        ListPageConfiguration::new("node", "content_type_one")
            .with_default_filter_values(defaults)
            .with_contextual_filters(contextual)
    }

    #[test]
    fn test_round_trip() {
        let configuration = sample();
        let json = configuration.to_json_string();
        let back = ListPageConfiguration::from_json_str(&json);

        assert_eq!(back, configuration);
        assert_eq!(serde_json::from_str::<ListPageConfiguration>(&json).unwrap(), configuration);
    }

    #[test]
    fn test_persisted_shape() {
        let value = sample().to_json_value();

        assert_eq!(value["entity_type"], json!("node"));
        assert_eq!(value["bundle"], json!("content_type_one"));
        assert_eq!(value["exposed_filters"], json!([]));
        assert_eq!(value["exposed_filters_overridden"], json!(false));
        assert_eq!(
            value["contextual_filters"]["4:link"],
            json!({"facet_id": "link", "operator": "not", "values": []})
        );
    }

    #[test]
    fn test_malformed_filter_map_is_treated_as_empty() {
        let value = json!({
            "entity_type": "node",
            "bundle": "content_type_one",
            "default_filter_values": ["not", "a", "map"],
            "contextual_filters": {"9:reference": {"facet_id": "reference", "operator": "or", "values": []}},
        });

        let configuration = ListPageConfiguration::from_json_value(&value);

        assert!(configuration.default_filter_values.is_empty());
        assert_eq!(configuration.contextual_filters.len(), 1);
        assert_eq!(configuration.entity_type, "node");
    }

    #[test]
    fn test_unknown_operator_drops_the_map() {
        let value = json!({
            "entity_type": "node",
            "bundle": "page",
            "contextual_filters": {"x": {"facet_id": "reference", "operator": "xor"}},
        });

        let configuration = ListPageConfiguration::from_json_value(&value);
        assert!(configuration.contextual_filters.is_empty());
    }

    #[test]
    fn test_non_object_and_invalid_json() {
        assert_eq!(
            ListPageConfiguration::from_json_value(&json!([1, 2])),
            ListPageConfiguration::default()
        );
        assert_eq!(
            ListPageConfiguration::from_json_str("{not json"),
            ListPageConfiguration::default()
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("list_page.json");
        std::fs::write(&path, sample().to_json_string()).unwrap();

        assert_eq!(ListPageConfiguration::load(&path).unwrap(), sample());
        assert!(ListPageConfiguration::load(&dir.path().join("missing.json")).is_err());
    }
}
