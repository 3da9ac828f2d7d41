use serde::{Deserialize, Serialize};

use super::ListPageConfiguration;

/// The entity type, bundle and search index a list page draws from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListSource {
    pub entity_type: String,
    pub bundle: String,
    pub search_id: String,
}

impl ListSource {
    /// Creates a list source using the conventional facet source id.
    pub fn new(entity_type: &str, bundle: &str) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            bundle: bundle.to_string(),
            search_id: format!("list_facet_source_{}_{}", entity_type, bundle),
        }
    }

    pub fn with_search_id(mut self, search_id: &str) -> Self {
        self.search_id = search_id.to_string();
        self
    }

    /// Whether a stored configuration was built against this entity type and bundle.
    pub fn matches(&self, configuration: &ListPageConfiguration) -> bool {
        self.entity_type == configuration.entity_type && self.bundle == configuration.bundle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_id() {
        let source = ListSource::new("node", "content_type_one");
        assert_eq!(source.search_id, "list_facet_source_node_content_type_one");
    }

    #[test]
    fn test_matches_configuration() {
        let source = ListSource::new("node", "content_type_one");
        let matching = ListPageConfiguration::new("node", "content_type_one");
        let other_bundle = ListPageConfiguration::new("node", "content_type_two");
        let other_type = ListPageConfiguration::new("taxonomy_term", "content_type_one");

        assert!(source.matches(&matching));
        assert!(!source.matches(&other_bundle));
        assert!(!source.matches(&other_type));
    }
}
