use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// A pair of entity field names that carry the same information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPair {
    pub from: String,
    pub to: String,
}

/// Field name equivalences used when reading contextual values.
///
/// A viewing entity may store a value under a different field name than the
/// one a facet is built on. Pairs are looked up in both directions. The
/// remapping is loaded once and passed to the resolver read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRemapping {
    #[serde(default)]
    maps: Vec<FieldPair>,
}

impl FieldRemapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            maps: pairs
                .into_iter()
                .map(|(from, to)| FieldPair {
                    from: from.to_string(),
                    to: to.to_string(),
                })
                .collect(),
        }
    }

    /// Loads the remapping from a JSON file of the form
    /// `{"maps": [{"from": "...", "to": "..."}]}`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let remapping: Self = serde_json::from_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Loaded {} field remapping pairs from {}",
            remapping.maps.len(),
            path.display()
        );
        Ok(remapping)
    }

    pub fn pairs(&self) -> &[FieldPair] {
        &self.maps
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Every field paired with `field`, on either side, in configuration order.
    pub fn counterparts(&self, field: &str) -> Vec<&str> {
        let mut found: Vec<&str> = Vec::new();
        for pair in &self.maps {
            let other = if pair.from == field {
                pair.to.as_str()
            } else if pair.to == field {
                pair.from.as_str()
            } else {
                continue;
            };
            if other != field && !found.contains(&other) {
                found.push(other);
            }
        }
        found
    }
}
