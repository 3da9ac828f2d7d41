//! Deterministic filter ids

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of a filter slot in a filter configuration map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterId(String);

impl FilterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for FilterId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FilterId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Derives the id of a filter slot for a facet.
///
/// `configured_ids` are the ids already configured next to the new slot. They
/// are sorted and deduplicated, so the result only depends on the set. Every
/// component is written as `<byte length>:<text>`, which keeps the encoding
/// unambiguous for any input. A derived id also embeds every configured id,
/// so it can never equal one of them.
pub fn derive_filter_id<I, S>(facet_id: &str, configured_ids: I) -> FilterId
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let configured: BTreeSet<String> = configured_ids
        .into_iter()
        .map(|id| id.as_ref().to_string())
        .collect();

    let mut id = encode_component(facet_id);
    for other in &configured {
        id.push('+');
        id.push_str(&encode_component(other));
    }

    FilterId(id)
}

fn encode_component(value: &str) -> String {
    format!("{}:{}", value.len(), value)
}
