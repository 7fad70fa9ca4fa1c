use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One gathered item, before summarization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectorItem {
    /// Item headline.
    pub title: String,
    /// Short summary or excerpt.
    pub summary: String,
    /// Link to the item, if any.
    #[serde(default)]
    pub url: String,
    /// Source-specific extras (star counts, event times, feed ids, ...).
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl CollectorItem {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            url: String::new(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Everything one source produced in a single collection pass.
///
/// Item order is the order the digest will present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectorResult {
    /// Source identifier, e.g. "github" or "rss".
    pub source: String,
    /// Items in presentation order.
    pub items: Vec<CollectorItem>,
}
