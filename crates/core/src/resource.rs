//! Discovered resources and tags

use serde::{Deserialize, Serialize};

/// Key/value resource tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A taggable resource returned by the discovery capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedResource {
    pub arn: String,
    pub namespace: String,
    pub region: String,
    pub tags: Vec<Tag>,
}

impl TaggedResource {
    /// Trailing segment of the ARN, the identifier CloudWatch dimensions
    /// address the resource by.
    pub fn resource_name(&self) -> &str {
        let tail = self.arn.rsplit(':').next().unwrap_or(&self.arn);
        tail.rsplit('/').next().unwrap_or(tail)
    }

    /// Whether the resource carries every search tag. An empty search set
    /// matches everything; an empty search-tag value matches any value for
    /// that key.
    pub fn matches_tags(&self, search: &[Tag]) -> bool {
        search.iter().all(|wanted| {
            self.tags
                .iter()
                .any(|tag| tag.key == wanted.key && (wanted.value.is_empty() || tag.value == wanted.value))
        })
    }
}
