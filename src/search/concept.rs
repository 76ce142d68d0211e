//! Concept tree model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A concept in a terminology tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptNode {
    pub code: String,
    pub label: String,
    #[serde(default)]
    pub children: Vec<ConceptNode>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub style: BTreeMap<String, String>,
}

impl ConceptNode {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            children: Vec::new(),
            metadata: BTreeMap::new(),
            style: BTreeMap::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<ConceptNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Case-sensitive match: code prefix or label substring
    pub fn matches(&self, query: &str) -> bool {
        self.code.starts_with(query) || self.label.contains(query)
    }
}

/// A concept as reported to the host, without its subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRef {
    pub code: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
}

impl ConceptRef {
    pub fn from_node(node: &ConceptNode, include_metadata: bool) -> Self {
        Self {
            code: node.code.clone(),
            label: node.label.clone(),
            metadata: include_metadata.then(|| node.metadata.clone()),
            style: node.style.clone(),
        }
    }
}
