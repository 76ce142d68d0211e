//! Host payloads and component configuration
//!
//! One payload arrives with every host render event. Optional fields fall
//! back to the defaults below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::search::ConceptNode;
use crate::text::Entity;

/// Host contract violations detected while loading a render event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("entity {start}..{end} is empty or reversed")]
    EmptyEntity { start: usize, end: usize },

    #[error("entity {start}..{end} exceeds text length {len}")]
    EntityOutOfBounds { start: usize, end: usize, len: usize },
}

/// Entity field shown in a badge or tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayField {
    #[default]
    Label,
    Details,
}

impl DisplayField {
    /// Pick the field from an entity; `Details` falls back to the label
    pub fn pick<'a>(&self, entity: &'a Entity) -> &'a str {
        match self {
            DisplayField::Label => &entity.label,
            DisplayField::Details => entity.details.as_deref().unwrap_or(&entity.label),
        }
    }
}

/// How entity nodes are decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub badge_field: DisplayField,
    pub tooltip_field: DisplayField,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            badge_field: DisplayField::Label,
            tooltip_field: DisplayField::Details,
        }
    }
}

/// Render event payload for the annotator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotateArgs {
    /// Label given to new entities
    pub label: String,

    /// Source text
    pub text: String,

    /// Entities to start from
    #[serde(default, alias = "ents")]
    pub entities: Vec<Entity>,

    /// Details given to new entities
    #[serde(default)]
    pub label_details: Option<String>,

    #[serde(default)]
    pub badge_field: DisplayField,

    #[serde(default = "default_tooltip_field")]
    pub tooltip_field: DisplayField,
}

impl AnnotateArgs {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            entities: Vec::new(),
            label_details: None,
            badge_field: DisplayField::Label,
            tooltip_field: default_tooltip_field(),
        }
    }

    pub fn with_entities(mut self, entities: Vec<Entity>) -> Self {
        self.entities = entities;
        self
    }

    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            badge_field: self.badge_field,
            tooltip_field: self.tooltip_field,
        }
    }
}

fn default_tooltip_field() -> DisplayField {
    DisplayField::Details
}

/// Render event payload for the concept search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchArgs {
    pub concepts: Vec<ConceptNode>,

    /// Include concept metadata in results
    #[serde(default)]
    pub show_metadata: bool,

    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl SearchArgs {
    pub fn new(concepts: Vec<ConceptNode>) -> Self {
        Self {
            concepts,
            show_metadata: false,
            min_query_len: default_min_query_len(),
            max_results: default_max_results(),
        }
    }
}

fn default_min_query_len() -> usize {
    2
}

fn default_max_results() -> usize {
    10
}
