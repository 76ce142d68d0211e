//! Display list for the annotated text
//!
//! This module defines the node sequence handed to JavaScript. Plain text runs
//! and entity nodes alternate so that concatenating their text reproduces the
//! source text exactly. JavaScript turns each node into a DOM node without any
//! offset bookkeeping of its own.

use serde::{Deserialize, Serialize};

use crate::models::DisplayConfig;
use crate::text::{ChildNode, EntitySet, SiblingNode, SourceText, TextRange};

/// One rendered node, without DOM identity
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderNode {
    /// A run of plain source text
    Text {
        start: usize,
        end: usize,
        text: String,
    },

    /// An entity span with its badge, tooltip and remove control
    Entity {
        start: usize,
        end: usize,
        text: String,
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
        selected: bool,
        badge: String,
        tooltip: String,
    },
}

impl RenderNode {
    pub fn range(&self) -> TextRange {
        match self {
            RenderNode::Text { start, end, .. } | RenderNode::Entity { start, end, .. } => {
                TextRange::new(*start, *end)
            }
        }
    }

    pub fn text(&self) -> &str {
        match self {
            RenderNode::Text { text, .. } | RenderNode::Entity { text, .. } => text,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, RenderNode::Text { .. })
    }

    /// Shape of this node as the selection mapper sees it
    ///
    /// Entity nodes hold their text run followed by the badge and the remove
    /// control.
    pub fn sibling(&self) -> SiblingNode {
        let len = self.range().len();
        match self {
            RenderNode::Text { .. } => SiblingNode::Text { len },
            RenderNode::Entity { .. } => SiblingNode::Entity {
                children: vec![ChildNode::Text { len }, ChildNode::Decoration, ChildNode::Decoration],
            },
        }
    }
}

/// Build the node sequence for a text and its entities
///
/// Empty gaps produce no text node.
pub fn render(source: &SourceText, entities: &EntitySet, display: DisplayConfig) -> Vec<RenderNode> {
    let mut nodes = Vec::with_capacity(entities.len() * 2 + 1);
    let mut cursor = 0;

    for entity in entities.iter() {
        if entity.start > cursor {
            nodes.push(text_node(source, TextRange::new(cursor, entity.start)));
        }
        nodes.push(RenderNode::Entity {
            start: entity.start,
            end: entity.end,
            text: source.slice(entity.range()),
            label: entity.label.clone(),
            details: entity.details.clone(),
            selected: entity.selected,
            badge: display.badge_field.pick(entity).to_string(),
            tooltip: display.tooltip_field.pick(entity).to_string(),
        });
        cursor = entity.end;
    }

    if cursor < source.len() {
        nodes.push(text_node(source, TextRange::new(cursor, source.len())));
    }

    nodes
}

fn text_node(source: &SourceText, range: TextRange) -> RenderNode {
    RenderNode::Text {
        start: range.start,
        end: range.end,
        text: source.slice(range),
    }
}
