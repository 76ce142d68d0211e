//! Selection mapping
//!
//! Converts a node-relative browser selection into absolute code unit
//! offsets in the source text. The view splits the text into a flat run of
//! sibling nodes: plain text runs and entity nodes. An entity node wraps its
//! text run plus decoration children (badge, remove control) that carry no
//! source text.

use super::buffer::SourceText;
use super::cursor::TextRange;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a selection is ignored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection is collapsed at {0}")]
    Collapsed(usize),

    #[error("selection {}..{} contains only whitespace", .0.start, .0.end)]
    WhitespaceOnly(TextRange),

    #[error("selection refers to node {node} but only {count} siblings exist")]
    UnknownNode { node: usize, count: usize },

    #[error("offset {offset} exceeds text length {len} of node {node}")]
    OffsetOutOfRange { node: usize, offset: usize, len: usize },

    #[error("selection endpoint lies inside a decoration of node {0}")]
    InsideDecoration(usize),

    #[error("siblings cover {covered} code units but the text has {expected}")]
    SiblingMismatch { covered: usize, expected: usize },
}

/// A child of an entity node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChildNode {
    Text { len: usize },
    Decoration,
}

/// One node of the sibling sequence that reconstructs the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SiblingNode {
    Text { len: usize },
    Entity { children: Vec<ChildNode> },
}

impl SiblingNode {
    /// Source text carried by this node
    ///
    /// Entity nodes count their first text child only.
    pub fn text_length(&self) -> usize {
        match self {
            SiblingNode::Text { len } => *len,
            SiblingNode::Entity { children } => children
                .iter()
                .find_map(|c| match c {
                    ChildNode::Text { len } => Some(*len),
                    ChildNode::Decoration => None,
                })
                .unwrap_or(0),
        }
    }

    fn text_child(&self) -> Option<usize> {
        match self {
            SiblingNode::Text { .. } => None,
            SiblingNode::Entity { children } => children
                .iter()
                .position(|c| matches!(c, ChildNode::Text { .. })),
        }
    }
}

/// A selection endpoint: node index, optional child of an entity node, offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePoint {
    pub node: usize,
    #[serde(default)]
    pub child: Option<usize>,
    pub offset: usize,
}

impl NodePoint {
    pub fn new(node: usize, offset: usize) -> Self {
        Self {
            node,
            child: None,
            offset,
        }
    }

    pub fn in_child(node: usize, child: usize, offset: usize) -> Self {
        Self {
            node,
            child: Some(child),
            offset,
        }
    }
}

/// Native selection as reported by the view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionInput {
    pub anchor: NodePoint,
    pub focus: NodePoint,
    pub siblings: Vec<SiblingNode>,
}

impl SelectionInput {
    pub fn new(anchor: NodePoint, focus: NodePoint, siblings: Vec<SiblingNode>) -> Self {
        Self {
            anchor,
            focus,
            siblings,
        }
    }

    /// Absolute offset of an endpoint
    fn absolute(&self, point: NodePoint) -> Result<usize, SelectionError> {
        let sibling = self
            .siblings
            .get(point.node)
            .ok_or(SelectionError::UnknownNode {
                node: point.node,
                count: self.siblings.len(),
            })?;

        if let Some(child) = point.child {
            if sibling.text_child() != Some(child) {
                return Err(SelectionError::InsideDecoration(point.node));
            }
        }

        let len = sibling.text_length();
        if point.offset > len {
            return Err(SelectionError::OffsetOutOfRange {
                node: point.node,
                offset: point.offset,
                len,
            });
        }

        // Bounded by the covered length, which map_selection checks first
        let preceding: usize = self.siblings[..point.node]
            .iter()
            .map(SiblingNode::text_length)
            .sum();
        Ok(preceding + point.offset)
    }
}

/// Map a selection to a trimmed range of the source text
///
/// Backward selections are normalised. Collapsed selections, whitespace-only
/// selections, and endpoints that do not resolve to source text are errors.
pub fn map_selection(
    input: &SelectionInput,
    source: &SourceText,
) -> Result<TextRange, SelectionError> {
    let covered = input
        .siblings
        .iter()
        .try_fold(0usize, |acc, s| acc.checked_add(s.text_length()));
    if covered != Some(source.len()) {
        return Err(SelectionError::SiblingMismatch {
            covered: covered.unwrap_or(usize::MAX),
            expected: source.len(),
        });
    }

    let anchor = input.absolute(input.anchor)?;
    let focus = input.absolute(input.focus)?;
    if anchor == focus {
        return Err(SelectionError::Collapsed(anchor));
    }

    let raw = TextRange::new(anchor.min(focus), anchor.max(focus));
    source
        .trim_range(raw)
        .ok_or(SelectionError::WhitespaceOnly(raw))
}
