//! Incremental view of the annotated text
//!
//! Keeps the rendered node sequence together with stable node ids so that
//! JavaScript can patch the DOM in place. Insertions rebuild the sequence;
//! removals and selection toggles produce small patches that leave untouched
//! nodes alone.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::display_list::{render, RenderNode};
use crate::models::DisplayConfig;
use crate::text::{EntitySet, SiblingNode, SourceText, TextRange};

/// DOM identity of a rendered node
pub type NodeId = u32;

/// A rendered node with its DOM identity
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ViewNode {
    pub id: NodeId,
    #[serde(flatten)]
    pub node: RenderNode,
}

/// Full node sequence for a rebuild
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct DisplayList {
    pub nodes: Vec<ViewNode>,
}

/// A single in-place DOM mutation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DomOp {
    /// Replace the text content of a text node
    SetText { node: NodeId, text: String },

    /// Detach a node
    Remove { node: NodeId },

    /// Swap a node for a new plain text node
    ReplaceWithText {
        node: NodeId,
        new_node: NodeId,
        text: String,
    },

    /// Update the selected decoration of an entity node
    SetSelected { node: NodeId, selected: bool },
}

/// How the DOM must change after an interaction
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ViewUpdate {
    Rebuild(DisplayList),
    Patch(Vec<DomOp>),
}

/// Rendered nodes plus the entity-to-node handle map
#[derive(Debug, Clone, Default)]
pub struct View {
    nodes: Vec<ViewNode>,
    handles: BTreeMap<TextRange, NodeId>,
    next_id: NodeId,
}

impl View {
    /// Build a fresh view
    pub fn new(source: &SourceText, entities: &EntitySet, display: DisplayConfig) -> Self {
        let mut view = Self::default();
        view.rebuild(source, entities, display);
        view
    }

    /// Replace every node; returns the new display list
    pub fn rebuild(
        &mut self,
        source: &SourceText,
        entities: &EntitySet,
        display: DisplayConfig,
    ) -> DisplayList {
        self.handles.clear();
        let nodes: Vec<ViewNode> = render(source, entities, display)
            .into_iter()
            .map(|node| {
                let id = self.allocate();
                if !node.is_text() {
                    self.handles.insert(node.range(), id);
                }
                ViewNode { id, node }
            })
            .collect();
        self.nodes = nodes;
        log::debug!("rebuilt view: {} nodes", self.nodes.len());
        self.display_list()
    }

    /// Splice out an entity node and merge its text into the neighbours
    ///
    /// Merged text is re-sliced from the source so the result matches a full
    /// render even when a boundary splits a surrogate pair. Returns `None`
    /// when no entity node has these boundaries.
    pub fn remove_entity(&mut self, source: &SourceText, range: TextRange) -> Option<Vec<DomOp>> {
        let id = self.handles.remove(&range)?;
        let index = self.index_of(id)?;

        let prev_is_text = index > 0 && self.nodes[index - 1].node.is_text();
        let next_is_text = self.nodes.get(index + 1).is_some_and(|n| n.node.is_text());

        let ops = match (prev_is_text, next_is_text) {
            (true, true) => {
                let next = self.nodes.remove(index + 1);
                self.nodes.remove(index);
                let target = &mut self.nodes[index - 1];
                let merged = TextRange::new(target.node.range().start, next.node.range().end);
                vec![
                    merge_text(target, source, merged),
                    DomOp::Remove { node: id },
                    DomOp::Remove { node: next.id },
                ]
            }
            (true, false) => {
                self.nodes.remove(index);
                let target = &mut self.nodes[index - 1];
                let merged = TextRange::new(target.node.range().start, range.end);
                vec![merge_text(target, source, merged), DomOp::Remove { node: id }]
            }
            (false, true) => {
                self.nodes.remove(index);
                let target = &mut self.nodes[index];
                let merged = TextRange::new(range.start, target.node.range().end);
                vec![merge_text(target, source, merged), DomOp::Remove { node: id }]
            }
            (false, false) => {
                let new_id = self.allocate();
                let text = source.slice(range);
                self.nodes[index] = ViewNode {
                    id: new_id,
                    node: RenderNode::Text {
                        start: range.start,
                        end: range.end,
                        text: text.clone(),
                    },
                };
                vec![DomOp::ReplaceWithText {
                    node: id,
                    new_node: new_id,
                    text,
                }]
            }
        };

        log::debug!("removed entity node {} ({} ops)", id, ops.len());
        Some(ops)
    }

    /// Sync the selected decoration of the given entity nodes with the set
    pub fn refresh_selected(&mut self, ranges: &[TextRange], entities: &EntitySet) -> Vec<DomOp> {
        let mut ops = Vec::with_capacity(ranges.len());
        for range in ranges {
            let (Some(&id), Some(entity)) = (self.handles.get(range), entities.get(*range)) else {
                continue;
            };
            let Some(index) = self.index_of(id) else {
                continue;
            };
            if let RenderNode::Entity { selected, .. } = &mut self.nodes[index].node {
                *selected = entity.selected;
                ops.push(DomOp::SetSelected {
                    node: id,
                    selected: entity.selected,
                });
            }
        }
        ops
    }

    pub fn display_list(&self) -> DisplayList {
        DisplayList {
            nodes: self.nodes.clone(),
        }
    }

    pub fn nodes(&self) -> &[ViewNode] {
        &self.nodes
    }

    /// The node sequence without DOM identity
    pub fn structure(&self) -> Vec<RenderNode> {
        self.nodes.iter().map(|n| n.node.clone()).collect()
    }

    /// Node id of the entity with these boundaries
    pub fn handle(&self, range: TextRange) -> Option<NodeId> {
        self.handles.get(&range).copied()
    }

    /// Sibling sequence for selection mapping
    pub fn siblings(&self) -> Vec<SiblingNode> {
        self.nodes.iter().map(|n| n.node.sibling()).collect()
    }

    fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    fn allocate(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Widen a text node to `range` and refill it from the source
fn merge_text(target: &mut ViewNode, source: &SourceText, range: TextRange) -> DomOp {
    let merged = source.slice(range);
    target.node = RenderNode::Text {
        start: range.start,
        end: range.end,
        text: merged.clone(),
    };
    DomOp::SetText {
        node: target.id,
        text: merged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Entity;

    const TEXT: &str = "0123 5678 abcd";

    fn setup(spans: &[(usize, usize)]) -> (SourceText, EntitySet, View) {
        let source = SourceText::new(TEXT);
        let mut set = EntitySet::new(source.len());
        for &(start, end) in spans {
            assert!(set.try_insert(Entity::new(start, end, "L")));
        }
        let view = View::new(&source, &set, DisplayConfig::default());
        (source, set, view)
    }

    fn assert_matches_full_render(view: &View, source: &SourceText, set: &EntitySet) {
        assert_eq!(view.structure(), render(source, set, DisplayConfig::default()));
    }

    #[test]
    fn test_merge_with_both_neighbours() {
        let (source, mut set, mut view) = setup(&[(5, 9)]);
        let ids: Vec<NodeId> = view.nodes().iter().map(|n| n.id).collect();

        set.remove(TextRange::new(5, 9));
        let ops = view.remove_entity(&source, TextRange::new(5, 9)).unwrap();

        assert_eq!(
            ops,
            vec![
                DomOp::SetText { node: ids[0], text: TEXT.to_string() },
                DomOp::Remove { node: ids[1] },
                DomOp::Remove { node: ids[2] },
            ]
        );
        assert_eq!(view.nodes().len(), 1);
        assert_eq!(view.nodes()[0].id, ids[0]);
        assert_matches_full_render(&view, &source, &set);
    }

    #[test]
    fn test_merge_rejoins_split_surrogate_pair() {
        // [2, 4) starts on the low half of U+1D11E
        let source = SourceText::new("x\u{1D11E}ab");
        let mut set = EntitySet::new(source.len());
        assert!(set.try_insert(Entity::new(2, 4, "L")));
        let mut view = View::new(&source, &set, DisplayConfig::default());
        let first = view.nodes()[0].id;

        set.remove(TextRange::new(2, 4));
        let ops = view.remove_entity(&source, TextRange::new(2, 4)).unwrap();

        assert_eq!(ops[0], DomOp::SetText { node: first, text: "x\u{1D11E}ab".to_string() });
        assert_eq!(view.nodes().len(), 1);
        assert_matches_full_render(&view, &source, &set);
    }

    #[test]
    fn test_merge_into_previous_only() {
        let (source, mut set, mut view) = setup(&[(5, 9), (10, 14)]);
        set.remove(TextRange::new(10, 14));
        let ops = view.remove_entity(&source, TextRange::new(10, 14)).unwrap();

        assert_eq!(ops.len(), 2);
        assert!(matches!(&ops[0], DomOp::SetText { text, .. } if text == " abcd"));
        assert_matches_full_render(&view, &source, &set);
    }

    #[test]
    fn test_merge_into_next_only() {
        let (source, mut set, mut view) = setup(&[(0, 4), (5, 9)]);
        let untouched = view.handle(TextRange::new(5, 9));

        set.remove(TextRange::new(0, 4));
        let ops = view.remove_entity(&source, TextRange::new(0, 4)).unwrap();

        assert!(matches!(&ops[0], DomOp::SetText { text, .. } if text == "0123 "));
        assert_eq!(view.handle(TextRange::new(5, 9)), untouched);
        assert_matches_full_render(&view, &source, &set);
    }

    #[test]
    fn test_replace_when_no_text_neighbours() {
        let (source, mut set, mut view) = setup(&[(0, 4), (4, 9), (9, 14)]);
        let old = view.handle(TextRange::new(4, 9)).unwrap();

        set.remove(TextRange::new(4, 9));
        let ops = view.remove_entity(&source, TextRange::new(4, 9)).unwrap();

        match &ops[..] {
            [DomOp::ReplaceWithText { node, new_node, text }] => {
                assert_eq!(*node, old);
                assert_ne!(*new_node, old);
                assert_eq!(text, " 5678");
            }
            other => panic!("unexpected ops {other:?}"),
        }
        assert_matches_full_render(&view, &source, &set);
    }

    #[test]
    fn test_unknown_entity_is_a_miss() {
        let (source, _, mut view) = setup(&[(5, 9)]);
        assert_eq!(view.remove_entity(&source, TextRange::new(5, 8)), None);
        assert_eq!(view.nodes().len(), 3);
    }

    #[test]
    fn test_rebuild_issues_fresh_ids() {
        let (source, set, mut view) = setup(&[(5, 9)]);
        let before: Vec<NodeId> = view.nodes().iter().map(|n| n.id).collect();
        let list = view.rebuild(&source, &set, DisplayConfig::default());
        assert!(list.nodes.iter().all(|n| !before.contains(&n.id)));
    }

    #[test]
    fn test_refresh_selected() {
        let (_, mut set, mut view) = setup(&[(0, 4), (5, 9)]);
        let changed = set.toggle_selected_by_label("L");
        let ops = view.refresh_selected(&changed, &set);

        assert_eq!(ops.len(), 2);
        assert!(ops.iter().all(|op| matches!(op, DomOp::SetSelected { selected: true, .. })));
    }

    #[test]
    fn test_view_update_wire_format() {
        let update = ViewUpdate::Patch(vec![DomOp::Remove { node: 3 }]);
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"type": "patch", "data": [{"op": "remove", "node": 3}]})
        );

        let (_, _, view) = setup(&[(5, 9)]);
        let list = serde_json::to_value(view.display_list()).unwrap();
        assert_eq!(list["nodes"][1]["kind"], "entity");
        assert_eq!(list["nodes"][1]["text"], "5678");
        assert_eq!(list["nodes"][1]["id"], 1);
    }
}
