// End-to-end annotator behavior: insertion, rejection, removal, and
// selection mapping over a fragmented view

use annotate_wasm::renderers::{render, View};
use annotate_wasm::text::NodePoint;
use annotate_wasm::{
    AnnotateArgs, AnnotatorSession, DisplayConfig, Entity, EntitySet, LatestValue, SelectionInput,
    SourceText, TextRange,
};
use rstest::rstest;

const NOTE: &str = "The patient has diabetes";

/// Endpoint addressing `offset` the way a browser would report it
///
/// `at_end` picks the node that ends at a boundary instead of the one
/// starting there, as happens when a drag finishes at the end of a node.
fn point_at(view: &View, offset: usize, at_end: bool) -> NodePoint {
    let index = view
        .nodes()
        .iter()
        .position(|n| {
            let r = n.node.range();
            if at_end {
                r.start < offset && offset <= r.end
            } else {
                r.start <= offset && offset < r.end
            }
        })
        .expect("offset inside the text");
    let node = &view.nodes()[index].node;
    let local = offset - node.range().start;
    if node.is_text() {
        NodePoint::new(index, local)
    } else {
        NodePoint::in_child(index, 0, local)
    }
}

fn selection(view: &View, start: usize, end: usize) -> SelectionInput {
    SelectionInput::new(
        point_at(view, start, false),
        point_at(view, end, true),
        view.siblings(),
    )
}

fn note_session() -> AnnotatorSession {
    AnnotatorSession::load(AnnotateArgs::new("C1", NOTE)).expect("valid args")
}

#[test]
fn test_annotate_note_example() {
    let mut session = note_session();
    let mut sink: LatestValue<Vec<Entity>> = LatestValue::new();

    let input = selection(session.view(), 16, 24);
    assert!(session.select(&input, &mut sink).is_some());

    let committed = serde_json::to_value(sink.get().unwrap()).unwrap();
    assert_eq!(
        committed,
        serde_json::json!([{"start": 16, "end": 24, "label": "C1", "selected": false}])
    );

    // "patient has" does not overlap and lands first in the value
    let input = selection(session.view(), 4, 15);
    assert!(session.select(&input, &mut sink).is_some());
    let starts: Vec<usize> = sink.get().unwrap().iter().map(|e| e.start).collect();
    assert_eq!(starts, vec![4, 16]);

    // "has diabetes" overlaps both
    let input = selection(session.view(), 12, 24);
    assert!(session.select(&input, &mut sink).is_none());
    assert_eq!(session.entities().len(), 2);
    assert_eq!(sink.commits(), 2);
}

#[test]
fn test_whitespace_trimmed_from_selection() {
    let text = "0123456789  hello  world";
    let mut session = AnnotatorSession::load(AnnotateArgs::new("C1", text)).unwrap();
    let mut sink: LatestValue<Vec<Entity>> = LatestValue::new();

    let input = selection(session.view(), 10, 19);
    session.select(&input, &mut sink);

    let entity = &sink.get().unwrap()[0];
    assert_eq!((entity.start, entity.end), (12, 17));
    assert_eq!(session.source().slice(entity.range()), "hello");
}

#[rstest]
#[case::unfragmented(&[])]
#[case::one_entity(&[(4, 11)])]
#[case::adjacent_entities(&[(0, 3), (3, 4), (4, 11)])]
#[case::alternating(&[(0, 3), (4, 11), (12, 15), (16, 24)])]
fn test_selection_round_trip(#[case] spans: &[(usize, usize)]) {
    let source = SourceText::new(NOTE);
    let mut set = EntitySet::new(source.len());
    for &(start, end) in spans {
        assert!(set.try_insert(Entity::new(start, end, "L")));
    }
    let view = View::new(&source, &set, DisplayConfig::default());

    for start in 0..source.len() {
        for end in start + 1..=source.len() {
            let input = selection(&view, start, end);
            let mapped = annotate_wasm::text::map_selection(&input, &source);
            let expected = source.trim_range(TextRange::new(start, end));
            assert_eq!(mapped.ok(), expected, "selection {start}..{end} over {spans:?}");
        }
    }
}

#[test]
fn test_backward_drag_maps_like_forward() {
    let session = AnnotatorSession::load(
        AnnotateArgs::new("C1", NOTE).with_entities(vec![Entity::new(4, 11, "P")]),
    )
    .unwrap();
    let view = session.view();

    let forward = selection(view, 0, 15);
    let backward = SelectionInput::new(forward.focus, forward.anchor, forward.siblings.clone());
    let source = session.source();
    assert_eq!(
        annotate_wasm::text::map_selection(&backward, source),
        annotate_wasm::text::map_selection(&forward, source)
    );
}

#[test]
fn test_removal_restores_original_segment() {
    let text = "abcd efgh ijkl";
    let mut session = AnnotatorSession::load(
        AnnotateArgs::new("C1", text).with_entities(vec![Entity::new(5, 9, "C1")]),
    )
    .unwrap();
    let mut sink: LatestValue<Vec<Entity>> = LatestValue::new();

    session.remove(TextRange::new(5, 9), &mut sink).unwrap();

    let nodes = session.view().nodes();
    assert_eq!(nodes.len(), 1);
    assert!(nodes[0].node.is_text());
    assert_eq!(nodes[0].node.text(), text);
    assert_eq!(nodes[0].node.range(), TextRange::new(0, 14));
}

/// Small deterministic generator so sequences are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(42)]
#[case(2024)]
fn test_incremental_view_matches_full_render(#[case] seed: u64) {
    let text = "Patient reports chest pain and shortness of breath since Monday";
    let mut session = AnnotatorSession::load(AnnotateArgs::new("C1", text)).unwrap();
    let mut sink: LatestValue<Vec<Entity>> = LatestValue::new();
    let mut rng = Lcg(seed);
    let len = session.source().len();

    for _ in 0..200 {
        let existing = session.entities().len();
        if existing > 0 && rng.next(3) == 0 {
            let victim = session.entities().as_slice()[rng.next(existing)].range();
            assert!(session.remove(victim, &mut sink).is_some());
        } else {
            let start = rng.next(len);
            let end = start + 1 + rng.next(len - start);
            session.annotate(TextRange::new(start, end), &mut sink);
        }

        let entities = session.entities();
        assert!(entities
            .as_slice()
            .windows(2)
            .all(|w| w[0].end <= w[1].start && w[0].start < w[1].start));
        assert_eq!(
            session.view().structure(),
            render(session.source(), entities, DisplayConfig::default())
        );
        let joined: String = session.view().nodes().iter().map(|n| n.node.text()).collect();
        assert_eq!(joined, text);
    }
}

#[test]
fn test_remove_keeps_untouched_node_ids() {
    let mut session = AnnotatorSession::load(AnnotateArgs::new("C1", NOTE).with_entities(vec![
        Entity::new(0, 3, "A"),
        Entity::new(4, 11, "B"),
        Entity::new(16, 24, "C"),
    ]))
    .unwrap();
    let mut sink: LatestValue<Vec<Entity>> = LatestValue::new();
    let kept = [
        session.view().handle(TextRange::new(0, 3)),
        session.view().handle(TextRange::new(16, 24)),
    ];

    session.remove(TextRange::new(4, 11), &mut sink);

    assert_eq!(session.view().handle(TextRange::new(0, 3)), kept[0]);
    assert_eq!(session.view().handle(TextRange::new(16, 24)), kept[1]);
}
