//! Annotator session
//!
//! Owns the source text, the entity set and the view for one component
//! instance. Each handler runs to completion, commits the full entity list
//! on success, and tells the caller how the DOM must change.

use super::host::CommitSink;
use crate::models::{AnnotateArgs, DisplayConfig, LoadError};
use crate::renderers::{DisplayList, View, ViewUpdate};
use crate::text::{map_selection, Entity, EntitySet, LabelSummary, SelectionInput, SourceText, TextRange};

#[derive(Debug, Clone)]
pub struct AnnotatorSession {
    source: SourceText,
    entities: EntitySet,
    view: View,
    display: DisplayConfig,
    label: String,
    label_details: Option<String>,
}

impl AnnotatorSession {
    /// Start a session from a host render event
    ///
    /// Entities outside the text are a contract violation. Entities that
    /// overlap an earlier one are dropped.
    pub fn load(args: AnnotateArgs) -> Result<Self, LoadError> {
        let display = args.display();
        let source = SourceText::new(args.text);
        let mut entities = EntitySet::new(source.len());

        for entity in args.entities {
            if entity.start >= entity.end {
                return Err(LoadError::EmptyEntity {
                    start: entity.start,
                    end: entity.end,
                });
            }
            if entity.end > source.len() {
                return Err(LoadError::EntityOutOfBounds {
                    start: entity.start,
                    end: entity.end,
                    len: source.len(),
                });
            }
            let (start, end) = (entity.start, entity.end);
            if !entities.try_insert(entity) {
                log::warn!("dropping entity {}..{}: overlaps an earlier entity", start, end);
            }
        }

        let view = View::new(&source, &entities, display);
        log::info!(
            "annotator loaded: {} code units, {} entities",
            source.len(),
            entities.len()
        );

        Ok(Self {
            source,
            entities,
            view,
            display,
            label: args.label,
            label_details: args.label_details,
        })
    }

    /// Annotate the selected text with the session label
    ///
    /// Malformed and overlapping selections are ignored.
    pub fn select(
        &mut self,
        input: &SelectionInput,
        sink: &mut impl CommitSink<[Entity]>,
    ) -> Option<ViewUpdate> {
        match map_selection(input, &self.source) {
            Ok(range) => self.annotate(range, sink),
            Err(e) => {
                log::debug!("ignoring selection: {}", e);
                None
            }
        }
    }

    /// Annotate an already mapped range with the session label
    pub fn annotate(
        &mut self,
        range: TextRange,
        sink: &mut impl CommitSink<[Entity]>,
    ) -> Option<ViewUpdate> {
        let entity = Entity::new(range.start, range.end, self.label.clone())
            .with_details(self.label_details.clone());
        if !self.entities.try_insert(entity) {
            return None;
        }

        let list = self.view.rebuild(&self.source, &self.entities, self.display);
        sink.commit(self.entities.as_slice());
        Some(ViewUpdate::Rebuild(list))
    }

    /// Delete the entity with exactly these boundaries
    pub fn remove(
        &mut self,
        range: TextRange,
        sink: &mut impl CommitSink<[Entity]>,
    ) -> Option<ViewUpdate> {
        if !self.entities.remove(range) {
            log::debug!("no entity at {}..{}", range.start, range.end);
            return None;
        }

        let update = match self.view.remove_entity(&self.source, range) {
            Some(ops) => ViewUpdate::Patch(ops),
            None => {
                log::warn!("view lost entity {}..{}; rebuilding", range.start, range.end);
                ViewUpdate::Rebuild(self.view.rebuild(&self.source, &self.entities, self.display))
            }
        };
        sink.commit(self.entities.as_slice());
        Some(update)
    }

    /// Toggle `selected` on every entity sharing a label
    pub fn toggle_label(
        &mut self,
        label: &str,
        sink: &mut impl CommitSink<[Entity]>,
    ) -> Option<ViewUpdate> {
        let changed = self.entities.toggle_selected_by_label(label);
        if changed.is_empty() {
            return None;
        }

        let ops = self.view.refresh_selected(&changed, &self.entities);
        sink.commit(self.entities.as_slice());
        Some(ViewUpdate::Patch(ops))
    }

    /// Current value as committed to the host
    pub fn value(&self) -> Vec<Entity> {
        self.entities.serialize()
    }

    pub fn display_list(&self) -> DisplayList {
        self.view.display_list()
    }

    pub fn labels(&self) -> Vec<LabelSummary> {
        self.entities.labels()
    }

    pub fn entity_at(&self, offset: usize) -> Option<&Entity> {
        self.entities.entity_at(offset)
    }

    pub fn source(&self) -> &SourceText {
        &self.source
    }

    pub fn entities(&self) -> &EntitySet {
        &self.entities
    }

    pub fn view(&self) -> &View {
        &self.view
    }
}
