//! # Drag and Drop
//!
//! Turns a drag gesture into exactly one store command:
//!
//! ```text
//! palette item   --drop at i-->  ADD_SECTION(type, i)
//! section item   --drop at i-->  MOVE_SECTION(id, i)   (skipped when i == current index)
//! ```
//!
//! Drop targets sit between rendered sections, one above the first and one
//! below the last, so a document with N sections has N + 1 targets. A
//! target's index is its position in the rendered order at drop time; the
//! store's splice-and-renumber produces the final order, so no offset for
//! the dragged section's own slot is applied here.
//!
//! `SET_DRAGGING(true)` is dispatched when a gesture starts and
//! `SET_DRAGGING(false)` when it ends, whether or not anything was dropped.

use crate::{Command, EditorDocument};
use folio_model::{SectionId, SectionType};
use serde::{Deserialize, Serialize};

/// Tag a drop target can accept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DragKind {
    Palette,
    EditorSection,
}

/// What is being dragged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DragItem {
    /// A section type from the palette, not yet in the document
    Palette { section_type: SectionType },

    /// A placed section and its index when the drag started
    EditorSection { section_id: SectionId, index: usize },
}

impl DragItem {
    pub fn kind(&self) -> DragKind {
        match self {
            DragItem::Palette { .. } => DragKind::Palette,
            DragItem::EditorSection { .. } => DragKind::EditorSection,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTarget {
    pub index: usize,
    pub accepts: Vec<DragKind>,
}

impl DropTarget {
    /// Target accepting both item kinds
    pub fn new(index: usize) -> Self {
        Self {
            index,
            accepts: vec![DragKind::Palette, DragKind::EditorSection],
        }
    }

    pub fn accepting(index: usize, accepts: Vec<DragKind>) -> Self {
        Self { index, accepts }
    }

    pub fn accepts(&self, kind: DragKind) -> bool {
        self.accepts.contains(&kind)
    }
}

/// Interleaved targets for the current document
pub fn drop_targets(doc: &EditorDocument) -> Vec<DropTarget> {
    (0..=doc.sections().len()).map(DropTarget::new).collect()
}

/// Command a drop should issue, or `None` when nothing should happen
pub fn command_for_drop(item: &DragItem, target: &DropTarget) -> Option<Command> {
    if !target.accepts(item.kind()) {
        return None;
    }

    match item {
        DragItem::Palette { section_type } => Some(Command::add_at(*section_type, target.index)),
        DragItem::EditorSection { section_id, index } => {
            if *index == target.index {
                // Dropped in place
                None
            } else {
                Some(Command::move_to(section_id.clone(), target.index))
            }
        }
    }
}

/// Tracks the gesture in progress and the highlighted target
#[derive(Debug, Default)]
pub struct DragCoordinator {
    active: Option<DragItem>,
    hovered: Option<usize>,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, item: DragItem, doc: &mut EditorDocument) {
        tracing::debug!(kind = ?item.kind(), "drag start");
        self.active = Some(item);
        self.hovered = None;
        doc.dispatch(Command::SetDragging { is_dragging: true });
    }

    /// Pointer is over `target`. Returns whether the target lights up.
    pub fn hover(&mut self, target: &DropTarget) -> bool {
        let accepted = self
            .active
            .as_ref()
            .is_some_and(|item| target.accepts(item.kind()));

        self.hovered = accepted.then_some(target.index);
        accepted
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// Drop the active item on `target`, dispatching at most one command.
    /// The gesture stays active until [`end`](Self::end).
    pub fn drop(&mut self, target: &DropTarget, doc: &mut EditorDocument) -> Option<Command> {
        let item = self.active.as_ref()?;
        let command = command_for_drop(item, target)?;

        tracing::debug!(command = command.name(), target = target.index, "drop");
        doc.dispatch(command.clone());
        self.hovered = None;
        Some(command)
    }

    /// End of gesture (drop or cancel). Always clears the dragging flag.
    pub fn end(&mut self, doc: &mut EditorDocument) {
        self.active = None;
        self.hovered = None;
        doc.dispatch(Command::SetDragging { is_dragging: false });
    }

    pub fn active(&self) -> Option<&DragItem> {
        self.active.as_ref()
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }
}
