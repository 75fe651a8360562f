//! # Folio Editor
//!
//! Document store for the portfolio page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI: palette drag, canvas drop, panels, keys │
//! └─────────────────────────────────────────────┘
//!                     ↓ Command
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorDocument::dispatch            │
//! │  - validate / no-op on stale ids            │
//! │  - snapshot onto undo stack, clear redo     │
//! │  - apply, renumber order, mark dirty        │
//! └─────────────────────────────────────────────┘
//!                     ↓ content()
//! ┌─────────────────────────────────────────────┐
//! │ storage: load / save / publish              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **One mutation path**: state changes only through [`Command`]s
//! 2. **Total commands**: nothing in the store returns an error or panics
//! 3. **Owned snapshots**: history never shares data with the live document
//! 4. **Scoped history**: each document owns its own undo stack
//!
//! ## Usage
//!
//! ```rust
//! use folio_editor::{Command, EditorDocument};
//! use folio_model::SectionType;
//! use serde_json::json;
//!
//! let mut doc = EditorDocument::new();
//! doc.dispatch(Command::add(SectionType::Hero));
//!
//! let hero = doc.sections()[0].id.clone();
//! doc.dispatch(Command::update_data(hero, json!({ "fullName": "Ada" })));
//!
//! doc.dispatch(Command::Undo);
//! assert!(doc.can_redo());
//! ```

mod config;
mod document;
mod drag;
mod errors;
mod mutations;
mod palette;
mod templates;
mod undo_stack;

pub use config::EditorConfig;
pub use document::{reduce, DispatchResult, EditorDocument, PreviewDevice};
pub use drag::{command_for_drop, drop_targets, DragCoordinator, DragItem, DragKind, DropTarget};
pub use errors::EditorError;
pub use mutations::Command;
pub use palette::{palette, PaletteItem};
pub use templates::{
    convert_template, TemplateCatalog, TemplateColors, TemplateDefinition, TemplateMode,
    TemplateSummary,
};
pub use undo_stack::{HistoryEntry, HistorySnapshot, UndoStack};

// Re-export model types for convenience
pub use folio_model::{
    PortfolioContent, Section, SectionData, SectionId, SectionType, DEFAULT_TITLE,
};
