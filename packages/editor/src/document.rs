//! # Editor Document
//!
//! Single source of truth for one open portfolio: the ordered sections,
//! selection and preview state, and the undo/redo history.
//!
//! The only way in is [`EditorDocument::dispatch`]. Every command is total:
//! an unknown section id or a patch that does not fit the section leaves the
//! document untouched instead of failing.
//!
//! ## Invariants (hold after every dispatch)
//!
//! - `order` of the N sections is exactly `0..N`, matching list position
//! - section ids are unique and never re-issued, even after undo
//! - the selection is `None` or names a section in the list
//!
//! ## Lifecycle
//!
//! ```text
//! new / from_template / LOAD_PORTFOLIO → dispatch(edits…) → content() → save
//! ```

use crate::templates::TemplateCatalog;
use crate::undo_stack::{HistorySnapshot, UndoStack};
use crate::{Command, EditorConfig, EditorError};
use folio_model::{
    renumber, IdGenerator, PortfolioContent, Section, SectionData, SectionId, SectionType,
    DEFAULT_TITLE,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Device frame used by the preview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewDevice {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl PreviewDevice {
    /// Viewport width in CSS pixels
    pub fn width(&self) -> u32 {
        match self {
            PreviewDevice::Desktop => 1280,
            PreviewDevice::Tablet => 768,
            PreviewDevice::Mobile => 375,
        }
    }
}

/// Outcome of a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Content version after the command
    pub version: u64,

    /// Whether any state changed
    pub changed: bool,
}

/// Editable portfolio document
#[derive(Debug, Clone)]
pub struct EditorDocument {
    sections: Vec<Section>,
    selected_section_id: Option<SectionId>,
    is_dragging: bool,
    preview_mode: bool,
    preview_device: PreviewDevice,
    portfolio_title: String,
    has_unsaved_changes: bool,

    /// Increments on every content change (edits, undo/redo, loads)
    version: u64,

    history: UndoStack,
    ids: IdGenerator,
}

impl EditorDocument {
    /// Empty document with default configuration
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            sections: Vec::new(),
            selected_section_id: None,
            is_dragging: false,
            preview_mode: false,
            preview_device: PreviewDevice::Desktop,
            portfolio_title: DEFAULT_TITLE.to_string(),
            has_unsaved_changes: false,
            version: 0,
            history: UndoStack::with_max_levels(config.history_limit),
            ids: IdGenerator::new(&config.id_seed),
        }
    }

    /// Hydrate from persisted content (clean, no history)
    pub fn from_content(config: &EditorConfig, content: PortfolioContent) -> Self {
        let mut doc = Self::with_config(config);
        doc.dispatch(Command::LoadPortfolio {
            sections: content.sections,
            title: content.title,
        });
        doc
    }

    /// Start a document from one of the built-in templates
    pub fn from_template(
        config: &EditorConfig,
        template_id: &str,
        title: Option<String>,
    ) -> Result<Self, EditorError> {
        let mut doc = Self::with_config(config);
        doc.load_template(template_id, title)?;
        Ok(doc)
    }

    /// Replace the content with a built-in template, as `LOAD_PORTFOLIO`
    /// does. An unknown id leaves the document untouched.
    pub fn load_template(
        &mut self,
        template_id: &str,
        title: Option<String>,
    ) -> Result<DispatchResult, EditorError> {
        let catalog = TemplateCatalog::builtin();
        let template = catalog
            .get(template_id)
            .ok_or_else(|| EditorError::TemplateNotFound(template_id.to_string()))?;

        let sections = template.convert(&mut self.ids);
        let title = title.unwrap_or_else(|| template.name.clone());
        Ok(self.dispatch(Command::LoadPortfolio { sections, title }))
    }

    /// Apply one command
    pub fn dispatch(&mut self, command: Command) -> DispatchResult {
        tracing::debug!(command = command.name(), version = self.version, "dispatch");

        let description = command.description();
        let changed = match command {
            Command::AddSection {
                section_type,
                index,
            } => self.add_section(section_type, index, description),
            Command::RemoveSection { section_id } => self.remove_section(&section_id, description),
            Command::MoveSection {
                section_id,
                new_index,
            } => self.move_section(&section_id, new_index, description),
            Command::DuplicateSection { section_id } => {
                self.duplicate_section(&section_id, description)
            }
            Command::UpdateSectionData { section_id, data } => {
                self.update_section_data(&section_id, &data, description)
            }
            Command::UpdateSectionStyling {
                section_id,
                styling,
            } => self.update_section_styling(&section_id, &styling, description),
            Command::SelectSection { section_id } => self.select_section(section_id),
            Command::SetDragging { is_dragging } => {
                replace_flag(&mut self.is_dragging, is_dragging)
            }
            Command::SetPreviewMode { enabled } => replace_flag(&mut self.preview_mode, enabled),
            Command::SetPreviewDevice { device } => {
                replace_flag(&mut self.preview_device, device)
            }
            Command::LoadSections { sections } => {
                let title = self.portfolio_title.clone();
                self.load(sections, title)
            }
            Command::LoadPortfolio { sections, title } => self.load(sections, title),
            Command::UpdateTitle { title } => self.update_title(title, description),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::ResetEditor => self.reset(),
        };

        DispatchResult {
            version: self.version,
            changed,
        }
    }

    // ── Content edits ───────────────────────────────────────────────────

    /// Push the pre-edit snapshot and mark the document changed.
    /// Called after validation, right before the edit is applied.
    fn commit(&mut self, description: String) {
        let snapshot = self.snapshot();
        self.history.record(snapshot, Some(description));
        self.has_unsaved_changes = true;
        self.version += 1;
    }

    fn add_section(
        &mut self,
        section_type: SectionType,
        index: Option<usize>,
        description: String,
    ) -> bool {
        self.commit(description);

        let section = Section::new(self.ids.new_id(), SectionData::default_for(section_type));
        let id = section.id.clone();
        let at = index.unwrap_or(self.sections.len()).min(self.sections.len());

        self.sections.insert(at, section);
        renumber(&mut self.sections);
        self.selected_section_id = Some(id);
        true
    }

    fn remove_section(&mut self, id: &SectionId, description: String) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        self.commit(description);

        self.sections.remove(pos);
        renumber(&mut self.sections);
        if self.selected_section_id.as_ref() == Some(id) {
            self.selected_section_id = None;
        }
        true
    }

    fn move_section(&mut self, id: &SectionId, new_index: usize, description: String) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        self.commit(description);

        let section = self.sections.remove(pos);
        let at = new_index.min(self.sections.len());
        self.sections.insert(at, section);
        renumber(&mut self.sections);
        true
    }

    fn duplicate_section(&mut self, id: &SectionId, description: String) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        self.commit(description);

        let mut copy = self.sections[pos].clone();
        copy.id = self.ids.new_id();
        let copy_id = copy.id.clone();

        self.sections.insert(pos + 1, copy);
        renumber(&mut self.sections);
        self.selected_section_id = Some(copy_id);
        true
    }

    fn update_section_data(
        &mut self,
        id: &SectionId,
        patch: &Map<String, Value>,
        description: String,
    ) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };

        // Merge into a copy first so a rejected patch records nothing
        let mut data = self.sections[pos].data.clone();
        if let Err(e) = data.merge(patch) {
            tracing::warn!(section = %id, error = %e, "rejected section data patch");
            return false;
        }

        self.commit(description);
        self.sections[pos].data = data;
        true
    }

    fn update_section_styling(
        &mut self,
        id: &SectionId,
        patch: &Map<String, Value>,
        description: String,
    ) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };

        let kind = self.sections[pos].kind();
        let mut styling = self.sections[pos].styling.clone();
        if let Err(e) = styling.merge(kind, patch) {
            tracing::warn!(section = %id, error = %e, "rejected section styling patch");
            return false;
        }

        self.commit(description);
        self.sections[pos].styling = styling;
        true
    }

    fn update_title(&mut self, title: String, description: String) -> bool {
        self.commit(description);
        self.portfolio_title = title;
        true
    }

    // ── UI state ────────────────────────────────────────────────────────

    fn select_section(&mut self, id: Option<SectionId>) -> bool {
        if let Some(id) = &id {
            if self.position(id).is_none() {
                return false;
            }
        }
        replace_flag(&mut self.selected_section_id, id)
    }

    // ── Replacement and history ─────────────────────────────────────────

    fn load(&mut self, mut sections: Vec<Section>, title: String) -> bool {
        sections.sort_by_key(|s| s.order);
        renumber(&mut sections);
        for section in &sections {
            self.ids.observe(&section.id);
        }

        self.sections = sections;
        self.portfolio_title = title;
        self.selected_section_id = None;
        self.history.clear();
        self.has_unsaved_changes = false;
        self.version += 1;
        true
    }

    fn reset(&mut self) -> bool {
        self.sections.clear();
        self.selected_section_id = None;
        self.is_dragging = false;
        self.preview_mode = false;
        self.preview_device = PreviewDevice::Desktop;
        self.portfolio_title = DEFAULT_TITLE.to_string();
        self.history.clear();
        self.has_unsaved_changes = false;
        self.version += 1;
        true
    }

    fn undo(&mut self) -> bool {
        let current = self.snapshot();
        let Some(previous) = self.history.undo(current) else {
            return false;
        };
        self.restore(previous);
        true
    }

    fn redo(&mut self) -> bool {
        let current = self.snapshot();
        let Some(next) = self.history.redo(current) else {
            return false;
        };
        self.restore(next);
        true
    }

    /// Deep copy of the state that takes part in undo/redo
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            sections: self.sections.clone(),
            selected_section_id: self.selected_section_id.clone(),
            is_dragging: self.is_dragging,
            preview_mode: self.preview_mode,
            preview_device: self.preview_device,
            portfolio_title: self.portfolio_title.clone(),
        }
    }

    /// Returning to an earlier state is itself a change relative to the last save.
    /// The dragging flag belongs to the live gesture and is never restored.
    fn restore(&mut self, snapshot: HistorySnapshot) {
        self.sections = snapshot.sections;
        self.selected_section_id = snapshot.selected_section_id;
        self.preview_mode = snapshot.preview_mode;
        self.preview_device = snapshot.preview_device;
        self.portfolio_title = snapshot.portfolio_title;
        self.has_unsaved_changes = true;
        self.version += 1;
    }

    // ── Batching ────────────────────────────────────────────────────────

    /// Group the following edits into a single undo step
    pub fn begin_batch(&mut self, description: impl Into<String>) {
        self.history.begin_batch();
        self.history.set_batch_description(description);
    }

    pub fn end_batch(&mut self) {
        self.history.end_batch();
    }

    // ── Persistence hooks ───────────────────────────────────────────────

    /// Clear the dirty flag if nothing changed since `version` was saved.
    /// Returns whether the document is now clean.
    pub fn mark_saved(&mut self, version: u64) -> bool {
        if version == self.version {
            self.has_unsaved_changes = false;
        }
        !self.has_unsaved_changes
    }

    /// Persistable copy of the current sections and title
    pub fn content(&self) -> PortfolioContent {
        PortfolioContent::new(self.portfolio_title.clone(), self.sections.clone())
    }

    // ── Queries ─────────────────────────────────────────────────────────

    fn position(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|s| &s.id == id)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    pub fn selected_section_id(&self) -> Option<&SectionId> {
        self.selected_section_id.as_ref()
    }

    pub fn selected_section(&self) -> Option<&Section> {
        self.selected_section_id
            .as_ref()
            .and_then(|id| self.section(id))
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn preview_mode(&self) -> bool {
        self.preview_mode
    }

    pub fn preview_device(&self) -> PreviewDevice {
        self.preview_device
    }

    pub fn title(&self) -> &str {
        &self.portfolio_title
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.has_unsaved_changes
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Whether a whole-template section is present
    pub fn has_template_section(&self) -> bool {
        self.sections
            .iter()
            .any(|s| s.kind() == SectionType::Template)
    }
}

impl Default for EditorDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure form of [`EditorDocument::dispatch`]
pub fn reduce(mut doc: EditorDocument, command: Command) -> EditorDocument {
    doc.dispatch(command);
    doc
}

fn replace_flag<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
