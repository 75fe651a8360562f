//! JSON-in, JSON-out wrapper around one editor document.
//!
//! Errors are plain strings here so the logic runs in native tests; the
//! bindings turn them into JS exceptions.

use folio_editor::{
    drop_targets, palette, Command, EditorConfig, EditorDocument, PreviewDevice, TemplateCatalog,
};
use folio_model::{PortfolioContent, Section, SectionId};
use serde::Serialize;

/// Everything the UI renders from
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateView<'a> {
    pub sections: &'a [Section],
    pub selected_section_id: Option<&'a SectionId>,
    pub is_dragging: bool,
    pub preview_mode: bool,
    pub preview_device: PreviewDevice,
    pub portfolio_title: &'a str,
    pub has_unsaved_changes: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub undo_description: Option<&'a str>,
    pub redo_description: Option<&'a str>,
    pub version: u64,
    pub palette_visible: bool,
}

impl<'a> StateView<'a> {
    pub fn of(doc: &'a EditorDocument) -> Self {
        Self {
            sections: doc.sections(),
            selected_section_id: doc.selected_section_id(),
            is_dragging: doc.is_dragging(),
            preview_mode: doc.preview_mode(),
            preview_device: doc.preview_device(),
            portfolio_title: doc.title(),
            has_unsaved_changes: doc.has_unsaved_changes(),
            can_undo: doc.can_undo(),
            can_redo: doc.can_redo(),
            undo_description: doc.history().undo_description(),
            redo_description: doc.history().redo_description(),
            version: doc.version(),
            palette_visible: !doc.has_template_section(),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

pub struct EditorHandle {
    document: EditorDocument,
}

impl EditorHandle {
    pub fn new() -> Self {
        Self {
            document: EditorDocument::with_config(&EditorConfig::default()),
        }
    }

    pub fn from_template(template_id: &str, title: Option<String>) -> Result<Self, String> {
        let document = EditorDocument::from_template(&EditorConfig::default(), template_id, title)
            .map_err(|e| e.to_string())?;
        Ok(Self { document })
    }

    /// Replace the document with stored content. A payload that fails to
    /// decode leaves an empty document.
    pub fn load_portfolio(&mut self, json: &str) -> Result<String, String> {
        match PortfolioContent::from_json(json) {
            Ok(content) => {
                self.document.dispatch(Command::LoadPortfolio {
                    sections: content.sections,
                    title: content.title,
                });
                self.state()
            }
            Err(e) => {
                self.document.dispatch(Command::ResetEditor);
                Err(format!("Load error: {}", e))
            }
        }
    }

    /// Apply one JSON command and return the new state
    pub fn dispatch(&mut self, command_json: &str) -> Result<String, String> {
        let command: Command =
            serde_json::from_str(command_json).map_err(|e| format!("Invalid command: {}", e))?;
        self.document.dispatch(command);
        self.state()
    }

    pub fn state(&self) -> Result<String, String> {
        to_json(&StateView::of(&self.document))
    }

    pub fn content(&self) -> Result<String, String> {
        self.document
            .content()
            .to_json()
            .map_err(|e| format!("Serialization error: {}", e))
    }

    pub fn palette(&self) -> Result<String, String> {
        to_json(&palette(&self.document))
    }

    pub fn drop_targets(&self) -> Result<String, String> {
        to_json(&drop_targets(&self.document))
    }

    pub fn mark_saved(&mut self, version: u64) -> bool {
        self.document.mark_saved(version)
    }

    pub fn document(&self) -> &EditorDocument {
        &self.document
    }
}

impl Default for EditorHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub fn list_templates() -> Result<String, String> {
    to_json(&TemplateCatalog::builtin().summaries())
}
