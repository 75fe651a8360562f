//! # Editor Commands
//!
//! The closed set of operations that may change an [`EditorDocument`].
//! There is no other mutation path.
//!
//! ## Command classes
//!
//! ### Content edits
//! `ADD_SECTION`, `REMOVE_SECTION`, `MOVE_SECTION`, `DUPLICATE_SECTION`,
//! `UPDATE_SECTION_DATA`, `UPDATE_SECTION_STYLING`, `UPDATE_TITLE`
//! - Snapshot the pre-edit state onto the undo stack
//! - Discard the redo stack
//! - Mark the document dirty
//!
//! ### UI flags
//! `SELECT_SECTION`, `SET_DRAGGING`, `SET_PREVIEW_MODE`, `SET_PREVIEW_DEVICE`
//! - Never touch history or the dirty flag
//!
//! ### Document replacement
//! `LOAD_SECTIONS`, `LOAD_PORTFOLIO`, `RESET_EDITOR`
//! - Clear both history stacks, the previous document is unreachable
//!
//! ### History
//! `UNDO`, `REDO`
//!
//! Commands serialize as `{"type": "ADD_SECTION", "sectionType": "hero", ...}`
//! so UI code and scripts can send them as plain JSON.
//!
//! [`EditorDocument`]: crate::EditorDocument

use crate::PreviewDevice;
use folio_model::{Section, SectionId, SectionType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Command {
    /// Insert a new section with default content. A missing or out-of-range
    /// index appends.
    AddSection {
        section_type: SectionType,
        #[serde(default)]
        index: Option<usize>,
    },

    RemoveSection {
        section_id: SectionId,
    },

    /// Splice the section out and reinsert it at `new_index`
    MoveSection {
        section_id: SectionId,
        new_index: usize,
    },

    /// Deep copy placed right after the original, with a fresh id
    DuplicateSection {
        section_id: SectionId,
    },

    /// Shallow-merge into the section's payload
    UpdateSectionData {
        section_id: SectionId,
        data: Map<String, Value>,
    },

    /// Shallow-merge into the section's styling
    UpdateSectionStyling {
        section_id: SectionId,
        styling: Map<String, Value>,
    },

    SelectSection {
        #[serde(default)]
        section_id: Option<SectionId>,
    },

    SetDragging {
        is_dragging: bool,
    },

    SetPreviewMode {
        enabled: bool,
    },

    SetPreviewDevice {
        device: PreviewDevice,
    },

    LoadSections {
        sections: Vec<Section>,
    },

    LoadPortfolio {
        sections: Vec<Section>,
        title: String,
    },

    UpdateTitle {
        title: String,
    },

    Undo,

    Redo,

    ResetEditor,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddSection { .. } => "ADD_SECTION",
            Command::RemoveSection { .. } => "REMOVE_SECTION",
            Command::MoveSection { .. } => "MOVE_SECTION",
            Command::DuplicateSection { .. } => "DUPLICATE_SECTION",
            Command::UpdateSectionData { .. } => "UPDATE_SECTION_DATA",
            Command::UpdateSectionStyling { .. } => "UPDATE_SECTION_STYLING",
            Command::SelectSection { .. } => "SELECT_SECTION",
            Command::SetDragging { .. } => "SET_DRAGGING",
            Command::SetPreviewMode { .. } => "SET_PREVIEW_MODE",
            Command::SetPreviewDevice { .. } => "SET_PREVIEW_DEVICE",
            Command::LoadSections { .. } => "LOAD_SECTIONS",
            Command::LoadPortfolio { .. } => "LOAD_PORTFOLIO",
            Command::UpdateTitle { .. } => "UPDATE_TITLE",
            Command::Undo => "UNDO",
            Command::Redo => "REDO",
            Command::ResetEditor => "RESET_EDITOR",
        }
    }

    /// Human readable label used for undo/redo menu entries
    pub fn description(&self) -> String {
        match self {
            Command::AddSection { section_type, .. } => {
                format!("Add {} section", section_type.label())
            }
            Command::RemoveSection { .. } => "Remove section".to_string(),
            Command::MoveSection { .. } => "Move section".to_string(),
            Command::DuplicateSection { .. } => "Duplicate section".to_string(),
            Command::UpdateSectionData { .. } => "Edit section content".to_string(),
            Command::UpdateSectionStyling { .. } => "Edit section styling".to_string(),
            Command::UpdateTitle { .. } => "Rename portfolio".to_string(),
            other => other.name().to_string(),
        }
    }

    pub fn add(section_type: SectionType) -> Self {
        Command::AddSection {
            section_type,
            index: None,
        }
    }

    pub fn add_at(section_type: SectionType, index: usize) -> Self {
        Command::AddSection {
            section_type,
            index: Some(index),
        }
    }

    pub fn remove(section_id: impl Into<SectionId>) -> Self {
        Command::RemoveSection {
            section_id: section_id.into(),
        }
    }

    pub fn move_to(section_id: impl Into<SectionId>, new_index: usize) -> Self {
        Command::MoveSection {
            section_id: section_id.into(),
            new_index,
        }
    }

    pub fn duplicate(section_id: impl Into<SectionId>) -> Self {
        Command::DuplicateSection {
            section_id: section_id.into(),
        }
    }

    /// Build an `UPDATE_SECTION_DATA` from a JSON object; non-objects become an empty patch
    pub fn update_data(section_id: impl Into<SectionId>, data: Value) -> Self {
        Command::UpdateSectionData {
            section_id: section_id.into(),
            data: into_object(data),
        }
    }

    pub fn update_styling(section_id: impl Into<SectionId>, styling: Value) -> Self {
        Command::UpdateSectionStyling {
            section_id: section_id.into(),
            styling: into_object(styling),
        }
    }

    pub fn select(section_id: Option<SectionId>) -> Self {
        Command::SelectSection { section_id }
    }
}

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
