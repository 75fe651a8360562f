use crate::UndoStack;
use serde::{Deserialize, Serialize};

/// Editor tuning, usually embedded in the host's config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Maximum undo levels kept per document (0 = unlimited)
    pub history_limit: usize,

    /// Key the section id seed is derived from
    pub id_seed: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: UndoStack::DEFAULT_MAX_LEVELS,
            id_seed: "folio".to_string(),
        }
    }
}
