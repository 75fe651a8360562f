use folio_editor::EditorError;
use folio_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Portfolio not found: {0}")]
    NotFound(String),

    #[error("Slug '{0}' is already taken")]
    SlugTaken(String),

    #[error("Invalid slug '{slug}': {reason}")]
    InvalidSlug { slug: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

impl StorageError {
    /// Rejections the user can fix by changing their input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StorageError::SlugTaken(_) | StorageError::InvalidSlug { .. }
        )
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
