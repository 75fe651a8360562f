use crate::SectionType;
use thiserror::Error;

/// Errors raised while decoding or patching portfolio data
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Patch does not fit {kind} data: {reason}")]
    InvalidPatch { kind: SectionType, reason: String },

    #[error("Section data does not match type '{kind}': {reason}")]
    DataMismatch { kind: SectionType, reason: String },

    #[error("Unsupported schema version {found} (newest supported is {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
