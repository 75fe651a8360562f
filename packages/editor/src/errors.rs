//! Error types for the editor
//!
//! Commands never fail: a stale id or an ill-fitting patch is a no-op.
//! Errors only come from setting a document up.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),
}
