//! # Persisted Portfolio Content
//!
//! The payload stored in a portfolio's content column:
//!
//! ```text
//! { version, title, sections: [Section] }
//! ```
//!
//! `version` identifies the schema. Payloads written before it existed carry
//! no version and decode as version 1.

use crate::{renumber, ModelError, ModelResult, Section};
use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Title of a portfolio nobody has named yet
pub const DEFAULT_TITLE: &str = "My Portfolio";

fn default_version() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl PortfolioContent {
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Self {
        let mut content = Self {
            version: CURRENT_SCHEMA_VERSION,
            title: title.into(),
            sections,
        };
        content.normalize();
        content
    }

    /// Decode and validate a stored payload
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let content: PortfolioContent = serde_json::from_str(json)?;
        content.upgrade()
    }

    /// Bring an already-decoded payload to the current schema
    pub fn upgrade(mut self) -> ModelResult<Self> {
        if self.version > CURRENT_SCHEMA_VERSION {
            return Err(ModelError::UnsupportedVersion {
                found: self.version,
                supported: CURRENT_SCHEMA_VERSION,
            });
        }

        self.version = CURRENT_SCHEMA_VERSION;
        self.normalize();
        Ok(self)
    }

    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sort by stored order and close any gaps or duplicates
    pub fn normalize(&mut self) {
        // Stable: sections sharing an order keep their list position
        self.sections.sort_by_key(|s| s.order);
        renumber(&mut self.sections);
    }
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, vec![])
    }
}
