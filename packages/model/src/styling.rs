//! Presentation envelope shared by every section type

use crate::data::merge_shallow;
use crate::{ModelError, ModelResult, SectionType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    pub fn uniform(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub top: u32,
    pub bottom: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Default,
    Grid,
    Masonry,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    None,
    #[default]
    Fade,
    Slide,
    Zoom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    /// Milliseconds
    pub duration: u32,
    /// Milliseconds
    pub delay: u32,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            kind: AnimationKind::Fade,
            duration: 600,
            delay: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionStyling {
    pub background_color: String,
    pub text_color: String,
    pub padding: Padding,
    pub margin: Margin,
    pub alignment: Alignment,
    pub layout: Layout,
    pub animation: Animation,
}

impl Default for SectionStyling {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            text_color: "#1f2937".to_string(),
            padding: Padding::symmetric(64, 24),
            margin: Margin::default(),
            alignment: Alignment::Left,
            layout: Layout::Default,
            animation: Animation::default(),
        }
    }
}

impl SectionStyling {
    /// Shallow-merge a partial styling object. `owner` only feeds the error.
    pub fn merge(&mut self, owner: SectionType, patch: &Map<String, Value>) -> ModelResult<()> {
        let invalid = |e: serde_json::Error| ModelError::InvalidPatch {
            kind: owner,
            reason: format!("styling: {}", e),
        };

        let mut value = serde_json::to_value(&*self).map_err(invalid)?;
        merge_shallow(&mut value, patch);
        *self = serde_json::from_value(value).map_err(invalid)?;
        Ok(())
    }
}
