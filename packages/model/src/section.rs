//! # Sections
//!
//! A section is the atomic unit of a portfolio document. Its wire shape is
//!
//! ```text
//! { id, type, order, isEditable, data: <payload for type>, styling }
//! ```
//!
//! Decoding goes through [`RawSection`] so `data` is parsed as the payload
//! named by `type`; a payload that does not fit its type is rejected instead
//! of being carried around untyped.

use crate::{ModelError, SectionData, SectionId, SectionStyling};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Closed set of section kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
    Experience,
    Education,
    Template,
}

impl SectionType {
    pub const ALL: [SectionType; 8] = [
        SectionType::Hero,
        SectionType::About,
        SectionType::Skills,
        SectionType::Projects,
        SectionType::Contact,
        SectionType::Experience,
        SectionType::Education,
        SectionType::Template,
    ];

    /// Types offered in the add-section palette. Whole templates are only
    /// created through template conversion.
    pub const PALETTE: [SectionType; 7] = [
        SectionType::Hero,
        SectionType::About,
        SectionType::Skills,
        SectionType::Projects,
        SectionType::Experience,
        SectionType::Education,
        SectionType::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::About => "about",
            SectionType::Skills => "skills",
            SectionType::Projects => "projects",
            SectionType::Contact => "contact",
            SectionType::Experience => "experience",
            SectionType::Education => "education",
            SectionType::Template => "template",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionType::Hero => "Hero",
            SectionType::About => "About",
            SectionType::Skills => "Skills",
            SectionType::Projects => "Projects",
            SectionType::Contact => "Contact",
            SectionType::Experience => "Experience",
            SectionType::Education => "Education",
            SectionType::Template => "Template",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SectionType::Hero => "Name, title and a short introduction",
            SectionType::About => "Your story and background",
            SectionType::Skills => "Technical and soft skills, languages and tools",
            SectionType::Projects => "Showcase of your work",
            SectionType::Contact => "How visitors can reach you",
            SectionType::Experience => "Work history",
            SectionType::Education => "Degrees and courses",
            SectionType::Template => "A complete pre-designed portfolio",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown section type '{}'", s))
    }
}

/// One content block of a portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSection", into = "RawSection")]
pub struct Section {
    pub id: SectionId,
    /// Zero-based position; kept equal to the index in the owning list
    pub order: usize,
    pub is_editable: bool,
    pub data: SectionData,
    pub styling: SectionStyling,
}

impl Section {
    pub fn new(id: SectionId, data: SectionData) -> Self {
        Self {
            id,
            order: 0,
            is_editable: true,
            data,
            styling: SectionStyling::default(),
        }
    }

    pub fn with_styling(mut self, styling: SectionStyling) -> Self {
        self.styling = styling;
        self
    }

    pub fn kind(&self) -> SectionType {
        self.data.kind()
    }
}

/// Reassign every `order` to the section's position in the list
pub fn renumber(sections: &mut [Section]) {
    for (index, section) in sections.iter_mut().enumerate() {
        section.order = index;
    }
}

/// Wire form of a [`Section`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSection {
    pub id: SectionId,
    #[serde(rename = "type")]
    pub kind: SectionType,
    #[serde(default)]
    pub order: usize,
    #[serde(default = "default_editable")]
    pub is_editable: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub styling: SectionStyling,
}

fn default_editable() -> bool {
    true
}

impl TryFrom<RawSection> for Section {
    type Error = ModelError;

    fn try_from(raw: RawSection) -> Result<Self, Self::Error> {
        let data = match raw.data {
            Value::Null => SectionData::default_for(raw.kind),
            value => SectionData::from_json(raw.kind, value).map_err(|e| {
                ModelError::DataMismatch {
                    kind: raw.kind,
                    reason: e.to_string(),
                }
            })?,
        };

        Ok(Section {
            id: raw.id,
            order: raw.order,
            is_editable: raw.is_editable,
            data,
            styling: raw.styling,
        })
    }
}

impl From<Section> for RawSection {
    fn from(section: Section) -> Self {
        let kind = section.kind();
        RawSection {
            id: section.id,
            kind,
            order: section.order,
            is_editable: section.is_editable,
            // Payload structs only hold strings, numbers, bools and lists of
            // them, which always serialize
            data: section.data.to_json().unwrap_or(Value::Null),
            styling: section.styling,
        }
    }
}
