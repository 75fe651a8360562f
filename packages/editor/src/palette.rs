//! Section palette shown next to the canvas.
//!
//! A document holding a whole-template section is edited through that
//! template's own form, so the palette is empty while one is present.
//! `ADD_SECTION` itself stays available; only the affordance is hidden.

use crate::EditorDocument;
use folio_model::SectionType;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteItem {
    pub section_type: SectionType,
    pub label: &'static str,
    pub description: &'static str,
}

pub fn palette(doc: &EditorDocument) -> Vec<PaletteItem> {
    if doc.has_template_section() {
        return vec![];
    }

    SectionType::PALETTE
        .into_iter()
        .map(|section_type| PaletteItem {
            section_type,
            label: section_type.label(),
            description: section_type.description(),
        })
        .collect()
}
