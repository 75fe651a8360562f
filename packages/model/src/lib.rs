//! # Folio Model
//!
//! Pure data for portfolio documents: sections, their typed content and the
//! shared styling envelope, plus the persisted payload shape.
//!
//! Nothing here mutates a document. Editing lives in `folio-editor`.

mod content;
mod data;
mod error;
mod id;
mod section;
mod styling;

pub use content::{PortfolioContent, CURRENT_SCHEMA_VERSION, DEFAULT_TITLE};
pub use data::{
    merge_shallow, AboutData, ContactData, EducationData, EducationItem, ExperienceData,
    ExperienceItem, HeroData, Project, ProjectsData, SectionData, SkillCategories, SkillsData,
    SocialLink, TemplateData, TemplateSectionData,
};
pub use error::{ModelError, ModelResult};
pub use id::{seed_for, IdGenerator, SectionId};
pub use section::{renumber, RawSection, Section, SectionType};
pub use styling::{Alignment, Animation, AnimationKind, Layout, Margin, Padding, SectionStyling};
