//! # Section Payloads
//!
//! Typed content for every section kind. The payload variant *is* the
//! section's type: there is no separate tag that could disagree with it.
//!
//! Partial edits arrive as JSON objects (from property panels, scripts or
//! the wasm bridge) and are shallow-merged: each top-level key replaces the
//! corresponding field wholesale, nested arrays and objects included.

use crate::{ModelError, ModelResult, SectionType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(platform: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroData {
    pub full_name: String,
    pub title: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub contact_email: String,
    pub location: String,
}

impl Default for HeroData {
    fn default() -> Self {
        Self {
            full_name: "Your Name".to_string(),
            title: "Your Professional Title".to_string(),
            bio: "A short introduction about who you are and what you do.".to_string(),
            profile_image: None,
            background_image: None,
            social_links: vec![
                SocialLink::new("github", "https://github.com/"),
                SocialLink::new("linkedin", "https://linkedin.com/in/"),
            ],
            contact_email: "you@example.com".to_string(),
            location: "City, Country".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutData {
    pub heading: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub highlights: Vec<String>,
}

impl Default for AboutData {
    fn default() -> Self {
        Self {
            heading: "About Me".to_string(),
            content: "Tell visitors about your background, your interests and what drives your work."
                .to_string(),
            image: None,
            highlights: vec![],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillCategories {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub languages: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsData {
    pub heading: String,
    pub skill_categories: SkillCategories,
}

impl Default for SkillsData {
    fn default() -> Self {
        Self {
            heading: "Skills".to_string(),
            skill_categories: SkillCategories {
                technical: vec!["JavaScript".to_string(), "Rust".to_string()],
                soft: vec!["Communication".to_string()],
                languages: vec!["English".to_string()],
                tools: vec!["Git".to_string()],
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub category: String,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectsData {
    pub heading: String,
    pub projects: Vec<Project>,
    pub categories: Vec<String>,
}

impl Default for ProjectsData {
    fn default() -> Self {
        Self {
            heading: "Projects".to_string(),
            projects: vec![Project {
                id: "project-1".to_string(),
                title: "Project Title".to_string(),
                description: "What the project does and your role in it.".to_string(),
                technologies: vec!["Rust".to_string()],
                category: "web".to_string(),
                featured: true,
                ..Project::default()
            }],
            categories: vec!["web".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactData {
    pub heading: String,
    pub description: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub show_form: bool,
}

impl Default for ContactData {
    fn default() -> Self {
        Self {
            heading: "Get In Touch".to_string(),
            description: "Have a project in mind? Send me a message.".to_string(),
            email: "you@example.com".to_string(),
            phone: None,
            location: None,
            social_links: vec![],
            show_form: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceItem {
    pub company: String,
    pub role: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceData {
    pub heading: String,
    pub items: Vec<ExperienceItem>,
}

impl Default for ExperienceData {
    fn default() -> Self {
        Self {
            heading: "Experience".to_string(),
            items: vec![ExperienceItem {
                company: "Company".to_string(),
                role: "Role".to_string(),
                start_date: "2020".to_string(),
                end_date: None,
                description: "What you worked on.".to_string(),
                highlights: vec![],
            }],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationItem {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationData {
    pub heading: String,
    pub items: Vec<EducationItem>,
}

impl Default for EducationData {
    fn default() -> Self {
        Self {
            heading: "Education".to_string(),
            items: vec![EducationItem {
                institution: "University".to_string(),
                degree: "Degree".to_string(),
                field: "Field of Study".to_string(),
                start_date: "2016".to_string(),
                end_date: Some("2020".to_string()),
                description: String::new(),
            }],
        }
    }
}

/// Whole-template content: every area of a portfolio in one value.
///
/// Areas are optional so legacy templates can leave some of them out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<AboutData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillsData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<ProjectsData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactData>,
}

impl TemplateData {
    /// Every area filled with the editor defaults
    pub fn complete() -> Self {
        Self {
            hero: Some(HeroData::default()),
            about: Some(AboutData::default()),
            skills: Some(SkillsData::default()),
            projects: Some(ProjectsData::default()),
            contact: Some(ContactData::default()),
        }
    }
}

/// Payload of a `template` section: renderer selector plus the nested content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateSectionData {
    pub template_id: String,
    pub template_data: TemplateData,
}

/// Section content, one variant per section type
#[derive(Debug, Clone, PartialEq)]
pub enum SectionData {
    Hero(HeroData),
    About(AboutData),
    Skills(SkillsData),
    Projects(ProjectsData),
    Contact(ContactData),
    Experience(ExperienceData),
    Education(EducationData),
    Template(TemplateSectionData),
}

impl SectionData {
    /// Content of a freshly added section
    pub fn default_for(kind: SectionType) -> Self {
        match kind {
            SectionType::Hero => SectionData::Hero(HeroData::default()),
            SectionType::About => SectionData::About(AboutData::default()),
            SectionType::Skills => SectionData::Skills(SkillsData::default()),
            SectionType::Projects => SectionData::Projects(ProjectsData::default()),
            SectionType::Contact => SectionData::Contact(ContactData::default()),
            SectionType::Experience => SectionData::Experience(ExperienceData::default()),
            SectionType::Education => SectionData::Education(EducationData::default()),
            SectionType::Template => SectionData::Template(TemplateSectionData {
                template_id: String::new(),
                template_data: TemplateData::complete(),
            }),
        }
    }

    pub fn kind(&self) -> SectionType {
        match self {
            SectionData::Hero(_) => SectionType::Hero,
            SectionData::About(_) => SectionType::About,
            SectionData::Skills(_) => SectionType::Skills,
            SectionData::Projects(_) => SectionType::Projects,
            SectionData::Contact(_) => SectionType::Contact,
            SectionData::Experience(_) => SectionType::Experience,
            SectionData::Education(_) => SectionType::Education,
            SectionData::Template(_) => SectionType::Template,
        }
    }

    /// Decode a JSON payload as the variant for `kind`
    pub fn from_json(kind: SectionType, value: Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            SectionType::Hero => SectionData::Hero(serde_json::from_value(value)?),
            SectionType::About => SectionData::About(serde_json::from_value(value)?),
            SectionType::Skills => SectionData::Skills(serde_json::from_value(value)?),
            SectionType::Projects => SectionData::Projects(serde_json::from_value(value)?),
            SectionType::Contact => SectionData::Contact(serde_json::from_value(value)?),
            SectionType::Experience => SectionData::Experience(serde_json::from_value(value)?),
            SectionType::Education => SectionData::Education(serde_json::from_value(value)?),
            SectionType::Template => SectionData::Template(serde_json::from_value(value)?),
        })
    }

    /// The payload's JSON form (without any type tag)
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        match self {
            SectionData::Hero(d) => serde_json::to_value(d),
            SectionData::About(d) => serde_json::to_value(d),
            SectionData::Skills(d) => serde_json::to_value(d),
            SectionData::Projects(d) => serde_json::to_value(d),
            SectionData::Contact(d) => serde_json::to_value(d),
            SectionData::Experience(d) => serde_json::to_value(d),
            SectionData::Education(d) => serde_json::to_value(d),
            SectionData::Template(d) => serde_json::to_value(d),
        }
    }

    /// Shallow-merge `patch` into this payload.
    ///
    /// On failure `self` is left exactly as it was.
    pub fn merge(&mut self, patch: &Map<String, Value>) -> ModelResult<()> {
        let kind = self.kind();
        let invalid = |e: serde_json::Error| ModelError::InvalidPatch {
            kind,
            reason: e.to_string(),
        };

        let mut value = self.to_json().map_err(invalid)?;
        merge_shallow(&mut value, patch);
        *self = SectionData::from_json(kind, value).map_err(invalid)?;
        Ok(())
    }
}

/// Overwrite the top-level keys of `target` with those of `patch`
pub fn merge_shallow(target: &mut Value, patch: &Map<String, Value>) {
    if let Value::Object(map) = target {
        for (key, value) in patch {
            map.insert(key.clone(), value.clone());
        }
    }
}
