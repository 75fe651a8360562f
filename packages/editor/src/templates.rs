//! # Template Conversion
//!
//! Turns a template definition into the sections of a new document. Runs
//! once, when a document is created; the result is handed to
//! `LOAD_PORTFOLIO`.
//!
//! Two shapes:
//! - **Whole**: a single `template` section wrapping all content; the
//!   template's own renderer and property form take over
//! - **Decomposed**: one ordinary section per populated area

use folio_model::{
    renumber, AboutData, ContactData, HeroData, IdGenerator, Layout, Project, ProjectsData, Section,
    SectionData, SectionStyling, SkillCategories, SkillsData, SocialLink, TemplateData,
    TemplateSectionData,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateMode {
    Whole,
    Decomposed,
}

/// Colors a decomposed template applies to each of its sections
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateColors {
    pub background: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub mode: TemplateMode,
    pub data: TemplateData,
    pub colors: Option<TemplateColors>,
}

/// Listing entry for template pickers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub mode: TemplateMode,
}

impl TemplateDefinition {
    /// Produce ready-to-load sections with fresh ids and sequential order
    pub fn convert(&self, ids: &mut IdGenerator) -> Vec<Section> {
        let mut sections = match self.mode {
            TemplateMode::Whole => vec![Section::new(
                ids.new_id(),
                SectionData::Template(TemplateSectionData {
                    template_id: self.id.clone(),
                    template_data: self.data.clone(),
                }),
            )],
            TemplateMode::Decomposed => self.decompose(ids),
        };

        renumber(&mut sections);
        sections
    }

    fn decompose(&self, ids: &mut IdGenerator) -> Vec<Section> {
        let data = &self.data;
        let areas = [
            data.hero.clone().map(SectionData::Hero),
            data.about.clone().map(SectionData::About),
            data.skills.clone().map(SectionData::Skills),
            data.projects.clone().map(SectionData::Projects),
            data.contact.clone().map(SectionData::Contact),
        ];

        areas
            .into_iter()
            .flatten()
            .map(|area| {
                let styling = self.styling_for(&area);
                Section::new(ids.new_id(), area).with_styling(styling)
            })
            .collect()
    }

    fn styling_for(&self, area: &SectionData) -> SectionStyling {
        let mut styling = SectionStyling::default();

        if let Some(colors) = &self.colors {
            styling.background_color = colors.background.clone();
            styling.text_color = colors.text.clone();
        }
        if let SectionData::Projects(_) = area {
            styling.layout = Layout::Grid;
        }
        styling
    }

    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            mode: self.mode,
        }
    }
}

/// The set of templates a document can start from
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<TemplateDefinition>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<TemplateDefinition>) -> Self {
        Self { templates }
    }

    /// Three whole visual templates and two legacy decomposed ones
    pub fn builtin() -> Self {
        Self::new(vec![
            developer_template(),
            creative_template(),
            minimal_template(),
            classic_template(),
            starter_template(),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&TemplateDefinition> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn summaries(&self) -> Vec<TemplateSummary> {
        self.templates.iter().map(|t| t.summary()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateDefinition> {
        self.templates.iter()
    }
}

/// Convert a built-in template; `None` if the id is unknown
pub fn convert_template(template_id: &str, ids: &mut IdGenerator) -> Option<Vec<Section>> {
    TemplateCatalog::builtin()
        .get(template_id)
        .map(|template| template.convert(ids))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(id: &str, title: &str, description: &str, category: &str, tech: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        technologies: strings(tech),
        category: category.to_string(),
        ..Project::default()
    }
}

fn developer_template() -> TemplateDefinition {
    TemplateDefinition {
        id: "developer-dark".to_string(),
        name: "Developer".to_string(),
        description: "Dark, code-forward layout for software engineers".to_string(),
        category: "developer".to_string(),
        mode: TemplateMode::Whole,
        data: TemplateData {
            hero: Some(HeroData {
                full_name: "Alex Morgan".to_string(),
                title: "Full-Stack Engineer".to_string(),
                bio: "I build fast, reliable web services and the tools around them.".to_string(),
                social_links: vec![SocialLink::new("github", "https://github.com/alexmorgan")],
                contact_email: "alex@example.com".to_string(),
                location: "Berlin, Germany".to_string(),
                ..HeroData::default()
            }),
            about: Some(AboutData {
                heading: "About".to_string(),
                content: "Eight years shipping backend systems and developer tooling.".to_string(),
                highlights: strings(&["Open source maintainer", "Conference speaker"]),
                ..AboutData::default()
            }),
            skills: Some(SkillsData {
                heading: "Stack".to_string(),
                skill_categories: SkillCategories {
                    technical: strings(&["Rust", "TypeScript", "PostgreSQL"]),
                    soft: strings(&["Mentoring"]),
                    languages: strings(&["English", "German"]),
                    tools: strings(&["Docker", "Kubernetes"]),
                },
            }),
            projects: Some(ProjectsData {
                heading: "Selected Work".to_string(),
                projects: vec![
                    project("p-1", "Edge Cache", "Distributed HTTP cache", "infra", &["Rust"]),
                    project("p-2", "Dashboards", "Realtime metrics UI", "web", &["TypeScript"]),
                ],
                categories: strings(&["infra", "web"]),
            }),
            contact: Some(ContactData {
                email: "alex@example.com".to_string(),
                ..ContactData::default()
            }),
        },
        colors: None,
    }
}

fn creative_template() -> TemplateDefinition {
    TemplateDefinition {
        id: "creative-studio".to_string(),
        name: "Creative".to_string(),
        description: "Image-led, bold layout for designers and artists".to_string(),
        category: "creative".to_string(),
        mode: TemplateMode::Whole,
        data: TemplateData {
            hero: Some(HeroData {
                full_name: "Sam Rivera".to_string(),
                title: "Visual Designer".to_string(),
                bio: "Brand identities, editorial design and illustration.".to_string(),
                ..HeroData::default()
            }),
            projects: Some(ProjectsData {
                heading: "Portfolio".to_string(),
                projects: vec![
                    project("p-1", "Rebrand", "Identity for a coffee roaster", "branding", &[]),
                    project("p-2", "Zine", "Risograph art zine", "print", &[]),
                ],
                categories: strings(&["branding", "print"]),
            }),
            ..TemplateData::complete()
        },
        colors: None,
    }
}

fn minimal_template() -> TemplateDefinition {
    TemplateDefinition {
        id: "minimal-professional".to_string(),
        name: "Minimal".to_string(),
        description: "Quiet typography, lots of whitespace".to_string(),
        category: "professional".to_string(),
        mode: TemplateMode::Whole,
        data: TemplateData::complete(),
        colors: None,
    }
}

fn classic_template() -> TemplateDefinition {
    TemplateDefinition {
        id: "classic".to_string(),
        name: "Classic".to_string(),
        description: "Section-by-section layout, every block editable on its own".to_string(),
        category: "professional".to_string(),
        mode: TemplateMode::Decomposed,
        data: TemplateData::complete(),
        colors: Some(TemplateColors {
            background: "#f9fafb".to_string(),
            text: "#111827".to_string(),
        }),
    }
}

fn starter_template() -> TemplateDefinition {
    TemplateDefinition {
        id: "starter".to_string(),
        name: "Starter".to_string(),
        description: "Just the essentials: intro, about and contact".to_string(),
        category: "basic".to_string(),
        mode: TemplateMode::Decomposed,
        data: TemplateData {
            hero: Some(HeroData::default()),
            about: Some(AboutData::default()),
            contact: Some(ContactData::default()),
            ..TemplateData::default()
        },
        colors: None,
    }
}
