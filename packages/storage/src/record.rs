use chrono::{DateTime, Utc};
use folio_model::PortfolioContent;
use serde::{Deserialize, Serialize};

/// A saved portfolio document as the repository keeps it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPortfolio {
    pub id: String,
    pub content: PortfolioContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredPortfolio {
    pub fn new(id: impl Into<String>, content: PortfolioContent, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the content, keeping the creation time
    pub fn update(&mut self, content: PortfolioContent, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = now;
    }
}

/// Lightweight listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub id: String,
    pub title: String,
    pub section_count: usize,
    pub updated_at: DateTime<Utc>,
}

impl From<&StoredPortfolio> for PortfolioSummary {
    fn from(stored: &StoredPortfolio) -> Self {
        Self {
            id: stored.id.clone(),
            title: stored.content.title.clone(),
            section_count: stored.content.sections.len(),
            updated_at: stored.updated_at,
        }
    }
}
