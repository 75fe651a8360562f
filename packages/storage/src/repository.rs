//! Persistence contract and the in-memory implementation.

use crate::publication::{public_url, PublicationIndex, PublishOptions, PublishResult};
use crate::record::{PortfolioSummary, StoredPortfolio};
use crate::{StorageError, StorageResult};
use chrono::Utc;
use folio_model::PortfolioContent;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Where portfolio documents live.
///
/// `save` with no id creates a document and returns its new id; with an id
/// it replaces that document's content. Publishing rejections
/// (`SlugTaken`, `InvalidSlug`) leave the stored state unchanged.
#[allow(async_fn_in_trait)]
pub trait PortfolioRepository {
    async fn load(&self, id: &str) -> StorageResult<StoredPortfolio>;

    async fn save(&self, id: Option<&str>, content: &PortfolioContent) -> StorageResult<String>;

    async fn publish(&self, id: &str, options: &PublishOptions) -> StorageResult<PublishResult>;

    async fn list(&self) -> StorageResult<Vec<PortfolioSummary>>;
}

#[derive(Debug, Default)]
struct MemoryState {
    documents: HashMap<String, StoredPortfolio>,
    publications: PublicationIndex,
    next_id: u64,
}

/// Repository held entirely in memory. Clones share the same store.
#[derive(Debug, Clone)]
pub struct MemoryRepository {
    state: Arc<RwLock<MemoryState>>,
    public_base_url: String,
}

impl MemoryRepository {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(MemoryState::default())),
            public_base_url: public_base_url.into(),
        }
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.documents.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl PortfolioRepository for MemoryRepository {
    async fn load(&self, id: &str) -> StorageResult<StoredPortfolio> {
        let state = self.state.read().await;
        state
            .documents
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    async fn save(&self, id: Option<&str>, content: &PortfolioContent) -> StorageResult<String> {
        let mut state = self.state.write().await;
        let now = Utc::now();

        match id {
            Some(id) => {
                let stored = state
                    .documents
                    .get_mut(id)
                    .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
                stored.update(content.clone(), now);
                Ok(id.to_string())
            }
            None => {
                state.next_id += 1;
                let id = format!("portfolio-{}", state.next_id);
                state
                    .documents
                    .insert(id.clone(), StoredPortfolio::new(&id, content.clone(), now));
                tracing::debug!(id = %id, "created portfolio");
                Ok(id)
            }
        }
    }

    async fn publish(&self, id: &str, options: &PublishOptions) -> StorageResult<PublishResult> {
        let mut state = self.state.write().await;
        if !state.documents.contains_key(id) {
            return Err(StorageError::NotFound(id.to_string()));
        }
        if let Some(slug) = options.requested_slug()? {
            if slug != id && state.documents.contains_key(slug) {
                return Err(StorageError::SlugTaken(slug.to_string()));
            }
        }

        let publication = state.publications.apply(id, options, Utc::now())?;
        Ok(PublishResult {
            public_url: public_url(&self.public_base_url, id, &publication),
            publication,
        })
    }

    async fn list(&self) -> StorageResult<Vec<PortfolioSummary>> {
        let state = self.state.read().await;
        let mut summaries: Vec<PortfolioSummary> =
            state.documents.values().map(PortfolioSummary::from).collect();
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }
}
