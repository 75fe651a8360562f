//! Repository backed by a directory of JSON files.
//!
//! ```text
//! <root>/
//!   portfolios/<id>.json   one StoredPortfolio per document
//!   publications.json      publication state keyed by document id
//! ```
//!
//! Files are written to a sibling temp file and renamed into place, so a
//! reader never sees a partial document.

use crate::publication::{public_url, PublicationIndex, PublishOptions, PublishResult};
use crate::record::{PortfolioSummary, StoredPortfolio};
use crate::repository::PortfolioRepository;
use crate::{StorageError, StorageResult};
use chrono::{DateTime, Utc};
use folio_model::{seed_for, PortfolioContent};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

const PORTFOLIO_DIR: &str = "portfolios";
const PUBLICATIONS_FILE: &str = "publications.json";

#[derive(Debug)]
pub struct FileRepository {
    root: PathBuf,
    public_base_url: String,

    /// Serializes read-modify-write of the publication index
    publish_lock: Mutex<()>,
}

impl FileRepository {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
            publish_lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, id: &str) -> StorageResult<PathBuf> {
        // Ids name files; anything else cannot be a stored document
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::NotFound(id.to_string()));
        }
        Ok(self.root.join(PORTFOLIO_DIR).join(format!("{}.json", id)))
    }

    async fn read_document(&self, id: &str) -> StorageResult<StoredPortfolio> {
        let path = self.document_path(id)?;
        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let mut stored: StoredPortfolio = serde_json::from_str(&json)?;
        stored.content = stored.content.upgrade()?;
        Ok(stored)
    }

    async fn write_document(&self, stored: &StoredPortfolio) -> StorageResult<()> {
        let path = self.document_path(&stored.id)?;
        write_atomic(&path, &serde_json::to_string_pretty(stored)?).await
    }

    async fn read_publications(&self) -> StorageResult<PublicationIndex> {
        match tokio::fs::read_to_string(self.root.join(PUBLICATIONS_FILE)).await {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(PublicationIndex::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Reserve the first free `{seed}-{n}` id by creating its file. The
    /// empty placeholder is replaced when the document is written.
    async fn claim_document_id(&self, seed: &str) -> StorageResult<String> {
        tokio::fs::create_dir_all(self.root.join(PORTFOLIO_DIR)).await?;

        let mut attempt = 0u32;
        loop {
            let id = format!("{}-{}", seed, attempt);
            let claimed = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(self.document_path(&id)?)
                .await;
            match claimed {
                Ok(_) => return Ok(id),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }

    async fn create_document(
        &self,
        content: &PortfolioContent,
        now: DateTime<Utc>,
    ) -> StorageResult<String> {
        let id = self.claim_document_id(&seed_for(&now.to_rfc3339())).await?;
        let stored = StoredPortfolio::new(&id, content.clone(), now);

        if let Err(e) = self.write_document(&stored).await {
            // Release the claimed id
            if let Err(cleanup) = tokio::fs::remove_file(self.document_path(&id)?).await {
                tracing::warn!(id = %id, error = %cleanup, "could not remove placeholder");
            }
            return Err(e);
        }

        tracing::info!(id = %id, "created portfolio");
        Ok(id)
    }
}

async fn write_atomic(path: &Path, contents: &str) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, contents).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

impl PortfolioRepository for FileRepository {
    async fn load(&self, id: &str) -> StorageResult<StoredPortfolio> {
        let stored = self.read_document(id).await?;
        tracing::info!(id = %id, sections = stored.content.sections.len(), "loaded portfolio");
        Ok(stored)
    }

    async fn save(&self, id: Option<&str>, content: &PortfolioContent) -> StorageResult<String> {
        let now = Utc::now();

        let Some(id) = id else {
            return self.create_document(content, now).await;
        };

        let mut stored = self.read_document(id).await?;
        stored.update(content.clone(), now);
        self.write_document(&stored).await?;
        tracing::info!(id = %id, "saved portfolio");
        Ok(stored.id)
    }

    async fn publish(&self, id: &str, options: &PublishOptions) -> StorageResult<PublishResult> {
        let _guard = self.publish_lock.lock().await;

        // Must exist before it can be published
        self.read_document(id).await?;
        if let Some(slug) = options.requested_slug()? {
            if slug != id && tokio::fs::try_exists(self.document_path(slug)?).await? {
                return Err(StorageError::SlugTaken(slug.to_string()));
            }
        }

        let mut index = self.read_publications().await?;
        let publication = index.apply(id, options, Utc::now())?;
        write_atomic(
            &self.root.join(PUBLICATIONS_FILE),
            &serde_json::to_string_pretty(&index)?,
        )
        .await?;

        let url = public_url(&self.public_base_url, id, &publication);
        tracing::info!(id = %id, url = ?url, "updated publication");
        Ok(PublishResult {
            public_url: url,
            publication,
        })
    }

    async fn list(&self) -> StorageResult<Vec<PortfolioSummary>> {
        let dir = self.root.join(PORTFOLIO_DIR);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };

        let mut summaries = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match self.read_document(id).await {
                Ok(stored) => summaries.push(PortfolioSummary::from(&stored)),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable portfolio"),
            }
        }

        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo(dir: &TempDir) -> FileRepository {
        FileRepository::new(dir.path(), "https://folio.example")
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        let id = repo
            .save(None, &PortfolioContent::new("On disk", vec![]))
            .await
            .unwrap();
        assert!(dir
            .path()
            .join(PORTFOLIO_DIR)
            .join(format!("{}.json", id))
            .exists());

        let stored = repo.load(&id).await.unwrap();
        assert_eq!(stored.content.title, "On disk");
    }

    #[tokio::test]
    async fn test_path_like_ids_are_not_found() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        for id in ["../escape", "a/b", ""] {
            assert!(matches!(
                repo.load(id).await,
                Err(StorageError::NotFound(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_publications_persist() {
        let dir = TempDir::new().unwrap();
        let id = {
            let repo = repo(&dir);
            let id = repo.save(None, &PortfolioContent::default()).await.unwrap();
            repo.publish(&id, &PublishOptions::with_slug("on-disk"))
                .await
                .unwrap();
            id
        };

        // A fresh repository over the same directory sees the slug
        let repo = repo(&dir);
        let other = repo.save(None, &PortfolioContent::default()).await.unwrap();
        assert_ne!(id, other);
        assert!(matches!(
            repo.publish(&other, &PublishOptions::with_slug("on-disk")).await,
            Err(StorageError::SlugTaken(_))
        ));
    }

    #[tokio::test]
    async fn test_claimed_ids_are_unique() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        let first = repo.claim_document_id("seed").await.unwrap();
        let second = repo.claim_document_id("seed").await.unwrap();
        assert_eq!(first, "seed-0");
        assert_eq!(second, "seed-1");
    }

    #[tokio::test]
    async fn test_concurrent_first_saves_get_distinct_ids() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        let content = PortfolioContent::default();

        let (a, b, c) = tokio::join!(
            repo.save(None, &content),
            repo.save(None, &content),
            repo.save(None, &content)
        );
        let mut ids = vec![a.unwrap(), b.unwrap(), c.unwrap()];
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert_eq!(repo.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_slug_cannot_name_another_document() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        let first = repo.save(None, &PortfolioContent::default()).await.unwrap();
        let second = repo.save(None, &PortfolioContent::default()).await.unwrap();

        assert!(matches!(
            repo.publish(&first, &PublishOptions::with_slug(second.clone())).await,
            Err(StorageError::SlugTaken(_))
        ));
        assert!(repo
            .publish(&first, &PublishOptions::with_slug(first.clone()))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_list_skips_corrupt_files() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.save(None, &PortfolioContent::default()).await.unwrap();

        tokio::fs::write(dir.path().join(PORTFOLIO_DIR).join("broken.json"), "{")
            .await
            .unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
