//! # Editor Session
//!
//! One open document wired to a repository. This is the only place where
//! the synchronous document store meets asynchronous persistence:
//!
//! - loads are ticketed, and a completion that is no longer the latest is
//!   dropped instead of replacing a newer document
//! - a failed load leaves an empty document, never a partial one
//! - a save writes the content as it was when the save started; edits made
//!   meanwhile keep the document dirty and a follow-up save picks them up
//! - a save that finishes after the open document was replaced only reports
//!   back; it never names, cleans or re-saves the new document
//! - boundary failures become a dismissible status message, while publish
//!   validation errors are returned for the caller to show inline
//!
//! The `begin_*`/`complete_*` pairs let a host run the repository call
//! elsewhere (a spawned task, a JS promise) and keep dispatching edits in
//! the meantime. [`EditorSession::open`] and [`EditorSession::save`] run
//! both halves in place.

use crate::load::{LoadTicket, LoadTracker};
use crate::publication::{PublishOptions, PublishResult};
use crate::record::StoredPortfolio;
use crate::repository::PortfolioRepository;
use crate::save::{SaveCoalescer, SaveTicket};
use crate::{StorageError, StorageResult};
use folio_editor::{Command, DispatchResult, EditorConfig, EditorDocument};
use folio_model::PortfolioContent;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Info,
    Error,
}

/// Banner shown until dismissed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load was started; this result was dropped
    Stale,
}

/// Content captured for one save
#[derive(Debug, Clone)]
pub struct SaveRequest {
    ticket: SaveTicket,
    generation: u64,
    document_id: Option<String>,
    content: PortfolioContent,
}

impl SaveRequest {
    /// `None` on the first save of a new document
    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    pub fn version(&self) -> u64 {
        self.ticket.version()
    }
}

#[derive(Debug)]
pub struct SaveCompletion {
    pub document_id: String,

    /// Whether the document had no further edits since the save started
    pub clean: bool,

    /// Queued save to run next, if requests arrived while this one ran
    pub follow_up: Option<SaveRequest>,

    /// The open document was replaced while this save ran
    pub superseded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { document_id: String, clean: bool },
    /// Another save is running; this one will follow it
    Queued,
}

pub struct EditorSession<R> {
    repository: R,
    document: EditorDocument,
    document_id: Option<String>,

    /// Bumped whenever a different document is opened or started
    generation: u64,

    loads: LoadTracker,
    saves: SaveCoalescer,
    status: Option<StatusMessage>,
}

impl<R: PortfolioRepository> EditorSession<R> {
    pub fn new(repository: R, config: EditorConfig) -> Self {
        Self {
            document: EditorDocument::with_config(&config),
            repository,
            document_id: None,
            generation: 0,
            loads: LoadTracker::new(),
            saves: SaveCoalescer::new(),
            status: None,
        }
    }

    // ── Loading ─────────────────────────────────────────────────────────

    /// Load a stored document, replacing the current one
    pub async fn open(&mut self, id: &str) -> StorageResult<LoadOutcome> {
        let ticket = self.begin_load(id);
        let result = self.repository.load(id).await;
        self.complete_load(ticket, result)
    }

    pub fn begin_load(&mut self, id: &str) -> LoadTicket {
        tracing::debug!(id = %id, "load requested");
        self.loads.begin(id)
    }

    /// Apply a finished load if it is still the latest one requested
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: StorageResult<StoredPortfolio>,
    ) -> StorageResult<LoadOutcome> {
        if !self.loads.is_current(&ticket) {
            tracing::warn!(id = %ticket.document_id(), "discarding stale load");
            return Ok(LoadOutcome::Stale);
        }

        match result {
            Ok(stored) => {
                self.document.dispatch(Command::LoadPortfolio {
                    sections: stored.content.sections,
                    title: stored.content.title,
                });
                tracing::info!(id = %stored.id, "opened portfolio");
                self.switch_to(Some(stored.id));
                Ok(LoadOutcome::Applied)
            }
            Err(e) => {
                self.document.dispatch(Command::ResetEditor);
                self.switch_to(None);
                self.status = Some(StatusMessage::error(format!(
                    "Could not load portfolio: {}",
                    e
                )));
                Err(e)
            }
        }
    }

    /// Start over with an empty, unsaved document
    pub fn new_document(&mut self) {
        self.loads.cancel();
        self.document.dispatch(Command::ResetEditor);
        self.switch_to(None);
    }

    /// Start over with an unsaved document built from a template
    pub fn create_from_template(
        &mut self,
        template_id: &str,
        title: Option<String>,
    ) -> StorageResult<()> {
        self.document.load_template(template_id, title)?;
        self.loads.cancel();
        self.switch_to(None);
        Ok(())
    }

    /// A different document is now open. Saves still in flight belong to the
    /// previous one, and so do save requests queued behind them.
    fn switch_to(&mut self, document_id: Option<String>) {
        self.document_id = document_id;
        self.generation += 1;
        self.saves.drop_pending();
    }

    // ── Editing ─────────────────────────────────────────────────────────

    pub fn dispatch(&mut self, command: Command) -> DispatchResult {
        self.document.dispatch(command)
    }

    // ── Saving ──────────────────────────────────────────────────────────

    /// Save and run any follow-ups that queued up meanwhile
    pub async fn save(&mut self) -> StorageResult<SaveOutcome> {
        let Some(mut request) = self.begin_save() else {
            return Ok(SaveOutcome::Queued);
        };

        loop {
            let result = self
                .repository
                .save(request.document_id(), request.content())
                .await;
            let completion = self.complete_save(request, result)?;

            match completion.follow_up {
                Some(next) => request = next,
                None => {
                    return Ok(SaveOutcome::Saved {
                        document_id: completion.document_id,
                        clean: completion.clean,
                    })
                }
            }
        }
    }

    /// Capture the current content for saving, or queue behind the save in
    /// flight and return `None`
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        let ticket = self.saves.begin(self.document.version())?;
        Some(SaveRequest {
            ticket,
            generation: self.generation,
            document_id: self.document_id.clone(),
            content: self.document.content(),
        })
    }

    pub fn complete_save(
        &mut self,
        request: SaveRequest,
        result: StorageResult<String>,
    ) -> StorageResult<SaveCompletion> {
        let resave = self.saves.finish(request.ticket);

        let document_id = match result {
            Ok(id) => id,
            Err(e) => {
                self.status = Some(StatusMessage::error(format!("Could not save: {}", e)));
                return Err(e);
            }
        };

        if request.generation != self.generation {
            tracing::warn!(id = %document_id, "save finished after the document was replaced");
            let follow_up = if resave { self.begin_save() } else { None };
            return Ok(SaveCompletion {
                document_id,
                clean: false,
                follow_up,
                superseded: true,
            });
        }

        // The first save names the document
        if self.document_id.is_none() {
            self.document_id = Some(document_id.clone());
        }

        let clean = self.document.mark_saved(request.version());
        tracing::info!(
            id = %document_id,
            version = request.version(),
            clean,
            "save completed"
        );

        let follow_up = if resave { self.begin_save() } else { None };
        Ok(SaveCompletion {
            document_id,
            clean,
            follow_up,
            superseded: false,
        })
    }

    // ── Publishing ──────────────────────────────────────────────────────

    /// Publish or unpublish, saving first if the document was never saved.
    /// Slug problems come back as errors without touching the status line.
    pub async fn publish(&mut self, options: &PublishOptions) -> StorageResult<PublishResult> {
        let id = match &self.document_id {
            Some(id) => id.clone(),
            None => match self.save().await? {
                SaveOutcome::Saved { document_id, .. } => document_id,
                SaveOutcome::Queued => {
                    return Err(StorageError::NotFound("unsaved portfolio".to_string()))
                }
            },
        };

        match self.repository.publish(&id, options).await {
            Ok(result) => {
                self.status = Some(match &result.public_url {
                    Some(url) => StatusMessage::info(format!("Published at {}", url)),
                    None => StatusMessage::info("Portfolio is no longer public"),
                });
                Ok(result)
            }
            Err(e) if e.is_validation() => Err(e),
            Err(e) => {
                self.status = Some(StatusMessage::error(format!("Could not publish: {}", e)));
                Err(e)
            }
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn document(&self) -> &EditorDocument {
        &self.document
    }

    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn is_saving(&self) -> bool {
        self.saves.is_saving()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn dismiss_status(&mut self) {
        self.status = None;
    }
}
