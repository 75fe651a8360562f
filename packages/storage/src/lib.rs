//! # Folio Storage
//!
//! Persistence boundary for portfolio documents.
//!
//! ```text
//! EditorSession ──load/save/publish──▶ PortfolioRepository
//!      │                                 ├─ MemoryRepository
//!      ▼                                 └─ FileRepository
//! EditorDocument (folio-editor)
//! ```
//!
//! Everything async lives here; the document store stays synchronous.

mod error;
mod file_repository;
mod load;
mod publication;
mod record;
mod repository;
mod save;
mod session;

pub use error::{StorageError, StorageResult};
pub use file_repository::FileRepository;
pub use load::{LoadTicket, LoadTracker};
pub use publication::{
    public_url, validate_slug, Publication, PublicationIndex, PublishOptions, PublishResult,
    SLUG_MAX_LEN, SLUG_MIN_LEN,
};
pub use record::{PortfolioSummary, StoredPortfolio};
pub use repository::{MemoryRepository, PortfolioRepository};
pub use save::{SaveCoalescer, SaveTicket};
pub use session::{
    EditorSession, LoadOutcome, SaveCompletion, SaveOutcome, SaveRequest, StatusLevel,
    StatusMessage,
};
