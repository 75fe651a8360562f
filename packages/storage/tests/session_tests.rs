//! Editor session against real repositories

use folio_editor::{Command, EditorConfig, EditorError, SectionType};
use folio_model::PortfolioContent;
use folio_storage::{
    EditorSession, FileRepository, LoadOutcome, MemoryRepository, PortfolioRepository,
    PublishOptions, SaveOutcome, StatusLevel, StorageError,
};
use tempfile::TempDir;

const BASE_URL: &str = "https://folio.example";

async fn seeded(titles: &[&str]) -> (MemoryRepository, Vec<String>) {
    let repo = MemoryRepository::new(BASE_URL);
    let mut ids = Vec::new();
    for title in titles {
        let mut session = EditorSession::new(repo.clone(), EditorConfig::default());
        session.dispatch(Command::UpdateTitle {
            title: title.to_string(),
        });
        session.dispatch(Command::add(SectionType::Hero));
        match session.save().await.unwrap() {
            SaveOutcome::Saved { document_id, .. } => ids.push(document_id),
            SaveOutcome::Queued => panic!("nothing else was saving"),
        }
    }
    (repo, ids)
}

#[tokio::test]
async fn test_open_replaces_document() -> anyhow::Result<()> {
    let (repo, ids) = seeded(&["First"]).await;
    let mut session = EditorSession::new(repo, EditorConfig::default());
    session.dispatch(Command::add(SectionType::Contact));

    assert_eq!(session.open(&ids[0]).await?, LoadOutcome::Applied);

    let doc = session.document();
    assert_eq!(doc.title(), "First");
    assert_eq!(doc.sections().len(), 1);
    assert_eq!(doc.sections()[0].kind(), SectionType::Hero);
    assert!(!doc.has_unsaved_changes());
    assert!(!doc.can_undo());
    assert_eq!(session.document_id(), Some(ids[0].as_str()));
    Ok(())
}

#[tokio::test]
async fn test_out_of_order_load_is_discarded() -> anyhow::Result<()> {
    let (repo, ids) = seeded(&["Slow", "Fast"]).await;
    let mut session = EditorSession::new(repo.clone(), EditorConfig::default());

    let slow = session.begin_load(&ids[0]);
    let fast = session.begin_load(&ids[1]);

    let fast_result = repo.load(&ids[1]).await;
    assert_eq!(session.complete_load(fast, fast_result)?, LoadOutcome::Applied);

    let slow_result = repo.load(&ids[0]).await;
    assert_eq!(session.complete_load(slow, slow_result)?, LoadOutcome::Stale);

    assert_eq!(session.document().title(), "Fast");
    assert_eq!(session.document_id(), Some(ids[1].as_str()));
    Ok(())
}

#[tokio::test]
async fn test_stale_failure_does_not_reset() -> anyhow::Result<()> {
    let (repo, ids) = seeded(&["Kept"]).await;
    let mut session = EditorSession::new(repo.clone(), EditorConfig::default());

    let doomed = session.begin_load("missing");
    let current = session.begin_load(&ids[0]);
    let result = repo.load(&ids[0]).await;
    session.complete_load(current, result)?;

    let failure = repo.load("missing").await;
    assert_eq!(session.complete_load(doomed, failure)?, LoadOutcome::Stale);
    assert_eq!(session.document().title(), "Kept");
    assert!(session.status().is_none());
    Ok(())
}

#[tokio::test]
async fn test_failed_open_leaves_empty_document() {
    let (repo, ids) = seeded(&["Loaded"]).await;
    let mut session = EditorSession::new(repo, EditorConfig::default());
    session.open(&ids[0]).await.unwrap();

    let err = session.open("missing").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)));

    assert!(session.document().sections().is_empty());
    assert_eq!(session.document_id(), None);
    assert!(!session.document().has_unsaved_changes());

    let status = session.status().unwrap();
    assert_eq!(status.level, StatusLevel::Error);
    assert!(status.text.contains("missing"));

    session.dismiss_status();
    assert!(session.status().is_none());
}

#[tokio::test]
async fn test_first_save_assigns_id() -> anyhow::Result<()> {
    let repo = MemoryRepository::new(BASE_URL);
    let mut session = EditorSession::new(repo.clone(), EditorConfig::default());
    session.dispatch(Command::add(SectionType::About));
    assert_eq!(session.document_id(), None);

    let SaveOutcome::Saved { document_id, clean } = session.save().await? else {
        panic!("expected a completed save");
    };
    assert!(clean);
    assert_eq!(session.document_id(), Some(document_id.as_str()));

    session.dispatch(Command::add(SectionType::Contact));
    session.save().await?;
    assert_eq!(repo.len().await, 1);
    assert_eq!(repo.load(&document_id).await?.content.sections.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_edits_during_save_trigger_follow_up() -> anyhow::Result<()> {
    let repo = MemoryRepository::new(BASE_URL);
    let mut session = EditorSession::new(repo.clone(), EditorConfig::default());
    session.dispatch(Command::add(SectionType::Hero));

    let request = session.begin_save().expect("no save in flight");
    assert!(session.is_saving());

    // Keep editing while the save is outstanding
    session.dispatch(Command::add(SectionType::Projects));
    assert!(session.begin_save().is_none());

    let result = repo.save(request.document_id(), request.content()).await;
    let completion = session.complete_save(request, result)?;
    assert!(!completion.clean);
    assert!(session.document().has_unsaved_changes());

    // What landed is the content from when the save started
    let id = completion.document_id.clone();
    assert_eq!(repo.load(&id).await?.content.sections.len(), 1);

    let follow_up = completion.follow_up.expect("queued save runs next");
    assert_eq!(follow_up.document_id(), Some(id.as_str()));
    let result = repo.save(follow_up.document_id(), follow_up.content()).await;
    let completion = session.complete_save(follow_up, result)?;

    assert!(completion.clean);
    assert!(completion.follow_up.is_none());
    assert!(!session.document().has_unsaved_changes());
    assert_eq!(repo.load(&id).await?.content.sections.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_new_document_during_save_stays_unnamed() -> anyhow::Result<()> {
    let (repo, ids) = seeded(&["Original"]).await;
    let mut session = EditorSession::new(repo.clone(), EditorConfig::default());
    session.open(&ids[0]).await?;
    session.dispatch(Command::add(SectionType::About));

    let request = session.begin_save().expect("no save in flight");
    session.new_document();
    session.dispatch(Command::UpdateTitle {
        title: "Brand new".to_string(),
    });

    let result = repo.save(request.document_id(), request.content()).await;
    let completion = session.complete_save(request, result)?;
    assert!(completion.superseded);
    assert!(completion.follow_up.is_none());
    assert_eq!(completion.document_id, ids[0]);

    assert_eq!(session.document_id(), None);
    assert!(session.document().has_unsaved_changes());

    // Saving the new document creates a second portfolio
    let SaveOutcome::Saved { document_id, .. } = session.save().await? else {
        panic!("expected a completed save");
    };
    assert_ne!(document_id, ids[0]);

    let original = repo.load(&ids[0]).await?;
    assert_eq!(original.content.title, "Original");
    assert_eq!(original.content.sections.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_template_during_save_keeps_its_edits_dirty() -> anyhow::Result<()> {
    let (repo, ids) = seeded(&["Original"]).await;
    let mut session = EditorSession::new(repo.clone(), EditorConfig::default());
    session.open(&ids[0]).await?;
    session.dispatch(Command::add(SectionType::About));

    let request = session.begin_save().expect("no save in flight");
    session.create_from_template("classic", None)?;
    session.dispatch(Command::add(SectionType::Contact));

    // Asking to save the template document queues behind the old save
    assert!(session.begin_save().is_none());

    let result = repo.save(request.document_id(), request.content()).await;
    let completion = session.complete_save(request, result)?;
    assert!(completion.superseded);
    assert_eq!(session.document_id(), None);
    assert!(session.document().has_unsaved_changes());

    // The queued request saves the template document under a new id
    let follow_up = completion.follow_up.expect("queued save runs next");
    assert_eq!(follow_up.document_id(), None);
    let result = repo.save(follow_up.document_id(), follow_up.content()).await;
    let completion = session.complete_save(follow_up, result)?;

    assert!(!completion.superseded);
    assert!(completion.clean);
    assert_ne!(completion.document_id, ids[0]);
    assert_eq!(session.document_id(), Some(completion.document_id.as_str()));
    assert_eq!(repo.load(&ids[0]).await?.content.title, "Original");
    assert_eq!(repo.len().await, 2);
    Ok(())
}

#[tokio::test]
async fn test_failed_save_sets_status() {
    let repo = MemoryRepository::new(BASE_URL);
    let mut session = EditorSession::new(repo, EditorConfig::default());
    session.dispatch(Command::add(SectionType::Hero));

    let request = session.begin_save().unwrap();
    let result = Err(StorageError::Io(std::io::Error::other("disk full")));
    assert!(session.complete_save(request, result).is_err());

    assert!(!session.is_saving());
    assert!(session.document().has_unsaved_changes());
    assert_eq!(session.status().map(|s| s.level), Some(StatusLevel::Error));
}

#[tokio::test]
async fn test_publish_taken_slug_is_inline_error() -> anyhow::Result<()> {
    let (repo, ids) = seeded(&["Owner", "Latecomer"]).await;

    let mut owner = EditorSession::new(repo.clone(), EditorConfig::default());
    owner.open(&ids[0]).await?;
    let result = owner.publish(&PublishOptions::with_slug("ada")).await?;
    assert_eq!(result.public_url.as_deref(), Some("https://folio.example/ada"));

    let mut latecomer = EditorSession::new(repo, EditorConfig::default());
    latecomer.open(&ids[1]).await?;
    let version = latecomer.document().version();

    let err = latecomer
        .publish(&PublishOptions::with_slug("ada"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::SlugTaken(_)));
    assert!(err.is_validation());
    assert!(latecomer.status().is_none());
    assert_eq!(latecomer.document().version(), version);

    let err = latecomer
        .publish(&PublishOptions::with_slug("No Spaces"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::InvalidSlug { .. }));
    Ok(())
}

#[tokio::test]
async fn test_publish_unsaved_document_saves_first() -> anyhow::Result<()> {
    let repo = MemoryRepository::new(BASE_URL);
    let mut session = EditorSession::new(repo.clone(), EditorConfig::default());
    session.create_from_template("classic", Some("Fresh".into()))?;

    let result = session.publish(&PublishOptions::public()).await?;
    let id = session.document_id().expect("saved before publishing");

    assert_eq!(result.public_url, Some(format!("{}/{}", BASE_URL, id)));
    assert_eq!(repo.load(id).await?.content.title, "Fresh");
    assert_eq!(
        session.status().map(|s| s.level),
        Some(StatusLevel::Info)
    );
    Ok(())
}

#[tokio::test]
async fn test_unknown_template_keeps_document() {
    let repo = MemoryRepository::new(BASE_URL);
    let mut session = EditorSession::new(repo, EditorConfig::default());
    session.dispatch(Command::add(SectionType::Skills));

    let err = session.create_from_template("nope", None).unwrap_err();
    assert!(matches!(
        err,
        StorageError::Editor(EditorError::TemplateNotFound(_))
    ));
    assert_eq!(session.document().sections().len(), 1);
}

#[tokio::test]
async fn test_file_repository_session_round_trip() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    let id = {
        let mut session =
            EditorSession::new(FileRepository::new(dir.path(), BASE_URL), EditorConfig::default());
        session.create_from_template("starter", Some("Disk".into()))?;
        let SaveOutcome::Saved { document_id, .. } = session.save().await? else {
            panic!("expected a completed save");
        };
        document_id
    };

    let repo = FileRepository::new(dir.path(), BASE_URL);
    let listed = repo.list().await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Disk");
    assert_eq!(listed[0].section_count, 3);

    let mut session = EditorSession::new(repo, EditorConfig::default());
    session.open(&id).await?;
    let stored: PortfolioContent = session.document().content();
    assert_eq!(stored.sections.len(), 3);

    // New sections never reuse ids already on disk
    session.dispatch(Command::add(SectionType::Skills));
    let mut ids: Vec<_> = session
        .document()
        .sections()
        .iter()
        .map(|s| s.id.clone())
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
    Ok(())
}
