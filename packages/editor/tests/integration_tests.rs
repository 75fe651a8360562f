//! Integration tests for editor crate

use folio_editor::{
    drop_targets, palette, Command, DragCoordinator, DragItem, EditorConfig, EditorDocument,
    PortfolioContent, SectionData, SectionType,
};
use serde_json::json;

fn hero_name(doc: &EditorDocument, index: usize) -> String {
    match &doc.sections()[index].data {
        SectionData::Hero(hero) => hero.full_name.clone(),
        other => panic!("expected hero, found {:?}", other.kind()),
    }
}

#[test]
fn test_end_to_end_editing_scenario() {
    let mut doc = EditorDocument::new();

    doc.dispatch(Command::add(SectionType::Hero));
    doc.dispatch(Command::add_at(SectionType::About, 0));

    let kinds: Vec<(SectionType, usize)> =
        doc.sections().iter().map(|s| (s.kind(), s.order)).collect();
    assert_eq!(
        kinds,
        vec![(SectionType::About, 0), (SectionType::Hero, 1)]
    );

    let hero = doc.sections()[1].id.clone();
    doc.dispatch(Command::update_data(hero.clone(), json!({ "fullName": "Ada" })));
    assert_eq!(hero_name(&doc, 1), "Ada");

    doc.dispatch(Command::Undo);
    assert_eq!(hero_name(&doc, 1), "Your Name");
    assert_eq!(doc.sections()[0].kind(), SectionType::About);
    assert_eq!(doc.sections()[0].order, 0);

    doc.dispatch(Command::Redo);
    assert_eq!(hero_name(&doc, 1), "Ada");
    assert_eq!(doc.sections()[1].id, hero);
}

#[test]
fn test_drag_session_workflow() {
    let mut doc = EditorDocument::new();
    let mut drag = DragCoordinator::new();

    // Build a page entirely through drops
    for kind in [SectionType::Hero, SectionType::Projects, SectionType::Contact] {
        let targets = drop_targets(&doc);
        let last = targets.last().unwrap().clone();

        drag.begin(DragItem::Palette { section_type: kind }, &mut doc);
        drag.hover(&last);
        drag.drop(&last, &mut doc);
        drag.end(&mut doc);
    }

    // Drag contact above projects
    let contact = doc.sections()[2].id.clone();
    drag.begin(
        DragItem::EditorSection {
            section_id: contact.clone(),
            index: 2,
        },
        &mut doc,
    );
    let target = drop_targets(&doc)[1].clone();
    drag.drop(&target, &mut doc);
    drag.end(&mut doc);

    let kinds: Vec<SectionType> = doc.sections().iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![SectionType::Hero, SectionType::Contact, SectionType::Projects]
    );
    assert!(!doc.is_dragging());
    assert_eq!(doc.history().undo_levels(), 4);
}

#[test]
fn test_content_round_trip_through_json() -> anyhow::Result<()> {
    let mut doc = EditorDocument::new();
    doc.dispatch(Command::add(SectionType::Skills));
    doc.dispatch(Command::add(SectionType::Education));
    doc.dispatch(Command::UpdateTitle {
        title: "Portfolio".to_string(),
    });

    let json = doc.content().to_json()?;
    let content = PortfolioContent::from_json(&json)?;

    let restored = EditorDocument::from_content(&EditorConfig::default(), content);
    assert_eq!(restored.sections(), doc.sections());
    assert_eq!(restored.title(), "Portfolio");
    assert!(!restored.has_unsaved_changes());

    // Ids issued after hydration do not collide with stored ones
    let mut restored = restored;
    restored.dispatch(Command::add(SectionType::Hero));
    let ids: Vec<_> = restored.sections().iter().map(|s| s.id.clone()).collect();
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(ids.len(), unique.len());
    Ok(())
}

#[test]
fn test_template_document_workflow() {
    let mut doc =
        EditorDocument::from_template(&EditorConfig::default(), "classic", Some("Mine".into()))
            .unwrap();

    assert_eq!(doc.title(), "Mine");
    assert_eq!(doc.sections().len(), 5);
    assert!(!palette(&doc).is_empty());
    assert!(!doc.can_undo());

    let about = doc.sections()[1].id.clone();
    doc.dispatch(Command::remove(about));
    assert_eq!(doc.sections().len(), 4);

    doc.dispatch(Command::Undo);
    assert_eq!(doc.sections().len(), 5);
}

#[test]
fn test_json_command_script() -> anyhow::Result<()> {
    let script = r#"[
        { "type": "ADD_SECTION", "sectionType": "hero" },
        { "type": "ADD_SECTION", "sectionType": "contact", "index": 0 },
        { "type": "UPDATE_TITLE", "title": "Scripted" },
        { "type": "SET_PREVIEW_DEVICE", "device": "tablet" },
        { "type": "UNDO" }
    ]"#;

    let commands: Vec<Command> = serde_json::from_str(script)?;
    let mut doc = EditorDocument::new();
    for command in commands {
        doc.dispatch(command);
    }

    assert_eq!(doc.sections().len(), 2);
    assert_eq!(doc.sections()[0].kind(), SectionType::Contact);
    assert_eq!(doc.title(), "My Portfolio");
    assert!(doc.can_redo());
    Ok(())
}
