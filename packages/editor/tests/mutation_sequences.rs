//! Tests for command sequences
//!
//! This tests:
//! - Order invariant across long add/remove/move/duplicate chains
//! - Undo as the inverse of every content edit
//! - Redo discarded by a new edit
//! - Snapshot and duplicate isolation

use folio_editor::{Command, EditorDocument, HistorySnapshot, SectionData, SectionType};
use serde_json::json;

/// Small deterministic generator so sequences are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound.max(1)
    }
}

fn assert_order_invariant(doc: &EditorDocument) {
    let orders: Vec<usize> = doc.sections().iter().map(|s| s.order).collect();
    let expected: Vec<usize> = (0..doc.sections().len()).collect();
    assert_eq!(orders, expected);

    let mut ids: Vec<_> = doc.sections().iter().map(|s| s.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), doc.sections().len(), "duplicate section ids");
}

fn random_structural_command(rng: &mut Lcg, doc: &EditorDocument) -> Command {
    let len = doc.sections().len();
    let pick = |rng: &mut Lcg| doc.sections()[rng.next(len)].id.clone();

    match rng.next(4) {
        _ if len == 0 => Command::add(SectionType::PALETTE[rng.next(7)]),
        0 => Command::add_at(SectionType::PALETTE[rng.next(7)], rng.next(len + 3)),
        1 => Command::remove(pick(&mut *rng)),
        2 => Command::move_to(pick(&mut *rng), rng.next(len + 2)),
        _ => Command::duplicate(pick(&mut *rng)),
    }
}

fn observable(doc: &EditorDocument) -> HistorySnapshot {
    doc.snapshot()
}

#[test]
fn test_order_invariant_holds_for_random_sequences() {
    for seed in 0..20 {
        let mut rng = Lcg(seed);
        let mut doc = EditorDocument::new();

        for _ in 0..60 {
            let command = random_structural_command(&mut rng, &doc);
            doc.dispatch(command);
            assert_order_invariant(&doc);
        }
    }
}

#[test]
fn test_undo_restores_state_before_each_edit() {
    let mut rng = Lcg(7);
    let mut doc = EditorDocument::new();
    doc.dispatch(Command::add(SectionType::Hero));
    doc.dispatch(Command::add(SectionType::About));

    for _ in 0..40 {
        let before = observable(&doc);
        let command = random_structural_command(&mut rng, &doc);

        if doc.dispatch(command).changed {
            doc.dispatch(Command::Undo);
            assert_eq!(observable(&doc), before);
            assert!(doc.has_unsaved_changes());
            doc.dispatch(Command::Redo);
        }
        assert_order_invariant(&doc);
    }
}

#[test]
fn test_undo_all_then_redo_all() {
    let mut doc = EditorDocument::new();
    let mut states = vec![observable(&doc)];

    for kind in [SectionType::Hero, SectionType::Skills, SectionType::Contact] {
        doc.dispatch(Command::add(kind));
        states.push(observable(&doc));
    }
    let hero = doc.sections()[0].id.clone();
    doc.dispatch(Command::update_styling(hero, json!({ "alignment": "center" })));
    states.push(observable(&doc));

    for expected in states.iter().rev().skip(1) {
        assert!(doc.dispatch(Command::Undo).changed);
        assert_eq!(&observable(&doc), expected);
    }
    assert!(!doc.dispatch(Command::Undo).changed);

    for expected in states.iter().skip(1) {
        assert!(doc.dispatch(Command::Redo).changed);
        assert_eq!(&observable(&doc), expected);
    }
    assert!(!doc.dispatch(Command::Redo).changed);
}

#[test]
fn test_new_edit_after_undo_discards_redo() {
    let mut doc = EditorDocument::new();
    doc.dispatch(Command::add(SectionType::Hero));
    doc.dispatch(Command::add(SectionType::About));
    doc.dispatch(Command::add(SectionType::Contact));

    doc.dispatch(Command::Undo);
    doc.dispatch(Command::Undo);
    assert_eq!(doc.history().redo_levels(), 2);

    doc.dispatch(Command::add(SectionType::Skills));
    assert_eq!(doc.history().redo_levels(), 0);

    let before = observable(&doc);
    assert!(!doc.dispatch(Command::Redo).changed);
    assert_eq!(observable(&doc), before);
}

#[test]
fn test_snapshot_isolation_on_nested_data() {
    let mut doc = EditorDocument::new();
    doc.dispatch(Command::add(SectionType::Skills));
    let skills = doc.sections()[0].id.clone();
    let original = doc.sections()[0].data.clone();

    doc.dispatch(Command::update_data(
        skills.clone(),
        json!({ "skillCategories": { "technical": ["Haskell"], "tools": ["Nix"] } }),
    ));
    doc.dispatch(Command::update_data(
        skills.clone(),
        json!({ "heading": "What I Use" }),
    ));

    doc.dispatch(Command::Undo);
    doc.dispatch(Command::Undo);
    assert_eq!(doc.sections()[0].data, original);

    // Snapshots taken after the redo chain still hold their own copies
    doc.dispatch(Command::Redo);
    let SectionData::Skills(data) = &doc.sections()[0].data else {
        panic!("expected skills");
    };
    assert_eq!(data.skill_categories.technical, vec!["Haskell"]);
    assert_eq!(data.heading, "Skills");
}

#[test]
fn test_duplicate_is_independent() {
    let mut doc = EditorDocument::new();
    doc.dispatch(Command::add(SectionType::Projects));
    let original_id = doc.sections()[0].id.clone();

    doc.dispatch(Command::duplicate(original_id.clone()));
    let copy_id = doc.sections()[1].id.clone();

    assert_ne!(copy_id, original_id);
    assert_eq!(doc.sections()[0].data, doc.sections()[1].data);
    assert_eq!(doc.sections()[0].styling, doc.sections()[1].styling);

    doc.dispatch(Command::update_data(
        copy_id,
        json!({ "projects": [], "heading": "Copy" }),
    ));

    let SectionData::Projects(original) = &doc.sections()[0].data else {
        panic!("expected projects");
    };
    assert_eq!(original.heading, "Projects");
    assert_eq!(original.projects.len(), 1);
}

#[test]
fn test_history_limit_drops_oldest() {
    let config = folio_editor::EditorConfig {
        history_limit: 3,
        ..Default::default()
    };
    let mut doc = EditorDocument::with_config(&config);

    for _ in 0..5 {
        doc.dispatch(Command::add(SectionType::About));
    }
    assert_eq!(doc.history().undo_levels(), 3);

    for _ in 0..3 {
        doc.dispatch(Command::Undo);
    }
    // Two oldest edits can no longer be undone
    assert_eq!(doc.sections().len(), 2);
    assert!(!doc.can_undo());
}
