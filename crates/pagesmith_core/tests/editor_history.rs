use pagesmith_core::{default_template, Editor, Element, ElementKind};

#[test]
fn new_editor_seeds_history_with_one_snapshot() {
    let editor = Editor::new(default_template());

    assert_eq!(editor.history_len(), 1);
    assert_eq!(editor.history_index(), 0);
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
}

#[test]
fn history_index_tracks_mutation_count() {
    let mut editor = Editor::new(default_template());

    editor
        .create_from_palette(&ElementKind::Heading, "main-content", 0)
        .unwrap();
    editor
        .create_from_palette(&ElementKind::Paragraph, "main-content", 1)
        .unwrap();
    editor.reorder("main-content", 0, "main-content", 1);

    assert_eq!(editor.history_index(), 3);
    assert_eq!(editor.history_len(), 4);
}

#[test]
fn undo_then_redo_restores_exact_documents() {
    let mut editor = Editor::new(default_template());
    let original = editor.document().clone();

    editor
        .create_from_palette(&ElementKind::Heading, "main-content", 0)
        .unwrap();
    editor
        .create_from_palette(&ElementKind::Button, "footer", 0)
        .unwrap();
    editor.reorder("header", 0, "footer", 1);
    let final_state = editor.document().clone();

    editor.undo();
    editor.undo();
    editor.undo();
    assert_eq!(editor.document(), &original);
    assert_eq!(editor.history_index(), 0);

    editor.redo();
    editor.redo();
    editor.redo();
    assert_eq!(editor.document(), &final_state);
}

#[test]
fn undo_at_first_snapshot_is_a_noop() {
    let mut editor = Editor::new(default_template());
    let before = editor.document().clone();

    editor.undo();

    assert_eq!(editor.document(), &before);
    assert_eq!(editor.history_index(), 0);
}

#[test]
fn redo_at_last_snapshot_is_a_noop() {
    let mut editor = Editor::new(default_template());
    editor
        .create_from_palette(&ElementKind::Heading, "header", 0)
        .unwrap();
    let before = editor.document().clone();

    editor.redo();

    assert_eq!(editor.document(), &before);
    assert_eq!(editor.history_index(), 1);
}

#[test]
fn mutation_after_undo_discards_redo_branch() {
    let mut editor = Editor::new(default_template());

    editor
        .create_from_palette(&ElementKind::Heading, "main-content", 0)
        .unwrap();
    editor
        .create_from_palette(&ElementKind::Paragraph, "main-content", 1)
        .unwrap();
    editor.undo();
    assert!(editor.can_redo());

    editor
        .create_from_palette(&ElementKind::Button, "main-content", 0)
        .unwrap();

    assert!(!editor.can_redo());
    assert_eq!(editor.history_len(), 3);
    assert_eq!(editor.history_index(), 2);
}

#[test]
fn create_from_palette_inserts_heading_with_defaults() {
    let mut editor = Editor::new(default_template());

    let id = editor
        .create_from_palette(&ElementKind::Heading, "main-content", 0)
        .unwrap();
    assert!(!id.is_empty());

    let section = editor.document().section("main-content").unwrap();
    let element = &section.elements[0];
    assert_eq!(element.id, id);
    assert_eq!(element.kind, ElementKind::Heading);
    assert_eq!(element.content, "New Heading");
    assert_eq!(element.text_property("level", ""), "h2");
    assert_eq!(element.text_property("align", ""), "left");
    assert_eq!(element.text_property("color", ""), "#000000");
    assert_eq!(element.text_property("fontSize", ""), "24px");
}

#[test]
fn create_from_palette_into_missing_section_is_a_noop() {
    let mut editor = Editor::new(default_template());
    let before = editor.document().clone();

    let created = editor.create_from_palette(&ElementKind::Heading, "no-such-section", 0);

    assert!(created.is_none());
    assert_eq!(editor.document(), &before);
    assert_eq!(editor.history_len(), 1);
}

#[test]
fn create_from_palette_clamps_destination_index() {
    let mut editor = Editor::new(default_template());

    editor
        .create_from_palette(&ElementKind::Paragraph, "footer", 99)
        .unwrap();

    let footer = editor.document().section("footer").unwrap();
    assert_eq!(footer.elements.len(), 2);
    assert_eq!(footer.elements[1].kind, ElementKind::Paragraph);
    assert_eq!(
        footer.elements[1].content,
        "This is a new paragraph. Click to edit the content."
    );
}

#[test]
fn update_element_replaces_by_id_and_selects_result() {
    let mut editor = Editor::new(default_template());

    let mut updated = editor.document().element("header-heading").unwrap().clone();
    updated.content = "Hello".to_string();
    editor.update_element(updated.clone());

    assert_eq!(
        editor.document().element("header-heading").unwrap().content,
        "Hello"
    );
    assert_eq!(editor.selection(), Some(&updated));
    assert_eq!(editor.history_index(), 1);
}

#[test]
fn update_element_with_unknown_id_leaves_state_unchanged() {
    let mut editor = Editor::new(default_template());
    let selected = editor.document().element("footer-text").unwrap().clone();
    editor.select(selected.clone());
    let before = editor.document().clone();

    let ghost = Element::new(ElementKind::Paragraph, "never attached");
    editor.update_element(ghost);

    assert_eq!(editor.document(), &before);
    assert_eq!(editor.selection(), Some(&selected));
    assert_eq!(editor.history_len(), 1);
}

#[test]
fn select_has_no_history_effect() {
    let mut editor = Editor::new(default_template());
    let element = editor.document().element("header-heading").unwrap().clone();

    editor.select(element);
    editor.clear_selection();

    assert_eq!(editor.history_len(), 1);
    assert!(editor.selection().is_none());
}
