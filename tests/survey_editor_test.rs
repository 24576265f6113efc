use conversify::survey::{QuestionId, QuestionType, QuestionUpdate, SurveyDraft, SurveyEditor, TagKind, TagSet};
use pretty_assertions::assert_eq;

fn ids(editor: &SurveyEditor) -> Vec<QuestionId> {
    editor.questions().iter().map(|q| q.id.clone()).collect()
}

#[test]
fn test_add_and_remove_keep_remaining_order() {
    let mut editor = SurveyEditor::new();
    let added: Vec<QuestionId> = (0..5).map(|_| editor.add_question()).collect();

    editor.remove_question(&added[1]);
    editor.remove_question(&added[3]);

    assert_eq!(ids(&editor), vec![added[0].clone(), added[2].clone(), added[4].clone()]);
}

#[test]
fn test_reorder_is_reversible() {
    let mut editor = SurveyEditor::new();
    for _ in 0..4 {
        editor.add_question();
    }
    let original = ids(&editor);

    for (i, j) in [(0, 3), (3, 0), (1, 2), (2, 1), (0, 1)] {
        assert!(editor.reorder(i, Some(j)));
        assert!(editor.reorder(j, Some(i)));
        assert_eq!(ids(&editor), original, "reorder({}, {}) was not undone", i, j);
    }
}

#[test]
fn test_tag_select_is_idempotent_and_remove_of_absent_is_noop() {
    let mut tags = TagSet::new(TagKind::Demographics);
    assert!(tags.select("age"));
    assert!(!tags.select("age"));
    assert!(tags.select("gender"));
    assert_eq!(tags.values(), ["age", "gender"]);

    assert!(!tags.remove("zipcode"));
    assert_eq!(tags.values(), ["age", "gender"]);

    assert!(tags.remove("age"));
    assert_eq!(tags.values(), ["gender"]);
}

#[test]
fn test_two_questions_reordered_then_previewed() {
    let mut draft = SurveyDraft::new();
    draft.title = "Customer Pulse".to_string();

    let first = draft.questions.add_question();
    let second = draft.questions.add_question();
    draft.questions.update(&first, QuestionUpdate::Text("Originally first".into()));
    draft.questions.update(&second, QuestionUpdate::Text("Originally second".into()));

    assert!(draft.questions.questions().iter().all(|q| q.kind == QuestionType::ShortAnswer));

    draft.questions.reorder(0, Some(1));
    let preview = draft.preview();

    assert!(preview.contains("Survey Title: Customer Pulse"));
    let first_pos = preview.find("  1. Originally second").unwrap();
    let second_pos = preview.find("  2. Originally first").unwrap();
    assert!(first_pos < second_pos);
    assert_eq!(preview.matches("     Type: short_answer").count(), 2);
}

#[test]
fn test_full_preview_layout() {
    let mut draft = SurveyDraft::new();
    draft.title = "Team Survey".to_string();
    draft.topic = "Remote work".to_string();
    draft.target = "Engineers".to_string();
    draft.demographics.select("age");
    draft.demographics.select("zipcode");
    draft.tone.select("friendly");

    let id = draft.questions.add_question();
    draft.questions.update(&id, QuestionUpdate::Text("Where do you work best?".into()));
    draft.questions.update(&id, QuestionUpdate::Kind(QuestionType::MultipleChoice));
    draft
        .questions
        .update(&id, QuestionUpdate::Choices(vec!["Home".into(), "Office".into()]));

    let expected = "\
Survey Title: Team Survey
Topic: Remote work
Target: Engineers
Demographics: age, zipcode
Tone: friendly

Questions:
  1. Where do you work best?
     Type: multiple_choice
     Choices:
       1. Home
       2. Office
";
    assert_eq!(draft.preview(), expected);
}

#[test]
fn test_draft_loads_from_json() {
    let json = r#"{
        "title": "Onboarding",
        "demographics": { "kind": "demographics", "selected": ["sex"] },
        "questions": [
            { "id": "q1", "text": "Was setup easy?", "type": "all_of_the_above", "choices": ["Yes"] }
        ]
    }"#;
    let draft: SurveyDraft = serde_json::from_str(json).unwrap();

    assert_eq!(draft.title, "Onboarding");
    assert_eq!(draft.demographics.values(), ["sex"]);
    assert!(draft.tone.is_empty());
    assert_eq!(draft.questions.len(), 1);
    assert!(draft.preview().contains("Type: all_of_the_above"));
}

#[test]
fn test_draft_with_repeated_question_id_is_rejected() {
    let json = r#"{
        "title": "Onboarding",
        "questions": [
            { "id": "q1", "text": "A", "type": "short_answer" },
            { "id": "q1", "text": "B", "type": "short_answer" }
        ]
    }"#;
    let err = serde_json::from_str::<SurveyDraft>(json).unwrap_err();
    assert!(err.to_string().contains("Duplicate question id 'q1'"));
}

#[test]
fn test_saved_draft_loads_back() {
    let mut draft = SurveyDraft::new();
    draft.title = "Pulse".to_string();
    let id = draft.questions.add_question();
    draft.questions.update(&id, QuestionUpdate::Text("Why?".into()));

    let json = serde_json::to_string(&draft).unwrap();
    let loaded: SurveyDraft = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, draft);
}
