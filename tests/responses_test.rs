use chrono::NaiveDate;
use conversify::responses::{
    Answer, Response, ResponseFilter, ResponseStatus, export_csv, group_by_question, seed_responses,
};
use std::time::Duration;
use pretty_assertions::assert_eq;

#[test]
fn test_grouping_preserves_first_seen_order() {
    let responses = seed_responses();
    let groups = group_by_question(&responses);

    let keys: Vec<&str> = groups.iter().map(|g| g.question_id).collect();
    assert_eq!(keys, vec!["q1", "q2"]);

    let q1: Vec<(&str, &str)> = groups[0].entries.iter().map(|e| (e.respondent, e.answer)).collect();
    assert_eq!(
        q1,
        vec![
            ("Anonymous #1", "Very satisfied"),
            ("Anonymous #2", "Satisfied"),
            ("Anonymous #3", "Neutral"),
        ]
    );
    assert_eq!(groups[1].entries.len(), 2);
}

#[test]
fn test_grouping_of_filtered_responses() {
    let responses = seed_responses();
    let partial: Vec<_> = ResponseFilter::by_status(ResponseStatus::Partial)
        .apply(&responses)
        .into_iter()
        .cloned()
        .collect();

    let groups = group_by_question(&partial);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].question_text, "How satisfied are you?");
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("responses.csv");
    let responses = seed_responses();

    let file = std::fs::File::create(&path).unwrap();
    let rows = export_csv(&responses, file).unwrap();
    assert_eq!(rows, 5);

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "response_id,respondent,completed_at,time_spent,status,question_id,question,answer"
    );
    assert_eq!(
        lines[5],
        "3,Anonymous #3,2024-01-10 16:20,2m 45s,partial,q1,How satisfied are you?,Neutral"
    );
}

#[test]
fn test_repeated_answer_to_same_question_keeps_both() {
    let answer = |text: &str| Answer {
        question_id: "q1".to_string(),
        question: "How satisfied are you?".to_string(),
        answer: text.to_string(),
    };
    let completed_at = NaiveDate::from_ymd_opt(2024, 1, 11)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap();
    let responses = vec![Response {
        id: 7,
        respondent: "Anonymous #7".to_string(),
        completed_at,
        time_spent: Duration::from_secs(90),
        status: ResponseStatus::Completed,
        answers: vec![answer("Neutral"), answer("Satisfied")],
    }];

    let groups = group_by_question(&responses);
    assert_eq!(groups.len(), 1);

    let entries: Vec<(&str, &str)> = groups[0].entries.iter().map(|e| (e.respondent, e.answer)).collect();
    assert_eq!(entries, vec![("Anonymous #7", "Neutral"), ("Anonymous #7", "Satisfied")]);
}
