use chrono::{NaiveDate, NaiveDateTime};
use std::time::Duration;

use super::model::{Answer, Response, ResponseStatus};

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 10)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

fn answer(question_id: &str, question: &str, answer: &str) -> Answer {
    Answer {
        question_id: question_id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

const Q1: &str = "How satisfied are you?";
const Q2: &str = "Would you recommend us?";

/// Mock responses shown by the responses page
pub fn seed_responses() -> Vec<Response> {
    vec![
        Response {
            id: 1,
            respondent: "Anonymous #1".to_string(),
            completed_at: at(14, 30),
            time_spent: Duration::from_secs(5 * 60 + 20),
            status: ResponseStatus::Completed,
            answers: vec![answer("q1", Q1, "Very satisfied"), answer("q2", Q2, "Yes")],
        },
        Response {
            id: 2,
            respondent: "Anonymous #2".to_string(),
            completed_at: at(15, 45),
            time_spent: Duration::from_secs(4 * 60 + 15),
            status: ResponseStatus::Completed,
            answers: vec![answer("q1", Q1, "Satisfied"), answer("q2", Q2, "Maybe")],
        },
        Response {
            id: 3,
            respondent: "Anonymous #3".to_string(),
            completed_at: at(16, 20),
            time_spent: Duration::from_secs(2 * 60 + 45),
            status: ResponseStatus::Partial,
            answers: vec![answer("q1", Q1, "Neutral")],
        },
    ]
}
