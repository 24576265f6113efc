use anyhow::{Context, Result};
use std::io::Write;

use super::model::Response;
use crate::format::format_duration;

const HEADER: [&str; 8] = [
    "response_id",
    "respondent",
    "completed_at",
    "time_spent",
    "status",
    "question_id",
    "question",
    "answer",
];

/// Write responses as CSV, one row per answer. Returns the number of data rows.
pub fn export_csv<'a, W, I>(responses: I, writer: W) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Response>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER).context("Failed to write CSV header")?;

    let mut rows = 0;
    for response in responses {
        let id = response.id.to_string();
        let completed_at = response.completed_at.format("%Y-%m-%d %H:%M").to_string();
        let time_spent = format_duration(response.time_spent);
        let prefix = [
            id.as_str(),
            response.respondent.as_str(),
            completed_at.as_str(),
            time_spent.as_str(),
            response.status.as_str(),
        ];

        if response.answers.is_empty() {
            let record = prefix.iter().copied().chain(["", "", ""]);
            wtr.write_record(record)
                .with_context(|| format!("Failed to write response {}", response.id))?;
            rows += 1;
            continue;
        }

        for answer in &response.answers {
            let record = prefix.iter().copied().chain([
                answer.question_id.as_str(),
                answer.question.as_str(),
                answer.answer.as_str(),
            ]);
            wtr.write_record(record)
                .with_context(|| format!("Failed to write response {}", response.id))?;
            rows += 1;
        }
    }

    wtr.flush().context("Failed to flush CSV output")?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::mock::seed_responses;

    #[test]
    fn test_export_one_row_per_answer() {
        let responses = seed_responses();
        let mut buf = Vec::new();
        let rows = export_csv(&responses, &mut buf).unwrap();
        assert_eq!(rows, 5);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            "response_id,respondent,completed_at,time_spent,status,question_id,question,answer"
        );
        assert_eq!(
            lines[1],
            "1,Anonymous #1,2024-01-10 14:30,5m 20s,completed,q1,How satisfied are you?,Very satisfied"
        );
    }

    #[test]
    fn test_export_response_without_answers() {
        let mut responses = seed_responses();
        responses[0].answers.clear();
        let mut buf = Vec::new();
        let rows = export_csv(&responses[..1], &mut buf).unwrap();
        assert_eq!(rows, 1);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with("completed,,,"));
    }
}
