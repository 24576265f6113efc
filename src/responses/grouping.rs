use chrono::NaiveDateTime;

use super::model::Response;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedAnswer<'a> {
    pub respondent: &'a str,
    pub answer: &'a str,
    pub completed_at: NaiveDateTime,
}

/// All answers given to one question, across responses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionGroup<'a> {
    pub question_id: &'a str,
    pub question_text: &'a str,
    pub entries: Vec<GroupedAnswer<'a>>,
}

/// Regroup answers by question id. Groups appear in first-seen order and the
/// first text seen for an id names its group.
pub fn group_by_question(responses: &[Response]) -> Vec<QuestionGroup<'_>> {
    let mut groups: Vec<QuestionGroup<'_>> = Vec::new();

    for response in responses {
        for answer in &response.answers {
            let entry = GroupedAnswer {
                respondent: &response.respondent,
                answer: &answer.answer,
                completed_at: response.completed_at,
            };

            match groups.iter_mut().find(|g| g.question_id == answer.question_id) {
                Some(group) => group.entries.push(entry),
                None => groups.push(QuestionGroup {
                    question_id: &answer.question_id,
                    question_text: &answer.question,
                    entries: vec![entry],
                }),
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::mock::seed_responses;

    #[test]
    fn test_group_seed_responses() {
        let responses = seed_responses();
        let groups = group_by_question(&responses);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].question_id, "q1");
        assert_eq!(groups[0].question_text, "How satisfied are you?");
        assert_eq!(groups[0].entries.len(), 3);
        assert_eq!(groups[1].question_id, "q2");
        assert_eq!(groups[1].entries.len(), 2);

        let answers: Vec<&str> = groups[0].entries.iter().map(|e| e.answer).collect();
        assert_eq!(answers, vec!["Very satisfied", "Satisfied", "Neutral"]);
    }

    #[test]
    fn test_group_empty_input() {
        assert!(group_by_question(&[]).is_empty());
    }

    #[test]
    fn test_first_seen_order_and_text_win() {
        let mut responses = seed_responses();
        // Second response answers q2 before q1 and renames q1
        responses[0].answers.retain(|a| a.question_id == "q2");
        responses[1].answers[0].question = "Renamed".to_string();

        let groups = group_by_question(&responses);
        assert_eq!(groups[0].question_id, "q2");
        assert_eq!(groups[1].question_id, "q1");
        assert_eq!(groups[1].question_text, "Renamed");
    }
}
