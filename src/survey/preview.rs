use std::fmt::Write;

use super::question::Question;

/// Render the plain-text preview of a survey
pub fn render(
    title: &str,
    topic: &str,
    target: &str,
    demographics: &[String],
    tone: &[String],
    questions: &[Question],
) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Survey Title: {}", title);
    let _ = writeln!(out, "Topic: {}", topic);
    let _ = writeln!(out, "Target: {}", target);
    let _ = writeln!(out, "Demographics: {}", demographics.join(", "));
    let _ = writeln!(out, "Tone: {}", tone.join(", "));
    out.push('\n');
    out.push_str("Questions:\n");

    for (i, question) in questions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, question.text);
        let _ = writeln!(out, "     Type: {}", question.kind.as_str());
        if !question.choices.is_empty() {
            out.push_str("     Choices:\n");
            for (j, choice) in question.choices.iter().enumerate() {
                let _ = writeln!(out, "       {}. {}", j + 1, choice);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::question::QuestionType;
    use pretty_assertions::assert_eq;

    fn question(text: &str, kind: QuestionType, choices: &[&str]) -> Question {
        Question {
            text: text.to_string(),
            kind,
            choices: choices.iter().map(|c| c.to_string()).collect(),
            ..Question::new()
        }
    }

    #[test]
    fn test_render_full_layout() {
        let questions = vec![
            question("How old are you?", QuestionType::MultipleChoice, &["18-25", "26-40"]),
            question("Anything else?", QuestionType::ShortAnswer, &[]),
        ];
        let out = render(
            "Customer Pulse",
            "Retail",
            "Shoppers",
            &["age".into(), "zipcode".into()],
            &["friendly".into()],
            &questions,
        );

        let expected = "\
Survey Title: Customer Pulse
Topic: Retail
Target: Shoppers
Demographics: age, zipcode
Tone: friendly

Questions:
  1. How old are you?
     Type: multiple_choice
     Choices:
       1. 18-25
       2. 26-40
  2. Anything else?
     Type: short_answer
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_empty_survey() {
        let out = render("", "", "", &[], &[], &[]);
        assert!(out.starts_with("Survey Title: \n"));
        assert!(out.ends_with("Questions:\n"));
    }

    #[test]
    fn test_render_title_is_verbatim() {
        let out = render("  Spaces & <tags>  ", "", "", &[], &[], &[]);
        assert!(out.contains("Survey Title:   Spaces & <tags>  \n"));
    }
}
