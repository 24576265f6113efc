use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a question within a survey draft
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(String);

impl QuestionId {
    /// Generate a fresh, unique id
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for QuestionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    #[default]
    ShortAnswer,
    AllOfTheAbove,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [
        QuestionType::MultipleChoice,
        QuestionType::ShortAnswer,
        QuestionType::AllOfTheAbove,
    ];

    /// Name used in previews and serialized drafts
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::ShortAnswer => "short_answer",
            QuestionType::AllOfTheAbove => "all_of_the_above",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::ShortAnswer => "Short Answer",
            QuestionType::AllOfTheAbove => "All of the Above",
        }
    }

    /// Whether the editor offers a choice list for this type
    pub fn accepts_choices(&self) -> bool {
        matches!(self, QuestionType::MultipleChoice | QuestionType::AllOfTheAbove)
    }

    /// The next type in `ALL`, wrapping around
    pub fn cycle(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default = "default_expanded")]
    pub is_expanded: bool,
}

fn default_expanded() -> bool {
    true
}

impl Question {
    /// A blank short-answer question, expanded for editing
    pub fn new() -> Self {
        Self {
            id: QuestionId::new(),
            text: String::new(),
            kind: QuestionType::default(),
            choices: Vec::new(),
            is_expanded: true,
        }
    }
}

impl Default for Question {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_question_defaults() {
        let q = Question::new();
        assert!(q.text.is_empty());
        assert_eq!(q.kind, QuestionType::ShortAnswer);
        assert!(q.choices.is_empty());
        assert!(q.is_expanded);
    }

    #[test]
    fn test_question_ids_are_unique() {
        let a = Question::new();
        let b = Question::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_question_type_names() {
        assert_eq!(QuestionType::MultipleChoice.as_str(), "multiple_choice");
        assert_eq!(QuestionType::AllOfTheAbove.label(), "All of the Above");
        assert!(!QuestionType::ShortAnswer.accepts_choices());
        assert!(QuestionType::AllOfTheAbove.accepts_choices());
    }

    #[test]
    fn test_question_type_cycle_wraps() {
        assert_eq!(QuestionType::MultipleChoice.cycle(), QuestionType::ShortAnswer);
        assert_eq!(QuestionType::AllOfTheAbove.cycle(), QuestionType::MultipleChoice);
    }

    #[test]
    fn test_question_deserializes_wire_names() {
        let json = r#"{"id":"q1","text":"Age?","type":"multiple_choice","choices":["18-25"]}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id.as_str(), "q1");
        assert_eq!(q.kind, QuestionType::MultipleChoice);
        assert!(q.is_expanded);
    }
}
