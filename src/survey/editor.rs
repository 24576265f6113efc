use anyhow::{Result, bail};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::question::{Question, QuestionId, QuestionType};

/// A single-field edit applied to one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionUpdate {
    Text(String),
    Kind(QuestionType),
    Choices(Vec<String>),
    Expanded(bool),
}

/// Ordered, user-editable list of survey questions
///
/// All operations are lenient: an unknown id or an index outside the list
/// leaves the editor untouched. Mutating operations return whether anything
/// changed so callers can decide to re-render.
///
/// Question ids are unique within the list. Loading a list that repeats an id
/// fails instead of producing an editor where one id names two questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Question>", into = "Vec<Question>")]
pub struct SurveyEditor {
    questions: Vec<Question>,
}

impl SurveyEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_questions(questions: Vec<Question>) -> Result<Self> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(&question.id) {
                bail!("Duplicate question id '{}'", question.id);
            }
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| &q.id == id)
    }

    fn get_mut(&mut self, id: &QuestionId) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| &q.id == id)
    }

    /// Append a blank question and return its id
    pub fn add_question(&mut self) -> QuestionId {
        let question = Question::new();
        let id = question.id.clone();
        debug!("Adding question {}", id);
        self.questions.push(question);
        id
    }

    pub fn update(&mut self, id: &QuestionId, update: QuestionUpdate) -> bool {
        let Some(question) = self.get_mut(id) else {
            debug!("Ignoring update for unknown question {}", id);
            return false;
        };

        match update {
            QuestionUpdate::Text(text) => question.text = text,
            QuestionUpdate::Kind(kind) => question.kind = kind,
            QuestionUpdate::Choices(choices) => question.choices = choices,
            QuestionUpdate::Expanded(expanded) => question.is_expanded = expanded,
        }
        true
    }

    pub fn toggle_expanded(&mut self, id: &QuestionId) -> bool {
        match self.get(id).map(|q| q.is_expanded) {
            Some(expanded) => self.update(id, QuestionUpdate::Expanded(!expanded)),
            None => false,
        }
    }

    /// Append an empty choice to the question's choice list
    pub fn add_choice(&mut self, id: &QuestionId) -> bool {
        match self.get_mut(id) {
            Some(question) => {
                question.choices.push(String::new());
                true
            }
            None => false,
        }
    }

    pub fn update_choice(&mut self, id: &QuestionId, index: usize, value: impl Into<String>) -> bool {
        let Some(question) = self.get_mut(id) else {
            return false;
        };

        match question.choices.get_mut(index) {
            Some(choice) => {
                *choice = value.into();
                true
            }
            None => {
                debug!(
                    "Ignoring choice update at index {} for question {} ({} choices)",
                    index,
                    id,
                    question.choices.len()
                );
                false
            }
        }
    }

    pub fn remove_choice(&mut self, id: &QuestionId, index: usize) -> bool {
        let Some(question) = self.get_mut(id) else {
            return false;
        };

        if index >= question.choices.len() {
            debug!(
                "Ignoring choice removal at index {} for question {} ({} choices)",
                index,
                id,
                question.choices.len()
            );
            return false;
        }

        question.choices.remove(index);
        true
    }

    /// Move the question at `from` so that it ends up at index `to`
    ///
    /// `to == None` is a cancelled drag and leaves the list unchanged. A
    /// destination past the end moves the question to the end.
    pub fn reorder(&mut self, from: usize, to: Option<usize>) -> bool {
        let Some(to) = to else {
            return false;
        };
        if from >= self.questions.len() {
            debug!("Ignoring reorder from {} ({} questions)", from, self.questions.len());
            return false;
        }

        let question = self.questions.remove(from);
        let to = to.min(self.questions.len());
        self.questions.insert(to, question);
        from != to
    }

    pub fn move_up(&mut self, id: &QuestionId) -> bool {
        match self.position(id) {
            Some(pos) if pos > 0 => self.reorder(pos, Some(pos - 1)),
            _ => false,
        }
    }

    pub fn move_down(&mut self, id: &QuestionId) -> bool {
        match self.position(id) {
            Some(pos) if pos + 1 < self.questions.len() => self.reorder(pos, Some(pos + 1)),
            _ => false,
        }
    }

    pub fn remove_question(&mut self, id: &QuestionId) -> bool {
        let before = self.questions.len();
        self.questions.retain(|q| &q.id != id);
        before != self.questions.len()
    }
}

impl TryFrom<Vec<Question>> for SurveyEditor {
    type Error = anyhow::Error;

    fn try_from(questions: Vec<Question>) -> Result<Self> {
        Self::from_questions(questions)
    }
}

impl From<SurveyEditor> for Vec<Question> {
    fn from(editor: SurveyEditor) -> Self {
        editor.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(editor: &SurveyEditor) -> Vec<QuestionId> {
        editor.questions().iter().map(|q| q.id.clone()).collect()
    }

    #[test]
    fn test_add_question_appends_defaults() {
        let mut editor = SurveyEditor::new();
        let first = editor.add_question();
        let second = editor.add_question();

        assert_eq!(ids(&editor), vec![first, second]);
        assert!(editor.questions().iter().all(|q| q.kind == QuestionType::ShortAnswer));
        assert!(editor.questions().iter().all(|q| q.is_expanded));
    }

    #[test]
    fn test_update_fields() {
        let mut editor = SurveyEditor::new();
        let id = editor.add_question();

        assert!(editor.update(&id, QuestionUpdate::Text("How old are you?".into())));
        assert!(editor.update(&id, QuestionUpdate::Kind(QuestionType::MultipleChoice)));
        assert!(editor.update(&id, QuestionUpdate::Expanded(false)));

        let q = editor.get(&id).unwrap();
        assert_eq!(q.text, "How old are you?");
        assert_eq!(q.kind, QuestionType::MultipleChoice);
        assert!(!q.is_expanded);
    }

    #[test]
    fn test_update_unknown_id_is_ignored() {
        let mut editor = SurveyEditor::new();
        editor.add_question();
        let before = editor.clone();

        assert!(!editor.update(&QuestionId::from("missing"), QuestionUpdate::Text("x".into())));
        assert_eq!(editor, before);
    }

    #[test]
    fn test_toggle_expanded() {
        let mut editor = SurveyEditor::new();
        let id = editor.add_question();
        editor.toggle_expanded(&id);
        assert!(!editor.get(&id).unwrap().is_expanded);
        editor.toggle_expanded(&id);
        assert!(editor.get(&id).unwrap().is_expanded);
    }

    #[test]
    fn test_choice_operations() {
        let mut editor = SurveyEditor::new();
        let id = editor.add_question();

        assert!(editor.add_choice(&id));
        assert!(editor.add_choice(&id));
        assert!(editor.update_choice(&id, 0, "Yes"));
        assert!(editor.update_choice(&id, 1, "No"));
        assert_eq!(editor.get(&id).unwrap().choices, vec!["Yes", "No"]);

        assert!(editor.remove_choice(&id, 0));
        assert_eq!(editor.get(&id).unwrap().choices, vec!["No"]);
    }

    #[test]
    fn test_choice_index_out_of_range_is_ignored() {
        let mut editor = SurveyEditor::new();
        let id = editor.add_question();
        editor.add_choice(&id);

        assert!(!editor.update_choice(&id, 5, "nope"));
        assert!(!editor.remove_choice(&id, 1));
        assert_eq!(editor.get(&id).unwrap().choices, vec![String::new()]);
    }

    #[test]
    fn test_reorder_moves_element() {
        let mut editor = SurveyEditor::new();
        let a = editor.add_question();
        let b = editor.add_question();
        let c = editor.add_question();

        assert!(editor.reorder(0, Some(2)));
        assert_eq!(ids(&editor), vec![b.clone(), c.clone(), a.clone()]);

        assert!(editor.reorder(2, Some(0)));
        assert_eq!(ids(&editor), vec![a, b, c]);
    }

    #[test]
    fn test_reorder_cancelled_drag_is_noop() {
        let mut editor = SurveyEditor::new();
        editor.add_question();
        editor.add_question();
        let before = ids(&editor);

        assert!(!editor.reorder(0, None));
        assert_eq!(ids(&editor), before);
    }

    #[test]
    fn test_reorder_out_of_range() {
        let mut editor = SurveyEditor::new();
        let a = editor.add_question();
        let b = editor.add_question();

        assert!(!editor.reorder(7, Some(0)));
        assert_eq!(ids(&editor), vec![a.clone(), b.clone()]);

        // Destination past the end clamps to the end
        assert!(editor.reorder(0, Some(10)));
        assert_eq!(ids(&editor), vec![b, a]);
    }

    #[test]
    fn test_move_up_and_down() {
        let mut editor = SurveyEditor::new();
        let a = editor.add_question();
        let b = editor.add_question();

        assert!(!editor.move_up(&a));
        assert!(!editor.move_down(&b));
        assert!(editor.move_down(&a));
        assert_eq!(ids(&editor), vec![b.clone(), a.clone()]);
        assert!(editor.move_up(&a));
        assert_eq!(ids(&editor), vec![a, b]);
    }

    #[test]
    fn test_from_questions_rejects_duplicate_ids() {
        let mut a = Question::new();
        a.id = QuestionId::from("q1");
        let mut b = Question::new();
        b.id = QuestionId::from("q1");

        let err = SurveyEditor::from_questions(vec![a.clone(), b]).unwrap_err();
        assert!(err.to_string().contains("q1"));
        assert_eq!(SurveyEditor::from_questions(vec![a]).unwrap().len(), 1);
    }

    #[test]
    fn test_remove_question() {
        let mut editor = SurveyEditor::new();
        let a = editor.add_question();
        let b = editor.add_question();
        let c = editor.add_question();

        assert!(editor.remove_question(&b));
        assert!(!editor.remove_question(&b));
        assert_eq!(ids(&editor), vec![a, c]);
    }
}
