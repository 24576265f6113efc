use crossterm::event::KeyCode;
use log::debug;
use ratatui::prelude::Stylize;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::survey::{Question, QuestionId, QuestionUpdate, SurveyDraft, TagKind};
use crate::tui::element::{ColumnBuilder, RowBuilder};
use crate::tui::widgets::{ListState, TextInputState};
use crate::tui::{App, AppContext, Command, Element, FocusId, LayoutConstraint, Route, Subscription, Theme};

const TITLE_ID: FocusId = FocusId::new("survey-title");
const TOPIC_ID: FocusId = FocusId::new("survey-topic");
const TARGET_ID: FocusId = FocusId::new("survey-target");
const DEMOGRAPHICS_ID: FocusId = FocusId::new("demographics");
const TONE_ID: FocusId = FocusId::new("tone");
const QUESTIONS_ID: FocusId = FocusId::new("questions");
const QUESTION_TEXT_ID: FocusId = FocusId::new("question-text");
const CHOICES_ID: FocusId = FocusId::new("choices");
const CHOICE_INPUT_ID: FocusId = FocusId::new("choice-input");
const PREVIEW_ID: FocusId = FocusId::new("preview");

const FIELD_MAX_LENGTH: usize = 200;

/// Survey design page: details, tags, the question editor and the preview
pub struct SurveyDesignApp;

#[derive(Clone)]
pub enum Msg {
    TitleChanged(KeyCode),
    TopicChanged(KeyCode),
    TargetChanged(KeyCode),

    DemographicsNavigate(KeyCode),
    DemographicsToggle(usize),
    ToneNavigate(KeyCode),
    ToneToggle(usize),

    QuestionsNavigate(KeyCode),
    QuestionsViewport(usize),
    QuestionSelect(usize),
    QuestionToggleExpanded(usize),
    AddQuestion,
    DeleteQuestion,
    MoveQuestionUp,
    MoveQuestionDown,
    CycleQuestionType,
    EditQuestionText,
    QuestionTextChanged(KeyCode),

    ChoicesNavigate(KeyCode),
    ChoiceEdit(usize),
    ChoiceInputChanged(KeyCode),
    SubmitChoice,
    FocusChoiceInput,
    RemoveChoice,

    TogglePreview,
    PreviewNavigate(KeyCode),
    PreviewViewport(usize),

    OpenDashboard,
    OpenSharing,
}

pub struct State {
    pub project_id: u32,
    pub draft: SurveyDraft,

    title_state: TextInputState,
    topic_state: TextInputState,
    target_state: TextInputState,
    pub demographics_list: ListState,
    pub tone_list: ListState,

    pub questions_list: ListState,
    question_text_state: TextInputState,
    pub choices_list: ListState,
    pub choice_input: String,
    choice_input_state: TextInputState,
    /// Index of the choice being edited through the choice input, if any
    pub editing_choice: Option<usize>,

    pub show_preview: bool,
    pub preview_list: ListState,
}

impl State {
    fn new(project_id: u32) -> Self {
        Self {
            project_id,
            draft: SurveyDraft::new(),
            title_state: TextInputState::new(),
            topic_state: TextInputState::new(),
            target_state: TextInputState::new(),
            demographics_list: ListState::with_selection(),
            tone_list: ListState::with_selection(),
            questions_list: ListState::new(),
            question_text_state: TextInputState::new(),
            choices_list: ListState::new(),
            choice_input: String::new(),
            choice_input_state: TextInputState::new(),
            editing_choice: None,
            show_preview: false,
            preview_list: ListState::new().with_wrap_around(false),
        }
    }

    pub fn selected_question(&self) -> Option<&Question> {
        self.questions_list
            .selected()
            .and_then(|idx| self.draft.questions.questions().get(idx))
    }

    fn selected_id(&self) -> Option<QuestionId> {
        self.selected_question().map(|q| q.id.clone())
    }

    fn choice_count(&self) -> usize {
        self.selected_question().map_or(0, |q| q.choices.len())
    }

    /// Reset per-question editing state after the selection changed
    fn on_question_changed(&mut self) {
        self.question_text_state = TextInputState::new();
        let text = self.selected_question().map(|q| q.text.clone()).unwrap_or_default();
        self.question_text_state.set_cursor_to_end(&text);
        self.choices_list = ListState::new();
        self.clear_choice_input();
    }

    fn clear_choice_input(&mut self) {
        self.choice_input.clear();
        self.choice_input_state = TextInputState::new();
        self.editing_choice = None;
    }

    fn select_question(&mut self, idx: Option<usize>) {
        let before = self.questions_list.selected();
        self.questions_list.select(idx, self.draft.questions.len());
        if before != self.questions_list.selected() {
            self.on_question_changed();
        }
    }

    fn toggle_tag(&mut self, kind: TagKind, idx: usize) {
        let Some(option) = self.draft.tags(kind).options().get(idx) else {
            return;
        };
        let list = match kind {
            TagKind::Demographics => &mut self.demographics_list,
            TagKind::Tone => &mut self.tone_list,
        };
        list.select(Some(idx), kind.options().len());
        self.draft.tags_mut(kind).toggle(option.value);
    }
}

fn edit_field(field: &mut String, input: &mut TextInputState, key: KeyCode) {
    if let Some(value) = input.handle_key(key, field, Some(FIELD_MAX_LENGTH)) {
        *field = value;
    }
}

impl App for SurveyDesignApp {
    type State = State;
    type Msg = Msg;

    fn init(ctx: &AppContext) -> (State, Command<Msg>) {
        (State::new(ctx.project_id), Command::set_focus(TITLE_ID))
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::TitleChanged(key) => {
                edit_field(&mut state.draft.title, &mut state.title_state, key);
                Command::None
            }
            Msg::TopicChanged(key) => {
                edit_field(&mut state.draft.topic, &mut state.topic_state, key);
                Command::None
            }
            Msg::TargetChanged(key) => {
                edit_field(&mut state.draft.target, &mut state.target_state, key);
                Command::None
            }

            Msg::DemographicsNavigate(key) => {
                state.demographics_list.handle_key(key, TagKind::Demographics.options().len());
                Command::None
            }
            Msg::DemographicsToggle(idx) => {
                state.toggle_tag(TagKind::Demographics, idx);
                Command::None
            }
            Msg::ToneNavigate(key) => {
                state.tone_list.handle_key(key, TagKind::Tone.options().len());
                Command::None
            }
            Msg::ToneToggle(idx) => {
                state.toggle_tag(TagKind::Tone, idx);
                Command::None
            }

            Msg::QuestionsNavigate(key) => {
                let before = state.questions_list.selected();
                state.questions_list.handle_key(key, state.draft.questions.len());
                if before != state.questions_list.selected() {
                    state.on_question_changed();
                }
                Command::None
            }
            Msg::QuestionsViewport(height) => {
                state.questions_list.set_viewport_height(height);
                state.questions_list.update_scroll(height, state.draft.questions.len());
                Command::None
            }
            Msg::QuestionSelect(idx) => {
                state.select_question(Some(idx));
                Command::None
            }
            Msg::QuestionToggleExpanded(idx) => {
                state.select_question(Some(idx));
                if let Some(id) = state.selected_id() {
                    state.draft.questions.toggle_expanded(&id);
                }
                Command::None
            }
            Msg::AddQuestion => {
                state.draft.questions.add_question();
                let last = state.draft.questions.len() - 1;
                state.select_question(Some(last));
                Command::set_focus(QUESTION_TEXT_ID)
            }
            Msg::DeleteQuestion => {
                if let Some(id) = state.selected_id() {
                    state.draft.questions.remove_question(&id);
                    state.questions_list.clamp(state.draft.questions.len());
                    state.on_question_changed();
                }
                Command::None
            }
            Msg::MoveQuestionUp | Msg::MoveQuestionDown => {
                let Some(id) = state.selected_id() else {
                    return Command::None;
                };
                let moved = match msg {
                    Msg::MoveQuestionUp => state.draft.questions.move_up(&id),
                    _ => state.draft.questions.move_down(&id),
                };
                // The selection follows the moved question
                if moved {
                    let pos = state.draft.questions.position(&id);
                    state.questions_list.select(pos, state.draft.questions.len());
                }
                Command::None
            }
            Msg::CycleQuestionType => {
                if let Some(question) = state.selected_question() {
                    let (id, kind) = (question.id.clone(), question.kind.cycle());
                    state.draft.questions.update(&id, QuestionUpdate::Kind(kind));
                }
                Command::None
            }
            Msg::EditQuestionText => {
                if state.selected_question().is_some() {
                    Command::set_focus(QUESTION_TEXT_ID)
                } else {
                    Command::None
                }
            }
            Msg::QuestionTextChanged(key) => {
                let Some(question) = state.selected_question() else {
                    return Command::None;
                };
                let (id, text) = (question.id.clone(), question.text.clone());
                if let Some(value) = state.question_text_state.handle_key(key, &text, Some(FIELD_MAX_LENGTH)) {
                    state.draft.questions.update(&id, QuestionUpdate::Text(value));
                }
                Command::None
            }

            Msg::ChoicesNavigate(key) => {
                state.choices_list.handle_key(key, state.choice_count());
                Command::None
            }
            Msg::ChoiceEdit(idx) => {
                let Some(choice) = state.selected_question().and_then(|q| q.choices.get(idx)).cloned() else {
                    return Command::None;
                };
                state.choices_list.select(Some(idx), state.choice_count());
                state.choice_input_state = TextInputState::new();
                state.choice_input_state.set_cursor_to_end(&choice);
                state.choice_input = choice;
                state.editing_choice = Some(idx);
                Command::set_focus(CHOICE_INPUT_ID)
            }
            Msg::ChoiceInputChanged(key) => {
                edit_field(&mut state.choice_input, &mut state.choice_input_state, key);
                Command::None
            }
            Msg::SubmitChoice => {
                let Some(id) = state.selected_id() else {
                    return Command::None;
                };
                let value = state.choice_input.trim().to_string();
                match state.editing_choice {
                    Some(idx) => {
                        state.draft.questions.update_choice(&id, idx, value);
                    }
                    None if !value.is_empty() => {
                        state.draft.questions.add_choice(&id);
                        let last = state.choice_count() - 1;
                        state.draft.questions.update_choice(&id, last, value);
                        state.choices_list.select(Some(last), state.choice_count());
                    }
                    None => debug!("Ignoring blank choice"),
                }
                state.clear_choice_input();
                Command::None
            }
            Msg::FocusChoiceInput => {
                match state.selected_question() {
                    Some(q) if q.kind.accepts_choices() => {
                        state.clear_choice_input();
                        Command::set_focus(CHOICE_INPUT_ID)
                    }
                    _ => Command::None,
                }
            }
            Msg::RemoveChoice => {
                if let (Some(id), Some(idx)) = (state.selected_id(), state.choices_list.selected()) {
                    state.draft.questions.remove_choice(&id, idx);
                    state.choices_list.clamp(state.choice_count());
                    state.clear_choice_input();
                }
                Command::None
            }

            Msg::TogglePreview => {
                state.show_preview = !state.show_preview;
                state.preview_list = ListState::new().with_wrap_around(false);
                if state.show_preview {
                    Command::set_focus(PREVIEW_ID)
                } else {
                    Command::set_focus(QUESTIONS_ID)
                }
            }
            Msg::PreviewNavigate(key) => {
                let lines = state.draft.preview().lines().count();
                state.preview_list.handle_key(key, lines);
                Command::None
            }
            Msg::PreviewViewport(height) => {
                state.preview_list.set_viewport_height(height);
                Command::None
            }

            Msg::OpenDashboard => Command::navigate(Route::Dashboard(state.project_id)),
            Msg::OpenSharing => Command::navigate(Route::Sharing(state.project_id)),
        }
    }

    fn view(state: &State, theme: &Theme) -> Element<Msg> {
        let left = ColumnBuilder::new()
            .add(details_panel(state, theme), LayoutConstraint::Length(11))
            .add(
                RowBuilder::new()
                    .add(tag_panel(state, theme, TagKind::Demographics), LayoutConstraint::Fill(1))
                    .add(tag_panel(state, theme, TagKind::Tone), LayoutConstraint::Fill(1))
                    .build(),
                LayoutConstraint::Length(6),
            )
            .add(
                Element::styled(
                    " a add · x delete · Shift+↑↓ move · t type · e edit · c choice · r remove choice · v preview",
                    theme.muted_style(),
                ),
                LayoutConstraint::Min(1),
            )
            .spacing(0)
            .build();

        let right = if state.show_preview {
            preview_panel(state, theme)
        } else {
            ColumnBuilder::new()
                .add(questions_panel(state, theme), LayoutConstraint::Fill(1))
                .add(question_editor(state, theme), LayoutConstraint::Fill(1))
                .spacing(0)
                .build()
        };

        RowBuilder::new()
            .add(left, LayoutConstraint::Fill(1))
            .add(right, LayoutConstraint::Fill(1))
            .build()
    }

    fn subscriptions(state: &State) -> Vec<Subscription<Msg>> {
        let mut subs = vec![
            Subscription::keyboard(KeyCode::Char('a'), "Add question", Msg::AddQuestion),
            Subscription::keyboard(KeyCode::Char('v'), "Toggle preview", Msg::TogglePreview),
            Subscription::keyboard(KeyCode::Char('d'), "Open dashboard", Msg::OpenDashboard),
            Subscription::keyboard(KeyCode::Char('s'), "Share survey", Msg::OpenSharing),
        ];

        if state.selected_question().is_some() {
            subs.extend([
                Subscription::keyboard(KeyCode::Char('x'), "Delete question", Msg::DeleteQuestion),
                Subscription::shift_key(KeyCode::Up, "Move question up", Msg::MoveQuestionUp),
                Subscription::shift_key(KeyCode::Down, "Move question down", Msg::MoveQuestionDown),
                Subscription::keyboard(KeyCode::Char('t'), "Cycle question type", Msg::CycleQuestionType),
                Subscription::keyboard(KeyCode::Char('e'), "Edit question text", Msg::EditQuestionText),
                Subscription::keyboard(KeyCode::Char('c'), "Add choice", Msg::FocusChoiceInput),
                Subscription::keyboard(KeyCode::Char('r'), "Remove selected choice", Msg::RemoveChoice),
            ]);
        }

        subs
    }

    fn title() -> &'static str {
        "Survey Design"
    }

    fn status(state: &State, theme: &Theme) -> Option<Line<'static>> {
        let title = if state.draft.title.is_empty() {
            "Untitled survey".to_string()
        } else {
            state.draft.title.clone()
        };
        Some(Line::from(vec![
            Span::styled(title, Style::default().fg(theme.text)),
            Span::styled(
                format!(" ({} questions)", state.draft.questions.len()),
                Style::default().fg(theme.overlay1),
            ),
        ]))
    }
}

fn labelled_input(label: &str, input: Element<Msg>, theme: &Theme) -> Element<Msg> {
    ColumnBuilder::new()
        .add(Element::styled(label, Style::default().fg(theme.subtext1)), LayoutConstraint::Length(1))
        .add(input, LayoutConstraint::Length(1))
        .spacing(0)
        .build()
}

fn details_panel(state: &State, theme: &Theme) -> Element<Msg> {
    let title = Element::text_input(TITLE_ID, &state.draft.title, &state.title_state)
        .placeholder("Enter survey title")
        .max_length(FIELD_MAX_LENGTH)
        .on_change(Msg::TitleChanged)
        .build();
    let topic = Element::text_input(TOPIC_ID, &state.draft.topic, &state.topic_state)
        .placeholder("What is the survey about?")
        .max_length(FIELD_MAX_LENGTH)
        .on_change(Msg::TopicChanged)
        .build();
    let target = Element::text_input(TARGET_ID, &state.draft.target, &state.target_state)
        .placeholder("Who should answer it?")
        .max_length(FIELD_MAX_LENGTH)
        .on_change(Msg::TargetChanged)
        .build();

    Element::panel(
        ColumnBuilder::new()
            .add(labelled_input("Survey Title", title, theme), LayoutConstraint::Length(2))
            .add(labelled_input("Survey Topic", topic, theme), LayoutConstraint::Length(2))
            .add(labelled_input("Target Audience", target, theme), LayoutConstraint::Length(2))
            .spacing(1)
            .build(),
    )
    .title("Survey Details")
    .build()
}

fn tag_panel(state: &State, theme: &Theme, kind: TagKind) -> Element<Msg> {
    let tags = state.draft.tags(kind);
    let list_state = match kind {
        TagKind::Demographics => &state.demographics_list,
        TagKind::Tone => &state.tone_list,
    };

    let rows = tags
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let checked = tags.contains(option.value);
            let mark = if checked { "[x] " } else { "[ ] " };
            let color = if checked { theme.green } else { theme.text };
            let mut builder = Element::styled_text(Line::from(vec![
                Span::styled(mark, Style::default().fg(theme.overlay1)),
                Span::styled(option.label, Style::default().fg(color)),
            ]));
            if list_state.selected() == Some(i) {
                builder = builder.background(theme.selected_style());
            }
            builder.build()
        })
        .collect();

    let list = match kind {
        TagKind::Demographics => Element::list_of(DEMOGRAPHICS_ID, rows, list_state)
            .on_select(Msg::DemographicsToggle)
            .on_activate(Msg::DemographicsToggle)
            .on_navigate(Msg::DemographicsNavigate),
        TagKind::Tone => Element::list_of(TONE_ID, rows, list_state)
            .on_select(Msg::ToneToggle)
            .on_activate(Msg::ToneToggle)
            .on_navigate(Msg::ToneNavigate),
    }
    .build();

    Element::panel(list).title(kind.label()).build()
}

fn questions_panel(state: &State, theme: &Theme) -> Element<Msg> {
    if state.draft.questions.is_empty() {
        return Element::panel(Element::styled(
            "No questions yet. Press 'a' to add one.",
            theme.muted_style(),
        ))
        .title("Questions")
        .build();
    }

    let rows = state
        .draft
        .questions
        .questions()
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let expander = if q.is_expanded { "▼" } else { "▶" };
            let text = if q.text.is_empty() { "(untitled question)" } else { q.text.as_str() };
            let mut builder = Element::styled_text(Line::from(vec![
                Span::styled(format!("{:>2}. {} ", i + 1, expander), Style::default().fg(theme.overlay1)),
                Span::styled(text.to_string(), Style::default().fg(theme.text)),
                Span::styled(format!("  [{}]", q.kind.label()), Style::default().fg(theme.mauve)),
            ]));
            if state.questions_list.selected() == Some(i) {
                builder = builder.background(theme.selected_style());
            }
            builder.build()
        })
        .collect();

    let list = Element::list_of(QUESTIONS_ID, rows, &state.questions_list)
        .on_select(Msg::QuestionSelect)
        .on_activate(Msg::QuestionToggleExpanded)
        .on_navigate(Msg::QuestionsNavigate)
        .on_render(Msg::QuestionsViewport)
        .build();

    Element::panel(list).title("Questions").build()
}

fn question_editor(state: &State, theme: &Theme) -> Element<Msg> {
    let Some(question) = state.selected_question() else {
        return Element::panel(Element::styled("Select a question to edit it.", theme.muted_style()))
            .title("Question")
            .build();
    };

    if !question.is_expanded {
        return Element::panel(Element::styled(
            "Collapsed. Press Enter in the question list to expand.",
            theme.muted_style(),
        ))
        .title("Question")
        .build();
    }

    let text_input = Element::text_input(QUESTION_TEXT_ID, &question.text, &state.question_text_state)
        .placeholder("Enter your question")
        .max_length(FIELD_MAX_LENGTH)
        .on_change(Msg::QuestionTextChanged)
        .build();

    let type_line = Element::styled_text(Line::from(vec![
        Span::styled("Type: ", Style::default().fg(theme.subtext1)),
        Span::styled(question.kind.label(), Style::default().fg(theme.mauve).bold()),
        Span::styled("  (t to change)", theme.muted_style()),
    ]))
    .build();

    let mut body = ColumnBuilder::new()
        .add(labelled_input("Question", text_input, theme), LayoutConstraint::Length(2))
        .add(type_line, LayoutConstraint::Length(1));

    if question.kind.accepts_choices() {
        let rows = question
            .choices
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                let label = if choice.is_empty() { "(empty)" } else { choice.as_str() };
                let mut builder = Element::styled_text(Line::from(vec![
                    Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(theme.overlay1)),
                    Span::styled(label.to_string(), Style::default().fg(theme.text)),
                ]));
                if state.choices_list.selected() == Some(i) {
                    builder = builder.background(theme.selected_style());
                }
                builder.build()
            })
            .collect();

        let choices = Element::list_of(CHOICES_ID, rows, &state.choices_list)
            .on_select(Msg::ChoiceEdit)
            .on_activate(Msg::ChoiceEdit)
            .on_navigate(Msg::ChoicesNavigate)
            .build();

        let placeholder = match state.editing_choice {
            Some(idx) => format!("Edit choice {}", idx + 1),
            None => "Add a choice".to_string(),
        };
        let choice_input = Element::text_input(CHOICE_INPUT_ID, &state.choice_input, &state.choice_input_state)
            .placeholder(placeholder)
            .max_length(FIELD_MAX_LENGTH)
            .on_change(Msg::ChoiceInputChanged)
            .on_submit(Msg::SubmitChoice)
            .build();

        body = body
            .add(Element::styled("Choices", Style::default().fg(theme.subtext1)), LayoutConstraint::Length(1))
            .add(choices, LayoutConstraint::Fill(1))
            .add(choice_input, LayoutConstraint::Length(1));
    }

    Element::panel(body.spacing(0).build())
        .title(format!("Question {}", state.questions_list.selected().map_or(0, |i| i + 1)))
        .build()
}

fn preview_panel(state: &State, theme: &Theme) -> Element<Msg> {
    let rows = state
        .draft
        .preview()
        .lines()
        .map(|line| Element::styled(line.to_string(), Style::default().fg(theme.text)))
        .collect();

    let list = Element::list_of(PREVIEW_ID, rows, &state.preview_list)
        .on_navigate(Msg::PreviewNavigate)
        .on_render(Msg::PreviewViewport)
        .build();

    Element::panel(list).title("Survey Preview").build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::survey::QuestionType;
    use ratatui::{Terminal, backend::TestBackend};

    fn init() -> State {
        SurveyDesignApp::init(&AppContext::new(1, Config::default())).0
    }

    fn type_into(state: &mut State, to_msg: fn(KeyCode) -> Msg, text: &str) {
        for c in text.chars() {
            SurveyDesignApp::update(state, to_msg(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_details_fields_are_edited() {
        let mut state = init();
        type_into(&mut state, Msg::TitleChanged, "Team pulse");
        type_into(&mut state, Msg::TopicChanged, "Morale");
        SurveyDesignApp::update(&mut state, Msg::TitleChanged(KeyCode::Backspace));

        assert_eq!(state.draft.title, "Team puls");
        assert_eq!(state.draft.topic, "Morale");
    }

    #[test]
    fn test_add_question_selects_and_focuses_text() {
        let mut state = init();
        let command = SurveyDesignApp::update(&mut state, Msg::AddQuestion);

        assert!(matches!(command, Command::SetFocus(id) if id == QUESTION_TEXT_ID));
        assert_eq!(state.questions_list.selected(), Some(0));

        type_into(&mut state, Msg::QuestionTextChanged, "How old are you?");
        assert_eq!(state.selected_question().unwrap().text, "How old are you?");
    }

    #[test]
    fn test_move_keeps_selection_on_moved_question() {
        let mut state = init();
        SurveyDesignApp::update(&mut state, Msg::AddQuestion);
        type_into(&mut state, Msg::QuestionTextChanged, "First");
        SurveyDesignApp::update(&mut state, Msg::AddQuestion);
        type_into(&mut state, Msg::QuestionTextChanged, "Second");

        SurveyDesignApp::update(&mut state, Msg::MoveQuestionUp);

        let texts: Vec<&str> = state.draft.questions.questions().iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["Second", "First"]);
        assert_eq!(state.selected_question().unwrap().text, "Second");
    }

    #[test]
    fn test_choices_add_edit_remove() {
        let mut state = init();
        SurveyDesignApp::update(&mut state, Msg::AddQuestion);
        SurveyDesignApp::update(&mut state, Msg::CycleQuestionType);
        SurveyDesignApp::update(&mut state, Msg::CycleQuestionType);
        assert_eq!(state.selected_question().unwrap().kind, QuestionType::MultipleChoice);

        SurveyDesignApp::update(&mut state, Msg::FocusChoiceInput);
        type_into(&mut state, Msg::ChoiceInputChanged, "Yes");
        SurveyDesignApp::update(&mut state, Msg::SubmitChoice);
        type_into(&mut state, Msg::ChoiceInputChanged, "No");
        SurveyDesignApp::update(&mut state, Msg::SubmitChoice);
        assert_eq!(state.selected_question().unwrap().choices, vec!["Yes", "No"]);

        SurveyDesignApp::update(&mut state, Msg::ChoiceEdit(0));
        assert_eq!(state.choice_input, "Yes");
        type_into(&mut state, Msg::ChoiceInputChanged, "!");
        SurveyDesignApp::update(&mut state, Msg::SubmitChoice);
        assert_eq!(state.selected_question().unwrap().choices, vec!["Yes!", "No"]);

        SurveyDesignApp::update(&mut state, Msg::RemoveChoice);
        assert_eq!(state.selected_question().unwrap().choices, vec!["No"]);
    }

    #[test]
    fn test_tag_toggle() {
        let mut state = init();
        SurveyDesignApp::update(&mut state, Msg::DemographicsToggle(0));
        SurveyDesignApp::update(&mut state, Msg::DemographicsToggle(3));
        assert_eq!(state.draft.demographics.values(), ["age", "zipcode"]);

        SurveyDesignApp::update(&mut state, Msg::DemographicsToggle(0));
        assert_eq!(state.draft.demographics.values(), ["zipcode"]);

        SurveyDesignApp::update(&mut state, Msg::ToneToggle(9));
        assert!(state.draft.tone.is_empty());
    }

    #[test]
    fn test_delete_and_collapse() {
        let mut state = init();
        SurveyDesignApp::update(&mut state, Msg::AddQuestion);
        SurveyDesignApp::update(&mut state, Msg::QuestionToggleExpanded(0));
        assert!(!state.selected_question().unwrap().is_expanded);

        SurveyDesignApp::update(&mut state, Msg::DeleteQuestion);
        assert!(state.draft.questions.is_empty());
        assert_eq!(state.questions_list.selected(), None);
    }

    #[test]
    fn test_preview_renders() {
        let mut state = init();
        type_into(&mut state, Msg::TitleChanged, "Pulse");
        SurveyDesignApp::update(&mut state, Msg::AddQuestion);
        SurveyDesignApp::update(&mut state, Msg::TogglePreview);

        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|frame| {
                let view = SurveyDesignApp::view(&state, &theme);
                let mut registry = crate::tui::renderer::InteractionRegistry::new();
                let mut focus = crate::tui::renderer::FocusRegistry::new();
                crate::tui::Renderer::render(frame, &theme, &mut registry, &mut focus, None, &view, frame.area());
            })
            .unwrap();

        let screen: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("Survey Title: Pulse"));
        assert!(screen.contains("Survey Preview"));
    }
}
