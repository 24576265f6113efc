use crossterm::event::KeyCode;
use ratatui::prelude::Stylize;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::format::format_duration;
use crate::responses::{Response, ResponseFilter, ResponseStatus, group_by_question, seed_responses};
use crate::tui::element::ColumnBuilder;
use crate::tui::widgets::ListState;
use crate::tui::{App, AppContext, Command, Element, FocusId, LayoutConstraint, Route, Subscription, Theme};

const ROWS_ID: FocusId = FocusId::new("response-rows");
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Raw responses, as a table or grouped by question
pub struct ResponsesApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Table,
    ByQuestion,
}

#[derive(Clone)]
pub enum Msg {
    Navigate(KeyCode),
    Viewport(usize),
    ToggleView,
    CycleFilter,
    OpenDashboard,
}

pub struct State {
    pub project_id: u32,
    pub responses: Vec<Response>,
    pub filter: ResponseFilter,
    pub view_mode: ViewMode,
    pub list_state: ListState,
}

impl State {
    pub fn visible(&self) -> Vec<Response> {
        self.filter.apply(&self.responses).into_iter().cloned().collect()
    }

    /// Display rows of the current view, as (style kind, text)
    pub fn rows(&self) -> Vec<(RowKind, String)> {
        let visible = self.visible();
        match self.view_mode {
            ViewMode::Table => table_rows(&visible),
            ViewMode::ByQuestion => question_rows(&visible),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header,
    Body,
    Partial,
    Empty,
}

fn table_rows(responses: &[Response]) -> Vec<(RowKind, String)> {
    // One answer column per question, in first-seen order
    let questions: Vec<(String, String)> = group_by_question(responses)
        .iter()
        .map(|g| (g.question_id.to_string(), g.question_text.to_string()))
        .collect();

    let mut header = format!("{:<14} {:<17} {:<10} {:<10}", "Respondent", "Completed At", "Time Spent", "Status");
    for (_, text) in &questions {
        header.push_str(&format!(" {:<24.24}", text));
    }

    let mut rows = vec![(RowKind::Header, header)];
    for response in responses {
        let mut line = format!(
            "{:<14} {:<17} {:<10} {:<10}",
            response.respondent,
            response.completed_at.format(DATE_FORMAT).to_string(),
            format_duration(response.time_spent),
            response.status.as_str(),
        );
        for (id, _) in &questions {
            let answer = response.answer_for(id).map_or("-", |a| a.answer.as_str());
            line.push_str(&format!(" {:<24.24}", answer));
        }
        let kind = match response.status {
            ResponseStatus::Completed => RowKind::Body,
            ResponseStatus::Partial => RowKind::Partial,
        };
        rows.push((kind, line));
    }

    if responses.is_empty() {
        rows.push((RowKind::Empty, "No responses match the filter.".to_string()));
    }
    rows
}

fn question_rows(responses: &[Response]) -> Vec<(RowKind, String)> {
    let groups = group_by_question(responses);
    if groups.is_empty() {
        return vec![(RowKind::Empty, "No responses match the filter.".to_string())];
    }

    let mut rows = Vec::new();
    for group in groups {
        rows.push((
            RowKind::Header,
            format!("{} ({} answers)", group.question_text, group.entries.len()),
        ));
        for entry in &group.entries {
            rows.push((
                RowKind::Body,
                format!(
                    "  {:<14} {:<30} {}",
                    entry.respondent,
                    entry.answer,
                    entry.completed_at.format(DATE_FORMAT)
                ),
            ));
        }
        rows.push((RowKind::Empty, String::new()));
    }
    rows
}

impl App for ResponsesApp {
    type State = State;
    type Msg = Msg;

    fn init(ctx: &AppContext) -> (State, Command<Msg>) {
        let state = State {
            project_id: ctx.project_id,
            responses: seed_responses(),
            filter: ResponseFilter::default(),
            view_mode: ViewMode::Table,
            list_state: ListState::new().with_wrap_around(false),
        };
        (state, Command::set_focus(ROWS_ID))
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Navigate(key) => {
                let count = state.rows().len();
                state.list_state.handle_key(key, count);
                Command::None
            }
            Msg::Viewport(height) => {
                state.list_state.set_viewport_height(height);
                let count = state.rows().len();
                state.list_state.update_scroll(height, count);
                Command::None
            }
            Msg::ToggleView => {
                state.view_mode = match state.view_mode {
                    ViewMode::Table => ViewMode::ByQuestion,
                    ViewMode::ByQuestion => ViewMode::Table,
                };
                state.list_state = ListState::new().with_wrap_around(false);
                Command::None
            }
            Msg::CycleFilter => {
                state.filter = state.filter.cycle();
                state.list_state = ListState::new().with_wrap_around(false);
                Command::None
            }
            Msg::OpenDashboard => Command::navigate(Route::Dashboard(state.project_id)),
        }
    }

    fn view(state: &State, theme: &Theme) -> Element<Msg> {
        let rows = state
            .rows()
            .into_iter()
            .enumerate()
            .map(|(i, (kind, text))| {
                let style = match kind {
                    RowKind::Header => Style::default().fg(theme.blue).bold(),
                    RowKind::Body => Style::default().fg(theme.text),
                    RowKind::Partial => Style::default().fg(theme.peach),
                    RowKind::Empty => theme.muted_style(),
                };
                let mut builder = Element::styled_text(Line::from(Span::styled(text, style)));
                if state.list_state.selected() == Some(i) {
                    builder = builder.background(theme.selected_style());
                }
                builder.build()
            })
            .collect();

        let title = match state.view_mode {
            ViewMode::Table => "Responses",
            ViewMode::ByQuestion => "Responses by Question",
        };

        let list = Element::list_of(ROWS_ID, rows, &state.list_state)
            .on_navigate(Msg::Navigate)
            .on_render(Msg::Viewport)
            .build();

        ColumnBuilder::new()
            .add(Element::panel(list).title(title).build(), LayoutConstraint::Fill(1))
            .add(
                Element::styled(
                    " v toggle view · f filter by status · b back to dashboard",
                    theme.muted_style(),
                ),
                LayoutConstraint::Length(1),
            )
            .spacing(0)
            .build()
    }

    fn subscriptions(_state: &State) -> Vec<Subscription<Msg>> {
        vec![
            Subscription::keyboard(KeyCode::Char('v'), "Toggle table / by question", Msg::ToggleView),
            Subscription::keyboard(KeyCode::Char('f'), "Cycle status filter", Msg::CycleFilter),
            Subscription::keyboard(KeyCode::Char('b'), "Back to dashboard", Msg::OpenDashboard),
        ]
    }

    fn title() -> &'static str {
        "Survey Responses"
    }

    fn status(state: &State, theme: &Theme) -> Option<Line<'static>> {
        Some(Line::from(vec![
            Span::styled(format!("Filter: {} ", state.filter.label()), Style::default().fg(theme.peach)),
            Span::styled(
                format!("({} of {})", state.visible().len(), state.responses.len()),
                Style::default().fg(theme.overlay1),
            ),
        ]))
    }
}
