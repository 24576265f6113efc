use crossterm::event::KeyCode;
use log::debug;
use ratatui::prelude::Stylize;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use std::sync::Arc;
use std::time::Duration;

use crate::dashboard::{Assistant, AssistantReply, Dashboard, DistributionRow, FigureKind, KeywordAssistant, Role};
use crate::tui::element::{ColumnBuilder, RowBuilder};
use crate::tui::widgets::{ListState, TextInputState};
use crate::tui::{App, AppContext, Command, Element, FocusId, LayoutConstraint, Route, Subscription, Theme};

const CHAT_LOG_ID: FocusId = FocusId::new("chat-log");
const CHAT_INPUT_ID: FocusId = FocusId::new("chat-input");
const FIGURES_ID: FocusId = FocusId::new("suggested-figures");

const BAR_WIDTH: usize = 30;
const CHAT_WRAP_WIDTH: usize = 52;
const CHAT_MAX_LENGTH: usize = 500;

/// Results dashboard with the assistant chat
pub struct DashboardApp;

#[derive(Clone)]
pub enum Msg {
    ChatInputChanged(KeyCode),
    SendMessage,
    AssistantReplied(AssistantReply),
    FocusChat,
    ChatNavigate(KeyCode),
    ChatViewport(usize),
    FiguresNavigate(KeyCode),
    AddFigure(usize),
    OpenResponses,
    OpenDesign,
    OpenSharing,
}

pub struct State {
    pub project_id: u32,
    pub dashboard: Dashboard,
    assistant: Arc<dyn Assistant>,
    reply_delay: Duration,
    pub chat_input: String,
    chat_input_state: TextInputState,
    pub chat_list: ListState,
    pub figures_list: ListState,
    /// Replies scheduled but not delivered yet
    pub pending_replies: usize,
}

impl State {
    fn chat_lines(&self) -> Vec<(Role, String)> {
        self.dashboard
            .chat
            .messages()
            .iter()
            .flat_map(|m| wrap(&m.content, CHAT_WRAP_WIDTH).into_iter().map(move |l| (m.role, l)))
            .collect()
    }

    fn scroll_chat_to_end(&mut self) {
        let count = self.chat_lines().len();
        if count > 0 {
            self.chat_list.select(Some(count - 1), count);
        }
    }
}

/// Greedy word wrap; words longer than `width` get a line of their own
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

impl App for DashboardApp {
    type State = State;
    type Msg = Msg;

    fn init(ctx: &AppContext) -> (State, Command<Msg>) {
        let state = State {
            project_id: ctx.project_id,
            dashboard: Dashboard::seeded(),
            assistant: Arc::new(KeywordAssistant),
            reply_delay: Duration::from_millis(ctx.config.assistant_delay_ms),
            chat_input: String::new(),
            chat_input_state: TextInputState::new(),
            chat_list: ListState::new().with_wrap_around(false),
            figures_list: ListState::with_selection(),
            pending_replies: 0,
        };
        (state, Command::set_focus(CHAT_INPUT_ID))
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::ChatInputChanged(key) => {
                if let Some(value) =
                    state.chat_input_state.handle_key(key, &state.chat_input, Some(CHAT_MAX_LENGTH))
                {
                    state.chat_input = value;
                }
                Command::None
            }
            Msg::SendMessage => {
                let Some(message) = state.dashboard.submit(&state.chat_input) else {
                    return Command::None;
                };
                state.chat_input.clear();
                state.chat_input_state = TextInputState::new();
                state.pending_replies += 1;
                state.scroll_chat_to_end();

                let assistant = Arc::clone(&state.assistant);
                let delay = state.reply_delay;
                debug!("Scheduling assistant reply in {:?}", delay);
                Command::perform(
                    async move {
                        tokio::time::sleep(delay).await;
                        assistant.respond(&message)
                    },
                    Msg::AssistantReplied,
                )
            }
            Msg::AssistantReplied(reply) => {
                state.pending_replies = state.pending_replies.saturating_sub(1);
                state.dashboard.receive(reply);
                state.figures_list.clamp(state.dashboard.suggested_figures.len());
                if state.figures_list.selected().is_none() {
                    state.figures_list.select(Some(0), state.dashboard.suggested_figures.len());
                }
                state.scroll_chat_to_end();
                Command::None
            }
            Msg::FocusChat => Command::set_focus(CHAT_INPUT_ID),
            Msg::ChatNavigate(key) => {
                let count = state.chat_lines().len();
                state.chat_list.handle_key(key, count);
                Command::None
            }
            Msg::ChatViewport(height) => {
                state.chat_list.set_viewport_height(height);
                let count = state.chat_lines().len();
                state.chat_list.update_scroll(height, count);
                Command::None
            }
            Msg::FiguresNavigate(key) => {
                state.figures_list.handle_key(key, state.dashboard.suggested_figures.len());
                Command::None
            }
            Msg::AddFigure(idx) => {
                if let Some(id) = state.dashboard.suggested_figures.get(idx).map(|f| f.id.clone()) {
                    state.dashboard.add_figure_to_dashboard(&id);
                }
                Command::None
            }
            Msg::OpenResponses => Command::navigate(Route::Responses(state.project_id)),
            Msg::OpenDesign => Command::navigate(Route::SurveyDesign(state.project_id)),
            Msg::OpenSharing => Command::navigate(Route::Sharing(state.project_id)),
        }
    }

    fn view(state: &State, theme: &Theme) -> Element<Msg> {
        let stats = &state.dashboard.stats;
        let stats_row = RowBuilder::new()
            .add(stat_card("Total Responses", stats.total().to_string(), theme), LayoutConstraint::Fill(1))
            .add(stat_card("Completed", stats.completed.to_string(), theme), LayoutConstraint::Fill(1))
            .add(stat_card("In Progress / Abandoned", stats.in_progress.to_string(), theme), LayoutConstraint::Fill(1))
            .add(stat_card("Avg. Completion Time", stats.average_completion_label(), theme), LayoutConstraint::Fill(1))
            .build();

        let left = ColumnBuilder::new()
            .add(distribution_panel(&state.dashboard.distribution, theme), LayoutConstraint::Fill(1))
            .add(insights_panel(&state.dashboard.insights, theme), LayoutConstraint::Length(5))
            .spacing(0)
            .build();

        let right = ColumnBuilder::new()
            .add(chat_panel(state, theme), LayoutConstraint::Fill(2))
            .add(figures_panel(state, theme), LayoutConstraint::Fill(1))
            .spacing(0)
            .build();

        ColumnBuilder::new()
            .add(stats_row, LayoutConstraint::Length(4))
            .add(
                RowBuilder::new()
                    .add(left, LayoutConstraint::Fill(1))
                    .add(right, LayoutConstraint::Fill(1))
                    .build(),
                LayoutConstraint::Fill(1),
            )
            .spacing(0)
            .build()
    }

    fn subscriptions(_state: &State) -> Vec<Subscription<Msg>> {
        vec![
            Subscription::keyboard(KeyCode::Char('c'), "Focus chat input", Msg::FocusChat),
            Subscription::keyboard(KeyCode::Char('r'), "View responses", Msg::OpenResponses),
            Subscription::keyboard(KeyCode::Char('e'), "Edit survey", Msg::OpenDesign),
            Subscription::keyboard(KeyCode::Char('s'), "Share survey", Msg::OpenSharing),
        ]
    }

    fn title() -> &'static str {
        "Dashboard"
    }

    fn status(state: &State, theme: &Theme) -> Option<Line<'static>> {
        if state.pending_replies > 0 {
            Some(Line::from(Span::styled(
                "(assistant is thinking...)",
                Style::default().fg(theme.yellow).italic(),
            )))
        } else {
            None
        }
    }
}

fn stat_card(label: &str, value: String, theme: &Theme) -> Element<Msg> {
    Element::panel(
        ColumnBuilder::new()
            .add(Element::styled(value, Style::default().fg(theme.text).bold()), LayoutConstraint::Length(1))
            .add(Element::styled(label, theme.muted_style()), LayoutConstraint::Length(1))
            .spacing(0)
            .build(),
    )
    .build()
}

fn distribution_bar(row: &DistributionRow, theme: &Theme) -> Element<Msg> {
    let total = row.total().max(1) as usize;
    let positive = row.positive as usize * BAR_WIDTH / total;
    let neutral = row.neutral as usize * BAR_WIDTH / total;
    let negative = BAR_WIDTH.saturating_sub(positive + neutral);

    Element::styled_text(Line::from(vec![
        Span::styled(format!("{:<20.20} ", row.label), Style::default().fg(theme.text)),
        Span::styled("█".repeat(positive), Style::default().fg(theme.green)),
        Span::styled("█".repeat(neutral), Style::default().fg(theme.yellow)),
        Span::styled("█".repeat(negative), Style::default().fg(theme.red)),
        Span::styled(
            format!(" {}/{}/{}", row.positive, row.neutral, row.negative),
            theme.muted_style(),
        ),
    ]))
    .build()
}

fn distribution_panel(rows: &[DistributionRow], theme: &Theme) -> Element<Msg> {
    let mut column = ColumnBuilder::new().spacing(0);
    for row in rows {
        column = column.add(distribution_bar(row, theme), LayoutConstraint::Length(1));
    }
    let legend = Element::styled_text(Line::from(vec![
        Span::styled("█ positive  ", Style::default().fg(theme.green)),
        Span::styled("█ neutral  ", Style::default().fg(theme.yellow)),
        Span::styled("█ negative", Style::default().fg(theme.red)),
    ]))
    .build();
    column = column
        .add(Element::None, LayoutConstraint::Fill(1))
        .add(legend, LayoutConstraint::Length(1));

    Element::panel(column.build()).title("Response Distribution").build()
}

fn insights_panel(insights: &[String], theme: &Theme) -> Element<Msg> {
    let mut column = ColumnBuilder::new().spacing(0);
    for insight in insights {
        column = column.add(
            Element::styled(format!("• {}", insight), Style::default().fg(theme.text)),
            LayoutConstraint::Length(1),
        );
    }
    Element::panel(column.build()).title("Key Insights").build()
}

fn chat_panel(state: &State, theme: &Theme) -> Element<Msg> {
    let rows: Vec<Element<Msg>> = state
        .chat_lines()
        .into_iter()
        .map(|(role, line)| {
            let (prefix, color) = match role {
                Role::User => ("You  ", theme.blue),
                Role::Assistant => ("AI   ", theme.mauve),
            };
            Element::styled_text(Line::from(vec![
                Span::styled(prefix, Style::default().fg(color).bold()),
                Span::styled(line, Style::default().fg(theme.text)),
            ]))
            .build()
        })
        .collect();

    let log = if rows.is_empty() {
        Element::styled("Ask the assistant for a figure, e.g. \"show a pie chart\".", theme.muted_style())
    } else {
        Element::list_of(CHAT_LOG_ID, rows, &state.chat_list)
            .on_navigate(Msg::ChatNavigate)
            .on_render(Msg::ChatViewport)
            .build()
    };

    let input = Element::text_input(CHAT_INPUT_ID, &state.chat_input, &state.chat_input_state)
        .placeholder("Type a message and press Enter")
        .max_length(CHAT_MAX_LENGTH)
        .on_change(Msg::ChatInputChanged)
        .on_submit(Msg::SendMessage)
        .build();

    Element::panel(
        ColumnBuilder::new()
            .add(log, LayoutConstraint::Fill(1))
            .add(input, LayoutConstraint::Length(1))
            .spacing(1)
            .build(),
    )
    .title("Assistant")
    .build()
}

fn figures_panel(state: &State, theme: &Theme) -> Element<Msg> {
    let figures = &state.dashboard.suggested_figures;
    if figures.is_empty() {
        return Element::panel(Element::styled("No suggested figures yet.", theme.muted_style()))
            .title("Suggested Figures")
            .build();
    }

    let rows = figures
        .iter()
        .enumerate()
        .map(|(i, figure)| {
            let kind = match figure.kind {
                FigureKind::Bar => "bar",
                FigureKind::Pie => "pie",
            };
            let shares = figure
                .shares()
                .iter()
                .map(|(name, pct)| format!("{} {:.0}%", name, pct))
                .collect::<Vec<_>>()
                .join(", ");
            let mut builder = Element::styled_text(Line::from(vec![
                Span::styled(format!("{} ", figure.title), Style::default().fg(theme.text).bold()),
                Span::styled(format!("({}) ", kind), Style::default().fg(theme.mauve)),
                Span::styled(shares, theme.muted_style()),
            ]));
            if state.figures_list.selected() == Some(i) {
                builder = builder.background(theme.selected_style());
            }
            builder.build()
        })
        .collect();

    let list = Element::list_of(FIGURES_ID, rows, &state.figures_list)
        .on_select(Msg::AddFigure)
        .on_activate(Msg::AddFigure)
        .on_navigate(Msg::FiguresNavigate)
        .build();

    Element::panel(list).title("Suggested Figures (Enter to add)").build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dashboard::assistant::{FALLBACK_REPLY, PIE_CHART_REPLY};

    fn init() -> State {
        let mut config = Config::default();
        config.assistant_delay_ms = 0;
        DashboardApp::init(&AppContext::new(2, config)).0
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            DashboardApp::update(state, Msg::ChatInputChanged(KeyCode::Char(c)));
        }
    }

    async fn deliver(state: &mut State, command: Command<Msg>) {
        let Command::Perform(future) = command else {
            panic!("expected an async reply");
        };
        let msg = future.await;
        DashboardApp::update(state, msg);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let mut state = init();
        type_text(&mut state, "   ");
        let command = DashboardApp::update(&mut state, Msg::SendMessage);

        assert!(command.is_none());
        assert!(state.dashboard.chat.is_empty());
        assert_eq!(state.pending_replies, 0);
    }

    #[tokio::test]
    async fn test_pie_chart_request_suggests_figure() {
        let mut state = init();
        type_text(&mut state, "Show me a Pie Chart please");
        let command = DashboardApp::update(&mut state, Msg::SendMessage);

        assert!(state.chat_input.is_empty());
        assert_eq!(state.pending_replies, 1);
        deliver(&mut state, command).await;

        let messages = state.dashboard.chat.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].content, PIE_CHART_REPLY);
        assert_eq!(state.dashboard.suggested_figures.len(), 1);
        assert_eq!(state.pending_replies, 0);

        DashboardApp::update(&mut state, Msg::AddFigure(0));
        let last = state.dashboard.distribution.last().unwrap();
        assert_eq!(last.label, "Sample Pie Chart");
        assert_eq!((last.positive, last.neutral, last.negative), (50, 30, 20));
    }

    #[tokio::test]
    async fn test_other_requests_get_fallback() {
        let mut state = init();
        type_text(&mut state, "bar graph");
        let command = DashboardApp::update(&mut state, Msg::SendMessage);
        deliver(&mut state, command).await;

        assert_eq!(state.dashboard.chat.messages()[1].content, FALLBACK_REPLY);
        assert!(state.dashboard.suggested_figures.is_empty());
    }
}
