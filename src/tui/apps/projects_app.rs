use chrono::NaiveDate;
use crossterm::event::KeyCode;
use log::info;
use ratatui::prelude::Stylize;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::projects::{Project, ProjectList};
use crate::tui::element::{ColumnBuilder, RowBuilder};
use crate::tui::widgets::{ListItem, ListState, TextInputState};
use crate::tui::{App, AppContext, Command, Element, FocusId, LayoutConstraint, Route, Subscription, Theme};

const LIST_ID: FocusId = FocusId::new("project-list");
const NAME_INPUT_ID: FocusId = FocusId::new("new-project-name");
const NAME_MAX_LENGTH: usize = 80;

/// Home page: the project list
pub struct ProjectsApp;

#[derive(Clone)]
pub enum Msg {
    ListNavigate(KeyCode),
    ListSelect(usize),
    ListViewport(usize),
    OpenProject(usize),
    NameChanged(KeyCode),
    CreateProject,
    FocusNameInput,
    TogglePublish,
    OpenDashboard,
    OpenResponses,
    OpenSharing,
    Quit,
}

pub struct State {
    pub projects: ProjectList,
    pub list_state: ListState,
    pub new_name: String,
    name_state: TextInputState,
    today: NaiveDate,
    pub error: Option<String>,
}

impl State {
    fn selected_project(&self) -> Option<&Project> {
        self.list_state
            .selected()
            .and_then(|idx| self.projects.projects().get(idx))
    }

    fn open_selected(&self, to_route: fn(u32) -> Route) -> Command<Msg> {
        match self.selected_project() {
            Some(project) => Command::navigate(to_route(project.id)),
            None => Command::None,
        }
    }
}

impl ListItem for Project {
    type Msg = Msg;

    fn to_element(&self, is_selected: bool, theme: &Theme) -> Element<Msg> {
        let status_color = if self.published { theme.green } else { theme.yellow };
        let line = Line::from(vec![
            Span::styled(format!(" {:<32}", self.name), Style::default().fg(theme.text)),
            Span::styled(format!("{:>6} responses  ", self.responses), Style::default().fg(theme.subtext0)),
            Span::styled(format!("{:<8}", self.status_label()), Style::default().fg(status_color)),
            Span::styled(
                self.last_updated.format("%Y-%m-%d").to_string(),
                Style::default().fg(theme.overlay1),
            ),
        ]);

        let mut builder = Element::styled_text(line);
        if is_selected {
            builder = builder.background(theme.selected_style());
        }
        builder.build()
    }
}

impl App for ProjectsApp {
    type State = State;
    type Msg = Msg;

    fn init(ctx: &AppContext) -> (State, Command<Msg>) {
        let state = State {
            projects: ProjectList::seeded(),
            list_state: ListState::with_selection(),
            new_name: String::new(),
            name_state: TextInputState::new(),
            today: ctx.today,
            error: None,
        };
        (state, Command::set_focus(LIST_ID))
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::ListNavigate(key) => {
                state.list_state.handle_key(key, state.projects.len());
                Command::None
            }
            Msg::ListSelect(idx) => {
                state.list_state.select(Some(idx), state.projects.len());
                Command::None
            }
            Msg::ListViewport(height) => {
                state.list_state.set_viewport_height(height);
                state.list_state.update_scroll(height, state.projects.len());
                Command::None
            }
            Msg::OpenProject(idx) => {
                state.list_state.select(Some(idx), state.projects.len());
                state.open_selected(Route::SurveyDesign)
            }
            Msg::NameChanged(key) => {
                if let Some(value) = state.name_state.handle_key(key, &state.new_name, Some(NAME_MAX_LENGTH)) {
                    state.new_name = value;
                    state.error = None;
                }
                Command::None
            }
            Msg::CreateProject => match state.projects.create(&state.new_name, state.today) {
                Some(id) => {
                    info!("Created project {} '{}'", id, state.new_name.trim());
                    state.new_name.clear();
                    state.name_state = TextInputState::new();
                    state.error = None;
                    let idx = state.projects.len() - 1;
                    state.list_state.select(Some(idx), state.projects.len());
                    Command::set_focus(LIST_ID)
                }
                None => {
                    state.error = Some("Project name cannot be empty".to_string());
                    Command::None
                }
            },
            Msg::FocusNameInput => Command::set_focus(NAME_INPUT_ID),
            Msg::TogglePublish => {
                if let Some(id) = state.selected_project().map(|p| p.id) {
                    state.projects.toggle_publish(id);
                }
                Command::None
            }
            Msg::OpenDashboard => state.open_selected(Route::Dashboard),
            Msg::OpenResponses => state.open_selected(Route::Responses),
            Msg::OpenSharing => state.open_selected(Route::Sharing),
            Msg::Quit => Command::Quit,
        }
    }

    fn view(state: &State, theme: &Theme) -> Element<Msg> {
        let header = Element::styled_text(Line::from(vec![
            Span::styled(format!(" {:<32}", "Name"), Style::default().fg(theme.overlay1).bold()),
            Span::styled(format!("{:>16}  ", "Responses"), Style::default().fg(theme.overlay1).bold()),
            Span::styled(format!("{:<8}", "Status"), Style::default().fg(theme.overlay1).bold()),
            Span::styled("Last updated", Style::default().fg(theme.overlay1).bold()),
        ]))
        .build();

        let list = Element::list(LIST_ID, state.projects.projects(), &state.list_state, theme)
            .on_select(Msg::ListSelect)
            .on_activate(Msg::OpenProject)
            .on_navigate(Msg::ListNavigate)
            .on_render(Msg::ListViewport)
            .build();

        let projects_panel = Element::panel(
            ColumnBuilder::new()
                .add(header, LayoutConstraint::Length(1))
                .add(list, LayoutConstraint::Fill(1))
                .spacing(0)
                .build(),
        )
        .title("Your Projects")
        .build();

        let name_input = Element::text_input(NAME_INPUT_ID, &state.new_name, &state.name_state)
            .placeholder("New project name")
            .max_length(NAME_MAX_LENGTH)
            .on_change(Msg::NameChanged)
            .on_submit(Msg::CreateProject)
            .build();

        let create_row = RowBuilder::new()
            .add(Element::panel(name_input).title("New Project").build(), LayoutConstraint::Fill(1))
            .add(
                Element::button("create-project", "Create")
                    .on_press(Msg::CreateProject)
                    .build(),
                LayoutConstraint::Length(12),
            )
            .build();

        let footer = match &state.error {
            Some(error) => Element::styled(format!(" {}", error), theme.error_style()),
            None => Element::styled(
                " Enter open · p publish · d dashboard · r responses · s share · n new project · q quit",
                theme.muted_style(),
            ),
        };

        ColumnBuilder::new()
            .add(projects_panel, LayoutConstraint::Fill(1))
            .add(create_row, LayoutConstraint::Length(3))
            .add(footer, LayoutConstraint::Length(1))
            .spacing(0)
            .build()
    }

    fn subscriptions(_state: &State) -> Vec<Subscription<Msg>> {
        vec![
            Subscription::keyboard(KeyCode::Char('n'), "New project", Msg::FocusNameInput),
            Subscription::keyboard(KeyCode::Char('p'), "Publish / unpublish", Msg::TogglePublish),
            Subscription::keyboard(KeyCode::Char('d'), "Open dashboard", Msg::OpenDashboard),
            Subscription::keyboard(KeyCode::Char('r'), "Open responses", Msg::OpenResponses),
            Subscription::keyboard(KeyCode::Char('s'), "Share survey", Msg::OpenSharing),
            Subscription::keyboard(KeyCode::Char('q'), "Quit", Msg::Quit),
        ]
    }

    fn title() -> &'static str {
        "Projects"
    }

    fn status(state: &State, theme: &Theme) -> Option<Line<'static>> {
        let published = state.projects.projects().iter().filter(|p| p.published).count();
        Some(Line::from(Span::styled(
            format!("({} projects, {} active)", state.projects.len(), published),
            Style::default().fg(theme.overlay1),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::tui::Runtime;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn init() -> State {
        let ctx = AppContext::new(0, Config::default());
        ProjectsApp::init(&ctx).0
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            ProjectsApp::update(state, Msg::NameChanged(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_create_project_selects_it() {
        let mut state = init();
        type_text(&mut state, "Churn survey");
        ProjectsApp::update(&mut state, Msg::CreateProject);

        assert_eq!(state.projects.len(), 5);
        assert!(state.new_name.is_empty());
        let created = state.selected_project().unwrap();
        assert_eq!(created.name, "Churn survey");
        assert_eq!(created.status_label(), "Draft");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut state = init();
        type_text(&mut state, "   ");
        ProjectsApp::update(&mut state, Msg::CreateProject);

        assert_eq!(state.projects.len(), 4);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_toggle_publish_on_selection() {
        let mut state = init();
        let before = state.selected_project().unwrap().published;
        ProjectsApp::update(&mut state, Msg::TogglePublish);
        assert_eq!(state.selected_project().unwrap().published, !before);
    }

    #[test]
    fn test_open_project_navigates() {
        let mut state = init();
        let id = state.projects.projects()[1].id;
        let command = ProjectsApp::update(&mut state, Msg::OpenProject(1));
        assert!(matches!(command, Command::Navigate(Route::SurveyDesign(x)) if x == id));

        let command = ProjectsApp::update(&mut state, Msg::OpenSharing);
        assert!(matches!(command, Command::Navigate(Route::Sharing(x)) if x == id));
    }

    #[test]
    fn test_quit_key_stops_runtime() {
        let ctx = AppContext::new(0, Config::default());
        // Nothing rendered yet, so the key falls through to the page shortcuts
        let mut runtime = Runtime::<ProjectsApp>::new(&ctx);

        let keep_running = runtime
            .handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))
            .unwrap();
        assert!(!keep_running);
        assert!(runtime.quit_requested());
    }
}
