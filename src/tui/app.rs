use ratatui::text::Line;

use crate::config::Config;
use crate::tui::{Command, Element, Subscription, Theme};

/// What a page receives when it is opened
#[derive(Debug, Clone)]
pub struct AppContext {
    pub project_id: u32,
    pub config: Config,
    pub today: chrono::NaiveDate,
}

impl AppContext {
    pub fn new(project_id: u32, config: Config) -> Self {
        Self {
            project_id,
            config,
            today: chrono::Local::now().date_naive(),
        }
    }
}

/// The trait every page implements.
///
/// Elm architecture:
/// - State: data describing the page
/// - Msg: events that can happen
/// - update: applies a message and returns a command
/// - view: renders the current state
/// - subscriptions: declares the keys the page listens to
pub trait App: Sized + Send + 'static {
    type State: Send;

    type Msg: Clone + Send + 'static;

    /// Build fresh state for this page
    fn init(ctx: &AppContext) -> (Self::State, Command<Self::Msg>);

    fn update(state: &mut Self::State, msg: Self::Msg) -> Command<Self::Msg>;

    fn view(state: &Self::State, theme: &Theme) -> Element<Self::Msg>;

    fn subscriptions(state: &Self::State) -> Vec<Subscription<Self::Msg>>;

    /// Static title (header, help menu)
    fn title() -> &'static str;

    /// Optional dynamic status shown next to the title
    fn status(_state: &Self::State, _theme: &Theme) -> Option<Line<'static>> {
        None
    }
}
