use crossterm::event::KeyCode;
use ratatui::prelude::Stylize;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::sharing::{ShareSettings, SocialPlatform, embed_code, survey_link};
use crate::tui::element::ColumnBuilder;
use crate::tui::widgets::ListState;
use crate::tui::{App, AppContext, Command, Element, FocusId, LayoutConstraint, Route, Subscription, Theme};

const PRIVACY_ID: FocusId = FocusId::new("privacy-options");
const PRIVACY_OPTIONS: usize = 2;

/// Share page: link, embed code, social links and privacy toggles
pub struct SharingApp;

#[derive(Clone)]
pub enum Msg {
    PrivacyNavigate(KeyCode),
    TogglePrivacy(usize),
    BackToDashboard,
    OpenDesign,
}

pub struct State {
    pub project_id: u32,
    pub link: String,
    pub embed: String,
    pub settings: ShareSettings,
    pub privacy_list: ListState,
}

impl App for SharingApp {
    type State = State;
    type Msg = Msg;

    fn init(ctx: &AppContext) -> (State, Command<Msg>) {
        let link = survey_link(&ctx.config.share_base_url, ctx.project_id);
        let state = State {
            project_id: ctx.project_id,
            embed: embed_code(&link),
            link,
            settings: ShareSettings::default(),
            privacy_list: ListState::with_selection(),
        };
        (state, Command::set_focus(PRIVACY_ID))
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::PrivacyNavigate(key) => {
                state.privacy_list.handle_key(key, PRIVACY_OPTIONS);
                Command::None
            }
            Msg::TogglePrivacy(idx) => {
                state.privacy_list.select(Some(idx), PRIVACY_OPTIONS);
                match idx {
                    0 => state.settings.toggle_public(),
                    1 => state.settings.toggle_anonymous(),
                    _ => {}
                }
                Command::None
            }
            Msg::BackToDashboard => Command::navigate(Route::Dashboard(state.project_id)),
            Msg::OpenDesign => Command::navigate(Route::SurveyDesign(state.project_id)),
        }
    }

    fn view(state: &State, theme: &Theme) -> Element<Msg> {
        let link_panel = Element::panel(Element::styled(state.link.clone(), theme.link_style()))
            .title("Survey Link")
            .build();

        let embed_panel = Element::panel(Element::styled(state.embed.clone(), Style::default().fg(theme.text)))
            .title("Embed Code")
            .build();

        let mut social = ColumnBuilder::new().spacing(0);
        for platform in SocialPlatform::ALL {
            let target = match platform.share_url(&state.link) {
                Some(url) => Span::styled(url, theme.link_style()),
                None => Span::styled("no web share, copy the survey link instead", theme.muted_style()),
            };
            social = social.add(
                Element::styled_text(Line::from(vec![
                    Span::styled(format!("{:<10}", platform.name()), Style::default().fg(theme.text).bold()),
                    target,
                ]))
                .build(),
                LayoutConstraint::Length(1),
            );
        }
        let social_panel = Element::panel(social.build()).title("Share on Social Media").build();

        let options = [
            ("Public survey", state.settings.is_public),
            ("Allow anonymous responses", state.settings.allow_anonymous),
        ];
        let rows = options
            .iter()
            .enumerate()
            .map(|(i, (label, enabled))| {
                let (mark, color) = if *enabled { ("[x] ", theme.green) } else { ("[ ] ", theme.text) };
                let mut builder = Element::styled_text(Line::from(vec![
                    Span::styled(mark, Style::default().fg(theme.overlay1)),
                    Span::styled(label.to_string(), Style::default().fg(color)),
                ]));
                if state.privacy_list.selected() == Some(i) {
                    builder = builder.background(theme.selected_style());
                }
                builder.build()
            })
            .collect();
        let privacy = Element::list_of(PRIVACY_ID, rows, &state.privacy_list)
            .on_select(Msg::TogglePrivacy)
            .on_activate(Msg::TogglePrivacy)
            .on_navigate(Msg::PrivacyNavigate)
            .build();
        let privacy_panel = Element::panel(privacy).title("Privacy Settings").build();

        let page = ColumnBuilder::new()
            .add(link_panel, LayoutConstraint::Length(3))
            .add(embed_panel, LayoutConstraint::Length(3))
            .add(social_panel, LayoutConstraint::Length(SocialPlatform::ALL.len() as u16 + 2))
            .add(privacy_panel, LayoutConstraint::Length(PRIVACY_OPTIONS as u16 + 2))
            .add(
                Element::styled(" Enter toggle setting · b back to dashboard · e edit survey", theme.muted_style()),
                LayoutConstraint::Length(1),
            )
            .spacing(0)
            .build();

        Element::container(page).padding(1).build()
    }

    fn subscriptions(_state: &State) -> Vec<Subscription<Msg>> {
        vec![
            Subscription::keyboard(KeyCode::Char('b'), "Back to dashboard", Msg::BackToDashboard),
            Subscription::keyboard(KeyCode::Char('e'), "Edit survey", Msg::OpenDesign),
        ]
    }

    fn title() -> &'static str {
        "Share Survey"
    }

    fn status(state: &State, theme: &Theme) -> Option<Line<'static>> {
        let (label, style) = if state.settings.is_public {
            ("(public)", theme.success_style())
        } else {
            ("(private)", Style::default().fg(theme.peach))
        };
        Some(Line::from(Span::styled(label, style)))
    }
}
