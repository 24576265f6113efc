use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use log::info;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::Stylize;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Clear;

use crate::config::Config;
use crate::session::Session;
use crate::tui::element::RowBuilder;
use crate::tui::renderer::{FocusRegistry, InteractionRegistry};
use crate::tui::{AppContext, AppRuntime, Element, KeyBinding, LayoutConstraint, Renderer, Route, Theme, apps};

const HEADER_HEIGHT: u16 = 3;

/// Hosts the active page, the global header, the help overlay and the session
pub struct MultiAppRuntime {
    active: Box<dyn AppRuntime>,
    route: Route,
    config: Config,
    theme: Theme,
    session: Session,

    help_menu_open: bool,
    help_scroll_offset: usize,
}

impl MultiAppRuntime {
    pub fn new(route: Route, config: Config) -> Self {
        let active = apps::runtime_for(route, &Self::context_for(route, &config));
        Self {
            active,
            route,
            theme: Theme::new(config.theme),
            config,
            session: Session::default(),
            help_menu_open: false,
            help_scroll_offset: 0,
        }
    }

    fn context_for(route: Route, config: &Config) -> AppContext {
        AppContext::new(route.project_id().unwrap_or_default(), config.clone())
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn help_menu_open(&self) -> bool {
        self.help_menu_open
    }

    /// Leave the current page and open `route` with fresh state
    pub fn navigate(&mut self, route: Route) {
        info!("Navigating from {} to {}", self.route, route);
        self.active = apps::runtime_for(route, &Self::context_for(route, &self.config));
        self.route = route;
    }

    fn global_bindings() -> Vec<(KeyBinding, &'static str)> {
        vec![
            (KeyBinding::new(KeyCode::F(1)), "Toggle help menu"),
            (KeyBinding::new(KeyCode::Tab), "Focus next element"),
            (KeyBinding::shift(KeyCode::BackTab), "Focus previous element"),
            (KeyBinding::new(KeyCode::Esc), "Unfocus / close help"),
            (KeyBinding::ctrl(KeyCode::Char('h')), "Go to projects"),
            (KeyBinding::ctrl(KeyCode::Char('l')), "Log in / log out"),
            (KeyBinding::ctrl(KeyCode::Char('q')), "Quit"),
        ]
    }

    /// Returns `false` when the application should exit
    pub fn handle_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(true);
        }

        if key_event.code == KeyCode::F(1) {
            self.help_menu_open = !self.help_menu_open;
            self.help_scroll_offset = 0;
            return Ok(true);
        }

        // The help overlay swallows every key while open
        if self.help_menu_open {
            match key_event.code {
                KeyCode::Esc => self.help_menu_open = false,
                KeyCode::Up => self.help_scroll_offset = self.help_scroll_offset.saturating_sub(1),
                KeyCode::Down => self.help_scroll_offset = self.help_scroll_offset.saturating_add(1),
                KeyCode::PageUp => self.help_scroll_offset = self.help_scroll_offset.saturating_sub(10),
                KeyCode::PageDown => self.help_scroll_offset = self.help_scroll_offset.saturating_add(10),
                _ => {}
            }
            return Ok(true);
        }

        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Char('q') if ctrl => return Ok(false),
            KeyCode::Char('h') if ctrl => {
                self.navigate(Route::Projects);
                return Ok(true);
            }
            KeyCode::Char('l') if ctrl => {
                if self.session.is_logged_in() {
                    self.session.logout();
                } else {
                    self.session.login();
                }
                return Ok(true);
            }
            KeyCode::Tab => return self.active.focus_next(),
            KeyCode::BackTab => return self.active.focus_previous(),
            _ => {}
        }

        let keep_running = self.active.handle_key(key_event)?;
        self.check_navigation();
        Ok(keep_running)
    }

    pub fn handle_mouse(&mut self, mouse_event: MouseEvent) -> Result<bool> {
        if self.help_menu_open {
            return Ok(true);
        }
        let keep_running = self.active.handle_mouse(mouse_event)?;
        self.check_navigation();
        Ok(keep_running)
    }

    /// Deliver finished async work (assistant replies) to the active page
    pub fn poll_async(&mut self) -> Result<bool> {
        let keep_running = self.active.poll_async()?;
        self.check_navigation();
        Ok(keep_running)
    }

    fn check_navigation(&mut self) {
        if let Some(route) = self.active.take_navigation() {
            self.navigate(route);
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let full_area = frame.area();
        let header_area = Rect {
            height: HEADER_HEIGHT.min(full_area.height),
            ..full_area
        };
        let app_area = Rect {
            y: full_area.y + header_area.height,
            height: full_area.height.saturating_sub(header_area.height),
            ..full_area
        };

        self.render_header(frame, header_area);
        self.active.render_to_area(frame, app_area);

        if self.help_menu_open {
            self.render_help_menu(frame, full_area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;

        let mut title_spans = vec![
            Span::styled("Conversify", Style::default().fg(theme.mauve).bold()),
            Span::styled(" › ", Style::default().fg(theme.overlay1)),
            Span::styled(self.active.get_title(), Style::default().fg(theme.blue).bold()),
            Span::raw(" "),
        ];
        if let Some(status) = self.active.get_status() {
            title_spans.extend(status.spans);
        }

        let nav = if self.session.is_logged_in() {
            "Home | Logout"
        } else {
            "Login | Register"
        };
        let right = Line::from(vec![
            Span::styled(self.route.path(), Style::default().fg(theme.overlay1)),
            Span::raw("  "),
            Span::styled(nav, Style::default().fg(theme.sapphire)),
            Span::raw("  "),
            Span::styled("[F1 Help]", Style::default().fg(theme.overlay1)),
        ]);
        let right_width = right.width() as u16;

        let header: Element<()> = Element::panel(
            RowBuilder::new()
                .add(Element::styled_text(Line::from(title_spans)).build(), LayoutConstraint::Fill(1))
                .add(Element::styled_text(right).build(), LayoutConstraint::Length(right_width))
                .spacing(0)
                .build(),
        )
        .build();

        let mut registry = InteractionRegistry::new();
        let mut focus_registry = FocusRegistry::new();
        Renderer::render(frame, theme, &mut registry, &mut focus_registry, None, &header, area);
    }

    fn render_help_menu(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let binding_line = |key: String, description: String, key_color| {
            Element::styled_text(Line::from(vec![
                Span::styled(format!("  {:14}", key), Style::default().fg(key_color)),
                Span::styled(description, Style::default().fg(theme.text)),
            ]))
            .build()
        };

        let mut lines: Vec<Element<()>> = vec![Element::styled_text(Line::from(Span::styled(
            "▼ Global",
            Style::default().fg(theme.peach).bold(),
        )))
        .build()];
        for (key, description) in Self::global_bindings() {
            lines.push(binding_line(key.to_string(), description.to_string(), theme.mauve));
        }
        lines.push(Element::text(""));
        lines.push(
            Element::styled_text(Line::from(Span::styled(
                format!("▼ {}", self.active.get_title()),
                Style::default().fg(theme.blue).bold(),
            )))
            .build(),
        );
        for (key, description) in self.active.get_key_bindings() {
            lines.push(binding_line(key.to_string(), description, theme.green));
        }

        let mut items: Vec<Element<()>> = lines.into_iter().skip(self.help_scroll_offset).collect();
        items.push(Element::text(""));
        items.push(Element::styled("[Esc to close | ↑↓ to scroll]", theme.muted_style()));

        let help_modal = Element::panel(Element::container(Element::column(items).spacing(0).build()).build())
            .title("Help")
            .build();

        let modal_width = area.width.min(64);
        let modal_height = area.height.min(24);
        let modal_area = Rect {
            x: area.x + area.width.saturating_sub(modal_width) / 2,
            y: area.y + area.height.saturating_sub(modal_height) / 2,
            width: modal_width,
            height: modal_height,
        };

        frame.render_widget(Clear, modal_area);
        let mut registry = InteractionRegistry::new();
        let mut focus_registry = FocusRegistry::new();
        Renderer::render(frame, theme, &mut registry, &mut focus_registry, None, &help_modal, modal_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_global_navigation_and_session_toggle() {
        let mut runtime = MultiAppRuntime::new(Route::Dashboard(3), Config::default());
        assert_eq!(runtime.route(), Route::Dashboard(3));

        assert!(runtime.handle_key(press(KeyCode::Char('l'), KeyModifiers::CONTROL)).unwrap());
        assert!(!runtime.session().is_logged_in());

        assert!(runtime.handle_key(press(KeyCode::Char('h'), KeyModifiers::CONTROL)).unwrap());
        assert_eq!(runtime.route(), Route::Projects);

        assert!(!runtime.handle_key(press(KeyCode::Char('q'), KeyModifiers::CONTROL)).unwrap());
    }

    #[test]
    fn test_help_menu_swallows_keys() {
        let mut runtime = MultiAppRuntime::new(Route::Projects, Config::default());
        runtime.handle_key(press(KeyCode::F(1), KeyModifiers::NONE)).unwrap();
        assert!(runtime.help_menu_open());

        runtime.handle_key(press(KeyCode::Char('h'), KeyModifiers::CONTROL)).unwrap();
        assert_eq!(runtime.route(), Route::Projects);

        runtime.handle_key(press(KeyCode::Esc, KeyModifiers::NONE)).unwrap();
        assert!(!runtime.help_menu_open());
    }

    #[test]
    fn test_header_reflects_session() {
        let mut runtime = MultiAppRuntime::new(Route::Projects, Config::default());
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|frame| runtime.render(frame)).unwrap();
        assert!(screen_text(&terminal).contains("Home | Logout"));

        runtime.handle_key(press(KeyCode::Char('l'), KeyModifiers::CONTROL)).unwrap();
        terminal.draw(|frame| runtime.render(frame)).unwrap();
        assert!(screen_text(&terminal).contains("Login | Register"));
    }
}
