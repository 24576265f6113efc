use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::tui::element::FocusId;
use crate::tui::renderer::{FocusRegistry, InteractionRegistry};
use crate::tui::{App, AppContext, Command, KeyBinding, Renderer, Route, Subscription, Theme};

/// Type-erased access to a `Runtime<A>`, so pages of different types can be swapped in place
pub trait AppRuntime {
    fn handle_key(&mut self, key_event: KeyEvent) -> Result<bool>;
    fn handle_mouse(&mut self, mouse_event: MouseEvent) -> Result<bool>;
    fn render_to_area(&mut self, frame: &mut Frame, area: Rect);
    fn get_title(&self) -> &'static str;
    fn get_status(&self) -> Option<Line<'static>>;
    fn get_key_bindings(&self) -> Vec<(KeyBinding, String)>;
    fn poll_async(&mut self) -> Result<bool>;
    fn take_navigation(&mut self) -> Option<Route>;
    fn focus_next(&mut self) -> Result<bool>;
    fn focus_previous(&mut self) -> Result<bool>;
}

/// Owns one page's state and routes events, commands and focus for it
pub struct Runtime<A: App> {
    state: A::State,
    theme: Theme,
    registry: InteractionRegistry<A::Msg>,
    focus_registry: FocusRegistry<A::Msg>,
    focused_id: Option<FocusId>,
    key_subscriptions: Vec<(KeyBinding, A::Msg)>,
    navigation_target: Option<Route>,
    pending_async: Vec<Pin<Box<dyn Future<Output = A::Msg> + Send>>>,
    quit_requested: bool,
}

impl<A: App> Runtime<A> {
    pub fn new(ctx: &AppContext) -> Self {
        let (state, init_command) = A::init(ctx);

        let mut runtime = Self {
            state,
            theme: Theme::new(ctx.config.theme),
            registry: InteractionRegistry::new(),
            focus_registry: FocusRegistry::new(),
            focused_id: None,
            key_subscriptions: Vec::new(),
            navigation_target: None,
            pending_async: Vec::new(),
            quit_requested: false,
        };

        runtime.update_subscriptions();
        runtime.execute_command(init_command);
        runtime
    }

    pub fn state(&self) -> &A::State {
        &self.state
    }

    pub fn focused_id(&self) -> Option<&FocusId> {
        self.focused_id.as_ref()
    }

    pub fn take_navigation(&mut self) -> Option<Route> {
        self.navigation_target.take()
    }

    pub fn get_title(&self) -> &'static str {
        A::title()
    }

    pub fn get_status(&self) -> Option<Line<'static>> {
        A::status(&self.state, &self.theme)
    }

    /// Key bindings for the help menu
    pub fn get_key_bindings(&self) -> Vec<(KeyBinding, String)> {
        A::subscriptions(&self.state)
            .into_iter()
            .map(|sub| match sub {
                Subscription::Keyboard { key, description, .. } => (key, description),
            })
            .collect()
    }

    /// Apply a message directly, as if an element or key had produced it
    pub fn dispatch(&mut self, msg: A::Msg) -> bool {
        let command = A::update(&mut self.state, msg);
        let keep_running = self.execute_command(command);
        self.update_subscriptions();
        keep_running
    }

    fn update_subscriptions(&mut self) {
        self.key_subscriptions = A::subscriptions(&self.state)
            .into_iter()
            .map(|sub| match sub {
                Subscription::Keyboard { key, msg, .. } => (key, msg),
            })
            .collect();
    }

    pub fn focus_next(&mut self) -> Result<bool> {
        match self.focus_registry.next_focus(self.focused_id.as_ref()) {
            Some(id) => Ok(self.execute_command(Command::set_focus(id))),
            None => Ok(true),
        }
    }

    pub fn focus_previous(&mut self) -> Result<bool> {
        match self.focus_registry.prev_focus(self.focused_id.as_ref()) {
            Some(id) => Ok(self.execute_command(Command::set_focus(id))),
            None => Ok(true),
        }
    }

    /// Poll pending async commands once and apply the ones that finished
    pub fn poll_async(&mut self) -> Result<bool> {
        if self.pending_async.is_empty() {
            return Ok(true);
        }

        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);

        let mut ready = Vec::new();
        let mut still_pending = Vec::with_capacity(self.pending_async.len());
        for mut future in self.pending_async.drain(..) {
            match future.as_mut().poll(&mut cx) {
                Poll::Ready(msg) => ready.push(msg),
                Poll::Pending => still_pending.push(future),
            }
        }
        self.pending_async = still_pending;

        for msg in ready {
            if !self.dispatch(msg) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(true);
        }

        // Esc blurs the focused element before anything else sees it
        if key_event.code == KeyCode::Esc && self.focused_id.is_some() {
            return Ok(self.execute_command(Command::clear_focus()));
        }

        if let Some(focused_id) = &self.focused_id {
            if let Some(msg) = self.focus_registry.dispatch_key(focused_id, key_event) {
                return Ok(self.dispatch(msg));
            }
        }

        // Shifted characters arrive as uppercase; match them without the modifier
        let mut event = key_event;
        if matches!(event.code, KeyCode::Char(_)) {
            event.modifiers.remove(KeyModifiers::SHIFT);
        }

        let msg = self
            .key_subscriptions
            .iter()
            .find(|(binding, _)| binding.matches(&event))
            .map(|(_, msg)| msg.clone());
        match msg {
            Some(msg) => Ok(self.dispatch(msg)),
            None => Ok(true),
        }
    }

    pub fn handle_mouse(&mut self, mouse_event: MouseEvent) -> Result<bool> {
        let (x, y) = (mouse_event.column, mouse_event.row);

        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.focus_registry.find_at_position(x, y) {
                    Some(clicked) if self.focused_id.as_ref() != Some(&clicked) => {
                        self.execute_command(Command::set_focus(clicked));
                    }
                    Some(_) => {}
                    None if self.focused_id.is_some() => {
                        self.execute_command(Command::clear_focus());
                    }
                    None => {}
                }

                if let Some(msg) = self.registry.find_click(x, y) {
                    return Ok(self.dispatch(msg));
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let code = if mouse_event.kind == MouseEventKind::ScrollUp {
                    KeyCode::Up
                } else {
                    KeyCode::Down
                };
                // Wheel scrolls whatever focusable is under the pointer
                if let Some(id) = self.focus_registry.find_at_position(x, y) {
                    let event = KeyEvent::new(code, KeyModifiers::NONE);
                    if let Some(msg) = self.focus_registry.dispatch_key(&id, event) {
                        return Ok(self.dispatch(msg));
                    }
                }
            }
            _ => {}
        }

        Ok(true)
    }

    fn execute_command(&mut self, command: Command<A::Msg>) -> bool {
        match command {
            Command::None => true,
            Command::Quit => {
                self.quit_requested = true;
                false
            }
            Command::Navigate(route) => {
                debug!("{} requested navigation to {}", A::title(), route);
                self.navigation_target = Some(route);
                true
            }
            Command::Perform(future) => {
                self.pending_async.push(future);
                true
            }
            Command::SetFocus(id) => {
                if !self.blur_current() {
                    return false;
                }
                self.focused_id = Some(id.clone());
                let on_focus = self.focus_registry.find(&id).and_then(|f| f.on_focus.clone());
                match on_focus {
                    Some(msg) => self.dispatch(msg),
                    None => true,
                }
            }
            Command::ClearFocus => self.blur_current(),
        }
    }

    fn blur_current(&mut self) -> bool {
        let Some(old_id) = self.focused_id.take() else {
            return true;
        };
        let on_blur = self.focus_registry.find(&old_id).and_then(|f| f.on_blur.clone());
        match on_blur {
            Some(msg) => self.dispatch(msg),
            None => true,
        }
    }

    /// Whether a command asked to leave the application
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn render_to_area(&mut self, frame: &mut Frame, area: Rect) {
        self.registry.clear();
        self.focus_registry.clear();

        let view = A::view(&self.state, &self.theme);
        Renderer::render(
            frame,
            &self.theme,
            &mut self.registry,
            &mut self.focus_registry,
            self.focused_id.as_ref(),
            &view,
            area,
        );

        // Viewport sizes reported during render (list scrolling)
        for msg in self.registry.take_render_messages() {
            self.dispatch(msg);
        }

        // Focused element no longer in the tree
        if let Some(focused_id) = &self.focused_id {
            if !self.focus_registry.contains(focused_id) {
                self.focused_id = None;
            }
        }
    }
}

impl<A: App> AppRuntime for Runtime<A> {
    fn handle_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        Runtime::handle_key(self, key_event)
    }

    fn handle_mouse(&mut self, mouse_event: MouseEvent) -> Result<bool> {
        Runtime::handle_mouse(self, mouse_event)
    }

    fn render_to_area(&mut self, frame: &mut Frame, area: Rect) {
        Runtime::render_to_area(self, frame, area)
    }

    fn get_title(&self) -> &'static str {
        Runtime::get_title(self)
    }

    fn get_status(&self) -> Option<Line<'static>> {
        Runtime::get_status(self)
    }

    fn get_key_bindings(&self) -> Vec<(KeyBinding, String)> {
        Runtime::get_key_bindings(self)
    }

    fn poll_async(&mut self) -> Result<bool> {
        Runtime::poll_async(self)
    }

    fn take_navigation(&mut self) -> Option<Route> {
        Runtime::take_navigation(self)
    }

    fn focus_next(&mut self) -> Result<bool> {
        Runtime::focus_next(self)
    }

    fn focus_previous(&mut self) -> Result<bool> {
        Runtime::focus_previous(self)
    }
}
