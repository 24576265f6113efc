use crossterm::event::KeyCode;

use crate::tui::Element;
use crate::tui::element::FocusId;
use crate::tui::widgets::ListState;

/// Builder for list elements
pub struct ListBuilder<Msg> {
    pub(crate) id: FocusId,
    pub(crate) items: Vec<Element<Msg>>,
    pub(crate) selected: Option<usize>,
    pub(crate) scroll_offset: usize,
    pub(crate) on_select: Option<fn(usize) -> Msg>,
    pub(crate) on_activate: Option<fn(usize) -> Msg>,
    pub(crate) on_navigate: Option<fn(KeyCode) -> Msg>,
    pub(crate) on_focus: Option<Msg>,
    pub(crate) on_blur: Option<Msg>,
    pub(crate) on_render: Option<fn(usize) -> Msg>,
}

impl<Msg> ListBuilder<Msg> {
    pub(crate) fn new(id: FocusId, items: Vec<Element<Msg>>, state: &ListState) -> Self {
        Self {
            id,
            items,
            selected: state.selected(),
            scroll_offset: state.scroll_offset(),
            on_select: None,
            on_activate: None,
            on_navigate: None,
            on_focus: None,
            on_blur: None,
            on_render: None,
        }
    }

    /// Called with the clicked row index
    pub fn on_select(mut self, msg: fn(usize) -> Msg) -> Self {
        self.on_select = Some(msg);
        self
    }

    /// Called with the selected index when Enter is pressed
    pub fn on_activate(mut self, msg: fn(usize) -> Msg) -> Self {
        self.on_activate = Some(msg);
        self
    }

    pub fn on_navigate(mut self, msg: fn(KeyCode) -> Msg) -> Self {
        self.on_navigate = Some(msg);
        self
    }

    pub fn on_focus(mut self, msg: Msg) -> Self {
        self.on_focus = Some(msg);
        self
    }

    pub fn on_blur(mut self, msg: Msg) -> Self {
        self.on_blur = Some(msg);
        self
    }

    /// Called after each render with the viewport height
    pub fn on_render(mut self, msg: fn(usize) -> Msg) -> Self {
        self.on_render = Some(msg);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::List {
            id: self.id,
            items: self.items,
            selected: self.selected,
            scroll_offset: self.scroll_offset,
            on_select: self.on_select,
            on_activate: self.on_activate,
            on_navigate: self.on_navigate,
            on_focus: self.on_focus,
            on_blur: self.on_blur,
            on_render: self.on_render,
        }
    }
}
