use ratatui::style::Style;
use ratatui::text::Line;

mod builders;
pub use builders::*;

/// Stable identifier for focusable UI elements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusId(pub &'static str);

impl FocusId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }
}

impl From<&'static str> for FocusId {
    fn from(s: &'static str) -> Self {
        FocusId(s)
    }
}

/// Layout constraints for sizing elements within containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutConstraint {
    /// Fixed size (exact number of lines/columns)
    Length(u16),
    /// At least this many lines/columns
    Min(u16),
    /// Proportional share of the remaining space
    Fill(u16),
}

/// Declarative UI elements that compose to form the view
#[derive(Clone)]
pub enum Element<Msg> {
    None,

    Text {
        content: String,
        style: Option<Style>,
    },

    StyledText {
        line: Line<'static>,
        background: Option<Style>,
    },

    Button {
        id: FocusId,
        label: String,
        on_press: Option<Msg>,
        on_focus: Option<Msg>,
        on_blur: Option<Msg>,
        style: Option<Style>,
    },

    Column {
        items: Vec<(LayoutConstraint, Element<Msg>)>,
        spacing: u16,
    },

    Row {
        items: Vec<(LayoutConstraint, Element<Msg>)>,
        spacing: u16,
    },

    Container {
        child: Box<Element<Msg>>,
        padding: u16,
    },

    Panel {
        child: Box<Element<Msg>>,
        title: Option<String>,
        height: Option<u16>,
    },

    /// Scrollable list of single-line items
    List {
        id: FocusId,
        items: Vec<Element<Msg>>,
        selected: Option<usize>,
        scroll_offset: usize,
        on_select: Option<fn(usize) -> Msg>,
        on_activate: Option<fn(usize) -> Msg>,
        on_navigate: Option<fn(crossterm::event::KeyCode) -> Msg>,
        on_focus: Option<Msg>,
        on_blur: Option<Msg>,
        on_render: Option<fn(usize) -> Msg>,
    },

    /// Single-line text input
    TextInput {
        id: FocusId,
        value: String,
        cursor_pos: usize,
        scroll_offset: usize,
        placeholder: Option<String>,
        max_length: Option<usize>,
        on_change: Option<fn(crossterm::event::KeyCode) -> Msg>,
        on_submit: Option<Msg>,
        on_focus: Option<Msg>,
        on_blur: Option<Msg>,
    },
}

impl<Msg> Element<Msg> {
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text {
            content: content.into(),
            style: None,
        }
    }

    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Element::Text {
            content: content.into(),
            style: Some(style),
        }
    }

    /// Styled text with optional background fill
    pub fn styled_text(line: Line<'static>) -> StyledTextBuilder<Msg> {
        StyledTextBuilder {
            line,
            background: None,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn button(id: impl Into<FocusId>, label: impl Into<String>) -> ButtonBuilder<Msg> {
        ButtonBuilder {
            id: id.into(),
            label: label.into(),
            on_press: None,
            on_focus: None,
            on_blur: None,
            style: None,
        }
    }

    /// Column from children, each sized by its default constraint
    pub fn column(children: Vec<Element<Msg>>) -> ColumnBuilder<Msg> {
        let items = children
            .into_iter()
            .map(|child| (child.default_constraint(), child))
            .collect();
        ColumnBuilder { items, spacing: 1 }
    }

    pub fn row(children: Vec<Element<Msg>>) -> RowBuilder<Msg> {
        let items = children
            .into_iter()
            .map(|child| (child.default_constraint(), child))
            .collect();
        RowBuilder { items, spacing: 1 }
    }

    pub fn container(child: Element<Msg>) -> ContainerBuilder<Msg> {
        ContainerBuilder {
            child: Box::new(child),
            padding: 1,
        }
    }

    pub fn panel(child: Element<Msg>) -> PanelBuilder<Msg> {
        PanelBuilder {
            child: Box::new(child),
            title: None,
            height: None,
        }
    }

    pub fn text_input(
        id: impl Into<FocusId>,
        value: &str,
        state: &crate::tui::widgets::TextInputState,
    ) -> TextInputBuilder<Msg> {
        TextInputBuilder {
            id: id.into(),
            value: value.to_string(),
            cursor_pos: state.cursor_pos(),
            scroll_offset: state.scroll_offset(),
            placeholder: None,
            max_length: None,
            on_change: None,
            on_submit: None,
            on_focus: None,
            on_blur: None,
        }
    }

    /// List of `ListItem`s, highlighting the state's selection
    pub fn list<T>(
        id: impl Into<FocusId>,
        items: &[T],
        state: &crate::tui::widgets::ListState,
        theme: &crate::tui::Theme,
    ) -> ListBuilder<Msg>
    where
        T: crate::tui::widgets::ListItem<Msg = Msg>,
    {
        let elements = items
            .iter()
            .enumerate()
            .map(|(i, item)| item.to_element(state.selected() == Some(i), theme))
            .collect();
        ListBuilder::new(id.into(), elements, state)
    }

    /// List from already-built rows
    pub fn list_of(
        id: impl Into<FocusId>,
        items: Vec<Element<Msg>>,
        state: &crate::tui::widgets::ListState,
    ) -> ListBuilder<Msg> {
        ListBuilder::new(id.into(), items, state)
    }

    pub fn default_constraint(&self) -> LayoutConstraint {
        match self {
            Element::None => LayoutConstraint::Length(0),
            Element::Text { .. } => LayoutConstraint::Length(1),
            Element::StyledText { .. } => LayoutConstraint::Length(1),
            Element::Button { .. } => LayoutConstraint::Length(3),
            Element::Column { .. } => LayoutConstraint::Fill(1),
            Element::Row { .. } => LayoutConstraint::Fill(1),
            Element::Container { .. } => LayoutConstraint::Fill(1),
            Element::Panel { child, height, .. } => {
                if let Some(h) = height {
                    LayoutConstraint::Length(*h)
                } else {
                    // Child plus top and bottom border
                    match child.default_constraint() {
                        LayoutConstraint::Length(n) => LayoutConstraint::Length(n + 2),
                        LayoutConstraint::Min(n) => LayoutConstraint::Min(n + 2),
                        LayoutConstraint::Fill(w) => LayoutConstraint::Fill(w),
                    }
                }
            }
            Element::List { .. } => LayoutConstraint::Fill(1),
            Element::TextInput { .. } => LayoutConstraint::Length(1),
        }
    }
}
