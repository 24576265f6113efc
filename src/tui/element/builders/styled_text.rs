use ratatui::style::Style;
use ratatui::text::Line;

use crate::tui::Element;

/// Builder for one line of styled spans
pub struct StyledTextBuilder<Msg> {
    pub(crate) line: Line<'static>,
    pub(crate) background: Option<Style>,
    pub(crate) _phantom: std::marker::PhantomData<Msg>,
}

impl<Msg> StyledTextBuilder<Msg> {
    /// Fill the whole line area with this style before drawing the text
    pub fn background(mut self, style: Style) -> Self {
        self.background = Some(style);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::StyledText {
            line: self.line,
            background: self.background,
        }
    }
}
