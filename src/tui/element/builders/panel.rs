use crate::tui::Element;

/// Builder for bordered panels
pub struct PanelBuilder<Msg> {
    pub(crate) child: Box<Element<Msg>>,
    pub(crate) title: Option<String>,
    pub(crate) height: Option<u16>,
}

impl<Msg> PanelBuilder<Msg> {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Fixed outer height, borders included
    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Panel {
            child: self.child,
            title: self.title,
            height: self.height,
        }
    }
}
