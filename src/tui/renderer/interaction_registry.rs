use ratatui::layout::Rect;

/// Mouse handlers registered while rendering, plus messages the renderer
/// wants delivered after the frame (viewport sizes)
pub struct InteractionRegistry<Msg> {
    click_handlers: Vec<(Rect, Msg)>,
    render_messages: Vec<Msg>,
}

impl<Msg: Clone> Default for InteractionRegistry<Msg> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Msg: Clone> InteractionRegistry<Msg> {
    pub fn new() -> Self {
        Self {
            click_handlers: Vec::new(),
            render_messages: Vec::new(),
        }
    }

    pub fn register_click(&mut self, rect: Rect, msg: Msg) {
        self.click_handlers.push((rect, msg));
    }

    pub fn add_render_message(&mut self, msg: Msg) {
        self.render_messages.push(msg);
    }

    pub fn take_render_messages(&mut self) -> Vec<Msg> {
        std::mem::take(&mut self.render_messages)
    }

    pub fn find_click(&self, x: u16, y: u16) -> Option<Msg> {
        // Last registered wins: inner elements render after their parents
        self.click_handlers
            .iter()
            .rev()
            .find(|(rect, _)| point_in_rect(x, y, *rect))
            .map(|(_, msg)| msg.clone())
    }

    pub fn clear(&mut self) {
        self.click_handlers.clear();
        self.render_messages.clear();
    }
}

pub(crate) fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
