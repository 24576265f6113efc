use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::Theme;
use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;
use crate::tui::renderer::{FocusRegistry, FocusableInfo, InteractionRegistry};

/// Enter or Space presses the button
pub fn button_on_key<Msg: Clone + Send + 'static>(
    on_press: Option<Msg>,
) -> Box<dyn Fn(KeyEvent) -> DispatchTarget<Msg> + Send> {
    Box::new(move |key_event| match key_event.code {
        KeyCode::Enter | KeyCode::Char(' ') => match on_press.clone() {
            Some(msg) => DispatchTarget::AppMsg(msg),
            None => DispatchTarget::PassThrough,
        },
        _ => DispatchTarget::PassThrough,
    })
}

#[allow(clippy::too_many_arguments)]
pub fn render_button<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    theme: &Theme,
    registry: &mut InteractionRegistry<Msg>,
    focus_registry: &mut FocusRegistry<Msg>,
    focused_id: Option<&FocusId>,
    id: &FocusId,
    label: &str,
    on_press: &Option<Msg>,
    on_focus: &Option<Msg>,
    on_blur: &Option<Msg>,
    style: &Option<Style>,
    area: Rect,
) {
    focus_registry.register_focusable(FocusableInfo {
        id: id.clone(),
        rect: area,
        on_key: button_on_key(on_press.clone()),
        on_focus: on_focus.clone(),
        on_blur: on_blur.clone(),
    });

    if let Some(msg) = on_press {
        registry.register_click(area, msg.clone());
    }

    // Buttons always show focus on their own border
    let border_style = if focused_id == Some(id) {
        Style::default().fg(theme.lavender)
    } else {
        Style::default().fg(theme.overlay0)
    };

    let widget = Paragraph::new(label)
        .block(Block::default().borders(Borders::ALL).border_style(border_style))
        .alignment(Alignment::Center)
        .style(style.unwrap_or_else(|| Style::default().fg(theme.text)));
    frame.render_widget(widget, area);
}
