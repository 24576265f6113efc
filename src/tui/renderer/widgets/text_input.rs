use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    widgets::Paragraph,
};

use crate::tui::Theme;
use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;
use crate::tui::renderer::{FocusRegistry, FocusableInfo};

/// Every key but Esc and Tab goes to `on_change`; Enter fires `on_submit` instead when set
pub fn text_input_on_key<Msg: Clone + Send + 'static>(
    on_change: Option<fn(KeyCode) -> Msg>,
    on_submit: Option<Msg>,
) -> Box<dyn Fn(KeyEvent) -> DispatchTarget<Msg> + Send> {
    Box::new(move |key_event| match key_event.code {
        KeyCode::Enter if on_submit.is_some() => match on_submit.clone() {
            Some(msg) => DispatchTarget::AppMsg(msg),
            None => DispatchTarget::PassThrough,
        },
        KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => DispatchTarget::PassThrough,
        code => match on_change {
            Some(f) => DispatchTarget::AppMsg(f(code)),
            None => DispatchTarget::PassThrough,
        },
    })
}

#[allow(clippy::too_many_arguments)]
pub fn render_text_input<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    theme: &Theme,
    focus_registry: &mut FocusRegistry<Msg>,
    focused_id: Option<&FocusId>,
    id: &FocusId,
    value: &str,
    cursor_pos: usize,
    scroll_offset: usize,
    placeholder: &Option<String>,
    on_change: &Option<fn(KeyCode) -> Msg>,
    on_submit: &Option<Msg>,
    on_focus: &Option<Msg>,
    on_blur: &Option<Msg>,
    area: Rect,
) {
    focus_registry.register_focusable(FocusableInfo {
        id: id.clone(),
        rect: area,
        on_key: text_input_on_key(*on_change, on_submit.clone()),
        on_focus: on_focus.clone(),
        on_blur: on_blur.clone(),
    });

    let is_focused = focused_id == Some(id);

    // One column of left padding, one reserved for the cursor
    let visible_width = area.width.saturating_sub(2) as usize;
    let chars: Vec<char> = value.chars().collect();
    let start = scroll_offset.min(chars.len());
    let end = (start + visible_width).min(chars.len());
    let mut visible: Vec<char> = chars[start..end].to_vec();

    let (display, style) = if value.is_empty() && !is_focused {
        let text = placeholder.as_deref().unwrap_or("");
        (format!(" {}", text), Style::default().fg(theme.overlay1).italic())
    } else {
        if is_focused {
            let cursor = cursor_pos.saturating_sub(start).min(visible.len());
            visible.insert(cursor, '│');
        }
        let text: String = visible.into_iter().collect();
        (format!(" {}", text), Style::default().fg(theme.text))
    };

    let bg = if is_focused { theme.surface0 } else { theme.mantle };
    frame.render_widget(Paragraph::new(display).style(style.bg(bg)), area);
}
