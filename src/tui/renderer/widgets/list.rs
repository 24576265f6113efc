use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};

use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;
use crate::tui::renderer::{FocusRegistry, FocusableInfo, InteractionRegistry};
use crate::tui::{Element, Theme};

use super::layout::RenderFn;

/// Unmodified navigation keys go to `on_navigate`, Enter activates the selection
pub fn list_on_key<Msg: Clone + Send + 'static>(
    selected: Option<usize>,
    on_navigate: Option<fn(KeyCode) -> Msg>,
    on_activate: Option<fn(usize) -> Msg>,
) -> Box<dyn Fn(KeyEvent) -> DispatchTarget<Msg> + Send> {
    Box::new(move |key_event| {
        if !key_event.modifiers.is_empty() {
            return DispatchTarget::PassThrough;
        }
        match key_event.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End => match on_navigate {
                Some(f) => DispatchTarget::AppMsg(f(key_event.code)),
                None => DispatchTarget::PassThrough,
            },
            KeyCode::Enter => match (selected, on_activate) {
                (Some(idx), Some(activate)) => DispatchTarget::AppMsg(activate(idx)),
                _ => DispatchTarget::PassThrough,
            },
            _ => DispatchTarget::PassThrough,
        }
    })
}

#[allow(clippy::too_many_arguments)]
pub fn render_list<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    theme: &Theme,
    registry: &mut InteractionRegistry<Msg>,
    focus_registry: &mut FocusRegistry<Msg>,
    focused_id: Option<&FocusId>,
    id: &FocusId,
    items: &[Element<Msg>],
    selected: Option<usize>,
    scroll_offset: usize,
    on_select: &Option<fn(usize) -> Msg>,
    on_activate: &Option<fn(usize) -> Msg>,
    on_navigate: &Option<fn(KeyCode) -> Msg>,
    on_focus: &Option<Msg>,
    on_blur: &Option<Msg>,
    on_render: &Option<fn(usize) -> Msg>,
    area: Rect,
    inside_panel: bool,
    render_fn: RenderFn<Msg>,
) {
    if let Some(f) = on_render {
        registry.add_render_message(f(area.height as usize));
    }

    focus_registry.register_focusable(FocusableInfo {
        id: id.clone(),
        rect: area,
        on_key: list_on_key(selected, *on_navigate, *on_activate),
        on_focus: on_focus.clone(),
        on_blur: on_blur.clone(),
    });

    // Virtual scrolling: only visible rows are rendered
    let visible_height = area.height as usize;
    let start = scroll_offset.min(items.len());
    let end = (start + visible_height).min(items.len());

    for (row, item) in items[start..end].iter().enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + row as u16,
            width: area.width,
            height: 1,
        };
        render_fn(frame, theme, registry, focus_registry, focused_id, item, row_area, inside_panel);
        if let Some(f) = on_select {
            registry.register_click(row_area, f(start + row));
        }
    }

    if items.len() > visible_height && area.height > 1 && area.width > 0 {
        let max_offset = items.len() - visible_height;
        let thumb = (start as f32 / max_offset as f32 * (area.height - 1) as f32) as u16;
        let thumb_area = Rect {
            x: area.x + area.width - 1,
            y: area.y + thumb.min(area.height - 1),
            width: 1,
            height: 1,
        };
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.overlay1)),
            thumb_area,
        );
    }

    // Panels show focus on their own border
    if focused_id == Some(id) && !inside_panel {
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.lavender)),
            area,
        );
    }
}
