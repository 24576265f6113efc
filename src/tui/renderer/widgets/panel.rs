use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};

use crate::tui::element::FocusId;
use crate::tui::renderer::{FocusRegistry, InteractionRegistry};
use crate::tui::{Element, Theme};

use super::layout::RenderFn;

/// Render a bordered panel. The border lights up when focus is inside it.
#[allow(clippy::too_many_arguments)]
pub fn render_panel<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    theme: &Theme,
    registry: &mut InteractionRegistry<Msg>,
    focus_registry: &mut FocusRegistry<Msg>,
    focused_id: Option<&FocusId>,
    child: &Element<Msg>,
    title: &Option<String>,
    area: Rect,
    render_fn: RenderFn<Msg>,
) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(t) = title {
        block = block.title(format!(" {} ", t));
    }
    let inner = block.inner(area);

    let before = focus_registry.len();
    render_fn(frame, theme, registry, focus_registry, focused_id, child, inner, true);
    let focus_within = focused_id.is_some_and(|id| focus_registry.registered_since(before, id));

    let border_color = if focus_within { theme.lavender } else { theme.overlay0 };
    frame.render_widget(block.border_style(Style::default().fg(border_color)), area);
}
