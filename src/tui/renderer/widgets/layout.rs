use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::tui::element::FocusId;
use crate::tui::renderer::{FocusRegistry, InteractionRegistry};
use crate::tui::{Element, LayoutConstraint, Theme};

/// Recursive render entry point handed to container widgets
pub type RenderFn<Msg> = fn(
    &mut Frame,
    &Theme,
    &mut InteractionRegistry<Msg>,
    &mut FocusRegistry<Msg>,
    Option<&FocusId>,
    &Element<Msg>,
    Rect,
    bool,
);

fn to_constraint(constraint: &LayoutConstraint) -> Constraint {
    match constraint {
        LayoutConstraint::Length(n) => Constraint::Length(*n),
        LayoutConstraint::Min(n) => Constraint::Min(*n),
        LayoutConstraint::Fill(w) => Constraint::Fill(*w),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render_linear<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    theme: &Theme,
    registry: &mut InteractionRegistry<Msg>,
    focus_registry: &mut FocusRegistry<Msg>,
    focused_id: Option<&FocusId>,
    items: &[(LayoutConstraint, Element<Msg>)],
    spacing: u16,
    direction: Direction,
    area: Rect,
    inside_panel: bool,
    render_fn: RenderFn<Msg>,
) {
    if items.is_empty() {
        return;
    }

    let chunks = Layout::default()
        .direction(direction)
        .constraints(items.iter().map(|(c, _)| to_constraint(c)))
        .spacing(spacing)
        .split(area);

    for ((_, child), chunk) in items.iter().zip(chunks.iter()) {
        render_fn(frame, theme, registry, focus_registry, focused_id, child, *chunk, inside_panel);
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render_container<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    theme: &Theme,
    registry: &mut InteractionRegistry<Msg>,
    focus_registry: &mut FocusRegistry<Msg>,
    focused_id: Option<&FocusId>,
    child: &Element<Msg>,
    padding: u16,
    area: Rect,
    inside_panel: bool,
    render_fn: RenderFn<Msg>,
) {
    let inner = Rect {
        x: area.x + padding,
        y: area.y + padding,
        width: area.width.saturating_sub(padding * 2),
        height: area.height.saturating_sub(padding * 2),
    };
    render_fn(frame, theme, registry, focus_registry, focused_id, child, inner, inside_panel);
}
