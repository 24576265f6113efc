use ratatui::{Frame, layout::Direction, layout::Rect};

use crate::tui::element::FocusId;
use crate::tui::{Element, Theme};

mod focus_registry;
mod interaction_registry;
mod widgets;

pub use focus_registry::{FocusRegistry, FocusableInfo};
pub use interaction_registry::InteractionRegistry;

use widgets::*;

/// Renders element trees to the terminal
pub struct Renderer;

impl Renderer {
    pub fn render<Msg: Clone + Send + 'static>(
        frame: &mut Frame,
        theme: &Theme,
        registry: &mut InteractionRegistry<Msg>,
        focus_registry: &mut FocusRegistry<Msg>,
        focused_id: Option<&FocusId>,
        element: &Element<Msg>,
        area: Rect,
    ) {
        Self::render_element(frame, theme, registry, focus_registry, focused_id, element, area, false);
    }

    #[allow(clippy::too_many_arguments)]
    fn render_element<Msg: Clone + Send + 'static>(
        frame: &mut Frame,
        theme: &Theme,
        registry: &mut InteractionRegistry<Msg>,
        focus_registry: &mut FocusRegistry<Msg>,
        focused_id: Option<&FocusId>,
        element: &Element<Msg>,
        area: Rect,
        inside_panel: bool,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if primitives::is_primitive(element) {
            primitives::render_primitive(frame, theme, element, area);
            return;
        }

        match element {
            Element::Button {
                id,
                label,
                on_press,
                on_focus,
                on_blur,
                style,
            } => {
                render_button(
                    frame, theme, registry, focus_registry, focused_id, id, label, on_press,
                    on_focus, on_blur, style, area,
                );
            }
            Element::Column { items, spacing } => {
                layout::render_linear(
                    frame, theme, registry, focus_registry, focused_id, items, *spacing,
                    Direction::Vertical, area, inside_panel, Self::render_element,
                );
            }
            Element::Row { items, spacing } => {
                layout::render_linear(
                    frame, theme, registry, focus_registry, focused_id, items, *spacing,
                    Direction::Horizontal, area, inside_panel, Self::render_element,
                );
            }
            Element::Container { child, padding } => {
                layout::render_container(
                    frame, theme, registry, focus_registry, focused_id, child, *padding, area,
                    inside_panel, Self::render_element,
                );
            }
            Element::Panel { child, title, .. } => {
                render_panel(
                    frame, theme, registry, focus_registry, focused_id, child, title, area,
                    Self::render_element,
                );
            }
            Element::List {
                id,
                items,
                selected,
                scroll_offset,
                on_select,
                on_activate,
                on_navigate,
                on_focus,
                on_blur,
                on_render,
            } => {
                render_list(
                    frame, theme, registry, focus_registry, focused_id, id, items, *selected,
                    *scroll_offset, on_select, on_activate, on_navigate, on_focus, on_blur,
                    on_render, area, inside_panel, Self::render_element,
                );
            }
            Element::TextInput {
                id,
                value,
                cursor_pos,
                scroll_offset,
                placeholder,
                on_change,
                on_submit,
                on_focus,
                on_blur,
                ..
            } => {
                render_text_input(
                    frame, theme, focus_registry, focused_id, id, value, *cursor_pos,
                    *scroll_offset, placeholder, on_change, on_submit, on_focus, on_blur, area,
                );
            }
            Element::None | Element::Text { .. } | Element::StyledText { .. } => {}
        }
    }
}
