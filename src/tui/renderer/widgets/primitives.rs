use ratatui::{Frame, layout::Rect, widgets::Paragraph};

use crate::tui::{Element, Theme};

pub fn is_primitive<Msg>(element: &Element<Msg>) -> bool {
    matches!(
        element,
        Element::None | Element::Text { .. } | Element::StyledText { .. }
    )
}

pub fn render_primitive<Msg>(frame: &mut Frame, theme: &Theme, element: &Element<Msg>, area: Rect) {
    match element {
        Element::Text { content, style } => {
            let style = style.unwrap_or_else(|| ratatui::style::Style::default().fg(theme.text));
            frame.render_widget(Paragraph::new(content.as_str()).style(style), area);
        }
        Element::StyledText { line, background } => {
            if let Some(bg) = background {
                frame.render_widget(Paragraph::new("").style(*bg), area);
            }
            frame.render_widget(Paragraph::new(line.clone()), area);
        }
        _ => {}
    }
}
