use crossterm::event::KeyCode;

use crate::tui::{Element, Theme};

/// Items that can be displayed in a list
pub trait ListItem {
    type Msg: Clone;

    fn to_element(&self, is_selected: bool, theme: &Theme) -> Element<Self::Msg>;
}

/// List selection and scrolling state
#[derive(Debug, Clone)]
pub struct ListState {
    selected: Option<usize>,
    scroll_offset: usize,
    /// Rows kept visible between the selection and the viewport edge
    scroll_off: usize,
    wrap_around: bool,
    viewport_height: Option<usize>,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    pub fn new() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            scroll_off: 3,
            wrap_around: true,
            viewport_height: None,
        }
    }

    /// A state with the first item selected
    pub fn with_selection() -> Self {
        Self {
            selected: Some(0),
            ..Self::new()
        }
    }

    pub fn with_wrap_around(mut self, wrap_around: bool) -> Self {
        self.wrap_around = wrap_around;
        self
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Record the viewport height reported by the renderer
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = Some(height);
    }

    /// Select `index` and scroll so it stays visible
    pub fn select(&mut self, index: Option<usize>, item_count: usize) {
        self.selected = index.filter(|&i| i < item_count);
        self.update_scroll(self.viewport_height.unwrap_or(10), item_count);
    }

    /// Re-validate the selection after the item count changed
    pub fn clamp(&mut self, item_count: usize) {
        self.selected = match (self.selected, item_count) {
            (_, 0) => None,
            (Some(sel), n) if sel >= n => Some(n - 1),
            (sel, _) => sel,
        };
        self.update_scroll(self.viewport_height.unwrap_or(10), item_count);
    }

    /// Handle a navigation key, returns true if it was consumed
    pub fn handle_key(&mut self, key: KeyCode, item_count: usize) -> bool {
        if item_count == 0 {
            return false;
        }
        let height = self.viewport_height.unwrap_or(10).max(1);

        let next = match (key, self.selected) {
            (KeyCode::Up, None) | (KeyCode::Down, None) => 0,
            (KeyCode::Up, Some(0)) if self.wrap_around => item_count - 1,
            (KeyCode::Up, Some(sel)) => sel.saturating_sub(1),
            (KeyCode::Down, Some(sel)) if sel + 1 >= item_count => {
                if self.wrap_around { 0 } else { sel }
            }
            (KeyCode::Down, Some(sel)) => sel + 1,
            (KeyCode::PageUp, sel) => sel.unwrap_or(0).saturating_sub(height),
            (KeyCode::PageDown, sel) => (sel.unwrap_or(0) + height).min(item_count - 1),
            (KeyCode::Home, _) => 0,
            (KeyCode::End, _) => item_count - 1,
            _ => return false,
        };

        self.selected = Some(next);
        self.update_scroll(height, item_count);
        true
    }

    /// Adjust scroll offset so the selection stays visible with scroll-off
    pub fn update_scroll(&mut self, visible_height: usize, item_count: usize) {
        if let Some(sel) = self.selected {
            let min_scroll = sel.saturating_sub(visible_height.saturating_sub(self.scroll_off + 1));
            let max_scroll = sel.saturating_sub(self.scroll_off);

            if self.scroll_offset < min_scroll {
                self.scroll_offset = min_scroll;
            } else if self.scroll_offset > max_scroll {
                self.scroll_offset = max_scroll;
            }
        }

        let max_offset = item_count.saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut state = ListState::new();
        assert!(state.handle_key(KeyCode::Down, 3));
        assert_eq!(state.selected(), Some(0));
        state.handle_key(KeyCode::Up, 3);
        assert_eq!(state.selected(), Some(2));
        state.handle_key(KeyCode::Down, 3);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_no_wrap() {
        let mut state = ListState::with_selection().with_wrap_around(false);
        state.handle_key(KeyCode::Up, 3);
        assert_eq!(state.selected(), Some(0));
        state.handle_key(KeyCode::End, 3);
        state.handle_key(KeyCode::Down, 3);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_empty_list_ignores_keys() {
        let mut state = ListState::new();
        assert!(!state.handle_key(KeyCode::Down, 0));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_clamp_after_removal() {
        let mut state = ListState::new();
        state.select(Some(4), 5);
        state.clamp(3);
        assert_eq!(state.selected(), Some(2));
        state.clamp(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_scroll_keeps_selection_visible() {
        let mut state = ListState::new();
        state.set_viewport_height(5);
        state.handle_key(KeyCode::End, 20);
        assert_eq!(state.selected(), Some(19));
        assert_eq!(state.scroll_offset(), 15);
    }
}
