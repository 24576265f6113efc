use crossterm::event::KeyEvent;
use log::warn;
use ratatui::layout::Rect;

use super::interaction_registry::point_in_rect;
use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;

/// A focusable element seen during the last render
pub struct FocusableInfo<Msg> {
    pub id: FocusId,
    pub rect: Rect,
    pub on_key: Box<dyn Fn(KeyEvent) -> DispatchTarget<Msg> + Send>,
    pub on_focus: Option<Msg>,
    pub on_blur: Option<Msg>,
}

/// Focusable elements in render (tab) order
pub struct FocusRegistry<Msg> {
    focusables: Vec<FocusableInfo<Msg>>,
}

impl<Msg: Clone> Default for FocusRegistry<Msg> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Msg: Clone> FocusRegistry<Msg> {
    pub fn new() -> Self {
        Self {
            focusables: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.focusables.clear();
    }

    pub fn len(&self) -> usize {
        self.focusables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.focusables.is_empty()
    }

    pub fn register_focusable(&mut self, info: FocusableInfo<Msg>) {
        if self.contains(&info.id) {
            warn!("Duplicate FocusId {:?}, last registration wins", info.id);
            self.focusables.retain(|f| f.id != info.id);
        }
        self.focusables.push(info);
    }

    pub fn find(&self, id: &FocusId) -> Option<&FocusableInfo<Msg>> {
        self.focusables.iter().find(|f| &f.id == id)
    }

    pub fn contains(&self, id: &FocusId) -> bool {
        self.find(id).is_some()
    }

    /// Whether `id` was registered at or after position `start`
    pub fn registered_since(&self, start: usize, id: &FocusId) -> bool {
        self.focusables.iter().skip(start).any(|f| &f.id == id)
    }

    pub fn find_at_position(&self, x: u16, y: u16) -> Option<FocusId> {
        self.focusables
            .iter()
            .rev()
            .find(|f| point_in_rect(x, y, f.rect))
            .map(|f| f.id.clone())
    }

    /// Next focusable after `current`, wrapping around
    pub fn next_focus(&self, current: Option<&FocusId>) -> Option<FocusId> {
        let len = self.focusables.len();
        if len == 0 {
            return None;
        }
        let index = match current.and_then(|id| self.focusables.iter().position(|f| &f.id == id)) {
            Some(pos) => (pos + 1) % len,
            None => 0,
        };
        Some(self.focusables[index].id.clone())
    }

    /// Previous focusable before `current`, wrapping around
    pub fn prev_focus(&self, current: Option<&FocusId>) -> Option<FocusId> {
        let len = self.focusables.len();
        if len == 0 {
            return None;
        }
        let index = match current.and_then(|id| self.focusables.iter().position(|f| &f.id == id)) {
            Some(0) | None => len - 1,
            Some(pos) => pos - 1,
        };
        Some(self.focusables[index].id.clone())
    }

    /// Route a key to the focused element
    pub fn dispatch_key(&self, focused_id: &FocusId, key: KeyEvent) -> Option<Msg> {
        let focusable = self.find(focused_id)?;
        match (focusable.on_key)(key) {
            DispatchTarget::AppMsg(msg) => Some(msg),
            DispatchTarget::PassThrough => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(id: &'static str, rect: Rect) -> FocusableInfo<()> {
        FocusableInfo {
            id: FocusId(id),
            rect,
            on_key: Box::new(|_| DispatchTarget::PassThrough),
            on_focus: None,
            on_blur: None,
        }
    }

    #[test]
    fn test_focus_cycles_in_registration_order() {
        let mut registry = FocusRegistry::new();
        registry.register_focusable(info("a", Rect::new(0, 0, 5, 1)));
        registry.register_focusable(info("b", Rect::new(0, 1, 5, 1)));

        assert_eq!(registry.next_focus(None), Some(FocusId("a")));
        assert_eq!(registry.next_focus(Some(&FocusId("b"))), Some(FocusId("a")));
        assert_eq!(registry.prev_focus(Some(&FocusId("a"))), Some(FocusId("b")));
        assert_eq!(registry.prev_focus(None), Some(FocusId("b")));
    }

    #[test]
    fn test_find_at_position_and_duplicates() {
        let mut registry = FocusRegistry::new();
        registry.register_focusable(info("a", Rect::new(0, 0, 5, 1)));
        registry.register_focusable(info("a", Rect::new(0, 3, 5, 1)));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find_at_position(2, 3), Some(FocusId("a")));
        assert_eq!(registry.find_at_position(2, 0), None);
    }
}
