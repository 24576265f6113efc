use crossterm::event::KeyCode;

/// Cursor and horizontal scroll state of a text input
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    cursor_pos: usize,
    scroll_offset: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn set_cursor_to_end(&mut self, text: &str) {
        self.cursor_pos = text.chars().count();
    }

    /// Apply a key to `current_value`.
    /// Returns the new value if the text changed, `None` if only the cursor moved.
    pub fn handle_key(
        &mut self,
        key: KeyCode,
        current_value: &str,
        max_length: Option<usize>,
    ) -> Option<String> {
        let char_count = current_value.chars().count();
        // Values can be swapped underneath the state (e.g. selecting another question)
        self.cursor_pos = self.cursor_pos.min(char_count);

        match key {
            KeyCode::Char(c) => {
                if max_length.is_some_and(|max| char_count >= max) {
                    return None;
                }
                let mut chars: Vec<char> = current_value.chars().collect();
                chars.insert(self.cursor_pos, c);
                self.cursor_pos += 1;
                Some(chars.into_iter().collect())
            }
            KeyCode::Backspace => {
                if self.cursor_pos > 0 {
                    let mut chars: Vec<char> = current_value.chars().collect();
                    chars.remove(self.cursor_pos - 1);
                    self.cursor_pos -= 1;
                    Some(chars.into_iter().collect())
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                if self.cursor_pos < char_count {
                    let mut chars: Vec<char> = current_value.chars().collect();
                    chars.remove(self.cursor_pos);
                    Some(chars.into_iter().collect())
                } else {
                    None
                }
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor_pos < char_count {
                    self.cursor_pos += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                None
            }
            KeyCode::End => {
                self.cursor_pos = char_count;
                None
            }
            _ => None,
        }
    }

    /// Keep the cursor inside a window of `visible_width` characters
    pub fn update_scroll(&mut self, visible_width: usize, text: &str) {
        let char_count = text.chars().count();

        if self.cursor_pos < self.scroll_offset {
            self.scroll_offset = self.cursor_pos;
        } else if visible_width > 0 && self.cursor_pos >= self.scroll_offset + visible_width {
            self.scroll_offset = self.cursor_pos + 1 - visible_width;
        }

        let max_offset = char_count.saturating_sub(visible_width.saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_editing() {
        let mut state = TextInputState::new();
        let mut value = String::new();
        for c in "helo".chars() {
            value = state.handle_key(KeyCode::Char(c), &value, None).unwrap();
        }
        state.handle_key(KeyCode::Left, &value, None);
        value = state.handle_key(KeyCode::Char('l'), &value, None).unwrap();
        assert_eq!(value, "hello");

        state.handle_key(KeyCode::Home, &value, None);
        assert_eq!(state.handle_key(KeyCode::Backspace, &value, None), None);
        value = state.handle_key(KeyCode::Delete, &value, None).unwrap();
        assert_eq!(value, "ello");
    }

    #[test]
    fn test_max_length() {
        let mut state = TextInputState::new();
        state.set_cursor_to_end("ab");
        assert_eq!(state.handle_key(KeyCode::Char('c'), "ab", Some(2)), None);
    }

    #[test]
    fn test_cursor_clamped_when_value_shrinks() {
        let mut state = TextInputState::new();
        state.set_cursor_to_end("a long value");
        let value = state.handle_key(KeyCode::Char('!'), "ab", None).unwrap();
        assert_eq!(value, "ab!");
    }

    #[test]
    fn test_update_scroll_follows_cursor() {
        let mut state = TextInputState::new();
        let text = "abcdefghij";
        state.set_cursor_to_end(text);
        state.update_scroll(5, text);
        assert_eq!(state.scroll_offset(), 6);
        state.handle_key(KeyCode::Home, text, None);
        state.update_scroll(5, text);
        assert_eq!(state.scroll_offset(), 0);
    }
}
