//! Single-line text input buffer with cursor management.
//!
//! Shared by every text field in the onboarding and sign-up forms.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Mask character for secret fields.
pub const MASK_CHAR: char = '•';

/// A simple text input buffer with cursor positioning.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    content: String,
    /// Byte offset into `content`, always on a char boundary.
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer pre-filled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let content = text.into();
        let cursor = content.len();
        Self { content, cursor }
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.content.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            let next = self.next_boundary();
            self.content.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    fn prev_boundary(&self) -> usize {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.content[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.content.len())
    }

    /// Apply an editing key. Returns true if the text changed.
    ///
    /// Cursor movement is consumed but reports no change; keys the buffer
    /// does not handle (Tab, Enter, Esc, chords) are left to the caller.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                let before = self.content.len();
                self.backspace();
                before != self.content.len()
            }
            KeyCode::Delete => {
                let before = self.content.len();
                self.delete();
                before != self.content.len()
            }
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Home => {
                self.move_home();
                false
            }
            KeyCode::End => {
                self.move_end();
                false
            }
            _ => false,
        }
    }

    /// Whether `key` is one [`handle_key`](Self::handle_key) acts on.
    pub fn accepts(key: &KeyEvent) -> bool {
        !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            && matches!(
                key.code,
                KeyCode::Char(_)
                    | KeyCode::Backspace
                    | KeyCode::Delete
                    | KeyCode::Left
                    | KeyCode::Right
                    | KeyCode::Home
                    | KeyCode::End
            )
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    /// Text as displayed: one [`MASK_CHAR`] per char when `masked`.
    pub fn display(&self, masked: bool) -> String {
        if masked {
            std::iter::repeat(MASK_CHAR)
                .take(self.content.chars().count())
                .collect()
        } else {
            self.content.clone()
        }
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Cursor position in chars, for placing the terminal cursor.
    pub fn cursor_column(&self) -> u16 {
        u16::try_from(self.content[..self.cursor].chars().count()).unwrap_or(u16::MAX)
    }
}
