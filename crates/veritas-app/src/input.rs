//! Input state and key handling.
//!
//! This module owns the claim text state (buffer, cursor) and handles
//! character-level key events. Submission happens here on Enter, delegating
//! the gating decision to [`App::submit`].

use crate::{App, AppAction};

/// Keyboard input abstraction.
///
/// Decouples application logic from terminal libraries (crossterm, termion,
/// etc.) enabling deterministic testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (submit the claim).
    Enter,
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Delete key (delete character at cursor).
    Delete,
    /// Escape key (quit).
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Home key (cursor to start).
    Home,
    /// End key (cursor to end).
    End,
}

/// Claim input state.
///
/// Manages the text buffer and cursor position. The cursor counts characters,
/// not bytes, so edits stay on UTF-8 boundaries. The buffer is never cleared
/// automatically: submission keeps the text so the user can edit and
/// resubmit.
#[derive(Debug, Default)]
pub struct InputState {
    /// Claim text buffer.
    buffer: String,
    /// Cursor position within the buffer, in characters.
    cursor: usize,
}

impl InputState {
    /// Create a new empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text in the input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current cursor position, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle a key input event.
    ///
    /// Editing keys mutate the buffer unconditionally (no validation at input
    /// time) and return a render action; Enter submits through the app.
    pub fn handle_key(&mut self, key: KeyInput, app: &mut App) -> Vec<AppAction> {
        match key {
            KeyInput::Char(c) => {
                let at = self.byte_index();
                self.buffer.insert(at, c);
                self.cursor = self.cursor.saturating_add(1);
                vec![AppAction::Render]
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor = self.cursor.saturating_sub(1);
                    let at = self.byte_index();
                    self.buffer.remove(at);
                }
                vec![AppAction::Render]
            },
            KeyInput::Delete => {
                if self.cursor < self.char_count() {
                    let at = self.byte_index();
                    self.buffer.remove(at);
                }
                vec![AppAction::Render]
            },
            KeyInput::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyInput::Right => {
                if self.cursor < self.char_count() {
                    self.cursor = self.cursor.saturating_add(1);
                }
                vec![AppAction::Render]
            },
            KeyInput::Home => {
                self.cursor = 0;
                vec![AppAction::Render]
            },
            KeyInput::End => {
                self.cursor = self.char_count();
                vec![AppAction::Render]
            },
            KeyInput::Enter => app.submit(&self.buffer),
            KeyInput::Esc => app.quit(),
        }
    }

    /// Byte offset of the cursor's character position.
    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map_or(self.buffer.len(), |(index, _)| index)
    }

    /// Number of characters in the buffer.
    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }
}
