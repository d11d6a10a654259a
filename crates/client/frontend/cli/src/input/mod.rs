//! Input processing for the CLI frontend.
//!
//! This module owns the keyboard-to-command mapping so the event loop can
//! remain agnostic about concrete key bindings or the specifics of
//! `crossterm` events.

use client_frontend_core::SortMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Fetch the player document again.
    Refresh,
    /// Select a sort mode by its dropdown index.
    Sort(SortMode),
    /// Advance to the next sort mode.
    CycleSort,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into screen commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Tab => KeyAction::CycleSort,
            KeyCode::F(5) => KeyAction::Refresh,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        if let Some(mode) = raw
            .to_digit(10)
            .and_then(|digit| SortMode::from_index(digit as usize))
        {
            return KeyAction::Sort(mode);
        }

        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'r' => KeyAction::Refresh,
            's' => KeyAction::CycleSort,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_digits_to_sort_modes() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('0'))),
            KeyAction::Sort(SortMode::Unsorted)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('2'))),
            KeyAction::Sort(SortMode::ByQuantityDesc)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('3'))),
            KeyAction::Sort(SortMode::ByWeightDesc)
        );
    }

    #[test]
    fn out_of_range_digit_is_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('7'))), KeyAction::None);
    }

    #[test]
    fn maps_refresh_cycle_and_quit() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('R'))), KeyAction::Refresh);
        assert_eq!(handler.handle_key(key(KeyCode::F(5))), KeyAction::Refresh);
        assert_eq!(handler.handle_key(key(KeyCode::Tab)), KeyAction::CycleSort);
        assert_eq!(handler.handle_key(key(KeyCode::Char('s'))), KeyAction::CycleSort);
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let handler = InputHandler::new();
        let mut event = key(KeyCode::Char('c'));
        event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(handler.handle_key(event), KeyAction::Quit);
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Left)), KeyAction::None);
    }
}
