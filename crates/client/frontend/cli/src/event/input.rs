//! Keyboard handling for the event loop.

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use tokio::time::Duration;

use super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

/// What the loop should do after a key was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::event) enum KeyOutcome {
    Quit,
    Redraw,
    Unchanged,
}

impl EventLoop {
    /// Poll for keyboard input without blocking. Returns `true` to quit.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.input.handle_key(key);
                match self.apply_key(action) {
                    KeyOutcome::Quit => Ok(true),
                    KeyOutcome::Redraw => {
                        self.render(terminal)?;
                        Ok(false)
                    }
                    KeyOutcome::Unchanged => Ok(false),
                }
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Apply a decoded key to the controller.
    pub(in crate::event) fn apply_key(&mut self, action: KeyAction) -> KeyOutcome {
        match action {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                KeyOutcome::Quit
            }
            KeyAction::Refresh => {
                self.screen = self.controller.refresh();
                KeyOutcome::Redraw
            }
            KeyAction::Sort(mode) => self.apply_sort(mode),
            KeyAction::CycleSort => self.apply_sort(self.controller.sort_mode().next()),
            KeyAction::None => KeyOutcome::Unchanged,
        }
    }

    fn apply_sort(&mut self, mode: client_frontend_core::SortMode) -> KeyOutcome {
        match self.controller.on_sort_changed(mode) {
            Some(screen) => {
                self.screen = screen;
                KeyOutcome::Redraw
            }
            None => KeyOutcome::Unchanged,
        }
    }
}
