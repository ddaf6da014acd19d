//! # Application Commands
//!
//! Quit, the history-clear request, and the confirmation step that guards
//! it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{unmodified, Command};
use crate::repl::events::{CommandEvent, InputMode};

/// `q` or Ctrl+C exits
pub struct QuitCommand;

impl Command for QuitCommand {
    fn is_relevant(&self, key: KeyEvent, mode: InputMode) -> bool {
        if mode != InputMode::Normal {
            return false;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => unmodified(key),
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }

    fn execute(&self, _key: KeyEvent) -> Vec<CommandEvent> {
        vec![CommandEvent::QuitRequested]
    }

    fn name(&self) -> &'static str {
        "QuitCommand"
    }
}

/// Ctrl+L asks to clear the history tape
pub struct HistoryClearCommand;

impl Command for HistoryClearCommand {
    fn is_relevant(&self, key: KeyEvent, mode: InputMode) -> bool {
        mode == InputMode::Normal
            && key.code == KeyCode::Char('l')
            && key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn execute(&self, _key: KeyEvent) -> Vec<CommandEvent> {
        vec![CommandEvent::HistoryClearRequested]
    }

    fn name(&self) -> &'static str {
        "HistoryClearCommand"
    }
}

/// In confirmation mode every key answers the prompt: `y` clears the
/// tape, anything else keeps it.
pub struct ConfirmClearCommand;

impl Command for ConfirmClearCommand {
    fn is_relevant(&self, _key: KeyEvent, mode: InputMode) -> bool {
        mode == InputMode::ConfirmClearHistory
    }

    fn execute(&self, key: KeyEvent) -> Vec<CommandEvent> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                vec![CommandEvent::HistoryClearConfirmed]
            }
            _ => vec![CommandEvent::HistoryClearCancelled],
        }
    }

    fn name(&self) -> &'static str {
        "ConfirmClearCommand"
    }
}
