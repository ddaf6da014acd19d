//! # Entry Commands
//!
//! Digit entry and the three flavors of erasing: backspace, clear entry,
//! clear all.

use crossterm::event::{KeyCode, KeyEvent};

use super::{unmodified, Command};
use crate::repl::events::{CommandEvent, InputMode};

/// Digits `0`-`9` and the decimal point
pub struct DigitCommand;

impl Command for DigitCommand {
    fn is_relevant(&self, key: KeyEvent, mode: InputMode) -> bool {
        mode == InputMode::Normal
            && unmodified(key)
            && matches!(key.code, KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '.')
    }

    fn execute(&self, key: KeyEvent) -> Vec<CommandEvent> {
        let KeyCode::Char(digit) = key.code else {
            return vec![];
        };
        vec![CommandEvent::DigitEntered { digit }]
    }

    fn name(&self) -> &'static str {
        "DigitCommand"
    }
}

/// Backspace removes the last entry character
pub struct BackspaceCommand;

impl Command for BackspaceCommand {
    fn is_relevant(&self, key: KeyEvent, mode: InputMode) -> bool {
        mode == InputMode::Normal && key.code == KeyCode::Backspace
    }

    fn execute(&self, _key: KeyEvent) -> Vec<CommandEvent> {
        vec![CommandEvent::BackspaceRequested]
    }

    fn name(&self) -> &'static str {
        "BackspaceCommand"
    }
}

/// Delete or `e` resets the current entry only
pub struct ClearEntryCommand;

impl Command for ClearEntryCommand {
    fn is_relevant(&self, key: KeyEvent, mode: InputMode) -> bool {
        mode == InputMode::Normal
            && unmodified(key)
            && matches!(key.code, KeyCode::Delete | KeyCode::Char('e') | KeyCode::Char('E'))
    }

    fn execute(&self, _key: KeyEvent) -> Vec<CommandEvent> {
        vec![CommandEvent::ClearEntryRequested]
    }

    fn name(&self) -> &'static str {
        "ClearEntryCommand"
    }
}

/// Escape or `c` resets the whole calculator
pub struct ClearAllCommand;

impl Command for ClearAllCommand {
    fn is_relevant(&self, key: KeyEvent, mode: InputMode) -> bool {
        mode == InputMode::Normal
            && unmodified(key)
            && matches!(key.code, KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('C'))
    }

    fn execute(&self, _key: KeyEvent) -> Vec<CommandEvent> {
        vec![CommandEvent::ClearAllRequested]
    }

    fn name(&self) -> &'static str {
        "ClearAllCommand"
    }
}
