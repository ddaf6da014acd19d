//! # Operator Commands
//!
//! Operator selection and evaluation.

use crossterm::event::{KeyCode, KeyEvent};

use super::{unmodified, Command};
use crate::repl::events::{CommandEvent, InputMode};
use crate::repl::models::Operation;

/// `+`, `-`, `*`/`x`, `/` select the pending operation
pub struct OperationCommand;

impl Command for OperationCommand {
    fn is_relevant(&self, key: KeyEvent, mode: InputMode) -> bool {
        mode == InputMode::Normal
            && unmodified(key)
            && matches!(key.code, KeyCode::Char(ch) if Operation::from_key(ch).is_some())
    }

    fn execute(&self, key: KeyEvent) -> Vec<CommandEvent> {
        let KeyCode::Char(ch) = key.code else {
            return vec![];
        };
        match Operation::from_key(ch) {
            Some(operation) => vec![CommandEvent::OperationChosen { operation }],
            None => vec![],
        }
    }

    fn name(&self) -> &'static str {
        "OperationCommand"
    }
}

/// Enter or `=` submits the pending calculation
pub struct EvaluateCommand;

impl Command for EvaluateCommand {
    fn is_relevant(&self, key: KeyEvent, mode: InputMode) -> bool {
        mode == InputMode::Normal
            && unmodified(key)
            && matches!(key.code, KeyCode::Enter | KeyCode::Char('='))
    }

    fn execute(&self, _key: KeyEvent) -> Vec<CommandEvent> {
        vec![CommandEvent::EvaluateRequested]
    }

    fn name(&self) -> &'static str {
        "EvaluateCommand"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)
    }

    #[test]
    fn operation_command_should_claim_all_operator_keys() {
        let command = OperationCommand;
        for ch in ['+', '-', '*', 'x', 'X', '/'] {
            assert!(command.is_relevant(key(ch), InputMode::Normal), "{ch}");
        }
        assert!(!command.is_relevant(key('%'), InputMode::Normal));
    }

    #[test]
    fn operation_command_should_emit_the_operation() {
        assert_eq!(
            OperationCommand.execute(key('x')),
            vec![CommandEvent::OperationChosen {
                operation: Operation::Multiply
            }]
        );
    }

    #[test]
    fn evaluate_command_should_claim_enter_and_equals() {
        let command = EvaluateCommand;
        assert!(command.is_relevant(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            InputMode::Normal
        ));
        assert!(command.is_relevant(key('='), InputMode::Normal));
        assert_eq!(
            command.execute(key('=')),
            vec![CommandEvent::EvaluateRequested]
        );
    }
}
