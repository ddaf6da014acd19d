//! # Command Registry
//!
//! Holds every command and dispatches a key event to the first one that
//! claims it for the current input mode.

use std::sync::Arc;

use crossterm::event::KeyEvent;

use super::{
    BackspaceCommand, ClearAllCommand, ClearEntryCommand, Command, ConfirmClearCommand,
    DigitCommand, EvaluateCommand, HistoryClearCommand, OperationCommand, QuitCommand,
};
use crate::repl::events::{CommandEvent, InputMode};

type CommandArc = Arc<dyn Command>;

/// First-match dispatch over the registered commands
pub struct CommandRegistry {
    commands: Vec<CommandArc>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };
        registry.register_default_commands();
        registry
    }

    fn register_default_commands(&mut self) {
        // The confirmation command is mode-gated and claims every key in
        // its mode, so it goes first.
        self.add_command(Arc::new(ConfirmClearCommand));
        self.add_command(Arc::new(QuitCommand));
        self.add_command(Arc::new(HistoryClearCommand));
        self.add_command(Arc::new(DigitCommand));
        self.add_command(Arc::new(OperationCommand));
        self.add_command(Arc::new(EvaluateCommand));
        self.add_command(Arc::new(BackspaceCommand));
        self.add_command(Arc::new(ClearEntryCommand));
        self.add_command(Arc::new(ClearAllCommand));
    }

    pub fn add_command(&mut self, command: CommandArc) {
        self.commands.push(command);
    }

    /// Translate a key event into semantic events. Unclaimed keys produce
    /// nothing.
    pub fn process_event(&self, key: KeyEvent, mode: InputMode) -> Vec<CommandEvent> {
        for command in &self.commands {
            if command.is_relevant(key, mode) {
                tracing::debug!("{} claims {:?} in {:?}", command.name(), key, mode);
                return command.execute(key);
            }
        }
        tracing::debug!("no command for {:?} in {:?}", key, mode);
        Vec::new()
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
