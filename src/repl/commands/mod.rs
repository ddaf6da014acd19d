//! # Command Layer
//!
//! Maps key events to semantic [`CommandEvent`]s. Each command declares
//! which (key, mode) pairs it is relevant for; the registry dispatches to
//! the first match. Commands never touch state themselves.

use crossterm::event::{KeyEvent, KeyModifiers};

use crate::repl::events::{CommandEvent, InputMode};

pub mod app;
pub mod entry;
pub mod operators;
pub mod registry;

pub use app::{ConfirmClearCommand, HistoryClearCommand, QuitCommand};
pub use entry::{BackspaceCommand, ClearAllCommand, ClearEntryCommand, DigitCommand};
pub use operators::{EvaluateCommand, OperationCommand};
pub use registry::CommandRegistry;

/// A handler for one family of key presses
pub trait Command: Send + Sync {
    /// Whether this command handles the given key in the given mode.
    /// Only one registered command should claim any (key, mode) pair.
    fn is_relevant(&self, key: KeyEvent, mode: InputMode) -> bool;

    /// Translate the key into semantic events
    fn execute(&self, key: KeyEvent) -> Vec<CommandEvent>;

    /// Command name for debugging and logging
    fn name(&self) -> &'static str;
}

/// True when no modifier beyond Shift is held.
///
/// Shift is tolerated because several operator characters arrive shifted
/// depending on the keyboard layout.
pub(crate) fn unmodified(key: KeyEvent) -> bool {
    key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}
