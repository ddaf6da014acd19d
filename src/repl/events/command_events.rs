//! # Command Events
//!
//! Semantic input events produced by the command layer. They describe what
//! the user asked for, not which key produced it; the view model applies
//! them to the calculator state.

use crate::repl::models::Operation;

/// Events produced by the command registry for the view model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandEvent {
    /// A digit or the decimal point was pressed
    DigitEntered { digit: char },

    /// An operator was pressed
    OperationChosen { operation: Operation },

    /// Equals (or Enter) was pressed
    EvaluateRequested,

    /// Reset the full calculator state
    ClearAllRequested,

    /// Reset only the current entry buffer
    ClearEntryRequested,

    /// Remove the last character of the entry buffer
    BackspaceRequested,

    /// Ask for confirmation before clearing the history tape
    HistoryClearRequested,

    /// Confirmation granted: discard the tape
    HistoryClearConfirmed,

    /// Confirmation declined: keep the tape
    HistoryClearCancelled,

    /// Exit the application
    QuitRequested,
}
