//! # Error Taxonomy
//!
//! Errors surfaced at the calculator UI boundary. Every variant is
//! recoverable: the session always continues and the user resumes by
//! clearing or typing a new digit.

use thiserror::Error;

/// Errors produced while driving the calculator.
///
/// The three variants differ in how the UI reacts to them:
/// - [`CalcError::Input`] leaves the calculator state untouched and only
///   raises the transient status banner.
/// - [`CalcError::Transport`] and [`CalcError::Domain`] additionally force
///   the display to the `"Error"` token and drop all pending
///   operand/operation state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The current entry is not a usable operand (e.g. the `"Error"` token)
    #[error("{0}")]
    Input(String),

    /// Network failure, timeout, or a non-success HTTP status
    #[error("{0}")]
    Transport(String),

    /// The backend reported an error string, or the result was non-finite
    #[error("{0}")]
    Domain(String),
}

impl CalcError {
    /// Whether this error also resets the pending calculation.
    ///
    /// Input errors keep the state so the user can fix the entry in place;
    /// transport and domain errors abandon the partial chain entirely.
    pub fn resets_calculator(&self) -> bool {
        !matches!(self, CalcError::Input(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_should_not_reset_calculator() {
        let error = CalcError::Input("Please enter a valid number".to_string());
        assert!(!error.resets_calculator());
    }

    #[test]
    fn transport_and_domain_errors_should_reset_calculator() {
        assert!(CalcError::Transport("connection refused".to_string()).resets_calculator());
        assert!(CalcError::Domain("Division by zero".to_string()).resets_calculator());
    }

    #[test]
    fn errors_should_display_their_message() {
        let error = CalcError::Transport("Server error: 500".to_string());
        assert_eq!(error.to_string(), "Server error: 500");
    }
}
