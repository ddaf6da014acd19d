//! # Input Sequencer
//!
//! The calculator's input state machine. It owns the display buffer, the
//! pending operand and the pending operation, and turns discrete input
//! events into display updates and evaluation requests.
//!
//! The sequencer is pure: it never performs I/O. When an evaluation is
//! needed it returns an [`EvalRequest`] describing the call; the caller
//! performs the call and reports back through [`CalculatorState::finish_evaluation`]
//! or [`CalculatorState::fail_evaluation`]. Chained evaluations carry the
//! operation to record afterwards in [`EvalRequest::followup`], so the
//! left-to-right bookkeeping survives the suspension point instead of
//! hiding in a callback.

use crate::repl::error::CalcError;
use crate::repl::models::format::{DIVIDE_BY_ZERO_TEXT, ERROR_TEXT};
use crate::repl::models::operation::Operation;

/// Phase of the input sequence, derived from the state fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No pending operand
    Idle,
    /// Operand and operation stored, awaiting the second operand
    OperandEntered,
    /// Result displayed; chain or start fresh
    Evaluated,
}

/// A calculation the caller must submit to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct EvalRequest {
    pub operand_a: f64,
    pub operation: Operation,
    pub operand_b: f64,
    /// Operation to record against the result once it returns. `Some` for
    /// chained evaluations (operator pressed with a full expression on the
    /// display); `None` for user-triggered equals. Only `None` requests
    /// are written to the history tape.
    pub followup: Option<Operation>,
}

impl EvalRequest {
    /// Whether this request came from an explicit equals press
    pub fn is_final(&self) -> bool {
        self.followup.is_none()
    }
}

/// The single mutable calculator state of a UI session
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pending_operand: Option<f64>,
    pending_operation: Option<Operation>,
    display: String,
    awaiting_fresh_entry: bool,
    just_evaluated: bool,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            pending_operand: None,
            pending_operation: None,
            display: "0".to_string(),
            awaiting_fresh_entry: false,
            just_evaluated: false,
        }
    }

    /// Current display buffer
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending_operation
    }

    /// Phase of the input sequence
    pub fn phase(&self) -> Phase {
        if self.just_evaluated {
            Phase::Evaluated
        } else if self.pending_operation.is_some() {
            Phase::OperandEntered
        } else {
            Phase::Idle
        }
    }

    /// Pending half of the expression, for the indicator line above the
    /// display (`"5 +"` while the second operand is being typed).
    pub fn expression_text(&self) -> String {
        match (self.pending_operand, self.pending_operation) {
            (Some(operand), Some(operation)) if !self.just_evaluated => {
                format!(
                    "{} {}",
                    crate::repl::models::format::format_result(operand),
                    operation.symbol()
                )
            }
            _ => String::new(),
        }
    }

    /// Append a digit (or the decimal point) to the entry buffer.
    ///
    /// A digit right after an evaluation starts a fresh calculation. A
    /// second decimal point is suppressed, and a solitary leading `"0"` is
    /// replaced rather than concatenated.
    pub fn enter_digit(&mut self, digit: char) {
        debug_assert!(digit.is_ascii_digit() || digit == '.');

        if self.just_evaluated {
            // Result on display and no operator chosen: start over.
            self.clear_all();
        }
        if self.awaiting_fresh_entry {
            self.display = "0".to_string();
            self.awaiting_fresh_entry = false;
        }

        if digit == '.' {
            if !self.display.contains('.') {
                self.display.push('.');
            }
            return;
        }

        if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    /// Record an operation against the current entry.
    ///
    /// Behavior branches on the current phase:
    /// (a) just evaluated: the displayed result becomes the first operand;
    /// (b) nothing pending: the display value becomes the first operand;
    /// (c) operation pending, second operand not yet typed: the pending
    ///     operation is overwritten, so a mis-pressed operator can be
    ///     corrected;
    /// (d) operation pending and second operand typed: the pending
    ///     expression must be evaluated first. The returned request
    ///     carries `op` as its followup; the caller records it against the
    ///     result via [`CalculatorState::finish_evaluation`].
    pub fn choose_operation(&mut self, op: Operation) -> Result<Option<EvalRequest>, CalcError> {
        if self.just_evaluated {
            // (a) continue calculating with the result
            let operand = self.entry_value()?;
            self.pending_operand = Some(operand);
            self.pending_operation = Some(op);
            self.just_evaluated = false;
            self.awaiting_fresh_entry = true;
            return Ok(None);
        }

        match (self.pending_operand, self.pending_operation) {
            (None, _) => {
                // (b) capture the first operand
                let operand = self.entry_value()?;
                self.pending_operand = Some(operand);
                self.pending_operation = Some(op);
                self.awaiting_fresh_entry = true;
                Ok(None)
            }
            (Some(_), Some(_)) if self.awaiting_fresh_entry => {
                // (c) operator correction before the second operand
                self.pending_operation = Some(op);
                Ok(None)
            }
            (Some(operand_a), Some(pending)) => {
                // (d) chained evaluation, left-to-right
                let operand_b = self.entry_value()?;
                Ok(Some(EvalRequest {
                    operand_a,
                    operation: pending,
                    operand_b,
                    followup: Some(op),
                }))
            }
            (Some(_), None) => {
                // Operand captured earlier (equals with no operator does
                // this); treat like a fresh capture of the display value.
                let value = self.entry_value()?;
                self.pending_operand = Some(value);
                self.pending_operation = Some(op);
                self.awaiting_fresh_entry = true;
                Ok(None)
            }
        }
    }

    /// Submit the pending calculation.
    ///
    /// Valid only when both operand and operation are set; otherwise this
    /// is a no-op. Pressing equals before typing the second operand uses
    /// the displayed value, i.e. `5 + =` evaluates `5 + 5`.
    pub fn evaluate(&mut self) -> Result<Option<EvalRequest>, CalcError> {
        let (Some(operand_a), Some(operation)) = (self.pending_operand, self.pending_operation)
        else {
            return Ok(None);
        };
        let operand_b = self.entry_value()?;
        Ok(Some(EvalRequest {
            operand_a,
            operation,
            operand_b,
            followup: None,
        }))
    }

    /// Store a completed evaluation.
    ///
    /// `display` is the formatted result. For a chained request the
    /// followup operation is recorded against the result and the machine
    /// stays in [`Phase::OperandEntered`]; for a final request the result
    /// becomes the first operand of a potential next calculation and the
    /// machine moves to [`Phase::Evaluated`].
    pub fn finish_evaluation(&mut self, result: f64, display: String, followup: Option<Operation>) {
        self.display = display;
        self.pending_operand = Some(result);
        self.pending_operation = followup;
        self.awaiting_fresh_entry = true;
        self.just_evaluated = followup.is_none();
    }

    /// Abandon the pending calculation after a failed evaluation.
    ///
    /// `display` is the error token to show (`"Error"`, or the
    /// divide-by-zero text for an infinite result). No attempt is made to
    /// recover a partial chain.
    pub fn fail_evaluation(&mut self, display: String) {
        self.display = display;
        self.pending_operand = None;
        self.pending_operation = None;
        self.awaiting_fresh_entry = true;
        self.just_evaluated = false;
    }

    /// Reset the full state
    pub fn clear_all(&mut self) {
        *self = Self::new();
    }

    /// Reset only the current entry buffer
    pub fn clear_entry(&mut self) {
        self.display = "0".to_string();
        self.awaiting_fresh_entry = false;
        self.just_evaluated = false;
    }

    /// Remove the last character of the entry buffer.
    ///
    /// An emptied buffer becomes `"0"`, never the empty string. On an
    /// error token the whole entry is reset instead of shaving characters
    /// off the text.
    pub fn backspace(&mut self) {
        if self.display == ERROR_TEXT || self.display == DIVIDE_BY_ZERO_TEXT {
            self.clear_entry();
            return;
        }
        self.display.pop();
        if self.display.is_empty() {
            self.display = "0".to_string();
        }
    }

    /// Parse the display buffer as an operand
    fn entry_value(&self) -> Result<f64, CalcError> {
        self.display
            .parse::<f64>()
            .map_err(|_| CalcError::Input("Please enter a valid number".to_string()))
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(state: &mut CalculatorState, digits: &str) {
        for ch in digits.chars() {
            state.enter_digit(ch);
        }
    }

    #[test]
    fn new_state_should_start_idle_at_zero() {
        let state = CalculatorState::new();
        assert_eq!(state.display(), "0");
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.pending_operand(), None);
        assert_eq!(state.pending_operation(), None);
    }

    #[test]
    fn leading_zero_should_be_replaced_not_concatenated() {
        let mut state = CalculatorState::new();
        type_digits(&mut state, "07");
        assert_eq!(state.display(), "7");
    }

    #[test]
    fn second_decimal_point_should_be_suppressed() {
        let mut state = CalculatorState::new();
        type_digits(&mut state, "3.1.4");
        assert_eq!(state.display(), "3.14");
    }

    #[test]
    fn decimal_point_first_should_build_on_zero() {
        let mut state = CalculatorState::new();
        type_digits(&mut state, ".5");
        assert_eq!(state.display(), "0.5");
    }

    #[test]
    fn choose_operation_should_capture_first_operand() {
        let mut state = CalculatorState::new();
        type_digits(&mut state, "12");
        let request = state.choose_operation(Operation::Add).unwrap();
        assert!(request.is_none());
        assert_eq!(state.pending_operand(), Some(12.0));
        assert_eq!(state.pending_operation(), Some(Operation::Add));
        assert_eq!(state.phase(), Phase::OperandEntered);
        // Display still shows the first operand until a digit arrives.
        assert_eq!(state.display(), "12");
    }

    #[test]
    fn operator_press_should_be_correctable_before_second_operand() {
        let mut state = CalculatorState::new();
        type_digits(&mut state, "8");
        state.choose_operation(Operation::Add).unwrap();
        let request = state.choose_operation(Operation::Divide).unwrap();
        assert!(request.is_none());
        assert_eq!(state.pending_operation(), Some(Operation::Divide));
    }

    #[test]
    fn operator_after_second_operand_should_request_chained_evaluation() {
        let mut state = CalculatorState::new();
        type_digits(&mut state, "5");
        state.choose_operation(Operation::Add).unwrap();
        type_digits(&mut state, "3");
        let request = state
            .choose_operation(Operation::Multiply)
            .unwrap()
            .expect("chained evaluation expected");
        assert_eq!(request.operand_a, 5.0);
        assert_eq!(request.operation, Operation::Add);
        assert_eq!(request.operand_b, 3.0);
        assert_eq!(request.followup, Some(Operation::Multiply));
        assert!(!request.is_final());
    }

    #[test]
    fn finish_evaluation_with_followup_should_stay_mid_chain() {
        let mut state = CalculatorState::new();
        type_digits(&mut state, "5");
        state.choose_operation(Operation::Add).unwrap();
        type_digits(&mut state, "3");
        state.choose_operation(Operation::Multiply).unwrap();
        state.finish_evaluation(8.0, "8".to_string(), Some(Operation::Multiply));

        assert_eq!(state.phase(), Phase::OperandEntered);
        assert_eq!(state.pending_operand(), Some(8.0));
        assert_eq!(state.pending_operation(), Some(Operation::Multiply));
        assert_eq!(state.display(), "8");

        // Typing the next operand starts a fresh entry.
        type_digits(&mut state, "2");
        assert_eq!(state.display(), "2");
    }

    #[test]
    fn evaluate_should_be_a_noop_without_pending_operation() {
        let mut state = CalculatorState::new();
        type_digits(&mut state, "9");
        assert_eq!(state.evaluate().unwrap(), None);
        assert_eq!(state.display(), "9");
    }

    #[test]
    fn evaluate_before_second_operand_should_reuse_display_value() {
        let mut state = CalculatorState::new();
        type_digits(&mut state, "5");
        state.choose_operation(Operation::Add).unwrap();
        let request = state.evaluate().unwrap().expect("evaluation expected");
        assert_eq!(request.operand_a, 5.0);
        assert_eq!(request.operand_b, 5.0);
        assert!(request.is_final());
    }

    #[test]
    fn finish_final_evaluation_should_enter_evaluated_phase() {
        let mut state = CalculatorState::new();
        type_digits(&mut state, "5");
        state.choose_operation(Operation::Add).unwrap();
        type_digits(&mut state, "3");
        state.evaluate().unwrap().unwrap();
        state.finish_evaluation(8.0, "8".to_string(), None);

        assert_eq!(state.phase(), Phase::Evaluated);
        assert_eq!(state.pending_operand(), Some(8.0));
        assert_eq!(state.pending_operation(), None);
    }

    #[test]
    fn digit_after_evaluation_should_start_fresh() {
        let mut state = CalculatorState::new();
        state.finish_evaluation(8.0, "8".to_string(), None);
        type_digits(&mut state, "4");
        assert_eq!(state.display(), "4");
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.pending_operand(), None);
    }

    #[test]
    fn operator_after_evaluation_should_chain_from_result() {
        let mut state = CalculatorState::new();
        state.finish_evaluation(8.0, "8".to_string(), None);
        let request = state.choose_operation(Operation::Subtract).unwrap();
        assert!(request.is_none());
        assert_eq!(state.pending_operand(), Some(8.0));
        assert_eq!(state.pending_operation(), Some(Operation::Subtract));
        assert_eq!(state.phase(), Phase::OperandEntered);
    }

    #[test]
    fn fail_evaluation_should_drop_all_pending_state() {
        let mut state = CalculatorState::new();
        type_digits(&mut state, "5");
        state.choose_operation(Operation::Divide).unwrap();
        type_digits(&mut state, "0");
        state.fail_evaluation(ERROR_TEXT.to_string());

        assert_eq!(state.display(), "Error");
        assert_eq!(state.pending_operand(), None);
        assert_eq!(state.pending_operation(), None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn operator_on_error_token_should_be_an_input_error() {
        let mut state = CalculatorState::new();
        state.fail_evaluation(ERROR_TEXT.to_string());
        let before = state.clone();
        let result = state.choose_operation(Operation::Add);
        assert!(matches!(result, Err(CalcError::Input(_))));
        // Input errors leave the state untouched.
        assert_eq!(state, before);
    }

    #[test]
    fn backspace_should_trim_one_character() {
        let mut state = CalculatorState::new();
        type_digits(&mut state, "123");
        state.backspace();
        assert_eq!(state.display(), "12");
    }

    #[test]
    fn backspace_on_single_character_should_leave_zero() {
        let mut state = CalculatorState::new();
        type_digits(&mut state, "7");
        state.backspace();
        assert_eq!(state.display(), "0");
        state.backspace();
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn backspace_on_error_token_should_reset_the_entry() {
        let mut state = CalculatorState::new();
        state.fail_evaluation(ERROR_TEXT.to_string());
        state.backspace();
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn clear_entry_should_keep_pending_operation() {
        let mut state = CalculatorState::new();
        type_digits(&mut state, "5");
        state.choose_operation(Operation::Add).unwrap();
        type_digits(&mut state, "31");
        state.clear_entry();
        assert_eq!(state.display(), "0");
        assert_eq!(state.pending_operand(), Some(5.0));
        assert_eq!(state.pending_operation(), Some(Operation::Add));
    }

    #[test]
    fn clear_all_should_reset_everything() {
        let mut state = CalculatorState::new();
        type_digits(&mut state, "5");
        state.choose_operation(Operation::Add).unwrap();
        type_digits(&mut state, "3");
        state.clear_all();
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn pending_operation_should_imply_pending_operand() {
        // Invariant check across a representative event sequence.
        let mut state = CalculatorState::new();
        let presses: &[&dyn Fn(&mut CalculatorState)] = &[
            &|s| s.enter_digit('5'),
            &|s| {
                let _ = s.choose_operation(Operation::Add);
            },
            &|s| s.enter_digit('3'),
            &|s| s.clear_entry(),
            &|s| s.backspace(),
            &|s| s.clear_all(),
            &|s| {
                let _ = s.choose_operation(Operation::Divide);
            },
        ];
        for press in presses {
            press(&mut state);
            if state.pending_operation().is_some() {
                assert!(state.pending_operand().is_some());
            }
        }
    }

    #[test]
    fn expression_text_should_show_pending_half() {
        let mut state = CalculatorState::new();
        assert_eq!(state.expression_text(), "");
        type_digits(&mut state, "5");
        state.choose_operation(Operation::Add).unwrap();
        assert_eq!(state.expression_text(), "5 +");
        state.finish_evaluation(8.0, "8".to_string(), None);
        assert_eq!(state.expression_text(), "");
    }
}
