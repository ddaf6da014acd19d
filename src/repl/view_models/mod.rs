//! # View Model
//!
//! Owns all mutable session state: the one calculator state, the history
//! tape, the input mode, the transient error banner, and the
//! evaluation-in-flight flag. Command events are applied here; anything
//! visible that changed is queued as a [`ViewEvent`] for the controller to
//! drain and render.

use std::time::{Duration, Instant};

use crate::repl::error::CalcError;
use crate::repl::events::{CommandEvent, InputMode, ViewEvent};
use crate::repl::models::{
    format_result, CalculatorState, EvalRequest, HistoryEntry, HistoryTape, Phase, ERROR_TEXT,
};

/// How long the status banner stays up before auto-dismissing
pub const BANNER_TTL: Duration = Duration::from_secs(5);

/// Transient status-bar message with its dismissal deadline
#[derive(Debug, Clone)]
struct StatusBanner {
    message: String,
    expires_at: Instant,
}

/// The application's single source of UI truth
pub struct ViewModel {
    state: CalculatorState,
    history: HistoryTape,
    mode: InputMode,
    banner: Option<StatusBanner>,
    evaluation_in_flight: bool,
    endpoint_label: String,
    pending_view_events: Vec<ViewEvent>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
            history: HistoryTape::new(),
            mode: InputMode::Normal,
            banner: None,
            evaluation_in_flight: false,
            endpoint_label: String::new(),
            pending_view_events: vec![ViewEvent::FullRedrawRequired],
        }
    }

    /// Endpoint shown in the status bar
    pub fn set_endpoint_label(&mut self, label: String) {
        self.endpoint_label = label;
        self.emit(ViewEvent::StatusChanged);
    }

    /// Apply a semantic input event.
    ///
    /// Returns the evaluation request to submit, if the event produced
    /// one. Quit is not handled here; the controller intercepts it.
    pub fn apply(&mut self, event: CommandEvent) -> Option<EvalRequest> {
        if self.evaluation_in_flight && Self::mutates_calculation(event) {
            tracing::debug!("evaluation in flight, dropping {:?}", event);
            return None;
        }

        match event {
            CommandEvent::DigitEntered { digit } => {
                self.state.enter_digit(digit);
                self.emit(ViewEvent::DisplayChanged);
                None
            }
            CommandEvent::OperationChosen { operation } => {
                let outcome = self.state.choose_operation(operation);
                self.capture(outcome)
            }
            CommandEvent::EvaluateRequested => {
                let outcome = self.state.evaluate();
                self.capture(outcome)
            }
            CommandEvent::ClearAllRequested => {
                self.state.clear_all();
                self.dismiss_banner();
                self.emit(ViewEvent::DisplayChanged);
                self.emit(ViewEvent::StatusChanged);
                None
            }
            CommandEvent::ClearEntryRequested => {
                self.state.clear_entry();
                self.emit(ViewEvent::DisplayChanged);
                None
            }
            CommandEvent::BackspaceRequested => {
                self.state.backspace();
                self.emit(ViewEvent::DisplayChanged);
                None
            }
            CommandEvent::HistoryClearRequested => {
                self.mode = InputMode::ConfirmClearHistory;
                self.emit(ViewEvent::StatusChanged);
                None
            }
            CommandEvent::HistoryClearConfirmed => {
                self.history.clear();
                self.mode = InputMode::Normal;
                self.emit(ViewEvent::HistoryChanged);
                self.emit(ViewEvent::StatusChanged);
                None
            }
            CommandEvent::HistoryClearCancelled => {
                self.mode = InputMode::Normal;
                self.emit(ViewEvent::StatusChanged);
                None
            }
            CommandEvent::QuitRequested => None,
        }
    }

    /// Mark the start of an outbound evaluation. Further calculator input
    /// is dropped until the result lands.
    pub fn begin_evaluation(&mut self) {
        self.evaluation_in_flight = true;
        self.emit(ViewEvent::StatusChanged);
    }

    /// Store a completed evaluation.
    ///
    /// A non-finite result is treated as a domain failure (the backend
    /// cannot express it); otherwise the sequencer advances and final
    /// requests are written to the tape.
    pub fn finish_evaluation(&mut self, request: &EvalRequest, result: f64) {
        self.evaluation_in_flight = false;
        self.emit(ViewEvent::StatusChanged);

        if !result.is_finite() {
            let text = format_result(result);
            self.state.fail_evaluation(text.clone());
            self.raise_banner(text);
            self.emit(ViewEvent::DisplayChanged);
            return;
        }

        let display = format_result(result);
        self.state
            .finish_evaluation(result, display, request.followup);
        self.emit(ViewEvent::DisplayChanged);

        if request.is_final() {
            self.history.push(HistoryEntry::new(
                request.operand_a,
                request.operation,
                request.operand_b,
                result,
            ));
            self.emit(ViewEvent::HistoryChanged);
        }
    }

    /// Record a failed evaluation
    pub fn report_eval_error(&mut self, error: CalcError) {
        self.evaluation_in_flight = false;
        if error.resets_calculator() {
            self.state.fail_evaluation(ERROR_TEXT.to_string());
            self.emit(ViewEvent::DisplayChanged);
        }
        self.raise_banner(error.to_string());
        self.emit(ViewEvent::StatusChanged);
    }

    /// Dismiss the banner once its deadline has passed. Returns true when
    /// something changed.
    pub fn expire_banner_if_due(&mut self, now: Instant) -> bool {
        let due = self
            .banner
            .as_ref()
            .is_some_and(|banner| now >= banner.expires_at);
        if due {
            self.banner = None;
            self.emit(ViewEvent::StatusChanged);
        }
        due
    }

    /// Drain the queued view events
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }

    // Accessors for the renderer and for tests

    pub fn display_text(&self) -> &str {
        self.state.display()
    }

    pub fn expression_text(&self) -> String {
        self.state.expression_text()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn calculator(&self) -> &CalculatorState {
        &self.state
    }

    pub fn history(&self) -> &HistoryTape {
        &self.history
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn banner_message(&self) -> Option<&str> {
        self.banner.as_ref().map(|banner| banner.message.as_str())
    }

    pub fn is_evaluating(&self) -> bool {
        self.evaluation_in_flight
    }

    pub fn endpoint_label(&self) -> &str {
        &self.endpoint_label
    }

    fn capture(
        &mut self,
        outcome: Result<Option<EvalRequest>, CalcError>,
    ) -> Option<EvalRequest> {
        match outcome {
            Ok(request) => {
                self.emit(ViewEvent::DisplayChanged);
                request
            }
            Err(error) => {
                // Input errors leave the calculator untouched; only the
                // banner changes.
                self.raise_banner(error.to_string());
                self.emit(ViewEvent::StatusChanged);
                None
            }
        }
    }

    fn raise_banner(&mut self, message: String) {
        self.banner = Some(StatusBanner {
            message,
            expires_at: Instant::now() + BANNER_TTL,
        });
    }

    fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    fn emit(&mut self, event: ViewEvent) {
        if !self.pending_view_events.contains(&event) {
            self.pending_view_events.push(event);
        }
    }

    fn mutates_calculation(event: CommandEvent) -> bool {
        matches!(
            event,
            CommandEvent::DigitEntered { .. }
                | CommandEvent::OperationChosen { .. }
                | CommandEvent::EvaluateRequested
                | CommandEvent::ClearAllRequested
                | CommandEvent::ClearEntryRequested
                | CommandEvent::BackspaceRequested
        )
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}
