//! # Data Models
//!
//! Pure calculator domain state: the input sequencer, the result
//! formatter, the history tape, and the operation vocabulary. Nothing in
//! here touches the terminal or the network.

pub mod format;
pub mod history;
pub mod operation;
pub mod sequencer;

pub use format::{format_result, DIVIDE_BY_ZERO_TEXT, ERROR_TEXT};
pub use history::{HistoryEntry, HistoryTape, EMPTY_TAPE_LINE, HISTORY_CAP};
pub use operation::Operation;
pub use sequencer::{CalculatorState, EvalRequest, Phase};
