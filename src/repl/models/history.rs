//! # History Tape
//!
//! Bounded, ordered record of completed calculations. Only final
//! (equals-triggered) evaluations land here; chained intermediates are
//! bookkeeping, not tape entries. The oldest entry is evicted first once
//! the cap is reached.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::repl::models::format::format_result;
use crate::repl::models::operation::Operation;

/// Maximum number of entries kept on the tape
pub const HISTORY_CAP: usize = 50;

/// Line rendered when the tape is empty
pub const EMPTY_TAPE_LINE: &str = "No calculations yet";

/// A completed calculation. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub operand_a: f64,
    pub operation: Operation,
    pub operand_b: f64,
    pub result: f64,
    pub recorded_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(operand_a: f64, operation: Operation, operand_b: f64, result: f64) -> Self {
        Self {
            operand_a,
            operation,
            operand_b,
            result,
            recorded_at: Local::now(),
        }
    }

    /// Tape line in `A op B = R` form, numbers in canonical display format
    pub fn display_line(&self) -> String {
        format!(
            "{} {} {} = {}",
            format_result(self.operand_a),
            self.operation.symbol(),
            format_result(self.operand_b),
            format_result(self.result)
        )
    }
}

/// The ordered tape of completed calculations, capped at [`HISTORY_CAP`]
#[derive(Debug, Default)]
pub struct HistoryTape {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryTape {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Append an entry, evicting from the head once over the cap
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > HISTORY_CAP {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest-first iteration over the raw entries
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Lazy sequence of display lines, oldest first. An empty tape yields
    /// a single placeholder line.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let placeholder = self.entries.is_empty().then(|| EMPTY_TAPE_LINE.to_string());
        placeholder
            .into_iter()
            .chain(self.entries.iter().map(HistoryEntry::display_line))
    }

    /// Discard all entries. Callers must have obtained explicit user
    /// confirmation before invoking this.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
