//! # Tapeline - Terminal Calculator with a History Tape
//!
//! A calculator front-end for the terminal. All arithmetic happens on a
//! remote calculation service; tapeline sequences the input, submits the
//! pending expression over HTTP, formats the result, and keeps a bounded
//! tape of completed calculations.
//!
//! ## Architecture
//!
//! The application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐   KeyEvent   ┌──────────────┐ CommandEvent ┌────────────┐
//! │ EventStream │─────────────▶│  Controller  │─────────────▶│ ViewModel  │
//! └─────────────┘              │              │              │            │
//!                              │ - event loop │  EvalRequest │ - sequencer│
//! ┌─────────────┐   ViewEvent  │ - dispatch   │◀─────────────│ - tape     │
//! │ TapeRenderer│◀─────────────│ - backend    │              │ - banner   │
//! └─────────────┘              │   await      │              └────────────┘
//!                              └──────┬───────┘
//!                                     │ form POST / JSON
//!                              ┌──────▼───────┐
//!                              │ CalcBackend  │
//!                              └──────────────┘
//! ```
//!
//! The calculator domain (sequencer, formatter, history tape) is pure and
//! lives in [`repl::models`]; terminal and network access are isolated
//! behind the [`repl::io`] and [`repl::services`] seams.

pub mod cmd_args;
pub mod config;
pub mod repl;

// Re-export main types for easy access
pub use repl::*;
