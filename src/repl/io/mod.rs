//! # I/O Abstraction Layer
//!
//! Trait seams between the controller and the terminal, so the event loop
//! can be driven by scripted events and verified against recorded render
//! operations in tests.
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream ──▶ crossterm::event
//!                             ──▶ TerminalRenderStream ──▶ crossterm::queue!
//!
//! Testing:     AppController ──▶ MockEventStream      ──▶ VecDeque<Event>
//!                             ──▶ MockRenderStream    ──▶ Vec<RenderOp>
//! ```

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream, RenderOp};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Terminal size as (width, height)
pub type TerminalSize = (u16, u16);

/// Source of input events
pub trait EventStream {
    /// Check whether an event is available within the timeout
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next event; only valid after `poll` returned true
    fn read(&mut self) -> Result<Event>;
}

/// Sink for screen output
///
/// Text is written through [`Write`]; cursor positioning and screen
/// lifecycle go through the methods below. Implementations buffer freely
/// and commit on `flush`.
pub trait RenderStream: Write {
    /// Take over the screen: raw mode, alternate screen, hidden cursor
    fn prepare(&mut self) -> Result<()>;

    /// Give the screen back, undoing everything `prepare` did
    fn restore(&mut self) -> Result<()>;

    /// Clear the whole screen
    fn clear_screen(&mut self) -> Result<()>;

    /// Clear the line the cursor is on
    fn clear_line(&mut self) -> Result<()>;

    /// Move the cursor to (column, row)
    fn move_to(&mut self, x: u16, y: u16) -> Result<()>;

    /// Current terminal size
    fn size(&self) -> Result<TerminalSize>;
}
