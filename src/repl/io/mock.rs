//! # Mock I/O Implementations for Testing
//!
//! Scripted event streams and a recording render stream, so controller
//! behavior can be exercised end to end without a terminal.

use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use super::{EventStream, RenderStream, TerminalSize};

/// Build a key-press event for a plain character
pub fn press(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
}

/// Build a key-press event for a non-character key
pub fn press_code(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Build a key-press event with modifiers
pub fn press_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

/// Event stream that replays a scripted sequence
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Script a sequence of plain character presses
    pub fn from_chars(chars: &str) -> Self {
        Self::new(chars.chars().map(press).collect())
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }
}

/// A recorded render operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    Prepared,
    Restored,
    ClearedScreen,
    ClearedLine,
    MovedTo(u16, u16),
    Text(String),
    Flushed,
}

/// Render stream that records operations instead of drawing
pub struct MockRenderStream {
    ops: Vec<RenderOp>,
    size: TerminalSize,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            ops: Vec::new(),
            size,
        }
    }

    /// All recorded operations, in order
    pub fn ops(&self) -> &[RenderOp] {
        &self.ops
    }

    /// Concatenation of everything written as text
    pub fn rendered_text(&self) -> String {
        self.ops
            .iter()
            .filter_map(|op| match op {
                RenderOp::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.ops
            .push(RenderOp::Text(String::from_utf8_lossy(buf).to_string()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.ops.push(RenderOp::Flushed);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn prepare(&mut self) -> Result<()> {
        self.ops.push(RenderOp::Prepared);
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.ops.push(RenderOp::Restored);
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.ops.push(RenderOp::ClearedScreen);
        Ok(())
    }

    fn clear_line(&mut self) -> Result<()> {
        self.ops.push(RenderOp::ClearedLine);
        Ok(())
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.ops.push(RenderOp::MovedTo(x, y));
        Ok(())
    }

    fn size(&self) -> Result<TerminalSize> {
        Ok(self.size)
    }
}
