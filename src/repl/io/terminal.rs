//! # Terminal I/O Implementations
//!
//! Production implementations of the I/O seams. All crossterm calls are
//! isolated here. Render operations are queued and hit the terminal on
//! `flush`, so a full frame is committed at once.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, queue};

use super::{EventStream, RenderStream, TerminalSize};

/// Event stream reading from the real terminal
pub struct TerminalEventStream;

impl TerminalEventStream {
    pub fn new() -> Self {
        Self
    }
}

impl EventStream for TerminalEventStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        event::poll(timeout).map_err(anyhow::Error::from)
    }

    fn read(&mut self) -> Result<Event> {
        event::read().map_err(anyhow::Error::from)
    }
}

impl Default for TerminalEventStream {
    fn default() -> Self {
        Self::new()
    }
}

/// Render stream writing to the real terminal
pub struct TerminalRenderStream<W: Write> {
    writer: W,
}

impl TerminalRenderStream<io::Stdout> {
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write> TerminalRenderStream<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Write for TerminalRenderStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write> RenderStream for TerminalRenderStream<W> {
    fn prepare(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        queue!(self.writer, EnterAlternateScreen, cursor::Hide)?;
        self.writer.flush()?;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        queue!(self.writer, cursor::Show, LeaveAlternateScreen)?;
        self.writer.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        queue!(self.writer, Clear(ClearType::All)).map_err(anyhow::Error::from)
    }

    fn clear_line(&mut self) -> Result<()> {
        queue!(self.writer, Clear(ClearType::CurrentLine)).map_err(anyhow::Error::from)
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        queue!(self.writer, cursor::MoveTo(x, y)).map_err(anyhow::Error::from)
    }

    fn size(&self) -> Result<TerminalSize> {
        terminal::size().map_err(anyhow::Error::from)
    }
}

impl Default for TerminalRenderStream<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}
