//! # Tape Renderer
//!
//! Draws the calculator screen:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │                          5 + │  expression indicator
//! │                            3 │  display line
//! │ ──────────────────────────── │  separator
//! │ 2 + 2 = 4                    │  history tape (oldest first,
//! │ 8 × 2 = 16                   │   clipped to the viewport)
//! │ [endpoint]  q quit           │  status bar
//! └──────────────────────────────┘
//! ```
//!
//! Every render queues its operations on the stream and commits them with
//! a single flush.

use std::io::Write;

use anyhow::Result;

use crate::repl::events::InputMode;
use crate::repl::io::RenderStream;
use crate::repl::view_models::ViewModel;

/// Prompt shown while a history clear awaits confirmation
pub const CONFIRM_CLEAR_PROMPT: &str = "Clear history? (y/n)";

/// Status-bar text while an evaluation is in flight
pub const EVALUATING_TEXT: &str = "Calculating...";

const KEY_HINTS: &str = "q quit | c clear | e clear entry | ctrl-l clear history";

/// Renders the calculator UI onto a [`RenderStream`]
pub struct TapeRenderer<RS: RenderStream> {
    stream: RS,
    width: u16,
    height: u16,
}

impl<RS: RenderStream> TapeRenderer<RS> {
    /// Wrap a render stream, reading the initial size from it
    pub fn with_render_stream(stream: RS) -> Result<Self> {
        let (width, height) = stream.size().unwrap_or((80, 24));
        Ok(Self {
            stream,
            width,
            height,
        })
    }

    /// Take over the screen
    pub fn initialize(&mut self) -> Result<()> {
        self.stream.prepare()?;
        self.stream.clear_screen()?;
        self.stream.flush()?;
        Ok(())
    }

    /// Give the screen back
    pub fn cleanup(&mut self) -> Result<()> {
        self.stream.restore()
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Redraw everything
    pub fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        self.stream.clear_screen()?;
        self.queue_display(view_model)?;
        self.queue_separator()?;
        self.queue_history(view_model)?;
        self.queue_status(view_model)?;
        self.stream.flush()?;
        Ok(())
    }

    /// Redraw the expression indicator and the display line
    pub fn render_display(&mut self, view_model: &ViewModel) -> Result<()> {
        self.queue_display(view_model)?;
        self.stream.flush()?;
        Ok(())
    }

    /// Redraw the history tape panel
    pub fn render_history(&mut self, view_model: &ViewModel) -> Result<()> {
        self.queue_history(view_model)?;
        self.stream.flush()?;
        Ok(())
    }

    /// Redraw the status bar
    pub fn render_status(&mut self, view_model: &ViewModel) -> Result<()> {
        self.queue_status(view_model)?;
        self.stream.flush()?;
        Ok(())
    }

    fn queue_display(&mut self, view_model: &ViewModel) -> Result<()> {
        let width = self.width as usize;

        self.stream.move_to(0, 0)?;
        self.stream.clear_line()?;
        let expression = clip(&view_model.expression_text(), width);
        write!(self.stream, "{:>width$}", expression, width = width)?;

        self.stream.move_to(0, 1)?;
        self.stream.clear_line()?;
        let display = clip(view_model.display_text(), width);
        write!(self.stream, "{:>width$}", display, width = width)?;
        Ok(())
    }

    fn queue_separator(&mut self) -> Result<()> {
        if self.height < 3 {
            return Ok(());
        }
        self.stream.move_to(0, 2)?;
        self.stream.clear_line()?;
        write!(self.stream, "{}", "─".repeat(self.width as usize))?;
        Ok(())
    }

    fn queue_history(&mut self, view_model: &ViewModel) -> Result<()> {
        let Some(rows) = self.tape_rows() else {
            return Ok(());
        };

        // Oldest first; when the tape outgrows the viewport, keep the
        // newest lines so the latest calculation is always visible.
        let lines: Vec<String> = view_model.history().lines().collect();
        let skip = lines.len().saturating_sub(rows);

        for row in 0..rows {
            self.stream.move_to(0, 3 + row as u16)?;
            self.stream.clear_line()?;
            if let Some(line) = lines.get(skip + row) {
                write!(self.stream, "{}", clip(line, self.width as usize))?;
            }
        }
        Ok(())
    }

    fn queue_status(&mut self, view_model: &ViewModel) -> Result<()> {
        if self.height < 2 {
            return Ok(());
        }
        let row = self.height - 1;
        self.stream.move_to(0, row)?;
        self.stream.clear_line()?;

        let message = if view_model.mode() == InputMode::ConfirmClearHistory {
            CONFIRM_CLEAR_PROMPT.to_string()
        } else if let Some(banner) = view_model.banner_message() {
            banner.to_string()
        } else if view_model.is_evaluating() {
            EVALUATING_TEXT.to_string()
        } else {
            KEY_HINTS.to_string()
        };

        let status = if view_model.endpoint_label().is_empty() {
            message
        } else {
            format!("[{}] {}", view_model.endpoint_label(), message)
        };
        write!(self.stream, "{}", clip(&status, self.width as usize))?;
        Ok(())
    }

    /// Rows available for the tape panel, between the separator and the
    /// status bar
    fn tape_rows(&self) -> Option<usize> {
        (self.height > 4).then(|| self.height as usize - 4)
    }

    /// Stream access for tests
    #[cfg(test)]
    pub fn stream(&self) -> &RS {
        &self.stream
    }
}

/// Clip to the viewport width, counting characters
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        text.chars().take(width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::events::CommandEvent;
    use crate::repl::io::MockRenderStream;

    fn renderer() -> TapeRenderer<MockRenderStream> {
        TapeRenderer::with_render_stream(MockRenderStream::with_size((80, 12))).unwrap()
    }

    #[test]
    fn render_full_should_paint_display_and_placeholder() {
        let mut renderer = renderer();
        let mut vm = ViewModel::new();
        vm.apply(CommandEvent::DigitEntered { digit: '7' });

        renderer.render_full(&vm).unwrap();
        let text = renderer.stream().rendered_text();
        assert!(text.contains('7'));
        assert!(text.contains("No calculations yet"));
        assert!(text.contains(KEY_HINTS));
    }

    #[test]
    fn display_line_should_be_right_aligned() {
        let mut renderer = renderer();
        let mut vm = ViewModel::new();
        vm.apply(CommandEvent::DigitEntered { digit: '4' });
        vm.apply(CommandEvent::DigitEntered { digit: '2' });

        renderer.render_display(&vm).unwrap();
        let text = renderer.stream().rendered_text();
        assert!(text.ends_with("42"), "got: {text:?}");
    }

    #[test]
    fn status_bar_should_prefer_confirmation_prompt() {
        let mut renderer = renderer();
        let mut vm = ViewModel::new();
        vm.apply(CommandEvent::HistoryClearRequested);

        renderer.render_status(&vm).unwrap();
        assert!(renderer
            .stream()
            .rendered_text()
            .contains(CONFIRM_CLEAR_PROMPT));
    }

    #[test]
    fn status_bar_should_show_endpoint_label() {
        let mut renderer = renderer();
        let mut vm = ViewModel::new();
        vm.set_endpoint_label("http://calc:8080".to_string());

        renderer.render_status(&vm).unwrap();
        assert!(renderer.stream().rendered_text().contains("[http://calc:8080]"));
    }

    #[test]
    fn clip_should_cut_at_the_viewport_edge() {
        assert_eq!(clip("abcdef", 4), "abcd");
        assert_eq!(clip("abc", 4), "abc");
    }
}
