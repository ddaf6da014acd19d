//! # Views
//!
//! Terminal presentation of the calculator: the display line, the history
//! tape panel, and the status bar. All drawing goes through the
//! [`RenderStream`](crate::repl::io::RenderStream) seam.

pub mod tape_renderer;

pub use tape_renderer::TapeRenderer;
