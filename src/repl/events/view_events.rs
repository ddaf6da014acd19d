//! # View Events
//!
//! Events emitted by the view model when something visible changed.
//! The controller drains them after each input event and renders only the
//! regions that need it.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Full screen redraw required (terminal resize, startup)
    FullRedrawRequired,

    /// Display line or expression indicator changed
    DisplayChanged,

    /// History tape gained or lost entries
    HistoryChanged,

    /// Status bar content changed (banner, in-flight marker, mode prompt)
    StatusChanged,
}
