//! # Event System
//!
//! Semantic events flowing through the application: key presses become
//! [`CommandEvent`]s in the command layer, the view model applies them and
//! emits [`ViewEvent`]s for selective rendering.

pub mod command_events;
pub mod types;
pub mod view_events;

pub use command_events::CommandEvent;
pub use types::InputMode;
pub use view_events::ViewEvent;
