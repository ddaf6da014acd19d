//! # Services
//!
//! Outward-facing collaborators of the calculator. Today that is only the
//! calculation backend.

pub mod backend;

pub use backend::{BackendSettings, CalcBackend, HttpBackend};
