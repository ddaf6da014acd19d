//! # Controllers
//!
//! The application controller: event loop, command dispatch, and the
//! single awaited suspension point around the backend call.

pub mod app_controller;

pub use app_controller::AppController;
