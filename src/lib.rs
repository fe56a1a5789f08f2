//! Orlanda — a minimal tabbed web browser shell built on the system webview.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod engine;
pub mod managers;
pub mod platform;
pub mod resolver;
pub mod services;
pub mod types;
pub mod views;

#[cfg(feature = "gui")]
pub mod ui;
