//! # Flight Search Bot
//!
//! A Telegram bot that collects flight search parameters with inline keyboards.
//!
//! ## Flow
//! - `/start` shows the entry prompt with a "begin search" button
//! - departure and destination cities are picked from a fixed list
//! - departure and return dates are picked from an inline calendar
//! - the passenger count is picked from a 1–8 grid
//! - a summary is shown and the session is cleared

/// Telegram commands, dispatcher schema and update handlers
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// SQLite connection, migrations and the user model
pub mod database;
/// Search dialogue: sessions, state machine, rendering and routing
pub mod dialogue;
/// HTTP health endpoints
pub mod services;
/// Date formatting, logging, Markdown escaping and feedback helpers
pub mod utils;
