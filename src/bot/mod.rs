pub mod commands;
pub mod handlers;
pub mod keyboard;

/// Error type shared by all dispatcher endpoints.
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
