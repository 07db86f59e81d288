use std::fmt::Display;
use tracing::{debug, error, info};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, user_id: u64, chat_id: i64) {
    info!(
        "CMD_START: {} by {}({}) in chat {}",
        command, user, user_id, chat_id
    );
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, user_id: u64, chat_id: i64, error: &str) {
    error!(
        "CMD_ERROR: {} by user {} in chat {} - {}",
        command, user_id, chat_id, error
    );
}

/// Logs an inbound button press before it is routed
pub fn log_callback_received(payload: &str, user: &str, user_id: u64) {
    info!("CALLBACK: '{}' from {}({})", payload, user, user_id);
}

/// Logs a state machine step
pub fn log_transition(user_id: u64, from: impl Display, to: impl Display, trigger: &str) {
    info!("TRANSITION: user {} {} -> {} on {}", user_id, from, to, trigger);
}

/// Logs an event that did not fit the current state
pub fn log_ignored_event(user_id: u64, state: impl Display, payload: &str) {
    debug!("IGNORED: '{}' from user {} in state {}", payload, user_id, state);
}

/// Logs removal of a user's session
pub fn log_session_cleared(user_id: u64, state: impl Display, reason: &str) {
    info!("SESSION_CLEARED: user {} in state {} - {}", user_id, state, reason);
}

/// Logs database operations with consistent format
pub fn log_database_operation(operation: &str, table: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("DB_OP: {} on {} - {}", operation, table, d),
        None => debug!("DB_OP: {} on {}", operation, table),
    }
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
