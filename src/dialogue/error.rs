use teloxide::dispatching::dialogue::InMemStorageError;

use super::state::Field;

/// Errors raised by the search dialogue.
#[derive(Debug, thiserror::Error)]
pub enum DialogueError {
    #[error("Session storage error: {0}")]
    Storage(#[from] InMemStorageError),

    #[error("Cannot render summary: field '{0}' was never collected")]
    MissingField(Field),
}
