use std::sync::Arc;

use teloxide::dispatching::dialogue::{InMemStorage, InMemStorageError, Storage};
use teloxide::types::{ChatId, UserId};

use super::error::DialogueError;
use super::state::Session;

/// In-memory sessions keyed by Telegram user id.
///
/// Backed by teloxide's `InMemStorage`, so every write replaces the whole
/// session for that user atomically. Nothing survives a restart.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<InMemStorage<Session>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            storage: InMemStorage::new(),
        }
    }

    fn key(user: UserId) -> ChatId {
        ChatId(user.0 as i64)
    }

    /// Starts a fresh `Idle` session, replacing whatever was there.
    pub async fn create(&self, user: UserId) -> Result<Session, DialogueError> {
        let session = Session::new();
        self.replace(user, session.clone()).await?;
        Ok(session)
    }

    pub async fn read(&self, user: UserId) -> Result<Option<Session>, DialogueError> {
        Ok(Arc::clone(&self.storage).get_dialogue(Self::key(user)).await?)
    }

    /// Current session, or a new `Idle` one if the user has none yet.
    pub async fn read_or_default(&self, user: UserId) -> Result<Session, DialogueError> {
        Ok(self.read(user).await?.unwrap_or_default())
    }

    pub async fn replace(&self, user: UserId, session: Session) -> Result<(), DialogueError> {
        Arc::clone(&self.storage)
            .update_dialogue(Self::key(user), session)
            .await?;
        Ok(())
    }

    /// Drops the user's session. Clearing an absent session is not an error.
    pub async fn clear(&self, user: UserId) -> Result<(), DialogueError> {
        match Arc::clone(&self.storage).remove_dialogue(Self::key(user)).await {
            Ok(()) | Err(InMemStorageError::DialogueNotFound) => Ok(()),
            #[allow(unreachable_patterns)]
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::state::SearchState;

    #[tokio::test]
    async fn test_read_missing_session() {
        let store = SessionStore::new();
        assert_eq!(store.read(UserId(1)).await.unwrap(), None);
        assert_eq!(store.read_or_default(UserId(1)).await.unwrap(), Session::new());
    }

    #[tokio::test]
    async fn test_create_replace_clear() {
        let store = SessionStore::new();
        let user = UserId(42);

        store.create(user).await.unwrap();
        assert_eq!(store.read(user).await.unwrap(), Some(Session::new()));

        let moved = Session::new().moved_to(SearchState::AwaitingDeparture);
        store.replace(user, moved.clone()).await.unwrap();
        assert_eq!(store.read(user).await.unwrap(), Some(moved));

        store.clear(user).await.unwrap();
        assert_eq!(store.read(user).await.unwrap(), None);

        // second clear is a no-op
        store.clear(user).await.unwrap();
    }

    #[tokio::test]
    async fn test_sessions_are_per_user() {
        let store = SessionStore::new();
        store
            .replace(UserId(1), Session::new().moved_to(SearchState::AwaitingPassengers))
            .await
            .unwrap();
        store.create(UserId(2)).await.unwrap();

        assert_eq!(
            store.read(UserId(1)).await.unwrap().map(|s| s.state),
            Some(SearchState::AwaitingPassengers)
        );
        assert_eq!(
            store.read(UserId(2)).await.unwrap().map(|s| s.state),
            Some(SearchState::Idle)
        );
    }
}
