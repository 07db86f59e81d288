use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use teloxide::types::UserId;

use super::calendar::{DatePicker, InlineCalendar, Locale};
use super::error::DialogueError;
use super::event::SelectionEvent;
use super::machine::{advance, Transition};
use super::render::{entry_prompt, render_prompt, render_prompt_at, Prompt, RenderContext};
use super::state::SearchState;
use super::store::SessionStore;
use crate::utils::logging::{log_ignored_event, log_session_cleared, log_transition};

/// Outbound effect the bot layer has to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Answer the callback query so the client stops its loading indicator.
    Acknowledge,
    /// Replace the originating message with this prompt.
    ShowPrompt(Prompt),
}

#[derive(Debug, Default)]
struct Counters {
    started: AtomicU64,
    completed: AtomicU64,
    ignored: AtomicU64,
}

/// Point-in-time copy of the router counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub searches_started: u64,
    pub searches_completed: u64,
    pub events_ignored: u64,
}

/// Dispatches commands and button presses to the search state machine.
pub struct SearchRouter {
    store: SessionStore,
    calendar: Arc<dyn DatePicker>,
    locale: Locale,
    counters: Counters,
}

impl SearchRouter {
    pub fn new(store: SessionStore, calendar: Arc<dyn DatePicker>, locale: Locale) -> Self {
        Self {
            store,
            calendar,
            locale,
            counters: Counters::default(),
        }
    }

    /// Router with a fresh in-memory store and the inline calendar.
    pub fn in_memory(locale: Locale) -> Self {
        Self::new(SessionStore::new(), Arc::new(InlineCalendar::new()), locale)
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            searches_started: self.counters.started.load(Ordering::Relaxed),
            searches_completed: self.counters.completed.load(Ordering::Relaxed),
            events_ignored: self.counters.ignored.load(Ordering::Relaxed),
        }
    }

    fn context(&self, today: NaiveDate) -> RenderContext<'_> {
        RenderContext::new(self.calendar.as_ref(), self.locale, today)
    }

    /// `/start`: creates (or resets) the user's session and returns the entry prompt.
    pub async fn start(&self, user: UserId, today: NaiveDate) -> Result<Prompt, DialogueError> {
        if let Some(previous) = self.store.read(user).await? {
            if previous.state != SearchState::Idle {
                log_session_cleared(user.0, previous.state, "restarted with /start");
            }
        }
        let session = self.store.create(user).await?;
        render_prompt(&session, &self.context(today))
    }

    /// Handles one button press. The result always starts with exactly one
    /// [`Action::Acknowledge`], whatever happened to the session.
    pub async fn handle_selection(&self, user: UserId, payload: &str, today: NaiveDate) -> Vec<Action> {
        let mut actions = vec![Action::Acknowledge];

        match self.route(user, payload, today).await {
            Ok(Some(prompt)) => actions.push(Action::ShowPrompt(prompt)),
            Ok(None) => {}
            Err(DialogueError::MissingField(field)) => {
                tracing::warn!(
                    "Session of user {} lost field '{}', starting over",
                    user.0, field
                );
                match self.store.clear(user).await {
                    Ok(()) => actions.push(Action::ShowPrompt(entry_prompt())),
                    Err(e) => tracing::error!("Failed to clear session of user {}: {}", user.0, e),
                }
            }
            Err(e) => {
                tracing::error!("Failed to handle '{}' from user {}: {}", payload, user.0, e);
            }
        }

        actions
    }

    async fn route(
        &self,
        user: UserId,
        payload: &str,
        today: NaiveDate,
    ) -> Result<Option<Prompt>, DialogueError> {
        let event = SelectionEvent::decode(payload);
        let session = self.store.read_or_default(user).await?;
        let ctx = self.context(today);

        match advance(&session, &event, self.calendar.as_ref()) {
            Transition::Advance(next) => {
                let prompt = render_prompt(&next, &ctx)?;
                log_transition(user.0, session.state, next.state, event.kind());
                if session.state == SearchState::Idle {
                    self.counters.started.fetch_add(1, Ordering::Relaxed);
                }
                self.store.replace(user, next).await?;
                Ok(Some(prompt))
            }
            Transition::Redraw { month } => {
                tracing::debug!(
                    "Calendar for user {} moved to {}",
                    user.0,
                    month.format("%Y-%m")
                );
                Ok(Some(render_prompt_at(&session, &ctx, month)?))
            }
            Transition::Complete(done) => {
                let summary = render_prompt(&done, &ctx);
                log_transition(user.0, session.state, done.state, event.kind());
                self.store.clear(user).await?;
                log_session_cleared(user.0, done.state, "search completed");
                let summary = summary?;
                self.counters.completed.fetch_add(1, Ordering::Relaxed);
                Ok(Some(summary))
            }
            Transition::Ignore => {
                log_ignored_event(user.0, session.state, payload);
                self.counters.ignored.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }
}
