//! # Flight search dialogue
//!
//! The conversation controller that walks a user through the five search
//! parameters. Everything here is independent of Telegram transport: the bot
//! layer decodes callback payloads into [`SelectionEvent`]s, hands them to the
//! [`SearchRouter`] and executes the returned [`Action`]s.

pub mod calendar;
pub mod error;
pub mod event;
pub mod machine;
pub mod render;
pub mod router;
pub mod state;
pub mod store;

pub use calendar::{CalendarSignal, DatePicker, InlineCalendar, Locale};
pub use error::DialogueError;
pub use event::SelectionEvent;
pub use machine::{advance, Transition};
pub use render::{render_prompt, Button, Keyboard, Prompt, RenderContext, CITIES};
pub use router::{Action, SearchRouter, SearchStats};
pub use state::{Field, SearchData, SearchState, Session};
pub use store::SessionStore;
