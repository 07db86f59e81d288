use std::sync::Arc;

use teloxide::prelude::*;

use crate::bot::keyboard::to_inline_markup;
use crate::bot::HandlerResult;
use crate::dialogue::{Action, Prompt, SearchRouter};
use crate::utils::datetime::today;
use crate::utils::logging::log_callback_received;

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    router: Arc<SearchRouter>,
) -> HandlerResult {
    let payload = q.data.as_deref().unwrap_or_default();
    let username = q.from.username.as_deref().unwrap_or("unknown");
    log_callback_received(payload, username, q.from.id.0);

    for action in router.handle_selection(q.from.id, payload, today()).await {
        match action {
            Action::Acknowledge => {
                bot.answer_callback_query(q.id.clone()).await?;
            }
            Action::ShowPrompt(prompt) => show_prompt(&bot, &q, prompt).await?,
        }
    }

    Ok(())
}

/// Edits the message the button belonged to, or sends a new one if Telegram
/// did not include it (e.g. the message is too old).
async fn show_prompt(bot: &Bot, q: &CallbackQuery, prompt: Prompt) -> ResponseResult<()> {
    let markup = (!prompt.keyboard.is_empty()).then(|| to_inline_markup(&prompt.keyboard));

    match q.message.as_ref() {
        Some(message) => {
            let request = bot.edit_message_text(message.chat.id, message.id, prompt.text);
            match markup {
                Some(markup) => request.reply_markup(markup).await?,
                None => request.await?,
            };
        }
        None => {
            let request = bot.send_message(ChatId(q.from.id.0 as i64), prompt.text);
            match markup {
                Some(markup) => request.reply_markup(markup).await?,
                None => request.await?,
            };
        }
    }

    Ok(())
}
