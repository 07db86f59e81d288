use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::Command;
use crate::bot::keyboard::to_inline_markup;
use crate::bot::HandlerResult;
use crate::dialogue::SearchRouter;
use crate::utils::datetime::today;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{log_command_error, log_command_start};

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    router: Arc<SearchRouter>,
) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let username = user.username.as_deref().unwrap_or("unknown");

    match cmd {
        Command::Help => {
            log_command_start("/help", username, user.id.0, msg.chat.id.0);
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start => {
            log_command_start("/start", username, user.id.0, msg.chat.id.0);
            match router.start(user.id, today()).await {
                Ok(prompt) => {
                    bot.send_message(msg.chat.id, prompt.text)
                        .reply_markup(to_inline_markup(&prompt.keyboard))
                        .await?;
                }
                Err(e) => {
                    log_command_error("/start", user.id.0, msg.chat.id.0, &e.to_string());
                    CommandFeedback::new(bot, msg.chat.id)
                        .error("Не удалось начать поиск. Попробуйте ещё раз.")
                        .await?;
                }
            }
        }
    }
    Ok(())
}
