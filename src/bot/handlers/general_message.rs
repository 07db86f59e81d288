use teloxide::prelude::*;

use crate::bot::HandlerResult;
use crate::utils::feedback::CommandFeedback;

/// Text that is neither a known command nor part of the button flow.
pub async fn handle_general_message(bot: Bot, msg: Message) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let feedback = CommandFeedback::new(bot, msg.chat.id);

    match classify_text(text) {
        TextHint::UnknownCommand(command) => {
            feedback
                .validation_error(
                    &format!("Неизвестная команда: {command}"),
                    "Отправьте /help, чтобы увидеть список команд.",
                )
                .await?;
        }
        TextHint::UseButtons => {
            feedback
                .info("Параметры поиска выбираются кнопками. Отправьте /start, чтобы начать.")
                .await?;
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
pub enum TextHint<'a> {
    UnknownCommand(&'a str),
    UseButtons,
}

pub fn classify_text(text: &str) -> TextHint<'_> {
    let text = text.trim();
    if text.starts_with('/') {
        TextHint::UnknownCommand(text.split_whitespace().next().unwrap_or(text))
    } else {
        TextHint::UseButtons
    }
}
