use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::dialogue::Keyboard;

/// Converts a rendered keyboard into Telegram inline buttons.
pub fn to_inline_markup(keyboard: &Keyboard) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(keyboard.rows.iter().map(|row| {
        row.iter()
            .map(|button| InlineKeyboardButton::callback(button.label.clone(), button.payload.clone()))
            .collect::<Vec<_>>()
    }))
}
