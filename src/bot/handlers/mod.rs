pub mod callback;
pub mod general_message;
pub mod message;

use std::sync::Arc;

use teloxide::{
    dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler},
    prelude::*,
};

use crate::bot::commands::Command;
use crate::dialogue::SearchRouter;

pub struct BotHandler {
    pub router: Arc<SearchRouter>,
}

impl BotHandler {
    pub fn new(router: Arc<SearchRouter>) -> Self {
        Self { router }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        let router = self.router.clone();
        let router_callback = self.router.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                        let router = router.clone();
                        async move { message::command_handler(bot, msg, cmd, router).await }
                    }),
            )
            .branch(Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                let router = router_callback.clone();
                async move { callback::callback_handler(bot, q, router).await }
            }))
            .branch(Update::filter_message().endpoint(general_message::handle_general_message))
    }
}
