use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Команды бота поиска авиабилетов:")]
pub enum Command {
    #[command(description = "Начать поиск авиабилетов")]
    Start,
    #[command(description = "Показать эту справку")]
    Help,
}
