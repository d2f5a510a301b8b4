use teloxide::utils::command::BotCommands;

// NOTE: Clone нужен, иначе команда не подходит под ограничение Injectable из dptree
#[derive(BotCommands, Clone, PartialEq, Debug)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum PublicCommand {
    #[command(description = "начать работу с ботом")]
    Start,
    #[command(description = "показать меню")]
    Order,
    #[command(description = "тестовый счёт без доставки")]
    NoShipping,
    #[command(description = "список команд")]
    Help,
}
