use anyhow::Result;
use shawa_bot::bot::{start_dispatcher, PublicCommand};
use shawa_bot::config::{Config, DEFAULT_LOG_LEVEL};
use teloxide::adaptors::throttle::Limits;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "./config.toml".to_owned());
    let config = Config::new(&path);

    // уровень берётся из конфигурации, так что логгер поднимается уже после её чтения
    let log_level = config.as_ref().map(|c| c.log_level.as_str()).unwrap_or(DEFAULT_LOG_LEVEL);
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    let config = config.map_err(|err| {
        error!("не удалось загрузить конфигурацию {}: {:#}", path, err);
        err
    })?;

    if config.telegram.managers.is_empty() {
        warn!("список менеджеров пуст, уведомления о заказах отправляться не будут");
    }

    let bot = teloxide::Bot::new(&config.telegram.token)
        .parse_mode(ParseMode::Html)
        .cache_me()
        .throttle(Limits::default());

    if let Err(err) = bot.set_my_commands(PublicCommand::bot_commands()).await {
        error!("не удалось зарегистрировать команды: {}", err);
        return Err(err.into());
    }

    info!("бот запущен");
    start_dispatcher(config, bot).await;

    Ok(())
}
