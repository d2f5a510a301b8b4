use anyhow::Result;
use teloxide::dispatching::DpHandlerDescription;
use teloxide::dptree::case;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use teloxide::utils::html::{bold, escape};
use tracing::info;

use crate::bot::command::PublicCommand;
use crate::bot::filter::filter_order_button;
use crate::bot::handlers::send_order_invoice;
use crate::bot::utils::{menu_keyboard, order_keyboard};
use crate::bot::Bot;
use crate::config::Config;
use crate::reply_to;

pub fn public_command_handler() -> Handler<'static, DependencyMap, Result<()>, DpHandlerDescription>
{
    dptree::entry()
        .branch(
            teloxide::filter_command::<PublicCommand, _>()
                .branch(case![PublicCommand::Start].endpoint(cmd_start))
                .branch(case![PublicCommand::Order].endpoint(cmd_order))
                .branch(case![PublicCommand::NoShipping].endpoint(cmd_no_shipping))
                .branch(case![PublicCommand::Help].endpoint(cmd_help)),
        )
        .branch(filter_order_button().endpoint(cmd_order))
}

async fn cmd_start(bot: Bot, msg: Message, cfg: Config) -> Result<()> {
    info!("{}: /start", msg.chat.id);
    let text = format!(
        "{}\n\nДля заказа нажмите на кнопку «{}» внизу и следуйте инструкциям",
        bold("Добро пожаловать!"),
        escape(&cfg.order.button),
    );
    bot.send_message(msg.chat.id, text).reply_markup(order_keyboard(&cfg.order.button)).await?;
    Ok(())
}

async fn cmd_order(bot: Bot, msg: Message, cfg: Config) -> Result<()> {
    info!("{}: меню", msg.chat.id);
    bot.send_message(msg.chat.id, "Выберите, сколько шавермы вам нужно")
        .reply_markup(menu_keyboard(cfg.order.max_items))
        .await?;
    Ok(())
}

async fn cmd_no_shipping(bot: Bot, msg: Message, cfg: Config) -> Result<()> {
    info!("{}: /noshipping", msg.chat.id);
    send_order_invoice(&bot, msg.chat.id, &cfg, 1, false).await
}

async fn cmd_help(bot: Bot, msg: Message) -> Result<()> {
    info!("{}: /help", msg.chat.id);
    reply_to!(bot, msg, PublicCommand::descriptions().to_string()).await?;
    Ok(())
}
