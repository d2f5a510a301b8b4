use anyhow::Result;
use teloxide::dispatching::DpHandlerDescription;
use teloxide::dptree::case;
use teloxide::prelude::*;
use tracing::info;

use crate::bot::handlers::send_order_invoice;
use crate::bot::utils::CallbackData;
use crate::bot::Bot;
use crate::config::Config;

pub fn callback_query_handler() -> Handler<'static, DependencyMap, Result<()>, DpHandlerDescription>
{
    dptree::entry().branch(case![CallbackData::Items(items)].endpoint(callback_items))
}

async fn callback_items(bot: Bot, query: CallbackQuery, cfg: Config, items: u32) -> Result<()> {
    info!("{}: <- items {}", query.from.id, items);

    if !(1..=cfg.order.max_items).contains(&items) {
        bot.answer_callback_query(query.id)
            .text("Такой позиции нет в меню")
            .show_alert(true)
            .await?;
        return Ok(());
    }

    bot.answer_callback_query(query.id).await?;

    // меню больше не нужно, вместо него придёт счёт
    let chat_id = match query.message {
        Some(message) => {
            bot.delete_message(message.chat.id, message.id).await?;
            message.chat.id
        }
        None => query.from.id.into(),
    };

    send_order_invoice(&bot, chat_id, &cfg, items, true).await
}
