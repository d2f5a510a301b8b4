use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;

use crate::bot::Bot;
use crate::config::Config;
use crate::order::{invoice_description, order_prices, total_price, OrderPayload};

/// Выставляет счёт на `items` шаверм. С доставкой бот дополнительно
/// запрашивает контакты и адрес, а варианты доставки отдаёт в ответ на shipping query
pub async fn send_order_invoice(
    bot: &Bot,
    chat_id: ChatId,
    cfg: &Config,
    items: u32,
    with_shipping: bool,
) -> Result<()> {
    let order = &cfg.order;
    let total = total_price(order.unit_price, items)?;
    let payload = OrderPayload::new(items).encode()?;
    let prices = order_prices(order.unit_price, items, &order.currency)?;

    info!("{}: счёт на {} шт., {} {}", chat_id, items, total, order.currency);

    let request = bot.send_invoice(
        chat_id,
        &order.title,
        invoice_description(items, total, &order.currency),
        payload,
        &cfg.telegram.payment_token,
        &order.currency,
        prices,
    );
    if with_shipping {
        request
            .need_name(true)
            .need_phone_number(true)
            .need_email(true)
            .need_shipping_address(true)
            .is_flexible(true)
            .await?;
    } else {
        request.await?;
    }
    Ok(())
}
