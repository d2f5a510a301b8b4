use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{ShippingQuery, SuccessfulPayment};
use tracing::{info, warn};

use crate::bot::Bot;
use crate::config::Config;
use crate::order::{shipping_options, OrderPayload, OrderSummary};

/// Ответ на shipping/pre-checkout query со счётом, который выставил не этот бот
pub const CHECKOUT_ERROR: &str = "Something went wrong...";

/// Решение по shipping/pre-checkout query: принятый заказ или текст отказа.
/// Ошибка разбора только пишется в лог
pub fn checkout_answer(user: UserId, payload: &str) -> Result<OrderPayload, &'static str> {
    OrderPayload::parse(payload).map_err(|err| {
        warn!("{}: некорректный payload {:?}: {}", user, payload, err);
        CHECKOUT_ERROR
    })
}

pub async fn shipping_query_handler(bot: Bot, query: ShippingQuery, cfg: Config) -> Result<()> {
    info!("{}: shipping query {}", query.from.id, query.invoice_payload);

    if let Err(error) = checkout_answer(query.from.id, &query.invoice_payload) {
        bot.answer_shipping_query(query.id, false).error_message(error).await?;
        return Ok(());
    }

    let options = shipping_options(&cfg.shipping)?;
    bot.answer_shipping_query(query.id, true).shipping_options(options).await?;
    Ok(())
}

pub async fn pre_checkout_handler(bot: Bot, query: PreCheckoutQuery) -> Result<()> {
    info!("{}: pre-checkout {} {:?}", query.from.id, query.total_amount, query.currency);

    match checkout_answer(query.from.id, &query.invoice_payload) {
        Ok(_) => bot.answer_pre_checkout_query(query.id, true).await?,
        Err(error) => bot.answer_pre_checkout_query(query.id, false).error_message(error).await?,
    };
    Ok(())
}

pub async fn successful_payment_handler(
    bot: Bot,
    msg: Message,
    payment: SuccessfulPayment,
    cfg: Config,
) -> Result<()> {
    info!("{}: оплата {} {:?}", msg.chat.id, payment.total_amount, payment.currency);

    bot.send_message(msg.chat.id, "Спасибо за покупку, заходите к нам еще!").await?;

    let user = msg.from().map(|u| u.id).unwrap_or(UserId(0));
    // деньги уже списаны, поэтому чужой payload означает только отсутствие уведомления
    let Ok(payload) = checkout_answer(user, &payment.invoice_payload) else {
        return Ok(());
    };

    let summary = OrderSummary::from_payment(&payload, &payment, &cfg.shipping, msg.from(), msg.date);
    let text = summary.notification_text();
    // ошибка отправки одному менеджеру не мешает остальным
    for manager in &cfg.telegram.managers {
        if let Err(err) = bot.send_message(*manager, &text).await {
            warn!("не удалось уведомить менеджера {}: {}", manager, err);
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_own_invoice() {
        let payload = r#"{"type":"shawa_bot_order","itemsCount":2}"#;
        assert_eq!(checkout_answer(UserId(1), payload), Ok(OrderPayload::new(2)));
    }

    #[test]
    fn rejects_foreign_invoice() {
        for payload in [
            r#"{"type":"donation","itemsCount":2}"#,
            r#"{"type":"shawa_bot_order","itemsCount":0}"#,
            r#"{"itemsCount":2}"#,
            "Custom-Payload",
            "",
        ] {
            assert_eq!(checkout_answer(UserId(1), payload), Err(CHECKOUT_ERROR), "{payload}");
        }
    }
}
