use teloxide::dispatching::DpHandlerDescription;
use teloxide::prelude::*;

use super::utils::CallbackData;
use crate::config::Config;

pub fn filter_callbackdata<Output>() -> Handler<'static, DependencyMap, Output, DpHandlerDescription>
where
    Output: Send + Sync + 'static,
{
    dptree::filter_map(|callback: CallbackQuery| {
        callback.data.and_then(|s| CallbackData::unpack(&s))
    })
}

/// Нажатие на кнопку заказа приходит обычным текстовым сообщением
pub fn filter_order_button<Output>() -> Handler<'static, DependencyMap, Output, DpHandlerDescription>
where
    Output: Send + Sync + 'static,
{
    dptree::filter(|message: Message, cfg: Config| message.text() == Some(cfg.order.button.as_str()))
}

pub fn filter_successful_payment<Output>(
) -> Handler<'static, DependencyMap, Output, DpHandlerDescription>
where
    Output: Send + Sync + 'static,
{
    dptree::filter_map(|message: Message| message.successful_payment().cloned())
}
