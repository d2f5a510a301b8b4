use teloxide::prelude::*;

use super::filter::{filter_callbackdata, filter_successful_payment};
use super::handlers::*;
use super::Bot;
use crate::config::Config;

pub async fn start_dispatcher(config: Config, bot: Bot) {
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                // оплата приходит сообщением, поэтому проверяется раньше команд
                .branch(filter_successful_payment().endpoint(successful_payment_handler))
                .branch(public_command_handler()),
        )
        .branch(
            Update::filter_callback_query()
                .chain(filter_callbackdata())
                .chain(callback_query_handler()),
        )
        .branch(Update::filter_shipping_query().endpoint(shipping_query_handler))
        .branch(Update::filter_pre_checkout_query().endpoint(pre_checkout_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![config])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
