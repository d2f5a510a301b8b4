pub mod bot;
pub mod config;
pub mod order;

#[macro_export]
macro_rules! reply_to {
    ($b:expr, $m:expr, $t:expr) => {
        $b.send_message($m.chat.id, $t).reply_to_message_id($m.id)
    };
}
