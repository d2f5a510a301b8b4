use std::num::TryFromIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed invoice payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invoice was not issued by this bot: type = {0:?}")]
    ForeignInvoice(String),
    #[error("order has no items")]
    EmptyOrder,
}

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("price overflow: {0} x {1}")]
    Overflow(u64, u32),
    #[error("amount does not fit into a Bot API price: {0}")]
    AmountOutOfRange(#[from] TryFromIntError),
}
