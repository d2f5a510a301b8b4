use serde::{Deserialize, Serialize};

use super::PayloadError;

/// Признак того, что счёт выставлен этим ботом
pub const ORDER_PAYLOAD_TYPE: &str = "shawa_bot_order";

/// Полезная нагрузка, прикрепляемая к каждому счёту
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "itemsCount")]
    items_count: u32,
}

impl OrderPayload {
    pub fn new(items_count: u32) -> Self {
        Self { kind: ORDER_PAYLOAD_TYPE.to_owned(), items_count }
    }

    pub fn items_count(&self) -> u32 {
        self.items_count
    }

    pub fn encode(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Разбирает payload из платёжного запроса и проверяет, что счёт наш
    pub fn parse(s: &str) -> Result<Self, PayloadError> {
        let payload = serde_json::from_str::<Self>(s)?;
        if payload.kind != ORDER_PAYLOAD_TYPE {
            return Err(PayloadError::ForeignInvoice(payload.kind));
        }
        if payload.items_count == 0 {
            return Err(PayloadError::EmptyOrder);
        }
        Ok(payload)
    }
}
