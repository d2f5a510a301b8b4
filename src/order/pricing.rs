use teloxide::types::{LabeledPrice, ShippingOption};

use super::OrderError;
use crate::config::Shipping;

/// Bot API принимает суммы в минимальных единицах валюты
const MINOR_UNITS: u64 = 100;

pub fn total_price(unit_price: u64, items: u32) -> Result<u64, OrderError> {
    unit_price.checked_mul(items as u64).ok_or(OrderError::Overflow(unit_price, items))
}

pub fn invoice_description(items: u32, total: u64, currency: &str) -> String {
    format!("Шаверма: x{items}   {total} {currency}")
}

fn labeled_price(label: impl Into<String>, price: u64) -> Result<LabeledPrice, OrderError> {
    let minor = price.checked_mul(MINOR_UNITS).ok_or(OrderError::Overflow(price, 100))?;
    Ok(LabeledPrice::new(label, minor.try_into()?))
}

/// Строки счёта для заказа из `items` позиций
pub fn order_prices(
    unit_price: u64,
    items: u32,
    currency: &str,
) -> Result<Vec<LabeledPrice>, OrderError> {
    let total = total_price(unit_price, items)?;
    Ok(vec![labeled_price(invoice_description(items, total, currency), total)?])
}

pub fn shipping_options(shipping: &[Shipping]) -> Result<Vec<ShippingOption>, OrderError> {
    shipping
        .iter()
        .map(|s| {
            let price = labeled_price(s.title.as_str(), s.price)?;
            Ok(ShippingOption::new(s.id.as_str(), s.title.as_str(), vec![price]))
        })
        .collect()
}
