use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::Serialize;
use teloxide::types::{ShippingAddress, SuccessfulPayment, User};
use teloxide::utils::html::{bold, escape, user_mention};

use super::OrderPayload;
use crate::config::Shipping;

/// Снимок успешной оплаты, из которого собирается уведомление менеджерам
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub items_count: u32,
    /// Сумма в минимальных единицах валюты
    pub total_amount: i64,
    pub currency: String,
    pub shipping: Option<String>,
    pub customer: Option<Customer>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i64,
    pub full_name: String,
    pub username: Option<String>,
}

impl From<&User> for Customer {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0 as i64,
            full_name: user.full_name(),
            username: user.username.clone(),
        }
    }
}

impl OrderSummary {
    pub fn from_payment(
        payload: &OrderPayload,
        payment: &SuccessfulPayment,
        shipping: &[Shipping],
        customer: Option<&User>,
        date: DateTime<Utc>,
    ) -> Self {
        let info = &payment.order_info;
        // в платеже приходит только id варианта доставки
        let shipping = payment.shipping_option_id.as_ref().map(|id| {
            shipping
                .iter()
                .find(|s| &s.id == id)
                .map(|s| s.title.clone())
                .unwrap_or_else(|| id.clone())
        });
        Self {
            items_count: payload.items_count(),
            total_amount: i64::from(payment.total_amount),
            currency: wire_code(&payment.currency),
            shipping,
            customer: customer.map(Customer::from),
            name: info.name.clone(),
            phone_number: info.phone_number.clone(),
            email: info.email.clone(),
            address: info.shipping_address.as_ref().map(format_address),
            date,
        }
    }

    pub fn notification_text(&self) -> String {
        let mut lines = vec![
            bold("Новый заказ!"),
            format!("Шаверма: x{}", self.items_count),
            format!(
                "Сумма: {}.{:02} {}",
                self.total_amount / 100,
                self.total_amount % 100,
                escape(&self.currency)
            ),
        ];
        if let Some(shipping) = &self.shipping {
            lines.push(format!("Доставка: {}", escape(shipping)));
        }
        if let Some(customer) = &self.customer {
            let mut line =
                format!("Покупатель: {}", user_mention(customer.id, &customer.full_name));
            if let Some(username) = &customer.username {
                line += &format!(" (@{})", escape(username));
            }
            lines.push(line);
        }
        let fields = [
            ("Имя", &self.name),
            ("Телефон", &self.phone_number),
            ("Email", &self.email),
            ("Адрес", &self.address),
        ];
        for (label, value) in fields {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                lines.push(format!("{label}: {}", escape(value)));
            }
        }
        lines.push(format!("Время: {} UTC", self.date.format("%Y-%m-%d %H:%M:%S")));
        lines.join("\n")
    }
}

/// Коды валют и стран в teloxide -- перечисления, в Bot API они приходят строками
pub fn wire_code<T: Serialize + Debug>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(code)) => code,
        _ => format!("{:?}", value),
    }
}

fn format_address(address: &ShippingAddress) -> String {
    let country = wire_code(&address.country_code);
    [
        address.post_code.as_str(),
        country.as_str(),
        address.state.as_str(),
        address.city.as_str(),
        address.street_line1.as_str(),
        address.street_line2.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;

    fn summary() -> OrderSummary {
        OrderSummary {
            items_count: 4,
            total_amount: 130000,
            currency: "RUB".to_owned(),
            shipping: Some("Доставка".to_owned()),
            customer: Some(Customer {
                id: 42,
                full_name: "Иван Петров".to_owned(),
                username: Some("ivan".to_owned()),
            }),
            name: Some("Иван".to_owned()),
            phone_number: Some("+79990000000".to_owned()),
            email: None,
            address: Some("190000, Санкт-Петербург, Невский пр. 1".to_owned()),
            date: Utc.with_ymd_and_hms(2023, 6, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn contains_items_count() {
        let text = summary().notification_text();
        assert!(text.contains("Шаверма: x4"), "{text}");
        assert!(text.contains("Сумма: 1300.00 RUB"));
        assert!(text.contains("Доставка: Доставка"));
        assert!(text.contains("tg://user?id=42"));
        assert!(text.contains("(@ivan)"));
        assert!(text.contains("Телефон: +79990000000"));
        assert!(text.contains("Адрес: 190000, Санкт-Петербург, Невский пр. 1"));
        assert!(text.ends_with("Время: 2023-06-01 12:30:00 UTC"));
        assert!(!text.contains("Email"));
    }

    #[test]
    fn minimal() {
        let summary = OrderSummary {
            items_count: 1,
            total_amount: 20050,
            shipping: None,
            customer: None,
            name: Some(String::new()),
            phone_number: None,
            address: None,
            ..summary()
        };
        let text = summary.notification_text();
        assert_eq!(
            text,
            "<b>Новый заказ!</b>\nШаверма: x1\nСумма: 200.50 RUB\nВремя: 2023-06-01 12:30:00 UTC"
        );
    }

    #[test]
    fn escapes_user_input() {
        let summary = OrderSummary { name: Some("<b>x</b> & co".to_owned()), ..summary() };
        let text = summary.notification_text();
        assert!(text.contains("Имя: &lt;b&gt;x&lt;/b&gt; &amp; co"));
    }

    #[test]
    fn mention_escaped_once() {
        let summary = OrderSummary {
            customer: Some(Customer {
                id: 1,
                full_name: "Tom & <Jerry>".to_owned(),
                username: None,
            }),
            ..summary()
        };
        let text = summary.notification_text();
        assert!(text.contains(r#"<a href="tg://user?id=1">Tom &amp; &lt;Jerry&gt;</a>"#), "{text}");
        assert!(!text.contains("&amp;amp;"));
    }

    fn payment(shipping_option_id: &str) -> SuccessfulPayment {
        serde_json::from_value(serde_json::json!({
            "currency": "RUB",
            "total_amount": 130000,
            "invoice_payload": r#"{"type":"shawa_bot_order","itemsCount":4}"#,
            "shipping_option_id": shipping_option_id,
            "order_info": {
                "name": "Иван",
                "phone_number": "+79990000000",
                "email": "ivan@example.com",
                "shipping_address": {
                    "country_code": "RU",
                    "state": "Ленинградская обл.",
                    "city": "Гатчина",
                    "street_line1": "ул. Ленина 1",
                    "street_line2": "",
                    "post_code": "188300"
                }
            },
            "telegram_payment_charge_id": "tg-charge",
            "provider_payment_charge_id": "provider-charge"
        }))
        .unwrap()
    }

    #[test]
    fn from_successful_payment() {
        let shipping = [
            Shipping { id: "1".into(), title: "Доставка".into(), price: 500 },
            Shipping { id: "2".into(), title: "Без доставки".into(), price: 0 },
        ];
        let payment = payment("1");
        let payload = OrderPayload::parse(&payment.invoice_payload).unwrap();
        let date = Utc.with_ymd_and_hms(2023, 6, 1, 12, 30, 0).unwrap();
        let summary = OrderSummary::from_payment(&payload, &payment, &shipping, None, date);

        assert_eq!(summary.items_count, 4);
        assert_eq!(summary.total_amount, 130000);
        assert_eq!(summary.currency, "RUB");
        assert_eq!(summary.shipping.as_deref(), Some("Доставка"));
        assert_eq!(
            summary.address.as_deref(),
            Some("188300, RU, Ленинградская обл., Гатчина, ул. Ленина 1")
        );

        let text = summary.notification_text();
        assert!(text.contains("Шаверма: x4"));
        assert!(text.contains("Сумма: 1300.00 RUB"));
        assert!(text.contains("Email: ivan@example.com"));
        assert!(text.contains("Адрес: 188300, RU, Ленинградская обл., Гатчина, ул. Ленина 1"));
        assert!(!text.contains("Покупатель"));
    }

    #[test]
    fn unknown_shipping_option() {
        let payment = payment("9");
        let payload = OrderPayload::new(4);
        let date = Utc.with_ymd_and_hms(2023, 6, 1, 12, 30, 0).unwrap();
        let summary = OrderSummary::from_payment(&payload, &payment, &[], None, date);
        assert_eq!(summary.shipping.as_deref(), Some("9"));
    }
}
