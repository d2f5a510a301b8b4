use std::collections::HashSet;

use anyhow::{ensure, Result};
use serde::Deserialize;
use teloxide::types::ChatId;

/// Уровень логирования, если он не задан ни в RUST_LOG, ни в конфигурации
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Наибольшее количество позиций, которое помещается в меню
pub const MENU_CAPACITY: u32 = 6;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Уровень логирования, если не задан RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub telegram: Telegram,
    #[serde(default)]
    pub order: Order,
    /// Варианты доставки
    #[serde(default = "default_shipping")]
    pub shipping: Vec<Shipping>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Telegram {
    /// bot token
    pub token: String,
    /// Токен платёжного провайдера
    pub payment_token: String,
    /// Чаты менеджеров, которым приходят уведомления о заказах
    #[serde(default)]
    pub managers: Vec<ChatId>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Order {
    /// Текст кнопки, открывающей меню
    pub button: String,
    /// Заголовок счёта
    pub title: String,
    pub currency: String,
    /// Цена одной шавермы в основных единицах валюты
    pub unit_price: u64,
    pub max_items: u32,
}

impl Default for Order {
    fn default() -> Self {
        Self {
            button: "Сделать заказ".to_owned(),
            title: "Ваш заказ".to_owned(),
            currency: "RUB".to_owned(),
            unit_price: 200,
            max_items: MENU_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Shipping {
    pub id: String,
    pub title: String,
    /// Цена в основных единицах валюты
    pub price: u64,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_owned()
}

fn default_shipping() -> Vec<Shipping> {
    vec![
        Shipping { id: "1".to_owned(), title: "Доставка".to_owned(), price: 500 },
        Shipping { id: "2".to_owned(), title: "Без доставки".to_owned(), price: 0 },
    ]
}

impl Config {
    pub fn new(path: &str) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::from_toml(&s)
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.order.unit_price > 0, "order.unit_price must be positive");
        ensure!(
            (1..=MENU_CAPACITY).contains(&self.order.max_items),
            "order.max_items must be within 1..={MENU_CAPACITY}"
        );
        ensure!(!self.shipping.is_empty(), "at least one shipping option is required");
        let mut ids = HashSet::new();
        for option in &self.shipping {
            ensure!(ids.insert(option.id.as_str()), "duplicate shipping option id: {}", option.id);
        }
        Ok(())
    }
}
