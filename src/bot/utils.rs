use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
};

use crate::config::MENU_CAPACITY;

const MENU_ROW_WIDTH: usize = 3;

const MENU_LABELS: [&str; MENU_CAPACITY as usize] =
    ["Одна шава", "Две шавы", "Три шавы", "Четыре шавы", "Пять шав", "Шесть шав"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackData {
    /// Количество шаверм в заказе
    Items(u32),
}

impl CallbackData {
    pub fn pack(&self) -> String {
        match self {
            Self::Items(n) => format!("items {}", n),
        }
    }

    pub fn unpack(s: &str) -> Option<Self> {
        let (cmd, data) = s.split_once(' ')?;
        match cmd {
            "items" => Some(Self::Items(data.parse().ok()?)),
            _ => None,
        }
    }
}

/// Клавиатура под полем ввода с единственной кнопкой заказа
pub fn order_keyboard(button: &str) -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![KeyboardButton::new(button)]]).resize_keyboard(true)
}

/// Меню из `max_items` позиций, по три в ряд
pub fn menu_keyboard(max_items: u32) -> InlineKeyboardMarkup {
    let buttons = MENU_LABELS.iter().zip(1..=max_items).map(|(label, n)| {
        InlineKeyboardButton::callback(*label, CallbackData::Items(n).pack())
    });
    let rows = buttons
        .collect::<Vec<_>>()
        .chunks(MENU_ROW_WIDTH)
        .map(|row| row.to_vec())
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}
