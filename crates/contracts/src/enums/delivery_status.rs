use serde::{Deserialize, Serialize};

/// Статусы поставки товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Pending,
    InTransit,
    Received,
    Cancelled,
}

impl DeliveryStatus {
    /// Получить код статуса
    pub fn code(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::InTransit => "in_transit",
            DeliveryStatus::Received => "received",
            DeliveryStatus::Cancelled => "cancelled",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Ожидается",
            DeliveryStatus::InTransit => "В пути",
            DeliveryStatus::Received => "Получена",
            DeliveryStatus::Cancelled => "Отменена",
        }
    }

    /// Получить все статусы
    pub fn all() -> Vec<DeliveryStatus> {
        vec![
            DeliveryStatus::Pending,
            DeliveryStatus::InTransit,
            DeliveryStatus::Received,
            DeliveryStatus::Cancelled,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(DeliveryStatus::Pending),
            "in_transit" => Some(DeliveryStatus::InTransit),
            "received" => Some(DeliveryStatus::Received),
            "cancelled" => Some(DeliveryStatus::Cancelled),
            _ => None,
        }
    }
}

impl ToString for DeliveryStatus {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
