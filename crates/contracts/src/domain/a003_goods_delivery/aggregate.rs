use crate::domain::a001_product::ProductRef;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::DeliveryStatus;
use crate::shared::list_view::{Searchable, Sortable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoodsDeliveryId(pub Uuid);

impl GoodsDeliveryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for GoodsDeliveryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(GoodsDeliveryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Документ поставки товара на склад
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoodsDelivery {
    #[serde(flatten)]
    pub base: BaseAggregate<GoodsDeliveryId>,

    /// Наименование поставщика
    pub supplier_name: String,

    /// Поставляемый товар
    pub product: ProductRef,

    /// Количество
    pub quantity: i32,

    /// Статус поставки
    pub status: DeliveryStatus,

    /// Ожидаемая дата поставки
    pub expected_date: DateTime<Utc>,

    /// Фактическая дата приёмки
    #[serde(default)]
    pub received_date: Option<DateTime<Utc>>,
}

impl GoodsDelivery {
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
}

impl AggregateRoot for GoodsDelivery {
    type Id = GoodsDeliveryId;

    fn id(&self) -> GoodsDeliveryId {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "goods_delivery"
    }

    fn element_name() -> &'static str {
        "Поставка товара"
    }

    fn list_name() -> &'static str {
        "Поставки товаров"
    }
}

impl Searchable for GoodsDelivery {
    fn matches_search(&self, term: &str) -> bool {
        self.base.code.to_lowercase().contains(term)
            || self.supplier_name.to_lowercase().contains(term)
            || self.product.name.to_lowercase().contains(term)
            || self
                .base
                .comment
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(term)
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.code().to_string()),
            "supplier_name" => Some(self.supplier_name.clone()),
            _ => None,
        }
    }
}

impl Sortable for GoodsDelivery {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.base.code.cmp(&other.base.code),
            "supplier_name" => self
                .supplier_name
                .to_lowercase()
                .cmp(&other.supplier_name.to_lowercase()),
            "product" => self
                .product
                .name
                .to_lowercase()
                .cmp(&other.product.name.to_lowercase()),
            "quantity" => self.quantity.cmp(&other.quantity),
            "status" => self.status.code().cmp(other.status.code()),
            "expected_date" => self.expected_date.cmp(&other.expected_date),
            "received_date" => self.received_date.cmp(&other.received_date),
            _ => self.expected_date.cmp(&other.expected_date),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// DTO создания/редактирования поставки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoodsDeliveryDto {
    pub code: String,
    pub supplier_name: String,
    pub product: ProductRef,
    pub quantity: i32,
    pub status: DeliveryStatus,
    /// Дата в формате "YYYY-MM-DD"
    pub expected_date: String,
    pub comment: Option<String>,
}

impl GoodsDeliveryDto {
    pub fn from_aggregate(delivery: &GoodsDelivery) -> Self {
        Self {
            code: delivery.base.code.clone(),
            supplier_name: delivery.supplier_name.clone(),
            product: delivery.product.clone(),
            quantity: delivery.quantity,
            status: delivery.status,
            expected_date: delivery.expected_date.format("%Y-%m-%d").to_string(),
            comment: delivery.base.comment.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Номер документа не может быть пустым".into());
        }
        if self.supplier_name.trim().is_empty() {
            return Err("Поставщик не может быть пустым".into());
        }
        if self.quantity <= 0 {
            return Err("Количество должно быть положительным".into());
        }
        if chrono::NaiveDate::parse_from_str(&self.expected_date, "%Y-%m-%d").is_err() {
            return Err("Дата поставки должна быть в формате ГГГГ-ММ-ДД".into());
        }
        Ok(())
    }
}
