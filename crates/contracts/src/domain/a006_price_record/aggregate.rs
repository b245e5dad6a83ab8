use crate::domain::a001_product::ProductRef;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::list_view::{Searchable, Sortable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRecordId(pub Uuid);

impl PriceRecordId {
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

impl AggregateId for PriceRecordId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PriceRecordId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Запись регистра цен: цена товара, действующая с указанной даты
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(flatten)]
    pub base: BaseAggregate<PriceRecordId>,

    /// Товар
    pub product: ProductRef,

    /// Цена за единицу
    pub price: f64,

    /// Валюта (RUB)
    #[serde(default)]
    pub currency: String,

    /// Действует с
    pub valid_from: DateTime<Utc>,

    /// Действующая запись (false — вытеснена более новой)
    #[serde(default)]
    pub is_active: bool,
}

impl PriceRecord {
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
}

impl AggregateRoot for PriceRecord {
    type Id = PriceRecordId;

    fn id(&self) -> PriceRecordId {
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
        "a006"
    }

    fn collection_name() -> &'static str {
        "price_record"
    }

    fn element_name() -> &'static str {
        "Цена товара"
    }

    fn list_name() -> &'static str {
        "Цены товаров"
    }
}

impl Searchable for PriceRecord {
    fn matches_search(&self, term: &str) -> bool {
        self.base.code.to_lowercase().contains(term)
            || self.product.name.to_lowercase().contains(term)
            || self.product.article.to_lowercase().contains(term)
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "currency" => Some(self.currency.clone()),
            "is_active" => Some(self.is_active.to_string()),
            _ => None,
        }
    }
}

impl Sortable for PriceRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.base.code.cmp(&other.base.code),
            "product" => self
                .product
                .name
                .to_lowercase()
                .cmp(&other.product.name.to_lowercase()),
            "price" => self.price.partial_cmp(&other.price).unwrap_or(Ordering::Equal),
            "valid_from" => self.valid_from.cmp(&other.valid_from),
            "is_active" => self.is_active.cmp(&other.is_active),
            _ => self.valid_from.cmp(&other.valid_from),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// DTO установки новой цены
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecordDto {
    pub product: ProductRef,
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    /// Дата в формате "YYYY-MM-DD"
    pub valid_from: String,
}

impl PriceRecordDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.product.id.trim().is_empty() {
            return Err("Не выбран товар".into());
        }
        if self.price < 0.0 {
            return Err("Цена не может быть отрицательной".into());
        }
        if chrono::NaiveDate::parse_from_str(&self.valid_from, "%Y-%m-%d").is_err() {
            return Err("Дата начала действия должна быть в формате ГГГГ-ММ-ДД".into());
        }
        Ok(())
    }
}
