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
pub struct GoodsPurchaseId(pub Uuid);

impl GoodsPurchaseId {
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

impl AggregateId for GoodsPurchaseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(GoodsPurchaseId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Документ закупки товара у поставщика
///
/// Код агрегата используется как номер документа (например, "PO-2025-014").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoodsPurchase {
    #[serde(flatten)]
    pub base: BaseAggregate<GoodsPurchaseId>,

    /// Наименование поставщика
    pub supplier_name: String,

    /// Закупаемый товар
    pub product: ProductRef,

    /// Количество
    pub quantity: i32,

    /// Цена за единицу
    pub unit_price: f64,

    /// Сумма документа
    pub total_amount: f64,

    /// Дата документа
    pub doc_date: DateTime<Utc>,

    /// Статус: draft, ordered, received
    #[serde(default)]
    pub status: String,
}

impl GoodsPurchase {
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
}

impl AggregateRoot for GoodsPurchase {
    type Id = GoodsPurchaseId;

    fn id(&self) -> GoodsPurchaseId {
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
        "a002"
    }

    fn collection_name() -> &'static str {
        "goods_purchase"
    }

    fn element_name() -> &'static str {
        "Закупка товара"
    }

    fn list_name() -> &'static str {
        "Закупки товаров"
    }
}

impl Searchable for GoodsPurchase {
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
            "status" => Some(self.status.clone()),
            "supplier_name" => Some(self.supplier_name.clone()),
            _ => None,
        }
    }
}

impl Sortable for GoodsPurchase {
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
            "unit_price" => self
                .unit_price
                .partial_cmp(&other.unit_price)
                .unwrap_or(Ordering::Equal),
            "total_amount" => self
                .total_amount
                .partial_cmp(&other.total_amount)
                .unwrap_or(Ordering::Equal),
            "doc_date" => self.doc_date.cmp(&other.doc_date),
            "status" => self.status.cmp(&other.status),
            _ => self.doc_date.cmp(&other.doc_date),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// DTO создания/редактирования закупки
///
/// Дата передаётся строкой "YYYY-MM-DD" (значение input type="date").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoodsPurchaseDto {
    pub code: String,
    pub supplier_name: String,
    pub product: ProductRef,
    pub quantity: i32,
    pub unit_price: f64,
    pub doc_date: String,
    #[serde(default)]
    pub status: String,
    pub comment: Option<String>,
}

impl GoodsPurchaseDto {
    pub fn from_aggregate(purchase: &GoodsPurchase) -> Self {
        Self {
            code: purchase.base.code.clone(),
            supplier_name: purchase.supplier_name.clone(),
            product: purchase.product.clone(),
            quantity: purchase.quantity,
            unit_price: purchase.unit_price,
            doc_date: purchase.doc_date.format("%Y-%m-%d").to_string(),
            status: purchase.status.clone(),
            comment: purchase.base.comment.clone(),
        }
    }

    /// Сумма документа
    pub fn total_amount(&self) -> f64 {
        self.quantity as f64 * self.unit_price
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
        if self.unit_price < 0.0 {
            return Err("Цена не может быть отрицательной".into());
        }
        if chrono::NaiveDate::parse_from_str(&self.doc_date, "%Y-%m-%d").is_err() {
            return Err("Дата документа должна быть в формате ГГГГ-ММ-ДД".into());
        }
        Ok(())
    }
}
