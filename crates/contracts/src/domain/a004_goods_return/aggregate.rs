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
pub struct GoodsReturnId(pub Uuid);

impl GoodsReturnId {
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

impl AggregateId for GoodsReturnId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(GoodsReturnId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Документ возврата товара покупателем
///
/// Ссылка на товар может отсутствовать: исторические записи бэкенда
/// не всегда содержат вложенный объект product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoodsReturn {
    #[serde(flatten)]
    pub base: BaseAggregate<GoodsReturnId>,

    /// Возвращаемый товар
    #[serde(default)]
    pub product: Option<ProductRef>,

    /// Количество
    pub quantity: i32,

    /// Причина возврата
    #[serde(default)]
    pub reason: String,

    /// Статус: requested, accepted, rejected, refunded
    #[serde(default)]
    pub status: String,

    /// Дата документа
    pub doc_date: DateTime<Utc>,
}

impl GoodsReturn {
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Название товара для отображения; "—" если ссылка отсутствует
    pub fn product_name(&self) -> &str {
        self.product.as_ref().map(|p| p.name.as_str()).unwrap_or("—")
    }
}

impl AggregateRoot for GoodsReturn {
    type Id = GoodsReturnId;

    fn id(&self) -> GoodsReturnId {
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
        "a004"
    }

    fn collection_name() -> &'static str {
        "goods_return"
    }

    fn element_name() -> &'static str {
        "Возврат покупателя"
    }

    fn list_name() -> &'static str {
        "Возвраты покупателей"
    }
}

impl Searchable for GoodsReturn {
    fn matches_search(&self, term: &str) -> bool {
        self.base.code.to_lowercase().contains(term)
            || self.reason.to_lowercase().contains(term)
            || self
                .product
                .as_ref()
                .map_or(false, |p| p.name.to_lowercase().contains(term))
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
            // Отсутствующая ссылка на товар не проходит фильтр по товару
            "product" => self.product.as_ref().map(|p| p.name.clone()),
            _ => None,
        }
    }
}

impl Sortable for GoodsReturn {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.base.code.cmp(&other.base.code),
            "product" => self
                .product_name()
                .to_lowercase()
                .cmp(&other.product_name().to_lowercase()),
            "quantity" => self.quantity.cmp(&other.quantity),
            "reason" => self.reason.to_lowercase().cmp(&other.reason.to_lowercase()),
            "status" => self.status.cmp(&other.status),
            "doc_date" => self.doc_date.cmp(&other.doc_date),
            _ => self.doc_date.cmp(&other.doc_date),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// DTO создания/редактирования возврата
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoodsReturnDto {
    pub code: String,
    pub product: Option<ProductRef>,
    pub quantity: i32,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: String,
    /// Дата в формате "YYYY-MM-DD"
    pub doc_date: String,
    pub comment: Option<String>,
}

impl GoodsReturnDto {
    pub fn from_aggregate(goods_return: &GoodsReturn) -> Self {
        Self {
            code: goods_return.base.code.clone(),
            product: goods_return.product.clone(),
            quantity: goods_return.quantity,
            reason: goods_return.reason.clone(),
            status: goods_return.status.clone(),
            doc_date: goods_return.doc_date.format("%Y-%m-%d").to_string(),
            comment: goods_return.base.comment.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Номер документа не может быть пустым".into());
        }
        if self.quantity <= 0 {
            return Err("Количество должно быть положительным".into());
        }
        if self.reason.trim().is_empty() {
            return Err("Причина возврата не может быть пустой".into());
        }
        if chrono::NaiveDate::parse_from_str(&self.doc_date, "%Y-%m-%d").is_err() {
            return Err("Дата документа должна быть в формате ГГГГ-ММ-ДД".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::Searchable;

    /// Исторические записи бэкенда могут не содержать product и metadata —
    /// документ должен десериализоваться, а фильтр по товару не проходить
    #[test]
    fn test_deserialize_without_product() {
        let raw = r#"{
            "id": "4f9d2c1a-0b50-4c8e-9a52-3a9d7c6b1e00",
            "code": "RET-2025-007",
            "description": "Возврат RET-2025-007",
            "comment": null,
            "quantity": 2,
            "reason": "не подошёл размер",
            "status": "requested",
            "doc_date": "2025-07-14T10:30:00Z"
        }"#;

        let goods_return: GoodsReturn = serde_json::from_str(raw).expect("valid json");
        assert!(goods_return.product.is_none());
        assert_eq!(goods_return.product_name(), "—");
        assert_eq!(goods_return.field_value("product"), None);
        assert_eq!(goods_return.base.metadata.version, 0);
    }

    #[test]
    fn test_search_tolerates_missing_product() {
        let raw = r#"{
            "id": "4f9d2c1a-0b50-4c8e-9a52-3a9d7c6b1e00",
            "code": "RET-2025-007",
            "description": "Возврат RET-2025-007",
            "comment": null,
            "quantity": 2,
            "reason": "не подошёл размер",
            "status": "requested",
            "doc_date": "2025-07-14T10:30:00Z"
        }"#;

        let goods_return: GoodsReturn = serde_json::from_str(raw).expect("valid json");
        assert!(goods_return.matches_search("ret-2025"));
        assert!(goods_return.matches_search("размер"));
        assert!(!goods_return.matches_search("кофе"));
    }
}
