use crate::domain::a001_product::ProductRef;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::DisposalMethod;
use crate::shared::list_view::{Searchable, Sortable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoodsDisposalId(pub Uuid);

impl GoodsDisposalId {
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

impl AggregateId for GoodsDisposalId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(GoodsDisposalId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Документ списания товара со склада
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoodsDisposal {
    #[serde(flatten)]
    pub base: BaseAggregate<GoodsDisposalId>,

    /// Списываемый товар
    pub product: ProductRef,

    /// Количество
    pub quantity: i32,

    /// Способ списания
    pub method: DisposalMethod,

    /// Дата документа
    pub doc_date: DateTime<Utc>,
}

impl GoodsDisposal {
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
}

impl AggregateRoot for GoodsDisposal {
    type Id = GoodsDisposalId;

    fn id(&self) -> GoodsDisposalId {
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
        "a005"
    }

    fn collection_name() -> &'static str {
        "goods_disposal"
    }

    fn element_name() -> &'static str {
        "Списание товара"
    }

    fn list_name() -> &'static str {
        "Списания товаров"
    }
}

impl Searchable for GoodsDisposal {
    fn matches_search(&self, term: &str) -> bool {
        self.base.code.to_lowercase().contains(term)
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
            "method" => Some(self.method.code().to_string()),
            _ => None,
        }
    }
}

impl Sortable for GoodsDisposal {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.base.code.cmp(&other.base.code),
            "product" => self
                .product
                .name
                .to_lowercase()
                .cmp(&other.product.name.to_lowercase()),
            "quantity" => self.quantity.cmp(&other.quantity),
            "method" => self.method.code().cmp(other.method.code()),
            "doc_date" => self.doc_date.cmp(&other.doc_date),
            _ => self.doc_date.cmp(&other.doc_date),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// DTO создания/редактирования списания
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoodsDisposalDto {
    pub code: String,
    pub product: ProductRef,
    pub quantity: i32,
    pub method: DisposalMethod,
    /// Дата в формате "YYYY-MM-DD"
    pub doc_date: String,
    pub comment: Option<String>,
}

impl GoodsDisposalDto {
    pub fn from_aggregate(disposal: &GoodsDisposal) -> Self {
        Self {
            code: disposal.base.code.clone(),
            product: disposal.product.clone(),
            quantity: disposal.quantity,
            method: disposal.method,
            doc_date: disposal.doc_date.format("%Y-%m-%d").to_string(),
            comment: disposal.base.comment.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Номер документа не может быть пустым".into());
        }
        if self.quantity <= 0 {
            return Err("Количество должно быть положительным".into());
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
    use crate::shared::list_view::{apply_query, ListQuery, SortConfig};
    use chrono::TimeZone;

    fn disposal(code: &str, method: DisposalMethod, day: u32) -> GoodsDisposal {
        GoodsDisposal {
            base: BaseAggregate::new(
                GoodsDisposalId::new_v4(),
                code.to_string(),
                format!("Списание {}", code),
            ),
            product: ProductRef {
                id: Uuid::nil().to_string(),
                article: "KF-1000".to_string(),
                name: "Кофе зерновой 1 кг".to_string(),
            },
            quantity: 1,
            method,
            doc_date: Utc.with_ymd_and_hms(2025, 7, day, 12, 0, 0).unwrap(),
        }
    }

    /// Сценарий списочной формы списаний: фильтр по способу,
    /// сортировка по дате по убыванию, первая страница из двух записей
    #[test]
    fn test_list_scenario_damaged_by_date() {
        let mut rows = Vec::new();
        for day in 1..=8 {
            rows.push(disposal(
                &format!("DSP-{:03}", day),
                DisposalMethod::WriteOff,
                day,
            ));
        }
        for (i, day) in [3u32, 14, 9, 21].iter().enumerate() {
            rows.push(disposal(
                &format!("DSP-1{:02}", i),
                DisposalMethod::Damaged,
                *day,
            ));
        }
        assert_eq!(rows.len(), 12);

        let mut query = ListQuery::with_sort(SortConfig::descending("doc_date"));
        query.set_filter("method", DisposalMethod::Damaged.code().to_string());
        query.page_size = 2;

        let slice = apply_query(&rows, &query);
        assert_eq!(slice.total_count, 4);
        assert_eq!(slice.total_pages, 2);
        assert_eq!(slice.rows.len(), 2);
        // Две самые свежие записи со способом "damaged", по убыванию даты
        assert_eq!(slice.rows[0].base.code, "DSP-103");
        assert_eq!(slice.rows[1].base.code, "DSP-101");
        assert!(slice.rows[0].doc_date > slice.rows[1].doc_date);
    }
}
