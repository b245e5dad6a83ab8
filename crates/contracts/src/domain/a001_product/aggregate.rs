use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::list_view::{Searchable, Sortable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
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

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар (номенклатурная позиция каталога)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    /// Артикул
    #[serde(default)]
    pub article: String,

    /// Категория товара
    #[serde(default)]
    pub category: String,

    /// Единица измерения (шт, кг, л)
    #[serde(default)]
    pub unit: String,

    /// Участвует ли товар в текущем обороте
    #[serde(default)]
    pub is_active: bool,
}

/// Ссылка на товар, встраиваемая в документы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: String,
    pub article: String,
    pub name: String,
}

impl Product {
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Ссылка для встраивания в документы
    pub fn to_ref(&self) -> ProductRef {
        ProductRef {
            id: self.base.id.as_string(),
            article: self.article.clone(),
            name: self.base.description.clone(),
        }
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
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
        "a001"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Товар"
    }

    fn list_name() -> &'static str {
        "Товары"
    }
}

impl Searchable for Product {
    fn matches_search(&self, term: &str) -> bool {
        self.base.code.to_lowercase().contains(term)
            || self.base.description.to_lowercase().contains(term)
            || self.article.to_lowercase().contains(term)
            || self.category.to_lowercase().contains(term)
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "category" => Some(self.category.clone()),
            "unit" => Some(self.unit.clone()),
            "is_active" => Some(self.is_active.to_string()),
            _ => None,
        }
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.base.code.cmp(&other.base.code),
            "description" => self
                .base
                .description
                .to_lowercase()
                .cmp(&other.base.description.to_lowercase()),
            "article" => self.article.to_lowercase().cmp(&other.article.to_lowercase()),
            "category" => self.category.to_lowercase().cmp(&other.category.to_lowercase()),
            "is_active" => self.is_active.cmp(&other.is_active),
            "created_at" => self.base.metadata.created_at.cmp(&other.base.metadata.created_at),
            _ => self.base.code.cmp(&other.base.code),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// DTO создания/редактирования товара
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub article: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub is_active: bool,
    pub comment: Option<String>,
}

impl ProductDto {
    /// Заполнить форму из существующей записи
    pub fn from_aggregate(product: &Product) -> Self {
        Self {
            code: product.base.code.clone(),
            description: product.base.description.clone(),
            article: product.article.clone(),
            category: product.category.clone(),
            unit: product.unit.clone(),
            is_active: product.is_active,
            comment: product.base.comment.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Код не может быть пустым".into());
        }
        if self.description.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if self.article.len() > 40 {
            return Err("Артикул не должен превышать 40 символов".into());
        }
        if self.category.len() > 40 {
            return Err("Категория не должна превышать 40 символов".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> ProductDto {
        ProductDto {
            code: "PRD-001".to_string(),
            description: "Кофе зерновой 1 кг".to_string(),
            article: "KF-1000".to_string(),
            category: "Бакалея".to_string(),
            unit: "шт".to_string(),
            is_active: true,
            comment: None,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_validate_requires_code_and_description() {
        let mut dto = valid_dto();
        dto.code = "  ".to_string();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.description = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_validate_field_lengths() {
        let mut dto = valid_dto();
        dto.category = "х".repeat(41);
        assert!(dto.validate().is_err());
    }
}
