use contracts::domain::a001_product::Product;
use contracts::shared::list_view::{ListQuery, SortConfig};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductsListState {
    /// Видимые карточки (текущая страница)
    pub items: Vec<Product>,
    /// Поиск, фильтры, сортировка, страница
    pub query: ListQuery,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for ProductsListState {
    fn default() -> Self {
        let mut query = ListQuery::with_sort(SortConfig::ascending("description"));
        // Карточки крупнее строк таблицы
        query.page_size = 25;
        Self {
            items: Vec::new(),
            query,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ProductsListState> {
    RwSignal::new(ProductsListState::default())
}
