use contracts::domain::a006_price_record::PriceRecord;
use contracts::shared::list_view::{ListQuery, SortConfig};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct PricesListState {
    /// Видимые строки (текущая страница)
    pub items: Vec<PriceRecord>,
    /// Поиск, фильтры, сортировка, страница
    pub query: ListQuery,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for PricesListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            // Последние установленные цены сверху
            query: ListQuery::with_sort(SortConfig::descending("valid_from")),
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<PricesListState> {
    RwSignal::new(PricesListState::default())
}
