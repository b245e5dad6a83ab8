use contracts::domain::a003_goods_delivery::GoodsDelivery;
use contracts::shared::list_view::{ListQuery, SortConfig};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct DeliveriesListState {
    /// Видимые строки (текущая страница)
    pub items: Vec<GoodsDelivery>,
    /// Поиск, фильтры, сортировка, страница
    pub query: ListQuery,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for DeliveriesListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            // Ближайшие ожидаемые поставки сверху
            query: ListQuery::with_sort(SortConfig::descending("expected_date")),
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<DeliveriesListState> {
    RwSignal::new(DeliveriesListState::default())
}
