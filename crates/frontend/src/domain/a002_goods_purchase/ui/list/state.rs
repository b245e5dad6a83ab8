use contracts::domain::a002_goods_purchase::GoodsPurchase;
use contracts::shared::list_view::{ListQuery, SortConfig};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct PurchasesListState {
    /// Видимые строки (текущая страница)
    pub items: Vec<GoodsPurchase>,
    /// Поиск, фильтры, сортировка, страница
    pub query: ListQuery,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for PurchasesListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            // Свежие документы сверху
            query: ListQuery::with_sort(SortConfig::descending("doc_date")),
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<PurchasesListState> {
    RwSignal::new(PurchasesListState::default())
}
