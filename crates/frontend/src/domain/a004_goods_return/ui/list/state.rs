use contracts::shared::list_view::{ListQuery, SortConfig};
use leptos::prelude::*;

use super::GoodsReturnRow;

#[derive(Clone, Debug)]
pub struct ReturnsListState {
    /// Видимые строки (текущая страница)
    pub items: Vec<GoodsReturnRow>,
    /// Поиск, фильтры, сортировка, страница
    pub query: ListQuery,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for ReturnsListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            // Свежие документы сверху; ISO-дата сортируется лексикографически
            query: ListQuery::with_sort(SortConfig::descending("doc_date")),
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ReturnsListState> {
    RwSignal::new(ReturnsListState::default())
}
