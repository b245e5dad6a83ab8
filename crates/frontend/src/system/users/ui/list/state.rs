use contracts::shared::list_view::{ListQuery, SortConfig};
use contracts::system::users::User;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct UsersListState {
    /// Видимые строки (текущая страница)
    pub items: Vec<User>,
    /// Поиск, фильтры, сортировка, страница
    pub query: ListQuery,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            query: ListQuery::with_sort(SortConfig::ascending("username")),
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}
