use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Конфигурация сортировки списка: поле и направление
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub field: String,
    pub ascending: bool,
}

impl SortConfig {
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: true,
        }
    }

    pub fn descending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: false,
        }
    }
}

/// Параметры отображения списочной формы
///
/// Страницы нумеруются с нуля; `PaginationControls` показывает их
/// пользователю с единицы.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQuery {
    /// Поисковый запрос (пустая строка — без поиска)
    pub search: String,
    /// Фильтры точного равенства: имя поля → ожидаемое значение.
    /// Пустое значение снимает ограничение по полю.
    pub filters: BTreeMap<String, String>,
    /// Сортировка; None — порядок как пришёл с бэкенда
    pub sort: Option<SortConfig>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            page: 0,
            page_size: 50,
        }
    }
}

impl ListQuery {
    pub fn with_sort(sort: SortConfig) -> Self {
        Self {
            sort: Some(sort),
            ..Self::default()
        }
    }

    /// Установить поисковый запрос (сбрасывает страницу)
    pub fn set_search(&mut self, term: String) {
        self.search = term;
        self.page = 0;
    }

    /// Установить фильтр равенства; пустое значение убирает фильтр
    pub fn set_filter(&mut self, field: &str, value: String) {
        if value.is_empty() {
            self.filters.remove(field);
        } else {
            self.filters.insert(field.to_string(), value);
        }
        self.page = 0;
    }

    /// Переключение сортировки кликом по заголовку колонки:
    /// повторный клик меняет направление, новое поле сортируется по возрастанию
    pub fn toggle_sort(&mut self, field: &str) {
        match &mut self.sort {
            Some(sort) if sort.field == field => sort.ascending = !sort.ascending,
            _ => self.sort = Some(SortConfig::ascending(field)),
        }
    }

    /// Сменить размер страницы (сбрасывает страницу)
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 0;
    }

    /// Сбросить поиск и фильтры
    pub fn reset(&mut self) {
        self.search.clear();
        self.filters.clear();
        self.page = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sort() {
        let mut query = ListQuery::default();
        query.toggle_sort("doc_date");
        assert_eq!(query.sort, Some(SortConfig::ascending("doc_date")));
        query.toggle_sort("doc_date");
        assert_eq!(query.sort, Some(SortConfig::descending("doc_date")));
        query.toggle_sort("code");
        assert_eq!(query.sort, Some(SortConfig::ascending("code")));
    }

    #[test]
    fn test_set_filter_resets_page() {
        let mut query = ListQuery::default();
        query.page = 3;
        query.set_filter("method", "damaged".to_string());
        assert_eq!(query.page, 0);
        assert_eq!(query.filters.get("method").map(String::as_str), Some("damaged"));

        query.set_filter("method", String::new());
        assert!(query.filters.is_empty());
    }
}
