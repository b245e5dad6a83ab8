use super::query::ListQuery;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Трейт для типов данных, поддерживающих поиск и фильтрацию по полям
pub trait Searchable {
    /// Проверяет, соответствует ли запись поисковому запросу.
    /// Запрос приходит непустым и уже в нижнем регистре.
    fn matches_search(&self, term: &str) -> bool;

    /// Возвращает строковое значение поля для фильтров равенства.
    /// None — поле отсутствует в записи и не проходит непустой фильтр.
    fn field_value(&self, field: &str) -> Option<String>;
}

/// Трейт для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Результат конвейера: видимая страница и счётчики для пагинации
#[derive(Debug, Clone)]
pub struct ListSlice<T> {
    /// Записи видимой страницы
    pub rows: Vec<T>,
    /// Размер коллекции после фильтров, до пагинации
    pub total_count: usize,
    /// ceil(total_count / page_size), минимум 1
    pub total_pages: usize,
    /// Эффективная (приведённая к допустимому диапазону) страница
    pub page: usize,
}

/// Отбирает записи, соответствующие поисковому запросу.
/// Пустой запрос пропускает все записи; порядок сохраняется.
pub fn search_list<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    if term.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_search(term))
        .cloned()
        .collect()
}

/// Применяет фильтры точного равенства (логическое И); порядок сохраняется
pub fn filter_list<T: Searchable>(items: Vec<T>, filters: &BTreeMap<String, String>) -> Vec<T> {
    if filters.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| {
            filters.iter().all(|(field, expected)| {
                expected.is_empty()
                    || item
                        .field_value(field)
                        .map_or(false, |value| value == *expected)
            })
        })
        .collect()
}

/// Сортирует список по указанному полю. Сортировка стабильная:
/// записи с равными ключами сохраняют исходный относительный порядок.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Вырезает страницу `[page * page_size, page * page_size + page_size)`.
/// Диапазон не приводится: запрос за последней страницей даёт пустой срез.
pub fn paginate_list<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page * page_size;
    let end = (start + page_size).min(items.len());
    items.get(start..end).unwrap_or(&[]).to_vec()
}

/// Количество страниц для коллекции; пустая коллекция занимает одну страницу
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if total_count == 0 {
        1
    } else {
        (total_count + page_size - 1) / page_size
    }
}

/// Полный конвейер: поиск → фильтры → сортировка → пагинация.
///
/// Шаги выполняются строго в этом порядке. Номер страницы приводится к
/// последней допустимой, если коллекция после фильтров стала короче.
pub fn apply_query<T>(items: &[T], query: &ListQuery) -> ListSlice<T>
where
    T: Searchable + Sortable + Clone,
{
    let page_size = query.page_size.max(1);

    let term = query.search.trim().to_lowercase();
    let searched = search_list(items, &term);
    let mut rows = filter_list(searched, &query.filters);

    if let Some(sort) = &query.sort {
        sort_list(&mut rows, &sort.field, sort.ascending);
    }

    let total_count = rows.len();
    let pages = total_pages(total_count, page_size);
    let page = query.page.min(pages - 1);

    ListSlice {
        rows: paginate_list(&rows, page, page_size),
        total_count,
        total_pages: pages,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::query::SortConfig;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        code: String,
        method: Option<String>,
        comment: String,
        amount: i64,
    }

    impl Row {
        fn new(code: &str, method: Option<&str>, comment: &str, amount: i64) -> Self {
            Self {
                code: code.to_string(),
                method: method.map(str::to_string),
                comment: comment.to_string(),
                amount,
            }
        }
    }

    impl Searchable for Row {
        fn matches_search(&self, term: &str) -> bool {
            self.code.to_lowercase().contains(term)
                || self.comment.to_lowercase().contains(term)
        }

        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "code" => Some(self.code.clone()),
                "method" => self.method.clone(),
                _ => None,
            }
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "code" => self.code.cmp(&other.code),
                "amount" => self.amount.cmp(&other.amount),
                _ => Ordering::Equal,
            }
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            Row::new("DSP-003", Some("damaged"), "брак при приёмке", 300),
            Row::new("DSP-001", Some("expired"), "", 100),
            Row::new("DSP-004", None, "без способа", 100),
            Row::new("DSP-002", Some("damaged"), "Брак упаковки", 200),
        ]
    }

    #[test]
    fn test_identity_without_search_and_filters() {
        let rows = sample();
        let slice = apply_query(
            &rows,
            &ListQuery {
                page_size: 100,
                ..ListQuery::default()
            },
        );
        assert_eq!(slice.rows, rows);
        assert_eq!(slice.total_count, 4);
        assert_eq!(slice.total_pages, 1);
    }

    #[test]
    fn test_empty_collection() {
        let rows: Vec<Row> = Vec::new();
        let slice = apply_query(&rows, &ListQuery::default());
        assert!(slice.rows.is_empty());
        assert_eq!(slice.total_count, 0);
        assert_eq!(slice.total_pages, 1);
        assert_eq!(slice.page, 0);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let rows = sample();
        let mut query = ListQuery::default();

        query.set_search("БРАК".to_string());
        let upper = apply_query(&rows, &query);
        query.set_search("брак".to_string());
        let lower = apply_query(&rows, &query);

        assert_eq!(upper.rows, lower.rows);
        assert_eq!(upper.total_count, 2);
    }

    #[test]
    fn test_filter_exact_equality() {
        let rows = sample();
        let mut query = ListQuery::default();
        query.set_filter("method", "damaged".to_string());

        let slice = apply_query(&rows, &query);
        assert_eq!(slice.total_count, 2);
        for row in &slice.rows {
            assert_eq!(row.field_value("method").as_deref(), Some("damaged"));
        }
        // Запись без поля не проходит непустой фильтр
        assert!(slice.rows.iter().all(|r| r.code != "DSP-004"));
    }

    #[test]
    fn test_filter_preserves_fetch_order() {
        let rows = sample();
        let mut query = ListQuery::default();
        query.set_filter("method", "damaged".to_string());

        let slice = apply_query(&rows, &query);
        let codes: Vec<&str> = slice.rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["DSP-003", "DSP-002"]);
    }

    #[test]
    fn test_sort_idempotent_and_reversible() {
        let rows = sample();

        let asc = apply_query(&rows, &ListQuery::with_sort(SortConfig::ascending("code")));
        let asc_again = apply_query(&asc.rows, &ListQuery::with_sort(SortConfig::ascending("code")));
        assert_eq!(asc.rows, asc_again.rows);

        let desc = apply_query(&rows, &ListQuery::with_sort(SortConfig::descending("code")));
        let mut reversed = asc.rows.clone();
        reversed.reverse();
        assert_eq!(desc.rows, reversed);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let rows = sample();
        let slice = apply_query(&rows, &ListQuery::with_sort(SortConfig::ascending("amount")));
        // DSP-001 и DSP-004 имеют равные ключи (100) и сохраняют исходный порядок
        let codes: Vec<&str> = slice.rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["DSP-001", "DSP-004", "DSP-002", "DSP-003"]);
    }

    #[test]
    fn test_pagination_windows() {
        let rows: Vec<Row> = (0..25)
            .map(|i| Row::new(&format!("DSP-{:03}", i), None, "", i))
            .collect();
        let mut query = ListQuery::with_sort(SortConfig::ascending("amount"));
        query.page_size = 10;

        let first = apply_query(&rows, &query);
        assert_eq!(first.total_count, 25);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.rows.len(), 10);
        assert_eq!(first.rows[0].amount, 0);
        assert_eq!(first.rows[9].amount, 9);

        query.page = 2;
        let last = apply_query(&rows, &query);
        assert_eq!(last.total_count, 25);
        assert_eq!(last.rows.len(), 5);
        assert_eq!(last.rows[0].amount, 20);
        assert_eq!(last.rows[4].amount, 24);
    }

    #[test]
    fn test_paginate_list_beyond_end_is_empty() {
        let rows: Vec<Row> = (0..5)
            .map(|i| Row::new(&format!("DSP-{:03}", i), None, "", i))
            .collect();
        // Сырой срез не приводит диапазон: за концом — пусто
        assert!(paginate_list(&rows, 1, 10).is_empty());
        assert_eq!(total_pages(rows.len(), 10), 1);
    }

    #[test]
    fn test_apply_query_clamps_page() {
        let rows: Vec<Row> = (0..5)
            .map(|i| Row::new(&format!("DSP-{:03}", i), None, "", i))
            .collect();
        let query = ListQuery {
            page: 7,
            page_size: 10,
            ..ListQuery::default()
        };

        let slice = apply_query(&rows, &query);
        assert_eq!(slice.page, 0);
        assert_eq!(slice.rows.len(), 5);
        assert_eq!(slice.total_count, 5);
    }
}
