//! Универсальный конвейер списочных форм: поиск → фильтры → сортировка → пагинация.
//!
//! Каждая списочная страница (товары, закупки, поставки, возвраты, списания,
//! цены, пользователи) держит сырую коллекцию, полученную с бэкенда, и
//! параметры отображения в [`ListQuery`]. Производное представление
//! пересчитывается синхронно при каждом изменении входов через
//! [`apply_query`]; никакого состояния и побочных эффектов конвейер не имеет.

pub mod pipeline;
pub mod query;

pub use pipeline::{
    apply_query, filter_list, paginate_list, search_list, sort_list, total_pages, ListSlice,
    Searchable, Sortable,
};
pub use query::{ListQuery, SortConfig};
