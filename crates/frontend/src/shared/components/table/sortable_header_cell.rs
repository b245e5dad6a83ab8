//! Компонент сортируемой ячейки заголовка таблицы

use contracts::shared::list_view::SortConfig;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

/// Сортируемая ячейка заголовка таблицы
///
/// Добавляет индикатор сортировки (▲▼) и обрабатывает клики
/// для переключения поля/направления.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    /// Текущая сортировка из state
    #[prop(into)]
    sort: Signal<Option<SortConfig>>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let handle_click = move |_| {
        on_sort.run(sort_field_for_click.clone());
    };

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=handle_click
            >
                {label}
                <span class=move || {
                    sort.with(|s| get_sort_class(s, &sort_field_for_class))
                }>
                    {move || {
                        sort.with(|s| get_sort_indicator(s, &sort_field_for_indicator))
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
