//! UI-утилиты списочных форм (индикаторы сортировки, поиск)
//!
//! Сам конвейер поиска/фильтрации/сортировки/пагинации живёт в
//! `contracts::shared::list_view`; здесь только то, что связано с DOM.

use contracts::shared::list_view::SortConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Получить индикатор сортировки для заголовка колонки
pub fn get_sort_indicator(sort: &Option<SortConfig>, field: &str) -> &'static str {
    match sort {
        Some(config) if config.field == field => {
            if config.ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

/// CSS-класс индикатора сортировки (активная колонка подсвечивается)
pub fn get_sort_class(sort: &Option<SortConfig>, field: &str) -> &'static str {
    match sort {
        Some(config) if config.field == field => {
            "table__sort-indicator table__sort-indicator--active"
        }
        _ => "table__sort-indicator",
    }
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(String::new());

    // Debounce механизм
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Отменяем предыдущий таймер если есть
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        // Создаем новый таймер
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        if let Ok(timeout_id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            debounce_timeout.set_value(Some(timeout_id));
        }
        closure.forget();
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="Очистить"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
