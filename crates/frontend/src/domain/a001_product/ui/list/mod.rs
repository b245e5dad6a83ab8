mod state;

use std::collections::BTreeSet;

use contracts::domain::a001_product::Product;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list_view::apply_query;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::ProductForm;
use crate::domain::a001_product::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

/// Список товаров отображается сеткой карточек, а не таблицей.
/// Сортировка выбирается селектом, конвейер тот же, что и на таблицах.
#[component]
pub fn ProductsListPage() -> impl IntoView {
    let state = create_state();
    let all_products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<Product>> = RwSignal::new(None);
    let fetch_seq = StoredValue::new(0u64);

    let refresh_view = move || {
        let data = all_products.get_untracked();
        state.update(|s| {
            let slice = apply_query(&data, &s.query);
            s.query.page = slice.page;
            s.total_count = slice.total_count;
            s.total_pages = slice.total_pages;
            s.items = slice.rows;
        });
    };

    let load_data = move || {
        let seq = fetch_seq.get_value() + 1;
        fetch_seq.set_value(seq);
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::fetch_products().await;
            // Применяется только последний из перекрывающихся запросов
            if fetch_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(data) => {
                    all_products.set(data);
                    state.update(|s| {
                        s.query.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Не удалось загрузить товары: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let apply_search = move |term: String| {
        state.update(|s| s.query.set_search(term));
        refresh_view();
    };

    let set_category_filter = move |value: String| {
        state.update(|s| s.query.set_filter("category", value));
        refresh_view();
    };

    let set_active_filter = move |value: String| {
        state.update(|s| s.query.set_filter("is_active", value));
        refresh_view();
    };

    let set_sort = move |value: String| {
        state.update(|s| s.query.toggle_sort(&value));
        refresh_view();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.query.page = page);
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.query.set_page_size(size));
        refresh_view();
    };

    let delete_product = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить товар «{}»?", name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_product(&id).await {
                Ok(_) => load_data(),
                Err(e) => set_error.set(Some(format!("Не удалось удалить товар: {}", e))),
            }
        });
    };

    // Список категорий для фильтра собирается из загруженных данных
    let categories = Signal::derive(move || {
        all_products
            .get()
            .iter()
            .map(|p| p.category.clone())
            .filter(|c| !c.is_empty())
            .collect::<BTreeSet<String>>()
    });

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Product::list_name()}</h1>
                    <Badge>
                        {move || state.with(|s| s.total_count.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " Новый"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Фильтры"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.with(|s| s.query.page))
                                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                                total_count=Signal::derive(move || state.with(|s| s.total_count))
                                page_size=Signal::derive(move || state.with(|s| s.query.page_size))
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                                page_size_options=vec![10, 25, 50]
                            />
                        </div>
                        <div class="filter-panel-header__right">
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <SearchInput
                                on_change=Callback::new(apply_search)
                                placeholder="Код, наименование, артикул..."
                            />
                            <div>
                                <label class="filter-label">"Категория"</label>
                                <select
                                    class="filter-select"
                                    on:change=move |ev| set_category_filter(event_target_value(&ev))
                                >
                                    <option value="">"Все"</option>
                                    {move || categories.get().into_iter().map(|c| {
                                        view! { <option value=c.clone()>{c.clone()}</option> }
                                    }).collect_view()}
                                </select>
                            </div>
                            <div>
                                <label class="filter-label">"Статус"</label>
                                <select
                                    class="filter-select"
                                    on:change=move |ev| set_active_filter(event_target_value(&ev))
                                >
                                    <option value="">"Все"</option>
                                    <option value="true">"Активные"</option>
                                    <option value="false">"Архив"</option>
                                </select>
                            </div>
                            <div>
                                <label class="filter-label">"Сортировка"</label>
                                <select
                                    class="filter-select"
                                    on:change=move |ev| set_sort(event_target_value(&ev))
                                >
                                    <option value="description">"По наименованию"</option>
                                    <option value="code">"По коду"</option>
                                    <option value="category">"По категории"</option>
                                    <option value="created_at">"По дате создания"</option>
                                </select>
                            </div>
                        </Flex>
                    </div>
                </div>

                <div class="card-grid">
                    <For
                        each=move || state.with(|s| s.items.clone())
                        key=|p| p.to_string_id()
                        children=move |product| {
                            let product_for_edit = product.clone();
                            let id_for_delete = product.to_string_id();
                            let name_for_delete = product.base.description.clone();
                            view! {
                                <div class="card product-card">
                                    <div class="product-card__header">
                                        <span class="product-card__code">{product.base.code.clone()}</span>
                                        {if product.is_active {
                                            view! { <span class="badge badge--success">"Активен"</span> }.into_any()
                                        } else {
                                            view! { <span class="badge badge--neutral">"Архив"</span> }.into_any()
                                        }}
                                    </div>
                                    <div class="product-card__title">{product.base.description.clone()}</div>
                                    <div class="product-card__meta">
                                        <span>{"Арт.: "}{product.article.clone()}</span>
                                        <span>{"Ед.: "}{product.unit.clone()}</span>
                                    </div>
                                    {(!product.category.is_empty()).then(|| view! {
                                        <div class="product-card__category">{product.category.clone()}</div>
                                    })}
                                    <div class="product-card__actions">
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| editing.set(Some(product_for_edit.clone()))
                                            attr:title="Редактировать"
                                        >
                                            {icon("edit")}
                                        </Button>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| delete_product(
                                                id_for_delete.clone(),
                                                name_for_delete.clone(),
                                            )
                                            attr:title="Удалить"
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                {move || if show_create_form.get() {
                    view! {
                        <ProductForm
                            existing=None
                            on_close=move || set_show_create_form.set(false)
                            on_saved=move || {
                                set_show_create_form.set(false);
                                load_data();
                            }
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || editing.get().map(|product| view! {
                    <ProductForm
                        existing=Some(product)
                        on_close=move || editing.set(None)
                        on_saved=move || {
                            editing.set(None);
                            load_data();
                        }
                    />
                })}
            </div>
        </PageFrame>
    }
}
