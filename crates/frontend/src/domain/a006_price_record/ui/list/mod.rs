mod state;

use contracts::domain::a006_price_record::PriceRecord;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list_view::apply_query;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::PriceForm;
use crate::domain::a006_price_record::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{format_money, SortableHeaderCell};
use crate::shared::date_utils::format_date_utc;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

/// Регистр цен: записи только создаются и удаляются.
/// Правка цены оформляется новой записью с новой датой начала действия.
#[component]
pub fn PricesListPage() -> impl IntoView {
    let state = create_state();
    let all_prices: RwSignal<Vec<PriceRecord>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let fetch_seq = StoredValue::new(0u64);

    let refresh_view = move || {
        let data = all_prices.get_untracked();
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
            let result = api::fetch_prices().await;
            // Применяется только последний из перекрывающихся запросов
            if fetch_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(data) => {
                    all_prices.set(data);
                    state.update(|s| {
                        s.query.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Не удалось загрузить цены: {}", e)));
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

    let set_active_filter = move |value: String| {
        state.update(|s| s.query.set_filter("is_active", value));
        refresh_view();
    };

    let toggle_sort = move |field: String| {
        state.update(|s| s.query.toggle_sort(&field));
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

    let delete_price = move |id: String, product_name: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить запись цены «{}»?", product_name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_price(&id).await {
                Ok(_) => load_data(),
                Err(e) => set_error.set(Some(format!("Не удалось удалить запись: {}", e))),
            }
        });
    };

    let sort_signal = Signal::derive(move || state.with(|s| s.query.sort.clone()));

    view! {
        <PageFrame page_id="a006_price_record--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{PriceRecord::list_name()}</h1>
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
                        " Новая цена"
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
                            />
                        </div>
                        <div class="filter-panel-header__right">
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <SearchInput
                                on_change=Callback::new(apply_search)
                                placeholder="Товар или артикул..."
                            />
                            <div>
                                <label class="filter-label">"Статус"</label>
                                <select
                                    class="filter-select"
                                    on:change=move |ev| set_active_filter(event_target_value(&ev))
                                >
                                    <option value="">"Все"</option>
                                    <option value="true">"Действующие"</option>
                                    <option value="false">"Архив"</option>
                                </select>
                            </div>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="a006-prices-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell
                                    label="Товар"
                                    sort_field="product"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=220.0
                                />
                                <SortableHeaderCell
                                    label="Цена"
                                    sort_field="price"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=110.0
                                    align="right"
                                />
                                <TableHeaderCell resizable=false min_width=80.0>
                                    "Валюта"
                                </TableHeaderCell>
                                <SortableHeaderCell
                                    label="Действует с"
                                    sort_field="valid_from"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=120.0
                                />
                                <SortableHeaderCell
                                    label="Статус"
                                    sort_field="is_active"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=100.0
                                />
                                <TableHeaderCell resizable=false min_width=60.0>
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|p| p.to_string_id()
                                children=move |record| {
                                    let id_for_delete = record.to_string_id();
                                    let name_for_delete = record.product.name.clone();
                                    let valid_from = format_date_utc(&record.valid_from);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {format!("{} — {}", record.product.article, record.product.name)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="display: block; width: 100%; text-align: right; font-variant-numeric: tabular-nums;">
                                                        {format_money(record.price)}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{record.currency.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{valid_from}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if record.is_active {
                                                        view! { <span class="badge badge--success">"Действует"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--neutral">"Архив"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_price(
                                                        id_for_delete.clone(),
                                                        name_for_delete.clone(),
                                                    )
                                                    attr:title="Удалить"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || if show_create_form.get() {
                    view! {
                        <PriceForm
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
            </div>
        </PageFrame>
    }
}
