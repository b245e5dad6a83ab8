mod state;

use contracts::domain::a002_goods_purchase::GoodsPurchase;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list_view::apply_query;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::PurchaseForm;
use crate::domain::a002_goods_purchase::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{format_money, SortableHeaderCell};
use crate::shared::date_utils::format_date_utc;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

fn status_badge(status: &str) -> AnyView {
    let (class, label) = match status {
        "draft" => ("badge badge--neutral", "Черновик"),
        "ordered" => ("badge badge--warning", "Заказана"),
        "received" => ("badge badge--success", "Получена"),
        other => ("badge badge--neutral", other),
    };
    view! { <span class=class>{label.to_string()}</span> }.into_any()
}

#[component]
pub fn PurchasesListPage() -> impl IntoView {
    let state = create_state();
    let all_purchases: RwSignal<Vec<GoodsPurchase>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<GoodsPurchase>> = RwSignal::new(None);
    let fetch_seq = StoredValue::new(0u64);

    let refresh_view = move || {
        let data = all_purchases.get_untracked();
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
            let result = api::fetch_purchases().await;
            // Применяется только последний из перекрывающихся запросов
            if fetch_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(data) => {
                    all_purchases.set(data);
                    state.update(|s| {
                        s.query.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Не удалось загрузить закупки: {}", e)));
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

    let set_status_filter = move |value: String| {
        state.update(|s| s.query.set_filter("status", value));
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

    let delete_purchase = move |id: String, code: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить закупку {}?", code))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_purchase(&id).await {
                Ok(_) => load_data(),
                Err(e) => set_error.set(Some(format!("Не удалось удалить закупку: {}", e))),
            }
        });
    };

    let sort_signal = Signal::derive(move || state.with(|s| s.query.sort.clone()));

    view! {
        <PageFrame page_id="a002_goods_purchase--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{GoodsPurchase::list_name()}</h1>
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
                            />
                        </div>
                        <div class="filter-panel-header__right">
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <SearchInput
                                on_change=Callback::new(apply_search)
                                placeholder="Номер, поставщик или товар..."
                            />
                            <div>
                                <label class="filter-label">"Статус"</label>
                                <select
                                    class="filter-select"
                                    on:change=move |ev| set_status_filter(event_target_value(&ev))
                                >
                                    <option value="">"Все"</option>
                                    <option value="draft">"Черновик"</option>
                                    <option value="ordered">"Заказана"</option>
                                    <option value="received">"Получена"</option>
                                </select>
                            </div>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="a002-purchases-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell
                                    label="Номер"
                                    sort_field="code"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=120.0
                                />
                                <SortableHeaderCell
                                    label="Поставщик"
                                    sort_field="supplier_name"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=160.0
                                />
                                <SortableHeaderCell
                                    label="Товар"
                                    sort_field="product"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=180.0
                                />
                                <SortableHeaderCell
                                    label="Кол-во"
                                    sort_field="quantity"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=80.0
                                    align="right"
                                />
                                <SortableHeaderCell
                                    label="Цена"
                                    sort_field="unit_price"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=100.0
                                    align="right"
                                />
                                <SortableHeaderCell
                                    label="Сумма"
                                    sort_field="total_amount"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=110.0
                                    align="right"
                                />
                                <SortableHeaderCell
                                    label="Дата"
                                    sort_field="doc_date"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=110.0
                                />
                                <SortableHeaderCell
                                    label="Статус"
                                    sort_field="status"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=110.0
                                />
                                <TableHeaderCell resizable=false min_width=90.0>
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|p| p.to_string_id()
                                children=move |purchase| {
                                    let purchase_for_edit = purchase.clone();
                                    let id_for_delete = purchase.to_string_id();
                                    let code_for_delete = purchase.base.code.clone();
                                    let doc_date = format_date_utc(&purchase.doc_date);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{purchase.base.code.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {purchase.supplier_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {purchase.product.name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="display: block; width: 100%; text-align: right;">
                                                        {purchase.quantity}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="display: block; width: 100%; text-align: right; font-variant-numeric: tabular-nums;">
                                                        {format_money(purchase.unit_price)}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="display: block; width: 100%; text-align: right; font-variant-numeric: tabular-nums;">
                                                        {format_money(purchase.total_amount)}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{doc_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {status_badge(&purchase.status)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(purchase_for_edit.clone()))
                                                    attr:title="Редактировать"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_purchase(
                                                        id_for_delete.clone(),
                                                        code_for_delete.clone(),
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
                        <PurchaseForm
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

                {move || editing.get().map(|purchase| view! {
                    <PurchaseForm
                        existing=Some(purchase)
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
