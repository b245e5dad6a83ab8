mod state;

use contracts::domain::a003_goods_delivery::GoodsDelivery;
use contracts::domain::common::AggregateRoot;
use contracts::enums::DeliveryStatus;
use contracts::shared::list_view::apply_query;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::DeliveryForm;
use crate::domain::a003_goods_delivery::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::format_date_utc;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

fn status_badge(status: DeliveryStatus) -> AnyView {
    let class = match status {
        DeliveryStatus::Pending => "badge badge--neutral",
        DeliveryStatus::InTransit => "badge badge--warning",
        DeliveryStatus::Received => "badge badge--success",
        DeliveryStatus::Cancelled => "badge badge--error",
    };
    view! { <span class=class>{status.display_name()}</span> }.into_any()
}

#[component]
pub fn DeliveriesListPage() -> impl IntoView {
    let state = create_state();
    let all_deliveries: RwSignal<Vec<GoodsDelivery>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<GoodsDelivery>> = RwSignal::new(None);
    let fetch_seq = StoredValue::new(0u64);

    let refresh_view = move || {
        let data = all_deliveries.get_untracked();
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
            let result = api::fetch_deliveries().await;
            // Применяется только последний из перекрывающихся запросов
            if fetch_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(data) => {
                    all_deliveries.set(data);
                    state.update(|s| {
                        s.query.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Не удалось загрузить поставки: {}", e)));
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

    let delete_delivery = move |id: String, code: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить поставку {}?", code))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_delivery(&id).await {
                Ok(_) => load_data(),
                Err(e) => set_error.set(Some(format!("Не удалось удалить поставку: {}", e))),
            }
        });
    };

    let sort_signal = Signal::derive(move || state.with(|s| s.query.sort.clone()));

    view! {
        <PageFrame page_id="a003_goods_delivery--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{GoodsDelivery::list_name()}</h1>
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
                                    {DeliveryStatus::all().into_iter().map(|s| {
                                        view! {
                                            <option value=s.code()>{s.display_name()}</option>
                                        }
                                    }).collect_view()}
                                </select>
                            </div>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="a003-deliveries-table" attr:style="width: 100%;">
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
                                    label="Статус"
                                    sort_field="status"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=110.0
                                />
                                <SortableHeaderCell
                                    label="Ожидается"
                                    sort_field="expected_date"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=110.0
                                />
                                <SortableHeaderCell
                                    label="Получена"
                                    sort_field="received_date"
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
                                key=|d| d.to_string_id()
                                children=move |delivery| {
                                    let delivery_for_edit = delivery.clone();
                                    let id_for_delete = delivery.to_string_id();
                                    let code_for_delete = delivery.base.code.clone();
                                    let expected = format_date_utc(&delivery.expected_date);
                                    let received = delivery
                                        .received_date
                                        .as_ref()
                                        .map(format_date_utc)
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{delivery.base.code.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {delivery.supplier_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {delivery.product.name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="display: block; width: 100%; text-align: right;">
                                                        {delivery.quantity}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {status_badge(delivery.status)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{expected}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{received}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(delivery_for_edit.clone()))
                                                    attr:title="Редактировать"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_delivery(
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
                        <DeliveryForm
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

                {move || editing.get().map(|delivery| view! {
                    <DeliveryForm
                        existing=Some(delivery)
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
