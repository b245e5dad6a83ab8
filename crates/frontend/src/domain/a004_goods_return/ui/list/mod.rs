mod state;

use contracts::shared::list_view::{apply_query, filter_list, search_list, Searchable, Sortable};
use gloo_net::http::Request;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thaw::*;

use super::details::ReturnForm;
use crate::domain::a004_goods_return::api;
use crate::shared::api_utils::api_base;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

/// Строка списка возвратов
///
/// Собирается вручную из сырого JSON: исторические записи бэкенда могут не
/// содержать вложенный объект product, дефектная запись не должна ронять
/// разбор всей коллекции.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoodsReturnRow {
    pub id: String,
    pub code: String,
    pub product_name: Option<String>,
    pub quantity: i32,
    pub reason: String,
    pub status: String,
    /// ISO 8601; сортируется как строка
    pub doc_date: String,
}

impl GoodsReturnRow {
    fn from_value(value: &serde_json::Value) -> Option<Self> {
        Some(Self {
            id: value.get("id")?.as_str()?.to_string(),
            code: value
                .get("code")
                .and_then(|c| c.as_str())
                .unwrap_or("")
                .to_string(),
            product_name: value
                .get("product")
                .and_then(|p| p.get("name"))
                .and_then(|n| n.as_str())
                .map(str::to_string),
            quantity: value
                .get("quantity")
                .and_then(|q| q.as_i64())
                .unwrap_or(0) as i32,
            reason: value
                .get("reason")
                .and_then(|r| r.as_str())
                .unwrap_or("")
                .to_string(),
            status: value
                .get("status")
                .and_then(|s| s.as_str())
                .unwrap_or("")
                .to_string(),
            doc_date: value
                .get("doc_date")
                .and_then(|d| d.as_str())
                .unwrap_or("")
                .to_string(),
        })
    }

    fn product_display(&self) -> String {
        self.product_name.clone().unwrap_or_else(|| "—".to_string())
    }
}

impl Searchable for GoodsReturnRow {
    fn matches_search(&self, term: &str) -> bool {
        self.code.to_lowercase().contains(term)
            || self.reason.to_lowercase().contains(term)
            || self
                .product_name
                .as_deref()
                .map_or(false, |name| name.to_lowercase().contains(term))
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.clone()),
            "product" => self.product_name.clone(),
            _ => None,
        }
    }
}

impl Sortable for GoodsReturnRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "product" => self
                .product_display()
                .to_lowercase()
                .cmp(&other.product_display().to_lowercase()),
            "quantity" => self.quantity.cmp(&other.quantity),
            "reason" => self.reason.to_lowercase().cmp(&other.reason.to_lowercase()),
            "status" => self.status.cmp(&other.status),
            "doc_date" => self.doc_date.cmp(&other.doc_date),
            _ => self.doc_date.cmp(&other.doc_date),
        }
    }
}

fn status_badge(status: &str) -> AnyView {
    let (class, label) = match status {
        "requested" => ("badge badge--warning", "Запрошен"),
        "accepted" => ("badge badge--success", "Принят"),
        "rejected" => ("badge badge--error", "Отклонён"),
        "refunded" => ("badge badge--success", "Возврат средств"),
        other => ("badge badge--neutral", other),
    };
    view! { <span class=class>{label.to_string()}</span> }.into_any()
}

#[component]
pub fn ReturnsListPage() -> impl IntoView {
    let state = create_state();
    let all_returns: RwSignal<Vec<GoodsReturnRow>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing = RwSignal::new(None);
    let fetch_seq = StoredValue::new(0u64);

    let refresh_view = move || {
        let data = all_returns.get_untracked();
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
        wasm_bindgen_futures::spawn_local(async move {
            let url = format!("{}/api/a004/goods-returns", api_base());
            let result = Request::get(&url).send().await;
            // Применяется только последний из перекрывающихся запросов
            if fetch_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(response) => {
                    if !response.ok() {
                        set_error.set(Some(format!("Ошибка сервера: {}", response.status())));
                        set_loading.set(false);
                        return;
                    }
                    match response.json::<Vec<serde_json::Value>>().await {
                        Ok(raw) => {
                            let total_raw = raw.len();
                            let rows: Vec<GoodsReturnRow> =
                                raw.iter().filter_map(GoodsReturnRow::from_value).collect();
                            if rows.len() < total_raw {
                                log!(
                                    "Пропущено записей без id: {}",
                                    total_raw - rows.len()
                                );
                            }
                            all_returns.set(rows);
                            state.update(|s| {
                                s.query.page = 0;
                                s.is_loaded = true;
                            });
                            refresh_view();
                            set_loading.set(false);
                        }
                        Err(e) => {
                            set_error.set(Some(format!("Не удалось разобрать ответ: {}", e)));
                            set_loading.set(false);
                        }
                    }
                }
                Err(e) => {
                    set_error.set(Some(format!("Не удалось загрузить возвраты: {}", e)));
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

    let open_editor = move |id: String| {
        spawn_local(async move {
            match api::fetch_return(&id).await {
                Ok(goods_return) => editing.set(Some(goods_return)),
                Err(e) => set_error.set(Some(format!("Не удалось загрузить возврат: {}", e))),
            }
        });
    };

    let delete_return = move |id: String, code: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить возврат {}?", code))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_return(&id).await {
                Ok(_) => load_data(),
                Err(e) => set_error.set(Some(format!("Не удалось удалить возврат: {}", e))),
            }
        });
    };

    let sort_signal = Signal::derive(move || state.with(|s| s.query.sort.clone()));

    // Сводка по коллекции после поиска и фильтров, до пагинации
    let summary = move || {
        let query = state.with(|s| s.query.clone());
        let term = query.search.trim().to_lowercase();
        let rows = filter_list(search_list(&all_returns.get(), &term), &query.filters);
        let requested = rows.iter().filter(|r| r.status == "requested").count();
        let accepted = rows.iter().filter(|r| r.status == "accepted").count();
        let total_items: i32 = rows.iter().map(|r| r.quantity).sum();
        (rows.len(), requested, accepted, total_items)
    };

    view! {
        <PageFrame page_id="a004_goods_return--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Возвраты покупателей"</h1>
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
                                placeholder="Номер, причина или товар..."
                            />
                            <div>
                                <label class="filter-label">"Статус"</label>
                                <select
                                    class="filter-select"
                                    on:change=move |ev| set_status_filter(event_target_value(&ev))
                                >
                                    <option value="">"Все"</option>
                                    <option value="requested">"Запрошен"</option>
                                    <option value="accepted">"Принят"</option>
                                    <option value="rejected">"Отклонён"</option>
                                    <option value="refunded">"Возврат средств"</option>
                                </select>
                            </div>
                        </Flex>
                    </div>
                </div>

                {move || {
                    let (total, requested, accepted, total_items) = summary();
                    view! {
                        <div class="summary-cards">
                            <div class="summary-card summary-card--info">
                                <div class="summary-card__value">{total}</div>
                                <div class="summary-card__label">"Всего возвратов"</div>
                            </div>
                            <div class="summary-card summary-card--warning">
                                <div class="summary-card__value">{requested}</div>
                                <div class="summary-card__label">"Запрошено"</div>
                            </div>
                            <div class="summary-card summary-card--success">
                                <div class="summary-card__value">{accepted}</div>
                                <div class="summary-card__label">"Принято"</div>
                            </div>
                            <div class="summary-card">
                                <div class="summary-card__value">{total_items}</div>
                                <div class="summary-card__label">"Единиц товара"</div>
                            </div>
                        </div>
                    }
                }}

                <div class="table-wrapper">
                    <Table attr:id="a004-returns-table" attr:style="width: 100%;">
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
                                    label="Товар"
                                    sort_field="product"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=200.0
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
                                    label="Причина"
                                    sort_field="reason"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=180.0
                                />
                                <SortableHeaderCell
                                    label="Статус"
                                    sort_field="status"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=120.0
                                />
                                <SortableHeaderCell
                                    label="Дата"
                                    sort_field="doc_date"
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
                                key=|r| r.id.clone()
                                children=move |row| {
                                    let id_for_edit = row.id.clone();
                                    let id_for_delete = row.id.clone();
                                    let code_for_delete = row.code.clone();
                                    let doc_date = format_date(&row.doc_date);
                                    let product = row.product_display();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{row.code.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {product}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="display: block; width: 100%; text-align: right;">
                                                        {row.quantity}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {row.reason.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {status_badge(&row.status)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{doc_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| open_editor(id_for_edit.clone())
                                                    attr:title="Редактировать"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_return(
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
                        <ReturnForm
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

                {move || editing.get().map(|goods_return| view! {
                    <ReturnForm
                        existing=Some(goods_return)
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
