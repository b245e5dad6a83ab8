mod state;

use contracts::domain::a005_goods_disposal::GoodsDisposal;
use contracts::domain::common::AggregateRoot;
use contracts::enums::DisposalMethod;
use contracts::shared::list_view::apply_query;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::DisposalForm;
use crate::domain::a005_goods_disposal::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::format_date_utc;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

fn method_badge(method: DisposalMethod) -> AnyView {
    let class = match method {
        DisposalMethod::Damaged => "badge badge--error",
        DisposalMethod::Expired => "badge badge--warning",
        DisposalMethod::Lost => "badge badge--neutral",
        DisposalMethod::WriteOff => "badge badge--neutral",
    };
    view! { <span class=class>{method.display_name()}</span> }.into_any()
}

#[component]
pub fn DisposalsListPage() -> impl IntoView {
    let state = create_state();
    let all_disposals: RwSignal<Vec<GoodsDisposal>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<GoodsDisposal>> = RwSignal::new(None);
    let fetch_seq = StoredValue::new(0u64);

    let refresh_view = move || {
        let data = all_disposals.get_untracked();
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
            let result = api::fetch_disposals().await;
            // Применяется только последний из перекрывающихся запросов
            if fetch_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(data) => {
                    all_disposals.set(data);
                    state.update(|s| {
                        s.query.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Не удалось загрузить списания: {}", e)));
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

    let set_method_filter = move |value: String| {
        state.update(|s| s.query.set_filter("method", value));
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

    let delete_disposal = move |id: String, code: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить списание {}?", code))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_disposal(&id).await {
                Ok(_) => load_data(),
                Err(e) => set_error.set(Some(format!("Не удалось удалить списание: {}", e))),
            }
        });
    };

    let sort_signal = Signal::derive(move || state.with(|s| s.query.sort.clone()));

    view! {
        <PageFrame page_id="a005_goods_disposal--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{GoodsDisposal::list_name()}</h1>
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
                                placeholder="Номер, товар или комментарий..."
                            />
                            <div>
                                <label class="filter-label">"Способ"</label>
                                <select
                                    class="filter-select"
                                    on:change=move |ev| set_method_filter(event_target_value(&ev))
                                >
                                    <option value="">"Все"</option>
                                    {DisposalMethod::all().into_iter().map(|m| {
                                        view! {
                                            <option value=m.code()>{m.display_name()}</option>
                                        }
                                    }).collect_view()}
                                </select>
                            </div>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="a005-disposals-table" attr:style="width: 100%;">
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
                                    label="Способ"
                                    sort_field="method"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=140.0
                                />
                                <SortableHeaderCell
                                    label="Дата"
                                    sort_field="doc_date"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=110.0
                                />
                                <TableHeaderCell resizable=false min_width=160.0>
                                    "Комментарий"
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|d| d.to_string_id()
                                children=move |disposal| {
                                    let disposal_for_edit = disposal.clone();
                                    let id_for_delete = disposal.to_string_id();
                                    let code_for_delete = disposal.base.code.clone();
                                    let doc_date = format_date_utc(&disposal.doc_date);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{disposal.base.code.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {disposal.product.name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="display: block; width: 100%; text-align: right;">
                                                        {disposal.quantity}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {method_badge(disposal.method)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{doc_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {disposal.base.comment.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(disposal_for_edit.clone()))
                                                    attr:title="Редактировать"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_disposal(
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
                        <DisposalForm
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

                {move || editing.get().map(|disposal| view! {
                    <DisposalForm
                        existing=Some(disposal)
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
