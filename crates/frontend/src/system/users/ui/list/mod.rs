mod state;

use contracts::shared::list_view::apply_query;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::users::api;
use state::create_state;

use super::details::{CreateUserForm, EditUserForm};

#[component]
pub fn UsersListPage() -> impl IntoView {
    let state = create_state();
    let all_users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing_user: RwSignal<Option<User>> = RwSignal::new(None);
    let fetch_seq = StoredValue::new(0u64);

    let refresh_view = move || {
        let data = all_users.get_untracked();
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
            let result = api::fetch_users().await;
            // Применяется только последний из перекрывающихся запросов
            if fetch_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(data) => {
                    all_users.set(data);
                    state.update(|s| {
                        s.query.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Не удалось загрузить пользователей: {}", e)));
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

    let search_signal = RwSignal::new(String::new());

    let apply_search = move || {
        state.update(|s| s.query.set_search(search_signal.get_untracked()));
        refresh_view();
    };

    let set_role_filter = move |value: String| {
        state.update(|s| s.query.set_filter("is_admin", value));
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

    let delete_user = move |id: String, username: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Удалить пользователя {}?", username))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_user(&id).await {
                Ok(_) => load_data(),
                Err(e) => set_error.set(Some(format!("Не удалось удалить пользователя: {}", e))),
            }
        });
    };

    let sort_signal = Signal::derive(move || state.with(|s| s.query.sort.clone()));

    let format_ts = |value: &str| format_datetime(value);
    let format_ts_opt = |value: &Option<String>| {
        value
            .as_deref()
            .map(format_datetime)
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Пользователи"</h1>
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
                            <span class="filter-panel__title">"Поиск"</span>
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
                            <div style="flex: 1; max-width: 320px;">
                                <Input
                                    value=search_signal
                                    placeholder="Логин, ФИО или Email..."
                                />
                            </div>
                            <div>
                                <select
                                    class="filter-select"
                                    on:change=move |ev| set_role_filter(event_target_value(&ev))
                                >
                                    <option value="">"Все роли"</option>
                                    <option value="true">"Администраторы"</option>
                                    <option value="false">"Пользователи"</option>
                                </select>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| apply_search()
                                disabled=Signal::derive(move || loading.get())
                            >
                                "Найти"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    search_signal.set(String::new());
                                    state.update(|s| s.query.reset());
                                    refresh_view();
                                }
                            >
                                "Сбросить"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="sys-users-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell
                                    label="Логин"
                                    sort_field="username"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=140.0
                                />
                                <SortableHeaderCell
                                    label="ФИО"
                                    sort_field="full_name"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=160.0
                                />
                                <SortableHeaderCell
                                    label="Email"
                                    sort_field="email"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=160.0
                                />
                                <SortableHeaderCell
                                    label="Роль"
                                    sort_field="is_admin"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=80.0
                                />
                                <SortableHeaderCell
                                    label="Статус"
                                    sort_field="is_active"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=90.0
                                />
                                <SortableHeaderCell
                                    label="Создан"
                                    sort_field="created_at"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=130.0
                                />
                                <SortableHeaderCell
                                    label="Последний вход"
                                    sort_field="last_login_at"
                                    sort=sort_signal
                                    on_sort=Callback::new(toggle_sort)
                                    min_width=130.0
                                />
                                <TableHeaderCell resizable=false min_width=90.0>
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|u| u.id.clone()
                                children=move |user| {
                                    let user_for_edit = user.clone();
                                    let user_id_for_delete = user.id.clone();
                                    let username_for_delete = user.username.clone();
                                    let created = format_ts(&user.created_at);
                                    let last_login = format_ts_opt(&user.last_login_at);
                                    let username = user.username.clone();
                                    let full_name = user.full_name.clone().unwrap_or_default();
                                    let email = user.email.clone().unwrap_or_default();
                                    let is_admin = user.is_admin;
                                    let is_active = user.is_active;
                                    let role_name = user.role_name();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{username}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {full_name}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {email}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if is_admin {
                                                        view! { <span class="badge badge--warning">{role_name}</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--neutral">{role_name}</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if is_active {
                                                        view! { <span class="badge badge--success">"Активен"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--error">"Заблок."</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{last_login}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing_user.set(Some(user_for_edit.clone()))
                                                    attr:title="Редактировать"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_user(
                                                        user_id_for_delete.clone(),
                                                        username_for_delete.clone(),
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
                        <CreateUserForm
                            on_close=move || set_show_create_form.set(false)
                            on_created=move || {
                                set_show_create_form.set(false);
                                load_data();
                            }
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || editing_user.get().map(|user| view! {
                    <EditUserForm
                        user=user
                        on_close=move || editing_user.set(None)
                        on_saved=move || {
                            editing_user.set(None);
                            load_data();
                        }
                    />
                })}
            </div>
        </PageFrame>
    }
}
