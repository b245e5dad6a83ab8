use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::modal::Modal;
use crate::system::users::api;

#[component]
pub fn CreateUserForm<F1, F2>(on_close: F1, on_created: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let is_admin = RwSignal::new(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        if username.get().trim().is_empty() {
            set_error.set(Some("Логин не может быть пустым".to_string()));
            return;
        }
        if password.get().trim().is_empty() {
            set_error.set(Some("Пароль не может быть пустым".to_string()));
            return;
        }

        let dto = CreateUserDto {
            username: username.get(),
            password: password.get(),
            email: if email.get().trim().is_empty() {
                None
            } else {
                Some(email.get())
            },
            full_name: if full_name.get().trim().is_empty() {
                None
            } else {
                Some(full_name.get())
            },
            is_admin: is_admin.get(),
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::create_user(dto).await {
                Ok(_) => on_created(),
                Err(e) => {
                    set_error.set(Some(format!("Ошибка создания: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Новый пользователь".to_string() on_close=Callback::new(move |_| on_close())>
            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <Label>"Логин *"</Label>
                    <Input
                        value=username
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>

                <div class="form__group">
                    <Label>"Пароль *"</Label>
                    <Input
                        value=password
                        input_type=InputType::Password
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>

                <div class="form__group">
                    <Label>"Email"</Label>
                    <Input
                        value=email
                        input_type=InputType::Email
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>

                <div class="form__group">
                    <Label>"ФИО"</Label>
                    <Input
                        value=full_name
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>

                <div class="form__group">
                    <Checkbox checked=is_admin label="Администратор" />
                </div>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close()
                    disabled=Signal::derive(move || saving.get())
                >
                    "Отмена"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Сохранение..." } else { "Создать" }}
                </Button>
            </div>
        </Modal>
    }
}

#[component]
pub fn EditUserForm<F1, F2>(user: User, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let email = RwSignal::new(user.email.clone().unwrap_or_default());
    let full_name = RwSignal::new(user.full_name.clone().unwrap_or_default());
    let is_admin = RwSignal::new(user.is_admin);
    let is_active = RwSignal::new(user.is_active);
    // Необязательная смена пароля вместе с сохранением
    let new_password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let username_display = user.username.clone();
    let user_id = user.id.clone();

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);

        let dto = UpdateUserDto {
            id: user_id.clone(),
            email: if email.get().trim().is_empty() {
                None
            } else {
                Some(email.get())
            },
            full_name: if full_name.get().trim().is_empty() {
                None
            } else {
                Some(full_name.get())
            },
            is_active: is_active.get(),
            is_admin: is_admin.get(),
        };
        let password = new_password.get();
        let password_dto = if password.trim().is_empty() {
            None
        } else {
            Some(ChangePasswordDto {
                user_id: user_id.clone(),
                old_password: None,
                new_password: password,
            })
        };

        spawn_local(async move {
            match api::update_user(dto).await {
                Ok(_) => {
                    if let Some(pwd_dto) = password_dto {
                        if let Err(e) = api::change_password(pwd_dto).await {
                            set_error.set(Some(format!("Пароль не изменён: {}", e)));
                            set_saving.set(false);
                            return;
                        }
                    }
                    on_saved()
                }
                Err(e) => {
                    set_error.set(Some(format!("Ошибка сохранения: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <Modal
            title=format!("Редактирование: {}", username_display)
            on_close=Callback::new(move |_| on_close())
        >
            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <Label>"Email"</Label>
                    <Input
                        value=email
                        input_type=InputType::Email
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>

                <div class="form__group">
                    <Label>"ФИО"</Label>
                    <Input
                        value=full_name
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>

                <div class="form__group">
                    <Label>"Новый пароль (не обязательно)"</Label>
                    <Input
                        value=new_password
                        input_type=InputType::Password
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>

                <div class="form__group">
                    <Checkbox checked=is_admin label="Администратор" />
                </div>

                <div class="form__group">
                    <Checkbox checked=is_active label="Активен" />
                </div>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close()
                    disabled=Signal::derive(move || saving.get())
                >
                    "Отмена"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                </Button>
            </div>
        </Modal>
    }
}
