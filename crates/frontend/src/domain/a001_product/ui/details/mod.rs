use contracts::domain::a001_product::{Product, ProductDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_product::api;
use crate::shared::modal::Modal;

/// Форма создания/редактирования товара
#[component]
pub fn ProductForm<F1, F2>(
    existing: Option<Product>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let is_edit = existing.is_some();
    let existing_id = existing.as_ref().map(|p| p.to_string_id());
    let title = match &existing {
        Some(p) => format!("Товар: {}", p.base.description),
        None => "Новый товар".to_string(),
    };

    let code = RwSignal::new(
        existing
            .as_ref()
            .map(|p| p.base.code.clone())
            .unwrap_or_default(),
    );
    let description = RwSignal::new(
        existing
            .as_ref()
            .map(|p| p.base.description.clone())
            .unwrap_or_default(),
    );
    let article = RwSignal::new(
        existing
            .as_ref()
            .map(|p| p.article.clone())
            .unwrap_or_default(),
    );
    let category = RwSignal::new(
        existing
            .as_ref()
            .map(|p| p.category.clone())
            .unwrap_or_default(),
    );
    let unit = RwSignal::new(
        existing
            .as_ref()
            .map(|p| p.unit.clone())
            .unwrap_or_else(|| "шт".to_string()),
    );
    let is_active = RwSignal::new(existing.as_ref().map(|p| p.is_active).unwrap_or(true));
    let comment = RwSignal::new(
        existing
            .as_ref()
            .and_then(|p| p.base.comment.clone())
            .unwrap_or_default(),
    );

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = ProductDto {
            code: code.get(),
            description: description.get(),
            article: article.get(),
            category: category.get(),
            unit: unit.get(),
            is_active: is_active.get(),
            comment: if comment.get().trim().is_empty() {
                None
            } else {
                Some(comment.get())
            },
        };

        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        let id = existing_id.clone();
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_product(&id, dto).await,
                None => api::create_product(dto).await.map(|_| ()),
            };
            match result {
                Ok(_) => on_saved(),
                Err(e) => {
                    set_error.set(Some(format!("Ошибка сохранения: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <Modal title=title on_close=Callback::new(move |_| on_close())>
            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <label class="form__label">"Код *"</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Наименование *"</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Артикул"</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || article.get()
                        on:input=move |ev| article.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Категория"</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Единица измерения"</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || unit.get()
                        on:input=move |ev| unit.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form__group">
                    <Checkbox checked=is_active label="Активен" />
                </div>

                <div class="form__group">
                    <label class="form__label">"Комментарий"</label>
                    <textarea
                        class="form__input"
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    ></textarea>
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
                    {move || if saving.get() {
                        "Сохранение..."
                    } else if is_edit {
                        "Сохранить"
                    } else {
                        "Создать"
                    }}
                </Button>
            </div>
        </Modal>
    }
}
