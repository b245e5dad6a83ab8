use contracts::domain::a001_product::{Product, ProductRef};
use contracts::domain::a005_goods_disposal::{GoodsDisposal, GoodsDisposalDto};
use contracts::enums::DisposalMethod;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_product::api as product_api;
use crate::domain::a005_goods_disposal::api;
use crate::shared::date_utils::today_input_value;
use crate::shared::modal::Modal;

/// Форма создания/редактирования списания
#[component]
pub fn DisposalForm<F1, F2>(
    existing: Option<GoodsDisposal>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let is_edit = existing.is_some();
    let existing_id = existing.as_ref().map(|d| d.to_string_id());
    let title = match &existing {
        Some(d) => format!("Списание: {}", d.base.code),
        None => "Новое списание".to_string(),
    };

    let code = RwSignal::new(
        existing
            .as_ref()
            .map(|d| d.base.code.clone())
            .unwrap_or_default(),
    );
    let product_ref: RwSignal<Option<ProductRef>> =
        RwSignal::new(existing.as_ref().map(|d| d.product.clone()));
    let quantity = RwSignal::new(
        existing
            .as_ref()
            .map(|d| d.quantity.to_string())
            .unwrap_or_else(|| "1".to_string()),
    );
    let method = RwSignal::new(
        existing
            .as_ref()
            .map(|d| d.method.code().to_string())
            .unwrap_or_else(|| DisposalMethod::WriteOff.code().to_string()),
    );
    let doc_date = RwSignal::new(
        existing
            .as_ref()
            .map(|d| d.doc_date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(today_input_value),
    );
    let comment = RwSignal::new(
        existing
            .as_ref()
            .and_then(|d| d.base.comment.clone())
            .unwrap_or_default(),
    );

    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    // Справочник товаров для выбора
    spawn_local(async move {
        match product_api::fetch_products().await {
            Ok(list) => products.set(list),
            Err(e) => set_error.set(Some(format!("Не удалось загрузить товары: {}", e))),
        }
    });

    let select_product = move |id: String| {
        let selected = products
            .get_untracked()
            .iter()
            .find(|p| p.to_string_id() == id)
            .map(|p| p.to_ref());
        product_ref.set(selected);
    };

    let on_save = move |_| {
        let product = match product_ref.get() {
            Some(p) => p,
            None => {
                set_error.set(Some("Не выбран товар".to_string()));
                return;
            }
        };

        let dto = GoodsDisposalDto {
            code: code.get(),
            product,
            quantity: quantity.get().trim().parse().unwrap_or(0),
            method: DisposalMethod::from_code(&method.get()).unwrap_or(DisposalMethod::WriteOff),
            doc_date: doc_date.get(),
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
                Some(id) => api::update_disposal(&id, dto).await,
                None => api::create_disposal(dto).await.map(|_| ()),
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
                    <label class="form__label">"Номер документа *"</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Товар *"</label>
                    <select
                        class="form__input"
                        on:change=move |ev| select_product(event_target_value(&ev))
                        disabled=move || saving.get()
                    >
                        <option value="" selected=move || product_ref.get().is_none()>
                            "— выберите товар —"
                        </option>
                        {move || {
                            let current = product_ref.get().map(|p| p.id);
                            products.get().iter().map(|p| {
                                let id = p.to_string_id();
                                let selected = current.as_deref() == Some(id.as_str());
                                view! {
                                    <option value=id.clone() selected=selected>
                                        {format!("{} — {}", p.article, p.base.description)}
                                    </option>
                                }
                            }).collect_view()
                        }}
                    </select>
                </div>

                <div class="form__group">
                    <label class="form__label">"Количество *"</label>
                    <input
                        type="number"
                        class="form__input"
                        min="1"
                        prop:value=move || quantity.get()
                        on:input=move |ev| quantity.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Способ списания"</label>
                    <select
                        class="form__input"
                        on:change=move |ev| method.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    >
                        {DisposalMethod::all().into_iter().map(|m| {
                            view! {
                                <option
                                    value=m.code()
                                    selected=move || method.get() == m.code()
                                >
                                    {m.display_name()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form__group">
                    <label class="form__label">"Дата документа *"</label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || doc_date.get()
                        on:input=move |ev| doc_date.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
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
