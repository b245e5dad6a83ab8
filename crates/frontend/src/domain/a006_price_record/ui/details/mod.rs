use contracts::domain::a001_product::{Product, ProductRef};
use contracts::domain::a006_price_record::PriceRecordDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_product::api as product_api;
use crate::domain::a006_price_record::api;
use crate::shared::date_utils::today_input_value;
use crate::shared::modal::Modal;

/// Форма установки новой цены
#[component]
pub fn PriceForm<F1, F2>(on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let product_ref: RwSignal<Option<ProductRef>> = RwSignal::new(None);
    let price = RwSignal::new("0".to_string());
    let currency = RwSignal::new("RUB".to_string());
    let valid_from = RwSignal::new(today_input_value());

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

        let dto = PriceRecordDto {
            product,
            price: price.get().trim().parse().unwrap_or(-1.0),
            currency: currency.get(),
            valid_from: valid_from.get(),
        };

        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::create_price(dto).await {
                Ok(_) => on_saved(),
                Err(e) => {
                    set_error.set(Some(format!("Ошибка сохранения: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Новая цена".to_string() on_close=Callback::new(move |_| on_close())>
            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

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
                    <label class="form__label">"Цена *"</label>
                    <input
                        type="number"
                        class="form__input"
                        min="0"
                        step="0.01"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Валюта"</label>
                    <select
                        class="form__input"
                        on:change=move |ev| currency.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    >
                        <option value="RUB" selected=move || currency.get() == "RUB">"RUB"</option>
                        <option value="USD" selected=move || currency.get() == "USD">"USD"</option>
                        <option value="EUR" selected=move || currency.get() == "EUR">"EUR"</option>
                    </select>
                </div>

                <div class="form__group">
                    <label class="form__label">"Действует с *"</label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || valid_from.get()
                        on:input=move |ev| valid_from.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
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
