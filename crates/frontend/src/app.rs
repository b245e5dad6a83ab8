use crate::domain::a001_product::ui::list::ProductsListPage;
use crate::domain::a002_goods_purchase::ui::list::PurchasesListPage;
use crate::domain::a003_goods_delivery::ui::list::DeliveriesListPage;
use crate::domain::a004_goods_return::ui::list::ReturnsListPage;
use crate::domain::a005_goods_disposal::ui::list::DisposalsListPage;
use crate::domain::a006_price_record::ui::list::PricesListPage;
use crate::shared::icons::icon;
use crate::system::users::ui::list::UsersListPage;
use leptos::prelude::*;

/// Страницы приложения. Навигация без роутера: текущая страница
/// хранится в локальном сигнале, URL не меняется.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Products,
    Purchases,
    Deliveries,
    Returns,
    Disposals,
    Prices,
    Users,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Products => "Товары",
            Page::Purchases => "Закупки",
            Page::Deliveries => "Поставки",
            Page::Returns => "Возвраты",
            Page::Disposals => "Списания",
            Page::Prices => "Цены",
            Page::Users => "Пользователи",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Products => "products",
            Page::Purchases => "purchases",
            Page::Deliveries => "truck",
            Page::Returns => "rotate-ccw",
            Page::Disposals => "trash",
            Page::Prices => "tag",
            Page::Users => "users",
        }
    }

    pub fn all() -> Vec<Page> {
        vec![
            Page::Products,
            Page::Purchases,
            Page::Deliveries,
            Page::Returns,
            Page::Disposals,
            Page::Prices,
            Page::Users,
        ]
    }
}

#[component]
pub fn App() -> impl IntoView {
    let current_page = RwSignal::new(Page::Products);

    view! {
        <div class="app-shell">
            <nav class="app-shell__sidebar">
                <div class="app-shell__logo">"Складской учёт"</div>
                {Page::all()
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class=move || {
                                    if current_page.get() == page {
                                        "app-shell__nav-item app-shell__nav-item--active"
                                    } else {
                                        "app-shell__nav-item"
                                    }
                                }
                                on:click=move |_| current_page.set(page)
                            >
                                {icon(page.icon_name())}
                                <span>{page.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <main class="app-shell__content">
                {move || match current_page.get() {
                    Page::Products => view! { <ProductsListPage /> }.into_any(),
                    Page::Purchases => view! { <PurchasesListPage /> }.into_any(),
                    Page::Deliveries => view! { <DeliveriesListPage /> }.into_any(),
                    Page::Returns => view! { <ReturnsListPage /> }.into_any(),
                    Page::Disposals => view! { <DisposalsListPage /> }.into_any(),
                    Page::Prices => view! { <PricesListPage /> }.into_any(),
                    Page::Users => view! { <UsersListPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
