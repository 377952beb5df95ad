use leptos::prelude::*;

/// Раздел без содержимого (Customers, Invoices)
#[component]
pub fn PlaceholderPage(title: &'static str) -> impl IntoView {
    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{title}</h1>
                </div>
            </div>
            <p class="page__empty">{format!("{} will be available soon.", title)}</p>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1 class="header__title">"Page not found"</h1>
            <a href="/">"Back to dashboard"</a>
        </div>
    }
}
