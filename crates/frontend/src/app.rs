use crate::routes::routes::AppRoutes;
use crate::shared::data_client::HttpDataClient;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Один клиент данных на всё приложение; страницы берут его из контекста
    provide_context(HttpDataClient::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
