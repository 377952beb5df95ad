use crate::layout::sidebar::Sidebar;
use leptos::prelude::*;

/// Оболочка страниц приложения: сайдбар слева, содержимое справа.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <Sidebar />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
