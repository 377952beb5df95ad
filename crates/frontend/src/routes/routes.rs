use crate::dashboards::OverviewDashboard;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::layout::AppShell;
use crate::system::pages::login::LoginPage;
use crate::system::pages::placeholder::{NotFoundPage, PlaceholderPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <AppShell><NotFoundPage /></AppShell> }>
                <Route path=path!("/") view=|| view! { <AppShell><OverviewDashboard /></AppShell> } />
                <Route path=path!("/category") view=|| view! { <AppShell><CategoryList /></AppShell> } />
                <Route path=path!("/product") view=|| view! { <AppShell><ProductList /></AppShell> } />
                <Route
                    path=path!("/customers")
                    view=|| view! { <AppShell><PlaceholderPage title="Customers" /></AppShell> }
                />
                <Route
                    path=path!("/invoices")
                    view=|| view! { <AppShell><PlaceholderPage title="Invoices" /></AppShell> }
                />
                // без сайдбара
                <Route path=path!("/login") view=LoginPage />
            </Routes>
        </Router>
    }
}
