//! Боковое меню: разворачивается при наведении, может быть закреплено

pub mod state;

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use state::{is_active, SidebarState};

#[component]
pub fn Sidebar() -> impl IntoView {
    let sidebar = RwSignal::new(SidebarState::default());
    let location = use_location();

    view! {
        <aside
            class="app-sidebar"
            class:app-sidebar--expanded=move || sidebar.with(|s| s.expanded)
            class:app-sidebar--pinned=move || sidebar.with(|s| s.pinned)
            on:mouseenter=move |_| sidebar.update(|s| s.mouse_enter())
            on:mouseleave=move |_| sidebar.update(|s| s.mouse_leave())
        >
            <div class="app-sidebar__brand">
                <span class="app-sidebar__title">{"BCRM"}</span>
                <button
                    class="button button--icon app-sidebar__pin"
                    class:app-sidebar__pin--active=move || sidebar.with(|s| s.pinned)
                    title="Pin sidebar"
                    on:click=move |_| sidebar.update(|s| s.toggle_pin())
                >
                    {icon("pin")}
                </button>
            </div>

            <div class="app-sidebar__search">
                <input
                    type="search"
                    placeholder="Search menu"
                    prop:value=move || sidebar.with(|s| s.query.clone())
                    on:input=move |ev| sidebar.update(|s| s.query = event_target_value(&ev))
                />
            </div>

            <nav class="app-sidebar__content">
                {move || {
                    sidebar
                        .with(|s| s.visible_items())
                        .into_iter()
                        .map(|item| {
                            let pathname = location.pathname;
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || {
                                        pathname.with(|p| is_active(item.path, p))
                                    }
                                    on:click=move |_| sidebar.update(|s| s.link_clicked())
                                >
                                    <A href=item.path>
                                        <div class="app-sidebar__item-content">
                                            {icon(item.icon)}
                                            <span>{item.label}</span>
                                        </div>
                                    </A>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </aside>
    }
}
