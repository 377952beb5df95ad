use crate::domain::a002_product::ui::details::ProductDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::notice_bar::NoticeBar;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::crud::actions::{spawn_confirm_delete, spawn_reload, use_data_client};
use crate::shared::crud::CrudState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_ci, contains_ci, Searchable, Sortable};
use contracts::domain::a002_product::Product;
use contracts::domain::common::{AggregateRoot, EntityStatus};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

fn status_badge_class(status: EntityStatus) -> &'static str {
    if status.is_active() {
        "badge badge--success"
    } else {
        "badge badge--error"
    }
}

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(self.category_name(), filter)
            || contains_ci(&self.quantity.to_string(), filter)
            || contains_ci(&self.description, filter)
            || contains_ci(self.status.as_str(), filter)
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_ci(&self.name, &other.name),
            "category" => cmp_ci(self.category_name(), other.category_name()),
            "quantity" => self.quantity.cmp(&other.quantity),
            "description" => cmp_ci(&self.description, &other.description),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => self.id.cmp(&other.id),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let state = RwSignal::new(CrudState::<Product>::new());
    let client = use_data_client();

    spawn_reload(client.clone(), state);

    let page = Memo::new(move |_| state.with(|s| s.view.apply(&s.rows)));
    let sort = Signal::derive(move || state.with(|s| s.view.sort.clone()));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.view.toggle_sort(&field)));
    let on_page_change = Callback::new(move |p: usize| state.update(|s| s.view.go_to(p)));

    let refresh = {
        let client = client.clone();
        move |_| spawn_reload(client.clone(), state)
    };
    let keep = Callback::new(move |_| state.update(|s| {
        s.gate.cancel();
    }));
    let confirm = {
        let client = client.clone();
        Callback::new(move |_| spawn_confirm_delete(client.clone(), state))
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Product::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| state.update(|s| s.open_create())>
                        {icon("plus")}
                        {format!("Add {}", Product::element_name())}
                    </button>
                    <button class="button button--secondary" on:click=refresh>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <NoticeBar notice=Signal::derive(move || state.with(|s| s.notice.clone())) />

            <div class="filter-bar">
                {icon("search")}
                <input
                    type="search"
                    class="filter-bar__input"
                    placeholder="Search products"
                    prop:value=move || state.with(|s| s.view.search.clone())
                    on:input=move |ev| state.update(|s| s.view.set_search(event_target_value(&ev)))
                />
            </div>

            {move || state.with(|s| s.load_error.clone()).map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <div class="page__loading"><Spinner /></div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <SortableHeaderCell label="Name" sort_field="name" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Category" sort_field="category" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Quantity" sort_field="quantity" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Description" sort_field="description" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Status" sort_field="status" sort=sort on_sort=on_sort />
                                <th class="table__header-cell">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || page.get().items.into_iter().map(|row| {
                                let id = row.id;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.name.clone()}</td>
                                        <td class="table__cell">{row.category_name().to_string()}</td>
                                        <td class="table__cell table__cell--number">{row.quantity}</td>
                                        <td class="table__cell">{row.description.clone()}</td>
                                        <td class="table__cell">
                                            <span class=status_badge_class(row.status)>{row.status.as_str()}</span>
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--icon"
                                                title="Edit"
                                                on:click=move |_| { state.update(|s| { s.open_edit(id); }); }
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="button button--icon button--danger"
                                                title="Delete"
                                                on:click=move |_| state.update(|s| { s.gate.request(id); })
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || page.get().page)
                    total_pages=Signal::derive(move || page.get().total_pages)
                    total_count=Signal::derive(move || page.get().total)
                    on_page_change=on_page_change
                />
            </Show>

            <Show when=move || state.with(|s| s.editor.is_some())>
                <ProductDetails state=state client=client.clone() />
            </Show>

            <Show when=move || state.with(|s| s.gate.is_open())>
                <ConfirmDialog
                    message="Are you sure you want to delete this product?"
                    busy=Signal::derive(move || state.with(|s| s.gate.is_deleting()))
                    on_keep=keep
                    on_confirm=confirm
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::TableView;
    use chrono::Utc;
    use contracts::domain::a001_category::CategoryRef;

    fn product(id: i64, name: &str, quantity: i32, category: Option<&str>) -> Product {
        Product {
            id,
            name: name.into(),
            description: String::new(),
            status: EntityStatus::Active,
            quantity,
            category_id: 1,
            category: category.map(|n| CategoryRef {
                id: 1,
                name: n.into(),
            }),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_search_matches_embedded_category() {
        let rows = vec![
            product(1, "Laptop", 5, Some("Electronics")),
            product(2, "Notebook", 40, Some("Stationery")),
        ];
        let mut view = TableView::default();
        view.set_search("ELECTRO".into());
        let page = view.apply(&rows);
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Laptop");
    }

    #[test]
    fn test_quantity_sorts_numerically() {
        let rows = vec![
            product(1, "A", 40, None),
            product(2, "B", 5, None),
            product(3, "C", 100, None),
        ];
        let mut view = TableView::default();
        view.toggle_sort("quantity");
        view.toggle_sort("quantity");
        let quantities: Vec<_> = view.apply(&rows).items.iter().map(|p| p.quantity).collect();
        assert_eq!(quantities, vec![100, 40, 5]);
    }

    #[test]
    fn test_missing_category_sorts_after_named() {
        let rows = vec![product(1, "A", 1, Some("Tools")), product(2, "B", 1, None)];
        let mut view = TableView::default();
        view.toggle_sort("category");
        let names: Vec<_> = view.apply(&rows).items.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
