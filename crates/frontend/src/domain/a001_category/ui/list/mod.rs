use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::notice_bar::NoticeBar;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::crud::actions::{spawn_confirm_delete, spawn_reload, use_data_client};
use crate::shared::crud::CrudState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_ci, contains_ci, Searchable, Sortable};
use contracts::domain::a001_category::Category;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

fn status_text(category: &Category) -> &'static str {
    category.status.map(|s| s.as_str()).unwrap_or("—")
}

fn format_created(category: &Category) -> String {
    category.created_at.format("%Y-%m-%d %H:%M").to_string()
}

impl Searchable for Category {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(&self.description, filter)
            || contains_ci(status_text(self), filter)
            || contains_ci(&format_created(self), filter)
    }
}

impl Sortable for Category {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_ci(&self.name, &other.name),
            "description" => cmp_ci(&self.description, &other.description),
            "status" => status_text(self).cmp(status_text(other)),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => self.id.cmp(&other.id),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let state = RwSignal::new(CrudState::<Category>::new());
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
                    <h1 class="header__title">{Category::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| state.update(|s| s.open_create())>
                        {icon("plus")}
                        {format!("Add {}", Category::element_name())}
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
                    placeholder="Search categories"
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
                                <SortableHeaderCell label="Description" sort_field="description" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Status" sort_field="status" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Created" sort_field="created_at" sort=sort on_sort=on_sort />
                                <th class="table__header-cell">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || page.get().items.into_iter().map(|row| {
                                let id = row.id;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.name.clone()}</td>
                                        <td class="table__cell">{row.description.clone()}</td>
                                        <td class="table__cell">{status_text(&row)}</td>
                                        <td class="table__cell">{format_created(&row)}</td>
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
                <CategoryDetails state=state client=client.clone() />
            </Show>

            <Show when=move || state.with(|s| s.gate.is_open())>
                <ConfirmDialog
                    message="Are you sure you want to delete this category?"
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
    use chrono::{TimeZone, Utc};
    use contracts::domain::common::EntityStatus;

    fn category(id: i64, name: &str, status: Option<EntityStatus>) -> Category {
        Category {
            id,
            name: name.into(),
            description: format!("{name} goods"),
            status,
            created_at: Utc.with_ymd_and_hms(2024, 3, id as u32, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_search_covers_visible_columns() {
        let rows = vec![
            category(1, "Electronics", Some(EntityStatus::Active)),
            category(2, "Tools", Some(EntityStatus::Inactive)),
            category(3, "Garden", None),
        ];
        let mut view = TableView::default();

        view.set_search("inactive".into());
        let names: Vec<_> = view.apply(&rows).items.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Tools"]);

        view.set_search("2024-03-03".into());
        let names: Vec<_> = view.apply(&rows).items.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Garden"]);
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let rows = vec![
            category(1, "tools", None),
            category(2, "Electronics", None),
            category(3, "garden", None),
        ];
        let mut view = TableView::default();
        view.toggle_sort("name");
        let names: Vec<_> = view.apply(&rows).items.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Electronics", "garden", "tools"]);
    }

    #[test]
    fn test_missing_status_renders_dash() {
        assert_eq!(status_text(&category(1, "Garden", None)), "—");
        assert_eq!(
            status_text(&category(1, "Garden", Some(EntityStatus::Active))),
            "Active"
        );
    }
}
