//! Сортируемая ячейка заголовка таблицы
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Name"
//!     sort_field="name"
//!     sort=Signal::derive(move || state.with(|s| s.view.sort.clone()))
//!     on_sort=Callback::new(move |field: String| state.update(|s| s.view.toggle_sort(&field)))
//! />
//! ```

use crate::shared::list_utils::get_sort_indicator;
use leptos::prelude::*;

#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    /// Текущая сортировка: (поле, по возрастанию)
    #[prop(into)]
    sort: Signal<Option<(String, bool)>>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,
) -> impl IntoView {
    let field_for_click = sort_field.clone();

    view! {
        <th class="table__header-cell table__header-cell--sortable" on:click=move |_| on_sort.run(field_for_click.clone())>
            {label}
            <span class="table__sort-indicator">
                {move || {
                    let current = sort.get();
                    get_sort_indicator(current.as_ref().map(|(f, asc)| (f.as_str(), *asc)), &sort_field)
                }}
            </span>
        </th>
    }
}
