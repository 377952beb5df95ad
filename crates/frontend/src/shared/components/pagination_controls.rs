use crate::shared::crud::PAGE_SIZE;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Куда ведёт кнопка навигации; `None`: кнопка неактивна
fn target(button: &str, page: usize, total_pages: usize) -> Option<usize> {
    let last = total_pages.saturating_sub(1);
    match button {
        "first" | "prev" if page == 0 => None,
        "first" => Some(0),
        "prev" => Some(page - 1),
        "next" | "last" if page >= last => None,
        "next" => Some(page + 1),
        "last" => Some(last),
        _ => None,
    }
}

/// "Showing 11–20 of 34"
fn range_text(page: usize, total_count: usize) -> String {
    if total_count == 0 {
        return "No records".to_string();
    }
    let from = page * PAGE_SIZE + 1;
    let to = ((page + 1) * PAGE_SIZE).min(total_count);
    format!("Showing {}–{} of {}", from, to, total_count)
}

/// Переключатель страниц клиентской пагинации
#[component]
pub fn PaginationControls(
    /// Текущая страница (с нуля)
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    total_pages: Signal<usize>,
    /// Сколько строк прошло фильтр
    #[prop(into)]
    total_count: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let buttons = [
        ("first", "chevrons-left", "First page"),
        ("prev", "chevron-left", "Previous page"),
        ("next", "chevron-right", "Next page"),
        ("last", "chevrons-right", "Last page"),
    ];
    let nav = move |button: &'static str| {
        move || target(button, current_page.get(), total_pages.get())
    };

    let [first, prev, next, last] = buttons.map(|(button, icon_name, title)| {
        view! {
            <button
                class="pagination-btn"
                title=title
                disabled=move || nav(button)().is_none()
                on:click=move |_| {
                    if let Some(page) = nav(button)() {
                        on_page_change.run(page);
                    }
                }
            >
                {icon(icon_name)}
            </button>
        }
    });

    view! {
        <div class="pagination-controls">
            {first}
            {prev}
            <span class="pagination-info">
                {move || range_text(current_page.get(), total_count.get())}
            </span>
            {next}
            {last}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_on_middle_page() {
        assert_eq!(target("first", 2, 5), Some(0));
        assert_eq!(target("prev", 2, 5), Some(1));
        assert_eq!(target("next", 2, 5), Some(3));
        assert_eq!(target("last", 2, 5), Some(4));
    }

    #[test]
    fn test_edges_disable_buttons() {
        assert_eq!(target("first", 0, 3), None);
        assert_eq!(target("prev", 0, 3), None);
        assert_eq!(target("next", 2, 3), None);
        assert_eq!(target("last", 2, 3), None);
        assert_eq!(target("next", 0, 1), None);
    }

    #[test]
    fn test_range_text() {
        assert_eq!(range_text(0, 0), "No records");
        assert_eq!(range_text(0, 7), "Showing 1–7 of 7");
        assert_eq!(range_text(1, 34), "Showing 11–20 of 34");
        assert_eq!(range_text(3, 34), "Showing 31–34 of 34");
    }
}
