use crate::shared::list_utils::{filter_list, sort_list, Searchable, Sortable};

/// Строк на странице таблицы
pub const PAGE_SIZE: usize = 10;

/// Клиентские поиск, сортировка и пагинация поверх последней выборки
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    pub search: String,
    pub sort: Option<(String, bool)>,
    pub page: usize,
}

/// Одна страница отображаемых строк
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    /// Сколько строк прошло фильтр
    pub total: usize,
    pub total_pages: usize,
    pub page: usize,
}

impl TableView {
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 0;
    }

    /// Повторный клик по той же колонке меняет направление
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = match self.sort.take() {
            Some((current, ascending)) if current == field => Some((current, !ascending)),
            _ => Some((field.to_string(), true)),
        };
        self.page = 0;
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page;
    }

    pub fn apply<T: Searchable + Sortable + Clone>(&self, rows: &[T]) -> PageSlice<T> {
        let mut filtered = filter_list(rows, &self.search);
        if let Some((field, ascending)) = &self.sort {
            sort_list(&mut filtered, field, *ascending);
        }
        let total = filtered.len();
        let total_pages = total.div_ceil(PAGE_SIZE).max(1);
        let page = self.page.min(total_pages - 1);
        let items = filtered
            .into_iter()
            .skip(page * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect();
        PageSlice {
            items,
            total,
            total_pages,
            page,
        }
    }
}
