/// Универсальные утилиты для работы со списками (поиск, сортировка)
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу (уже в нижнем регистре)
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Регистронезависимое вхождение подстроки
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Сравнение строк без учёта регистра
pub fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтрует список по поисковому запросу; пустой запрос оставляет всё
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim().to_lowercase();
    if filter.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&filter))
        .cloned()
        .collect()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current: Option<(&str, bool)>, field: &str) -> &'static str {
    match current {
        Some((current_field, ascending)) if current_field == field => {
            if ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str, i32);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.0, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.1.cmp(&other.1),
                _ => cmp_ci(self.0, other.0),
            }
        }
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = vec![Row("Hammer", 1), Row("Saw", 2)];
        assert_eq!(filter_list(&rows, " HAM "), vec![Row("Hammer", 1)]);
        assert_eq!(filter_list(&rows, "").len(), 2);
    }

    #[test]
    fn test_sort_both_directions() {
        let mut rows = vec![Row("b", 2), Row("A", 3), Row("c", 1)];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0], Row("A", 3));
        sort_list(&mut rows, "qty", false);
        assert_eq!(rows[0], Row("A", 3));
        assert_eq!(rows[2], Row("c", 1));
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(Some(("name", true)), "name"), " ▲");
        assert_eq!(get_sort_indicator(Some(("name", false)), "name"), " ▼");
        assert_eq!(get_sort_indicator(Some(("name", true)), "status"), " ⇅");
        assert_eq!(get_sort_indicator(None, "name"), " ⇅");
    }
}
