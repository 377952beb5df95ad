/// Трейт для корня агрегата
///
/// Метаданные таблицы, которые нужны backend (имя таблицы) и UI (подписи).
pub trait AggregateRoot {
    /// Имя таблицы в хранилище (например, "categories")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Category")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Categories")
    fn list_name() -> &'static str;
}
