use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use contracts::domain::common::AggregateRoot;

use super::StoreError;

/// Таблицы, доступные через `/api/:table`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableName {
    Categories,
    Products,
}

impl TableName {
    pub const ALL: [TableName; 2] = [TableName::Categories, TableName::Products];

    pub fn parse(name: &str) -> Result<Self, StoreError> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .ok_or_else(|| StoreError::UnknownTable(name.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Categories => Category::collection_name(),
            TableName::Products => Product::collection_name(),
        }
    }

    /// Колонки, которые можно перечислить в `select`
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            TableName::Categories => &["id", "name", "description", "status", "created_at"],
            TableName::Products => &[
                "id",
                "name",
                "description",
                "status",
                "quantity",
                "category_id",
                "created_at",
            ],
        }
    }

    /// Связанная таблица, которую можно встроить в ответ, и её доступные колонки
    pub fn embeddable(&self, related: &str) -> Option<&'static [&'static str]> {
        match (self, related) {
            (TableName::Products, "categories") => Some(&["id", "name"]),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_unknown_tables() {
        assert_eq!(TableName::parse("categories").unwrap(), TableName::Categories);
        assert_eq!(TableName::parse("products").unwrap().as_str(), "products");
        assert!(matches!(
            TableName::parse("customers"),
            Err(StoreError::UnknownTable(t)) if t == "customers"
        ));
    }

    #[test]
    fn test_only_products_embed_categories() {
        assert!(TableName::Products.embeddable("categories").is_some());
        assert!(TableName::Categories.embeddable("products").is_none());
    }
}
