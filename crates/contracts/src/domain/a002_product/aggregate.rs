use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_category::CategoryRef;
use crate::domain::common::validation::{DESCRIPTION_REQUIRED, NAME_REQUIRED, QUANTITY_NEGATIVE};
use crate::domain::common::{AggregateRoot, EntityStatus, FieldErrors};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар (строка таблицы `products`)
///
/// `category` заполняется только когда запрос выбирает `categories(id,name)`;
/// в JSON поле называется так же, как связанная таблица.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: EntityStatus,
    pub quantity: i32,
    pub category_id: i64,
    #[serde(rename = "categories", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Наименование категории для таблицы ("—" если связь не выбрана)
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("—")
    }
}

impl AggregateRoot for Product {
    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub status: EntityStatus,
    #[serde(default)]
    pub quantity: i32,
    pub category_id: i64,
}

impl ProductDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", &self.name, NAME_REQUIRED);
        errors.require_text("description", &self.description, DESCRIPTION_REQUIRED);
        if self.quantity < 0 {
            errors.insert("quantity", QUANTITY_NEGATIVE);
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl ProductPatch {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Some(name) = &self.name {
            errors.require_text("name", name, NAME_REQUIRED);
        }
        if let Some(description) = &self.description {
            errors.require_text("description", description, DESCRIPTION_REQUIRED);
        }
        if matches!(self.quantity, Some(q) if q < 0) {
            errors.insert("quantity", QUANTITY_NEGATIVE);
        }
        errors.into_result()
    }
}
