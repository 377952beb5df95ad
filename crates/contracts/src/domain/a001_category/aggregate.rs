use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{DESCRIPTION_REQUIRED, NAME_REQUIRED};
use crate::domain::common::{AggregateRoot, EntityStatus, FieldErrors};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория товаров (строка таблицы `categories`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: Option<EntityStatus>,
    pub created_at: DateTime<Utc>,
}

impl AggregateRoot for Category {
    fn collection_name() -> &'static str {
        "categories"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

/// Проекция категории, встраиваемая в товар при чтении (`categories(id,name)`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Данные для создания/обновления категории (без ID, его назначает сервер)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: Option<EntityStatus>,
}

impl CategoryDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", &self.name, NAME_REQUIRED);
        errors.require_text("description", &self.description, DESCRIPTION_REQUIRED);
        errors.into_result()
    }
}

/// Частичное обновление: отсутствующие поля не меняются.
/// `status: Some(None)` сбрасывает статус.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub status: Option<Option<EntityStatus>>,
}

impl CategoryPatch {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Some(name) = &self.name {
            errors.require_text("name", name, NAME_REQUIRED);
        }
        if let Some(description) = &self.description {
            errors.require_text("description", description, DESCRIPTION_REQUIRED);
        }
        errors.into_result()
    }
}

/// Отличает "поле передано как null" от "поле не передано"
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_requires_name_and_description() {
        let draft = CategoryDraft::default();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("description"), Some("Description is required"));

        let ok = CategoryDraft {
            name: "Tools".into(),
            description: "Hand tools".into(),
            status: None,
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_patch_distinguishes_null_from_missing() {
        let cleared: CategoryPatch = serde_json::from_str(r#"{"status":null}"#).unwrap();
        assert_eq!(cleared.status, Some(None));

        let untouched: CategoryPatch = serde_json::from_str(r#"{"name":"Tools"}"#).unwrap();
        assert_eq!(untouched.status, None);
        assert_eq!(untouched.name.as_deref(), Some("Tools"));
    }

    #[test]
    fn test_patch_rejects_blank_name() {
        let patch = CategoryPatch {
            name: Some(" ".into()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
        assert!(CategoryPatch::default().validate().is_ok());
    }
}
