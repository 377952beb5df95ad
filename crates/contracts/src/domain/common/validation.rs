//! Field-level validation errors shared by the form (frontend) and the store (backend)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const NAME_REQUIRED: &str = "Name is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const STATUS_REQUIRED: &str = "Status is required";
pub const CATEGORY_REQUIRED: &str = "Category is required";
pub const QUANTITY_NOT_A_NUMBER: &str = "Quantity must be a whole number";
pub const QUANTITY_NEGATIVE: &str = "Quantity cannot be negative";

/// Ошибки валидации по полям: имя поля -> текст сообщения
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Записать ошибку поля; первая ошибка поля не перезаписывается
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Проверка обязательного текстового поля
    pub fn require_text(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Ok(()) если ошибок нет
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_flags_blank_values() {
        let mut errors = FieldErrors::new();
        errors.require_text("name", "   ", NAME_REQUIRED);
        errors.require_text("description", "Hand tools", DESCRIPTION_REQUIRED);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some(NAME_REQUIRED));
        assert_eq!(errors.get("description"), None);
    }

    #[test]
    fn test_first_error_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("quantity", QUANTITY_NOT_A_NUMBER);
        errors.insert("quantity", QUANTITY_NEGATIVE);
        assert_eq!(errors.get("quantity"), Some(QUANTITY_NOT_A_NUMBER));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.insert("name", NAME_REQUIRED);
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"name":"Name is required"}"#
        );
    }
}
