use contracts::domain::a001_category::{Category, CategoryDraft};
use contracts::domain::common::{EntityStatus, FieldErrors};

use crate::shared::crud::CrudEntity;

/// Поля формы категории в том виде, как их вводит пользователь
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
    /// Пустая строка: статус не задан
    pub status: String,
}

impl CrudEntity for Category {
    type Payload = CategoryDraft;
    type Form = CategoryForm;

    const TABLE: &'static str = "categories";
    const LABEL: &'static str = "Category";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_form(&self) -> CategoryForm {
        CategoryForm {
            name: self.name.clone(),
            description: self.description.clone(),
            status: self
                .status
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    fn parse_form(form: &CategoryForm) -> Result<CategoryDraft, FieldErrors> {
        let draft = CategoryDraft {
            name: form.name.trim().to_string(),
            description: form.description.trim().to_string(),
            status: EntityStatus::parse(&form.status),
        };
        draft.validate()?;
        Ok(draft)
    }
}
