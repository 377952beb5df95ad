use contracts::domain::a001_category::CategoryRef;
use contracts::domain::a002_product::{Product, ProductDraft};
use contracts::domain::common::validation::{
    CATEGORY_REQUIRED, QUANTITY_NOT_A_NUMBER, STATUS_REQUIRED,
};
use contracts::domain::common::{EntityStatus, FieldErrors};

use crate::shared::crud::CrudEntity;
use crate::shared::data_client::{ClientError, DataClient, SelectQuery};

/// Поля формы товара; числа хранятся строками до отправки
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub status: String,
    pub quantity: String,
    /// id категории или пустая строка
    pub category_id: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            status: String::new(),
            quantity: "0".to_string(),
            category_id: String::new(),
        }
    }
}

impl CrudEntity for Product {
    type Payload = ProductDraft;
    type Form = ProductForm;

    const TABLE: &'static str = "products";
    const LABEL: &'static str = "Product";

    fn id(&self) -> i64 {
        self.id
    }

    fn select_query() -> SelectQuery {
        SelectQuery::all().embed("categories", "id,name")
    }

    fn to_form(&self) -> ProductForm {
        ProductForm {
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status.as_str().to_string(),
            quantity: self.quantity.to_string(),
            category_id: self.category_id.to_string(),
        }
    }

    fn parse_form(form: &ProductForm) -> Result<ProductDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        let status = EntityStatus::parse(&form.status);
        if status.is_none() {
            errors.insert("status", STATUS_REQUIRED);
        }
        let quantity = form.quantity.trim().parse::<i32>().ok();
        if quantity.is_none() {
            errors.insert("quantity", QUANTITY_NOT_A_NUMBER);
        }
        let category_id = form.category_id.trim().parse::<i64>().ok();
        if category_id.is_none() {
            errors.insert("category_id", CATEGORY_REQUIRED);
        }

        let draft = ProductDraft {
            name: form.name.trim().to_string(),
            description: form.description.trim().to_string(),
            status: status.unwrap_or(EntityStatus::Active),
            quantity: quantity.unwrap_or_default(),
            category_id: category_id.unwrap_or_default(),
        };
        if let Err(field_errors) = draft.validate() {
            for (field, message) in field_errors.iter() {
                errors.insert(field, message);
            }
        }

        errors.into_result()?;
        Ok(draft)
    }
}

/// Варианты для выбора категории в форме товара
pub async fn load_category_options<C: DataClient>(
    client: &C,
) -> Result<Vec<CategoryRef>, ClientError> {
    client
        .select::<CategoryRef>("categories", &SelectQuery::columns("id,name"))
        .await
}
