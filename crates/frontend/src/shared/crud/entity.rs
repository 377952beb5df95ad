use contracts::domain::common::FieldErrors;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

use crate::shared::data_client::SelectQuery;

/// Сущность, которую можно показать списком и редактировать в форме
pub trait CrudEntity: Clone + PartialEq + Debug + DeserializeOwned + Send + Sync + 'static {
    /// Тело insert/update
    type Payload: Clone + PartialEq + Debug + Serialize + 'static;
    /// Сырые значения полей формы (то, что ввёл пользователь)
    type Form: Clone + Default + PartialEq + Debug + Send + Sync + 'static;

    const TABLE: &'static str;
    /// "Category", "Product"
    const LABEL: &'static str;

    fn id(&self) -> i64;

    fn select_query() -> SelectQuery {
        SelectQuery::all()
    }

    fn to_form(&self) -> Self::Form;

    fn parse_form(form: &Self::Form) -> Result<Self::Payload, FieldErrors>;
}
