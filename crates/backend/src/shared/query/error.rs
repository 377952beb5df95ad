use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::common::FieldErrors;
use contracts::shared::ApiError;
use thiserror::Error;

/// Ошибки табличного API
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("relation \"{0}\" does not exist")]
    UnknownTable(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("update and delete require an id=eq.<id> filter")]
    MissingFilter,

    #[error("unsupported filter: {0}")]
    UnsupportedFilter(String),

    #[error("invalid select: {0}")]
    BadSelect(String),

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{0}")]
    ForeignKey(String),

    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

impl StoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            StoreError::UnknownTable(_) => StatusCode::NOT_FOUND,
            StoreError::BadRequest(_)
            | StoreError::MissingFilter
            | StoreError::UnsupportedFilter(_)
            | StoreError::BadSelect(_)
            | StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::ForeignKey(_) => StatusCode::CONFLICT,
            StoreError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StoreError::UnknownTable(_) => "unknown_table",
            StoreError::BadRequest(_) => "bad_request",
            StoreError::MissingFilter => "missing_filter",
            StoreError::UnsupportedFilter(_) => "unsupported_filter",
            StoreError::BadSelect(_) => "bad_select",
            StoreError::Validation(_) => "validation",
            StoreError::ForeignKey(_) => "foreign_key_violation",
            StoreError::Db(_) => "database",
        }
    }

    pub fn to_api_error(&self) -> ApiError {
        match self {
            // Детали ошибки БД только в лог
            StoreError::Db(_) => ApiError::new(self.code(), "database error"),
            StoreError::Validation(fields) => {
                ApiError::new(self.code(), self.to_string()).with_details(fields.clone())
            }
            _ => ApiError::new(self.code(), self.to_string()),
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        if let StoreError::Db(e) = &self {
            tracing::error!("Database error: {}", e);
        }
        (self.status(), Json(self.to_api_error())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_code_mapping() {
        let e = StoreError::UnknownTable("orders".into());
        assert_eq!(e.status(), StatusCode::NOT_FOUND);
        assert_eq!(e.to_api_error().message, "relation \"orders\" does not exist");

        let e = StoreError::ForeignKey("category 9 does not exist".into());
        assert_eq!(e.status(), StatusCode::CONFLICT);
        assert_eq!(e.code(), "foreign_key_violation");
    }

    #[test]
    fn test_validation_error_carries_details() {
        let mut fields = FieldErrors::new();
        fields.insert("name", "Name is required");
        let api = StoreError::Validation(fields).to_api_error();
        assert_eq!(api.code, "validation");
        assert_eq!(
            api.details.as_ref().and_then(|d| d.get("name")),
            Some("Name is required")
        );
    }

    #[test]
    fn test_db_error_message_is_not_leaked() {
        let api = StoreError::Db(sea_orm::DbErr::Custom("disk I/O error".into())).to_api_error();
        assert_eq!(api.message, "database error");
    }
}
