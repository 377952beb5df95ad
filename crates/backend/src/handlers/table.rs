use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_category::{CategoryDraft, CategoryPatch};
use contracts::domain::a002_product::{ProductDraft, ProductPatch};
use sea_orm::{DatabaseConnection, DbErr};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{a001_category, a002_product};
use crate::shared::data::db::get_connection;
use crate::shared::query::filter::required_id_filter;
use crate::shared::query::{id_filter, SelectSpec, StoreError, TableName};

type Params = HashMap<String, String>;

/// GET /api/:table?select=...&id=eq.N
pub async fn select(
    Path(table): Path<String>,
    Query(params): Query<Params>,
) -> Result<Json<Vec<Value>>, StoreError> {
    select_rows(get_connection(), &table, &params).await.map(Json)
}

/// POST /api/:table (объект или массив объектов)
pub async fn insert(
    Path(table): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Vec<Value>>), StoreError> {
    let rows = insert_rows(get_connection(), &table, &body).await?;
    Ok((StatusCode::CREATED, Json(rows)))
}

/// PATCH /api/:table?id=eq.N
pub async fn update(
    Path(table): Path<String>,
    Query(params): Query<Params>,
    body: Bytes,
) -> Result<Json<Vec<Value>>, StoreError> {
    update_rows(get_connection(), &table, &params, &body)
        .await
        .map(Json)
}

/// DELETE /api/:table?id=eq.N
pub async fn delete(
    Path(table): Path<String>,
    Query(params): Query<Params>,
) -> Result<Json<Vec<Value>>, StoreError> {
    delete_rows(get_connection(), &table, &params).await.map(Json)
}

pub async fn select_rows(
    db: &DatabaseConnection,
    table: &str,
    params: &Params,
) -> Result<Vec<Value>, StoreError> {
    let table = TableName::parse(table)?;
    let spec = SelectSpec::parse(params.get("select").map(String::as_str).unwrap_or("*"))?;
    spec.check(table)?;
    let id = id_filter(params)?;

    let rows = match table {
        TableName::Categories => to_rows(a001_category::service::list(db, id).await?)?,
        TableName::Products => {
            let embed = spec.embeds(TableName::Categories.as_str());
            to_rows(a002_product::service::list(db, id, embed).await?)?
        }
    };
    Ok(rows.into_iter().map(|row| spec.project(row)).collect())
}

pub async fn insert_rows(
    db: &DatabaseConnection,
    table: &str,
    body: &[u8],
) -> Result<Vec<Value>, StoreError> {
    let table = TableName::parse(table)?;
    let body = parse_body(body)?;
    match table {
        TableName::Categories => {
            let drafts: Vec<CategoryDraft> = decode_records(body)?;
            to_rows(a001_category::service::insert_many(db, drafts).await?)
        }
        TableName::Products => {
            let drafts: Vec<ProductDraft> = decode_records(body)?;
            to_rows(a002_product::service::insert_many(db, drafts).await?)
        }
    }
}

pub async fn update_rows(
    db: &DatabaseConnection,
    table: &str,
    params: &Params,
    body: &[u8],
) -> Result<Vec<Value>, StoreError> {
    let table = TableName::parse(table)?;
    let id = required_id_filter(params)?;
    let body = parse_body(body)?;
    match table {
        TableName::Categories => {
            let patch: CategoryPatch = decode(body)?;
            to_rows(a001_category::service::update(db, id, patch).await?)
        }
        TableName::Products => {
            let patch: ProductPatch = decode(body)?;
            to_rows(a002_product::service::update(db, id, patch).await?)
        }
    }
}

pub async fn delete_rows(
    db: &DatabaseConnection,
    table: &str,
    params: &Params,
) -> Result<Vec<Value>, StoreError> {
    let table = TableName::parse(table)?;
    let id = required_id_filter(params)?;
    match table {
        TableName::Categories => to_rows(a001_category::service::delete(db, id).await?),
        TableName::Products => to_rows(a002_product::service::delete(db, id).await?),
    }
}

fn parse_body(body: &[u8]) -> Result<Value, StoreError> {
    serde_json::from_slice(body).map_err(|e| StoreError::BadRequest(format!("invalid JSON body: {e}")))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, StoreError> {
    serde_json::from_value(value).map_err(|e| StoreError::BadRequest(format!("invalid record: {e}")))
}

fn decode_records<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, StoreError> {
    match body {
        Value::Array(items) => items.into_iter().map(decode).collect(),
        other => Ok(vec![decode(other)?]),
    }
}

fn to_rows<T: Serialize>(items: Vec<T>) -> Result<Vec<Value>, StoreError> {
    items
        .into_iter()
        .map(|item| serde_json::to_value(item).map_err(|e| StoreError::from(DbErr::Json(e.to_string()))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_connection;
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[tokio::test]
    async fn test_insert_select_round_through_store() {
        let db = memory_connection().await;
        let created = insert_rows(
            &db,
            "categories",
            &body(json!([{"name": "Tools", "description": "Hand tools", "status": "Active"}])),
        )
        .await
        .unwrap();
        assert_eq!(created.len(), 1);
        let category_id = created[0]["id"].as_i64().unwrap();

        insert_rows(
            &db,
            "products",
            &body(json!({
                "name": "Hammer",
                "description": "Steel",
                "status": "active",
                "quantity": 3,
                "category_id": category_id
            })),
        )
        .await
        .unwrap();

        let rows = select_rows(
            &db,
            "products",
            &params(&[("select", "*,categories(id,name)")]),
        )
        .await
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["status"], "Active");
        assert_eq!(rows[0]["categories"], json!({"id": category_id, "name": "Tools"}));

        let rows = select_rows(&db, "products", &params(&[("select", "name")]))
            .await
            .unwrap();
        assert_eq!(rows, vec![json!({"name": "Hammer"})]);
    }

    #[tokio::test]
    async fn test_update_and_delete_need_id_filter() {
        let db = memory_connection().await;
        let result = update_rows(&db, "categories", &params(&[]), &body(json!({"name": "X"}))).await;
        assert!(matches!(result, Err(StoreError::MissingFilter)));
        let result = delete_rows(&db, "categories", &params(&[])).await;
        assert!(matches!(result, Err(StoreError::MissingFilter)));
    }

    #[tokio::test]
    async fn test_update_unmatched_id_returns_empty() {
        let db = memory_connection().await;
        let rows = update_rows(
            &db,
            "categories",
            &params(&[("id", "eq.404")]),
            &body(json!({"name": "Nothing"})),
        )
        .await
        .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_bad_requests_are_classified() {
        let db = memory_connection().await;
        assert!(matches!(
            select_rows(&db, "orders", &params(&[])).await,
            Err(StoreError::UnknownTable(_))
        ));
        assert!(matches!(
            insert_rows(&db, "categories", b"not json").await,
            Err(StoreError::BadRequest(_))
        ));
        assert!(matches!(
            insert_rows(&db, "categories", &body(json!({"description": "no name"}))).await,
            Err(StoreError::BadRequest(_))
        ));
        assert!(matches!(
            select_rows(&db, "categories", &params(&[("select", "*,categories(id)")])).await,
            Err(StoreError::BadSelect(_))
        ));
        assert!(matches!(
            select_rows(&db, "categories", &params(&[("name", "eq.Tools")])).await,
            Err(StoreError::UnsupportedFilter(_))
        ));
    }
}
