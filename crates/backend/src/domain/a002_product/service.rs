use contracts::domain::a002_product::{Product, ProductDraft, ProductPatch};
use contracts::domain::common::EntityStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use super::repository;
use crate::domain::a001_category::repository as category_repository;
use crate::shared::query::StoreError;

async fn ensure_category_exists<C: ConnectionTrait>(db: &C, category_id: i64) -> Result<(), StoreError> {
    if category_repository::get_by_id(db, category_id).await?.is_none() {
        return Err(StoreError::ForeignKey(format!(
            "category {} does not exist",
            category_id
        )));
    }
    Ok(())
}

/// Все товары или один по фильтру `id`; `embed_category` добавляет `categories`
pub async fn list(
    db: &DatabaseConnection,
    id: Option<i64>,
    embed_category: bool,
) -> Result<Vec<Product>, StoreError> {
    match id {
        Some(id) => Ok(repository::get_by_id(db, id, embed_category)
            .await?
            .into_iter()
            .collect()),
        None => Ok(repository::list_all(db, embed_category).await?),
    }
}

pub async fn insert_many(
    db: &DatabaseConnection,
    drafts: Vec<ProductDraft>,
) -> Result<Vec<Product>, StoreError> {
    for draft in &drafts {
        draft.validate().map_err(StoreError::Validation)?;
    }

    let txn = db.begin().await?;
    let mut inserted = Vec::with_capacity(drafts.len());
    for draft in &drafts {
        ensure_category_exists(&txn, draft.category_id).await?;
        inserted.push(repository::insert(&txn, draft).await?);
    }
    txn.commit().await?;

    tracing::info!("Inserted {} products", inserted.len());
    Ok(inserted)
}

pub async fn update(
    db: &DatabaseConnection,
    id: i64,
    patch: ProductPatch,
) -> Result<Vec<Product>, StoreError> {
    patch.validate().map_err(StoreError::Validation)?;
    if let Some(category_id) = patch.category_id {
        ensure_category_exists(db, category_id).await?;
    }
    Ok(repository::update(db, id, &patch).await?.into_iter().collect())
}

pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<Vec<Product>, StoreError> {
    Ok(repository::delete(db, id).await?.into_iter().collect())
}

/// Демонстрационные товары, раскладываются по первым категориям
pub async fn insert_test_data(
    db: &DatabaseConnection,
    category_ids: &[i64],
) -> Result<Vec<Product>, StoreError> {
    let Some(&first) = category_ids.first() else {
        return Ok(Vec::new());
    };
    let second = category_ids.get(1).copied().unwrap_or(first);

    let data = vec![
        ProductDraft {
            name: "Laptop".into(),
            description: "14 inch, 16 GB RAM".into(),
            status: EntityStatus::Active,
            quantity: 12,
            category_id: first,
        },
        ProductDraft {
            name: "Headphones".into(),
            description: "Wireless, noise cancelling".into(),
            status: EntityStatus::Active,
            quantity: 40,
            category_id: first,
        },
        ProductDraft {
            name: "Notebook A5".into(),
            description: "96 sheets, squared".into(),
            status: EntityStatus::Inactive,
            quantity: 0,
            category_id: second,
        },
    ];
    insert_many(db, data).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category;
    use crate::shared::data::db::memory_connection;
    use contracts::domain::a001_category::CategoryDraft;

    async fn seed_category(db: &DatabaseConnection, name: &str) -> i64 {
        a001_category::service::insert_many(
            db,
            vec![CategoryDraft {
                name: name.into(),
                description: "d".into(),
                status: None,
            }],
        )
        .await
        .unwrap()[0]
            .id
    }

    fn draft(name: &str, category_id: i64) -> ProductDraft {
        ProductDraft {
            name: name.into(),
            description: "desc".into(),
            status: EntityStatus::Active,
            quantity: 1,
            category_id,
        }
    }

    #[tokio::test]
    async fn test_list_embeds_category_only_on_request() {
        let db = memory_connection().await;
        let tools = seed_category(&db, "Tools").await;
        insert_many(&db, vec![draft("Hammer", tools)]).await.unwrap();

        let plain = list(&db, None, false).await.unwrap();
        assert!(plain[0].category.is_none());
        assert_eq!(plain[0].category_name(), "—");

        let embedded = list(&db, None, true).await.unwrap();
        let category = embedded[0].category.as_ref().unwrap();
        assert_eq!(category.id, tools);
        assert_eq!(category.name, "Tools");
    }

    #[tokio::test]
    async fn test_missing_category_is_foreign_key_violation() {
        let db = memory_connection().await;
        assert!(matches!(
            insert_many(&db, vec![draft("Orphan", 99)]).await,
            Err(StoreError::ForeignKey(_))
        ));
        assert!(list(&db, None, false).await.unwrap().is_empty());

        let tools = seed_category(&db, "Tools").await;
        let created = insert_many(&db, vec![draft("Hammer", tools)]).await.unwrap();
        let result = update(
            &db,
            created[0].id,
            ProductPatch {
                category_id: Some(tools + 10),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result, Err(StoreError::ForeignKey(_))));
    }

    #[tokio::test]
    async fn test_negative_quantity_rejected() {
        let db = memory_connection().await;
        let tools = seed_category(&db, "Tools").await;
        let mut bad = draft("Hammer", tools);
        bad.quantity = -1;
        match insert_many(&db, vec![bad]).await {
            Err(StoreError::Validation(fields)) => {
                assert_eq!(fields.get("quantity"), Some("Quantity cannot be negative"))
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_and_delete_return_rows() {
        let db = memory_connection().await;
        let tools = seed_category(&db, "Tools").await;
        let id = insert_many(&db, vec![draft("Hammer", tools)]).await.unwrap()[0].id;

        let updated = update(
            &db,
            id,
            ProductPatch {
                quantity: Some(7),
                status: Some(EntityStatus::Inactive),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated[0].quantity, 7);
        assert_eq!(updated[0].status, EntityStatus::Inactive);
        assert_eq!(updated[0].name, "Hammer");

        let deleted = delete(&db, id).await.unwrap();
        assert_eq!(deleted.len(), 1);
        assert!(list(&db, Some(id), true).await.unwrap().is_empty());
    }
}
