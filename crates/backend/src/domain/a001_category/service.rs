use contracts::domain::a001_category::{Category, CategoryDraft, CategoryPatch};
use contracts::domain::common::EntityStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use super::repository;
use crate::domain::a002_product::repository as product_repository;
use crate::shared::query::StoreError;

/// Все категории или одна по фильтру `id`
pub async fn list(db: &DatabaseConnection, id: Option<i64>) -> Result<Vec<Category>, StoreError> {
    match id {
        Some(id) => Ok(repository::get_by_id(db, id).await?.into_iter().collect()),
        None => Ok(repository::list_all(db).await?),
    }
}

/// Пакетная вставка: либо все записи, либо ни одной
pub async fn insert_many(
    db: &DatabaseConnection,
    drafts: Vec<CategoryDraft>,
) -> Result<Vec<Category>, StoreError> {
    for draft in &drafts {
        draft.validate().map_err(StoreError::Validation)?;
    }

    let txn = db.begin().await?;
    let mut inserted = Vec::with_capacity(drafts.len());
    for draft in &drafts {
        inserted.push(repository::insert(&txn, draft).await?);
    }
    txn.commit().await?;

    tracing::info!("Inserted {} categories", inserted.len());
    Ok(inserted)
}

pub async fn update(
    db: &DatabaseConnection,
    id: i64,
    patch: CategoryPatch,
) -> Result<Vec<Category>, StoreError> {
    patch.validate().map_err(StoreError::Validation)?;
    Ok(repository::update(db, id, &patch).await?.into_iter().collect())
}

/// Удаление запрещено, пока на категорию ссылаются товары.
/// Проверка и удаление идут в одной транзакции.
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<Vec<Category>, StoreError> {
    let txn = db.begin().await?;
    let referenced = product_repository::count_by_category(&txn, id).await?;
    if referenced > 0 {
        txn.rollback().await?;
        return Err(StoreError::ForeignKey(format!(
            "category {} is still referenced by {} product(s)",
            id, referenced
        )));
    }
    let deleted = repository::delete(&txn, id).await?;
    txn.commit().await?;
    Ok(deleted.into_iter().collect())
}

/// Демонстрационные категории
pub async fn insert_test_data(db: &DatabaseConnection) -> Result<Vec<Category>, StoreError> {
    let data = vec![
        CategoryDraft {
            name: "Electronics".into(),
            description: "Phones, laptops and accessories".into(),
            status: Some(EntityStatus::Active),
        },
        CategoryDraft {
            name: "Stationery".into(),
            description: "Office supplies".into(),
            status: Some(EntityStatus::Active),
        },
        CategoryDraft {
            name: "Tools".into(),
            description: "Hand and power tools".into(),
            status: Some(EntityStatus::Inactive),
        },
    ];
    insert_many(db, data).await
}
