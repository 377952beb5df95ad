use sea_orm::DatabaseConnection;

use crate::domain::{a001_category, a002_product};

/// Заполняет пустую БД демонстрационными данными.
/// Возвращает `false`, если хотя бы в одной таблице уже есть записи.
pub async fn seed_demo_data(db: &DatabaseConnection) -> anyhow::Result<bool> {
    let categories = a001_category::repository::count(db).await?;
    let products = a002_product::repository::count(db).await?;
    if categories > 0 || products > 0 {
        tracing::info!(
            "Demo seed skipped: {} categories, {} products already present",
            categories,
            products
        );
        return Ok(false);
    }

    let inserted = a001_category::service::insert_test_data(db).await?;
    let ids: Vec<i64> = inserted.iter().map(|c| c.id).collect();
    let products = a002_product::service::insert_test_data(db, &ids).await?;

    tracing::info!(
        "Demo seed inserted {} categories and {} products",
        ids.len(),
        products.len()
    );
    Ok(true)
}
