use std::path::Path;

use once_cell::sync::OnceCell;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    Statement,
};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_CATEGORIES: &str = r#"
    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        status TEXT,
        created_at TEXT NOT NULL
    );
"#;

const CREATE_PRODUCTS: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        status TEXT NOT NULL,
        quantity INTEGER NOT NULL DEFAULT 0,
        category_id INTEGER NOT NULL REFERENCES categories(id),
        created_at TEXT NOT NULL
    );
"#;

const CREATE_PRODUCTS_CATEGORY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_products_category_id ON products(category_id);";

/// Открывает файл БД (создаёт при отсутствии) и сохраняет глобальное соединение
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Windows: C:/... -> /C:/...
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let prefix = if !normalized.starts_with('/') && normalized.contains(':') {
        "/"
    } else {
        ""
    };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    tracing::info!("Opening database: {}", absolute_path.display());

    let conn = connect(db_url.as_str()).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Подключение + создание схемы. Используется и тестами с `sqlite::memory:`
pub async fn connect(options: impl Into<ConnectOptions>) -> Result<DatabaseConnection, DbErr> {
    let conn = Database::connect(options).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

pub async fn bootstrap_schema<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    for sql in [
        "PRAGMA foreign_keys = ON;",
        CREATE_CATEGORIES,
        CREATE_PRODUCTS,
        CREATE_PRODUCTS_CATEGORY_INDEX,
    ] {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
pub(crate) async fn memory_connection() -> DatabaseConnection {
    // Одно соединение: у каждого соединения своя in-memory БД
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    connect(options)
        .await
        .expect("in-memory sqlite should open")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let conn = memory_connection().await;
        bootstrap_schema(&conn).await.unwrap();

        let rows = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('categories','products') ORDER BY name;".to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = rows
            .iter()
            .map(|r| r.try_get::<String>("", "name").unwrap())
            .collect();
        assert_eq!(names, vec!["categories", "products"]);
    }
}
