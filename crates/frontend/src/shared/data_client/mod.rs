//! Табличный клиент данных: select/insert/update/delete по имени таблицы.
//!
//! Все операции возвращают `Result<_, ClientError>`; вызывающий код сам решает,
//! что показать пользователю.

mod error;
mod http;
#[cfg(test)]
pub mod memory;
mod query;

pub use error::ClientError;
pub use http::HttpDataClient;
pub use query::SelectQuery;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[async_trait(?Send)]
pub trait DataClient {
    /// Выборка строк таблицы (без фильтров, по возрастанию id)
    async fn select<R: DeserializeOwned>(
        &self,
        table: &str,
        query: &SelectQuery,
    ) -> Result<Vec<R>, ClientError>;

    async fn insert<P: Serialize>(&self, table: &str, rows: &[P]) -> Result<(), ClientError>;

    /// Обновление одной записи (`id=eq.N`)
    async fn update<P: Serialize>(&self, table: &str, id: i64, patch: &P)
        -> Result<(), ClientError>;

    async fn delete(&self, table: &str, id: i64) -> Result<(), ClientError>;
}
