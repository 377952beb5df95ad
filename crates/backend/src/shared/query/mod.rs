//! Разбор строки запроса табличного API: `select=...` и фильтр `id=eq.N`

pub mod error;
pub mod filter;
pub mod select_spec;
pub mod table;

pub use error::StoreError;
pub use filter::id_filter;
pub use select_spec::{Columns, Embed, SelectSpec};
pub use table::TableName;
