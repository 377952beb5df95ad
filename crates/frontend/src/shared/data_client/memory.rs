//! In-memory реализация `DataClient` для тестов: хранит строки как JSON,
//! записывает журнал вызовов и умеет имитировать отказы.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};

use super::{ClientError, DataClient, SelectQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Select { table: String, select: String },
    Insert { table: String, rows: usize },
    Update { table: String, id: i64 },
    Delete { table: String, id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Select,
    Insert,
    Update,
    Delete,
}

pub const CREATED_AT: &str = "2024-01-01T00:00:00Z";

pub struct MemoryDataClient {
    tables: RefCell<BTreeMap<String, Vec<Value>>>,
    calls: RefCell<Vec<Call>>,
    failures: RefCell<HashMap<Op, ClientError>>,
    next_id: Cell<i64>,
}

impl Default for MemoryDataClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDataClient {
    pub fn new() -> Self {
        Self {
            tables: RefCell::new(BTreeMap::new()),
            calls: RefCell::new(Vec::new()),
            failures: RefCell::new(HashMap::new()),
            next_id: Cell::new(1),
        }
    }

    /// Предзаполняет таблицу; строки должны содержать `id`
    pub fn with_rows(self, table: &str, rows: Vec<Value>) -> Self {
        let max_id = rows
            .iter()
            .filter_map(|r| r.get("id").and_then(Value::as_i64))
            .max()
            .unwrap_or(0);
        self.next_id.set(self.next_id.get().max(max_id + 1));
        self.tables.borrow_mut().insert(table.to_string(), rows);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Все последующие вызовы `op` завершаются ошибкой
    pub fn fail(&self, op: Op, error: ClientError) {
        self.failures.borrow_mut().insert(op, error);
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .borrow()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, call: Call, op: Op) -> Result<(), ClientError> {
        self.calls.borrow_mut().push(call);
        match self.failures.borrow().get(&op) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn category_ref(&self, category_id: Option<i64>) -> Value {
        let tables = self.tables.borrow();
        tables
            .get("categories")
            .and_then(|rows| {
                rows.iter()
                    .find(|r| r.get("id").and_then(Value::as_i64) == category_id)
            })
            .map(|c| json!({ "id": c["id"], "name": c["name"] }))
            .unwrap_or(Value::Null)
    }
}

fn to_object<P: Serialize>(payload: &P) -> Result<Map<String, Value>, ClientError> {
    match serde_json::to_value(payload) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ClientError::encode(format!("expected object, got {other}"))),
        Err(e) => Err(ClientError::encode(e)),
    }
}

#[async_trait(?Send)]
impl DataClient for MemoryDataClient {
    async fn select<R: DeserializeOwned>(
        &self,
        table: &str,
        query: &SelectQuery,
    ) -> Result<Vec<R>, ClientError> {
        self.record(
            Call::Select {
                table: table.to_string(),
                select: query.select_param(),
            },
            Op::Select,
        )?;

        let rows = self.rows(table);
        rows.into_iter()
            .map(|mut row| {
                if query.embeds("categories") {
                    let category_id = row.get("category_id").and_then(Value::as_i64);
                    let embedded = self.category_ref(category_id);
                    if let Value::Object(map) = &mut row {
                        map.insert("categories".into(), embedded);
                    }
                }
                serde_json::from_value(row).map_err(|e| ClientError::decode(200, e))
            })
            .collect()
    }

    async fn insert<P: Serialize>(&self, table: &str, rows: &[P]) -> Result<(), ClientError> {
        self.record(
            Call::Insert {
                table: table.to_string(),
                rows: rows.len(),
            },
            Op::Insert,
        )?;

        let mut prepared = Vec::with_capacity(rows.len());
        for row in rows {
            let mut map = to_object(row)?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            map.insert("id".into(), json!(id));
            map.insert("created_at".into(), json!(CREATED_AT));
            prepared.push(Value::Object(map));
        }
        self.tables
            .borrow_mut()
            .entry(table.to_string())
            .or_default()
            .extend(prepared);
        Ok(())
    }

    async fn update<P: Serialize>(
        &self,
        table: &str,
        id: i64,
        patch: &P,
    ) -> Result<(), ClientError> {
        self.record(
            Call::Update {
                table: table.to_string(),
                id,
            },
            Op::Update,
        )?;

        let patch = to_object(patch)?;
        let mut tables = self.tables.borrow_mut();
        if let Some(row) = tables
            .get_mut(table)
            .and_then(|rows| rows.iter_mut().find(|r| r["id"] == json!(id)))
        {
            if let Value::Object(map) = row {
                map.extend(patch);
            }
        }
        Ok(())
    }

    async fn delete(&self, table: &str, id: i64) -> Result<(), ClientError> {
        self.record(
            Call::Delete {
                table: table.to_string(),
                id,
            },
            Op::Delete,
        )?;

        if let Some(rows) = self.tables.borrow_mut().get_mut(table) {
            rows.retain(|r| r["id"] != json!(id));
        }
        Ok(())
    }
}

pub fn category_row(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "status": "Active",
        "created_at": CREATED_AT,
    })
}

pub fn product_row(id: i64, name: &str, category_id: i64) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "status": "active",
        "quantity": 5,
        "category_id": category_id,
        "created_at": CREATED_AT,
    })
}
