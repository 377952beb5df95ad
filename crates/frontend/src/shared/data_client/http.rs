use async_trait::async_trait;
use contracts::shared::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ClientError, DataClient, SelectQuery};
use crate::shared::api_utils::api_base;

/// Клиент бэкенда поверх `fetch` (gloo-net)
#[derive(Clone, Debug, Default)]
pub struct HttpDataClient;

impl HttpDataClient {
    pub fn new() -> Self {
        Self
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/api/{}", api_base(), table)
    }
}

async fn check(resp: Response) -> Result<Response, ClientError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    match resp.json::<ApiError>().await {
        Ok(body) => Err(ClientError::from_api(status, body)),
        Err(_) => Err(ClientError::new(
            status,
            "http",
            format!("HTTP {} {}", status, resp.status_text()),
        )),
    }
}

#[async_trait(?Send)]
impl DataClient for HttpDataClient {
    async fn select<R: DeserializeOwned>(
        &self,
        table: &str,
        query: &SelectQuery,
    ) -> Result<Vec<R>, ClientError> {
        let url = format!("{}?{}", self.table_url(table), query.to_query_string());
        let resp = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ClientError::network)?;
        let resp = check(resp).await?;
        let status = resp.status();
        resp.json::<Vec<R>>()
            .await
            .map_err(|e| ClientError::decode(status, e))
    }

    async fn insert<P: Serialize>(&self, table: &str, rows: &[P]) -> Result<(), ClientError> {
        let resp = Request::post(&self.table_url(table))
            .header("Accept", "application/json")
            .json(rows)
            .map_err(ClientError::encode)?
            .send()
            .await
            .map_err(ClientError::network)?;
        check(resp).await.map(|_| ())
    }

    async fn update<P: Serialize>(
        &self,
        table: &str,
        id: i64,
        patch: &P,
    ) -> Result<(), ClientError> {
        let url = format!("{}?id=eq.{}", self.table_url(table), id);
        let resp = Request::patch(&url)
            .header("Accept", "application/json")
            .json(patch)
            .map_err(ClientError::encode)?
            .send()
            .await
            .map_err(ClientError::network)?;
        check(resp).await.map(|_| ())
    }

    async fn delete(&self, table: &str, id: i64) -> Result<(), ClientError> {
        let url = format!("{}?id=eq.{}", self.table_url(table), id);
        let resp = Request::delete(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ClientError::network)?;
        check(resp).await.map(|_| ())
    }
}
