//! Network implementation of [`RecordStore`]. Speaks the remote CRUD API:
//! every response carries a `{success, message, data, results}` envelope,
//! and a `success: false` envelope is treated the same as a transport error.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{Query, Record, RecordStore, StoreError};

pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> HttpStore {
        HttpStore { client: reqwest::Client::new(), base_url: base_url.into() }
    }

    fn url(&self, entity: &str, tail: &str) -> String {
        format!("{}/{}{}", self.base_url.trim_end_matches('/'), entity, tail)
    }
}

#[derive(Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    results: Option<Vec<WriteResult>>,
}

#[derive(Deserialize)]
struct WriteResult {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

impl Envelope {
    fn rejection(&self) -> StoreError {
        StoreError::Rejected(
            self.message.clone().unwrap_or_else(|| "operation failed".to_string()),
        )
    }

    /// First per-record result of a write, or the envelope-level failure.
    fn into_write_record(self) -> Result<Record, StoreError> {
        if !self.success {
            return Err(self.rejection());
        }
        let result = self
            .results
            .and_then(|mut rs| if rs.is_empty() { None } else { Some(rs.remove(0)) })
            .ok_or_else(|| StoreError::Rejected("empty write response".to_string()))?;
        if !result.success {
            return Err(StoreError::Rejected(
                result.message.unwrap_or_else(|| "operation failed".to_string()),
            ));
        }
        match result.data {
            Some(Value::Object(map)) => Ok(map),
            _ => Err(StoreError::Rejected("write response carried no record".to_string())),
        }
    }
}

fn transport(err: reqwest::Error) -> StoreError {
    StoreError::Transport(err.to_string())
}

async fn read_envelope(response: reqwest::Response) -> Result<Envelope, StoreError> {
    response.json::<Envelope>().await.map_err(transport)
}

#[async_trait]
impl RecordStore for HttpStore {
    async fn fetch(&self, entity: &str, query: Query) -> Result<Vec<Record>, StoreError> {
        let response = self
            .client
            .post(self.url(entity, "/query"))
            .json(&query)
            .send()
            .await
            .map_err(transport)?;
        let envelope = read_envelope(response).await?;
        if !envelope.success {
            return Err(envelope.rejection());
        }
        match envelope.data {
            Some(Value::Array(rows)) => Ok(rows
                .into_iter()
                .filter_map(|v| match v {
                    Value::Object(map) => Some(map),
                    _ => None,
                })
                .collect()),
            _ => Ok(Vec::new()),
        }
    }

    async fn get_by_id(&self, entity: &str, id: u64, query: Query)
        -> Result<Record, StoreError>
    {
        let response = self
            .client
            .post(self.url(entity, &format!("/{id}")))
            .json(&query)
            .send()
            .await
            .map_err(transport)?;
        let envelope = read_envelope(response).await?;
        if !envelope.success {
            return Err(StoreError::NotFound);
        }
        match envelope.data {
            Some(Value::Object(map)) => Ok(map),
            _ => Err(StoreError::NotFound),
        }
    }

    async fn create(&self, entity: &str, record: Record) -> Result<Record, StoreError> {
        let response = self
            .client
            .post(self.url(entity, ""))
            .json(&json!({ "records": [record] }))
            .send()
            .await
            .map_err(transport)?;
        read_envelope(response).await?.into_write_record()
    }

    async fn update(&self, entity: &str, record: Record) -> Result<Record, StoreError> {
        let response = self
            .client
            .patch(self.url(entity, ""))
            .json(&json!({ "records": [record] }))
            .send()
            .await
            .map_err(transport)?;
        read_envelope(response).await?.into_write_record()
    }

    async fn delete(&self, entity: &str, id: u64) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.url(entity, ""))
            .json(&json!({ "RecordIds": [id] }))
            .send()
            .await
            .map_err(transport)?;
        let envelope = read_envelope(response).await?;
        if !envelope.success {
            return Err(envelope.rejection());
        }
        Ok(())
    }
}
