//! Injectable record-store abstraction. The remote service exposes generic
//! CRUD over named entities; gateways in `crate::services` translate domain
//! calls into these requests and never touch transport details themselves.

pub mod http;
pub mod memory;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

pub use http::HttpStore;
pub use memory::MemoryStore;

/// A raw record as the store sees it: remote-schema field names, JSON values.
pub type Record = serde_json::Map<String, Value>;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum FilterOp {
    EqualTo,
}

// Wire casing follows the remote API: filter keys are PascalCase, sort keys
// are not.
#[derive(Clone, Debug, Serialize)]
pub struct Filter {
    #[serde(rename = "FieldName")]
    pub field: &'static str,
    #[serde(rename = "Operator")]
    pub op: FilterOp,
    #[serde(rename = "Values")]
    pub values: Vec<Value>,
}

impl Filter {
    pub fn equals(field: &'static str, value: impl Into<Value>) -> Filter {
        Filter { field, op: FilterOp::EqualTo, values: vec![value.into()] }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self.op {
            FilterOp::EqualTo => record
                .get(self.field)
                .is_some_and(|v| self.values.iter().any(|want| loose_eq(v, want))),
        }
    }
}

// The remote store compares numeric columns loosely; "5" and 5 both match.
fn loose_eq(a: &Value, b: &Value) -> bool {
    if a == b {
        return true;
    }
    match (a, b) {
        (Value::String(s), Value::Number(n)) | (Value::Number(n), Value::String(s)) => {
            s.trim() == n.to_string()
        }
        _ => false,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Clone, Debug, Serialize)]
pub struct Sort {
    #[serde(rename = "fieldName")]
    pub field: &'static str,
    #[serde(rename = "sorttype")]
    pub direction: SortDirection,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Paging {
    pub limit: u32,
    pub offset: u32,
}

/// Request shape for list queries, mirroring the remote API:
/// selected fields, equality filters, ordering and optional paging.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Query {
    pub fields: Vec<&'static str>,
    #[serde(rename = "where")]
    pub filters: Vec<Filter>,
    #[serde(rename = "orderBy")]
    pub order_by: Vec<Sort>,
    #[serde(rename = "pagingInfo", skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

impl Query {
    pub fn select(fields: &[&'static str]) -> Query {
        Query { fields: fields.to_vec(), ..Query::default() }
    }

    pub fn filter(mut self, filter: Filter) -> Query {
        self.filters.push(filter);
        self
    }

    pub fn order_desc(mut self, field: &'static str) -> Query {
        self.order_by.push(Sort { field, direction: SortDirection::Desc });
        self
    }

    pub fn limit(mut self, limit: u32) -> Query {
        self.paging = Some(Paging { limit, offset: 0 });
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The record id does not exist in the target entity.
    #[error("record not found")]
    NotFound,
    /// The store answered but flagged the operation as failed.
    #[error("store rejected the operation: {0}")]
    Rejected(String),
    /// Transport-level failure. Treated identically to a rejection by callers.
    #[error("transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch(&self, entity: &str, query: Query) -> Result<Vec<Record>, StoreError>;

    async fn get_by_id(&self, entity: &str, id: u64, query: Query)
        -> Result<Record, StoreError>;

    /// The store assigns the new record's id.
    async fn create(&self, entity: &str, record: Record) -> Result<Record, StoreError>;

    /// Partial update; `record` carries `Id` plus only the fields to change.
    async fn update(&self, entity: &str, record: Record) -> Result<Record, StoreError>;

    async fn delete(&self, entity: &str, id: u64) -> Result<(), StoreError>;
}

// Field read helpers shared by the gateway adapters. Missing or mistyped
// values degrade to defaults; the UI renders those as "Unknown"/"N/A".

pub fn str_field(record: &Record, name: &str) -> String {
    record
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

pub fn id_field(record: &Record, name: &str) -> u64 {
    match record.get(name) {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // The remote API is picky about key casing; pin the exact request JSON.
    #[test]
    fn query_serializes_to_the_remote_request_shape() {
        let query = Query::select(&["Id", "title_c"])
            .filter(Filter::equals("status_c", "active"))
            .filter(Filter::equals("manager_id_c", 5))
            .order_desc("created_at_c")
            .limit(10);
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(
            value,
            json!({
                "fields": ["Id", "title_c"],
                "where": [
                    { "FieldName": "status_c", "Operator": "EqualTo", "Values": ["active"] },
                    { "FieldName": "manager_id_c", "Operator": "EqualTo", "Values": [5] },
                ],
                "orderBy": [
                    { "fieldName": "created_at_c", "sorttype": "DESC" },
                ],
                "pagingInfo": { "limit": 10, "offset": 0 },
            })
        );
    }

    #[test]
    fn unpaged_query_omits_paging_info() {
        let value = serde_json::to_value(Query::select(&["Id"])).unwrap();
        assert!(value.get("pagingInfo").is_none());
    }

    #[test]
    fn equality_filter_matches_numbers_loosely() {
        let mut record = Record::new();
        record.insert("assignee_id_c".into(), json!("7"));
        assert!(Filter::equals("assignee_id_c", 7).matches(&record));
        assert!(!Filter::equals("assignee_id_c", 8).matches(&record));
    }
}
