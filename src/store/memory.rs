//! In-memory store used by the gateway tests and by demo mode. Sequential
//! ids per entity, no persistence beyond the process.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{Query, Record, RecordStore, SortDirection, StoreError};

#[derive(Default)]
struct Table {
    next_id: u64,
    records: Vec<Record>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Table>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// A small data set so the app is usable without a backend.
    pub fn with_demo_data() -> MemoryStore {
        let store = MemoryStore::new();
        {
            let mut tables = store.tables.lock().unwrap_or_else(|e| e.into_inner());
            let users = tables.entry("user_c".to_string()).or_default();
            for (name, email, role) in [
                ("Ava Torres", "ava@taskflow.dev", "admin"),
                ("Marcus Lee", "marcus@taskflow.dev", "project_manager"),
                ("Priya Nair", "priya@taskflow.dev", "member"),
                ("Jonas Weber", "jonas@taskflow.dev", "member"),
            ] {
                users.next_id += 1;
                let mut rec = Record::new();
                rec.insert("Id".into(), json!(users.next_id));
                rec.insert("name_c".into(), json!(name));
                rec.insert("email_c".into(), json!(email));
                rec.insert("role_c".into(), json!(role));
                rec.insert(
                    "avatar_c".into(),
                    json!(format!("https://api.dicebear.com/7.x/avataaars/svg?seed={name}")),
                );
                rec.insert("created_at_c".into(), json!("2024-01-15T09:00:00Z"));
                users.records.push(rec);
            }

            let projects = tables.entry("project_c".to_string()).or_default();
            projects.next_id = 1;
            let mut rec = Record::new();
            rec.insert("Id".into(), json!(1));
            rec.insert("title_c".into(), json!("Website Relaunch"));
            rec.insert("description_c".into(), json!("Marketing site rebuild"));
            rec.insert("manager_id_c".into(), json!(2));
            rec.insert("status_c".into(), json!("active"));
            rec.insert("start_date_c".into(), json!("2024-02-01"));
            rec.insert("end_date_c".into(), json!("2024-06-30"));
            rec.insert("team_members_c".into(), json!("3,4"));
            rec.insert("created_at_c".into(), json!("2024-01-20T10:00:00Z"));
            projects.records.push(rec);

            let tasks = tables.entry("task_c".to_string()).or_default();
            for (title, assignee, priority, status) in [
                ("Draft landing page copy", 3u64, "medium", "todo"),
                ("Build hero component", 4, "high", "in_progress"),
                ("Review nav accessibility", 3, "low", "in_review"),
            ] {
                tasks.next_id += 1;
                let mut rec = Record::new();
                rec.insert("Id".into(), json!(tasks.next_id));
                rec.insert("title_c".into(), json!(title));
                rec.insert("description_c".into(), json!(""));
                rec.insert("project_id_c".into(), json!(1));
                rec.insert("assignee_id_c".into(), json!(assignee));
                rec.insert("priority_c".into(), json!(priority));
                rec.insert("status_c".into(), json!(status));
                rec.insert("due_date_c".into(), json!("2024-05-15"));
                rec.insert("created_by_c".into(), json!(2));
                rec.insert("created_at_c".into(), json!("2024-02-05T08:30:00Z"));
                tasks.records.push(rec);
            }
        }
        store
    }
}

fn sort_key(record: &Record, field: &str) -> (f64, String) {
    match record.get(field) {
        Some(Value::Number(n)) => (n.as_f64().unwrap_or(0.0), String::new()),
        Some(Value::String(s)) => (f64::NEG_INFINITY, s.clone()),
        _ => (f64::NEG_INFINITY, String::new()),
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch(&self, entity: &str, query: Query) -> Result<Vec<Record>, StoreError> {
        let tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        let Some(table) = tables.get(entity) else {
            return Ok(Vec::new());
        };
        let mut rows: Vec<Record> = table
            .records
            .iter()
            .filter(|r| query.filters.iter().all(|f| f.matches(r)))
            .cloned()
            .collect();
        for sort in query.order_by.iter().rev() {
            rows.sort_by(|a, b| {
                let ord = sort_key(a, sort.field)
                    .partial_cmp(&sort_key(b, sort.field))
                    .unwrap_or(Ordering::Equal);
                match sort.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        if let Some(paging) = query.paging {
            rows = rows
                .into_iter()
                .skip(paging.offset as usize)
                .take(paging.limit as usize)
                .collect();
        }
        Ok(rows)
    }

    async fn get_by_id(
        &self,
        entity: &str,
        id: u64,
        _query: Query,
    ) -> Result<Record, StoreError> {
        let tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        tables
            .get(entity)
            .and_then(|t| t.records.iter().find(|r| super::id_field(r, "Id") == id))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, entity: &str, mut record: Record) -> Result<Record, StoreError> {
        let mut tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        let table = tables.entry(entity.to_string()).or_default();
        table.next_id += 1;
        record.insert("Id".to_string(), json!(table.next_id));
        table.records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, entity: &str, record: Record) -> Result<Record, StoreError> {
        let id = super::id_field(&record, "Id");
        let mut tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        let table = tables.get_mut(entity).ok_or(StoreError::NotFound)?;
        let existing = table
            .records
            .iter_mut()
            .find(|r| super::id_field(r, "Id") == id)
            .ok_or(StoreError::NotFound)?;
        for (key, value) in record {
            existing.insert(key, value);
        }
        Ok(existing.clone())
    }

    async fn delete(&self, entity: &str, id: u64) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        let table = tables.get_mut(entity).ok_or(StoreError::NotFound)?;
        let before = table.records.len();
        table.records.retain(|r| super::id_field(r, "Id") != id);
        if table.records.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
