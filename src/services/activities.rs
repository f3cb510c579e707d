use std::sync::Arc;

use serde_json::json;

use crate::error::Result;
use crate::models::{Activity, EntityKind};
use crate::store::{id_field, str_field, Filter, Query, Record, RecordStore};

use super::{datetime_field, log_read_failure, now_timestamp, write_error};

const ENTITY: &str = "activity_c";
const FIELDS: &[&str] = &[
    "Id",
    "user_id_c",
    "action_c",
    "entity_type_c",
    "entity_id_c",
    "created_at_c",
];

fn from_record(record: &Record) -> Activity {
    Activity {
        id: id_field(record, "Id"),
        user_id: id_field(record, "user_id_c"),
        action: str_field(record, "action_c"),
        entity_type: EntityKind::parse(&str_field(record, "entity_type_c")),
        entity_id: id_field(record, "entity_id_c"),
        created_at: datetime_field(record, "created_at_c"),
    }
}

#[derive(Clone)]
pub struct ActivityService {
    store: Arc<dyn RecordStore>,
}

impl ActivityService {
    pub fn new(store: Arc<dyn RecordStore>) -> ActivityService {
        ActivityService { store }
    }

    pub async fn get_all(&self) -> Vec<Activity> {
        match self.store.fetch(ENTITY, Query::select(FIELDS)).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_all", &err);
                Vec::new()
            }
        }
    }

    pub async fn get_recent(&self, limit: u32) -> Vec<Activity> {
        let query = Query::select(FIELDS).order_desc("created_at_c").limit(limit);
        match self.store.fetch(ENTITY, query).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_recent", &err);
                Vec::new()
            }
        }
    }

    pub async fn get_by_user(&self, user_id: u64) -> Vec<Activity> {
        let query = Query::select(FIELDS).filter(Filter::equals("user_id_c", user_id));
        match self.store.fetch(ENTITY, query).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_by_user", &err);
                Vec::new()
            }
        }
    }

    pub async fn get_by_entity(&self, kind: EntityKind, entity_id: u64) -> Vec<Activity> {
        let query = Query::select(FIELDS)
            .filter(Filter::equals("entity_type_c", kind.as_str()))
            .filter(Filter::equals("entity_id_c", entity_id));
        match self.store.fetch(ENTITY, query).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_by_entity", &err);
                Vec::new()
            }
        }
    }

    pub async fn create(
        &self,
        user_id: u64,
        action: String,
        kind: EntityKind,
        entity_id: u64,
    ) -> Result<Activity> {
        let mut record = Record::new();
        record.insert("user_id_c".into(), json!(user_id));
        record.insert("action_c".into(), json!(action));
        record.insert("entity_type_c".into(), json!(kind.as_str()));
        record.insert("entity_id_c".into(), json!(entity_id));
        record.insert("created_at_c".into(), json!(now_timestamp()));
        self.store
            .create(ENTITY, record)
            .await
            .map(|r| from_record(&r))
            .map_err(|e| write_error("Activity", e))
    }
}
