use std::sync::Arc;

use serde_json::json;

use crate::error::Result;
use crate::models::Comment;
use crate::store::{id_field, str_field, Filter, Query, Record, RecordStore};

use super::{datetime_field, log_read_failure, now_timestamp, write_error};

const ENTITY: &str = "comment_c";
const FIELDS: &[&str] = &["Id", "task_id_c", "user_id_c", "content_c", "created_at_c"];

fn from_record(record: &Record) -> Comment {
    Comment {
        id: id_field(record, "Id"),
        task_id: id_field(record, "task_id_c"),
        user_id: id_field(record, "user_id_c"),
        content: str_field(record, "content_c"),
        created_at: datetime_field(record, "created_at_c"),
    }
}

#[derive(Clone)]
pub struct CommentService {
    store: Arc<dyn RecordStore>,
}

impl CommentService {
    pub fn new(store: Arc<dyn RecordStore>) -> CommentService {
        CommentService { store }
    }

    pub async fn get_all(&self) -> Vec<Comment> {
        match self.store.fetch(ENTITY, Query::select(FIELDS)).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_all", &err);
                Vec::new()
            }
        }
    }

    pub async fn get_by_id(&self, id: u64) -> Result<Comment> {
        self.store
            .get_by_id(ENTITY, id, Query::select(FIELDS))
            .await
            .map(|r| from_record(&r))
            .map_err(|_| crate::error::Error::NotFound("Comment"))
    }

    pub async fn get_by_task(&self, task_id: u64) -> Vec<Comment> {
        let query = Query::select(FIELDS).filter(Filter::equals("task_id_c", task_id));
        match self.store.fetch(ENTITY, query).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_by_task", &err);
                Vec::new()
            }
        }
    }

    pub async fn create(&self, task_id: u64, user_id: u64, content: String) -> Result<Comment> {
        let mut record = Record::new();
        record.insert("task_id_c".into(), json!(task_id));
        record.insert("user_id_c".into(), json!(user_id));
        record.insert("content_c".into(), json!(content));
        record.insert("created_at_c".into(), json!(now_timestamp()));
        self.store
            .create(ENTITY, record)
            .await
            .map(|r| from_record(&r))
            .map_err(|e| write_error("Comment", e))
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        self.store
            .delete(ENTITY, id)
            .await
            .map_err(|e| write_error("Comment", e))
    }
}
