use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;

use crate::error::Result;
use crate::models::{Priority, Role, Task, TaskStatus, User};
use crate::store::{id_field, str_field, Filter, Query, Record, RecordStore};

use super::{date_field, datetime_field, log_read_failure, now_timestamp, write_error};

const ENTITY: &str = "task_c";
const FIELDS: &[&str] = &[
    "Id",
    "Name",
    "title_c",
    "description_c",
    "project_id_c",
    "assignee_id_c",
    "priority_c",
    "status_c",
    "due_date_c",
    "created_by_c",
    "created_at_c",
];

fn from_record(record: &Record) -> Task {
    Task {
        id: id_field(record, "Id"),
        title: str_field(record, "title_c"),
        description: str_field(record, "description_c"),
        project_id: id_field(record, "project_id_c"),
        assignee_id: id_field(record, "assignee_id_c"),
        priority: Priority::parse(&str_field(record, "priority_c")),
        status: TaskStatus::parse(&str_field(record, "status_c")),
        due_date: date_field(record, "due_date_c"),
        created_by: id_field(record, "created_by_c"),
        created_at: datetime_field(record, "created_at_c"),
    }
}

#[derive(Clone, Debug)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub project_id: u64,
    pub assignee_id: u64,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
    pub created_by: u64,
}

#[derive(Clone, Debug, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project_id: Option<u64>,
    pub assignee_id: Option<u64>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn RecordStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn RecordStore>) -> TaskService {
        TaskService { store }
    }

    pub async fn get_all(&self) -> Vec<Task> {
        match self.store.fetch(ENTITY, Query::select(FIELDS)).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_all", &err);
                Vec::new()
            }
        }
    }

    pub async fn get_by_id(&self, id: u64) -> Result<Task> {
        self.store
            .get_by_id(ENTITY, id, Query::select(FIELDS))
            .await
            .map(|r| from_record(&r))
            .map_err(|_| crate::error::Error::NotFound("Task"))
    }

    pub async fn get_by_project(&self, project_id: u64) -> Vec<Task> {
        let query =
            Query::select(FIELDS).filter(Filter::equals("project_id_c", project_id));
        match self.store.fetch(ENTITY, query).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_by_project", &err);
                Vec::new()
            }
        }
    }

    pub async fn get_by_assignee(&self, assignee_id: u64) -> Vec<Task> {
        let query =
            Query::select(FIELDS).filter(Filter::equals("assignee_id_c", assignee_id));
        match self.store.fetch(ENTITY, query).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_by_assignee", &err);
                Vec::new()
            }
        }
    }

    pub async fn get_by_status(&self, status: TaskStatus) -> Vec<Task> {
        let query = Query::select(FIELDS).filter(Filter::equals("status_c", status.as_str()));
        match self.store.fetch(ENTITY, query).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_by_status", &err);
                Vec::new()
            }
        }
    }

    pub async fn get_by_priority(&self, priority: Priority) -> Vec<Task> {
        let query =
            Query::select(FIELDS).filter(Filter::equals("priority_c", priority.as_str()));
        match self.store.fetch(ENTITY, query).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_by_priority", &err);
                Vec::new()
            }
        }
    }

    /// Role-scoped task listing. Members see only their assignments; admins
    /// and project managers see every task. Manager visibility is by role
    /// only, not narrowed to their own projects' tasks.
    pub async fn visible_to(&self, user: &User) -> Vec<Task> {
        match user.role {
            Role::Member => self.get_by_assignee(user.id).await,
            Role::Admin | Role::ProjectManager => self.get_all().await,
        }
    }

    pub async fn create(&self, data: NewTask) -> Result<Task> {
        let mut record = Record::new();
        record.insert("Name".into(), json!(data.title));
        record.insert("title_c".into(), json!(data.title));
        record.insert("description_c".into(), json!(data.description));
        record.insert("project_id_c".into(), json!(data.project_id));
        record.insert("assignee_id_c".into(), json!(data.assignee_id));
        record.insert("priority_c".into(), json!(data.priority.as_str()));
        record.insert("status_c".into(), json!(data.status.as_str()));
        record.insert("due_date_c".into(), json!(data.due_date.to_string()));
        record.insert("created_by_c".into(), json!(data.created_by));
        record.insert("created_at_c".into(), json!(now_timestamp()));
        self.store
            .create(ENTITY, record)
            .await
            .map(|r| from_record(&r))
            .map_err(|e| write_error("Task", e))
    }

    pub async fn update(&self, id: u64, patch: TaskPatch) -> Result<Task> {
        let mut record = Record::new();
        record.insert("Id".into(), json!(id));
        if let Some(title) = patch.title {
            record.insert("Name".into(), json!(title));
            record.insert("title_c".into(), json!(title));
        }
        if let Some(description) = patch.description {
            record.insert("description_c".into(), json!(description));
        }
        if let Some(project_id) = patch.project_id {
            record.insert("project_id_c".into(), json!(project_id));
        }
        if let Some(assignee_id) = patch.assignee_id {
            record.insert("assignee_id_c".into(), json!(assignee_id));
        }
        if let Some(priority) = patch.priority {
            record.insert("priority_c".into(), json!(priority.as_str()));
        }
        if let Some(status) = patch.status {
            record.insert("status_c".into(), json!(status.as_str()));
        }
        if let Some(due_date) = patch.due_date {
            record.insert("due_date_c".into(), json!(due_date.to_string()));
        }
        self.store
            .update(ENTITY, record)
            .await
            .map(|r| from_record(&r))
            .map_err(|e| write_error("Task", e))
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        self.store
            .delete(ENTITY, id)
            .await
            .map_err(|e| write_error("Task", e))
    }

    /// Partial update touching only the status column; used by the board.
    pub async fn update_status(&self, id: u64, status: TaskStatus) -> Result<Task> {
        let mut record = Record::new();
        record.insert("Id".into(), json!(id));
        record.insert("status_c".into(), json!(status.as_str()));
        self.store
            .update(ENTITY, record)
            .await
            .map(|r| from_record(&r))
            .map_err(|e| write_error("Task", e))
    }

    pub async fn reassign(&self, id: u64, assignee_id: u64) -> Result<Task> {
        let mut record = Record::new();
        record.insert("Id".into(), json!(id));
        record.insert("assignee_id_c".into(), json!(assignee_id));
        self.store
            .update(ENTITY, record)
            .await
            .map(|r| from_record(&r))
            .map_err(|e| write_error("Task", e))
    }
}
