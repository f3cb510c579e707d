//! Per-entity gateways over the record store. Each gateway owns the adapter
//! between its canonical struct and the remote schema's suffixed field names;
//! nothing outside this module touches raw records.
//!
//! Propagation policy: reads fail soft (log a diagnostic, return an empty
//! collection), writes fail loud so the initiating form can stay open.

pub mod activities;
pub mod comments;
pub mod projects;
pub mod tasks;
pub mod users;

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::Error;
use crate::store::{Record, RecordStore, StoreError};

pub use activities::ActivityService;
pub use comments::CommentService;
pub use projects::{NewProject, ProjectPatch, ProjectService};
pub use tasks::{NewTask, TaskPatch, TaskService};
pub use users::{NewUser, UserPatch, UserService};

#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub projects: ProjectService,
    pub tasks: TaskService,
    pub comments: CommentService,
    pub activities: ActivityService,
}

impl Services {
    pub fn new(store: Arc<dyn RecordStore>) -> Services {
        Services {
            users: UserService::new(store.clone()),
            projects: ProjectService::new(store.clone()),
            tasks: TaskService::new(store.clone()),
            comments: CommentService::new(store.clone()),
            activities: ActivityService::new(store),
        }
    }
}

pub(crate) fn write_error(entity: &'static str, err: StoreError) -> Error {
    match err {
        StoreError::NotFound => Error::NotFound(entity),
        StoreError::Rejected(msg) | StoreError::Transport(msg) => Error::Remote(msg),
    }
}

pub(crate) fn log_read_failure(entity: &str, op: &str, err: &StoreError) {
    tracing::error!(entity, op, error = %err, "read failed, returning empty collection");
}

// Lenient field decoding: a malformed date or timestamp renders as "N/A"
// rather than failing the whole fetch.

pub(crate) fn date_field(record: &Record, name: &str) -> Option<NaiveDate> {
    let raw = crate::store::str_field(record, name);
    NaiveDate::parse_from_str(raw.split('T').next().unwrap_or(&raw), "%Y-%m-%d").ok()
}

pub(crate) fn datetime_field(record: &Record, name: &str) -> Option<DateTime<Utc>> {
    let raw = crate::store::str_field(record, name);
    DateTime::parse_from_rfc3339(&raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339()
}
