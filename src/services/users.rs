use std::sync::Arc;

use serde_json::json;

use crate::error::Result;
use crate::models::{Role, User};
use crate::store::{id_field, str_field, Filter, Query, Record, RecordStore};

use super::{datetime_field, log_read_failure, now_timestamp, write_error};

const ENTITY: &str = "user_c";
const FIELDS: &[&str] = &[
    "Id",
    "Name",
    "name_c",
    "email_c",
    "role_c",
    "avatar_c",
    "created_at_c",
];

fn from_record(record: &Record) -> User {
    User {
        id: id_field(record, "Id"),
        name: str_field(record, "name_c"),
        email: str_field(record, "email_c"),
        // Unknown roles take the least-privileged branch of every role switch.
        role: Role::parse(&str_field(record, "role_c")).unwrap_or(Role::Member),
        avatar: str_field(record, "avatar_c"),
        created_at: datetime_field(record, "created_at_c"),
    }
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub avatar: Option<String>,
}

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn RecordStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn RecordStore>) -> UserService {
        UserService { store }
    }

    pub async fn get_all(&self) -> Vec<User> {
        match self.store.fetch(ENTITY, Query::select(FIELDS)).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_all", &err);
                Vec::new()
            }
        }
    }

    pub async fn get_by_id(&self, id: u64) -> Result<User> {
        self.store
            .get_by_id(ENTITY, id, Query::select(FIELDS))
            .await
            .map(|r| from_record(&r))
            .map_err(|_| crate::error::Error::NotFound("User"))
    }

    pub async fn get_by_role(&self, role: Role) -> Vec<User> {
        let query = Query::select(FIELDS).filter(Filter::equals("role_c", role.as_str()));
        match self.store.fetch(ENTITY, query).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_by_role", &err);
                Vec::new()
            }
        }
    }

    pub async fn create(&self, data: NewUser) -> Result<User> {
        let avatar = data.avatar.unwrap_or_else(|| {
            format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", data.name)
        });
        let mut record = Record::new();
        record.insert("Name".into(), json!(data.name));
        record.insert("name_c".into(), json!(data.name));
        record.insert("email_c".into(), json!(data.email));
        record.insert("role_c".into(), json!(data.role.as_str()));
        record.insert("avatar_c".into(), json!(avatar));
        record.insert("created_at_c".into(), json!(now_timestamp()));
        self.store
            .create(ENTITY, record)
            .await
            .map(|r| from_record(&r))
            .map_err(|e| write_error("User", e))
    }

    pub async fn update(&self, id: u64, patch: UserPatch) -> Result<User> {
        let mut record = Record::new();
        record.insert("Id".into(), json!(id));
        if let Some(name) = patch.name {
            record.insert("Name".into(), json!(name));
            record.insert("name_c".into(), json!(name));
        }
        if let Some(email) = patch.email {
            record.insert("email_c".into(), json!(email));
        }
        if let Some(role) = patch.role {
            record.insert("role_c".into(), json!(role.as_str()));
        }
        if let Some(avatar) = patch.avatar {
            record.insert("avatar_c".into(), json!(avatar));
        }
        self.store
            .update(ENTITY, record)
            .await
            .map(|r| from_record(&r))
            .map_err(|e| write_error("User", e))
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        self.store
            .delete(ENTITY, id)
            .await
            .map_err(|e| write_error("User", e))
    }
}
