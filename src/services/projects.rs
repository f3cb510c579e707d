use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;

use crate::error::Result;
use crate::models::{
    decode_team_members, encode_team_members, Project, ProjectStatus, Role, User,
};
use crate::store::{id_field, str_field, Filter, Query, Record, RecordStore};

use super::{date_field, datetime_field, log_read_failure, now_timestamp, write_error};

const ENTITY: &str = "project_c";
const FIELDS: &[&str] = &[
    "Id",
    "Name",
    "title_c",
    "description_c",
    "manager_id_c",
    "status_c",
    "start_date_c",
    "end_date_c",
    "team_members_c",
    "created_at_c",
];

fn from_record(record: &Record) -> Project {
    Project {
        id: id_field(record, "Id"),
        title: str_field(record, "title_c"),
        description: str_field(record, "description_c"),
        manager_id: id_field(record, "manager_id_c"),
        status: ProjectStatus::parse(&str_field(record, "status_c")),
        start_date: date_field(record, "start_date_c"),
        end_date: date_field(record, "end_date_c"),
        team_members: decode_team_members(&str_field(record, "team_members_c")),
        created_at: datetime_field(record, "created_at_c"),
    }
}

#[derive(Clone, Debug)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub manager_id: u64,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub team_members: Vec<u64>,
}

#[derive(Clone, Debug, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub manager_id: Option<u64>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub team_members: Option<Vec<u64>>,
}

#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn RecordStore>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn RecordStore>) -> ProjectService {
        ProjectService { store }
    }

    pub async fn get_all(&self) -> Vec<Project> {
        match self.store.fetch(ENTITY, Query::select(FIELDS)).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_all", &err);
                Vec::new()
            }
        }
    }

    pub async fn get_by_id(&self, id: u64) -> Result<Project> {
        self.store
            .get_by_id(ENTITY, id, Query::select(FIELDS))
            .await
            .map(|r| from_record(&r))
            .map_err(|_| crate::error::Error::NotFound("Project"))
    }

    pub async fn get_by_manager(&self, manager_id: u64) -> Vec<Project> {
        let query =
            Query::select(FIELDS).filter(Filter::equals("manager_id_c", manager_id));
        match self.store.fetch(ENTITY, query).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_by_manager", &err);
                Vec::new()
            }
        }
    }

    /// Membership lives inside the delimited text column, so the store cannot
    /// filter on it; fetch everything and test membership after decoding.
    pub async fn get_by_member(&self, member_id: u64) -> Vec<Project> {
        match self.store.fetch(ENTITY, Query::select(FIELDS)).await {
            Ok(records) => records
                .iter()
                .map(from_record)
                .filter(|p| p.team_members.contains(&member_id))
                .collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_by_member", &err);
                Vec::new()
            }
        }
    }

    pub async fn get_by_status(&self, status: ProjectStatus) -> Vec<Project> {
        let query = Query::select(FIELDS).filter(Filter::equals("status_c", status.as_str()));
        match self.store.fetch(ENTITY, query).await {
            Ok(records) => records.iter().map(from_record).collect(),
            Err(err) => {
                log_read_failure(ENTITY, "get_by_status", &err);
                Vec::new()
            }
        }
    }

    /// Role-scoped project listing; the single place the role switch lives.
    pub async fn visible_to(&self, user: &User) -> Vec<Project> {
        match user.role {
            Role::Admin => self.get_all().await,
            Role::ProjectManager => self.get_by_manager(user.id).await,
            Role::Member => self.get_by_member(user.id).await,
        }
    }

    pub async fn create(&self, data: NewProject) -> Result<Project> {
        let mut record = Record::new();
        record.insert("Name".into(), json!(data.title));
        record.insert("title_c".into(), json!(data.title));
        record.insert("description_c".into(), json!(data.description));
        record.insert("manager_id_c".into(), json!(data.manager_id));
        record.insert("status_c".into(), json!(data.status.as_str()));
        record.insert("start_date_c".into(), json!(data.start_date.to_string()));
        record.insert("end_date_c".into(), json!(data.end_date.to_string()));
        record.insert(
            "team_members_c".into(),
            json!(encode_team_members(&data.team_members)),
        );
        record.insert("created_at_c".into(), json!(now_timestamp()));
        self.store
            .create(ENTITY, record)
            .await
            .map(|r| from_record(&r))
            .map_err(|e| write_error("Project", e))
    }

    pub async fn update(&self, id: u64, patch: ProjectPatch) -> Result<Project> {
        let mut record = Record::new();
        record.insert("Id".into(), json!(id));
        if let Some(title) = patch.title {
            record.insert("Name".into(), json!(title));
            record.insert("title_c".into(), json!(title));
        }
        if let Some(description) = patch.description {
            record.insert("description_c".into(), json!(description));
        }
        if let Some(manager_id) = patch.manager_id {
            record.insert("manager_id_c".into(), json!(manager_id));
        }
        if let Some(status) = patch.status {
            record.insert("status_c".into(), json!(status.as_str()));
        }
        if let Some(start_date) = patch.start_date {
            record.insert("start_date_c".into(), json!(start_date.to_string()));
        }
        if let Some(end_date) = patch.end_date {
            record.insert("end_date_c".into(), json!(end_date.to_string()));
        }
        if let Some(members) = patch.team_members {
            record.insert("team_members_c".into(), json!(encode_team_members(&members)));
        }
        self.store
            .update(ENTITY, record)
            .await
            .map(|r| from_record(&r))
            .map_err(|e| write_error("Project", e))
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        self.store
            .delete(ENTITY, id)
            .await
            .map_err(|e| write_error("Project", e))
    }

    /// Adding an id already in the set leaves the record unchanged.
    pub async fn add_team_member(&self, project_id: u64, member_id: u64) -> Result<Project> {
        let project = self.get_by_id(project_id).await?;
        let mut members = project.team_members;
        if !members.contains(&member_id) {
            members.push(member_id);
        }
        self.set_team_members(project_id, members).await
    }

    pub async fn remove_team_member(
        &self,
        project_id: u64,
        member_id: u64,
    ) -> Result<Project> {
        let project = self.get_by_id(project_id).await?;
        let members: Vec<u64> = project
            .team_members
            .into_iter()
            .filter(|id| *id != member_id)
            .collect();
        self.set_team_members(project_id, members).await
    }

    async fn set_team_members(&self, project_id: u64, members: Vec<u64>) -> Result<Project> {
        let mut record = Record::new();
        record.insert("Id".into(), json!(project_id));
        record.insert("team_members_c".into(), json!(encode_team_members(&members)));
        self.store
            .update(ENTITY, record)
            .await
            .map(|r| from_record(&r))
            .map_err(|e| write_error("Project", e))
    }
}
