use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    ProjectManager,
    Member,
}

impl Role {
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "admin" => Some(Role::Admin),
            "project_manager" => Some(Role::ProjectManager),
            "member" => Some(Role::Member),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::ProjectManager => "project_manager",
            Role::Member => "member",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::ProjectManager => "Project Manager",
            Role::Member => "Member",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    Active,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::Active,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
    ];

    pub fn parse(s: &str) -> Option<ProjectStatus> {
        match s {
            "planning" => Some(ProjectStatus::Planning),
            "active" => Some(ProjectStatus::Active),
            "on_hold" | "on-hold" => Some(ProjectStatus::OnHold),
            "completed" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Active => "active",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    InReview,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::InReview,
        TaskStatus::Completed,
    ];

    pub fn parse(s: &str) -> Option<TaskStatus> {
        match s {
            "todo" => Some(TaskStatus::Todo),
            "in_progress" => Some(TaskStatus::InProgress),
            "in_review" => Some(TaskStatus::InReview),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::InReview => "in_review",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::InReview => "In Review",
            TaskStatus::Completed => "Completed",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn parse(s: &str) -> Option<Priority> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Project,
    Task,
    User,
}

impl EntityKind {
    pub fn parse(s: &str) -> Option<EntityKind> {
        match s {
            "project" => Some(EntityKind::Project),
            "task" => Some(EntityKind::Task),
            "user" => Some(EntityKind::User),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Project => "project",
            EntityKind::Task => "task",
            EntityKind::User => "user",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub manager_id: u64,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub team_members: Vec<u64>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub project_id: u64,
    pub assignee_id: u64,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<NaiveDate>,
    pub created_by: u64,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub task_id: u64,
    pub user_id: u64,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub user_id: u64,
    pub action: String,
    pub entity_type: Option<EntityKind>,
    pub entity_id: u64,
    pub created_at: Option<DateTime<Utc>>,
}

/// The backing store keeps the project-to-member relation as one delimited
/// text column. Tokens that fail to parse (including the empty string left
/// by an empty field) are dropped rather than treated as an error.
pub fn decode_team_members(raw: &str) -> Vec<u64> {
    raw.split(',')
        .filter_map(|tok| tok.trim().parse::<u64>().ok())
        .collect()
}

pub fn encode_team_members(members: &[u64]) -> String {
    members
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_splits_and_drops_bad_tokens() {
        assert_eq!(decode_team_members("1, 2,3"), vec![1, 2, 3]);
        assert_eq!(decode_team_members("4,,abc, 5 "), vec![4, 5]);
        assert_eq!(decode_team_members(""), Vec::<u64>::new());
    }

    #[test]
    fn encode_joins_with_commas() {
        assert_eq!(encode_team_members(&[7, 9]), "7,9");
        assert_eq!(encode_team_members(&[]), "");
    }

    #[test]
    fn team_members_round_trip() {
        for set in [vec![], vec![0], vec![1, 2, 3], vec![42, 7, 1000]] {
            assert_eq!(decode_team_members(&encode_team_members(&set)), set);
        }
    }

    #[test]
    fn unknown_enum_values_parse_to_none() {
        assert_eq!(TaskStatus::parse("archived"), None);
        assert_eq!(Priority::parse("urgent"), None);
        assert_eq!(ProjectStatus::parse("cancelled"), None);
        assert_eq!(Role::parse("superuser"), None);
    }

    #[test]
    fn status_strings_round_trip() {
        for s in TaskStatus::ALL {
            assert_eq!(TaskStatus::parse(s.as_str()), Some(s));
        }
        for p in Priority::ALL {
            assert_eq!(Priority::parse(p.as_str()), Some(p));
        }
    }
}
