//! Gateway tests against the in-memory store, using the demo data set:
//! Ava (admin, id 1), Marcus (project manager, id 2), Priya and Jonas
//! (members, ids 3 and 4), one project managed by Marcus with Priya and
//! Jonas on the team, and three tasks in that project.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;

use taskflow::error::Error;
use taskflow::models::{EntityKind, ProjectStatus, Role, TaskStatus};
use taskflow::services::{NewProject, NewTask, NewUser, Services, TaskPatch, UserPatch};
use taskflow::store::{MemoryStore, Record, RecordStore};

fn demo() -> Services {
    Services::new(Arc::new(MemoryStore::with_demo_data()))
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn get_by_id_misses_report_the_entity_name() {
    let services = demo();
    assert!(matches!(
        services.users.get_by_id(99).await,
        Err(Error::NotFound("User"))
    ));
    assert!(matches!(
        services.projects.get_by_id(99).await,
        Err(Error::NotFound("Project"))
    ));
    assert!(matches!(
        services.tasks.get_by_id(99).await,
        Err(Error::NotFound("Task"))
    ));
    assert!(matches!(
        services.comments.get_by_id(99).await,
        Err(Error::NotFound("Comment"))
    ));
}

#[tokio::test]
async fn update_and_delete_missing_records_fail() {
    let services = demo();
    let err = services.users.delete(99).await.unwrap_err();
    assert!(matches!(err, Error::NotFound("User")));
    let err = services
        .tasks
        .update(99, TaskPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound("Task")));
}

#[tokio::test]
async fn created_project_gets_an_id_and_round_trips() {
    let services = demo();
    let created = services
        .projects
        .create(NewProject {
            title: "Mobile App".into(),
            description: "Companion app".into(),
            manager_id: 2,
            status: ProjectStatus::Planning,
            start_date: date("2024-03-01"),
            end_date: date("2024-09-01"),
            team_members: vec![3],
        })
        .await
        .unwrap();
    assert_eq!(created.id, 2);
    assert_eq!(created.status, Some(ProjectStatus::Planning));
    assert_eq!(created.team_members, vec![3]);

    let fetched = services.projects.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched.title, "Mobile App");
    assert_eq!(fetched.start_date, Some(date("2024-03-01")));
}

#[tokio::test]
async fn add_team_member_is_idempotent() {
    let services = demo();
    let updated = services.projects.add_team_member(1, 1).await.unwrap();
    assert_eq!(updated.team_members, vec![3, 4, 1]);

    let again = services.projects.add_team_member(1, 1).await.unwrap();
    assert_eq!(again.team_members, vec![3, 4, 1]);
}

#[tokio::test]
async fn remove_team_member_keeps_the_rest() {
    let services = demo();
    let updated = services.projects.remove_team_member(1, 3).await.unwrap();
    assert_eq!(updated.team_members, vec![4]);

    // Title and status survive the members-only update.
    assert_eq!(updated.title, "Website Relaunch");
    assert_eq!(updated.status, Some(ProjectStatus::Active));
}

#[tokio::test]
async fn project_visibility_follows_role() {
    let services = demo();
    let admin = services.users.get_by_id(1).await.unwrap();
    let manager = services.users.get_by_id(2).await.unwrap();
    let member = services.users.get_by_id(3).await.unwrap();

    // A second project Marcus does not manage and Priya is not on.
    services
        .projects
        .create(NewProject {
            title: "Internal Tools".into(),
            description: String::new(),
            manager_id: 1,
            status: ProjectStatus::Planning,
            start_date: date("2024-04-01"),
            end_date: date("2024-05-01"),
            team_members: vec![4],
        })
        .await
        .unwrap();

    assert_eq!(services.projects.visible_to(&admin).await.len(), 2);

    let managed = services.projects.visible_to(&manager).await;
    assert_eq!(managed.len(), 1);
    assert_eq!(managed[0].manager_id, manager.id);

    let joined = services.projects.visible_to(&member).await;
    assert_eq!(joined.len(), 1);
    assert!(joined[0].team_members.contains(&member.id));
}

#[tokio::test]
async fn members_only_see_their_assigned_tasks() {
    let services = demo();
    let manager = services.users.get_by_id(2).await.unwrap();
    let member = services.users.get_by_id(3).await.unwrap();

    let all = services.tasks.visible_to(&manager).await;
    assert_eq!(all.len(), 3);

    let mine = services.tasks.visible_to(&member).await;
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|t| t.assignee_id == member.id));
}

#[tokio::test]
async fn update_status_leaves_other_fields_alone() {
    let services = demo();
    let before = services.tasks.get_by_id(1).await.unwrap();
    assert_eq!(before.status, Some(TaskStatus::Todo));

    let after = services
        .tasks
        .update_status(1, TaskStatus::InProgress)
        .await
        .unwrap();
    assert_eq!(after.status, Some(TaskStatus::InProgress));
    assert_eq!(after.title, before.title);
    assert_eq!(after.priority, before.priority);
    assert_eq!(after.assignee_id, before.assignee_id);
}

#[tokio::test]
async fn reassign_changes_only_the_assignee() {
    let services = demo();
    let after = services.tasks.reassign(2, 3).await.unwrap();
    assert_eq!(after.assignee_id, 3);
    assert_eq!(after.title, "Build hero component");
}

#[tokio::test]
async fn created_task_lands_in_its_project() {
    let services = demo();
    services
        .tasks
        .create(NewTask {
            title: "Write launch post".into(),
            description: String::new(),
            project_id: 1,
            assignee_id: 4,
            priority: taskflow::models::Priority::Medium,
            status: TaskStatus::Todo,
            due_date: date("2024-06-01"),
            created_by: 2,
        })
        .await
        .unwrap();
    assert_eq!(services.tasks.get_by_project(1).await.len(), 4);
    assert_eq!(services.tasks.get_by_assignee(4).await.len(), 2);
}

#[tokio::test]
async fn unknown_role_falls_back_to_member() {
    let store = Arc::new(MemoryStore::new());
    let mut record = Record::new();
    record.insert("name_c".into(), json!("Mystery"));
    record.insert("email_c".into(), json!("mystery@taskflow.dev"));
    record.insert("role_c".into(), json!("superuser"));
    record.insert("avatar_c".into(), json!(""));
    let created = store.create("user_c", record).await.unwrap();
    let id = created["Id"].as_u64().unwrap();

    let services = Services::new(store);
    let user = services.users.get_by_id(id).await.unwrap();
    assert_eq!(user.role, Role::Member);
}

#[tokio::test]
async fn user_create_defaults_avatar_and_update_patches_role() {
    let services = demo();
    let created = services
        .users
        .create(NewUser {
            name: "Lena Park".into(),
            email: "lena@taskflow.dev".into(),
            role: Role::Member,
            avatar: None,
        })
        .await
        .unwrap();
    assert!(created.avatar.contains("dicebear"));

    let updated = services
        .users
        .update(
            created.id,
            UserPatch {
                role: Some(Role::ProjectManager),
                ..UserPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.role, Role::ProjectManager);
    assert_eq!(updated.email, "lena@taskflow.dev");
}

#[tokio::test]
async fn comments_are_scoped_to_their_task() {
    let services = demo();
    services
        .comments
        .create(1, 3, "Copy draft is ready for review".into())
        .await
        .unwrap();
    services
        .comments
        .create(2, 4, "Hero needs the new imagery".into())
        .await
        .unwrap();

    let on_task = services.comments.get_by_task(1).await;
    assert_eq!(on_task.len(), 1);
    assert_eq!(on_task[0].user_id, 3);
    assert!(services.comments.get_by_task(99).await.is_empty());

    services.comments.delete(on_task[0].id).await.unwrap();
    assert!(services.comments.get_by_task(1).await.is_empty());
}

#[tokio::test]
async fn recent_activities_are_newest_first_and_limited() {
    let services = demo();
    for i in 0..5u64 {
        services
            .activities
            .create(1, format!("update {i}"), EntityKind::Project, 1)
            .await
            .unwrap();
    }

    let recent = services.activities.get_recent(3).await;
    assert_eq!(recent.len(), 3);
    // Ids increase with insertion order and timestamps are monotone, so the
    // newest entry carries the highest id.
    assert!(recent[0].id >= recent[1].id);

    let for_project = services
        .activities
        .get_by_entity(EntityKind::Project, 1)
        .await;
    assert_eq!(for_project.len(), 5);
    assert!(services
        .activities
        .get_by_entity(EntityKind::Task, 1)
        .await
        .is_empty());
}

#[tokio::test]
async fn field_filters_match_the_stored_column() {
    let services = demo();

    let members = services.users.get_by_role(Role::Member).await;
    assert_eq!(members.len(), 2);
    assert!(members.iter().all(|u| u.role == Role::Member));

    let high = services
        .tasks
        .get_by_priority(taskflow::models::Priority::High)
        .await;
    assert_eq!(high.len(), 1);
    assert_eq!(high[0].title, "Build hero component");

    let active = services.projects.get_by_status(ProjectStatus::Active).await;
    assert_eq!(active.len(), 1);

    services
        .activities
        .create(2, "created a task".into(), EntityKind::Task, 1)
        .await
        .unwrap();
    let by_user = services.activities.get_by_user(2).await;
    assert_eq!(by_user.len(), 1);
    assert!(services.activities.get_by_user(99).await.is_empty());
}

#[tokio::test]
async fn reads_on_an_empty_store_return_empty_collections() {
    let services = Services::new(Arc::new(MemoryStore::new()));
    assert!(services.users.get_all().await.is_empty());
    assert!(services.projects.get_all().await.is_empty());
    assert!(services.tasks.get_by_status(TaskStatus::Todo).await.is_empty());
    assert!(services.activities.get_recent(10).await.is_empty());
}
