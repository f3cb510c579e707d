//! Role-based visibility and permission rules. Pure predicates over already
//! fetched collections; the gateways' `visible_to` helpers apply the same
//! rules when choosing a query, so pages never re-encode the role switch.

use crate::models::{Project, Role, Task, User};

pub fn project_visible(role: Role, user_id: u64, project: &Project) -> bool {
    match role {
        Role::Admin => true,
        Role::ProjectManager => project.manager_id == user_id,
        Role::Member => project.team_members.contains(&user_id),
    }
}

/// Members see only their own assignments. Admins and project managers see
/// every task; manager visibility is intentionally not narrowed to their own
/// projects' tasks, matching the project-scoping asymmetry of the live app.
pub fn task_visible(role: Role, user_id: u64, task: &Task) -> bool {
    match role {
        Role::Member => task.assignee_id == user_id,
        Role::Admin | Role::ProjectManager => true,
    }
}

pub fn visible_projects(role: Role, user_id: u64, projects: &[Project]) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| project_visible(role, user_id, p))
        .cloned()
        .collect()
}

pub fn visible_tasks(role: Role, user_id: u64, tasks: &[Task]) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| task_visible(role, user_id, t))
        .cloned()
        .collect()
}

pub fn can_create_projects(role: Role) -> bool {
    matches!(role, Role::Admin | Role::ProjectManager)
}

pub fn can_create_tasks(role: Role) -> bool {
    matches!(role, Role::Admin | Role::ProjectManager)
}

pub fn can_manage_users(role: Role) -> bool {
    matches!(role, Role::Admin)
}

/// Admins manage accounts but may not delete their own.
pub fn can_delete_user(actor: &User, target: &User) -> bool {
    actor.role == Role::Admin && actor.id != target.id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProjectStatus, TaskStatus};

    fn project(id: u64, manager_id: u64, team_members: Vec<u64>) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: String::new(),
            manager_id,
            status: Some(ProjectStatus::Active),
            start_date: None,
            end_date: None,
            team_members,
            created_at: None,
        }
    }

    fn task(id: u64, project_id: u64, assignee_id: u64) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            description: String::new(),
            project_id,
            assignee_id,
            priority: None,
            status: Some(TaskStatus::Todo),
            due_date: None,
            created_by: 1,
            created_at: None,
        }
    }

    fn user(id: u64, role: Role) -> User {
        User {
            id,
            name: format!("User {id}"),
            email: format!("u{id}@example.com"),
            role,
            avatar: String::new(),
            created_at: None,
        }
    }

    #[test]
    fn admin_sees_all_projects() {
        let projects = vec![project(1, 5, vec![]), project(2, 6, vec![7])];
        assert_eq!(visible_projects(Role::Admin, 99, &projects).len(), 2);
    }

    #[test]
    fn manager_sees_only_managed_projects() {
        let projects = vec![project(1, 5, vec![]), project(2, 6, vec![5])];
        let visible = visible_projects(Role::ProjectManager, 5, &projects);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn member_sees_only_projects_containing_them() {
        let projects = vec![
            project(1, 5, vec![7, 8]),
            project(2, 5, vec![8]),
            project(3, 7, vec![]),
        ];
        let visible = visible_projects(Role::Member, 7, &projects);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn member_sees_only_assigned_tasks() {
        let tasks = vec![task(1, 1, 7), task(2, 1, 8), task(3, 2, 7)];
        let visible = visible_tasks(Role::Member, 7, &tasks);
        assert_eq!(
            visible.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    // Documents the observed asymmetry: a manager's project list is scoped to
    // the projects they manage, but their task list is not scoped at all.
    #[test]
    fn manager_sees_tasks_outside_their_projects() {
        let tasks = vec![task(1, 1, 7), task(2, 99, 8)];
        assert_eq!(visible_tasks(Role::ProjectManager, 5, &tasks).len(), 2);
    }

    #[test]
    fn creation_permissions_follow_role() {
        assert!(can_create_projects(Role::Admin));
        assert!(can_create_projects(Role::ProjectManager));
        assert!(!can_create_projects(Role::Member));
        assert!(can_create_tasks(Role::ProjectManager));
        assert!(!can_create_tasks(Role::Member));
        assert!(can_manage_users(Role::Admin));
        assert!(!can_manage_users(Role::ProjectManager));
    }

    #[test]
    fn admin_cannot_delete_own_account() {
        let admin = user(1, Role::Admin);
        let other = user(2, Role::Member);
        assert!(can_delete_user(&admin, &other));
        assert!(!can_delete_user(&admin, &admin));
        assert!(!can_delete_user(&other, &admin));
    }
}
