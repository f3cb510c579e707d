use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;

use crate::components::activity_feed::ActivityFeed;
use crate::components::kanban_board::KanbanBoard;
use crate::components::project_card::ProjectCard;
use crate::components::stat_card::StatCard;
use crate::components::task_detail_modal::TaskDetailModal;
use crate::components::ui::Loading;
use crate::models::{Activity, Project, ProjectStatus, Role, Task, TaskStatus, User};
use crate::services::Services;
use crate::session::{use_current_user, Session};
use crate::Route;

type DashboardData = (Vec<User>, Vec<Project>, Vec<Task>, Vec<Activity>);

#[component]
pub fn Dashboard() -> Element {
    let services = use_context::<Services>();
    let session = use_context::<Session>();
    let nav = use_navigator();
    let mut selected_task = use_signal(|| Option::<Task>::None);

    let mut data = use_resource(move || {
        let services = services.clone();
        let user = session.user.read().clone();
        async move {
            let Some(user) = user else {
                return None;
            };
            let users = services.users.get_all().await;
            let projects = services.projects.visible_to(&user).await;
            let tasks = services.tasks.visible_to(&user).await;
            let activities = services.activities.get_recent(10).await;
            Some::<DashboardData>((users, projects, tasks, activities))
        }
    });

    let Some(user) = use_current_user() else {
        return rsx! {
            div { class: "card",
                "Not signed in. "
                Link { to: Route::Login {}, "Go to sign in." }
            }
        };
    };

    rsx! {
        div { class: "page",
            div { class: "page-head",
                h1 { class: "page-title", "Welcome back, {user.name}!" }
                p { class: "meta", "Here's what's happening with your projects today." }
            }
            match &*data.read_unchecked() {
                Some(Some((users, projects, tasks, activities))) => {
                    let count = |status: TaskStatus| {
                        tasks.iter().filter(|t| t.status == Some(status)).count()
                    };
                    let active_projects = projects
                        .iter()
                        .filter(|p| p.status == Some(ProjectStatus::Active))
                        .count();
                    rsx! {
                        match user.role {
                            Role::Admin => rsx! {
                                div { class: "stat-grid",
                                    StatCard { title: "Total Users", value: "{users.len()}", icon: "👥" }
                                    StatCard { title: "Active Projects", value: "{active_projects}", icon: "📁" }
                                    StatCard { title: "Total Tasks", value: "{tasks.len()}", icon: "☑" }
                                    StatCard { title: "Completed", value: "{count(TaskStatus::Completed)}", icon: "✔" }
                                }
                                div { class: "card",
                                    h3 { class: "title", "Users by Role" }
                                    for role in [Role::Admin, Role::ProjectManager, Role::Member] {
                                        div { class: "row between",
                                            span { class: "meta", "{role.label()}s" }
                                            span { class: "item-title",
                                                "{users.iter().filter(|u| u.role == role).count()}"
                                            }
                                        }
                                    }
                                }
                                div { class: "card",
                                    h3 { class: "title", "Recent Activity" }
                                    ActivityFeed { activities: activities.clone(), users: users.clone() }
                                }
                                div { class: "card",
                                    h3 { class: "title", "Recent Projects" }
                                    div { class: "card-grid",
                                        for project in projects.iter().take(3).cloned() {
                                            {
                                                let id = project.id;
                                                let manager =
                                                    users.iter().find(|u| u.id == project.manager_id).cloned();
                                                let team: Vec<User> = users
                                                    .iter()
                                                    .filter(|u| project.team_members.contains(&u.id))
                                                    .cloned()
                                                    .collect();
                                                let project_tasks: Vec<Task> = tasks
                                                    .iter()
                                                    .filter(|t| t.project_id == id)
                                                    .cloned()
                                                    .collect();
                                                rsx! {
                                                    ProjectCard {
                                                        key: "project-{id}",
                                                        project,
                                                        manager,
                                                        team,
                                                        tasks: project_tasks,
                                                        on_click: move |_| { nav.push(Route::ProjectDetail { id }); },
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            },
                            Role::ProjectManager => rsx! {
                                div { class: "stat-grid",
                                    StatCard { title: "My Projects", value: "{projects.len()}", icon: "📁" }
                                    StatCard { title: "Active Projects", value: "{active_projects}", icon: "📈" }
                                    StatCard { title: "In Progress", value: "{count(TaskStatus::InProgress)}", icon: "◔" }
                                    StatCard { title: "Completed", value: "{count(TaskStatus::Completed)}", icon: "✔" }
                                }
                                div { class: "card",
                                    h3 { class: "title", "My Projects" }
                                    div { class: "card-grid",
                                        for project in projects.iter().cloned() {
                                            {
                                                let id = project.id;
                                                let manager =
                                                    users.iter().find(|u| u.id == project.manager_id).cloned();
                                                let team: Vec<User> = users
                                                    .iter()
                                                    .filter(|u| project.team_members.contains(&u.id))
                                                    .cloned()
                                                    .collect();
                                                let project_tasks: Vec<Task> = tasks
                                                    .iter()
                                                    .filter(|t| t.project_id == id)
                                                    .cloned()
                                                    .collect();
                                                rsx! {
                                                    ProjectCard {
                                                        key: "project-{id}",
                                                        project,
                                                        manager,
                                                        team,
                                                        tasks: project_tasks,
                                                        on_click: move |_| { nav.push(Route::ProjectDetail { id }); },
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                                div { class: "card",
                                    h3 { class: "title", "Recent Activity" }
                                    ActivityFeed { activities: activities.clone(), users: users.clone() }
                                }
                            },
                            Role::Member => rsx! {
                                div { class: "stat-grid",
                                    StatCard { title: "To Do", value: "{count(TaskStatus::Todo)}", icon: "○" }
                                    StatCard { title: "In Progress", value: "{count(TaskStatus::InProgress)}", icon: "◔" }
                                    StatCard { title: "In Review", value: "{count(TaskStatus::InReview)}", icon: "◎" }
                                    StatCard { title: "Completed", value: "{count(TaskStatus::Completed)}", icon: "✔" }
                                }
                                div { class: "card",
                                    h3 { class: "title", "My Tasks" }
                                    KanbanBoard {
                                        tasks: tasks.clone(),
                                        users: users.clone(),
                                        projects: projects.clone(),
                                        on_task_click: move |task| selected_task.set(Some(task)),
                                        on_task_update: move |_| data.restart(),
                                    }
                                }
                            },
                        }
                        if let Some(task) = selected_task.read().clone() {
                            TaskDetailModal {
                                task: task.clone(),
                                project: projects.iter().find(|p| p.id == task.project_id).cloned(),
                                assignee: users.iter().find(|u| u.id == task.assignee_id).cloned(),
                                current_user: user.clone(),
                                on_close: move |_| selected_task.set(None),
                            }
                        }
                    }
                }
                _ => rsx! { Loading {} },
            }
        }
    }
}
