use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;

use crate::components::activity_feed::ActivityFeed;
use crate::components::avatar::Avatar;
use crate::components::badges::ProjectStatusBadge;
use crate::components::create_task_modal::CreateTaskModal;
use crate::components::kanban_board::KanbanBoard;
use crate::components::task_detail_modal::TaskDetailModal;
use crate::components::ui::{ErrorView, Loading};
use crate::models::{EntityKind, Role, Task, TaskStatus, User};
use crate::services::Services;
use crate::session::use_current_user;
use crate::state::FlashState;
use crate::visibility::can_create_tasks;
use crate::Route;

#[component]
pub fn ProjectDetail(id: u64) -> Element {
    let services = use_context::<Services>();
    let flash = use_context::<FlashState>();
    let nav = use_navigator();

    let mut create_open = use_signal(|| false);
    let mut selected_task = use_signal(|| Option::<Task>::None);
    let mut new_member = use_signal(String::new);

    let mut data = use_resource(move || {
        let services = services.clone();
        async move {
            let project = services.projects.get_by_id(id).await;
            let tasks = services.tasks.get_by_project(id).await;
            let users = services.users.get_all().await;
            let activities = services.activities.get_by_entity(EntityKind::Project, id).await;
            (project, tasks, users, activities)
        }
    });

    let add_services = use_context::<Services>();
    let add_member = use_callback(move |_: ()| {
        let Ok(member_id) = new_member.read().parse::<u64>() else {
            return;
        };
        let services = add_services.clone();
        spawn(async move {
            match services.projects.add_team_member(id, member_id).await {
                Ok(_) => {
                    flash.success("Team member added");
                    new_member.set(String::new());
                    data.restart();
                }
                Err(err) => {
                    tracing::warn!(project = id, error = %err, "add team member failed");
                    flash.error("Failed to add team member");
                }
            }
        });
    });

    // Shared by every row of the team list, so it has to be a Callback.
    let remove_services = use_context::<Services>();
    let remove_member = use_callback(move |member_id: u64| {
        let services = remove_services.clone();
        spawn(async move {
            match services.projects.remove_team_member(id, member_id).await {
                Ok(_) => {
                    flash.success("Team member removed");
                    data.restart();
                }
                Err(err) => {
                    tracing::warn!(project = id, error = %err, "remove team member failed");
                    flash.error("Failed to remove team member");
                }
            }
        });
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
            button { class: "btn btn-ghost", onclick: move |_| { nav.push(Route::Projects {}); },
                "← Back"
            }
            match &*data.read_unchecked() {
                None => rsx! { Loading {} },
                Some((Err(err), _, _, _)) => rsx! {
                    ErrorView {
                        message: "{err}",
                        on_retry: move |_| data.restart(),
                    }
                },
                Some((Ok(project), tasks, users, activities)) => {
                    let manager = users.iter().find(|u| u.id == project.manager_id);
                    let manager_label = manager
                        .map(|m| m.name.clone())
                        .unwrap_or_else(|| "Unknown".to_string());
                    let done = tasks
                        .iter()
                        .filter(|t| t.status == Some(TaskStatus::Completed))
                        .count();
                    let can_manage_team =
                        user.role == Role::Admin || project.manager_id == user.id;
                    let candidates: Vec<User> = users
                        .iter()
                        .filter(|u| !project.team_members.contains(&u.id))
                        .cloned()
                        .collect();
                    rsx! {
                        div { class: "card",
                            div { class: "row between",
                                h1 { class: "page-title", "{project.title}" }
                                ProjectStatusBadge { status: project.status }
                            }
                            p { class: "meta", "{project.description}" }
                            div { class: "row",
                                span { class: "meta", "Manager: {manager_label}" }
                                span { class: "meta", "{done}/{tasks.len()} tasks completed" }
                            }
                        }

                        div { class: "card",
                            h3 { class: "title", "Team" }
                            ul { class: "list",
                                for member_id in project.team_members.iter().copied() {
                                    {
                                        let member = users.iter().find(|u| u.id == member_id);
                                        let name = member
                                            .map(|u| u.name.clone())
                                            .unwrap_or_else(|| "Unknown".to_string());
                                        let avatar = member.map(|u| u.avatar.clone()).unwrap_or_default();
                                        rsx! {
                                            li { key: "member-{member_id}", class: "list-item",
                                                Avatar { src: avatar, alt: name.clone(), small: true }
                                                div { class: "content",
                                                    span { class: "item-title", "{name}" }
                                                }
                                                if can_manage_team {
                                                    div { class: "actions",
                                                        button {
                                                            class: "btn btn-ghost btn-icon",
                                                            onclick: move |_| remove_member.call(member_id),
                                                            "✕"
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            if can_manage_team {
                                div { class: "row team-add",
                                    select { class: "text", value: "{new_member.read()}",
                                        onchange: move |e| new_member.set(e.value()),
                                        option { value: "", "Add a team member" }
                                        for u in candidates.iter() {
                                            option { key: "cand-{u.id}", value: "{u.id}", "{u.name}" }
                                        }
                                    }
                                    button { class: "btn btn-primary", onclick: move |_| add_member.call(()), "Add" }
                                }
                            }
                        }

                        div { class: "card",
                            div { class: "row between",
                                h3 { class: "title", "Tasks" }
                                if can_create_tasks(user.role) {
                                    button { class: "btn btn-primary", onclick: move |_| create_open.set(true),
                                        "+ New Task"
                                    }
                                }
                            }
                            KanbanBoard {
                                tasks: tasks.clone(),
                                users: users.clone(),
                                projects: vec![project.clone()],
                                on_task_click: move |task| selected_task.set(Some(task)),
                                on_task_update: move |_| data.restart(),
                            }
                        }

                        div { class: "card",
                            h3 { class: "title", "Activity" }
                            ActivityFeed { activities: activities.clone(), users: users.clone() }
                        }

                        if *create_open.read() {
                            CreateTaskModal {
                                projects: vec![project.clone()],
                                users: users.clone(),
                                current_user: user.clone(),
                                default_project: Some(project.id),
                                on_close: move |_| create_open.set(false),
                                on_created: move |_| data.restart(),
                            }
                        }
                        if let Some(task) = selected_task.read().clone() {
                            TaskDetailModal {
                                task: task.clone(),
                                project: Some(project.clone()),
                                assignee: users.iter().find(|u| u.id == task.assignee_id).cloned(),
                                current_user: user.clone(),
                                on_close: move |_| selected_task.set(None),
                            }
                        }
                    }
                }
            }
        }
    }
}
