use dioxus::prelude::*;

use crate::components::create_task_modal::CreateTaskModal;
use crate::components::kanban_board::KanbanBoard;
use crate::components::search_bar::SearchBar;
use crate::components::task_detail_modal::TaskDetailModal;
use crate::components::ui::{Empty, Loading};
use crate::models::{Priority, Task};
use crate::services::Services;
use crate::session::{use_current_user, Session};
use crate::visibility::can_create_tasks;
use crate::Route;

#[component]
pub fn Tasks() -> Element {
    let services = use_context::<Services>();
    let session = use_context::<Session>();

    let mut search = use_signal(String::new);
    let mut priority_filter = use_signal(|| "all".to_string());
    let mut project_filter = use_signal(|| "all".to_string());
    let mut create_open = use_signal(|| false);
    let mut selected_task = use_signal(|| Option::<Task>::None);

    let mut data = use_resource(move || {
        let services = services.clone();
        let user = session.user.read().clone();
        async move {
            let Some(user) = user else {
                return None;
            };
            let tasks = services.tasks.visible_to(&user).await;
            let projects = services.projects.visible_to(&user).await;
            let users = services.users.get_all().await;
            Some((tasks, projects, users))
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
    let can_create = can_create_tasks(user.role);

    rsx! {
        div { class: "page",
            div { class: "row between page-head",
                div {
                    h1 { class: "page-title", "Tasks" }
                    p { class: "meta", "Track and manage tasks across all your projects" }
                }
                if can_create {
                    button { class: "btn btn-primary", onclick: move |_| create_open.set(true),
                        "+ New Task"
                    }
                }
            }

            match &*data.read_unchecked() {
                Some(Some((tasks, projects, users))) => {
                    let query = search.read().to_lowercase();
                    let priority = Priority::parse(&priority_filter.read());
                    let project_id = project_filter.read().parse::<u64>().ok();
                    let filtered: Vec<Task> = tasks
                        .iter()
                        .filter(|t| t.title.to_lowercase().contains(&query))
                        .filter(|t| priority.is_none() || t.priority == priority)
                        .filter(|t| project_id.is_none_or(|id| t.project_id == id))
                        .cloned()
                        .collect();
                    rsx! {
                        div { class: "card filters",
                            SearchBar {
                                value: search.read().clone(),
                                placeholder: "Search tasks...",
                                on_input: move |e: FormEvent| search.set(e.value()),
                            }
                            select { class: "text filter-select", value: "{priority_filter.read()}",
                                onchange: move |e| priority_filter.set(e.value()),
                                option { value: "all", "All Priorities" }
                                for p in Priority::ALL {
                                    option { key: "prio-{p.as_str()}", value: "{p.as_str()}", "{p.label()}" }
                                }
                            }
                            select { class: "text filter-select", value: "{project_filter.read()}",
                                onchange: move |e| project_filter.set(e.value()),
                                option { value: "all", "All Projects" }
                                for p in projects.iter() {
                                    option { key: "proj-{p.id}", value: "{p.id}", "{p.title}" }
                                }
                            }
                        }

                        if filtered.is_empty() {
                            Empty {
                                title: "No tasks found",
                                message: "Try adjusting your search or filters",
                            }
                        } else {
                            div { class: "card",
                                KanbanBoard {
                                    tasks: filtered,
                                    users: users.clone(),
                                    projects: projects.clone(),
                                    on_task_click: move |task| selected_task.set(Some(task)),
                                    on_task_update: move |_| data.restart(),
                                }
                            }
                        }

                        if *create_open.read() {
                            CreateTaskModal {
                                projects: projects.clone(),
                                users: users.clone(),
                                current_user: user.clone(),
                                default_project: None,
                                on_close: move |_| create_open.set(false),
                                on_created: move |_| data.restart(),
                            }
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
