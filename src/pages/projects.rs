use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;

use crate::components::create_project_modal::CreateProjectModal;
use crate::components::project_card::ProjectCard;
use crate::components::search_bar::SearchBar;
use crate::components::ui::{Empty, Loading};
use crate::models::{ProjectStatus, Task, User};
use crate::services::Services;
use crate::session::{use_current_user, Session};
use crate::visibility::can_create_projects;
use crate::Route;

#[component]
pub fn Projects() -> Element {
    let services = use_context::<Services>();
    let session = use_context::<Session>();
    let nav = use_navigator();

    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(|| "all".to_string());
    let mut create_open = use_signal(|| false);

    let mut data = use_resource(move || {
        let services = services.clone();
        let user = session.user.read().clone();
        async move {
            let Some(user) = user else {
                return None;
            };
            let projects = services.projects.visible_to(&user).await;
            let tasks = services.tasks.visible_to(&user).await;
            let users = services.users.get_all().await;
            Some((projects, tasks, users))
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
    let can_create = can_create_projects(user.role);

    rsx! {
        div { class: "page",
            div { class: "row between page-head",
                div {
                    h1 { class: "page-title", "Projects" }
                    p { class: "meta", "Manage and track all your projects" }
                }
                if can_create {
                    button { class: "btn btn-primary", onclick: move |_| create_open.set(true),
                        "+ New Project"
                    }
                }
            }

            div { class: "card filters",
                SearchBar {
                    value: search.read().clone(),
                    placeholder: "Search projects...",
                    on_input: move |e: FormEvent| search.set(e.value()),
                }
                select { class: "text filter-select", value: "{status_filter.read()}",
                    onchange: move |e| status_filter.set(e.value()),
                    option { value: "all", "All Statuses" }
                    for s in ProjectStatus::ALL {
                        option { key: "st-{s.as_str()}", value: "{s.as_str()}", "{s.label()}" }
                    }
                }
            }

            match &*data.read_unchecked() {
                Some(Some((projects, tasks, users))) => {
                    let query = search.read().to_lowercase();
                    let status = ProjectStatus::parse(&status_filter.read());
                    let filtered: Vec<_> = projects
                        .iter()
                        .filter(|p| p.title.to_lowercase().contains(&query))
                        .filter(|p| status.is_none() || p.status == status)
                        .cloned()
                        .collect();
                    rsx! {
                        if filtered.is_empty() {
                            Empty {
                                title: "No projects found",
                                message: "Try adjusting your search or create a new project",
                            }
                        } else {
                            div { class: "card-grid",
                                for project in filtered.into_iter() {
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
                        if *create_open.read() {
                            CreateProjectModal {
                                users: users.clone(),
                                current_user: user.clone(),
                                on_close: move |_| create_open.set(false),
                                on_created: move |_| data.restart(),
                            }
                        }
                    }
                }
                _ => rsx! { Loading {} },
            }
        }
    }
}
