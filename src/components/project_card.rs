use dioxus::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::badges::ProjectStatusBadge;
use crate::models::{Project, Task, TaskStatus, User};

#[component]
pub fn ProjectCard(
    project: Project,
    manager: Option<User>,
    team: Vec<User>,
    tasks: Vec<Task>,
    on_click: EventHandler<()>,
) -> Element {
    let total = tasks.len();
    let done = tasks
        .iter()
        .filter(|t| t.status == Some(TaskStatus::Completed))
        .count();
    let percent = if total == 0 { 0 } else { done * 100 / total };
    let manager_label = manager.map(|m| m.name).unwrap_or_else(|| "Unknown".to_string());
    let dates = match (project.start_date, project.end_date) {
        (Some(start), Some(end)) => {
            format!("{} – {}", start.format("%b %d, %Y"), end.format("%b %d, %Y"))
        }
        _ => "N/A".to_string(),
    };

    rsx! {
        div { class: "card project-card", onclick: move |_| on_click.call(()),
            div { class: "row between",
                h3 { class: "item-title", "{project.title}" }
                ProjectStatusBadge { status: project.status }
            }
            p { class: "meta", "{project.description}" }
            div { class: "progress",
                div { class: "progress-fill", style: "width:{percent}%;" }
            }
            div { class: "meta", "{done}/{total} tasks completed" }
            div { class: "row between project-card-foot",
                span { class: "meta", "Manager: {manager_label}" }
                div { class: "avatar-stack",
                    for member in team.iter().take(4) {
                        Avatar {
                            key: "member-{member.id}",
                            src: member.avatar.clone(),
                            alt: member.name.clone(),
                            small: true,
                        }
                    }
                    if team.len() > 4 {
                        span { class: "meta", "+{team.len() - 4}" }
                    }
                }
            }
            div { class: "meta", "{dates}" }
        }
    }
}
