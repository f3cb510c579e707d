use chrono::Utc;
use dioxus::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::badges::PriorityBadge;
use crate::models::{Project, Task, TaskStatus, User};

#[component]
pub fn TaskCard(
    task: Task,
    assignee: Option<User>,
    project: Option<Project>,
    on_click: EventHandler<()>,
    on_drag_start: EventHandler<()>,
) -> Element {
    let overdue = task.due_date.is_some_and(|due| {
        due < Utc::now().date_naive() && task.status != Some(TaskStatus::Completed)
    });
    let due_label = task
        .due_date
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let project_label = project.map(|p| p.title).unwrap_or_else(|| "N/A".to_string());

    rsx! {
        div {
            class: "card task-card",
            draggable: "true",
            ondragstart: move |_| on_drag_start.call(()),
            onclick: move |_| on_click.call(()),
            div { class: "row between",
                span { class: "item-title", "{task.title}" }
                PriorityBadge { priority: task.priority }
            }
            div { class: "meta", "{project_label}" }
            div { class: "row between task-card-foot",
                if let Some(a) = assignee {
                    div { class: "row",
                        Avatar { src: a.avatar.clone(), alt: a.name.clone(), small: true }
                        span { class: "meta", "{a.name}" }
                    }
                } else {
                    span { class: "meta", "Unassigned" }
                }
                span { class: if overdue { "meta overdue" } else { "meta" },
                    "{due_label}"
                    if overdue { " · Overdue" }
                }
            }
        }
    }
}
