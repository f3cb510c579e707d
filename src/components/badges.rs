//! Badge components. Values that failed to decode match no label and render
//! nothing instead of crashing the view.

use dioxus::prelude::*;

use crate::models::{Priority, ProjectStatus, Role, TaskStatus};

#[component]
pub fn ProjectStatusBadge(status: Option<ProjectStatus>) -> Element {
    let Some(status) = status else { return rsx! {} };
    let class = match status {
        ProjectStatus::Planning => "badge badge-muted",
        ProjectStatus::Active => "badge badge-success",
        ProjectStatus::OnHold => "badge badge-warning",
        ProjectStatus::Completed => "badge badge-primary",
    };
    rsx! { span { class: "{class}", "{status.label()}" } }
}

#[component]
pub fn TaskStatusBadge(status: Option<TaskStatus>) -> Element {
    let Some(status) = status else { return rsx! {} };
    let class = match status {
        TaskStatus::Todo => "badge badge-muted",
        TaskStatus::InProgress => "badge badge-warning",
        TaskStatus::InReview => "badge badge-primary",
        TaskStatus::Completed => "badge badge-success",
    };
    rsx! { span { class: "{class}", "{status.label()}" } }
}

#[component]
pub fn PriorityBadge(priority: Option<Priority>) -> Element {
    let Some(priority) = priority else { return rsx! {} };
    let class = match priority {
        Priority::Low => "badge badge-muted",
        Priority::Medium => "badge badge-warning",
        Priority::High => "badge badge-danger",
    };
    rsx! { span { class: "{class}", "{priority.label()}" } }
}

#[component]
pub fn RoleBadge(role: Role) -> Element {
    let class = match role {
        Role::Admin => "badge badge-danger",
        Role::ProjectManager => "badge badge-primary",
        Role::Member => "badge badge-muted",
    };
    rsx! { span { class: "{class}", "{role.label()}" } }
}
