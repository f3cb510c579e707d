use chrono::Utc;
use dioxus::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::badges::{PriorityBadge, TaskStatusBadge};
use crate::components::modal::Modal;
use crate::models::{Project, Task, TaskStatus, User};
use crate::services::Services;
use crate::state::FlashState;

#[component]
pub fn TaskDetailModal(
    task: Task,
    project: Option<Project>,
    assignee: Option<User>,
    current_user: User,
    on_close: EventHandler<()>,
) -> Element {
    let services = use_context::<Services>();
    let flash = use_context::<FlashState>();
    let mut new_comment = use_signal(String::new);

    let task_id = task.id;
    let comments_svc = services.clone();
    let mut comments = use_resource(move || {
        let services = comments_svc.clone();
        async move {
            let comments = services.comments.get_by_task(task_id).await;
            let users = services.users.get_all().await;
            (comments, users)
        }
    });

    let author_id = current_user.id;
    let add_comment = move |_| {
        let content = new_comment.read().trim().to_string();
        if content.is_empty() {
            return;
        }
        let services = services.clone();
        spawn(async move {
            match services.comments.create(task_id, author_id, content).await {
                Ok(_) => {
                    flash.success("Comment added successfully!");
                    new_comment.set(String::new());
                    comments.restart();
                }
                Err(err) => {
                    tracing::warn!(task = task_id, error = %err, "comment create failed");
                    flash.error("Failed to add comment");
                }
            }
        });
    };

    let overdue = task.due_date.is_some_and(|due| {
        due < Utc::now().date_naive() && task.status != Some(TaskStatus::Completed)
    });
    let due_label = task
        .due_date
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let project_label = project.map(|p| p.title).unwrap_or_else(|| "N/A".to_string());

    rsx! {
        Modal { title: "Task Details", on_close: move |_| on_close.call(()),
            div { class: "task-detail",
                h3 { class: "title", "{task.title}" }
                div { class: "row",
                    TaskStatusBadge { status: task.status }
                    PriorityBadge { priority: task.priority }
                }
                p { class: "desc", "{task.description}" }

                div { class: "detail-grid",
                    div { class: "field",
                        label { class: "field-label", "Project" }
                        span { "{project_label}" }
                    }
                    div { class: "field",
                        label { class: "field-label", "Assigned To" }
                        if let Some(a) = assignee {
                            div { class: "row",
                                Avatar { src: a.avatar.clone(), alt: a.name.clone(), small: true }
                                span { "{a.name}" }
                            }
                        } else {
                            span { class: "meta", "Unassigned" }
                        }
                    }
                    div { class: "field",
                        label { class: "field-label", "Due Date" }
                        span { class: if overdue { "overdue" } else { "" },
                            "{due_label}"
                            if overdue { " · Overdue" }
                        }
                    }
                }

                h4 { class: "title", "Comments" }
                match &*comments.read_unchecked() {
                    None => rsx! { p { class: "meta", "Loading comments..." } },
                    Some((list, users)) => rsx! {
                        if list.is_empty() {
                            p { class: "meta", "No comments yet." }
                        } else {
                            ul { class: "feed",
                                for comment in list.iter() {
                                    {
                                        let author = users.iter().find(|u| u.id == comment.user_id);
                                        let name = author
                                            .map(|u| u.name.clone())
                                            .unwrap_or_else(|| "Unknown".to_string());
                                        let avatar = author.map(|u| u.avatar.clone()).unwrap_or_default();
                                        let when = comment
                                            .created_at
                                            .map(|t| t.format("%b %d, %H:%M").to_string())
                                            .unwrap_or_default();
                                        rsx! {
                                            li { key: "comment-{comment.id}", class: "feed-item",
                                                Avatar { src: avatar, alt: name.clone(), small: true }
                                                div { class: "feed-body",
                                                    span { span { class: "item-title", "{name}" } " {comment.content}" }
                                                    span { class: "meta", "{when}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                }

                div { class: "row comment-form",
                    textarea { class: "text", rows: "2", placeholder: "Add a comment...",
                        value: "{new_comment.read()}", oninput: move |e| new_comment.set(e.value()) }
                    button { class: "btn btn-primary", onclick: add_comment, "Post" }
                }
            }
        }
    }
}
