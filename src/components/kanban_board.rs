use dioxus::prelude::*;

use crate::components::task_card::TaskCard;
use crate::kanban::{plan_drop, tasks_in_column, COLUMNS};
use crate::models::{Project, Task, TaskStatus, User};
use crate::services::Services;
use crate::state::FlashState;

#[component]
pub fn KanbanBoard(
    tasks: Vec<Task>,
    users: Vec<User>,
    projects: Vec<Project>,
    on_task_click: EventHandler<Task>,
    on_task_update: EventHandler<()>,
) -> Element {
    let services = use_context::<Services>();
    let flash = use_context::<FlashState>();
    // One drag at a time; a drop always clears it before anything async runs.
    let mut dragged = use_signal(|| Option::<Task>::None);

    // Callback rather than a bare closure: every column's ondrop shares it.
    let on_drop_column = use_callback(move |target: TaskStatus| {
        let Some(task) = dragged.read().clone() else { return };
        dragged.set(None);
        let Some(next) = plan_drop(task.status, target) else { return };
        let services = services.clone();
        spawn(async move {
            match services.tasks.update_status(task.id, next).await {
                Ok(_) => {
                    flash.success(format!("Task moved to {}", next.label()));
                    on_task_update.call(());
                }
                Err(err) => {
                    tracing::warn!(task = task.id, error = %err, "status update failed");
                    flash.error("Failed to update task status");
                }
            }
        });
    });

    rsx! {
        div { class: "board",
            for column in COLUMNS.iter() {
                {
                    let status = column.status;
                    let column_tasks = tasks_in_column(&tasks, status);
                    let count = column_tasks.len();
                    rsx! {
                        div {
                            key: "{status.as_str()}",
                            class: "board-column {column.class}",
                            ondragover: move |e: DragEvent| e.prevent_default(),
                            ondrop: move |_| on_drop_column.call(status),
                            div { class: "row board-column-head",
                                span { class: "column-icon", "{column.icon}" }
                                div {
                                    h3 { class: "title", "{column.title}" }
                                    p { class: "meta", "{count} tasks" }
                                }
                            }
                            div { class: "board-column-body",
                                for task in column_tasks.into_iter() {
                                    {
                                        let assignee =
                                            users.iter().find(|u| u.id == task.assignee_id).cloned();
                                        let project =
                                            projects.iter().find(|p| p.id == task.project_id).cloned();
                                        let for_click = task.clone();
                                        let for_drag = task.clone();
                                        rsx! {
                                            TaskCard {
                                                key: "task-{task.id}",
                                                task: task.clone(),
                                                assignee,
                                                project,
                                                on_click: move |_| on_task_click.call(for_click.clone()),
                                                on_drag_start: move |_| dragged.set(Some(for_drag.clone())),
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
