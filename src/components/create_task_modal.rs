use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::components::modal::Modal;
use crate::error::Error;
use crate::models::{Priority, Project, TaskStatus, User};
use crate::services::{NewTask, Services};
use crate::state::FlashState;

/// Turn the raw form strings into a create request; any missing required
/// field is a validation error and nothing is sent.
fn parse_form(
    title: &str,
    description: &str,
    project_id: &str,
    assignee_id: &str,
    priority: &str,
    due_date: &str,
    created_by: u64,
) -> crate::error::Result<NewTask> {
    let title = title.trim();
    let project = project_id.parse::<u64>().ok();
    let assignee = assignee_id.parse::<u64>().ok();
    let due = NaiveDate::parse_from_str(due_date, "%Y-%m-%d").ok();
    let (Some(project_id), Some(assignee_id), Some(due_date)) = (project, assignee, due) else {
        return Err(Error::required_fields());
    };
    if title.is_empty() {
        return Err(Error::required_fields());
    }
    Ok(NewTask {
        title: title.to_string(),
        description: description.trim().to_string(),
        project_id,
        assignee_id,
        priority: Priority::parse(priority).unwrap_or(Priority::Medium),
        status: TaskStatus::Todo,
        due_date,
        created_by,
    })
}

#[component]
pub fn CreateTaskModal(
    projects: Vec<Project>,
    users: Vec<User>,
    current_user: User,
    default_project: Option<u64>,
    on_close: EventHandler<()>,
    on_created: EventHandler<()>,
) -> Element {
    let services = use_context::<Services>();
    let flash = use_context::<FlashState>();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut project_id =
        use_signal(|| default_project.map(|id| id.to_string()).unwrap_or_default());
    let mut assignee_id = use_signal(String::new);
    let mut priority = use_signal(|| Priority::Medium.as_str().to_string());
    let mut due_date = use_signal(String::new);

    let created_by = current_user.id;
    let submit = move |_| {
        let data = match parse_form(
            &title.read(),
            &description.read(),
            &project_id.read(),
            &assignee_id.read(),
            &priority.read(),
            &due_date.read(),
            created_by,
        ) {
            Ok(data) => data,
            Err(err) => {
                flash.error(err.to_string());
                return;
            }
        };
        let services = services.clone();
        spawn(async move {
            match services.tasks.create(data).await {
                Ok(_) => {
                    flash.success("Task created successfully!");
                    on_created.call(());
                    on_close.call(());
                }
                Err(err) => {
                    tracing::warn!(error = %err, "task create failed");
                    flash.error("Failed to create task");
                }
            }
        });
    };

    rsx! {
        Modal { title: "New Task", on_close: move |_| on_close.call(()),
            div { class: "form",
                label { class: "field-label", "Title *" }
                input { class: "text", r#type: "text", placeholder: "Task title",
                    value: "{title.read()}", oninput: move |e| title.set(e.value()) }

                label { class: "field-label", "Description" }
                textarea { class: "text desc", rows: "3", placeholder: "Describe the work...",
                    value: "{description.read()}", oninput: move |e| description.set(e.value()) }

                label { class: "field-label", "Project *" }
                select { class: "text", value: "{project_id.read()}",
                    onchange: move |e| project_id.set(e.value()),
                    option { value: "", "Select a project" }
                    for p in projects.iter() {
                        option { key: "proj-{p.id}", value: "{p.id}", "{p.title}" }
                    }
                }

                label { class: "field-label", "Assignee *" }
                select { class: "text", value: "{assignee_id.read()}",
                    onchange: move |e| assignee_id.set(e.value()),
                    option { value: "", "Select an assignee" }
                    for u in users.iter() {
                        option { key: "user-{u.id}", value: "{u.id}", "{u.name}" }
                    }
                }

                div { class: "row form-dates",
                    div { class: "field",
                        label { class: "field-label", "Priority" }
                        select { class: "text", value: "{priority.read()}",
                            onchange: move |e| priority.set(e.value()),
                            for p in Priority::ALL {
                                option { key: "prio-{p.as_str()}", value: "{p.as_str()}", "{p.label()}" }
                            }
                        }
                    }
                    div { class: "field",
                        label { class: "field-label", "Due date *" }
                        input { class: "text", r#type: "date",
                            value: "{due_date.read()}", oninput: move |e| due_date.set(e.value()) }
                    }
                }

                div { class: "actions",
                    button { class: "btn btn-primary", onclick: submit, "Create Task" }
                    button { class: "btn btn-ghost", onclick: move |_| on_close.call(()), "Cancel" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_form_is_a_validation_error_before_any_send() {
        for (title, project, assignee, due) in [
            ("", "1", "2", "2024-06-01"),
            ("Ship it", "", "2", "2024-06-01"),
            ("Ship it", "1", "", "2024-06-01"),
            ("Ship it", "1", "2", "not-a-date"),
        ] {
            let err = parse_form(title, "", project, assignee, "medium", due, 1).unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
        }
    }

    #[test]
    fn complete_form_parses_with_defaults() {
        let data = parse_form(" Ship it ", " desc ", "1", "2", "high", "2024-06-01", 9).unwrap();
        assert_eq!(data.title, "Ship it");
        assert_eq!(data.description, "desc");
        assert_eq!(data.project_id, 1);
        assert_eq!(data.assignee_id, 2);
        assert_eq!(data.priority, Priority::High);
        assert_eq!(data.status, TaskStatus::Todo);
        assert_eq!(data.created_by, 9);
    }

    #[test]
    fn unknown_priority_falls_back_to_medium() {
        let data = parse_form("Ship it", "", "1", "2", "urgent", "2024-06-01", 1).unwrap();
        assert_eq!(data.priority, Priority::Medium);
    }
}
