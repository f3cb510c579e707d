use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::components::modal::Modal;
use crate::error::Error;
use crate::models::{ProjectStatus, Role, User};
use crate::services::{NewProject, Services};
use crate::state::FlashState;

fn parse_form(
    title: &str,
    description: &str,
    manager_id: &str,
    status: &str,
    start_date: &str,
    end_date: &str,
) -> crate::error::Result<NewProject> {
    let title = title.trim();
    let manager = manager_id.parse::<u64>().ok();
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d").ok();
    let end = NaiveDate::parse_from_str(end_date, "%Y-%m-%d").ok();
    let (Some(manager_id), Some(start_date), Some(end_date)) = (manager, start, end) else {
        return Err(Error::required_fields());
    };
    if title.is_empty() {
        return Err(Error::required_fields());
    }
    Ok(NewProject {
        title: title.to_string(),
        description: description.trim().to_string(),
        manager_id,
        status: ProjectStatus::parse(status).unwrap_or(ProjectStatus::Planning),
        start_date,
        end_date,
        team_members: Vec::new(),
    })
}

#[component]
pub fn CreateProjectModal(
    users: Vec<User>,
    current_user: User,
    on_close: EventHandler<()>,
    on_created: EventHandler<()>,
) -> Element {
    let services = use_context::<Services>();
    let flash = use_context::<FlashState>();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut manager_id = use_signal(|| {
        if current_user.role == Role::ProjectManager {
            current_user.id.to_string()
        } else {
            String::new()
        }
    });
    let mut status = use_signal(|| ProjectStatus::Planning.as_str().to_string());
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);

    let managers: Vec<User> = users
        .iter()
        .filter(|u| matches!(u.role, Role::Admin | Role::ProjectManager))
        .cloned()
        .collect();

    let submit = move |_| {
        // Validation happens before any network call.
        let data = match parse_form(
            &title.read(),
            &description.read(),
            &manager_id.read(),
            &status.read(),
            &start_date.read(),
            &end_date.read(),
        ) {
            Ok(data) => data,
            Err(err) => {
                flash.error(err.to_string());
                return;
            }
        };
        let services = services.clone();
        spawn(async move {
            match services.projects.create(data).await {
                Ok(_) => {
                    flash.success("Project created successfully!");
                    on_created.call(());
                    on_close.call(());
                }
                Err(err) => {
                    tracing::warn!(error = %err, "project create failed");
                    flash.error("Failed to create project");
                }
            }
        });
    };

    rsx! {
        Modal { title: "New Project", on_close: move |_| on_close.call(()),
            div { class: "form",
                label { class: "field-label", "Title *" }
                input { class: "text", r#type: "text", placeholder: "Project title",
                    value: "{title.read()}", oninput: move |e| title.set(e.value()) }

                label { class: "field-label", "Description" }
                textarea { class: "text desc", rows: "3", placeholder: "What is this project about?",
                    value: "{description.read()}", oninput: move |e| description.set(e.value()) }

                label { class: "field-label", "Manager *" }
                select { class: "text", value: "{manager_id.read()}",
                    onchange: move |e| manager_id.set(e.value()),
                    option { value: "", "Select a manager" }
                    for m in managers.iter() {
                        option { key: "mgr-{m.id}", value: "{m.id}", "{m.name}" }
                    }
                }

                label { class: "field-label", "Status" }
                select { class: "text", value: "{status.read()}",
                    onchange: move |e| status.set(e.value()),
                    for s in ProjectStatus::ALL {
                        option { key: "st-{s.as_str()}", value: "{s.as_str()}", "{s.label()}" }
                    }
                }

                div { class: "row form-dates",
                    div { class: "field",
                        label { class: "field-label", "Start date *" }
                        input { class: "text", r#type: "date",
                            value: "{start_date.read()}", oninput: move |e| start_date.set(e.value()) }
                    }
                    div { class: "field",
                        label { class: "field-label", "End date *" }
                        input { class: "text", r#type: "date",
                            value: "{end_date.read()}", oninput: move |e| end_date.set(e.value()) }
                    }
                }

                div { class: "actions",
                    button { class: "btn btn-primary", onclick: submit, "Create Project" }
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
    fn missing_manager_or_dates_are_a_validation_error() {
        for (manager, start, end) in [
            ("", "2024-02-01", "2024-06-30"),
            ("2", "", "2024-06-30"),
            ("2", "2024-02-01", "30/06/2024"),
        ] {
            let err = parse_form("Relaunch", "", manager, "planning", start, end).unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
        }
    }

    #[test]
    fn new_projects_start_with_an_empty_team() {
        let data =
            parse_form("Relaunch", "", "2", "active", "2024-02-01", "2024-06-30").unwrap();
        assert_eq!(data.manager_id, 2);
        assert_eq!(data.status, ProjectStatus::Active);
        assert!(data.team_members.is_empty());
    }
}
