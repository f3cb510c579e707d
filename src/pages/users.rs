use dioxus::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::badges::RoleBadge;
use crate::components::modal::Modal;
use crate::components::search_bar::SearchBar;
use crate::components::ui::{Empty, Loading};
use crate::error::Error;
use crate::models::{Role, User};
use crate::services::{NewUser, Services, UserPatch};
use crate::session::use_current_user;
use crate::state::FlashState;
use crate::visibility::{can_delete_user, can_manage_users};
use crate::Route;

fn validate_account(name: &str, email: &str) -> crate::error::Result<()> {
    if name.is_empty() || email.is_empty() {
        return Err(Error::required_fields());
    }
    Ok(())
}

#[component]
pub fn Users() -> Element {
    let services = use_context::<Services>();
    let flash = use_context::<FlashState>();

    let mut search = use_signal(String::new);
    let mut role_filter = use_signal(|| "all".to_string());
    let mut create_open = use_signal(|| false);
    let mut editing = use_signal(|| Option::<User>::None);
    let mut deleting = use_signal(|| Option::<User>::None);

    // One shared form for both the create and edit dialogs.
    let mut form_name = use_signal(String::new);
    let mut form_email = use_signal(String::new);
    let mut form_role = use_signal(|| Role::Member.as_str().to_string());

    let list_services = services.clone();
    let mut data = use_resource(move || {
        let services = list_services.clone();
        async move { services.users.get_all().await }
    });

    let Some(user) = use_current_user() else {
        return rsx! {
            div { class: "card",
                "Not signed in. "
                Link { to: Route::Login {}, "Go to sign in." }
            }
        };
    };
    if !can_manage_users(user.role) {
        return rsx! {
            div { class: "page",
                Empty {
                    title: "Access denied",
                    message: "Only admins can manage user accounts.",
                }
            }
        };
    }

    let mut reset_form = move || {
        form_name.set(String::new());
        form_email.set(String::new());
        form_role.set(Role::Member.as_str().to_string());
    };

    let create_services = services.clone();
    let mut submit_create = move |_| {
        let name = form_name.read().trim().to_string();
        let email = form_email.read().trim().to_string();
        if let Err(err) = validate_account(&name, &email) {
            flash.error(err.to_string());
            return;
        }
        let role = Role::parse(&form_role.read()).unwrap_or(Role::Member);
        let services = create_services.clone();
        spawn(async move {
            match services
                .users
                .create(NewUser { name, email, role, avatar: None })
                .await
            {
                Ok(_) => {
                    flash.success("User created successfully!");
                    create_open.set(false);
                    reset_form();
                    data.restart();
                }
                Err(err) => {
                    tracing::warn!(error = %err, "user create failed");
                    flash.error("Failed to create user");
                }
            }
        });
    };

    let edit_services = services.clone();
    let mut submit_edit = move |_| {
        let Some(target) = editing.read().clone() else { return };
        let name = form_name.read().trim().to_string();
        let email = form_email.read().trim().to_string();
        if let Err(err) = validate_account(&name, &email) {
            flash.error(err.to_string());
            return;
        }
        let patch = UserPatch {
            name: Some(name),
            email: Some(email),
            role: Role::parse(&form_role.read()),
            avatar: None,
        };
        let services = edit_services.clone();
        spawn(async move {
            match services.users.update(target.id, patch).await {
                Ok(_) => {
                    flash.success("User updated successfully!");
                    editing.set(None);
                    reset_form();
                    data.restart();
                }
                Err(err) => {
                    tracing::warn!(user = target.id, error = %err, "user update failed");
                    flash.error("Failed to update user");
                }
            }
        });
    };

    let delete_services = services.clone();
    let mut submit_delete = move |_| {
        let Some(target) = deleting.read().clone() else { return };
        let services = delete_services.clone();
        spawn(async move {
            match services.users.delete(target.id).await {
                Ok(()) => {
                    flash.success("User deleted successfully!");
                    deleting.set(None);
                    data.restart();
                }
                Err(err) => {
                    tracing::warn!(user = target.id, error = %err, "user delete failed");
                    flash.error("Failed to delete user");
                }
            }
        });
    };

    rsx! {
        div { class: "page",
            div { class: "row between page-head",
                div {
                    h1 { class: "page-title", "Users" }
                    p { class: "meta", "Manage user accounts and roles" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| { reset_form(); create_open.set(true); },
                    "+ New User"
                }
            }

            div { class: "card filters",
                SearchBar {
                    value: search.read().clone(),
                    placeholder: "Search by name or email...",
                    on_input: move |e: FormEvent| search.set(e.value()),
                }
                select { class: "text filter-select", value: "{role_filter.read()}",
                    onchange: move |e| role_filter.set(e.value()),
                    option { value: "all", "All Roles" }
                    for r in [Role::Admin, Role::ProjectManager, Role::Member] {
                        option { key: "role-{r.as_str()}", value: "{r.as_str()}", "{r.label()}" }
                    }
                }
            }

            match &*data.read_unchecked() {
                None => rsx! { Loading {} },
                Some(users) => {
                    let query = search.read().to_lowercase();
                    let role = Role::parse(&role_filter.read());
                    let filtered: Vec<User> = users
                        .iter()
                        .filter(|u| {
                            u.name.to_lowercase().contains(&query)
                                || u.email.to_lowercase().contains(&query)
                        })
                        .filter(|u| role.is_none() || Some(u.role) == role)
                        .cloned()
                        .collect();
                    rsx! {
                        if filtered.is_empty() {
                            Empty {
                                title: "No users found",
                                message: "Try adjusting your search or filters",
                            }
                        } else {
                            ul { class: "list card",
                                for account in filtered.into_iter() {
                                    {
                                        let for_edit = account.clone();
                                        let for_delete = account.clone();
                                        let joined = account
                                            .created_at
                                            .map(|t| t.format("%b %d, %Y").to_string())
                                            .unwrap_or_else(|| "N/A".to_string());
                                        let deletable = can_delete_user(&user, &account);
                                        rsx! {
                                            li { key: "user-{account.id}", class: "list-item",
                                                Avatar { src: account.avatar.clone(), alt: account.name.clone(), small: true }
                                                div { class: "content",
                                                    div { class: "item-title", "{account.name}" }
                                                    div { class: "meta", "{account.email} · joined {joined}" }
                                                }
                                                RoleBadge { role: account.role }
                                                div { class: "actions",
                                                    button {
                                                        class: "btn btn-edit btn-icon",
                                                        onclick: move |_| {
                                                            form_name.set(for_edit.name.clone());
                                                            form_email.set(for_edit.email.clone());
                                                            form_role.set(for_edit.role.as_str().to_string());
                                                            editing.set(Some(for_edit.clone()));
                                                        },
                                                        "✎"
                                                    }
                                                    if deletable {
                                                        button {
                                                            class: "btn btn-danger btn-icon",
                                                            onclick: move |_| deleting.set(Some(for_delete.clone())),
                                                            "🗑"
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

            if *create_open.read() {
                Modal { title: "New User", on_close: move |_| create_open.set(false),
                    UserForm {
                        name: form_name,
                        email: form_email,
                        role: form_role,
                        submit_label: "Create User",
                        on_submit: move |_| submit_create(()),
                        on_cancel: move |_| create_open.set(false),
                    }
                }
            }
            if editing.read().is_some() {
                Modal { title: "Edit User", on_close: move |_| editing.set(None),
                    UserForm {
                        name: form_name,
                        email: form_email,
                        role: form_role,
                        submit_label: "Save Changes",
                        on_submit: move |_| submit_edit(()),
                        on_cancel: move |_| editing.set(None),
                    }
                }
            }
            if let Some(target) = deleting.read().clone() {
                Modal { title: "Delete User", on_close: move |_| deleting.set(None),
                    p { class: "meta", "Delete {target.name}? This cannot be undone." }
                    div { class: "actions",
                        button { class: "btn btn-danger", onclick: move |_| submit_delete(()), "Confirm" }
                        button { class: "btn btn-ghost", onclick: move |_| deleting.set(None), "Cancel" }
                    }
                }
            }
        }
    }
}

#[component]
fn UserForm(
    name: Signal<String>,
    email: Signal<String>,
    role: Signal<String>,
    submit_label: String,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut name = name;
    let mut email = email;
    let mut role = role;
    rsx! {
        div { class: "form",
            label { class: "field-label", "Name *" }
            input { class: "text", r#type: "text", placeholder: "Full name",
                value: "{name.read()}", oninput: move |e| name.set(e.value()) }

            label { class: "field-label", "Email *" }
            input { class: "text", r#type: "email", placeholder: "name@example.com",
                value: "{email.read()}", oninput: move |e| email.set(e.value()) }

            label { class: "field-label", "Role" }
            select { class: "text", value: "{role.read()}",
                onchange: move |e| role.set(e.value()),
                for r in [Role::Admin, Role::ProjectManager, Role::Member] {
                    option { key: "role-{r.as_str()}", value: "{r.as_str()}", "{r.label()}" }
                }
            }

            div { class: "actions",
                button { class: "btn btn-primary", onclick: move |_| on_submit.call(()), "{submit_label}" }
                button { class: "btn btn-ghost", onclick: move |_| on_cancel.call(()), "Cancel" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_form_requires_name_and_email() {
        assert!(matches!(
            validate_account("", "ava@taskflow.dev"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            validate_account("Ava Torres", ""),
            Err(Error::Validation(_))
        ));
        assert!(validate_account("Ava Torres", "ava@taskflow.dev").is_ok());
    }
}
