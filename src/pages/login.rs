use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;

use crate::components::avatar::Avatar;
use crate::components::badges::RoleBadge;
use crate::components::ui::{Empty, Loading};
use crate::services::Services;
use crate::session::Session;
use crate::Route;

/// Identity is supplied by an external provider in production; this screen
/// stands in for it by letting you continue as any stored account. The rest
/// of the app only ever consumes `{id, role}` from the session.
#[component]
pub fn Login() -> Element {
    let services = use_context::<Services>();
    let session = use_context::<Session>();
    let nav = use_navigator();

    let accounts = use_resource(move || {
        let services = services.clone();
        async move { services.users.get_all().await }
    });

    rsx! {
        div { class: "login",
            div { class: "card login-card",
                h1 { class: "brand", "TaskFlow" }
                p { class: "meta", "Sign in to manage your projects and tasks." }
                match &*accounts.read_unchecked() {
                    None => rsx! { Loading {} },
                    Some(users) if users.is_empty() => rsx! {
                        Empty {
                            title: "No accounts available",
                            message: "The record store returned no users to sign in with.",
                        }
                    },
                    Some(users) => rsx! {
                        ul { class: "list",
                            for user in users.iter().cloned() {
                                li { key: "account-{user.id}", class: "list-item",
                                    Avatar { src: user.avatar.clone(), alt: user.name.clone(), small: true }
                                    div { class: "content",
                                        div { class: "item-title", "{user.name}" }
                                        RoleBadge { role: user.role }
                                    }
                                    div { class: "actions",
                                        button {
                                            class: "btn btn-primary",
                                            onclick: move |_| {
                                                let mut current = session.user;
                                                current.set(Some(user.clone()));
                                                nav.push(Route::Dashboard {});
                                            },
                                            "Continue"
                                        }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
