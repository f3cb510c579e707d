use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;

use crate::components::avatar::Avatar;
use crate::components::badges::RoleBadge;
use crate::session::Session;
use crate::visibility::can_manage_users;
use crate::Route;

#[component]
pub fn Sidebar() -> Element {
    let session = use_context::<Session>();
    let nav = use_navigator();
    let user = session.user.read().clone();

    let sign_out = move |_| {
        let mut current = session.user;
        current.set(None);
        nav.push(Route::Login {});
    };

    rsx! {
        aside { class: "sidebar",
            h1 { class: "brand", "TaskFlow" }
            nav { class: "nav",
                Link { class: "nav-item", to: Route::Dashboard {}, "Dashboard" }
                Link { class: "nav-item", to: Route::Projects {}, "Projects" }
                Link { class: "nav-item", to: Route::Tasks {}, "Tasks" }
                if user.as_ref().is_some_and(|u| can_manage_users(u.role)) {
                    Link { class: "nav-item", to: Route::Users {}, "Users" }
                }
            }
            if let Some(u) = user {
                div { class: "sidebar-user",
                    Avatar { src: u.avatar.clone(), alt: u.name.clone(), small: true }
                    div { class: "sidebar-user-meta",
                        span { class: "item-title", "{u.name}" }
                        RoleBadge { role: u.role }
                    }
                    button { class: "btn btn-ghost", onclick: sign_out, "Sign out" }
                }
            }
        }
    }
}
