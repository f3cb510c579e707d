use std::sync::Arc;

use dioxus::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::models::User;
use crate::pages::{Dashboard, Login, ProjectDetail, Projects, Tasks, Users};
use crate::services::Services;
use crate::session::Session;
use crate::state::{FlashKind, FlashState};
use crate::store::{HttpStore, MemoryStore, RecordStore};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(Shell)]
    #[route("/")]
    Dashboard {},
    #[route("/projects")]
    Projects {},
    #[route("/projects/:id")]
    ProjectDetail { id: u64 },
    #[route("/tasks")]
    Tasks {},
    #[route("/users")]
    Users {},
}

fn build_store() -> Arc<dyn RecordStore> {
    if std::env::var("TASKFLOW_DEMO").is_ok() {
        tracing::info!("using in-memory demo store");
        Arc::new(MemoryStore::with_demo_data())
    } else {
        let base = std::env::var("TASKFLOW_API_URL")
            .unwrap_or_else(|_| "http://localhost:4000/api".to_string());
        tracing::info!(%base, "using remote record store");
        Arc::new(HttpStore::new(base))
    }
}

#[component]
pub fn App() -> Element {
    let user = use_signal(|| Option::<User>::None);
    let msg = use_signal(|| Option::<(FlashKind, String)>::None);

    use_context_provider(|| Services::new(build_store()));
    use_context_provider(|| Session { user });
    use_context_provider(|| FlashState { msg });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "shell",
            Sidebar {}
            main { class: "main", Outlet::<Route> {} }
            FlashToast {}
        }
    }
}

#[component]
fn FlashToast() -> Element {
    let flash = use_context::<FlashState>();
    let current = flash.msg.read().clone();
    let Some((kind, text)) = current else {
        return rsx! {};
    };
    let class = match kind {
        FlashKind::Success => "toast toast-success",
        FlashKind::Error => "toast toast-error",
    };
    rsx! {
        div { class: "{class}",
            span { "{text}" }
            button { class: "toast-close", onclick: move |_| flash.clear(), "✕" }
        }
    }
}
