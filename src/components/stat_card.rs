use dioxus::prelude::*;

#[component]
pub fn StatCard(title: String, value: String, icon: String) -> Element {
    rsx! {
        div { class: "card stat-card",
            div { class: "stat-icon", "{icon}" }
            div { class: "stat-body",
                div { class: "stat-value", "{value}" }
                div { class: "stat-title", "{title}" }
            }
        }
    }
}
