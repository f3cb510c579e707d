use dioxus::prelude::*;

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading", div { class: "spinner" } }
    }
}

#[component]
pub fn Empty(title: String, message: String) -> Element {
    rsx! {
        div { class: "card empty",
            h3 { class: "title", "{title}" }
            p { class: "meta", "{message}" }
        }
    }
}

#[component]
pub fn ErrorView(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "card error-view",
            h3 { class: "title", "Something went wrong" }
            p { class: "meta", "{message}" }
            button { class: "btn btn-primary", onclick: move |_| on_retry.call(()), "Retry" }
        }
    }
}
